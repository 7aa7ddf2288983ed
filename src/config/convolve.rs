use crate::conv::{ConvOptions, Kernel};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ConvolveToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    pub kernel: KernelConfig,
    #[serde(default)]
    pub options: ConvOptions,
    /// Also run the zero-border reference and report the largest difference.
    #[serde(default)]
    pub compare_reference: bool,
    pub output: ConvolveOutputConfig,
}

/// Kernel selection: a named preset or explicit rows.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KernelConfig {
    Identity {
        #[serde(default = "default_size")]
        size: usize,
    },
    /// Unnormalized box sum; saturates quickly on bright input.
    Box {
        #[serde(default = "default_size")]
        size: usize,
    },
    Sharpen,
    Laplacian,
    SobelX,
    SobelY,
    Emboss,
    Custom {
        rows: Kernel,
    },
}

fn default_size() -> usize {
    3
}

impl KernelConfig {
    pub fn resolve(&self) -> Result<Kernel, String> {
        let kernel = match self {
            Self::Identity { size } => Kernel::identity(*size),
            Self::Box { size } => Kernel::ones(*size),
            Self::Sharpen => Ok(Kernel::sharpen()),
            Self::Laplacian => Ok(Kernel::laplacian()),
            Self::SobelX => Ok(Kernel::sobel_x()),
            Self::SobelY => Ok(Kernel::sobel_y()),
            Self::Emboss => Ok(Kernel::emboss()),
            Self::Custom { rows } => Ok(rows.clone()),
        };
        kernel.map_err(|e| format!("Invalid kernel {self:?}: {e}"))
    }
}

#[derive(Debug, Deserialize)]
pub struct ConvolveOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ConvolveToolConfig, String> {
    super::read_json_config(path)
}
