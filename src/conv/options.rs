use serde::{Deserialize, Serialize};

/// Options controlling `convolve`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvOptions {
    /// Extend the source by `rows / 2` and `cols / 2` zero samples on each
    /// side so every pixel is filtered. When false only pixels whose full
    /// kernel footprint fits are filtered; the outer band keeps the source
    /// values.
    pub pad: bool,
    /// Reduce BGR/BGRA input to one luma channel before filtering.
    pub grayscale: bool,
}

impl Default for ConvOptions {
    fn default() -> Self {
        Self {
            pad: true,
            grayscale: false,
        }
    }
}

impl ConvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }

    pub fn with_grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }
}
