use crate::halftone::ScreenAngle;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct HalftoneToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// `"orthogonal"` (0°, default) or `"diagonal"` (45°).
    #[serde(default)]
    pub angle: ScreenAngle,
    pub output: HalftoneOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct HalftoneOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<HalftoneToolConfig, String> {
    super::read_json_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_defaults_to_orthogonal() {
        let cfg: HalftoneToolConfig =
            serde_json::from_str(r#"{ "input": "a.png", "output": { "image": "b.png" } }"#)
                .unwrap();
        assert_eq!(cfg.angle, ScreenAngle::Orthogonal);
    }

    #[test]
    fn parses_diagonal() {
        let cfg: HalftoneToolConfig = serde_json::from_str(
            r#"{ "input": "a.png", "angle": "diagonal", "output": { "image": "b.png" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.angle, ScreenAngle::Diagonal);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/halftone.json")).unwrap_err();
        assert!(err.contains("/nonexistent/halftone.json"), "{err}");
    }
}
