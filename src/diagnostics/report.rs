//! Serializable summaries written by the demo tools.
use super::timing::TimingBreakdown;
use crate::conv::{ConvOptions, Kernel};
use crate::halftone::{ScreenAngle, WHITE};
use crate::image::{ImageBufU8, ImageU8};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl InputDescriptor {
    pub fn from_view(img: &ImageU8<'_>) -> Self {
        Self {
            width: img.w,
            height: img.h,
            channels: img.channels.count(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvolveReport {
    pub input: InputDescriptor,
    pub output: InputDescriptor,
    pub kernel: Kernel,
    pub options: ConvOptions,
    /// Largest sample difference against the zero-border reference, when
    /// the comparison was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_max_diff: Option<u8>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HalftoneReport {
    pub input: InputDescriptor,
    pub output: InputDescriptor,
    pub angle: ScreenAngle,
    pub degrees: u32,
    /// Share of white output pixels, in `[0, 1]`.
    pub white_fraction: f64,
    pub timings: TimingBreakdown,
}

/// Share of samples equal to 255 in a binary image; 0 for an empty image.
pub fn white_fraction(img: &ImageBufU8) -> f64 {
    if img.data.is_empty() {
        return 0.0;
    }
    let white = img.data.iter().filter(|&&v| v == WHITE).count();
    white as f64 / img.data.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Channels;

    #[test]
    fn halftone_report_uses_camel_case_keys() {
        let out = ImageBufU8::from_raw(2, 1, Channels::Gray, vec![0, 255]).unwrap();
        let report = HalftoneReport {
            input: InputDescriptor {
                width: 1,
                height: 1,
                channels: 3,
            },
            output: InputDescriptor::from_view(&out.as_view()),
            angle: ScreenAngle::Diagonal,
            degrees: 45,
            white_fraction: white_fraction(&out),
            timings: TimingBreakdown::with_total(1.5),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["angle"], "diagonal");
        assert_eq!(json["whiteFraction"], 0.5);
        assert_eq!(json["timings"]["totalMs"], 1.5);
        assert_eq!(json["output"]["width"], 2);
    }

    #[test]
    fn convolve_report_serializes_kernel_rows() {
        let report = ConvolveReport {
            input: InputDescriptor {
                width: 4,
                height: 4,
                channels: 1,
            },
            output: InputDescriptor {
                width: 4,
                height: 4,
                channels: 1,
            },
            kernel: Kernel::laplacian(),
            options: ConvOptions::default(),
            reference_max_diff: None,
            timings: TimingBreakdown::default(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kernel"][1], serde_json::json!([1, -4, 1]));
        assert_eq!(json["options"]["pad"], true);
        assert!(json.get("referenceMaxDiff").is_none());
    }
}
