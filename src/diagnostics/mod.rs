//! Run reports produced by the demo tools.
//!
//! `ConvolveReport` and `HalftoneReport` describe one invocation each:
//! input and output shapes, the parameters used and a `TimingBreakdown`.

pub mod report;
pub mod timing;

pub use report::{white_fraction, ConvolveReport, HalftoneReport, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
