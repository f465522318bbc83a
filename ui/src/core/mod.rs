//! Presentation core: pure, platform-agnostic logic shared by every view.

pub mod format;
pub mod heatmap;
pub mod sort;
