mod summary;
pub mod views;

pub(crate) use summary::pattern_view;
pub use views::{DiagnosticReport, DimensionResultView, PatternView, ReflectionView};
