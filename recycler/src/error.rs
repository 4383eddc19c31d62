use thiserror::Error;

use crate::Axis;

/// Configuration problems detected when a [`crate::Recycler`] is created.
///
/// These are programmer errors. The engine reports them once and then behaves as if the list
/// were empty instead of panicking.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SetupError {
    #[error("no viewport size was configured")]
    MissingViewport,

    #[error("no default view template was configured")]
    MissingDefaultTemplate,

    #[error("cell step along {axis:?} must be positive, got {step}")]
    InvalidCellExtent { axis: Axis, step: f32 },

    #[error("grid limit must be at least 1")]
    InvalidLimit,
}
