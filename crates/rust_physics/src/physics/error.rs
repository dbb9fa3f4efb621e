//! Physics error types

use crate::foundation::collections::BodyHandle;
use thiserror::Error;

/// Errors raised by collision geometry and the physics manager
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A zero-length axis was used for projection or separation testing
    #[error("degenerate axis: cannot project onto a zero-length vector")]
    DegenerateAxis,

    /// Not enough vertices to derive a bounding shape
    #[error("insufficient geometry: need at least {required} vertices, got {found}")]
    InsufficientGeometry {
        /// Minimum vertex count
        required: usize,
        /// Vertices supplied
        found: usize,
    },

    /// The handle does not refer to a registered body
    #[error("unknown body handle {0:?}")]
    UnknownBody(BodyHandle),
}
