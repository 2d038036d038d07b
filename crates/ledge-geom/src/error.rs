// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Contract violations detected by the collision core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A bounding box was requested for a mesh with no vertices.
    #[error("bounding box requires at least one vertex")]
    EmptyVertices,
    /// A mesh vertex contained NaN or infinity.
    #[error("vertex {index} is not finite")]
    NonFiniteVertex {
        /// Position of the offending vertex in the input slice.
        index: usize,
    },
    /// The model-to-world transform contained NaN or infinity.
    #[error("transform contains non-finite values")]
    NonFiniteTransform,
    /// AABB corners were not finite.
    #[error("AABB corners must be finite: min {min:?}, max {max:?}")]
    NonFiniteBounds {
        /// Supplied minimum corner.
        min: [f32; 3],
        /// Supplied maximum corner.
        max: [f32; 3],
    },
    /// AABB minimum exceeded the maximum on at least one axis.
    #[error("invalid AABB: min {min:?} exceeds max {max:?}")]
    InvertedBox {
        /// Supplied minimum corner.
        min: [f32; 3],
        /// Supplied maximum corner.
        max: [f32; 3],
    },
    /// A sweep was requested with a zero or non-finite displacement.
    #[error("sweep requires a finite, non-zero displacement (got {displacement:?})")]
    DegenerateSweep {
        /// Displacement handed to the sweep.
        displacement: [f32; 3],
    },
}
