// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::sync::Arc;

use ledge_geom::{BoundingBox, GeomError};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::objects::ObjectKind;

/// Model-space bounds shared by every instance of an object kind.
///
/// Each kind's box is built from its mesh the first time an instance asks for
/// it; later instances receive the same [`Arc`].
#[derive(Debug, Default)]
pub struct BoundsCache {
    boxes: FxHashMap<ObjectKind, Arc<BoundingBox>>,
}

impl BoundsCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared bounds for `kind`, building them on first use.
    pub fn get(&mut self, kind: ObjectKind) -> Result<Arc<BoundingBox>, GeomError> {
        if let Some(model) = self.boxes.get(&kind) {
            return Ok(Arc::clone(model));
        }
        let model = Arc::new(BoundingBox::from_vertices(kind.mesh())?);
        debug!(%kind, min = ?model.min(), max = ?model.max(), "built model bounds");
        self.boxes.insert(kind, Arc::clone(&model));
        Ok(model)
    }

    /// Whether `kind` has been built.
    pub fn contains(&self, kind: ObjectKind) -> bool {
        self.boxes.contains_key(&kind)
    }

    /// Number of kinds built so far.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True before any kind has been built.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
