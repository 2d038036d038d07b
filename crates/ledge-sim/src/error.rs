// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_app_core::prefs::PrefsError;
use ledge_geom::GeomError;
use thiserror::Error;

use crate::objects::ObjectId;

/// Errors raised while building or stepping a [`crate::World`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A collision-core computation failed.
    #[error(transparent)]
    Geom(#[from] GeomError),
    /// No object with this id exists in the world.
    #[error("unknown object {0}")]
    UnknownObject(ObjectId),
    /// A pressure plate links to an object that is not a bridge.
    #[error("trigger {trigger} links to {target}, which is not a bridge")]
    NotABridge {
        /// Linking trigger.
        trigger: ObjectId,
        /// Object named in the link.
        target: ObjectId,
    },
    /// Physics preferences failed validation.
    #[error("invalid prefs: {0}")]
    InvalidPrefs(#[from] PrefsError),
}
