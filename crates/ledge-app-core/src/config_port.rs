// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Prefs port shared by Ledge front ends (CLI runner, future viewers).

use crate::config::{ConfigError, ConfigService, ConfigStore};
use crate::prefs::{GamePrefs, PREFS_KEY};

/// Config-facing port for loading/saving game preferences.
pub trait ConfigPort {
    /// Load game preferences; `Ok(None)` when nothing has been saved yet.
    fn load_prefs(&self) -> Result<Option<GamePrefs>, ConfigError>;
    /// Persist game preferences.
    fn save_prefs(&self, prefs: &GamePrefs) -> Result<(), ConfigError>;

    /// Saved preferences, or the defaults when none exist.
    fn load_prefs_or_default(&self) -> Result<GamePrefs, ConfigError> {
        Ok(self.load_prefs()?.unwrap_or_default())
    }
}

impl<S: ConfigStore> ConfigPort for ConfigService<S> {
    fn load_prefs(&self) -> Result<Option<GamePrefs>, ConfigError> {
        self.load(PREFS_KEY)
    }

    fn save_prefs(&self, prefs: &GamePrefs) -> Result<(), ConfigError> {
        self.save(PREFS_KEY, prefs)
    }
}
