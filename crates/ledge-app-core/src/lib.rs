// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Ledge (config storage, physics prefs).
//! Keeps the simulation and its front ends free of storage details.

pub mod config;
pub mod config_port;
pub mod prefs;
