// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared pieces for the hunger tools: the zone/district data model, the
//! greeting writer used by the CLI, and the embedded config service.

pub mod config;
pub mod error;
pub mod greeting;
pub mod model;

pub use config::{ConfigService, ConfigStore, EmbeddedConfigStore, GreetingConfig, GREETING_KEY};
pub use error::HungerError;
pub use greeting::{write_greeting, GREETING};
pub use model::{District, Metrics, Zone};
