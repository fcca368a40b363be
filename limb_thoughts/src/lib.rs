//! # Limb Thoughts
//!
//! Grants and retracts mood memories when a character loses a limb, receives
//! a replacement device, or has one removed. This crate reads the
//! `health_model` state and never owns any of it.
//!
//! ## Core Components
//!
//! - **classifier**: body part categories and replacement tiers
//! - **ledger**: live counts over a character's health record
//! - **catalog**: thought identifiers per event, category, tier and count
//! - **adjuster**: belief and trait adjustments to mood power
//! - **engine**: the orchestrator, also usable as a `HealthListener`
//!
//! ## Usage
//!
//! ```
//! use health_model::{BodyPart, Character, DefDatabase, HealthCondition, WorldState};
//! use limb_thoughts::ThoughtEngine;
//!
//! let defs = DefDatabase::from_toml_str(
//!     r#"
//!     [[thoughts]]
//!     def_name = "IMissMyLimb_ColonistLostLeg"
//!
//!     [[thoughts.stages]]
//!     label = "lost a leg"
//!     base_mood_effect = -10.0
//!     "#,
//! )
//! .unwrap();
//!
//! let mut world = WorldState::new();
//! world.subscribe(ThoughtEngine::new(defs));
//!
//! let id = world.add_character(Character::new("Engie"));
//! world
//!     .add_condition(id, HealthCondition::missing(BodyPart::new("Leg", "left leg")))
//!     .unwrap();
//!
//! let memories = world.get_character(id).unwrap().memories().unwrap();
//! assert!(memories.has_memory_of_def("IMissMyLimb_ColonistLostLeg"));
//! ```

pub mod adjuster;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;

pub use adjuster::*;
pub use catalog::*;
pub use classifier::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use ledger::*;
