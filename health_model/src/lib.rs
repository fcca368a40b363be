//! # Health Model
//!
//! The host-side data model - characters, health conditions, body parts and
//! the mood memories they carry. This crate holds state and definitions only;
//! the decision of which memory to grant lives in `limb_thoughts`.

pub mod defs;
pub mod entities;
pub mod error;
pub mod mechanics;
pub mod world_state;

pub use defs::*;
pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use world_state::*;
