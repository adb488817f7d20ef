//! Shared types and models for the Nutrition Tracker
//!
//! This crate contains the food, entry and daily nutrition model together with
//! the pure aggregation logic shared by the client, the CLI and the browser
//! front end (via WASM).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
