//! Domain models for the Nutrition Tracker

mod entry;
mod food;
mod goals;
mod meal;
mod nutrition;

pub use entry::*;
pub use food::*;
pub use goals::*;
pub use meal::*;
pub use nutrition::*;
