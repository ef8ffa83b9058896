//! Task module
//!
//! This module contains task-related types and logic.

mod model;
mod store;

pub use model::*;
pub use store::TaskStore;
