//! Core library for the in-memory todo console application
//!
//! This crate contains the core business logic, including:
//! - The task model and its validation rules
//! - The in-memory task store and its CRUD operations
//!
//! The store is process-lifetime only: it starts empty and everything in
//! it is discarded when the owning process exits.

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
