//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task ID {0} not found")]
    TaskNotFound(u64),

    #[error("Invalid input: {0}")]
    Validation(String),
}
