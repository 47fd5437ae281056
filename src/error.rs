//! Error types and result handling for kafka-clients.
//!
//! This module defines the main error type [`Error`] and a convenience
//! [`Result`] type alias used throughout the crate.
//!
//! # Example
//!
//! ```rust
//! use kafka_clients::{Error, Result};
//! use rdkafka::error::KafkaError;
//!
//! fn commit() -> Result<()> {
//!     Err(Error::Kafka(KafkaError::Canceled))
//! }
//!
//! match commit() {
//!     Ok(()) => println!("Committed"),
//!     Err(Error::Kafka(e)) => eprintln!("Kafka error: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for kafka-clients operations.
///
/// Transport errors are carried as-is inside [`Error::Kafka`] so callers can
/// still match on the underlying [`rdkafka::error::KafkaError`].
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file or environment could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Kafka client creation, offset store or commit error.
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),
}

impl Error {
    /// Returns the underlying Kafka error, if this is one.
    pub fn kafka_error(&self) -> Option<&rdkafka::error::KafkaError> {
        match self {
            Error::Kafka(e) => Some(e),
            _ => None,
        }
    }
}

/// A convenient Result type alias for kafka-clients operations.
///
/// This is equivalent to `std::result::Result<T, kafka_clients::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
