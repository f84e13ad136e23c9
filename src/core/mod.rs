//! Core components for curve discovery and registration.
//!
//! This module contains the native engine boundary, the extension curve
//! machinery built on top of it, and error handling.

// Native engine boundary
pub mod engine;

// Extension curves
pub mod curves;

// Constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, Result, EngineError};
pub use self::constants::VERSION;
