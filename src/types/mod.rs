//! Types module
//!
//! Contains core data structures used throughout the converter.
//! This module organizes types into logical submodules:
//! - `record`: Balance observations parsed from Mint
//! - `transaction`: Balance-adjustment transactions synthesized for Monarch
//! - `error`: Error types for the converter

pub mod error;
pub mod record;
pub mod transaction;

pub use error::ConvertError;
pub use record::{SourceKind, ValueRecord};
pub use transaction::MonarchTransaction;
