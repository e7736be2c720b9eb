//! I/O module
//!
//! Handles the CSV dialects on both sides of the conversion.
//!
//! # Components
//!
//! - `mint_format` - Mint account balance export parsing
//! - `monarch_format` - Monarch output formatting (dates, amounts, writers)

pub mod mint_format;
pub mod monarch_format;

pub use mint_format::parse_mint_csv;
pub use monarch_format::{format_amount, format_date};
