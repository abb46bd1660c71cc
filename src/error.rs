//! Error types for the janken simulator.

use thiserror::Error;

/// Errors produced when constructing a hand.
///
/// Internal draws always stay in range, so seeing this error means a caller
/// passed an index it made up itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("hand index out of range: {0}")]
    InvalidIndex(u8),
}
