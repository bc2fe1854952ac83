//! Board module tests.
//!
//! Split by category:
//! - `movegen.rs` - pseudo-legal destination generation and the attack scan
//! - `castling.rs` - castling preconditions and application
//! - `en_passant.rs` - en passant window and victim removal
//! - `proptest.rs` - property-based tests

mod castling;
mod proptest;

use super::types::Square;

pub(crate) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}
