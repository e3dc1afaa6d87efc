//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `attacks.rs` - Attack and check detection
//! - `moves.rs` - Per-piece move validation
//! - `placement.rs` - Placement, notation, and display
//! - `proptest.rs` - Property-based tests

mod attacks;
