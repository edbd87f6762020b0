//! Property tests for shipctl value objects.
//!
//! Properties use randomized input generation to protect the parsing
//! invariants: canonical forms are stable under re-parsing, and inputs
//! outside the accepted shapes are always rejected.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/value_objects.rs"]
mod value_objects;
