//! Testing utilities
//!
//! Factories for building token records by hand, plus a fixed in-memory
//! `TokenSource` so filter stages can be unit-tested without driving a real
//! scanner underneath.

pub mod factories;
