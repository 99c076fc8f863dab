//! Common utilities for DDS Preview.
//!
//! This crate provides the foundational reading primitives used by the
//! texture crates:
//!
//! - [`ByteStream`] - Cursor over a borrowed byte slice with zerocopy struct reads
//! - [`Error`] - End-of-stream and magic mismatch errors

mod error;
mod stream;

pub use error::{Error, Result};
pub use stream::ByteStream;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};
