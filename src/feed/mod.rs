//! # Feed
//!
//! The data side of postdeck: the `Post` wire type, the `FetchError`
//! taxonomy, and the `PostSource` trait with its HTTP implementation.

pub mod client;
pub mod types;

pub use client::{DEFAULT_ENDPOINT, HttpPostSource, PostSource};
pub use types::{FetchError, Post};
