//! # railway
//!
//! A two-variant outcome type for railway-oriented error handling.
//!
//! ## Overview
//!
//! An [`Outcome<T, E>`](outcome::Outcome) is either `Ok(T)` or `Err(E)`.
//! Failures are ordinary values: every transformation step either advances a
//! success or carries the failure, unchanged, to the end of the chain. The
//! crate provides:
//!
//! - **Outcome**: construction, transformation (`map`, `map_err`, `flat_map`)
//!   and termination (`fold`, `unwrap`, `unwrap_or`, `unwrap_or_else`,
//!   `unwrap_err`, `to_serializable`)
//! - **Collection combinators**: `all`, `all_tuple`, `any`, `partition`
//! - **Adapters**: panics, fallible calls, futures and optional values
//!   converted into outcomes
//!
//! ## Feature Flags
//!
//! - `adapter`: Synchronous and optional-value adapters (default)
//! - `async`: Asynchronous adapters (default)
//! - `serde`: `Serialize`/`Deserialize` through the tagged record
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! fn parse_port(input: &str) -> Outcome<u16, String> {
//!     Outcome::from(input.parse::<u16>()).map_err(|error| format!("{input}: {error}"))
//! }
//!
//! let ports = all(["80", "443"].map(parse_port));
//! assert_eq!(ports, Outcome::Ok(vec![80, 443]));
//!
//! let ports = all(["80", "http"].map(parse_port));
//! assert!(ports.is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::outcome::*;

    pub use crate::collect::*;

    #[cfg(feature = "adapter")]
    pub use crate::adapter::*;
}

pub mod outcome;

pub mod collect;

#[cfg(feature = "adapter")]
pub mod adapter;
