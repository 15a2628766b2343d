//! # tokver
//!
//! Tokenized version parsing and comparison.
//!
//! Versions take the form `MAJOR.MINOR.MICRO_QUALIFIER`, where the qualifier
//! is an optional trailing tag and a terminal `+` wildcard stands for "any
//! value" in range-matching contexts layered on top of this crate.
//!
//! ```
//! use tokver::TokenizedVersion;
//!
//! let a: TokenizedVersion = "1.8.0_152".parse().unwrap();
//! let b: TokenizedVersion = "1.8.0_161".parse().unwrap();
//! assert!(a < b);
//! assert_eq!(a.to_string(), "1.8.0_152");
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

#[macro_use]
extern crate tracing;

mod collation;

mod error;
pub use error::{Component, ParseError};

mod version;
pub use version::{TokenizedVersion, WILDCARD};
