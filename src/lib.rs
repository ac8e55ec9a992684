//! # Copy Semantics
//!
//! Shallow versus deep copies of a record whose map and vector fields are
//! reference-like.
//!
//! - A derived `Clone` on [`Cat`] copies its scalars but shares the storage
//!   behind `eye` and `leg.length` (see [`Shared`]).
//! - [`DeepCopier`] encodes the record with a [`Codec`] and decodes a fresh
//!   one, so the copy owns everything it can reach.
//!
//! ## Running the demo
//!
//! ```bash
//! cargo run --bin copy-semantics
//! cargo run --bin copy-semantics -- --codec json --no-addresses
//! cargo run --bin copy-semantics -- --config copy-semantics.toml
//! ```
//!
//! ## Key Dependencies
//!
//! - `serde` - Derive macros for the record types
//! - `rmp-serde`, `bincode`, `serde_json` - Round-trip codecs
//! - `thiserror` - Error enums
//! - `toml` - Demo configuration
//! - `clap` - Command line flags
//! - `colored` - Console traces
//! - `tracing` - Diagnostics from the copier and demos

pub mod codec;
pub mod config;
pub mod copier;
pub mod demo;
pub mod error;
mod finite;
pub mod record;
pub mod report;
pub mod shared;

pub use codec::{BincodeCodec, Codec, CodecKind, JsonCodec, MessagePackCodec};
pub use config::{CliArgs, DemoConfig};
pub use copier::{deep_copy, deep_copy_of, DeepCopier};
pub use error::{ConfigError, CopyError};
pub use record::{Cat, Color, Eye, Legs, Tail};
pub use report::{ConsoleReporter, RecordingReporter, Reporter};
pub use shared::Shared;
