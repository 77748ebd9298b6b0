//! Request extractors.
//!
//! Requires the `http` feature.

mod datastar;
pub use datastar::{ReadSignals, ReadSignalsError};
