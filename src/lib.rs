//! Library entry for the harness generator, used by the binary and tests.

pub mod config;
pub mod error;
pub mod harness;
pub mod message;

pub use error::{GenError, GenResult};
pub use harness::{render, HarnessGenerator};
pub use message::MessageSpec;
