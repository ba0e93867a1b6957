//! HARPI core: turns HTTP Archive logs into sequence diagrams and, through an
//! external transformer, API specifications.

pub mod archive;
pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod pipeline;
pub mod render;
pub mod sequence;

pub use error::{ErrorKind, HarpiError};
