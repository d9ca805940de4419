//! Console driver for the dromb container types.
//!
//! Every command writes to a caller-supplied `Write` so the binary and the
//! tests share the same code paths.
pub mod commands;
pub mod demo;
pub mod util;
