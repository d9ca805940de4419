//! dromb-containers: small value types built around operator overloading.
//!
//! The centerpiece is [`math::VectorULong`], a fixed-length `u64` vector with
//! element-wise arithmetic, bitwise, shift and comparison operators, a
//! per-instance error code for out-of-range access, and a process-wide
//! live-instance counter. [`math::MatrixULong`] and [`rhombus::Rhombus`] are
//! simpler siblings that reuse the same conventions.
//!
//! Everything here is single-threaded and in-memory.
pub mod config;
pub mod error;
pub mod io;
pub mod lifecycle;
pub mod math;
pub mod rhombus;
