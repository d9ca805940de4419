//! Fixed-size `u64` containers.
//!
//! Provides `VectorULong` (1D, with the full operator set) and
//! `MatrixULong` (2D, indexing and bulk assignment only). Both track their
//! live instances and report bad indices through an `error_code` instead
//! of panicking.
pub mod lanes;
pub mod matrix;
pub mod vector;

pub use matrix::MatrixULong;
pub use vector::VectorULong;
