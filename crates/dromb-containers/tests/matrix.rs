//! Integration tests for MatrixULong.

use std::io::Cursor;

use dromb_containers::error::VectorError;
use dromb_containers::math::MatrixULong;

#[test]
fn default_is_one_by_one_zero() {
    let m = MatrixULong::new();
    assert_eq!(m.shape(), (1, 1));
    assert_eq!(m.get(0, 0), 0);
}

#[test]
fn filled_sets_every_cell() {
    let m = MatrixULong::filled(2, 3, 5).unwrap();
    assert_eq!(m.nrows(), 2);
    assert_eq!(m.ncols(), 3);
    assert!(m.as_slice().iter().all(|&v| v == 5));
}

#[test]
fn zero_dimension_is_invalid_argument() {
    assert!(matches!(
        MatrixULong::with_shape(0, 3),
        Err(VectorError::InvalidArgument(_))
    ));
    assert!(MatrixULong::filled(2, 0, 1).is_err());
}

#[test]
fn oversized_shape_is_invalid_argument() {
    assert!(matches!(
        MatrixULong::filled(usize::MAX, 2, 0),
        Err(VectorError::InvalidArgument(_))
    ));
    assert!(matches!(
        MatrixULong::with_shape(1 << (usize::BITS / 2), 1 << (usize::BITS / 2)),
        Err(VectorError::InvalidArgument(_))
    ));
}

#[test]
fn two_dimensional_indexing_soft_fails() {
    let mut m = MatrixULong::with_shape(2, 2).unwrap();
    m.set(1, 0, 9);
    assert_eq!(m.error_code(), 0);
    assert_eq!(m.get(1, 0), 9);

    m.set(2, 0, 1);
    assert_eq!(m.error_code(), -1);
    assert_eq!(m.get(0, 2), 0);
    assert_eq!(m.error_code(), -1);
    assert_eq!(m.get(0, 0), 0);
    assert_eq!(m.error_code(), 0);
}

#[test]
fn flat_index_is_row_major() {
    let mut m = MatrixULong::with_shape(2, 3).unwrap();
    m.set_flat(4, 7);
    assert_eq!(m.get(1, 1), 7);
    assert_eq!(m.get_flat(4), 7);
    assert_eq!(m.get_flat(6), 0);
    assert_eq!(m.error_code(), -1);
    m.set_flat(6, 1);
    assert_eq!(m.error_code(), -1);
    assert!(m.as_slice().iter().filter(|&&v| v == 1).count() == 0);
}

#[test]
fn assign_and_display() {
    let mut m = MatrixULong::filled(2, 2, 3).unwrap();
    m.get(9, 9);
    m.assign(4);
    assert_eq!(m.error_code(), 0);
    assert_eq!(m.to_string(), "4 4\n4 4\n");
    assert_eq!(m.row_slice(1), Some(&[4, 4][..]));
    assert_eq!(m.row_slice(2), None);
}

#[test]
fn read_elements_fills_row_by_row() {
    let mut m = MatrixULong::with_shape(2, 2).unwrap();
    let mut input = Cursor::new("1\n2\nx\n4\n");
    m.read_elements(&mut input).unwrap();
    assert_eq!(m.as_slice(), &[1, 2, 0, 4]);
    assert_eq!(m.error_code(), -1);
}

#[test]
fn clone_and_equality() {
    let m = MatrixULong::filled(1, 2, 8).unwrap();
    let copy = m.clone();
    assert_eq!(m, copy);
    assert_ne!(m, MatrixULong::filled(2, 1, 8).unwrap());
}

#[test]
fn error_code_is_writable() {
    let m = MatrixULong::new();
    m.set_error_code(-1);
    assert_eq!(m.error_code(), -1);
    assert_eq!(m.get(0, 0), 0);
    assert_eq!(m.error_code(), 0);
}
