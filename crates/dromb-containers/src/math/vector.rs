use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::BufRead;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Index, Mul, Not, Rem, Shl, Shr, Sub};
use std::slice::Iter;

use crate::error::VectorError;
use crate::io::read_u64_line;
use crate::lifecycle::VECTOR_COUNT;
use crate::math::lanes;

/// Shift amounts are reduced modulo the element width.
const ELEMENT_BITS: u64 = u64::BITS as u64;

/// Fixed-length vector of `u64` with element-wise operators.
///
/// The length is chosen at construction, is always at least 1 and never
/// changes. Binary operators never touch their operands; they build a new
/// vector of length `max(lhs.len(), rhs.len())`, treating missing lanes of
/// the shorter operand as 0.
///
/// Indexed access reports out-of-range indices through [`error_code`]
/// instead of panicking or returning an error:
///
/// ```
/// use dromb_containers::math::VectorULong;
///
/// let mut v = VectorULong::zeros(2).unwrap();
/// v.set(5, 1);
/// assert_eq!(v.error_code(), -1);
/// assert_eq!(v.get(1), 0);
/// assert_eq!(v.error_code(), 0);
/// ```
///
/// [`error_code`]: VectorULong::error_code
#[derive(Debug)]
pub struct VectorULong {
    data: Vec<u64>,
    error_code: Cell<i32>,
}

fn check_len(len: usize) -> Result<(), VectorError> {
    if len == 0 {
        log::debug!("rejected zero-length vector construction");
        return Err(VectorError::InvalidArgument(
            "vector size must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Division lane rule for vector divisors: `0 / 0` yields 0, any other
/// zero divisor fails.
fn divide_lane(a: u64, b: u64, op: fn(u64, u64) -> u64) -> Result<u64, VectorError> {
    match (a, b) {
        (0, 0) => {
            log::trace!("tolerating 0/0 lane");
            Ok(0)
        }
        (_, 0) => Err(VectorError::DivideByZero),
        _ => Ok(op(a, b)),
    }
}

impl VectorULong {
    /// A single zero element.
    pub fn new() -> Self {
        Self::from_raw(vec![0])
    }

    pub fn zeros(len: usize) -> Result<Self, VectorError> {
        Self::from_elem(len, 0)
    }

    pub fn from_elem(len: usize, value: u64) -> Result<Self, VectorError> {
        check_len(len)?;
        Ok(Self::from_raw(vec![value; len]))
    }

    pub fn from_vec(data: Vec<u64>) -> Result<Self, VectorError> {
        check_len(data.len())?;
        Ok(Self::from_raw(data))
    }

    /// Every constructor funnels through here so the live count sees each
    /// instance exactly once. Callers guarantee `data` is non-empty.
    fn from_raw(data: Vec<u64>) -> Self {
        debug_assert!(!data.is_empty());
        VECTOR_COUNT.acquire();
        Self {
            data,
            error_code: Cell::new(0),
        }
    }

    /// Number of vectors currently alive in the process.
    pub fn live_count() -> usize {
        VECTOR_COUNT.get()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, u64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<u64> {
        self.data.clone()
    }

    /// 0 after a successful indexed access or assign, -1 after an
    /// out-of-range access or a malformed input line.
    pub fn error_code(&self) -> i32 {
        self.error_code.get()
    }

    pub fn set_error_code(&self, code: i32) {
        self.error_code.set(code);
    }

    /// Element at `index`, or 0 with `error_code` set to -1 when out of range.
    pub fn get(&self, index: usize) -> u64 {
        match self.data.get(index) {
            Some(&value) => {
                self.error_code.set(0);
                value
            }
            None => {
                self.error_code.set(-1);
                0
            }
        }
    }

    /// Write `value` at `index`. Out of range nothing is written and
    /// `error_code` becomes -1.
    pub fn set(&mut self, index: usize, value: u64) {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                self.error_code.set(0);
            }
            None => self.error_code.set(-1),
        }
    }

    pub fn assign(&mut self, value: u64) {
        self.data.fill(value);
        self.error_code.set(0);
    }

    /// Fill every slot from consecutive lines of `reader`.
    ///
    /// A line that is not a `u64` (or is missing) stores 0 and sets
    /// `error_code` to -1; the remaining slots are still read. Only I/O
    /// errors abort the loop.
    pub fn read_elements<R: BufRead>(&mut self, reader: &mut R) -> std::io::Result<()> {
        for (index, slot) in self.data.iter_mut().enumerate() {
            let parsed = read_u64_line(reader)?;
            if parsed.is_malformed() {
                log::warn!("invalid input for element {}, storing 0", index);
                self.error_code.set(-1);
            }
            *slot = parsed.value();
        }
        Ok(())
    }

    /// The vector and its error code, one per line.
    pub fn report(&self) -> String {
        format!("Vector: {}\nError code: {}", self, self.error_code())
    }

    /// A new vector with every element plus one (wrapping).
    pub fn increment(&self) -> Self {
        self.map_lanes(|v| v.wrapping_add(1))
    }

    /// A new vector with every element minus one, stopping at 0.
    pub fn decrement(&self) -> Self {
        self.map_lanes(|v| v.saturating_sub(1))
    }

    /// True iff every element is nonzero.
    pub fn is_truthy(&self) -> bool {
        lanes::is_truthy(&self.data)
    }

    /// True iff the vector is non-empty.
    ///
    /// This is not the negation of [`is_truthy`](Self::is_truthy): a vector
    /// holding a zero is neither truthy nor "logically not".
    pub fn logical_not(&self) -> bool {
        !self.data.is_empty()
    }

    /// Equality where `None` stands for an absent vector: two absent
    /// vectors are equal, an absent and a present one never are.
    pub fn equals(lhs: Option<&Self>, rhs: Option<&Self>) -> bool {
        match (lhs, rhs) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// See [`lanes::greater_than`].
    pub fn greater_than(&self, other: &Self) -> bool {
        lanes::greater_than(&self.data, &other.data)
    }

    /// See [`lanes::greater_or_equal`].
    pub fn greater_or_equal(&self, other: &Self) -> bool {
        lanes::greater_or_equal(&self.data, &other.data)
    }

    /// `!self.greater_or_equal(other)`.
    pub fn less_than(&self, other: &Self) -> bool {
        lanes::less_than(&self.data, &other.data)
    }

    /// `!self.greater_than(other)`.
    pub fn less_or_equal(&self, other: &Self) -> bool {
        lanes::less_or_equal(&self.data, &other.data)
    }

    fn map_lanes<F>(&self, f: F) -> Self
    where
        F: FnMut(&u64) -> u64,
    {
        Self::from_raw(self.data.iter().map(f).collect())
    }

    fn zip_lanes<F>(&self, rhs: &Self, f: F) -> Self
    where
        F: FnMut(u64, u64) -> u64,
    {
        Self::from_raw(lanes::zip_padded(&self.data, &rhs.data, f))
    }

    fn divide_by(&self, rhs: &Self, op: fn(u64, u64) -> u64) -> Result<Self, VectorError> {
        let data = lanes::try_zip_padded(&self.data, &rhs.data, |a, b| divide_lane(a, b, op))?;
        Ok(Self::from_raw(data))
    }

    /// A zero scalar fails even when every dividend is 0, unlike the
    /// lane rule for vector divisors.
    fn divide_by_scalar(&self, rhs: u64, op: fn(u64, u64) -> u64) -> Result<Self, VectorError> {
        if rhs == 0 {
            return Err(VectorError::DivideByZero);
        }
        Ok(self.map_lanes(|&v| op(v, rhs)))
    }
}

impl Default for VectorULong {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for VectorULong {
    fn clone(&self) -> Self {
        let copy = Self::from_raw(self.data.clone());
        copy.error_code.set(self.error_code.get());
        copy
    }
}

impl Drop for VectorULong {
    fn drop(&mut self) {
        log::debug!("vector of size {} released", self.data.len());
        VECTOR_COUNT.release();
    }
}

impl PartialEq for VectorULong {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for VectorULong {}

impl Hash for VectorULong {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.data.len());
        for value in &self.data {
            value.hash(state);
        }
    }
}

/// Read-only indexing with the same soft-fail rule as [`VectorULong::get`].
impl Index<usize> for VectorULong {
    type Output = u64;

    fn index(&self, index: usize) -> &Self::Output {
        match self.data.get(index) {
            Some(value) => {
                self.error_code.set(0);
                value
            }
            None => {
                self.error_code.set(-1);
                &0
            }
        }
    }
}

impl<'a> IntoIterator for &'a VectorULong {
    type Item = &'a u64;
    type IntoIter = Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl TryFrom<Vec<u64>> for VectorULong {
    type Error = VectorError;

    fn try_from(value: Vec<u64>) -> Result<Self, Self::Error> {
        VectorULong::from_vec(value)
    }
}

impl fmt::Display for VectorULong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// Element-wise operators that cannot fail, for vector and `u64` operands.
macro_rules! impl_lanewise_op {
    ($trait:ident, $method:ident, $lane:expr) => {
        impl<'a, 'b> $trait<&'b VectorULong> for &'a VectorULong {
            type Output = VectorULong;

            fn $method(self, rhs: &'b VectorULong) -> VectorULong {
                self.zip_lanes(rhs, $lane)
            }
        }

        impl $trait<VectorULong> for VectorULong {
            type Output = VectorULong;

            fn $method(self, rhs: VectorULong) -> VectorULong {
                (&self).$method(&rhs)
            }
        }

        impl<'a> $trait<u64> for &'a VectorULong {
            type Output = VectorULong;

            fn $method(self, rhs: u64) -> VectorULong {
                self.map_lanes(|&v| $lane(v, rhs))
            }
        }

        impl $trait<u64> for VectorULong {
            type Output = VectorULong;

            fn $method(self, rhs: u64) -> VectorULong {
                (&self).$method(rhs)
            }
        }
    };
}

impl_lanewise_op!(Add, add, u64::wrapping_add);
impl_lanewise_op!(Sub, sub, u64::saturating_sub);
impl_lanewise_op!(Mul, mul, u64::wrapping_mul);
impl_lanewise_op!(BitOr, bitor, <u64 as BitOr>::bitor);
impl_lanewise_op!(BitXor, bitxor, <u64 as BitXor>::bitxor);
impl_lanewise_op!(BitAnd, bitand, <u64 as BitAnd>::bitand);

/// Division-like operators; both yield `Result`.
macro_rules! impl_divide_op {
    ($trait:ident, $method:ident, $lane:expr) => {
        impl<'a, 'b> $trait<&'b VectorULong> for &'a VectorULong {
            type Output = Result<VectorULong, VectorError>;

            fn $method(self, rhs: &'b VectorULong) -> Self::Output {
                self.divide_by(rhs, $lane)
            }
        }

        impl $trait<VectorULong> for VectorULong {
            type Output = Result<VectorULong, VectorError>;

            fn $method(self, rhs: VectorULong) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl<'a> $trait<u64> for &'a VectorULong {
            type Output = Result<VectorULong, VectorError>;

            fn $method(self, rhs: u64) -> Self::Output {
                self.divide_by_scalar(rhs, $lane)
            }
        }

        impl $trait<u64> for VectorULong {
            type Output = Result<VectorULong, VectorError>;

            fn $method(self, rhs: u64) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

impl_divide_op!(Div, div, <u64 as Div>::div);
impl_divide_op!(Rem, rem, <u64 as Rem>::rem);

/// Shifts take the per-lane amount from a vector or one `u32` for every
/// lane; either way the amount is reduced modulo 64 first.
macro_rules! impl_shift_op {
    ($trait:ident, $method:ident) => {
        impl<'a, 'b> $trait<&'b VectorULong> for &'a VectorULong {
            type Output = VectorULong;

            fn $method(self, rhs: &'b VectorULong) -> VectorULong {
                self.zip_lanes(rhs, |v, amount| v.$method(amount % ELEMENT_BITS))
            }
        }

        impl $trait<VectorULong> for VectorULong {
            type Output = VectorULong;

            fn $method(self, rhs: VectorULong) -> VectorULong {
                (&self).$method(&rhs)
            }
        }

        impl<'a> $trait<u32> for &'a VectorULong {
            type Output = VectorULong;

            fn $method(self, rhs: u32) -> VectorULong {
                let amount = u64::from(rhs) % ELEMENT_BITS;
                self.map_lanes(|v| v.$method(amount))
            }
        }

        impl $trait<u32> for VectorULong {
            type Output = VectorULong;

            fn $method(self, rhs: u32) -> VectorULong {
                (&self).$method(rhs)
            }
        }
    };
}

impl_shift_op!(Shl, shl);
impl_shift_op!(Shr, shr);

/// Bitwise complement of every element.
impl Not for &VectorULong {
    type Output = VectorULong;

    fn not(self) -> VectorULong {
        self.map_lanes(|v| !v)
    }
}

impl Not for VectorULong {
    type Output = VectorULong;

    fn not(self) -> VectorULong {
        !&self
    }
}
