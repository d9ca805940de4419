use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::error::RhombusError;

/// A rhombus described by its two diagonals and a color code.
///
/// Both diagonals are kept strictly positive by every constructor and
/// setter. Unlike the numeric containers, a bad index is a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rhombus {
    d1: i32,
    d2: i32,
    color: i32,
}

fn check_diagonal(name: &str, value: i32) -> Result<i32, RhombusError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(RhombusError::InvalidArgument(format!(
            "diagonal {} must be greater than 0, got {}",
            name, value
        )))
    }
}

impl Rhombus {
    pub fn new(d1: i32, d2: i32, color: i32) -> Result<Self, RhombusError> {
        Ok(Self {
            d1: check_diagonal("d1", d1)?,
            d2: check_diagonal("d2", d2)?,
            color,
        })
    }

    pub fn d1(&self) -> i32 {
        self.d1
    }

    pub fn d2(&self) -> i32 {
        self.d2
    }

    pub fn color(&self) -> i32 {
        self.color
    }

    pub fn set_d1(&mut self, value: i32) -> Result<(), RhombusError> {
        self.d1 = check_diagonal("d1", value)?;
        Ok(())
    }

    pub fn set_d2(&mut self, value: i32) -> Result<(), RhombusError> {
        self.d2 = check_diagonal("d2", value)?;
        Ok(())
    }

    pub fn set_color(&mut self, value: i32) {
        self.color = value;
    }

    /// Field by position: 0 = d1, 1 = d2, 2 = color.
    pub fn get(&self, index: usize) -> Result<i32, RhombusError> {
        match index {
            0 => Ok(self.d1),
            1 => Ok(self.d2),
            2 => Ok(self.color),
            _ => Err(RhombusError::IndexOutOfRange(index)),
        }
    }

    pub fn set(&mut self, index: usize, value: i32) -> Result<(), RhombusError> {
        match index {
            0 => self.set_d1(value),
            1 => self.set_d2(value),
            2 => {
                self.set_color(value);
                Ok(())
            }
            _ => Err(RhombusError::IndexOutOfRange(index)),
        }
    }

    pub fn dimensions(&self) -> String {
        format!("Rhombus diagonals: d1 = {}, d2 = {}", self.d1, self.d2)
    }

    pub fn perimeter(&self) -> f64 {
        let half1 = f64::from(self.d1) / 2.0;
        let half2 = f64::from(self.d2) / 2.0;
        4.0 * half1.hypot(half2)
    }

    pub fn area(&self) -> f64 {
        f64::from(self.d1) * f64::from(self.d2) / 2.0
    }

    pub fn is_square(&self) -> bool {
        self.d1 == self.d2
    }

    /// A rhombus is truthy when it is a square.
    pub fn is_truthy(&self) -> bool {
        self.is_square()
    }

    /// Increase both diagonals by one, in place.
    pub fn grow(&mut self) -> Result<(), RhombusError> {
        match (self.d1.checked_add(1), self.d2.checked_add(1)) {
            (Some(d1), Some(d2)) => {
                self.d1 = d1;
                self.d2 = d2;
                Ok(())
            }
            _ => Err(RhombusError::InvalidOperation(
                "diagonals cannot grow past i32::MAX".to_string(),
            )),
        }
    }

    /// Decrease both diagonals by one, in place. Fails and leaves the
    /// rhombus untouched when either diagonal would reach 0.
    pub fn shrink(&mut self) -> Result<(), RhombusError> {
        if self.d1 <= 1 || self.d2 <= 1 {
            return Err(RhombusError::InvalidOperation(
                "diagonals cannot be reduced to 0 or below".to_string(),
            ));
        }
        self.d1 -= 1;
        self.d2 -= 1;
        Ok(())
    }
}

/// Shift both diagonals by `scalar`, producing a new rhombus.
impl Add<i32> for &Rhombus {
    type Output = Result<Rhombus, RhombusError>;

    fn add(self, scalar: i32) -> Self::Output {
        let shifted = |d: i32| {
            d.checked_add(scalar).filter(|&v| v > 0).ok_or_else(|| {
                RhombusError::InvalidArgument(format!(
                    "adding {} would leave a non-positive diagonal",
                    scalar
                ))
            })
        };
        Ok(Rhombus {
            d1: shifted(self.d1)?,
            d2: shifted(self.d2)?,
            color: self.color,
        })
    }
}

impl Add<i32> for Rhombus {
    type Output = Result<Rhombus, RhombusError>;

    fn add(self, scalar: i32) -> Self::Output {
        &self + scalar
    }
}

/// `d1,d2,color`
impl fmt::Display for Rhombus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.d1, self.d2, self.color)
    }
}

impl FromStr for Rhombus {
    type Err = RhombusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(RhombusError::Format(format!(
                "expected 'd1,d2,color', got '{}'",
                s
            )));
        }
        let field = |idx: usize| {
            parts[idx].trim().parse::<i32>().map_err(|_| {
                RhombusError::Format(format!("field {} is not an integer: '{}'", idx, parts[idx]))
            })
        };
        let (d1, d2, color) = (field(0)?, field(1)?, field(2)?);
        if d1 <= 0 || d2 <= 0 {
            return Err(RhombusError::Format(format!(
                "diagonals must be positive, got {} and {}",
                d1, d2
            )));
        }
        Ok(Rhombus { d1, d2, color })
    }
}

impl TryFrom<&str> for Rhombus {
    type Error = RhombusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rhombus> for String {
    fn from(value: Rhombus) -> Self {
        value.to_string()
    }
}
