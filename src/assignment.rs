//! Input assignments: row indices viewed as n-bit vectors.
//!
//! Row `i` of a truth table over `n` variables assigns to `x1..xn` the bits of
//! `i`, most significant bit first. The width is carried alongside the index,
//! so nothing here is tied to a particular arity.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::{Literal, Var};

/// Largest supported number of variables.
pub const MAX_VARS: usize = 16;

/// Checks that `num_vars` is a supported arity.
pub fn check_num_vars(num_vars: usize) -> Result<()> {
    if num_vars > MAX_VARS {
        return Err(Error::TooManyVariables { num_vars, max: MAX_VARS });
    }
    Ok(())
}

/// Number of rows (`2^n`) in a truth table over `num_vars` variables.
pub fn num_rows(num_vars: usize) -> usize {
    1 << num_vars
}

/// An `n`-bit input vector.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Assignment {
    index: usize,
    width: usize,
}

impl Assignment {
    /// Creates the assignment for row `index` of a table over `num_vars` variables.
    pub fn new(index: usize, num_vars: usize) -> Result<Self> {
        check_num_vars(num_vars)?;
        let size = num_rows(num_vars);
        if index >= size {
            return Err(Error::IndexOutOfRange { index, size });
        }
        Ok(Assignment { index, width: num_vars })
    }

    /// Creates an assignment without range checks; `index < 2^num_vars` must hold.
    pub(crate) fn new_unchecked(index: usize, num_vars: usize) -> Self {
        debug_assert!(index < num_rows(num_vars));
        Assignment { index, width: num_vars }
    }

    /// All assignments over `num_vars` variables, in row order.
    pub fn all(num_vars: usize) -> Result<impl Iterator<Item = Assignment>> {
        check_num_vars(num_vars)?;
        Ok((0..num_rows(num_vars)).map(move |index| Assignment::new_unchecked(index, num_vars)))
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn width(self) -> usize {
        self.width
    }

    /// Value of the input column `position` (0 is the leftmost, most significant).
    pub fn bit(self, position: usize) -> bool {
        debug_assert!(position < self.width);
        (self.index >> (self.width - 1 - position)) & 1 == 1
    }

    /// Input bits from the most significant to the least significant.
    pub fn bits(self) -> impl Iterator<Item = bool> {
        (0..self.width).map(move |position| self.bit(position))
    }

    /// One literal per variable, in order `x1..xn`.
    ///
    /// A variable whose bit is 1 yields a positive literal iff `one_is_positive`.
    pub fn literals(self, one_is_positive: bool) -> impl Iterator<Item = Literal> {
        self.bits()
            .enumerate()
            .map(move |(position, bit)| Literal::with_polarity(Var::from_position(position), bit == one_is_positive))
    }

    /// Whether every bit of `self` is at most the corresponding bit of `other`.
    pub fn is_dominated_by(self, other: Assignment) -> bool {
        debug_assert_eq!(self.width, other.width);
        self.index & !other.index == 0
    }

    /// Number of positions in which `self` and `other` differ.
    pub fn hamming_distance(self, other: Assignment) -> u32 {
        debug_assert_eq!(self.width, other.width);
        (self.index ^ other.index).count_ones()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Binary representation of `value` using exactly `num_vars` digits, MSB first.
pub fn decimal_to_binary(value: usize, num_vars: usize) -> Result<String> {
    Ok(Assignment::new(value, num_vars)?.to_string())
}
