//! Truth tables and their output columns.
//!
//! A [`TruthTable`] over `n` variables has exactly `2^n` rows, each holding `n`
//! input bits followed by the output bit. Row `i` must list the binary digits
//! of `i`, most significant first. The output column is extracted into an
//! [`OutputVector`], which is what the analysis operates on.

use std::fmt;

use log::debug;

use crate::assignment::{check_num_vars, num_rows, Assignment};
use crate::error::{Error, Result};

/// The function analysed by the command line tool.
pub const SAMPLE_ROWS: [[u8; 4]; 8] = [
    [0, 0, 0, 0],
    [0, 0, 1, 0],
    [0, 1, 0, 1],
    [0, 1, 1, 0],
    [1, 0, 0, 0],
    [1, 0, 1, 1],
    [1, 1, 0, 0],
    [1, 1, 1, 0],
];

/// Number of variables of [`SAMPLE_ROWS`].
pub const SAMPLE_NUM_VARS: usize = 3;

fn check_bit(row: usize, column: usize, value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(Error::InvalidValue { row, column, value }),
    }
}

/// A validated truth table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    num_vars: usize,
    outputs: OutputVector,
}

impl TruthTable {
    /// Builds a truth table from rows of `num_vars + 1` zeros and ones.
    pub fn from_rows<R: AsRef<[u8]>>(num_vars: usize, rows: &[R]) -> Result<Self> {
        check_num_vars(num_vars)?;
        let expected = num_rows(num_vars);
        if rows.len() != expected {
            return Err(Error::InvalidShape {
                expected,
                actual: rows.len(),
            });
        }

        let mut outputs = Vec::with_capacity(expected);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != num_vars + 1 {
                return Err(Error::InvalidRowWidth {
                    row: i,
                    expected: num_vars + 1,
                    actual: row.len(),
                });
            }
            let assignment = Assignment::new(i, num_vars)?;
            for (column, (&value, bit)) in row.iter().zip(assignment.bits()).enumerate() {
                if check_bit(i, column, value)? != bit {
                    return Err(Error::RowOrder { row: i });
                }
            }
            outputs.push(check_bit(i, num_vars, row[num_vars])?);
        }

        debug!("from_rows(n = {}) -> {} rows", num_vars, expected);
        Ok(TruthTable {
            num_vars,
            outputs: OutputVector { num_vars, bits: outputs },
        })
    }

    /// Builds the full table of the function with output column `outputs`.
    pub fn from_outputs(outputs: &OutputVector) -> Self {
        TruthTable {
            num_vars: outputs.num_vars,
            outputs: outputs.clone(),
        }
    }

    /// The table of [`SAMPLE_ROWS`].
    pub fn sample() -> Result<Self> {
        TruthTable::from_rows(SAMPLE_NUM_VARS, &SAMPLE_ROWS)
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of rows (`2^n`).
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Rows as `(inputs, output)` pairs, in row order.
    pub fn rows(&self) -> impl Iterator<Item = (Assignment, bool)> + '_ {
        self.outputs.iter()
    }

    /// Row `i` as `n + 1` zeros and ones.
    pub fn row(&self, i: usize) -> Result<Vec<u8>> {
        let assignment = Assignment::new(i, self.num_vars)?;
        let mut row: Vec<u8> = assignment.bits().map(u8::from).collect();
        row.push(u8::from(self.outputs.bits[i]));
        Ok(row)
    }
}

/// Returns the output column `F` of `table`, preserving row order.
pub fn extract_output_column(table: &TruthTable) -> OutputVector {
    table.outputs.clone()
}

/// The output column `F` of a truth table: `2^n` bits indexed by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputVector {
    num_vars: usize,
    bits: Vec<bool>,
}

impl OutputVector {
    /// Builds `F` from `2^n` zeros and ones; the arity is inferred from the length.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        if !bits.len().is_power_of_two() {
            return Err(Error::InvalidShape {
                expected: bits.len().next_power_of_two(),
                actual: bits.len(),
            });
        }
        let num_vars = bits.len().trailing_zeros() as usize;
        check_num_vars(num_vars)?;
        let bits = bits
            .iter()
            .enumerate()
            .map(|(i, &value)| check_bit(i, 0, value))
            .collect::<Result<Vec<_>>>()?;
        Ok(OutputVector { num_vars, bits })
    }

    /// Builds `F` by evaluating `f` on every assignment.
    pub fn from_fn(num_vars: usize, f: impl Fn(Assignment) -> bool) -> Result<Self> {
        let bits = Assignment::all(num_vars)?.map(f).collect();
        Ok(OutputVector { num_vars, bits })
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// `F[i]`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<bool> {
        self.bits.get(i).copied()
    }

    /// `(assignment, F[i])` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (Assignment, bool)> + '_ {
        let num_vars = self.num_vars;
        self.bits.iter().enumerate().map(move |(index, &value)| {
            (Assignment::new_unchecked(index, num_vars), value)
        })
    }

    /// Raw output bits in row order.
    pub fn values(&self) -> &[bool] {
        &self.bits
    }

    /// The function with every output flipped.
    pub fn complement(&self) -> Self {
        OutputVector {
            num_vars: self.num_vars,
            bits: self.bits.iter().map(|b| !b).collect(),
        }
    }

    /// Checks that this is a function of exactly `num_vars` variables.
    pub fn ensure_arity(&self, num_vars: usize) -> Result<()> {
        if self.num_vars != num_vars {
            return Err(Error::ArityMismatch {
                expected: num_vars,
                actual: self.num_vars,
            });
        }
        Ok(())
    }
}

impl fmt::Display for OutputVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}
