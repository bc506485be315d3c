//! Normal forms and classification of a Boolean function.
//!
//! Every formula builder is a mechanical transcription of the rows on which
//! `F` takes a given value. They differ only in which rows they pick, in how
//! a bit maps to a literal sign, and in the two connectives:
//!
//! | builder                           | rows    | bit 1 gives | inside | between |
//! |-----------------------------------|---------|-------------|--------|---------|
//! | [`find_dual_function`]            | `F = 0` | `!xj`       | ` + `  | ` * `   |
//! | [`generate_zhegalkin_polynomial`] | `F = 1` | `!xj`       | ` * `  | ` + `   |
//! | [`build_dnf`]                     | `F = 1` | `xj`        | ` v `  | ` ^ `   |
//! | [`build_knf`]                     | `F = 0` | `xj`        | ` ^ `  | ` v `   |
//!
//! The "dual function" and the "Zhegalkin polynomial" are named after the
//! forms they are printed as; neither is the algebraic dual nor an XOR-basis
//! expansion. Likewise [`is_linear`] is the pairwise Hamming-distance rule,
//! which is weaker than GF(2) affinity.

use log::{debug, trace};

use crate::error::Result;
use crate::formula::{Clause, Connective, Formula};
use crate::table::{OutputVector, TruthTable};

fn transcribe(f: &OutputVector, value: bool, one_is_positive: bool, inner: Connective, outer: Connective) -> Formula {
    let clauses = f
        .iter()
        .filter(|&(_, output)| output == value)
        .map(|(assignment, _)| Clause::new(assignment.literals(one_is_positive), inner));
    Formula::new(clauses, outer)
}

/// Product of sums over the rows where `F = 0`, with `xj` for a 0 bit and `!xj` for a 1 bit.
pub fn find_dual_function(table: &TruthTable, f: &OutputVector) -> Result<Formula> {
    debug!("find_dual_function(f = {}, n = {})", f, table.num_vars());
    f.ensure_arity(table.num_vars())?;
    Ok(transcribe(f, false, false, Connective::Plus, Connective::Times))
}

/// Sum of products over the rows where `F = 1`, with `xj` for a 0 bit and `!xj` for a 1 bit.
pub fn generate_zhegalkin_polynomial(f: &OutputVector) -> Formula {
    debug!("generate_zhegalkin_polynomial(f = {})", f);
    transcribe(f, true, false, Connective::Times, Connective::Plus)
}

/// Disjunctive normal form: one `v`-clause per minterm, joined by `^`.
///
/// Literal `xj` appears for a 1 bit and `!xj` for a 0 bit.
/// Empty if `F` is constant zero.
pub fn build_dnf(f: &OutputVector, num_vars: usize) -> Result<Formula> {
    debug!("build_dnf(f = {}, n = {})", f, num_vars);
    f.ensure_arity(num_vars)?;
    Ok(transcribe(f, true, true, Connective::Vee, Connective::Wedge))
}

/// Conjunctive normal form: one `^`-clause per zero of `F`, joined by `v`.
///
/// Empty if `F` is constant one.
pub fn build_knf(f: &OutputVector, num_vars: usize) -> Result<Formula> {
    debug!("build_knf(f = {}, n = {})", f, num_vars);
    f.ensure_arity(num_vars)?;
    Ok(transcribe(f, false, true, Connective::Wedge, Connective::Vee))
}

pub fn is_constant_zero(f: &OutputVector) -> bool {
    f.values().iter().all(|&b| !b)
}

pub fn is_constant_one(f: &OutputVector) -> bool {
    f.values().iter().all(|&b| b)
}

/// Checks that `F` never decreases along the bitwise order of inputs.
///
/// Fails iff some `i < j` has `F[i] = 1`, `F[j] = 0` and every bit of `i` is
/// at most the corresponding bit of `j`.
pub fn is_monotonic(f: &OutputVector, num_vars: usize) -> Result<bool> {
    debug!("is_monotonic(f = {}, n = {})", f, num_vars);
    f.ensure_arity(num_vars)?;
    Ok(monotonic(f))
}

fn monotonic(f: &OutputVector) -> bool {
    for (a, fa) in f.iter() {
        for (b, fb) in f.iter().skip(a.index() + 1) {
            if fa > fb && a.is_dominated_by(b) {
                trace!("is_monotonic: F({}) = 1 > F({}) = 0", a, b);
                return false;
            }
        }
    }
    true
}

/// Checks that `F` differs only between inputs at Hamming distance 1.
///
/// Fails iff some `i < j` has `F[i] != F[j]` while the binary forms of `i`
/// and `j` differ in more than one bit.
pub fn is_linear(f: &OutputVector, num_vars: usize) -> Result<bool> {
    debug!("is_linear(f = {}, n = {})", f, num_vars);
    f.ensure_arity(num_vars)?;
    Ok(linear(f))
}

fn linear(f: &OutputVector) -> bool {
    for (a, fa) in f.iter() {
        for (b, fb) in f.iter().skip(a.index() + 1) {
            if fa != fb && a.hamming_distance(b) != 1 {
                trace!("is_linear: F({}) != F({}) at distance {}", a, b, a.hamming_distance(b));
                return false;
            }
        }
    }
    true
}

/// All four classification predicates of a function.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Properties {
    pub constant_zero: bool,
    pub constant_one: bool,
    pub monotonic: bool,
    pub linear: bool,
}

/// Evaluates every predicate on `f`.
pub fn classify(f: &OutputVector) -> Properties {
    debug!("classify(f = {})", f);
    Properties {
        constant_zero: is_constant_zero(f),
        constant_one: is_constant_one(f),
        monotonic: monotonic(f),
        linear: linear(f),
    }
}
