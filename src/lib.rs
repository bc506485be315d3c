//! # boolfn-rs: analysis of small Boolean functions
//!
//! **`boolfn-rs`** takes a Boolean function given by its truth table and derives
//! a handful of textbook forms and properties from it.
//!
//! ## Truth tables
//!
//! A function of `n` variables is a table of `2^n` rows. Row `i` lists the bits
//! of `i` (most significant first, as variables `x1..xn`) and then the output.
//! The output column is the vector `F`, which every analysis consumes.
//!
//! ## Basic Usage
//!
//! ```rust
//! use boolfn::analysis::{build_dnf, is_monotonic};
//! use boolfn::table::{extract_output_column, TruthTable};
//!
//! let table = TruthTable::sample()?;
//! let f = extract_output_column(&table);
//!
//! let dnf = build_dnf(&f, 3)?;
//! assert_eq!(dnf.to_string(), "(!x1 v x2 v !x3) ^ (x1 v !x2 v x3)");
//! assert!(!is_monotonic(&f, 3)?);
//! # Ok::<(), boolfn::error::Error>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`table`]**: [`TruthTable`][crate::table::TruthTable] and the output vector `F`.
//! - **[`analysis`]**: normal forms (DNF, KNF, "dual", "Zhegalkin") and the
//!   constant/monotonic/linear predicates.
//! - **[`formula`]**: clause lists and their textual rendering.
//! - **[`report`]**: the printed report, with Ukrainian or English labels.
//!
//! Malformed input is reported through [`error::Error`] instead of panicking.

pub mod analysis;
pub mod assignment;
pub mod error;
pub mod formula;
pub mod report;
pub mod table;
pub mod types;
