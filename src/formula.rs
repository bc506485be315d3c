//! Two-level formulas rendered as text.
//!
//! A [`Formula`] is a list of parenthesised [`Clause`]s joined by an outer
//! [`Connective`]; each clause is a list of literals joined by an inner one.
//! Rendering joins collected parts with the separator, so an empty formula is
//! the empty string and nothing is ever trimmed off the end.

use std::fmt;

use crate::types::Literal;

/// Separator between literals or clauses.
///
/// Symbols are notation only: `^` is used as AND in normal forms, not XOR.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    /// `" + "`
    Plus,
    /// `" * "`
    Times,
    /// `" v "`
    Vee,
    /// `" ^ "`
    Wedge,
}

impl Connective {
    pub fn separator(self) -> &'static str {
        match self {
            Connective::Plus => " + ",
            Connective::Times => " * ",
            Connective::Vee => " v ",
            Connective::Wedge => " ^ ",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.separator().trim())
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], connective: Connective) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(connective.separator())?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Literals joined by a single connective.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
    connective: Connective,
}

impl Clause {
    pub fn new(literals: impl IntoIterator<Item = Literal>, connective: Connective) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
            connective,
        }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn connective(&self) -> Connective {
        self.connective
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_joined(f, &self.literals, self.connective)?;
        f.write_str(")")
    }
}

/// Clauses joined by a single connective.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Formula {
    clauses: Vec<Clause>,
    connective: Connective,
}

impl Formula {
    pub fn new(clauses: impl IntoIterator<Item = Clause>, connective: Connective) -> Self {
        Formula {
            clauses: clauses.into_iter().collect(),
            connective,
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn connective(&self) -> Connective {
        self.connective
    }

    /// Whether there are no clauses (renders as `""`).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.clauses, self.connective)
    }
}
