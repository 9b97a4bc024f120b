/*!
A module to represent conjunctive normal form formula.
*/

use std::{convert::TryInto, fmt::Display, io::Write, num::NonZeroU32};

use crate::instance::SetIdx;

/// Newtype wrapper for a selection variable ID.
/// Invariant: 0 < ID <= MAX_VARIABLE_ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable(NonZeroU32);

impl Variable {
    pub const MAX_VARIABLE_ID: usize = std::u32::MAX as usize;

    /// The 1-based DIMACS variable ID.
    pub fn id(&self) -> usize {
        self.0.get() as usize
    }

    /// Creates a variable from a 1-based DIMACS ID.
    /// Returns `None` if the ID is zero or too large.
    pub fn from_id(id: usize) -> Option<Self> {
        if id > Variable::MAX_VARIABLE_ID {
            return None;
        }
        Some(Variable(NonZeroU32::new(id.try_into().ok()?)?))
    }

    /// The selection variable for subset `index`.
    ///
    /// # Panics
    ///
    /// Panics when the index does not fit in a variable ID.
    pub fn for_set(index: SetIdx) -> Self {
        Variable::from_id(usize::from(index) + 1).unwrap()
    }

    /// The subset index this variable selects.
    pub fn set_index(&self) -> SetIdx {
        SetIdx::from(self.id() - 1)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    variable: Variable,
    positive: bool,
}

impl Literal {
    pub fn new(variable: Variable, positive: bool) -> Self {
        Literal { variable, positive }
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn positive(&self) -> bool {
        self.positive
    }

    /// The signed DIMACS integer for this literal.
    pub fn dimacs(&self) -> i64 {
        let id = self.variable.id() as i64;
        if self.positive {
            id
        } else {
            -id
        }
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal {
            variable: self.variable,
            positive: !self.positive,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", if self.positive { "" } else { "¬" }, self.variable)
    }
}

/// Disjunction of literals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    pub fn num_literals(&self) -> usize {
        self.literals.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;

        let mut iter = self.literals.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for literal in iter {
            write!(f, " ∨ {}", literal)?;
        }

        write!(f, ")")?;

        Ok(())
    }
}

/// Formula representation in Conjunctive Normal Form
#[derive(Debug, Clone)]
pub struct Cnf {
    num_variables: usize,
    clauses: Vec<Clause>,
}

impl Cnf {
    pub fn new(num_variables: usize) -> Self {
        assert!(num_variables <= Variable::MAX_VARIABLE_ID);

        Cnf {
            num_variables,
            clauses: Vec::new(),
        }
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn clauses(&self) -> &Vec<Clause> {
        &self.clauses
    }

    /// Adds a clause to the formula.
    ///
    /// # Panics
    ///
    /// Panics when a literal references a variable outside `[1, num_variables]`.
    pub fn add_clause(&mut self, clause: Clause) {
        for literal in clause.iter() {
            assert!(
                literal.variable().id() <= self.num_variables,
                "literal {} out of range (formula has {} variables)",
                literal,
                self.num_variables
            );
        }
        self.clauses.push(clause);
    }

    /// Writes the formula in DIMACS CNF format:
    /// a `p cnf <nvars> <nclauses>` header, then one zero-terminated
    /// line per clause. Byte-identical output for identical formulas.
    pub fn write_dimacs(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "p cnf {} {}", self.num_variables, self.clauses.len())?;
        for clause in &self.clauses {
            for literal in clause.iter() {
                write!(writer, "{} ", literal.dimacs())?;
            }
            writeln!(writer, "0")?;
        }

        Ok(())
    }
}

impl Display for Cnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CNF with {} variables (", self.num_variables)?;

        let mut iter = self.clauses.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for clause in iter {
            write!(f, " ∧ {}", clause)?;
        }

        write!(f, ")")?;

        Ok(())
    }
}
