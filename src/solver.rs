/*!
Gateway to an external SAT-solving capability.

The encoder and decoder never talk to a solver process directly; they
see only the [`SatBackend`] seam, which keeps them testable without
spawning anything.
*/

use std::path::PathBuf;

use crate::formula::Cnf;
use crate::model::RawModel;
use crate::prelude::*;

mod external;

pub use external::ExternalSolver;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Failed to write DIMACS formula to '{}'", path.display()))]
    WriteFormula {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to run SAT solver '{}'", program.display()))]
    SpawnSolver {
        program: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display(
        "SAT solver exited with unrecognized status {:?} (expected 10 for SAT or 20 for UNSAT): {}",
        code,
        stderr
    ))]
    UnrecognizedStatus { code: Option<i32>, stderr: String },
    #[snafu(display("Failed to parse literal '{}' in solver model output", token))]
    MalformedLiteral {
        token: String,
        source: std::num::ParseIntError,
    },
}

/// Solver answer for one formula.
#[derive(Debug)]
pub enum Verdict {
    Sat(RawModel),
    Unsat,
}

pub trait SatBackend {
    /// Submits a formula and blocks until the solver answers.
    fn solve(&self, formula: &Cnf) -> Result<Verdict, Error>;
}
