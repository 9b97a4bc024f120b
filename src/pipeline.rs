/*!
End-to-end driver: encode the instance, consult the solver, decode the
model. Every step is deterministic, so nothing here retries.
*/

use crate::encoder::{self, Encoding};
use crate::instance::Instance;
use crate::model::{self, Selection};
use crate::prelude::*;
use crate::solver::{self, SatBackend, Verdict};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("SAT solver invocation failed"))]
    SolverFailure { source: solver::Error },
    #[snafu(display("Solver reported SAT but its model contains no literals"))]
    MalformedModel,
}

/// Terminal answer for one instance. The two unsatisfiable variants
/// stay separate: one is decided by the encoder alone, the other by
/// the solver.
#[derive(Debug)]
pub enum Outcome {
    /// A selection within the budget distinguishing every element pair.
    Satisfiable(Selection),
    /// The named pair is distinguished by no subset at all; the solver
    /// was never consulted.
    StructuralUnsat { left: String, right: String },
    /// Every pair is individually distinguishable, but no selection
    /// within the budget satisfies all constraints at once.
    SolverUnsat,
}

/// Runs the full pipeline against a backend.
pub fn solve_instance(
    instance: &Instance,
    backend: &impl SatBackend,
) -> Result<Outcome, Error> {
    let formula = match encoder::encode(instance) {
        Encoding::Formula(formula) => formula,
        Encoding::StructuralUnsat { left, right } => {
            return Ok(Outcome::StructuralUnsat { left, right });
        }
    };

    match backend.solve(&formula).context(SolverFailure)? {
        Verdict::Sat(raw) => {
            // A formula without variables legitimately has an empty model.
            ensure!(
                raw.has_literals() || formula.num_variables() == 0,
                MalformedModel
            );
            Ok(Outcome::Satisfiable(model::decode(&raw, instance.sets())))
        }
        Verdict::Unsat => Ok(Outcome::SolverUnsat),
    }
}
