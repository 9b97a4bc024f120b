use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::Command,
};

use crate::formula::Cnf;
use crate::model::RawModel;
use crate::prelude::*;

use super::{
    Error, MalformedLiteral, SatBackend, SpawnSolver, UnrecognizedStatus, Verdict, WriteFormula,
};

/// Exit codes in the SAT competition convention.
const EXIT_SAT: i32 = 10;
const EXIT_UNSAT: i32 = 20;

/// Gateway to an external DIMACS solver process such as glucose or
/// minisat. The formula is written to `cnf_path`, the solver is run
/// with `-model`, and its exit code and stdout are interpreted.
#[derive(Debug)]
pub struct ExternalSolver {
    program: PathBuf,
    cnf_path: PathBuf,
    verbosity: u8,
}

impl ExternalSolver {
    pub fn new(program: impl Into<PathBuf>, cnf_path: impl Into<PathBuf>) -> Self {
        ExternalSolver {
            program: program.into(),
            cnf_path: cnf_path.into(),
            verbosity: 1,
        }
    }

    /// Sets the verbosity level passed to the solver.
    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl SatBackend for ExternalSolver {
    fn solve(&self, formula: &Cnf) -> Result<Verdict, Error> {
        let file = File::create(&self.cnf_path).context(WriteFormula {
            path: self.cnf_path.clone(),
        })?;
        let mut writer = BufWriter::new(file);
        formula.write_dimacs(&mut writer).context(WriteFormula {
            path: self.cnf_path.clone(),
        })?;
        writer.flush().context(WriteFormula {
            path: self.cnf_path.clone(),
        })?;

        let output = Command::new(&self.program)
            .arg("-model")
            .arg(format!("-verb={}", self.verbosity))
            .arg(&self.cnf_path)
            .output()
            .context(SpawnSolver {
                program: self.program.clone(),
            })?;

        debug!("solver exited with status {:?}", output.status.code());

        match output.status.code() {
            Some(EXIT_SAT) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                Ok(Verdict::Sat(parse_model_lines(&stdout)?))
            }
            Some(EXIT_UNSAT) => Ok(Verdict::Unsat),
            code => UnrecognizedStatus {
                code,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            }
            .fail(),
        }
    }
}

/// Collects the literals from every `v`-prefixed line, in order.
/// A single model may be split across several such lines.
fn parse_model_lines(stdout: &str) -> Result<RawModel, Error> {
    let mut literals = Vec::new();

    for line in stdout.lines() {
        if let Some(rest) = line.strip_prefix('v') {
            for token in rest.split_whitespace() {
                let literal = token.parse::<i64>().context(MalformedLiteral {
                    token: token.to_owned(),
                })?;
                literals.push(literal);
            }
        }
    }

    Ok(RawModel::new(literals))
}
