#[macro_use]
extern crate log;

use std::env::args;

use discern::{
    parser::{self, parse_file},
    pipeline::{self, solve_instance, Outcome},
    prelude::*,
    report::Report,
    solver::ExternalSolver,
};
use pretty_env_logger::formatted_builder;

fn usage_string() -> String {
    format!(
        "Usage: {} <instance_file> [options]

options:
    -o <file>   output file for the DIMACS formula (default: formula.cnf)
    -s <path>   SAT solver executable (default: ./glucose-syrup_static)
    -v <0-2>    verbosity passed to the solver (default: 1)",
        args().next().unwrap()
    )
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Unknown option '{}'\n\n{}", name, usage_string()))]
    UnknownOption { name: String },
    #[snafu(display("Option '{}' requires a value\n\n{}", name, usage_string()))]
    MissingValue { name: String },
    #[snafu(display("No instance file given\n\n{}", usage_string()))]
    MissingInstance,
    #[snafu(display("Verbosity '{}' is not in 0-2\n\n{}", value, usage_string()))]
    BadVerbosity { value: String },
    #[snafu(display("Failed to parse instance"))]
    ParserError { source: parser::Error },
    #[snafu(display("Failed to solve instance"))]
    PipelineError { source: pipeline::Error },
}

struct Options {
    instance_path: String,
    formula_path: String,
    solver_path: String,
    verbosity: u8,
}

fn parse_args(args: Vec<String>) -> Result<Options, Error> {
    let mut instance_path = None;
    let mut formula_path = "formula.cnf".to_owned();
    let mut solver_path = "./glucose-syrup_static".to_owned();
    let mut verbosity = 1;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "-o" {
            formula_path = iter.next().context(MissingValue { name: "-o" })?;
        } else if arg == "-s" {
            solver_path = iter.next().context(MissingValue { name: "-s" })?;
        } else if arg == "-v" {
            let value = iter.next().context(MissingValue { name: "-v" })?;
            verbosity = match value.parse::<u8>() {
                Ok(v) if v <= 2 => v,
                _ => return BadVerbosity { value }.fail(),
            };
        } else if arg.starts_with('-') {
            return UnknownOption { name: arg }.fail();
        } else {
            instance_path = Some(arg);
        }
    }

    Ok(Options {
        instance_path: instance_path.context(MissingInstance)?,
        formula_path,
        solver_path,
        verbosity,
    })
}

fn init_logger() {
    let mut builder = formatted_builder();

    if let Ok(s) = ::std::env::var("RUST_LOG") {
        builder.parse_filters(&s);
    } else {
        if cfg!(debug_assertions) {
            builder.parse_filters("discern=debug");
        } else {
            builder.parse_filters("discern=warn");
        }
    }

    builder.try_init().expect("Failed to initialize the logger");
}

fn main() -> Result<(), Report> {
    init_logger();

    let mut args = args();

    // drop arg[0]
    args.next();

    let options = parse_args(args.collect())?;

    let instance = parse_file(&options.instance_path).context(ParserError)?;
    info!(
        "instance: {} elements, {} candidate sets, budget {}",
        instance.universe().len(),
        instance.num_sets(),
        instance.budget()
    );

    let backend =
        ExternalSolver::new(&options.solver_path, &options.formula_path).verbosity(options.verbosity);

    match solve_instance(&instance, &backend).context(PipelineError)? {
        Outcome::Satisfiable(selection) => {
            println!("Selected sets (D):");
            for (index, subset) in selection {
                println!("{}: {}", index, subset);
            }
        }
        Outcome::StructuralUnsat { left, right } => {
            println!(
                "Instance is UNSATISFIABLE: no set distinguishes '{}' from '{}'.",
                left, right
            );
            std::process::exit(20);
        }
        Outcome::SolverUnsat => {
            println!("Instance is UNSATISFIABLE: No such sub-collection exists.");
            std::process::exit(20);
        }
    }

    Ok(())
}
