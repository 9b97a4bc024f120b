/*!
Parser for the textual instance format.

Line 1 holds the budget `k`, line 2 the whitespace-separated universe
elements, and each following non-blank line names one candidate subset.
File order of the subset lines becomes the 1-based variable index.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::instance::{Instance, Subset};
use crate::prelude::*;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("I/O error occurred while reading instance file '{}'", path.display()))]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Instance file is missing the budget line"))]
    MissingBudget,
    #[snafu(display("Failed to parse budget line '{}' as a non-negative integer", line))]
    MalformedBudget {
        line: String,
        source: std::num::ParseIntError,
    },
    #[snafu(display("Instance file is missing the universe line"))]
    MissingUniverse,
}

fn tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace().map(str::to_owned)
}

/// Parses a problem instance from a file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Instance, Error> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path).context(IoError {
        path: path.to_owned(),
    })?);

    let mut lines = file.lines();

    let budget_line = lines
        .next()
        .ok_or_else(|| MissingBudget.build())?
        .context(IoError {
            path: path.to_owned(),
        })?;
    let budget = budget_line
        .trim()
        .parse::<usize>()
        .context(MalformedBudget {
            line: budget_line.clone(),
        })?;

    let universe_line = lines
        .next()
        .ok_or_else(|| MissingUniverse.build())?
        .context(IoError {
            path: path.to_owned(),
        })?;
    let universe: Vec<String> = tokens(&universe_line).collect();

    let mut sets = Vec::new();
    for line in lines {
        let line = line.context(IoError {
            path: path.to_owned(),
        })?;
        if line.trim().is_empty() {
            // blank line
            continue;
        }
        sets.push(Subset::new(tokens(&line)));
    }

    Ok(Instance::new(budget, universe, sets))
}
