#[macro_use]
extern crate log;

pub mod encoder;
pub mod formula;
pub mod instance;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod prelude;
pub mod report;
pub mod solver;
