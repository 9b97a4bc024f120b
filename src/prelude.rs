/*!
Common imports used throughout the crate.
*/

pub use snafu::{ensure, OptionExt, ResultExt, Snafu};
