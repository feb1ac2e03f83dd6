use std::fmt::{Debug, Display};
use std::io::{self, Write};

use num_traits::PrimInt;

use crate::algorithm::MinimalPath;
use crate::config::SolverConfig;

/// Renders a path as `Minimal path is: 7 + 6 + 3 = 16`.
///
/// Returns `None` for an empty path.
pub fn format_path<W>(path: &MinimalPath<W>, config: &SolverConfig) -> Option<String>
where
    W: PrimInt + Debug + Display,
{
    if path.is_empty() {
        return None;
    }

    let nodes: Vec<String> = path.values().iter().map(|value| value.to_string()).collect();
    Some(format!(
        "{}{}{}{}",
        config.output_prefix,
        nodes.join(&config.node_separator),
        config.total_separator,
        path.total()
    ))
}

/// Writes the formatted path followed by a newline. Nothing is written for an empty path.
pub fn write_path<W, O>(out: &mut O, path: &MinimalPath<W>, config: &SolverConfig) -> io::Result<()>
where
    W: PrimInt + Debug + Display,
    O: Write,
{
    match format_path(path, config) {
        Some(line) => writeln!(out, "{}", line),
        None => Ok(()),
    }
}
