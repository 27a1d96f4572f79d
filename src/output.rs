//! # Output
//!
//! Writers for the plain-text front files consumed by external tooling. Each
//! file holds one line per solution; values on a line are separated by a
//! single space.

use std::fmt::Debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{
    error::{Result, ResultExt},
    solution::Solution,
};

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).context(format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Writes the objective vectors of `population` to `path`.
///
/// The file has one row per solution and as many columns as objectives.
pub fn write_objectives_to_file<S, P>(population: &[S], path: P) -> Result<()>
where
    S: Solution,
    P: AsRef<Path>,
{
    let mut writer = create(path.as_ref())?;
    for solution in population {
        let row: Vec<String> = solution
            .objectives()
            .iter()
            .map(|value| value.to_string())
            .collect();
        writeln!(writer, "{}", row.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the decision variables of `population` to `path`.
pub fn write_variables_to_file<S, P>(population: &[S], path: P) -> Result<()>
where
    S: Solution,
    S::Variable: Debug,
    P: AsRef<Path>,
{
    let mut writer = create(path.as_ref())?;
    for solution in population {
        let row: Vec<String> = solution
            .variables()
            .iter()
            .map(|value| format!("{:?}", value))
            .collect();
        writeln!(writer, "{}", row.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}
