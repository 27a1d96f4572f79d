//! # WriteFrontToFileObserver
//!
//! Writes the objective vectors of every published population to a new file
//! in an output directory: `FUN.0`, `FUN.1`, and so on.
//!
//! The observer takes over its directory on construction. An existing
//! directory is emptied, with a warning; a missing one is created. Nothing
//! else may write to the directory while the observer is alive, and the
//! directory is left in place when the observer is dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{EventField, FieldSet, Observer, ProgressEvent};
use crate::{
    error::{MoeaError, Result},
    output::write_objectives_to_file,
    solution::Solution,
};

fn setup_error(directory: &Path, error: io::Error) -> MoeaError {
    MoeaError::Configuration(format!(
        "Cannot prepare output directory {}: {}",
        directory.display(),
        error
    ))
}

/// Writes one front file per progress event.
#[derive(Debug)]
pub struct WriteFrontToFileObserver {
    directory: PathBuf,
    counter: usize,
}

impl WriteFrontToFileObserver {
    /// Takes over `directory` for writing front files.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if the path exists but is not a
    /// directory, or if the directory cannot be emptied or created.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();

        if directory.is_dir() {
            warn!("Directory {} exists. Removing contents.", directory.display());
            Self::clear(&directory).map_err(|e| setup_error(&directory, e))?;
        } else if directory.exists() {
            return Err(MoeaError::Configuration(format!(
                "Output path {} exists and is not a directory",
                directory.display()
            )));
        } else {
            warn!(
                "Directory {} does not exist. Creating it.",
                directory.display()
            );
            fs::create_dir_all(&directory).map_err(|e| setup_error(&directory, e))?;
        }

        Ok(Self {
            directory,
            counter: 0,
        })
    }

    fn clear(directory: &Path) -> io::Result<()> {
        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(entry.path())?;
            } else {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Index of the next file to be written.
    pub fn counter(&self) -> usize {
        self.counter
    }
}

impl<S: Solution> Observer<S> for WriteFrontToFileObserver {
    fn required_fields(&self) -> FieldSet {
        FieldSet::empty().with(EventField::Population)
    }

    fn update(&mut self, event: &ProgressEvent<'_, S>) -> Result<()> {
        let population = event.population()?;
        let path = self.directory.join(format!("FUN.{}", self.counter));
        write_objectives_to_file(population, path)?;
        self.counter += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::BinarySolution;

    #[test]
    fn test_creates_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let directory = root.path().join("nested").join("front");

        let observer = WriteFrontToFileObserver::new(&directory).unwrap();

        assert!(directory.is_dir());
        assert_eq!(observer.counter(), 0);
        assert_eq!(observer.directory(), directory.as_path());
    }

    #[test]
    fn test_clears_existing_directory() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("FUN.7"), "stale").unwrap();
        fs::create_dir(root.path().join("old")).unwrap();
        fs::write(root.path().join("old").join("VAR.0"), "stale").unwrap();

        WriteFrontToFileObserver::new(root.path()).unwrap();

        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_rejects_file_path() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("not-a-directory");
        fs::write(&file, "").unwrap();

        let error = WriteFrontToFileObserver::new(&file).unwrap_err();
        assert!(error.is_configuration());
    }

    #[test]
    fn test_update_requires_population() {
        let root = tempfile::tempdir().unwrap();
        let mut observer = WriteFrontToFileObserver::new(root.path()).unwrap();
        let event: ProgressEvent<'_, BinarySolution> = ProgressEvent::new().with_evaluations(1);

        let error = observer.update(&event).unwrap_err();
        assert!(error.is_contract_violation());
        assert_eq!(observer.counter(), 0);
    }
}
