use std::{io, path::PathBuf};

use rustyline::error::ReadlineError;

#[derive(Debug, thiserror::Error)]
/// Represents all errors that stop the driver itself, rather than one line.
pub enum DriverError {
    /// The input file could not be read.
    #[error("Failed to read the input file '{}'. Perhaps this file does not exist?", path.display())]
    UnreadableFile {
        /// The path that was given.
        path:   PathBuf,
        /// Why reading it failed.
        #[source]
        source: io::Error,
    },
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The interactive prompt failed.
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
}
