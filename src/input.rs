//! Reading the wiki text handed to the binary.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::STDIN_ARG;
use crate::error::Result;

/// Where a block of wiki text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` selects stdin, anything else is a file path.
    pub fn from_arg<P: AsRef<Path>>(arg: P) -> Self {
        let arg = arg.as_ref();
        if arg == Path::new(STDIN_ARG) {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Resolves CLI arguments; no arguments means stdin.
    pub fn from_args(args: &[PathBuf]) -> Vec<Self> {
        if args.is_empty() {
            vec![Self::Stdin]
        } else {
            args.iter().map(Self::from_arg).collect()
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the whole source into a string.
///
/// # Errors
/// * `Error::IoError` if the source cannot be read or is not UTF-8
pub fn read_input(source: &InputSource) -> Result<String> {
    debug!("Reading input from {}", source);
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        InputSource::File(path) => Ok(std::fs::read_to_string(path)?),
    }
}
