use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::InvokeError;

/// Input and output file paths taken from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationArgs {
    input: PathBuf,
    output: PathBuf,
}

impl InvocationArgs {
    /// Takes the positional arguments, without the program name.
    ///
    /// Exactly two are accepted. The input must name an existing regular
    /// file; the output is left for the compiler to create or overwrite.
    pub fn parse<I>(args: I) -> Result<InvocationArgs, InvokeError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let (input, output) = match (args.next(), args.next(), args.next()) {
            (Some(input), Some(output), None) => (PathBuf::from(input), PathBuf::from(output)),
            _ => return Err(InvokeError::InvalidArguments),
        };

        if !input.is_file() {
            return Err(InvokeError::InputNotFound(input));
        }

        Ok(InvocationArgs { input, output })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}
