use log::*;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::constants;
use crate::error::InvokeError;

/// The shader toolkit installation located through the environment.
#[derive(Clone, Debug)]
pub struct Toolkit {
    root: PathBuf,
}

impl Toolkit {
    pub fn from_env() -> Result<Toolkit, InvokeError> {
        Toolkit::from_root(env::var_os(constants::TOOLKIT_ROOT_VAR))
    }

    /// An unset or empty root is treated as missing.
    pub fn from_root(root: Option<OsString>) -> Result<Toolkit, InvokeError> {
        match root {
            Some(root) if !root.is_empty() => {
                let toolkit = Toolkit {
                    root: PathBuf::from(root),
                };
                debug!("Toolkit root (`{}`).", toolkit.root.display());
                Ok(toolkit)
            }
            _ => Err(InvokeError::MissingEnvironment),
        }
    }

    /// Path of the compiler executable. Existence is not checked here, a
    /// failed launch reports a missing compiler.
    pub fn compiler_path(&self) -> PathBuf {
        constants::COMPILER_SUBPATH
            .iter()
            .fold(self.root.clone(), |path, part| path.join(part))
    }
}
