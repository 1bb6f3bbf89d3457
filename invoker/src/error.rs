use std::path::PathBuf;

use thiserror::Error;

/// Failures detected before the compiler is launched.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("VULKAN_SDK environment variable not set.")]
    MissingEnvironment,
    #[error("missing or unknown command line arguments.")]
    InvalidArguments,
    #[error("specified input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants;

    #[test]
    fn missing_environment_names_the_variable() {
        let message = InvokeError::MissingEnvironment.to_string();
        assert!(message.starts_with(constants::TOOLKIT_ROOT_VAR));
        assert_eq!(message, "VULKAN_SDK environment variable not set.");
    }
}
