use anyhow::Result;
use log::*;
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use toolkit::Toolkit;

pub use args::InvocationArgs;
pub use compiler::{GlslangValidator, ProcessResult};
pub use error::InvokeError;

mod args;
mod compiler;
pub mod constants;
mod error;
mod relay;
mod toolkit;

/// One `glslangValidator` run over a single shader file.
#[derive(Debug)]
pub struct ShaderCompileInvoker {
    compiler: GlslangValidator,
    args: InvocationArgs,
}

impl ShaderCompileInvoker {
    /// Reads the toolkit root and the command line of this process.
    pub fn from_env() -> Result<ShaderCompileInvoker, InvokeError> {
        let toolkit = Toolkit::from_env()?;
        ShaderCompileInvoker::with_toolkit(toolkit, env::args_os().skip(1))
    }

    /// Same checks as [`ShaderCompileInvoker::from_env`], in the same order,
    /// over explicit values. `args` excludes the program name.
    pub fn new<I>(
        toolkit_root: Option<OsString>,
        args: I,
    ) -> Result<ShaderCompileInvoker, InvokeError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let toolkit = Toolkit::from_root(toolkit_root)?;
        ShaderCompileInvoker::with_toolkit(toolkit, args)
    }

    fn with_toolkit<I>(toolkit: Toolkit, args: I) -> Result<ShaderCompileInvoker, InvokeError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let compiler = GlslangValidator::new(toolkit.compiler_path());
        debug!("Compiler (`{}`).", compiler.path().display());

        let args = InvocationArgs::parse(args)?;

        Ok(ShaderCompileInvoker { compiler, args })
    }

    pub fn compiler_path(&self) -> &Path {
        self.compiler.path()
    }

    pub fn args(&self) -> &InvocationArgs {
        &self.args
    }

    pub fn command(&self) -> Command {
        self.compiler.command(&self.args)
    }

    /// Compiles against this process's stdout and stderr and returns the
    /// exit code to propagate.
    pub fn run(self) -> Result<i32> {
        let result = self.run_with(io::stdout(), io::stderr())?;
        let code = result.exit_code();
        info!("Compiler exited with code {}.", code);
        Ok(code)
    }

    pub fn run_with<O, E>(self, stdout: O, stderr: E) -> Result<ProcessResult>
    where
        O: Write + Send,
        E: Write + Send,
    {
        self.compiler.compile(&self.args, stdout, stderr)
    }
}
