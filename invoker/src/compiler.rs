use anyhow::{anyhow, Context, Result};
use log::*;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use crate::args::InvocationArgs;
use crate::constants;
use crate::relay::relay_lines;

/// The external `glslangValidator` executable.
#[derive(Clone, Debug)]
pub struct GlslangValidator {
    exe: PathBuf,
}

/// Outcome of one compiler run, after both streams were relayed.
#[derive(Debug)]
pub struct ProcessResult {
    pub status: ExitStatus,
    pub stdout_lines: usize,
    pub stderr_lines: usize,
}

impl ProcessResult {
    /// The code this process should exit with. The compiler's own code is
    /// kept as is; a child killed by a signal maps to `128 + signal`.
    pub fn exit_code(&self) -> i32 {
        if let Some(code) = self.status.code() {
            return code;
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = self.status.signal() {
                warn!("Compiler terminated by signal {}.", signal);
                return 128 + signal;
            }
        }

        constants::LOCAL_FAILURE_CODE
    }
}

impl GlslangValidator {
    pub fn new(exe: PathBuf) -> GlslangValidator {
        GlslangValidator { exe }
    }

    pub fn path(&self) -> &Path {
        &self.exe
    }

    /// `<exe> -V <input> -o <output>`, no shell involved.
    pub fn command(&self, args: &InvocationArgs) -> Command {
        let mut command = Command::new(&self.exe);
        command
            .arg(constants::VALIDATION_FLAG)
            .arg(args.input())
            .arg(constants::OUTPUT_FLAG)
            .arg(args.output());
        command
    }

    /// Runs the compiler, relaying its stdout and stderr into the given
    /// writers as lines arrive, and waits for it to exit.
    pub fn compile<O, E>(
        &self,
        args: &InvocationArgs,
        stdout: O,
        stderr: E,
    ) -> Result<ProcessResult>
    where
        O: Write + Send,
        E: Write + Send,
    {
        let mut command = self.command(args);
        info!("Running {:?}.", command);

        let mut child = command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to launch `{}`", self.exe.display()))?;

        let child_stdout = child
            .stdout
            .take()
            .ok_or_else(|| anyhow!("Compiler stdout was not captured."))?;
        let child_stderr = child
            .stderr
            .take()
            .ok_or_else(|| anyhow!("Compiler stderr was not captured."))?;

        // stderr gets its own thread so a full pipe on either side cannot
        // stall the other.
        let relayed = thread::scope(|scope| -> Result<(usize, usize)> {
            let stderr_relay =
                scope.spawn(move || relay_lines(BufReader::new(child_stderr), stderr));

            let stdout_lines = relay_lines(BufReader::new(child_stdout), stdout)
                .context("Failed to relay compiler stdout");
            let stderr_lines = stderr_relay
                .join()
                .map_err(|_| anyhow!("Compiler stderr relay panicked."))?
                .context("Failed to relay compiler stderr");

            Ok((stdout_lines?, stderr_lines?))
        });

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for `{}`", self.exe.display()))?;
        let (stdout_lines, stderr_lines) = relayed?;
        debug!(
            "Relayed {} stdout and {} stderr lines.",
            stdout_lines, stderr_lines
        );

        Ok(ProcessResult {
            status,
            stdout_lines,
            stderr_lines,
        })
    }
}
