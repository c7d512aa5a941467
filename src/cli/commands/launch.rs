//! Launch command implementation.
//!
//! The default action: detect the preferred shell and replace the launcher
//! with it, supervising it first when a zsh fallback is requested.

use std::fmt;

use crate::cli::args::ParsedFlags;
use crate::error::{Result, WrapShellError};
use crate::search::PathResolver;
use crate::shell::{LaunchDescriptor, ProcessControl, ShellDetector, ShellKind, Supervisor};

use super::dispatcher::{Command, CommandResult};

/// The shells a launch resolved to.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    /// The shell to run first.
    pub primary: LaunchDescriptor,
    /// Shell to exec once the primary terminates, when supervision applies.
    pub fallback: Option<LaunchDescriptor>,
}

impl fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_shell(f, "shell", &self.primary)?;
        match &self.fallback {
            Some(fallback) => write_shell(f, "fallback", fallback),
            None => writeln!(f, "fallback: none"),
        }
    }
}

fn write_shell(f: &mut fmt::Formatter<'_>, label: &str, shell: &LaunchDescriptor) -> fmt::Result {
    let argv: Vec<String> = shell
        .argv()
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    writeln!(f, "{}: {}", label, shell.kind())?;
    writeln!(f, "  argv: {}", argv.join(" "))
}

/// The launch command implementation.
pub struct LaunchCommand<P> {
    flags: ParsedFlags,
    resolver: PathResolver,
    processes: P,
    dry_run: bool,
}

impl<P: ProcessControl> LaunchCommand<P> {
    /// Create a new launch command.
    pub fn new(flags: ParsedFlags, resolver: PathResolver, processes: P) -> Self {
        Self {
            flags,
            resolver,
            processes,
            dry_run: false,
        }
    }

    /// Print the plan instead of launching it.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Consume the command, returning the process backend.
    pub fn into_processes(self) -> P {
        self.processes
    }

    /// Resolve every shell the launch needs without touching any process.
    pub fn plan(&self) -> Result<LaunchPlan> {
        let requested = self.flags.preferred_kind()?;
        let detector = ShellDetector::new(&self.resolver);

        let primary = detector.detect(requested, self.flags.python_bin.as_deref())?;
        if primary.is_missing() {
            return Err(WrapShellError::ShellNotFound { kind: requested });
        }

        let fallback = if self.flags.needs_fallback(primary.kind()) {
            let fallback = detector.default_shell();
            if fallback.is_missing() {
                return Err(WrapShellError::ShellNotFound {
                    kind: ShellKind::Sh,
                });
            }
            Some(fallback)
        } else {
            None
        };

        Ok(LaunchPlan { primary, fallback })
    }
}

impl<P: ProcessControl> Command for LaunchCommand<P> {
    fn execute(&mut self) -> Result<CommandResult> {
        let plan = self.plan()?;

        if self.dry_run {
            crate::ui::note("dry run, no shell will be launched");
            print!("{}", plan);
            return Ok(CommandResult::success());
        }

        match &plan.fallback {
            Some(fallback) => Supervisor::new(&mut self.processes).run(&plan.primary, fallback)?,
            None => self.processes.exec(&plan.primary)?,
        }
        Ok(CommandResult::success())
    }
}
