//! Fallback supervision.
//!
//! `exec` discards the launcher, so watching the primary shell needs a second
//! process: the primary runs in a forked child while the parent waits for it
//! and then becomes the fallback shell itself.
//!
//! ```text
//! spawn ──► wait ─┬─► interrupted / stopped ──► wait again
//!                 ├─► exited(code) ─┐
//!                 └─► signaled(n) ──┴─► report ──► exec fallback
//! ```
//!
//! Process primitives sit behind [`ProcessControl`] so the state machine can be
//! driven by a test double.

use std::fmt;
use std::path::Path;

use crate::error::{Result, WrapShellError};

use super::descriptor::LaunchDescriptor;
use super::kind::ShellKind;

/// Raw status reported by a single wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    /// The child exited normally with this code.
    Exited(i32),
    /// The child was terminated by this signal.
    Signaled(i32),
    /// Stopped, continued, or any other non-terminal change.
    Other,
}

/// Result of one wait call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The wait was interrupted by a signal before anything happened.
    Interrupted,
    /// Process `pid` changed state.
    Changed { pid: i32, status: ChildStatus },
}

/// How the primary shell ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryOutcome {
    Exited(i32),
    Signaled(i32),
}

impl fmt::Display for PrimaryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryOutcome::Exited(0) => write!(f, "exited successfully"),
            PrimaryOutcome::Exited(code) => write!(f, "failed with exit code {}", code),
            PrimaryOutcome::Signaled(signal) => write!(f, "was killed by signal {}", signal),
        }
    }
}

/// OS process primitives used by the launcher.
pub trait ProcessControl {
    /// Start `shell` in a new process and return its pid.
    ///
    /// On Unix this forks; the child replaces itself with `shell` and never
    /// returns from this call.
    fn spawn(&mut self, shell: &LaunchDescriptor) -> Result<i32>;

    /// Block until process `pid` changes state once.
    fn wait(&mut self, pid: i32) -> Result<WaitOutcome>;

    /// Replace the current process with `shell`. Only returns on failure.
    fn exec(&mut self, shell: &LaunchDescriptor) -> Result<()>;
}

impl<P: ProcessControl + ?Sized> ProcessControl for &mut P {
    fn spawn(&mut self, shell: &LaunchDescriptor) -> Result<i32> {
        (**self).spawn(shell)
    }

    fn wait(&mut self, pid: i32) -> Result<WaitOutcome> {
        (**self).wait(pid)
    }

    fn exec(&mut self, shell: &LaunchDescriptor) -> Result<()> {
        (**self).exec(shell)
    }
}

/// The message printed before the fallback shell takes over.
pub fn fallback_report(fallback_binary: &Path, outcome: PrimaryOutcome) -> String {
    format!(
        "Falling back to fallback shell ({}):\n  Original shell {}\n",
        fallback_binary.display(),
        outcome
    )
}

/// Runs a primary shell and falls back to another once it terminates.
#[derive(Debug)]
pub struct Supervisor<P> {
    processes: P,
}

impl<P: ProcessControl> Supervisor<P> {
    pub fn new(processes: P) -> Self {
        Self { processes }
    }

    /// Consume the supervisor, returning the process backend.
    pub fn into_inner(self) -> P {
        self.processes
    }

    /// Launch `primary`, wait for it to terminate, then exec `fallback`.
    ///
    /// `fallback` must already be resolved so nothing is forked when there is
    /// no shell to fall back to. Only returns on failure.
    pub fn run(&mut self, primary: &LaunchDescriptor, fallback: &LaunchDescriptor) -> Result<()> {
        let fallback_binary = match fallback.binary_path() {
            Some(binary) => binary,
            None => {
                return Err(WrapShellError::ShellNotFound {
                    kind: ShellKind::Sh,
                })
            }
        };

        tracing::info!("Forking process to enable zsh fallback");
        let child = self.processes.spawn(primary)?;
        let outcome = self.supervise(child)?;

        eprintln!("{}", fallback_report(fallback_binary, outcome));
        self.processes.exec(fallback)
    }

    /// Wait for `child` until it exits or is killed by a signal.
    pub fn supervise(&mut self, child: i32) -> Result<PrimaryOutcome> {
        loop {
            match self.processes.wait(child)? {
                WaitOutcome::Interrupted => {
                    tracing::info!("Interrupted by signal");
                }
                WaitOutcome::Changed { pid, .. } if pid != child => {
                    return Err(WrapShellError::UnexpectedChild {
                        expected: child,
                        actual: pid,
                    });
                }
                WaitOutcome::Changed { status, .. } => match status {
                    ChildStatus::Exited(code) => return Ok(PrimaryOutcome::Exited(code)),
                    ChildStatus::Signaled(signal) => return Ok(PrimaryOutcome::Signaled(signal)),
                    ChildStatus::Other => {
                        tracing::debug!("child {} changed state without terminating", child);
                    }
                },
            }
        }
    }
}

/// The real process backend.
#[derive(Debug, Default)]
pub struct SystemProcesses {
    #[cfg(not(unix))]
    children: std::collections::HashMap<i32, std::process::Child>,
}

impl SystemProcesses {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(unix)]
impl ProcessControl for SystemProcesses {
    fn spawn(&mut self, shell: &LaunchDescriptor) -> Result<i32> {
        use nix::unistd::{fork, ForkResult};

        // Anything still buffered would otherwise be written twice.
        let _ = std::io::Write::flush(&mut std::io::stderr());
        let _ = std::io::Write::flush(&mut std::io::stdout());

        // SAFETY: the launcher is single-threaded, and the child only execs
        // or exits.
        match unsafe { fork() } {
            Ok(ForkResult::Parent { child }) => Ok(child.as_raw()),
            Ok(ForkResult::Child) => {
                let err = match super::exec::exec_shell(shell) {
                    Err(err) => err,
                    Ok(()) => std::process::exit(0),
                };
                crate::ui::error(&err.to_string());
                std::process::exit(1);
            }
            Err(errno) => Err(WrapShellError::ForkFailed {
                source: errno.into(),
            }),
        }
    }

    fn wait(&mut self, pid: i32) -> Result<WaitOutcome> {
        use nix::errno::Errno;
        use nix::sys::wait::{waitpid, WaitStatus};
        use nix::unistd::Pid;

        match waitpid(Pid::from_raw(pid), None) {
            Ok(WaitStatus::Exited(pid, code)) => Ok(WaitOutcome::Changed {
                pid: pid.as_raw(),
                status: ChildStatus::Exited(code),
            }),
            Ok(WaitStatus::Signaled(pid, signal, _)) => Ok(WaitOutcome::Changed {
                pid: pid.as_raw(),
                status: ChildStatus::Signaled(signal as i32),
            }),
            Ok(other) => Ok(WaitOutcome::Changed {
                pid: other.pid().map_or(pid, Pid::as_raw),
                status: ChildStatus::Other,
            }),
            Err(Errno::EINTR) => Ok(WaitOutcome::Interrupted),
            Err(errno) => Err(WrapShellError::WaitFailed {
                source: errno.into(),
            }),
        }
    }

    fn exec(&mut self, shell: &LaunchDescriptor) -> Result<()> {
        super::exec::exec_shell(shell)
    }
}

#[cfg(not(unix))]
impl ProcessControl for SystemProcesses {
    fn spawn(&mut self, shell: &LaunchDescriptor) -> Result<i32> {
        use std::process::Command;

        let binary = shell
            .binary_path()
            .ok_or(WrapShellError::ShellNotFound { kind: shell.kind() })?;
        let child = Command::new(super::exec::program_path(binary))
            .args(shell.args())
            .spawn()
            .map_err(|source| WrapShellError::ForkFailed { source })?;
        let pid = child_pid(child.id())?;
        self.children.insert(pid, child);
        Ok(pid)
    }

    fn wait(&mut self, pid: i32) -> Result<WaitOutcome> {
        let child = self
            .children
            .get_mut(&pid)
            .ok_or_else(|| WrapShellError::WaitFailed {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such child"),
            })?;
        let status = child
            .wait()
            .map_err(|source| WrapShellError::WaitFailed { source })?;
        Ok(WaitOutcome::Changed {
            pid,
            status: ChildStatus::Exited(status.code().unwrap_or(1)),
        })
    }

    fn exec(&mut self, shell: &LaunchDescriptor) -> Result<()> {
        super::exec::exec_shell(shell)
    }
}

/// Narrow an OS process id to the `i32` pids used by [`ProcessControl`].
#[cfg(any(not(unix), test))]
fn child_pid(id: u32) -> Result<i32> {
    i32::try_from(id).map_err(|_| WrapShellError::ForkFailed {
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("child process id {} does not fit in a pid", id),
        ),
    })
}


#[cfg(test)]
mod tests {
    use super::mock::{Event, MockProcesses};
    use super::*;
    use std::path::PathBuf;

    fn fish() -> LaunchDescriptor {
        LaunchDescriptor::new(
            ShellKind::Fish,
            PathBuf::from("/usr/bin/fish"),
            Vec::<String>::new(),
        )
    }

    fn zsh() -> LaunchDescriptor {
        LaunchDescriptor::new(
            ShellKind::Zsh,
            PathBuf::from("/bin/zsh"),
            Vec::<String>::new(),
        )
    }

    #[test]
    fn falls_back_after_primary_exits() {
        let processes = MockProcesses::new(42).then_wait(WaitOutcome::Changed {
            pid: 42,
            status: ChildStatus::Exited(3),
        });
        let mut supervisor = Supervisor::new(processes);

        supervisor.run(&fish(), &zsh()).unwrap();

        let processes = supervisor.into_inner();
        assert_eq!(
            processes.events,
            vec![
                Event::Spawn(PathBuf::from("/usr/bin/fish")),
                Event::Wait(42),
                Event::Exec(PathBuf::from("/bin/zsh")),
            ]
        );
    }

    #[test]
    fn falls_back_after_signal() {
        let processes = MockProcesses::new(7).then_wait(WaitOutcome::Changed {
            pid: 7,
            status: ChildStatus::Signaled(9),
        });
        let mut supervisor = Supervisor::new(processes);

        assert_eq!(supervisor.supervise(7).unwrap(), PrimaryOutcome::Signaled(9));
    }

    #[test]
    fn retries_interrupted_waits() {
        let processes = MockProcesses::new(42)
            .then_wait(WaitOutcome::Interrupted)
            .then_wait(WaitOutcome::Interrupted)
            .then_wait(WaitOutcome::Changed {
                pid: 42,
                status: ChildStatus::Exited(0),
            });
        let mut supervisor = Supervisor::new(processes);

        supervisor.run(&fish(), &zsh()).unwrap();

        let processes = supervisor.into_inner();
        let waits = processes
            .events
            .iter()
            .filter(|e| matches!(e, Event::Wait(_)))
            .count();
        assert_eq!(waits, 3);
        assert_eq!(processes.execs().len(), 1);
    }

    #[test]
    fn keeps_waiting_through_non_terminal_changes() {
        let processes = MockProcesses::new(42)
            .then_wait(WaitOutcome::Changed {
                pid: 42,
                status: ChildStatus::Other,
            })
            .then_wait(WaitOutcome::Changed {
                pid: 42,
                status: ChildStatus::Exited(1),
            });
        let mut supervisor = Supervisor::new(processes);

        assert_eq!(supervisor.supervise(42).unwrap(), PrimaryOutcome::Exited(1));
    }

    #[test]
    fn unexpected_pid_is_fatal() {
        let processes = MockProcesses::new(42).then_wait(WaitOutcome::Changed {
            pid: 99,
            status: ChildStatus::Exited(0),
        });
        let mut supervisor = Supervisor::new(processes);

        let err = supervisor.run(&fish(), &zsh()).unwrap_err();

        assert!(matches!(
            err,
            WrapShellError::UnexpectedChild {
                expected: 42,
                actual: 99
            }
        ));
        assert!(supervisor.into_inner().execs().is_empty());
    }

    #[test]
    fn wait_error_is_fatal() {
        let processes = MockProcesses::new(42).then_wait_err(WrapShellError::WaitFailed {
            source: std::io::Error::from_raw_os_error(10),
        });
        let mut supervisor = Supervisor::new(processes);

        let err = supervisor.run(&fish(), &zsh()).unwrap_err();

        assert!(matches!(err, WrapShellError::WaitFailed { .. }));
        assert!(supervisor.into_inner().execs().is_empty());
    }

    #[test]
    fn missing_fallback_never_spawns() {
        let mut supervisor = Supervisor::new(MockProcesses::new(42));

        let err = supervisor
            .run(&fish(), &LaunchDescriptor::missing())
            .unwrap_err();

        assert!(matches!(
            err,
            WrapShellError::ShellNotFound {
                kind: ShellKind::Sh
            }
        ));
        assert_eq!(supervisor.into_inner().spawns(), 0);
    }

    #[test]
    fn child_pid_accepts_valid_ids() {
        assert_eq!(child_pid(4242).unwrap(), 4242);
        assert_eq!(child_pid(i32::MAX as u32).unwrap(), i32::MAX);
    }

    #[test]
    fn child_pid_rejects_ids_out_of_range() {
        let err = child_pid(u32::MAX).unwrap_err();
        assert!(matches!(err, WrapShellError::ForkFailed { .. }));
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn report_describes_exit() {
        let report = fallback_report(Path::new("/bin/zsh"), PrimaryOutcome::Exited(0));
        assert_eq!(
            report,
            "Falling back to fallback shell (/bin/zsh):\n  Original shell exited successfully\n"
        );
    }

    #[test]
    fn report_describes_failure_and_signal() {
        let failed = fallback_report(Path::new("/bin/zsh"), PrimaryOutcome::Exited(2));
        assert!(failed.contains("failed with exit code 2"));

        let killed = fallback_report(Path::new("/bin/zsh"), PrimaryOutcome::Signaled(15));
        assert!(killed.contains("was killed by signal 15"));
    }
}
