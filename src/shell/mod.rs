//! Shell detection, launching and fallback supervision.

pub mod descriptor;
pub mod detect;
pub mod exec;
pub mod kind;
pub mod supervisor;

pub use descriptor::{LaunchDescriptor, MAX_SHELL_ARGS};
pub use detect::{ShellDetector, DEFAULT_PYTHON};
pub use exec::exec_shell;
pub use kind::ShellKind;
pub use supervisor::{
    fallback_report, ChildStatus, PrimaryOutcome, ProcessControl, Supervisor, SystemProcesses,
    WaitOutcome,
};
