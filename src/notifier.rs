//! Delivery of notifications through an external notifier process.

use crate::{Config, Result, ResultExt};
use itertools::Itertools;
use std::fmt;
use std::path::PathBuf;
use std::process;

const DEFAULT_SHELL: &'static str = "sh";

/// A notification, ready to be handed to a notifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification
{
    pub message: String,
    /// The application the notification is sent as.
    pub sender: String,
    pub priority: i8,
    pub image: PathBuf,
    /// Extra command line text, forwarded verbatim.
    pub parameter: String,
}

/// The output of a finished notifier process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramOutput
{
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was killed by a signal.
    pub exit_status: Option<i32>,
}

/// A shell command line.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommandLine(pub String);

/// Record of a notification which was handed to the notifier.
///
/// The output is kept for inspection only; a nonzero exit status is not
/// treated as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatched
{
    pub command_line: CommandLine,
    pub output: ProgramOutput,
}

/// Something which can show desktop notifications.
pub trait Notifier
{
    /// Checks whether the notifier can be used at all.
    fn is_available(&self) -> bool;

    /// Shows a notification.
    fn notify(&self, notification: &Notification) -> Result<Dispatched>;
}

impl<'a, N> Notifier for &'a N
    where N: Notifier + ?Sized {
    fn is_available(&self) -> bool { (**self).is_available() }

    fn notify(&self, notification: &Notification) -> Result<Dispatched> {
        (**self).notify(notification)
    }
}

/// Runs the `growlnotify` command line tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Growlnotify
{
    /// The executable, looked up in `PATH` unless absolute.
    pub program: String,
}

impl Growlnotify
{
    pub fn new<S>(program: S) -> Self
        where S: Into<String> {
        Growlnotify { program: program.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Growlnotify::new(config.notifier_program.clone())
    }

    /// Builds the shell command line which shows a notification.
    pub fn command_line(&self, notification: &Notification) -> CommandLine {
        let parts = [
            quote(&self.program),
            notification.parameter.clone(),
            format!("-m {}", quote(&notification.message)),
            format!("-n {}", quote(&notification.sender)),
            format!("-p {}", notification.priority),
            format!("--image {}", quote(&notification.image.to_string_lossy())),
        ];

        CommandLine(parts.iter().filter(|p| !p.trim().is_empty()).join(" "))
    }
}

impl Default for Growlnotify
{
    fn default() -> Self {
        Growlnotify::new(crate::config::DEFAULT_NOTIFIER_PROGRAM)
    }
}

impl Notifier for Growlnotify
{
    fn is_available(&self) -> bool {
        debug!("probing notifier: {} -v", self.program);

        match process::Command::new(&self.program).arg("-v").output() {
            Ok(output) => output.status.success(),
            Err(e) => {
                debug!("could not run '{}': {}", self.program, e);
                false
            },
        }
    }

    fn notify(&self, notification: &Notification) -> Result<Dispatched> {
        let command_line = self.command_line(notification);
        debug!("running notifier: {}", command_line);

        let mut cmd = process::Command::new(DEFAULT_SHELL);
        cmd.args(&["-c", &command_line.0]);

        let output = cmd.output()
            .chain_err(|| format!("could not run the notifier through '{}'", DEFAULT_SHELL))?;

        let output = ProgramOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_status: output.status.code(),
        };

        if output.exit_status != Some(0) {
            debug!("notifier exited with {:?}: {}", output.exit_status, output.stderr.trim());
        }

        Ok(Dispatched { command_line, output })
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

/// Wraps text in single quotes for the shell.
fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "'\\''"))
}
