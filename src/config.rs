use crate::{ErrorKind, Result};
use crate::summary::Verdict;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[cfg(feature = "clap")]
pub mod clap;

/// The notifier executable which is used unless configured otherwise.
pub const DEFAULT_NOTIFIER_PROGRAM: &'static str = "growlnotify";
/// The application label notifications are sent under.
///
/// Hosts normally pass their own name through the `sender` option, this is
/// only what Growl shows when they don't.
pub const DEFAULT_SENDER: &'static str = "Test Runner";
/// `growlnotify -p 2` is the highest ("emergency") priority.
pub const DEFAULT_PRIORITY: i8 = 2;

/// Option keys understood by `Config::new`.
pub const OPTION_KEYS: &'static [&'static str] = &["parameter", "sender", "priority", "notifier"];

/// The notification settings of a listener.
///
/// A listener takes its own copy at construction, so the settings cannot
/// change over the course of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config
{
    /// Image shown when every test passed.
    pub success_picture_path: PathBuf,
    /// Image shown for incomplete or skipped tests, and for anything
    /// which is neither a success nor a failure.
    pub incomplete_picture_path: PathBuf,
    /// Image shown when a test failed or errored.
    pub failure_picture_path: PathBuf,
    /// Free-form options, `parameter` holds extra command line text which is
    /// forwarded to the notifier verbatim.
    pub options: HashMap<String, String>,
    /// The application name notifications are sent as.
    pub sender: String,
    /// The `growlnotify -p` priority, from -2 to 2.
    pub priority: i8,
    /// The notifier executable, looked up in `PATH` unless absolute.
    pub notifier_program: String,
    /// Whether the summary should also be written to the terminal.
    pub echo_summary: bool,
}

impl Config
{
    /// Creates a new config from the three verdict images and an option map.
    ///
    /// Fails if the `priority` option is not an integer.
    pub fn new<P1, P2, P3>(success_picture_path: P1,
                           incomplete_picture_path: P2,
                           failure_picture_path: P3,
                           options: HashMap<String, String>) -> Result<Self>
        where P1: Into<PathBuf>, P2: Into<PathBuf>, P3: Into<PathBuf> {
        let mut config = Config {
            success_picture_path: success_picture_path.into(),
            incomplete_picture_path: incomplete_picture_path.into(),
            failure_picture_path: failure_picture_path.into(),
            ..Config::default()
        };

        for (key, value) in options {
            config.set_option(key, value)?;
        }

        Ok(config)
    }

    /// Sets an option, applying the keys which map onto dedicated fields.
    pub fn set_option<K, V>(&mut self, key: K, value: V) -> Result<()>
        where K: Into<String>, V: Into<String> {
        let (key, value) = (key.into(), value.into());

        match &key[..] {
            "sender" => self.sender = value.clone(),
            "notifier" => self.notifier_program = value.clone(),
            "priority" => {
                self.priority = match value.trim().parse() {
                    Ok(p) => p,
                    Err(_) => bail!(ErrorKind::InvalidPriority(value)),
                };
            },
            _ => (),
        }

        self.options.insert(key, value);
        Ok(())
    }

    /// The extra command line text forwarded to the notifier.
    pub fn parameter(&self) -> &str {
        self.options.get("parameter").map(|p| &p[..]).unwrap_or("")
    }

    /// Picks the image to show for a verdict.
    pub fn picture_for(&self, verdict: Verdict) -> &Path {
        match verdict {
            Verdict::Red => &self.failure_picture_path,
            Verdict::Green => &self.success_picture_path,
            // Yellow, and any other outcome, falls back to the incomplete image.
            _ => &self.incomplete_picture_path,
        }
    }
}

impl Default for Config
{
    fn default() -> Self {
        let mut options = HashMap::new();
        options.insert("parameter".to_owned(), String::new());

        Config {
            success_picture_path: PathBuf::new(),
            incomplete_picture_path: PathBuf::new(),
            failure_picture_path: PathBuf::new(),
            options,
            sender: DEFAULT_SENDER.to_owned(),
            priority: DEFAULT_PRIORITY,
            notifier_program: DEFAULT_NOTIFIER_PROGRAM.to_owned(),
            echo_summary: false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config_with_options(options: &[(&str, &str)]) -> Result<Config> {
        let options = options.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())).collect();
        Config::new("/img/pass.png", "/img/incomplete.png", "/img/fail.png", options)
    }

    #[test]
    fn parameter_defaults_to_empty() {
        assert_eq!(Config::default().parameter(), "");
        assert_eq!(config_with_options(&[]).unwrap().parameter(), "");
    }

    #[test]
    fn parameter_is_read_from_options() {
        let config = config_with_options(&[("parameter", "--sticky --wait")]).unwrap();
        assert_eq!(config.parameter(), "--sticky --wait");
    }

    #[test]
    fn sender_and_notifier_options_override_defaults() {
        let config = config_with_options(&[("sender", "cargo"), ("notifier", "/opt/bin/growlnotify")]).unwrap();

        assert_eq!(config.sender, "cargo");
        assert_eq!(config.notifier_program, "/opt/bin/growlnotify");
        assert_eq!(config.options.get("sender").map(|s| &s[..]), Some("cargo"));
    }

    #[test]
    fn unknown_options_are_kept_verbatim() {
        let config = config_with_options(&[("sticky", "yes")]).unwrap();

        assert_eq!(config.options.get("sticky").map(|s| &s[..]), Some("yes"));
        assert_eq!(config.sender, DEFAULT_SENDER);
        assert_eq!(config.priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn pictures_are_picked_by_verdict() {
        let config = config_with_options(&[]).unwrap();

        assert_eq!(config.picture_for(Verdict::Green), Path::new("/img/pass.png"));
        assert_eq!(config.picture_for(Verdict::Red), Path::new("/img/fail.png"));
        assert_eq!(config.picture_for(Verdict::Yellow), Path::new("/img/incomplete.png"));
    }

    #[test]
    fn priority_is_read_from_options() {
        let config = config_with_options(&[("priority", " -1 ")]).unwrap();
        assert_eq!(config.priority, -1);
    }

    #[test]
    fn malformed_priority_is_rejected() {
        match config_with_options(&[("priority", "urgent")]) {
            Err(crate::Error(ErrorKind::InvalidPriority(p), _)) => assert_eq!(p, "urgent"),
            r => panic!("unexpected result: {:?}", r),
        }
    }
}
