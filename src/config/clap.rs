//! Routines for exposing a command line interface via the `clap` crate.
//!
//! These routines can be used to update `Config` objects with automatic CLI arguments.

use crate::{Config, Error, ErrorKind, Result};
use clap::{App, Arg, ArgMatches};

lazy_static! {
    static ref OPTION_HELP: String = {
        let keys = crate::config::OPTION_KEYS.join(", ");

        format!("Sets a notifier option. Recognised keys are: {}. Other keys are kept verbatim", keys)
    };
}

/// Mounts the notification arguments into a `clap` CLI application.
pub fn mount_inside_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
    app
        .arg(Arg::with_name("growl-success-image")
            .long("growl-success-image")
            .takes_value(true)
            .value_name("PATH")
            .help("Image to show when all tests pass"))
        .arg(Arg::with_name("growl-incomplete-image")
            .long("growl-incomplete-image")
            .takes_value(true)
            .value_name("PATH")
            .help("Image to show when tests were skipped or incomplete"))
        .arg(Arg::with_name("growl-failure-image")
            .long("growl-failure-image")
            .takes_value(true)
            .value_name("PATH")
            .help("Image to show when tests failed or errored"))
        .arg(Arg::with_name("growl-parameter")
            .long("growl-parameter")
            .takes_value(true)
            .allow_hyphen_values(true)
            .value_name("ARGS")
            .help("Extra arguments passed verbatim to the notifier"))
        .arg(Arg::with_name("growl-sender")
            .long("growl-sender")
            .takes_value(true)
            .value_name("NAME")
            .help("The application name notifications are sent as"))
        .arg(Arg::with_name("growl-priority")
            .long("growl-priority")
            .takes_value(true)
            .allow_hyphen_values(true)
            .value_name("N")
            .help("The notification priority, from -2 to 2"))
        .arg(Arg::with_name("growl-option")
            .long("growl-option")
            .takes_value(true)
            .value_name("KEY>=<VALUE") // this shows as '<KEY>=<VALUE>'
            .multiple(true)
            .number_of_values(1)
            .help(&OPTION_HELP[..]))
        .arg(Arg::with_name("growl-echo")
            .long("growl-echo")
            .help("Also print the summary to the terminal"))
}

/// Parses command line arguments from `clap` into a destination `Config` object.
pub fn parse_arguments(matches: &ArgMatches,
                       destination_config: &mut Config) -> Result<()> {
    if let Some(path) = matches.value_of("growl-success-image") {
        destination_config.success_picture_path = path.into();
    }
    if let Some(path) = matches.value_of("growl-incomplete-image") {
        destination_config.incomplete_picture_path = path.into();
    }
    if let Some(path) = matches.value_of("growl-failure-image") {
        destination_config.failure_picture_path = path.into();
    }

    if let Some(option_strs) = matches.values_of("growl-option") {
        for option_str in option_strs {
            let option: OptionDefinition = option_str.parse()?;
            destination_config.set_option(option.key, option.value)?;
        }
    }

    // Dedicated flags win over the generic option list.
    if let Some(parameter) = matches.value_of("growl-parameter") {
        destination_config.set_option("parameter", parameter)?;
    }
    if let Some(sender) = matches.value_of("growl-sender") {
        destination_config.set_option("sender", sender)?;
    }

    if let Some(priority) = matches.value_of("growl-priority") {
        destination_config.set_option("priority", priority)?;
    }

    if matches.is_present("growl-echo") {
        destination_config.echo_summary = true;
    }

    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OptionDefinition {
    pub key: String,
    pub value: String,
}

impl std::str::FromStr for OptionDefinition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let equals_index = match s.find('=') {
            Some(i) => i,
            None => bail!(ErrorKind::InvalidOption(s.to_owned())),
        };

        let (key, value) = s.split_at(equals_index);
        let value = &value[1..]; // trim equals
        let (key, value) = (key.trim().to_owned(), value.trim().to_owned());

        if key.is_empty() {
            bail!(ErrorKind::InvalidOption(s.to_owned()));
        }

        Ok(OptionDefinition { key, value })
    }
}
