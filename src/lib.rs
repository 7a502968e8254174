//! A test run listener which pops up a `growlnotify` desktop notification
//! summarising the run once the outermost test suite has finished.

pub use self::config::Config;
pub use self::event_handler::{EventHandler, GrowlListener};
pub use self::notifier::{Growlnotify, Notifier};
pub use self::summary::{Summary, Verdict};

pub use self::errors::*;

pub mod config;
mod errors;
pub mod event_handler;
pub mod model;
pub mod notifier;
mod print;
pub mod run;
pub mod summary;
mod timer;

#[macro_use]
extern crate error_chain;
#[cfg(feature = "clap")]
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
