//! Echoing the run summary to the terminal.

use crate::summary::Verdict;

use std::io;
use std::io::prelude::*;
use term;

/// Prints the summary line in the colour of its verdict.
///
/// Terminal errors are ignored, the echo is purely informational.
pub fn summary(verdict: Verdict, message: &str) {
    let color = match verdict {
        Verdict::Green => term::color::GREEN,
        Verdict::Red => term::color::RED,
        Verdict::Yellow => term::color::YELLOW,
    };

    with(format!("{}\n", message), color).ok();
    reset_colors();
}

fn with<S>(msg: S, color: term::color::Color) -> io::Result<()>
    where S: Into<String> {
    match term::stdout().as_mut() {
        Some(color_term) => {
            color_term.fg(color).ok();
            write!(color_term, "{}", msg.into())
        },
        None => write!(io::stdout(), "{}", msg.into()),
    }
}

// 'cargo test' will use the color we last emitted if we don't do this.
fn reset_colors() {
    if let Some(color_term) = term::stdout().as_mut() {
        color_term.reset().ok();
    }
}
