//! The end-of-run summary: counts, verdict, and the notification message.

use crate::timer;
use std::fmt;
use std::time::Duration;

/// The overall outcome of a completed test run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verdict
{
    /// Every test passed.
    Green,
    /// At least one test failed or errored.
    Red,
    /// Nothing failed, but some tests were incomplete or skipped.
    Yellow,
}

/// The counts gathered over a test run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary
{
    pub suite_count: usize,
    pub test_count: usize,
    pub assertion_count: u64,
    pub failure_count: usize,
    pub error_count: usize,
    pub incomplete_count: usize,
    pub skip_count: usize,
}

impl Summary
{
    /// Derives the verdict. Red wins over yellow, yellow wins over green.
    pub fn verdict(&self) -> Verdict {
        if self.error_count > 0 || self.failure_count > 0 {
            Verdict::Red
        } else if self.incomplete_count > 0 || self.skip_count > 0 {
            Verdict::Yellow
        } else {
            Verdict::Green
        }
    }

    /// Builds the notification text, e.g.
    /// `Suites: 2, Tests: 4, Assertions: 9, Failures: 2, Errors: 1, Skips: 1 in 1.5 seconds.`
    pub fn message(&self, elapsed: Duration) -> String {
        let mut message = String::new();

        if self.suite_count > 1 {
            message.push_str(&format!("Suites: {}, ", self.suite_count));
        }
        message.push_str(&format!("Tests: {}, Assertions: {}", self.test_count, self.assertion_count));

        let clauses = [
            ("Failures", self.failure_count),
            ("Errors", self.error_count),
            ("Incompletes", self.incomplete_count),
            ("Skips", self.skip_count),
        ];

        for &(label, count) in clauses.iter().filter(|&&(_, count)| count > 0) {
            message.push_str(&format!(", {}: {}", label, count));
        }

        message.push_str(&format!(" in {}.", timer::format_duration(elapsed)));
        message
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Verdict::Green => write!(fmt, "green"),
            Verdict::Red => write!(fmt, "red"),
            Verdict::Yellow => write!(fmt, "yellow"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn summary_with(error_count: usize, failure_count: usize,
                    incomplete_count: usize, skip_count: usize) -> Summary {
        Summary { error_count, failure_count, incomplete_count, skip_count, ..Summary::default() }
    }

    #[test]
    fn verdict_truth_table() {
        for &has_error in [false, true].iter() {
            for &has_failure in [false, true].iter() {
                for &has_incomplete in [false, true].iter() {
                    for &has_skip in [false, true].iter() {
                        let summary = summary_with(has_error as usize, has_failure as usize,
                                                   has_incomplete as usize, has_skip as usize);

                        let expected = if has_error || has_failure {
                            Verdict::Red
                        } else if has_incomplete || has_skip {
                            Verdict::Yellow
                        } else {
                            Verdict::Green
                        };

                        assert_eq!(summary.verdict(), expected, "for {:?}", summary);
                    }
                }
            }
        }
    }

    #[test]
    fn single_clean_suite_has_no_prefix_or_clauses() {
        let summary = Summary { suite_count: 1, test_count: 3, assertion_count: 5, ..Summary::default() };

        assert_eq!(summary.message(Duration::from_millis(1500)),
                   "Tests: 3, Assertions: 5 in 1.5 seconds.");
    }

    #[test]
    fn clauses_follow_fixed_order_and_skip_zero_counts() {
        let summary = Summary {
            suite_count: 2,
            test_count: 4,
            assertion_count: 7,
            failure_count: 2,
            error_count: 1,
            incomplete_count: 0,
            skip_count: 1,
        };

        assert_eq!(summary.message(Duration::from_millis(250)),
                   "Suites: 2, Tests: 4, Assertions: 7, Failures: 2, Errors: 1, Skips: 1 in 250 ms.");
    }

    #[test]
    fn incompletes_clause_is_shown_when_nonzero() {
        let summary = Summary { suite_count: 1, test_count: 2, incomplete_count: 2, ..Summary::default() };

        assert_eq!(summary.message(Duration::from_secs(1)),
                   "Tests: 2, Assertions: 0, Incompletes: 2 in 1 second.");
    }
}
