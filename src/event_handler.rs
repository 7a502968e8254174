//! The events a test runner reports while it executes a run.
//!
//! All result reporting is driven through the `EventHandler` trait.

pub use self::growl::{GrowlListener, Phase, RunState};

use crate::model::{Cause, Test, TestSuiteDetails};
use std::time::Duration;

mod growl;

/// An object which listens to events that occur during a test run.
///
/// The runner calls these in nesting order: a suite finishes only after
/// every test and suite inside it has started and finished.
pub trait EventHandler {
    /// Called when a test suite, possibly nested inside another, starts.
    fn on_test_suite_started(&mut self, suite: &TestSuiteDetails);

    /// Called when a test suite has finished execution.
    fn on_test_suite_finished(&mut self, suite: &TestSuiteDetails);

    /// Called before a test is executed.
    fn on_test_started(&mut self, test: &Test);

    /// Called after a test has been executed, whatever its outcome.
    fn on_test_finished(&mut self, test: &Test, elapsed: Duration);

    /// Called when a test raised an unexpected error.
    fn on_test_error(&mut self, test: &Test, cause: &Cause, elapsed: Duration);

    /// Called when an assertion in a test failed.
    fn on_test_failure(&mut self, test: &Test, cause: &Cause, elapsed: Duration);

    /// Called when a test is marked incomplete.
    fn on_test_incomplete(&mut self, test: &Test, cause: &Cause, elapsed: Duration);

    /// Called when a test was skipped.
    fn on_test_skipped(&mut self, test: &Test, cause: &Cause, elapsed: Duration);
}
