//! Routines for driving event handlers through a test run.

use crate::event_handler::EventHandler;
use crate::model::*;

/// Reports a recorded test suite to an event handler.
///
/// Events are emitted in the order a test runner produces them: the suite
/// starts, each test starts, reports its outcome and finishes, nested suites
/// run in place, and finally the suite finishes.
///
/// Return `Ok` if no test failed or errored, and `Err` otherwise.
pub fn suite(
    test_suite: &TestSuite,
    event_handler: &mut dyn EventHandler,
    ) -> Result<(), ()> {
    let is_successful = self::nested_suite(test_suite, event_handler);

    if is_successful { Ok(()) } else { Err(()) }
}

/// Runs a suite and everything inside it.
///
/// Returns `true` if none of the tests failed.
fn nested_suite(
    test_suite: &TestSuite,
    event_handler: &mut dyn EventHandler,
    ) -> bool {
    let details = test_suite.details();
    event_handler.on_test_suite_started(&details);

    let mut has_failure = false;
    for item in test_suite.items.iter() {
        let is_successful = match *item {
            SuiteItem::Suite(ref inner) => self::nested_suite(inner, event_handler),
            SuiteItem::Test(ref test_case) => self::single_test(test_case, event_handler),
        };

        if !is_successful { has_failure = true; }
    }

    event_handler.on_test_suite_finished(&details);
    !has_failure
}

fn single_test(
    test_case: &TestCase,
    event_handler: &mut dyn EventHandler,
    ) -> bool {
    let TestCase { ref test, ref outcome, elapsed } = *test_case;

    event_handler.on_test_started(test);

    match *outcome {
        Outcome::Pass => (),
        Outcome::Error(ref cause) => event_handler.on_test_error(test, cause, elapsed),
        Outcome::Failure(ref cause) => event_handler.on_test_failure(test, cause, elapsed),
        Outcome::Incomplete(ref cause) => event_handler.on_test_incomplete(test, cause, elapsed),
        Outcome::Skip(ref cause) => event_handler.on_test_skipped(test, cause, elapsed),
    }

    event_handler.on_test_finished(test, elapsed);

    !outcome.is_erroneous()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    /// Records every event as a line of text.
    #[derive(Default)]
    struct EventLog(Vec<String>);

    impl EventHandler for EventLog {
        fn on_test_suite_started(&mut self, suite: &TestSuiteDetails) { self.0.push(format!("suite start {}", suite.name)) }
        fn on_test_suite_finished(&mut self, suite: &TestSuiteDetails) { self.0.push(format!("suite end {}", suite.name)) }
        fn on_test_started(&mut self, test: &Test) { self.0.push(format!("start {}", test.name)) }
        fn on_test_finished(&mut self, test: &Test, _: Duration) { self.0.push(format!("end {}", test.name)) }
        fn on_test_error(&mut self, test: &Test, c: &Cause, _: Duration) { self.0.push(format!("error {}: {}", test.name, c.message)) }
        fn on_test_failure(&mut self, test: &Test, c: &Cause, _: Duration) { self.0.push(format!("failure {}: {}", test.name, c.message)) }
        fn on_test_incomplete(&mut self, test: &Test, c: &Cause, _: Duration) { self.0.push(format!("incomplete {}: {}", test.name, c.message)) }
        fn on_test_skipped(&mut self, test: &Test, c: &Cause, _: Duration) { self.0.push(format!("skip {}: {}", test.name, c.message)) }
    }

    fn test_case(name: &str, outcome: Outcome) -> TestCase {
        TestCase::new(Test::new(name, 1), outcome, Duration::from_millis(3))
    }

    #[test]
    fn events_follow_nesting_order() {
        let suite = TestSuite::new("outer")
            .with_test(test_case("a", Outcome::Pass))
            .with_suite(TestSuite::new("inner")
                .with_test(test_case("b", Outcome::Skip(Cause::new("no network")))))
            .with_test(test_case("c", Outcome::Incomplete(Cause::new("todo"))));

        let mut log = EventLog::default();
        assert_eq!(self::suite(&suite, &mut log), Ok(()));

        assert_eq!(log.0, vec![
            "suite start outer",
            "start a",
            "end a",
            "suite start inner",
            "start b",
            "skip b: no network",
            "end b",
            "suite end inner",
            "start c",
            "incomplete c: todo",
            "end c",
            "suite end outer",
        ]);
    }

    #[test]
    fn failures_and_errors_fail_the_run() {
        let failing = TestSuite::new("s").with_test(test_case("a", Outcome::Failure(Cause::new("1 != 2"))));
        let erroring = TestSuite::new("s").with_suite(
            TestSuite::new("t").with_test(test_case("a", Outcome::Error(Cause::new("panicked")))));

        assert_eq!(self::suite(&failing, &mut EventLog::default()), Err(()));
        assert_eq!(self::suite(&erroring, &mut EventLog::default()), Err(()));
    }
}
