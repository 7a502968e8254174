use crate::{Config, ErrorKind, Result, print};
use crate::model::{Cause, Test, TestSuiteDetails};
use crate::notifier::{Dispatched, Growlnotify, Notification, Notifier};
use crate::summary::{Summary, Verdict};
use crate::timer::Timer;

use std::time::Duration;

/// Where a listener is in the lifecycle of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase
{
    /// No suite has started yet.
    NotStarted,
    Running,
    /// The outermost suite has finished and the summary was sent.
    Completed,
}

/// Everything recorded over a test run, in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunState
{
    /// Names of all started suites, nested ones included.
    pub suites: Vec<String>,
    /// Every finished test.
    pub tests: Vec<Test>,
    pub errors: Vec<String>,
    pub failures: Vec<String>,
    pub incompletes: Vec<String>,
    pub skips: Vec<String>,
    /// The sum of the assertion counts of all finished tests.
    pub assertion_count: u64,
    pub finished_suite_count: usize,
}

impl RunState
{
    pub fn summary(&self) -> Summary {
        Summary {
            suite_count: self.suites.len(),
            test_count: self.tests.len(),
            assertion_count: self.assertion_count,
            failure_count: self.failures.len(),
            error_count: self.errors.len(),
            incomplete_count: self.incompletes.len(),
            skip_count: self.skips.len(),
        }
    }

    /// Whether every started suite has also finished.
    pub fn is_complete(&self) -> bool {
        !self.suites.is_empty() && self.finished_suite_count >= self.suites.len()
    }
}

/// Listens to a test run and shows a desktop notification summarising it
/// once the outermost suite finishes.
///
/// Nested suites are not tracked individually: the run is over as soon as
/// the number of finished suites catches up with the number of started ones.
pub struct GrowlListener<N: Notifier = Growlnotify>
{
    config: Config,
    notifier: N,
    state: RunState,
    phase: Phase,
    timer: Timer,
    last_dispatch: Option<Result<Dispatched>>,
}

impl GrowlListener<Growlnotify>
{
    /// Creates a listener which runs the notifier program named in the config.
    pub fn new(config: Config) -> Self {
        let notifier = Growlnotify::from_config(&config);
        GrowlListener::with_notifier(config, notifier)
    }
}

impl<N: Notifier> GrowlListener<N>
{
    /// Creates a listener which shows its summary through a custom notifier.
    pub fn with_notifier(config: Config, notifier: N) -> Self {
        GrowlListener {
            config,
            notifier,
            state: RunState::default(),
            phase: Phase::NotStarted,
            timer: Timer::new(),
            last_dispatch: None,
        }
    }

    pub fn config(&self) -> &Config { &self.config }
    pub fn notifier(&self) -> &N { &self.notifier }
    pub fn state(&self) -> &RunState { &self.state }
    pub fn phase(&self) -> Phase { self.phase }

    /// Takes the outcome of the end-of-run notification, if one was attempted.
    ///
    /// The callbacks cannot report errors to the runner, so the host decides
    /// here whether e.g. a missing notifier should fail the run.
    pub fn take_dispatch_result(&mut self) -> Option<Result<Dispatched>> {
        self.last_dispatch.take()
    }

    /// Sends a summary message with the image matching the verdict.
    ///
    /// Fails with `NotifierUnavailable`, without sending anything, if the
    /// notifier does not respond to its availability check.
    pub fn send_notification(&self, verdict: Verdict, message: &str) -> Result<Dispatched> {
        if !self.notifier.is_available() {
            bail!(ErrorKind::NotifierUnavailable(self.config.notifier_program.clone()));
        }

        let notification = Notification {
            message: message.to_owned(),
            sender: self.config.sender.clone(),
            priority: self.config.priority,
            image: self.config.picture_for(verdict).to_owned(),
            parameter: self.config.parameter().to_owned(),
        };

        let dispatched = self.notifier.notify(&notification)?;
        info!("sent {} notification: {}", verdict, message);

        Ok(dispatched)
    }

    fn complete_run(&mut self) {
        let elapsed = self.timer.stop();
        self.phase = Phase::Completed;

        let summary = self.state.summary();
        let verdict = summary.verdict();
        let message = summary.message(elapsed);

        info!("test run finished ({}): {}", verdict, message);

        if self.config.echo_summary {
            print::summary(verdict, &message);
        }

        let result = self.send_notification(verdict, &message);

        if let Err(ref e) = result {
            warn!("could not show test run summary: {}", e);
        }

        self.last_dispatch = Some(result);
    }
}

impl<N: Notifier> super::EventHandler for GrowlListener<N>
{
    fn on_test_suite_started(&mut self, suite: &TestSuiteDetails) {
        debug!("suite started: {}", suite.name);

        match self.phase {
            Phase::NotStarted => {
                self.timer.start();
                self.phase = Phase::Running;
            },
            Phase::Running => (),
            Phase::Completed => {
                warn!("suite '{}' started after the test run completed, ignoring it", suite.name);
                return;
            },
        }

        self.state.suites.push(suite.name.clone());
    }

    fn on_test_suite_finished(&mut self, suite: &TestSuiteDetails) {
        debug!("suite finished: {}", suite.name);

        if self.phase != Phase::Running {
            warn!("suite '{}' finished while no test run was in progress, ignoring it", suite.name);
            return;
        }

        self.state.finished_suite_count += 1;

        if self.state.is_complete() {
            self.complete_run();
        }
    }

    fn on_test_started(&mut self, _: &Test) { }

    fn on_test_finished(&mut self, test: &Test, _: Duration) {
        debug!("test finished: {} ({} assertions)", test.name, test.assertion_count);

        self.state.assertion_count += test.assertion_count;
        self.state.tests.push(test.clone());
    }

    fn on_test_error(&mut self, test: &Test, _: &Cause, _: Duration) {
        self.state.errors.push(test.name.clone());
    }

    fn on_test_failure(&mut self, test: &Test, _: &Cause, _: Duration) {
        self.state.failures.push(test.name.clone());
    }

    fn on_test_incomplete(&mut self, test: &Test, _: &Cause, _: Duration) {
        self.state.incompletes.push(test.name.clone());
    }

    fn on_test_skipped(&mut self, test: &Test, _: &Cause, _: Duration) {
        self.state.skips.push(test.name.clone());
    }
}
