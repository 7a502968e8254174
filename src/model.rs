//! The values passed from a test runner to its event handlers.

use std::time::Duration;

/// A single test, as seen by an event handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Test
{
    pub name: String,
    /// The number of assertions the test executed.
    pub assertion_count: u64,
}

/// Stores details about a test suite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestSuiteDetails
{
    pub name: String,
}

/// Why a test did not pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cause
{
    pub message: String,
}

/// How a test ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome
{
    Pass,
    /// The test raised an unexpected error.
    Error(Cause),
    /// An assertion did not hold.
    Failure(Cause),
    /// The test is marked as not yet finished.
    Incomplete(Cause),
    Skip(Cause),
}

/// A test together with the result of running it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase
{
    pub test: Test,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

/// An entry inside a test suite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuiteItem
{
    Suite(TestSuite),
    Test(TestCase),
}

/// A named, possibly nested group of tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestSuite
{
    pub name: String,
    pub items: Vec<SuiteItem>,
}

impl Test
{
    pub fn new<S>(name: S, assertion_count: u64) -> Self
        where S: Into<String> {
        Test { name: name.into(), assertion_count }
    }
}

impl Cause
{
    pub fn new<S>(message: S) -> Self
        where S: Into<String> {
        Cause { message: message.into() }
    }
}

impl TestCase
{
    pub fn new(test: Test, outcome: Outcome, elapsed: Duration) -> Self {
        TestCase { test, outcome, elapsed }
    }
}

impl TestSuite
{
    /// Creates an empty suite.
    pub fn new<S>(name: S) -> Self
        where S: Into<String> {
        TestSuite { name: name.into(), items: Vec::new() }
    }

    /// Adds a test case to the end of the suite.
    pub fn with_test(mut self, test_case: TestCase) -> Self {
        self.items.push(SuiteItem::Test(test_case));
        self
    }

    /// Adds a nested suite to the end of the suite.
    pub fn with_suite(mut self, suite: TestSuite) -> Self {
        self.items.push(SuiteItem::Suite(suite));
        self
    }

    pub fn details(&self) -> TestSuiteDetails {
        TestSuiteDetails { name: self.name.clone() }
    }
}

impl Outcome
{
    /// Checks if the outcome makes the whole run fail.
    pub fn is_erroneous(&self) -> bool {
        match *self {
            Outcome::Error(..) | Outcome::Failure(..) => true,
            _ => false,
        }
    }
}
