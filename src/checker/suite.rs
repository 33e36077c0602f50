use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use super::{
    Check, CheckContext, CheckResult, CodeUniqueness, HeaderFilesExist, NamingConvention,
    NoAlphabeticSuffix, RootExists, SectionStructure, SizeLimits, TierCompleteness,
    ZeroPaddedPrefixes,
};
use crate::report::Aggregator;

/// Notified around every check, e.g. to stream progress.
pub trait SuiteObserver {
    fn check_started(&mut self, _index: usize, _total: usize, _name: &'static str) {}
    fn check_finished(&mut self, _result: &CheckResult) {}
}

impl SuiteObserver for () {}

/// Ordered list of checks, each run in isolation from the others.
pub struct CheckSuite {
    checks: Vec<Box<dyn Check>>,
}

impl CheckSuite {
    #[must_use]
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// The nine corpus checks in report order.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(RootExists),
            Box::new(TierCompleteness),
            Box::new(ZeroPaddedPrefixes),
            Box::new(SectionStructure),
            Box::new(CodeUniqueness),
            Box::new(NamingConvention),
            Box::new(NoAlphabeticSuffix),
            Box::new(HeaderFilesExist),
            Box::new(SizeLimits),
        ])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|c| c.name())
    }

    /// Run checks in order, feeding each result to the aggregator.
    ///
    /// Stops early only when the aggregator asks to.
    pub fn run(
        &self,
        ctx: &CheckContext<'_>,
        aggregator: &mut Aggregator,
        observer: &mut dyn SuiteObserver,
    ) {
        let total = self.checks.len();
        for (index, check) in self.checks.iter().enumerate() {
            observer.check_started(index, total, check.name());
            let result = run_isolated(check.as_ref(), ctx);
            debug!(
                check = result.check,
                status = result.status.as_str(),
                errors = result.errors(),
                warnings = result.warnings(),
                "check finished"
            );
            observer.check_finished(&result);

            if aggregator.record(result).is_break() {
                debug!(check = check.name(), "stopping after first failing check");
                break;
            }
        }
    }
}

/// Run one check, turning an error or a panic into a crashed result.
pub fn run_isolated(check: &dyn Check, ctx: &CheckContext<'_>) -> CheckResult {
    match panic::catch_unwind(AssertUnwindSafe(|| check.run(ctx))) {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            debug!(check = check.name(), error_type = e.error_type(), "check returned an error");
            CheckResult::crashed(check.name(), &e.to_string())
        }
        Err(payload) => {
            debug!(check = check.name(), "check panicked");
            CheckResult::crashed(check.name(), &panic_message(payload.as_ref()))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
