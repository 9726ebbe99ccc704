//! Limits on how much work an exhaustive search may do.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::{PathError, Result};

/// Expansion cap applied by [`SearchBudget::default`].
pub const DEFAULT_MAX_EXPANSIONS: u64 = 5_000_000;

/// The clock is read once per this many expansions.
const CLOCK_INTERVAL: u64 = 1024;

/// Shared flag a caller can trip to stop a running search.
///
/// Clones observe the same flag, so one clone can be handed to the search
/// while another is kept (possibly on another thread) to cancel it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Work limits for a single search call.
///
/// An *expansion* is one entry into a cell. The search fails with
/// [`PathError::ResourceExceeded`] as soon as any limit is hit.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchBudget {
    /// Maximum number of expansions, `None` for no cap.
    pub max_expansions: Option<u64>,
    /// Wall-clock allowance measured from the start of the call.
    pub timeout: Option<Duration>,
    /// Absolute deadline; combined with `timeout`, whichever comes first.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub deadline: Option<Instant>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub cancel: Option<CancelToken>,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
            timeout: None,
            deadline: None,
            cancel: None,
        }
    }
}

impl SearchBudget {
    /// A budget with no limits at all.
    pub fn unlimited() -> Self {
        Self {
            max_expansions: None,
            ..Self::default()
        }
    }

    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Start metering a call against this budget.
    pub(crate) fn meter(&self) -> Meter<'_> {
        let started = Instant::now();
        let by_timeout = self.timeout.and_then(|t| started.checked_add(t));
        let deadline = match (self.deadline, by_timeout) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        Meter {
            budget: self,
            deadline,
            started,
            expansions: 0,
        }
    }
}

/// Per-call expansion counter checked against a [`SearchBudget`].
pub(crate) struct Meter<'a> {
    budget: &'a SearchBudget,
    deadline: Option<Instant>,
    started: Instant,
    expansions: u64,
}

impl Meter<'_> {
    /// Count one expansion, failing if any limit is now exceeded.
    pub(crate) fn tick(&mut self) -> Result<()> {
        self.expansions += 1;
        if self.budget.max_expansions.is_some_and(|m| self.expansions > m) {
            return Err(self.exceeded());
        }
        if self.budget.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(self.exceeded());
        }
        if self.expansions % CLOCK_INTERVAL == 0
            && self.deadline.is_some_and(|d| Instant::now() >= d)
        {
            return Err(self.exceeded());
        }
        Ok(())
    }

    pub(crate) fn expansions(&self) -> u64 {
        self.expansions
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn exceeded(&self) -> PathError {
        PathError::ResourceExceeded {
            expansions: self.expansions,
            elapsed: self.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_trips_after_limit() {
        let budget = SearchBudget::unlimited().with_max_expansions(3);
        let mut m = budget.meter();
        for _ in 0..3 {
            m.tick().unwrap();
        }
        let err = m.tick().unwrap_err();
        assert!(matches!(
            err,
            PathError::ResourceExceeded { expansions: 4, .. }
        ));
    }

    #[test]
    fn unlimited_never_trips() {
        let budget = SearchBudget::unlimited();
        let mut m = budget.meter();
        for _ in 0..10_000 {
            m.tick().unwrap();
        }
        assert_eq!(m.expansions(), 10_000);
    }

    #[test]
    fn cancel_is_seen_by_clones() {
        let token = CancelToken::new();
        let budget = SearchBudget::unlimited().with_cancel(token.clone());
        let mut m = budget.meter();
        m.tick().unwrap();
        token.cancel();
        assert!(m.tick().is_err());
    }

    #[test]
    fn past_deadline_trips_on_clock_check() {
        let budget = SearchBudget::unlimited().with_timeout(Duration::ZERO);
        let mut m = budget.meter();
        let mut result = Ok(());
        for _ in 0..CLOCK_INTERVAL {
            result = m.tick();
            if result.is_err() {
                break;
            }
        }
        assert!(result.is_err());
        assert_eq!(m.expansions(), CLOCK_INTERVAL);
    }

    #[test]
    fn default_is_capped() {
        assert_eq!(
            SearchBudget::default().max_expansions,
            Some(DEFAULT_MAX_EXPANSIONS)
        );
    }
}
