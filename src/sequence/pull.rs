//! Pull results and the pull capability

/// Outcome of a single pull.
///
/// `Yielded` carries the next element (`done == false`); `Done` signals
/// completion and carries no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PullResult<T> {
    /// Next element of the sequence.
    Yielded(T),

    /// Sequence exhausted.
    Done,
}

impl<T> PullResult<T> {
    /// Whether this result signals completion.
    pub fn is_done(&self) -> bool {
        matches!(self, PullResult::Done)
    }

    /// Borrow the yielded value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            PullResult::Yielded(value) => Some(value),
            PullResult::Done => None,
        }
    }

    /// Convert into the `Option` form used by `Iterator::next`.
    pub fn into_option(self) -> Option<T> {
        match self {
            PullResult::Yielded(value) => Some(value),
            PullResult::Done => None,
        }
    }

    /// Map the yielded value, leaving `Done` untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PullResult<U> {
        match self {
            PullResult::Yielded(value) => PullResult::Yielded(f(value)),
            PullResult::Done => PullResult::Done,
        }
    }
}

impl<T> From<Option<T>> for PullResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => PullResult::Yielded(value),
            None => PullResult::Done,
        }
    }
}

impl<T> From<PullResult<T>> for Option<T> {
    fn from(result: PullResult<T>) -> Self {
        result.into_option()
    }
}

/// Pull capability: hand out the next element on request.
///
/// Once an implementor returns [`PullResult::Done`] it must keep doing so.
pub trait Pull {
    /// Element type produced by each pull.
    type Item;

    /// Request the next element.
    fn pull(&mut self) -> PullResult<Self::Item>;

    /// Pull until completion, discarding elements. Returns how many were skipped.
    fn drain(&mut self) -> usize {
        let mut drained = 0;
        while !self.pull().is_done() {
            drained += 1;
        }
        drained
    }
}
