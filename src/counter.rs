//! Restartable bounded counter.
//!
//! A [`BoundedCounter`] produces `1, 2, ..., maximum` every time a traversal
//! is begun. The traversal cursor lives on the counter, and a [`Traversal`]
//! borrows the counter mutably, so only one traversal can be active at once.

use std::iter::FusedIterator;

use crate::error::{Error, Result};

//==============================================================================
// Step: tagged result of a single advance
//==============================================================================

/// Outcome of [`Traversal::produce_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    Value(T),
    /// Normal termination, not a fault.
    EndOfSequence,
}

impl<T> Step<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Value(value) => Some(value),
            Step::EndOfSequence => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Step::EndOfSequence)
    }
}

impl<T> From<Step<T>> for Option<T> {
    fn from(step: Step<T>) -> Self {
        step.into_option()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    /// No traversal has ever been begun.
    Uninitialized,
    Counting,
    /// Terminal until the next `begin_traversal`.
    Exhausted,
}

//==============================================================================
// BoundedCounter
//==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCounter {
    maximum: u64,
    /// `None` until the first traversal begins.
    current: Option<u64>,
}

impl BoundedCounter {
    /// Creates a counter over `1..=maximum`.
    ///
    /// Returns [`Error::InvalidBound`] unless `maximum` is positive.
    pub fn new(maximum: i64) -> Result<Self> {
        let maximum = u64::try_from(maximum)
            .ok()
            .filter(|&m| m > 0)
            .ok_or(Error::InvalidBound { maximum })?;

        Ok(Self {
            maximum,
            current: None,
        })
    }

    pub fn maximum(&self) -> u64 {
        self.maximum
    }

    pub fn state(&self) -> TraversalState {
        match self.current {
            None => TraversalState::Uninitialized,
            Some(cursor) if cursor > self.maximum => TraversalState::Exhausted,
            Some(_) => TraversalState::Counting,
        }
    }

    /// Resets the cursor to zero and hands out a fresh traversal.
    pub fn begin_traversal(&mut self) -> Traversal<'_> {
        self.current = Some(0);
        log::debug!("traversal begun over 1..={}", self.maximum);
        Traversal { counter: self }
    }
}

impl TryFrom<i64> for BoundedCounter {
    type Error = Error;

    fn try_from(maximum: i64) -> Result<Self> {
        Self::new(maximum)
    }
}

impl<'a> IntoIterator for &'a mut BoundedCounter {
    type Item = u64;
    type IntoIter = Traversal<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin_traversal()
    }
}

//==============================================================================
// Traversal
//==============================================================================

/// One pass over a [`BoundedCounter`].
#[derive(Debug)]
pub struct Traversal<'a> {
    counter: &'a mut BoundedCounter,
}

impl Traversal<'_> {
    /// Advances the cursor and yields it, or reports the end of the sequence.
    ///
    /// Once exhausted the cursor stays put and every call returns
    /// [`Step::EndOfSequence`].
    pub fn produce_next(&mut self) -> Step<u64> {
        let maximum = self.counter.maximum;
        let cursor = self.counter.current.unwrap_or(0);

        if cursor > maximum {
            return Step::EndOfSequence;
        }

        // maximum <= i64::MAX, so maximum + 1 cannot overflow a u64
        let next = cursor + 1;
        self.counter.current = Some(next);

        if next > maximum {
            log::debug!("traversal exhausted after {maximum} values");
            Step::EndOfSequence
        } else {
            Step::Value(next)
        }
    }

    pub fn cursor(&self) -> u64 {
        self.counter.current.unwrap_or(0)
    }

    pub fn state(&self) -> TraversalState {
        self.counter.state()
    }

    fn remaining(&self) -> u64 {
        self.counter.maximum.saturating_sub(self.cursor())
    }
}

impl Iterator for Traversal<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.produce_next().into_option()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Traversal<'_> {}
