//! Combination panel list state.

#[cfg(test)]
#[path = "combinations_test.rs"]
mod combinations_test;

use crate::net::types::{ApiError, Combination};

/// Combinations currently shown and the optional verb filter.
#[derive(Clone, Debug, Default)]
pub struct CombinationsState {
    pub items: Vec<Combination>,
    /// `None` lists combinations for every verb.
    pub verb_filter: Option<i64>,
    pub loading: bool,
}

impl CombinationsState {
    /// Apply a finished list request. Failures leave the previous items in place.
    ///
    /// # Errors
    ///
    /// Hands the request error back so the caller can report it.
    pub fn finish_load(&mut self, result: Result<Vec<Combination>, ApiError>) -> Result<(), ApiError> {
        self.loading = false;
        self.items = result?;
        Ok(())
    }
}
