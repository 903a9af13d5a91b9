//! Word panel list state.

#[cfg(test)]
#[path = "words_test.rs"]
mod words_test;

use crate::net::types::{ApiError, Word, WordType};

/// Words currently shown in the word table and the active type filter.
#[derive(Clone, Debug, Default)]
pub struct WordsState {
    pub items: Vec<Word>,
    /// `None` lists every word.
    pub filter: Option<WordType>,
    pub loading: bool,
}

impl WordsState {
    /// Apply a finished list request. Failures leave the previous items in place.
    ///
    /// # Errors
    ///
    /// Hands the request error back so the caller can report it.
    pub fn finish_load(&mut self, result: Result<Vec<Word>, ApiError>) -> Result<(), ApiError> {
        self.loading = false;
        self.items = result?;
        Ok(())
    }
}
