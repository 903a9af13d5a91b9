//! Word lists backing the combination form selects.
//!
//! DESIGN
//! ======
//! The three roles load independently; a failure for one role never touches
//! the lists already held for the other two.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use crate::net::types::{ApiError, Word, WordType};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordOptions {
    pub verbs: Vec<Word>,
    pub subjects: Vec<Word>,
    pub objects: Vec<Word>,
}

impl WordOptions {
    pub fn for_kind(&self, kind: WordType) -> &[Word] {
        match kind {
            WordType::Verb => &self.verbs,
            WordType::Subject => &self.subjects,
            WordType::Object => &self.objects,
        }
    }

    /// Replace one role's list with a finished request result.
    ///
    /// # Errors
    ///
    /// Hands the request error back untouched; the role's list is kept.
    pub fn apply(&mut self, kind: WordType, result: Result<Vec<Word>, ApiError>) -> Result<(), ApiError> {
        let words = result?;
        match kind {
            WordType::Verb => self.verbs = words,
            WordType::Subject => self.subjects = words,
            WordType::Object => self.objects = words,
        }
        Ok(())
    }
}
