//! Console chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// The two console tabs. Which one is active decides which panel is
/// mounted, and mounting a panel is what triggers its loads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsoleTab {
    #[default]
    Words,
    Combinations,
}

impl ConsoleTab {
    pub const ALL: [ConsoleTab; 2] = [ConsoleTab::Words, ConsoleTab::Combinations];

    pub fn label(self) -> &'static str {
        match self {
            Self::Words => "Words",
            Self::Combinations => "Combinations",
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Words => "words-tab",
            Self::Combinations => "combinations-tab",
        }
    }
}
