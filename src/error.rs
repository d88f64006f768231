//! Error kinds for solving sessions.
//!
//! Each variant carries a short code for lookup:
//!
//! - E001: `MalformedFeedback` (feedback that cannot be parsed or contradicts earlier rounds)
//! - E002: `InvalidWord` (not five ASCII letters)
//! - E003: `NoCandidates` (nothing in the dictionary fits the feedback)
//! - E004: `Io` (reading the dictionary or player input failed)

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed feedback \"{feedback}\": {reason}")]
    MalformedFeedback { feedback: String, reason: String },

    #[error("Invalid word \"{word}\": expected five letters")]
    InvalidWord { word: String },

    #[error("No dictionary word is consistent with the feedback so far")]
    NoCandidates,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Error::MalformedFeedback { .. } => "E001",
            Error::InvalidWord { .. } => "E002",
            Error::NoCandidates => "E003",
            Error::Io(_) => "E004",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Error::MalformedFeedback { .. } => Some(
                "Use five characters: uppercase for right letter and place, lowercase for right \
                 letter wrong place, '.' otherwise (e.g. 'aR..E')",
            ),
            Error::InvalidWord { .. } => Some("Words are exactly five letters a-z"),
            Error::NoCandidates => {
                Some("Check the feedback entered so far, or whether the word is in the dictionary")
            }
            Error::Io(_) => None,
        }
    }

    /// Formats the error with its code and help text, if any.
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self.help() {
            Some(help) => format!("{} ({})\n{}", self, self.code(), help),
            None => format!("{} ({})", self, self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_help() {
        let err = Error::NoCandidates;
        assert_eq!(err.code(), "E003");
        let detailed = err.display_detailed();
        assert!(detailed.contains("E003"));
        assert!(detailed.contains("dictionary"));
    }

    #[test]
    fn io_has_no_help() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.code(), "E004");
        assert!(err.help().is_none());
        assert_eq!(err.display_detailed(), "I/O error: gone (E004)");
    }
}
