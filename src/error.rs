use thiserror::Error;

/// Classifies dictionary grammar violations for programmatic matching.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarErrorKind {
    /// A `]` appeared with no open group
    #[error("found end-of-group bracket outside of a group")]
    UnmatchedClose,
    /// The term ended while a group was still open
    #[error("term ended with open group")]
    UnterminatedGroup,
    /// A `[` appeared inside an open group
    #[error("nested groups are not supported")]
    NestedGroup,
    /// A group with no characters (`[]`)
    #[error("group has no characters")]
    EmptyGroup,
    /// A term with no characters at all
    #[error("term is empty")]
    EmptyTerm,
}

/// Term tagger error types
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Invalid term '{term}': {kind}")]
    Grammar {
        kind: GrammarErrorKind,
        term: String,
    },

    #[error("Dictionary error: {0}")]
    DictionaryError(String),
}

impl TaggerError {
    pub(crate) fn grammar(kind: GrammarErrorKind, term: &str) -> Self {
        TaggerError::Grammar {
            kind,
            term: term.to_string(),
        }
    }

    /// The grammar violation carried by this error, if it is one.
    pub fn grammar_kind(&self) -> Option<GrammarErrorKind> {
        match self {
            TaggerError::Grammar { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaggerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_kind_is_matchable() {
        let err = TaggerError::grammar(GrammarErrorKind::NestedGroup, "a[b[c]]");
        match &err {
            TaggerError::Grammar { kind, term } => {
                assert!(matches!(kind, GrammarErrorKind::NestedGroup));
                assert_eq!(term, "a[b[c]]");
            }
            _ => panic!("expected Grammar"),
        }
        assert_eq!(err.grammar_kind(), Some(GrammarErrorKind::NestedGroup));
    }

    #[test]
    fn test_grammar_display_includes_term_and_reason() {
        let err = TaggerError::grammar(GrammarErrorKind::UnterminatedGroup, "a[bc");
        let display = format!("{}", err);
        assert!(display.contains("a[bc"), "got: {}", display);
        assert!(display.contains("open group"), "got: {}", display);
    }

    #[test]
    fn test_dictionary_error_has_no_grammar_kind() {
        let err = TaggerError::DictionaryError("Failed to read dictionary file 'x': gone".into());
        assert!(err.grammar_kind().is_none());
        assert!(format!("{}", err).contains("gone"));
    }
}
