use std::str::Chars;

use crate::error::{GrammarErrorKind, Result, TaggerError};

const GROUP_OPEN: char = '[';
const GROUP_CLOSE: char = ']';

/// One step of a term definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A single character, already lowercased
    Literal(char),
    /// The characters of a `[...]` group, lowercased, in written order
    Group(Vec<char>),
    /// The term is complete
    End,
}

/// Tokenizer over one term definition.
///
/// Tokens are produced lazily so the builder can extend the trie as it goes;
/// a grammar error is reported at the point it is found.
pub struct TermTokenizer<'a> {
    term: &'a str,
    chars: Chars<'a>,
    started: bool,
}

impl<'a> TermTokenizer<'a> {
    pub fn new(term: &'a str) -> Self {
        Self {
            term,
            chars: term.chars(),
            started: false,
        }
    }

    /// Produce the next token, or the grammar violation found instead.
    pub fn next_token(&mut self) -> Result<Token> {
        let first = !self.started;
        self.started = true;

        let Some(c) = self.chars.next() else {
            if first {
                return Err(self.error(GrammarErrorKind::EmptyTerm));
            }
            return Ok(Token::End);
        };

        match c {
            GROUP_OPEN => self.group(),
            GROUP_CLOSE => Err(self.error(GrammarErrorKind::UnmatchedClose)),
            c => Ok(Token::Literal(c.to_ascii_lowercase())),
        }
    }

    /// Collect group characters up to the closing bracket. The opening
    /// bracket has already been consumed.
    fn group(&mut self) -> Result<Token> {
        let mut contents = Vec::new();
        loop {
            match self.chars.next() {
                None => return Err(self.error(GrammarErrorKind::UnterminatedGroup)),
                Some(GROUP_OPEN) => return Err(self.error(GrammarErrorKind::NestedGroup)),
                Some(GROUP_CLOSE) => break,
                Some(c) => {
                    let c = c.to_ascii_lowercase();
                    // "[aa]" would only re-visit the same child
                    if !contents.contains(&c) {
                        contents.push(c);
                    }
                }
            }
        }
        if contents.is_empty() {
            return Err(self.error(GrammarErrorKind::EmptyGroup));
        }
        Ok(Token::Group(contents))
    }

    fn error(&self, kind: GrammarErrorKind) -> TaggerError {
        TaggerError::grammar(kind, self.term)
    }
}

/// Tokenize a whole term up front, stopping at the first violation.
pub fn tokenize_term(term: &str) -> Result<Vec<Token>> {
    let mut tokenizer = TermTokenizer::new(term);
    let mut tokens = Vec::new();
    loop {
        match tokenizer.next_token()? {
            Token::End => break,
            token => tokens.push(token),
        }
    }
    Ok(tokens)
}

/// Split dictionary text into `(line_number, term)` pairs.
///
/// Line numbers are 1-based. A trailing `\r` is dropped and blank lines are
/// skipped; everything else on the line, spaces included, is the term.
pub fn dictionary_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(line_num, line)| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            None
        } else {
            Some((line_num + 1, line))
        }
    })
}
