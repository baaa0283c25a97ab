//! Integration tests for the streaming tagger, checked against a brute-force
//! whole-string search over the normalized corpus.

use std::thread;

use term_tagger::{GrammarErrorKind, Match, TextTrie, TrieBuilder};

const CORPUS: &str = "\
The quick brown fox jumps over the lazy dog. It's the dog's dinner,
and the fox doesn't care: quick foxes, lazy dogs!  THE END... the
brown-fox hypothesis, quick-quick, dog";

/// No term is a prefix of another, so whole-word search is the exact answer.
fn dictionary() -> Vec<&'static str> {
    vec!["the", "quick", "fox", "dog", "lazy", "it's", "doesn't", "brown", "end"]
}

fn build(terms: &[&str]) -> TextTrie {
    let mut builder = TrieBuilder::new();
    for term in terms {
        builder.add_word(term).unwrap();
    }
    builder.get_trie()
}

fn scan(matcher: &mut TextTrie, corpus: &str) -> Vec<Match> {
    let mut found = Vec::new();
    for c in corpus.chars() {
        if let Some(matches) = matcher.next(c) {
            found.extend(matches);
        }
    }
    found.extend(matcher.finish());
    found
}

/// Brute-force whole-word search: lowercase the corpus, turn every boundary
/// character into a space, then look for " term " with the ends padded.
fn brute_force(terms: &[&str], corpus: &str) -> Vec<Match> {
    let normalized: String = corpus
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c == '\'' {
                c
            } else {
                ' '
            }
        })
        .collect();
    let padded = format!(" {} ", normalized);

    let mut found = Vec::new();
    for term in terms {
        let needle = format!(" {} ", term);
        let mut from = 0;
        while let Some(offset) = padded[from..].find(&needle) {
            let start = from + offset;
            // padded index start+1 is corpus index start
            let end = start + term.len();
            found.push(Match::new(end as u64, *term));
            from = start + 1;
        }
    }
    found
}

fn sorted(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by(|a, b| a.position.cmp(&b.position).then(a.term.cmp(&b.term)));
    matches
}

#[test]
fn test_stream_agrees_with_brute_force() {
    let terms = dictionary();
    let mut matcher = build(&terms);

    let streamed = sorted(scan(&mut matcher, CORPUS));
    let expected = sorted(brute_force(&terms, CORPUS));

    assert!(!expected.is_empty());
    assert_eq!(streamed, expected);
}

#[test]
fn test_stream_order_is_position_order() {
    let terms = dictionary();
    let mut matcher = build(&terms);
    let streamed = scan(&mut matcher, CORPUS);

    let positions: Vec<u64> = streamed.iter().map(|m| m.position).collect();
    let mut ordered = positions.clone();
    ordered.sort();
    assert_eq!(positions, ordered);
}

#[test]
fn test_every_literal_term_matches_itself() {
    let terms = dictionary();
    for term in &terms {
        let mut matcher = build(&terms);
        let found = scan(&mut matcher, term);
        assert_eq!(found, vec![Match::new(term.len() as u64, *term)], "{}", term);
    }
}

#[test]
fn test_group_expansion() {
    let mut matcher = build(&["c[au]t"]);
    assert_eq!(scan(&mut matcher, "cat "), vec![Match::new(3, "cat")]);

    let mut matcher = matcher.new_stream();
    assert_eq!(scan(&mut matcher, "cut "), vec![Match::new(3, "cut")]);

    let mut matcher = matcher.new_stream();
    assert!(scan(&mut matcher, "cot ").is_empty());
}

#[test]
fn test_overlapping_prefix_terms() {
    let mut matcher = build(&["cat", "catalog"]);
    let found = scan(&mut matcher, "catalog ");
    assert_eq!(found, vec![Match::new(3, "cat"), Match::new(7, "catalog")]);
}

#[test]
fn test_no_match_inside_word() {
    let mut matcher = build(&["at"]);
    assert!(scan(&mut matcher, "cat ").is_empty());
}

#[test]
fn test_duplicate_term_counts() {
    let mut builder = TrieBuilder::new();
    builder.add_word("catalog").unwrap();
    let nodes = builder.count_nodes();
    builder.add_word("catalog").unwrap();

    let matcher = builder.get_trie();
    assert_eq!(matcher.count_nodes(), nodes);
    assert_eq!(matcher.count_terms(), 2);
}

#[test]
fn test_grammar_errors_do_not_corrupt_later_terms() {
    let mut builder = TrieBuilder::new();

    let err = builder.add_word("a]b").unwrap_err();
    assert_eq!(err.grammar_kind(), Some(GrammarErrorKind::UnmatchedClose));
    let err = builder.add_word("a[bc").unwrap_err();
    assert_eq!(err.grammar_kind(), Some(GrammarErrorKind::UnterminatedGroup));
    let err = builder.add_word("a[b[c]]").unwrap_err();
    assert_eq!(err.grammar_kind(), Some(GrammarErrorKind::NestedGroup));

    builder.add_word("ab").unwrap();
    builder.add_word("b[ae]d").unwrap();
    assert_eq!(builder.count_terms(), 2);

    let mut matcher = builder.get_trie();
    let found = scan(&mut matcher, "a ab bad bed b");
    let terms: Vec<&str> = found.iter().map(|m| m.term.as_str()).collect();
    assert_eq!(terms, vec!["ab", "bad", "bed"]);
}

#[test]
fn test_flush_requirement() {
    let mut matcher = build(&["cat"]);
    let mid_word: Vec<Option<Vec<Match>>> = "cat".chars().map(|c| matcher.next(c)).collect();
    assert_eq!(mid_word, vec![None, None, None]);

    assert_eq!(matcher.next(' '), Some(vec![Match::new(3, "cat")]));
}

#[test]
fn test_case_insensitive_terms_and_corpus() {
    let mut matcher = build(&["Cat"]);
    assert_eq!(scan(&mut matcher, "CAT "), vec![Match::new(3, "cat")]);

    let mut matcher = matcher.new_stream();
    assert_eq!(scan(&mut matcher, "cat "), vec![Match::new(3, "cat")]);
}

#[test]
fn test_shared_trie_across_threads() {
    let terms = dictionary();
    let template = build(&terms);
    let expected = sorted(brute_force(&terms, CORPUS));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let mut matcher = template.new_stream();
            thread::spawn(move || sorted(scan(&mut matcher, CORPUS)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_match_serializes_as_record() {
    let m = Match::new(7, "catalog");
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"position":7,"term":"catalog"}"#);

    let back: Match = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}
