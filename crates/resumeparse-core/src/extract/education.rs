use std::collections::HashSet;

use crate::vocabulary::Vocabulary;

/// Context snippets around every education keyword occurrence.
///
/// Keywords are visited in vocabulary order and occurrences left to right.
/// Each snippet keeps at most `context` characters on either side of the
/// match and never crosses a line break. Identical snippets collapse and at
/// most `cap` survive.
pub fn extract_snippets(
    text: &str,
    keywords: &Vocabulary,
    context: usize,
    cap: usize,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut snippets = Vec::new();

    for term in keywords.terms() {
        for m in term.occurrences(text) {
            if snippets.len() >= cap {
                return snippets;
            }

            let start = context_start(text, m.start(), context);
            let end = context_end(text, m.end(), context);
            let snippet = &text[start..end];

            if seen.insert(snippet) {
                snippets.push(snippet.to_string());
            }
        }
    }

    snippets
}

fn context_start(text: &str, from: usize, context: usize) -> usize {
    text[..from]
        .char_indices()
        .rev()
        .take(context)
        .take_while(|(_, c)| *c != '\n')
        .last()
        .map_or(from, |(i, _)| i)
}

fn context_end(text: &str, from: usize, context: usize) -> usize {
    text[from..]
        .char_indices()
        .take(context)
        .take_while(|(_, c)| *c != '\n')
        .last()
        .map_or(from, |(i, c)| from + i + c.len_utf8())
}
