//! Rule-based sentence boundary detection for English prose
//!
//! A boundary is placed after `.`, `!` or `?` (together with any closing
//! quotes or brackets) when it is followed by whitespace and the next word
//! does not start in lowercase. A period after a known abbreviation or a
//! single-letter initial is not a boundary. Periods inside tokens such as
//! `2.3` or `e.g.` never qualify since no whitespace follows them.

use crate::text::normalize_whitespace;

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "cf", "al",
    "fig", "figs", "approx", "dept", "inc", "ltd", "co", "corp", "vol", "rev", "ref", "sec",
    "ch", "pp", "max", "min", "nos", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}')
}

/// Whether the word ending at a period is an abbreviation or an initial
fn is_abbreviation(segment: &str) -> bool {
    let word = segment
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATIONS.contains(&word.as_str())
}

/// Split a block of text into sentences, normalized and non-empty
///
/// ```
/// use doc_corpus::text::split_sentences;
///
/// assert_eq!(
///     split_sentences("It weighs 2.3 kg. Mount it on a wall, e.g. in a rack! Done?"),
///     vec!["It weighs 2.3 kg.", "Mount it on a wall, e.g. in a rack!", "Done?"]
/// );
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < chars.len() && (is_terminator(chars[end].1) || is_closing(chars[end].1)) {
            end += 1;
        }
        if end >= chars.len() || !chars[end].1.is_whitespace() {
            i = end;
            continue;
        }

        let mut next = end;
        while next < chars.len() && chars[next].1.is_whitespace() {
            next += 1;
        }
        if next >= chars.len() {
            break;
        }

        let next_char = chars[next].1;
        let boundary = !next_char.is_lowercase()
            && !(c == '.' && is_abbreviation(&text[start..offset]));

        if boundary {
            push_sentence(&mut sentences, &text[start..chars[end].0]);
            start = chars[next].0;
        }
        i = next;
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let sentence = normalize_whitespace(raw);
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}
