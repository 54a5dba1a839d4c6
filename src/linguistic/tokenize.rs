// Sentence and word tokenizers.
//
// The preferred tokenizers split sentences on terminal punctuation followed by
// whitespace and words on Unicode word characters (keeping inner apostrophes
// and hyphens). Text containing U+FFFD replacement characters came from
// lossy decoding and is rejected; callers switch to the naive splitters.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("text contains {0} replacement character(s) from invalid UTF-8")]
    Malformed(usize),
}

fn check(text: &str) -> Result<(), TokenizeError> {
    let bad = text.chars().filter(|&c| c == char::REPLACEMENT_CHARACTER).count();
    if bad > 0 {
        return Err(TokenizeError::Malformed(bad));
    }
    Ok(())
}

/// Split text into sentences.
///
/// A sentence ends at `.`, `!` or `?` (runs of them count once) followed by
/// whitespace or end of text. Blank sentences are dropped.
pub fn sentences(text: &str) -> Result<Vec<String>, TokenizeError> {
    check(text)?;

    let mut out = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            while let Some(&next) = chars.peek() {
                if matches!(next, '.' | '!' | '?') {
                    current.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            let at_boundary = chars.peek().is_none_or(|n| n.is_whitespace());
            if at_boundary {
                push_trimmed(&mut out, &current);
                current.clear();
            }
        } else if c == '\n' && chars.peek() == Some(&'\n') {
            // blank line ends a sentence even without punctuation (headings, bullet lists)
            push_trimmed(&mut out, &current);
            current.clear();
        }
    }
    push_trimmed(&mut out, &current);

    Ok(out)
}

fn push_trimmed(out: &mut Vec<String>, s: &str) {
    let s = s.trim();
    if !s.is_empty() {
        out.push(s.to_string());
    }
}

/// Split text into word tokens. Punctuation is not a token.
pub fn words(text: &str) -> Result<Vec<String>, TokenizeError> {
    check(text)?;

    let mut out = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        let joiner = matches!(c, '\'' | '\u{2019}' | '-')
            && !current.is_empty()
            && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
        if c.is_alphanumeric() || joiner {
            current.push(c);
        } else if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }

    Ok(out)
}

/// Fallback sentence splitter: split on ". " only.
pub fn naive_sentences(text: &str) -> Vec<String> {
    text.split(". ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fallback word splitter: split on whitespace only.
pub fn naive_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_on_terminal_punctuation() {
        let s = sentences("Shop now! Only today... Why wait? Done").unwrap();
        assert_eq!(s, vec!["Shop now!", "Only today...", "Why wait?", "Done"]);
    }

    #[test]
    fn test_decimal_point_does_not_split() {
        let s = sentences("Only $9.99 today. Hurry.").unwrap();
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_words_keep_contractions() {
        let w = words("Don't miss our best-selling serum, it's 50% off!").unwrap();
        assert_eq!(
            w,
            vec!["Don't", "miss", "our", "best-selling", "serum", "it's", "50", "off"]
        );
    }

    #[test]
    fn test_replacement_char_rejected() {
        assert_eq!(words("caf\u{FFFD} latte"), Err(TokenizeError::Malformed(1)));
        assert!(sentences("\u{FFFD}\u{FFFD}").is_err());
    }

    #[test]
    fn test_naive_splitters() {
        assert_eq!(naive_sentences("One. Two. Three"), vec!["One", "Two", "Three"]);
        assert_eq!(naive_words(" a  b\tc\n"), vec!["a", "b", "c"]);
    }
}
