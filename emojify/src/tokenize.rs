//! Penn Treebank word tokenization.
//!
//! Text is rewritten by an ordered list of regex rules that pad punctuation,
//! quotes and contractions with spaces, then split on whitespace. `can't`
//! becomes `ca n't`, a closing period is split from the last word, and double
//! quotes become ` `` ` / `''`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Splits text into tokens.
pub trait Tokenize {
    /// Tokens of `text`, left to right.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<T> Tokenize for T
where
    T: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn apply(&self, text: String) -> String {
        self.pattern.replace_all(&text, self.replacement).into_owned()
    }
}

fn rules(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|&(pattern, replacement)| Rule {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        })
        .collect()
}

// Applied to the raw text.
static OPENING: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        // starting quotes
        (r#"^""#, "``"),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'{2})"#, "${1} `` "),
        // punctuation
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])(\n?)\z", " ${1} ${2}"),
        (r"\.\.\.", " ... "),
        (r"[;@#$%&]", " ${0} "),
        (r#"([^.])(\.)([\])}>"']*)\s*\z"#, "${1} ${2}${3} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        // brackets and dashes
        (r"[\]\[(){}<>]", " ${0} "),
        (r"--", " -- "),
    ])
});

// Applied after the text has been padded with a space on both ends.
static CLOSING: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        // ending quotes
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
        // contractions
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)(\s)", " ${1} ${2} ${3}"),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

/// Tokenizes `text` following Penn Treebank conventions.
pub fn treebank(text: &str) -> Vec<String> {
    let text = OPENING.iter().fold(text.to_string(), |t, rule| rule.apply(t));
    let text = CLOSING
        .iter()
        .fold(format!(" {text} "), |t, rule| rule.apply(t));

    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{treebank, Tokenize};

    fn tokens(text: &str) -> Vec<String> {
        treebank(text)
    }

    #[test]
    fn plain_words() {
        assert_eq!(tokens("the cat sat"), vec!["the", "cat", "sat"]);
        assert_eq!(tokens("  the \t cat\nsat  "), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn empty() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \n\t ").is_empty());
    }

    #[test]
    fn punctuation() {
        assert_eq!(tokens("Hello, world!"), vec!["Hello", ",", "world", "!"]);
        assert_eq!(tokens("Really?!"), vec!["Really", "?", "!"]);
        assert_eq!(tokens("wait: now"), vec!["wait", ":", "now"]);
        assert_eq!(tokens("a; b"), vec!["a", ";", "b"]);
        assert_eq!(tokens("cost $5 & more"), vec!["cost", "$", "5", "&", "more"]);
    }

    #[test]
    fn numbers_keep_separators() {
        assert_eq!(tokens("3,000 cats"), vec!["3,000", "cats"]);
        assert_eq!(tokens("at 10:30"), vec!["at", "10:30"]);
    }

    #[test]
    fn trailing_comma() {
        assert_eq!(tokens("well,"), vec!["well", ","]);
        assert_eq!(tokens("well,\n"), vec!["well", ","]);
    }

    #[test]
    fn only_final_period_is_split() {
        assert_eq!(tokens("I like it."), vec!["I", "like", "it", "."]);
        assert_eq!(tokens("Mr. Smith left."), vec!["Mr.", "Smith", "left", "."]);
        assert_eq!(tokens("done.  "), vec!["done", "."]);
    }

    #[test]
    fn ellipsis() {
        assert_eq!(tokens("wait..."), vec!["wait", "..."]);
        assert_eq!(tokens("so... what"), vec!["so", "...", "what"]);
    }

    #[test]
    fn brackets_and_dashes() {
        assert_eq!(tokens("(fire)"), vec!["(", "fire", ")"]);
        assert_eq!(tokens("<b>"), vec!["<", "b", ">"]);
        assert_eq!(tokens("yes--no"), vec!["yes", "--", "no"]);
    }

    #[test]
    fn double_quotes() {
        assert_eq!(tokens(r#""hi""#), vec!["``", "hi", "''"]);
        assert_eq!(
            tokens(r#"she said "go" now"#),
            vec!["she", "said", "``", "go", "''", "now"]
        );
    }

    #[test]
    fn contractions() {
        assert_eq!(tokens("I can't go"), vec!["I", "ca", "n't", "go"]);
        assert_eq!(tokens("Don't"), vec!["Do", "n't"]);
        assert_eq!(tokens("it's here"), vec!["it", "'s", "here"]);
        assert_eq!(tokens("we'll see"), vec!["we", "'ll", "see"]);
        assert_eq!(tokens("I'm ok"), vec!["I", "'m", "ok"]);
        assert_eq!(tokens("they've"), vec!["they", "'ve"]);
    }

    #[test]
    fn split_contractions() {
        assert_eq!(tokens("I cannot"), vec!["I", "can", "not"]);
        assert_eq!(tokens("gonna gotta"), vec!["gon", "na", "got", "ta"]);
        assert_eq!(tokens("Gimme lemme"), vec!["Gim", "me", "lem", "me"]);
        assert_eq!(tokens("wanna go"), vec!["wan", "na", "go"]);
        assert_eq!(tokens("'Tis true"), vec!["'T", "is", "true"]);
    }

    #[test]
    fn possessive_quote() {
        assert_eq!(tokens("the dogs' bowls"), vec!["the", "dogs", "'", "bowls"]);
    }

    #[test]
    fn emoji_pass_through() {
        assert_eq!(tokens("🔥 is 🐱"), vec!["🔥", "is", "🐱"]);
    }

    #[test]
    fn closures_tokenize() {
        let by_char = |s: &str| s.chars().map(String::from).collect::<Vec<_>>();
        assert_eq!(by_char.tokenize("ab"), vec!["a", "b"]);
    }
}
