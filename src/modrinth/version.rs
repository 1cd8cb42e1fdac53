use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.-]").expect("separator pattern is valid"));

/// One component of a game version label.
///
/// Numeric runs compare by value, text compares lexically, and when a numeric
/// token meets a text token at the same position the numeric one sorts first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Digit run with leading zeros stripped, so arbitrarily long runs compare by value.
    Number(String),
    Text(String),
}

impl Token {
    fn parse(part: &str) -> Self {
        if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
            let trimmed = part.trim_start_matches('0');
            Token::Number(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
        } else {
            Token::Text(part.to_string())
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Number(a), Token::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            (Token::Number(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Number(_)) => Ordering::Greater,
        }
    }
}

/// Sort key for a game version label such as `1.21.9` or `24w14a` or `1.20-pre1`.
///
/// Keys compare token by token; a key that is a prefix of another sorts first,
/// so `1.21` < `1.21.1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionKey(Vec<Token>);

impl VersionKey {
    pub fn parse(label: &str) -> Self {
        VersionKey(SEPARATORS.split(label).map(Token::parse).collect())
    }

    #[cfg(test)]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

/// Union `current` with `target`, drop duplicates and order the result by [`VersionKey`].
///
/// Labels with equal keys (`1.01` and `1.1`) fall back to plain string order
/// so the output is deterministic.
pub fn merge_game_versions(current: &[String], target: &str) -> Vec<String> {
    let mut merged: Vec<(VersionKey, String)> = current
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(target))
        .map(|v| (VersionKey::parse(v), v.to_string()))
        .collect();

    merged.sort_by(|(ka, a), (kb, b)| ka.cmp(kb).then_with(|| a.cmp(b)));
    merged.dedup_by(|a, b| a.1 == b.1);
    merged.into_iter().map(|(_, v)| v).collect()
}
