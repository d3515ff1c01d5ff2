use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_LEN: usize = 12;

/// A normalized ticker symbol: trimmed, uppercase, 1–12 chars of `A-Z0-9.-^`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(raw: &str) -> Result<Self, String> {
        let s = raw.trim().to_uppercase();
        if s.is_empty() {
            return Err("Symbol must not be empty".into());
        }
        if s.len() > MAX_LEN {
            return Err(format!("Symbol too long: {s}"));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^'))
        {
            return Err(format!("Invalid symbol: {s}"));
        }
        Ok(Symbol(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Symbol::new(&s)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(Symbol::new("  aapl ").unwrap().as_str(), "AAPL");
        assert_eq!(Symbol::new("brk.b").unwrap().as_str(), "BRK.B");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Symbol::new("").is_err());
        assert!(Symbol::new("   ").is_err());
        assert!(Symbol::new("AA PL").is_err());
        assert!(Symbol::new("AAPL&apikey=x").is_err());
        assert!(Symbol::new("ABCDEFGHIJKLM").is_err());
    }
}
