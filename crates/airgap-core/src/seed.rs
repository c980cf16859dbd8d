//! Seed phrase normalization.

use core::fmt;

use crate::error::{AirgapError, Result};

/// An ordered, normalized list of seed words.
///
/// Every word is trimmed, lower-cased ASCII with no inner whitespace. Order and
/// repetition are preserved because both change the derived keys.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SeedPhrase {
    words: Vec<String>,
}

impl SeedPhrase {
    /// Trim and lower-case each word.
    ///
    /// Words are not checked against any wordlist. Fails with
    /// [`AirgapError::InvalidSeed`] if there are no words, or if a word is
    /// blank, has inner whitespace, or is not ASCII.
    pub fn normalize<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize_word(word.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        if words.is_empty() {
            return Err(AirgapError::InvalidSeed("seed has no words"));
        }
        Ok(SeedPhrase { words })
    }

    /// Split raw seed-file text on any whitespace, then normalize.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::normalize(text.split_whitespace())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; a phrase has at least one word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words joined with single spaces.
    pub fn joined(&self) -> String {
        self.words.join(" ")
    }
}

fn normalize_word(raw: &str) -> Result<String> {
    let word = raw.trim();
    if word.is_empty() {
        return Err(AirgapError::InvalidSeed("blank seed word"));
    }
    if !word.is_ascii() {
        return Err(AirgapError::InvalidSeed("seed word is not ASCII"));
    }
    if word.bytes().any(|b| b.is_ascii_whitespace()) {
        return Err(AirgapError::InvalidSeed("seed word contains whitespace"));
    }
    Ok(word.to_ascii_lowercase())
}

// Seed words are secret material; keep them out of logs.
impl fmt::Debug for SeedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedPhrase")
            .field("words", &self.words.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_lowercase() {
        let a = SeedPhrase::normalize(["Foo", " bar "]).unwrap();
        let b = SeedPhrase::normalize(["foo", "bar"]).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.words(), ["foo", "bar"]);
    }

    #[test]
    fn test_order_and_repetition_preserved() {
        let phrase = SeedPhrase::normalize(["bar", "foo", "bar"]).unwrap();
        assert_eq!(phrase.joined(), "bar foo bar");
        assert_ne!(phrase, SeedPhrase::normalize(["foo", "bar"]).unwrap());
    }

    #[test]
    fn test_empty_seed() {
        let words: [&str; 0] = [];
        assert_eq!(
            SeedPhrase::normalize(words),
            Err(AirgapError::InvalidSeed("seed has no words"))
        );
        assert!(SeedPhrase::from_text(" \n\t ").is_err());
    }

    #[test]
    fn test_malformed_words() {
        assert!(matches!(SeedPhrase::normalize(["foo", "   "]), Err(AirgapError::InvalidSeed(_))));
        assert!(matches!(SeedPhrase::normalize(["foo bar"]), Err(AirgapError::InvalidSeed(_))));
        assert!(matches!(SeedPhrase::normalize(["caf\u{e9}"]), Err(AirgapError::InvalidSeed(_))));
    }

    #[test]
    fn test_from_text() {
        let phrase = SeedPhrase::from_text("Correct  Horse\n\tBattery STAPLE\n").unwrap();
        assert_eq!(phrase.joined(), "correct horse battery staple");
        assert_eq!(phrase.len(), 4);
    }

    #[test]
    fn test_debug_hides_words() {
        let phrase = SeedPhrase::normalize(["secret"]).unwrap();
        assert!(!format!("{:?}", phrase).contains("secret"));
    }
}
