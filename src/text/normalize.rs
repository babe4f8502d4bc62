// Punctuation stripping and tokenization.
//
// Sentence boundaries are marked by the very punctuation that stripping
// removes, so order matters: segment sentences on the original text first,
// then strip punctuation, then split words. Both feature stages go through
// this one type.

use regex_lite::Regex;

/// The character set removed by `strip_punctuation`. Defaults to ASCII
/// punctuation, which matches the dataset's English news text.
#[derive(Debug, Clone)]
pub struct PunctuationTable {
    chars: String,
}

impl PunctuationTable {
    /// A table over an explicit character set.
    pub fn new(chars: impl Into<String>) -> Self {
        Self {
            chars: chars.into(),
        }
    }

    /// Whether `c` should be removed.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }
}

impl Default for PunctuationTable {
    fn default() -> Self {
        // The 32 ASCII punctuation characters.
        Self::new(
            (0x21u8..=0x7e)
                .map(char::from)
                .filter(char::is_ascii_punctuation)
                .collect::<String>(),
        )
    }
}

/// Tokenizer shared by every feature stage. Patterns are compiled once;
/// construct one per run and pass it around.
///
/// `\w` is ASCII-only in regex-lite, which suits this corpus: the dataset
/// is English and multi-language text is out of scope.
pub struct Normalizer {
    punctuation: PunctuationTable,
    word: Regex,
    sentence: Regex,
}

impl Normalizer {
    pub fn new(punctuation: PunctuationTable) -> Self {
        let word = Regex::new(r"\w+").unwrap();
        let sentence = Regex::new(r"[^.!?]*[.!?]+").unwrap();
        Self {
            punctuation,
            word,
            sentence,
        }
    }

    /// Remove every character in the punctuation table. Each is replaced
    /// with nothing, not a space, so "don't" becomes "dont".
    pub fn strip_punctuation(&self, text: &str) -> String {
        text.chars()
            .filter(|c| !self.punctuation.contains(*c))
            .collect()
    }

    /// Split into word tokens: contiguous runs of word characters.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.word
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Split into sentences on `.`, `!` and `?`, keeping any unterminated
    /// trailing text as a final sentence. This runs on the original
    /// punctuated text; stripping first would erase the boundaries it
    /// looks for.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut consumed = 0;
        for m in self.sentence.find_iter(text) {
            let sentence = m.as_str().trim();
            if !sentence.is_empty() {
                out.push(sentence.to_string());
            }
            consumed = m.end();
        }
        let tail = text[consumed..].trim();
        if !tail.is_empty() {
            out.push(tail.to_string());
        }
        out
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(PunctuationTable::default())
    }
}
