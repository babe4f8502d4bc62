// N-gram overlap between a headline and its article body.
//
// Tokens are lowercased and anything at or below the length floor is
// dropped, so standalone letters never form n-grams. Each body is
// tokenized once and indexed as a set: matching is membership, not
// frequency, while every headline occurrence counts. The raw match count
// is then divided by the body's token count.
//
// The divisor is deliberate and pinned by tests. An earlier sketch of
// this feature normalized by the longer of headline and body, but the
// validated feature matrices were built with body-length normalization,
// and silently changing the scale under a trained model would be worse
// than the asymmetry. See DESIGN.md.

use std::collections::{HashMap, HashSet};

use crate::dataset::models::{Bodies, BodyId};
use crate::error::{Result, StandfirstError};
use crate::text::normalize::Normalizer;

/// Parameters for the overlap feature.
#[derive(Debug, Clone)]
pub struct NgramOverlapScorer {
    /// Window size: 1 for unigrams, 2 for bigrams, and so on.
    pub n: usize,
    /// Tokens of at most this many characters are discarded before
    /// windowing.
    pub min_token_chars: usize,
}

impl Default for NgramOverlapScorer {
    fn default() -> Self {
        Self {
            n: 1,
            min_token_chars: 1,
        }
    }
}

/// A body's precomputed n-gram view, built once no matter how many stance
/// rows reference the body.
#[derive(Debug, Clone)]
pub struct BodyNgrams {
    /// Distinct n-grams, for membership tests.
    ngrams: HashSet<Vec<String>>,
    /// Post-filter token count; the normalization divisor.
    token_count: usize,
}

impl BodyNgrams {
    pub fn token_count(&self) -> usize {
        self.token_count
    }
}

impl NgramOverlapScorer {
    /// Lowercase, tokenize, and drop short tokens.
    fn tokens(&self, normalizer: &Normalizer, text: &str) -> Vec<String> {
        normalizer
            .words(text)
            .into_iter()
            .map(|t| t.to_lowercase())
            .filter(|t| t.len() > self.min_token_chars)
            .collect()
    }

    /// Contiguous n-token windows over the filtered tokens.
    fn ngrams(&self, tokens: &[String]) -> Vec<Vec<String>> {
        if self.n == 0 || tokens.len() < self.n {
            return Vec::new();
        }
        tokens.windows(self.n).map(|w| w.to_vec()).collect()
    }

    /// Tokenize and index every body up front.
    pub fn index_bodies(
        &self,
        normalizer: &Normalizer,
        bodies: &Bodies,
    ) -> HashMap<BodyId, BodyNgrams> {
        bodies
            .iter()
            .map(|(id, text)| {
                let tokens = self.tokens(normalizer, text);
                let ngrams = self.ngrams(&tokens).into_iter().collect();
                (
                    id,
                    BodyNgrams {
                        ngrams,
                        token_count: tokens.len(),
                    },
                )
            })
            .collect()
    }

    /// Count headline n-grams present in the body, normalized by the
    /// body's token count. Duplicate headline n-grams each count; the body
    /// side is a pure membership test.
    pub fn score(
        &self,
        normalizer: &Normalizer,
        headline: &str,
        body: &BodyNgrams,
        body_id: BodyId,
    ) -> Result<f64> {
        if body.token_count == 0 {
            return Err(StandfirstError::EmptyBodyTokens { body_id });
        }
        let headline_tokens = self.tokens(normalizer, headline);
        let shared = self
            .ngrams(&headline_tokens)
            .into_iter()
            .filter(|g| body.ngrams.contains(g))
            .count();
        Ok(shared as f64 / body.token_count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_lowercase_and_drop_short() {
        let normalizer = Normalizer::default();
        let scorer = NgramOverlapScorer::default();
        assert_eq!(
            scorer.tokens(&normalizer, "A Cat, I think, SAT"),
            vec!["cat", "think", "sat"]
        );
    }

    #[test]
    fn unigram_windows_are_single_tokens() {
        let scorer = NgramOverlapScorer::default();
        let tokens: Vec<String> = vec!["cat".into(), "sat".into()];
        assert_eq!(
            scorer.ngrams(&tokens),
            vec![vec!["cat".to_string()], vec!["sat".to_string()]]
        );
    }

    #[test]
    fn bigram_windows_are_adjacent_pairs() {
        let scorer = NgramOverlapScorer {
            n: 2,
            ..Default::default()
        };
        let tokens: Vec<String> = vec!["the".into(), "cat".into(), "sat".into()];
        assert_eq!(
            scorer.ngrams(&tokens),
            vec![
                vec!["the".to_string(), "cat".to_string()],
                vec!["cat".to_string(), "sat".to_string()],
            ]
        );
    }

    #[test]
    fn too_few_tokens_produce_no_windows() {
        let scorer = NgramOverlapScorer {
            n: 3,
            ..Default::default()
        };
        let tokens: Vec<String> = vec!["cat".into(), "sat".into()];
        assert!(scorer.ngrams(&tokens).is_empty());
    }
}
