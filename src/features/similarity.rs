// Headline-to-sentence similarity, reduced to average and maximum.
//
// Each sentence of the body is compared to the headline with a Jaccard
// measure over token multisets. The two token sequences are first padded
// to equal length by repeating the shorter side's final token. The padding
// biases the score toward whichever token gets repeated; that is a known
// property of the feature, kept because the validated feature matrices
// were built with it.
//
// Unlike the n-gram stage, this path keeps case and short tokens: the
// headline and each sentence are punctuation-stripped, then word-split,
// and nothing else.

use std::collections::HashMap;

use crate::dataset::models::BodyId;
use crate::error::{Result, StandfirstError};
use crate::text::normalize::Normalizer;

/// The per-body reduction of sentence similarities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityStats {
    pub average: f64,
    pub maximum: f64,
}

/// Compare a headline against every sentence of a body.
///
/// The body is sentence-segmented on its original punctuated text, then
/// each sentence is stripped and tokenized. Sentences with no tokens are
/// skipped. A body whose every sentence comes up empty has no defined
/// average, which is the `NoSentences` failure naming the body id. An
/// empty headline is not an error; it scores 0.0 against everything.
pub fn sentence_similarity(
    normalizer: &Normalizer,
    headline: &str,
    body: &str,
    body_id: BodyId,
) -> Result<SimilarityStats> {
    let headline_tokens = normalizer.words(&normalizer.strip_punctuation(headline));

    let mut scores = Vec::new();
    for sentence in normalizer.sentences(body) {
        let sentence_tokens = normalizer.words(&normalizer.strip_punctuation(&sentence));
        if sentence_tokens.is_empty() {
            continue;
        }
        scores.push(padded_jaccard(&headline_tokens, &sentence_tokens));
    }

    if scores.is_empty() {
        return Err(StandfirstError::NoSentences { body_id });
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    let maximum = scores.iter().copied().fold(0.0_f64, f64::max);
    Ok(SimilarityStats { average, maximum })
}

/// Jaccard similarity over token multisets, after padding the shorter
/// sequence to the longer one's length by repeating its final token.
///
/// Intersection and union count per-token occurrences (min and max of the
/// two sides' counts), so the measure is order-insensitive but repetition
/// matters. 1.0 means identical multisets, 0.0 means disjoint. An empty
/// side contributes nothing and scores 0.0.
pub fn padded_jaccard(headline: &[String], sentence: &[String]) -> f64 {
    let (headline, sentence) = pad_to_equal(headline, sentence);

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for token in &headline {
        counts.entry(token.as_str()).or_insert((0, 0)).0 += 1;
    }
    for token in &sentence {
        counts.entry(token.as_str()).or_insert((0, 0)).1 += 1;
    }

    let mut intersection = 0;
    let mut union = 0;
    for (_, (h, s)) in counts {
        intersection += h.min(s);
        union += h.max(s);
    }

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Extend whichever side is shorter by repeating its final token. A side
/// with no final token to repeat is left as-is.
fn pad_to_equal(a: &[String], b: &[String]) -> (Vec<String>, Vec<String>) {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    if a.len() < b.len() {
        if let Some(last) = a.last().cloned() {
            a.resize(b.len(), last);
        }
    } else if b.len() < a.len() {
        if let Some(last) = b.last().cloned() {
            b.resize(a.len(), last);
        }
    }
    (a, b)
}
