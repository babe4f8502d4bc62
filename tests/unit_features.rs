// Unit tests for the two feature computations.
//
// These pin the numeric contracts: what counts as a match, what the
// overlap divisor is, and how the similarity measure pads and reduces.

use standfirst::dataset::models::{Bodies, BodyId};
use standfirst::error::StandfirstError;
use standfirst::features::ngram::NgramOverlapScorer;
use standfirst::features::similarity::sentence_similarity;
use standfirst::text::normalize::Normalizer;

fn one_body(id: BodyId, text: &str) -> Bodies {
    let mut bodies = Bodies::new();
    bodies.insert(id, text.to_string());
    bodies
}

fn overlap(scorer: &NgramOverlapScorer, headline: &str, body_text: &str) -> f64 {
    let normalizer = Normalizer::default();
    let bodies = one_body(1, body_text);
    let index = scorer.index_bodies(&normalizer, &bodies);
    scorer
        .score(&normalizer, headline, &index[&1], 1)
        .expect("overlap should score")
}

// ============================================================
// N-gram overlap: divisor and membership semantics
// ============================================================

#[test]
fn overlap_divides_by_body_token_count_not_longer_text() {
    let scorer = NgramOverlapScorer::default();
    // Body: 5 tokens. Headline: 7 tokens, 3 shared (soldiers, guard,
    // border). Normalizing by the longer side would give 3/7.
    let score = overlap(
        &scorer,
        "armed soldiers guard busy border town today",
        "soldiers guard the border crossing",
    );
    assert!(
        (score - 3.0 / 5.0).abs() < 1e-9,
        "Expected 3/5, got {score}"
    );
    assert!(
        (score - 3.0 / 7.0).abs() > 0.1,
        "Score must not be normalized by the longer headline"
    );
}

#[test]
fn headline_occurrences_each_count_against_the_body_set() {
    let scorer = NgramOverlapScorer::default();
    // "virus" appears once in the body but three times in the headline;
    // membership is tested per headline occurrence.
    let score = overlap(
        &scorer,
        "virus virus virus",
        "virus spreads quickly across borders today",
    );
    assert!(
        (score - 3.0 / 6.0).abs() < 1e-9,
        "Expected 3/6, got {score}"
    );
}

#[test]
fn overlap_is_case_insensitive() {
    let scorer = NgramOverlapScorer::default();
    let score = overlap(&scorer, "BANK Collapse", "bank collapse imminent");
    assert!(
        (score - 2.0 / 3.0).abs() < 1e-9,
        "Expected 2/3, got {score}"
    );
}

#[test]
fn single_character_tokens_never_match_or_count() {
    let scorer = NgramOverlapScorer::default();
    // "a", "b", "c" fall under the length floor on both sides, leaving a
    // one-token body and a one-token headline that match exactly.
    let score = overlap(&scorer, "a report", "a b c report");
    assert!((score - 1.0).abs() < 1e-9, "Expected 1.0, got {score}");
}

#[test]
fn bigram_overlap_requires_adjacency() {
    let scorer = NgramOverlapScorer {
        n: 2,
        ..Default::default()
    };
    // Body bigrams include (black, cat) and (cat, sat); the headline's
    // (sat, quietly) matches nothing. 7 body tokens.
    let score = overlap(
        &scorer,
        "black cat sat quietly",
        "the black cat sat on the mat",
    );
    assert!(
        (score - 2.0 / 7.0).abs() < 1e-9,
        "Expected 2/7, got {score}"
    );
}

#[test]
fn unrelated_pair_scores_zero() {
    let scorer = NgramOverlapScorer::default();
    let score = overlap(&scorer, "markets rally overnight", "the cat sat on the mat");
    assert_eq!(score, 0.0);
}

#[test]
fn body_with_only_short_tokens_is_a_data_error() {
    let normalizer = Normalizer::default();
    let scorer = NgramOverlapScorer::default();
    let bodies = one_body(9, "a b c. d e.");
    let index = scorer.index_bodies(&normalizer, &bodies);

    assert_eq!(index[&9].token_count(), 0);
    let err = scorer
        .score(&normalizer, "some headline", &index[&9], 9)
        .expect_err("zero-token body must not score");
    assert!(
        matches!(err, StandfirstError::EmptyBodyTokens { body_id: 9 }),
        "unexpected error: {err}"
    );
    assert!(err.to_string().contains('9'), "error must name the body id");
}

// ============================================================
// Sentence similarity: the two-sentence worked example
// ============================================================

#[test]
fn two_sentence_body_produces_exact_average_and_maximum() {
    let normalizer = Normalizer::default();
    // Headline tokens: [The, cat, sat, on, the, mat]. "The cat sat." pads
    // to six with "sat" and scores 3/9; "The dog ran." shares only "The"
    // and scores 1/11.
    let stats = sentence_similarity(
        &normalizer,
        "The cat sat on the mat",
        "The cat sat. The dog ran.",
        1,
    )
    .expect("two real sentences");

    assert!(
        (stats.maximum - 1.0 / 3.0).abs() < 1e-9,
        "Expected max 1/3, got {}",
        stats.maximum
    );
    assert!(
        (stats.average - 7.0 / 33.0).abs() < 1e-9,
        "Expected avg 7/33, got {}",
        stats.average
    );
}

#[test]
fn average_never_exceeds_maximum() {
    let normalizer = Normalizer::default();
    let stats = sentence_similarity(
        &normalizer,
        "Police confirm the report",
        "Police confirm it. The report was wrong! Nobody knows more yet.",
        2,
    )
    .expect("three real sentences");
    assert!(
        stats.average <= stats.maximum + 1e-12,
        "avg {} > max {}",
        stats.average,
        stats.maximum
    );
}

#[test]
fn single_sentence_body_has_equal_average_and_maximum() {
    let normalizer = Normalizer::default();
    let stats = sentence_similarity(&normalizer, "The cat sat", "The cat sat.", 3)
        .expect("one real sentence");
    assert_eq!(stats.average, stats.maximum);
    assert!((stats.maximum - 1.0).abs() < 1e-9);
}

#[test]
fn tokenless_sentences_are_skipped_not_scored() {
    let normalizer = Normalizer::default();
    // "!!!" segments as a sentence but tokenizes empty, so only the real
    // sentence contributes; a zero from the empty one would drag the
    // average down.
    let with_noise = sentence_similarity(&normalizer, "The cat sat", "!!! The cat sat.", 4)
        .expect("one real sentence");
    let without = sentence_similarity(&normalizer, "The cat sat", "The cat sat.", 4)
        .expect("one real sentence");
    assert_eq!(with_noise, without);
}

#[test]
fn punctuation_only_body_is_a_no_sentences_error() {
    let normalizer = Normalizer::default();
    let err = sentence_similarity(&normalizer, "any headline", "... !!! ???", 4)
        .expect_err("no sentence survives tokenization");
    assert!(
        matches!(err, StandfirstError::NoSentences { body_id: 4 }),
        "unexpected error: {err}"
    );
    assert!(err.to_string().contains('4'), "error must name the body id");
}

#[test]
fn empty_headline_scores_zero_without_error() {
    let normalizer = Normalizer::default();
    let stats = sentence_similarity(&normalizer, "", "The cat sat. The dog ran.", 5)
        .expect("empty headline is not an error");
    assert_eq!(stats.average, 0.0);
    assert_eq!(stats.maximum, 0.0);
}

#[test]
fn similarity_keeps_case_unlike_overlap() {
    let normalizer = Normalizer::default();
    // "THE CAT SAT" shares no token with "The cat sat." when case is
    // preserved.
    let stats = sentence_similarity(&normalizer, "THE CAT SAT", "The cat sat.", 6)
        .expect("one real sentence");
    assert_eq!(stats.maximum, 0.0);
}

#[test]
fn headline_punctuation_is_stripped_before_tokenizing() {
    let normalizer = Normalizer::default();
    // "cat's" strips to "cats", which matches the body's "cats" exactly.
    let stats = sentence_similarity(&normalizer, "cat's", "cats.", 7).expect("one real sentence");
    assert!((stats.maximum - 1.0).abs() < 1e-9);
}
