// Dataset models shared across the pipeline.
//
// Kept separate from the CSV loader so the feature modules can work with
// these types without caring how rows were read.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StandfirstError};

/// Integer key uniquely identifying an article body.
pub type BodyId = i64;

/// The article bodies, keyed by body id. One body may be referenced by
/// many stance examples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bodies {
    texts: HashMap<BodyId, String>,
}

impl Bodies {
    pub fn new() -> Self {
        Self {
            texts: HashMap::new(),
        }
    }

    /// Insert a body, returning the previous text if the id was already
    /// present. The caller decides whether that deserves a warning.
    pub fn insert(&mut self, id: BodyId, text: String) -> Option<String> {
        self.texts.insert(id, text)
    }

    /// Look up a body's text. Referential integrity is not checked at load
    /// time, so a dangling body id surfaces here.
    pub fn get(&self, id: BodyId) -> Result<&str> {
        self.texts
            .get(&id)
            .map(String::as_str)
            .ok_or(StandfirstError::UnknownBody { body_id: id })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Iterate over (id, text) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &str)> {
        self.texts.iter().map(|(id, text)| (*id, text.as_str()))
    }
}

/// One labeled example: a headline paired with a body id and the annotated
/// relationship between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stance {
    pub headline: String,
    pub body_id: BodyId,
    pub stance: StanceLabel,
}

/// The closed set of stance annotations used by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StanceLabel {
    /// The body backs the headline's claim.
    Agree,
    /// The body contradicts the headline's claim.
    Disagree,
    /// The body discusses the claim without taking a position.
    Discuss,
    /// The body is about something else entirely.
    Unrelated,
}

impl StanceLabel {
    /// All labels, in the order reports display them.
    pub const ALL: [StanceLabel; 4] = [
        StanceLabel::Agree,
        StanceLabel::Disagree,
        StanceLabel::Discuss,
        StanceLabel::Unrelated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StanceLabel::Agree => "agree",
            StanceLabel::Disagree => "disagree",
            StanceLabel::Discuss => "discuss",
            StanceLabel::Unrelated => "unrelated",
        }
    }
}

impl fmt::Display for StanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The feature vector for one stance example. Field order is the column
/// order of the hand-off matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Headline n-grams found in the body, normalized by the body's token
    /// count.
    pub ngram_overlap: f64,
    /// Mean padded-Jaccard similarity across the body's sentences.
    pub avg_sentence_similarity: f64,
    /// Best padded-Jaccard similarity across the body's sentences.
    pub max_sentence_similarity: f64,
}

impl FeatureRecord {
    /// The record as a fixed-shape row for a numeric matrix.
    pub fn as_array(&self) -> [f64; 3] {
        [
            self.ngram_overlap,
            self.avg_sentence_similarity,
            self.max_sentence_similarity,
        ]
    }
}
