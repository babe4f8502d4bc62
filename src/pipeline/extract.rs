// The extraction pipeline: two CSVs in, one feature record per stance out.
//
// Everything is synchronous and single-pass, and the whole dataset sits in
// memory for the run. At this corpus's scale (tens of thousands of stance
// rows) that is well under typical memory, and it keeps the stages easy to
// reason about.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::dataset::loader;
use crate::dataset::models::{FeatureRecord, Stance};
use crate::error::{Result, StandfirstError};
use crate::features::ngram::NgramOverlapScorer;
use crate::features::similarity;
use crate::features::store::FeatureStore;
use crate::text::normalize::Normalizer;

/// Everything a run produces. Collections are index-aligned:
/// `features.records()[i]` belongs to `stances[i]`.
#[derive(Debug)]
pub struct Extraction {
    pub body_count: usize,
    pub stances: Vec<Stance>,
    pub features: FeatureStore,
}

/// Run the full extraction over the two dataset files.
pub fn run(
    bodies_path: &Path,
    stances_path: &Path,
    scorer: &NgramOverlapScorer,
) -> Result<Extraction> {
    // Step 1: Load both inputs up front. The stances file's row order is
    // the row order of every downstream collection.
    let bodies = loader::load_bodies(bodies_path)?;
    let stances = loader::load_stances(stances_path)?;

    // Step 2: One normalizer for the whole run, and one tokenization pass
    // per body no matter how many stance rows reference it.
    let normalizer = Normalizer::default();
    let body_index = scorer.index_bodies(&normalizer, &bodies);
    info!(bodies = body_index.len(), n = scorer.n, "indexed body n-grams");

    // Step 3: Score every stance example in input order.
    let pb = ProgressBar::new(stances.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Features [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut features = FeatureStore::with_capacity(stances.len());
    for stance in &stances {
        let body_text = bodies.get(stance.body_id)?;
        let sims = similarity::sentence_similarity(
            &normalizer,
            &stance.headline,
            body_text,
            stance.body_id,
        )?;
        let body_ngrams = body_index
            .get(&stance.body_id)
            .ok_or(StandfirstError::UnknownBody {
                body_id: stance.body_id,
            })?;
        let overlap = scorer.score(&normalizer, &stance.headline, body_ngrams, stance.body_id)?;

        features.push(FeatureRecord {
            ngram_overlap: overlap,
            avg_sentence_similarity: sims.average,
            max_sentence_similarity: sims.maximum,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(examples = features.len(), "feature extraction complete");

    Ok(Extraction {
        body_count: bodies.len(),
        stances,
        features,
    })
}
