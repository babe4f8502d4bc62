// The fit/predict seam the feature matrix feeds into.
//
// Nothing here is implemented yet, deliberately. The plan sketched a naive
// Bayes baseline over these three features, and committing to one model
// now would just bake in churn; the ordered records plus index-aligned
// labels are the stable hand-off surface.

use crate::dataset::models::{FeatureRecord, StanceLabel};
use crate::error::Result;

/// A stance classifier over the hand-built feature records.
pub trait StanceClassifier {
    /// Fit the model. `features` and `labels` are index-aligned: label i
    /// annotates record i.
    fn fit(&mut self, features: &[FeatureRecord], labels: &[StanceLabel]) -> Result<()>;

    /// Predict one label per record, in input order.
    fn predict(&self, features: &[FeatureRecord]) -> Result<Vec<StanceLabel>>;
}
