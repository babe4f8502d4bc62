// standfirst: hand-built lexical features for headline/body stance
// detection.
//
// The library is organized as pipeline stages. `dataset` loads the two
// CSVs into memory, `text` owns tokenization, `features` computes the
// n-gram overlap and sentence-similarity columns, `pipeline` wires the
// stages together, and `classifier` is the seam the resulting matrix will
// eventually feed.

pub mod classifier;
pub mod dataset;
pub mod error;
pub mod features;
pub mod output;
pub mod pipeline;
pub mod text;
