// Feature computation: n-gram overlap, sentence similarity, and the
// ordered store that collects one record per stance example.

pub mod ngram;
pub mod similarity;
pub mod store;
