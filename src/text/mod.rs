// Text handling: punctuation stripping and tokenization.

pub mod normalize;
