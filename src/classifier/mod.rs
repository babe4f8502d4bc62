// Classifier interfaces. Implementations come later; see traits.rs.

pub mod traits;
