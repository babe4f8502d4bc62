// Pipeline orchestration. The one place the loader, normalizer, and
// feature stages are wired together.

pub mod extract;
