// Dataset ingestion: CSV loading and the in-memory models.

pub mod loader;
pub mod models;
