pub mod backfill;
pub mod discover;
pub mod prompt;
pub mod reconcile;
pub mod rename;
pub mod store;
