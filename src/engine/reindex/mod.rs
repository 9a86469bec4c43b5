pub mod reindexer;

pub use reindexer::reindex;

#[cfg(test)]
mod reindexer_test;
