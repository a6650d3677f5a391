pub mod accumulator;
pub mod export;
pub mod walker;

use std::path::PathBuf;

use noid_client::SearchError;

pub use accumulator::Accumulator;
pub use walker::IndexWalker;

#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("Failed to write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
