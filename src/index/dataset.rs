use std::path::Path;
use std::sync::OnceLock;

use thiserror::Error;

use crate::index::GeneIndex;
use crate::input::{LoadError, load_gene_index};
use crate::model::thresholds::TotalCount;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("gene data has already been loaded for this session")]
    AlreadyInstalled,
}

#[derive(Debug)]
pub enum DatasetState<'a> {
    Pending,
    Ready(&'a GeneIndex),
    Failed(&'a LoadError),
}

/// Session-wide holder of the gene index.
///
/// Starts pending and moves to ready or failed exactly once.
#[derive(Debug, Default)]
pub struct Dataset {
    slot: OnceLock<Result<GeneIndex, LoadError>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, result: Result<GeneIndex, LoadError>) -> Result<(), InstallError> {
        self.slot
            .set(result)
            .map_err(|_| InstallError::AlreadyInstalled)
    }

    /// Loads from `path` and installs the outcome; a failed load becomes
    /// dataset state instead of an error.
    pub fn load(&self, path: &Path, total: TotalCount) -> Result<(), InstallError> {
        if self.slot.get().is_some() {
            tracing::warn!(source = %path.display(), "ignoring second gene data load");
            return Err(InstallError::AlreadyInstalled);
        }
        let result = load_gene_index(path, total);
        if let Err(err) = &result {
            tracing::error!(error = %err, "gene data unavailable");
        }
        self.install(result)
    }

    pub fn state(&self) -> DatasetState<'_> {
        match self.slot.get() {
            None => DatasetState::Pending,
            Some(Ok(index)) => DatasetState::Ready(index),
            Some(Err(err)) => DatasetState::Failed(err),
        }
    }

    pub fn index(&self) -> Option<&GeneIndex> {
        match self.state() {
            DatasetState::Ready(index) => Some(index),
            DatasetState::Pending | DatasetState::Failed(_) => None,
        }
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match self.state() {
            DatasetState::Failed(err) => Some(err),
            DatasetState::Pending | DatasetState::Ready(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/index/dataset.rs"]
mod tests;
