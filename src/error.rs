// src/error.rs
use thiserror::Error;

/// Everything that can stop a project from being shown.
///
/// All variants end up in the same place: the error panel is revealed and the
/// project frame is removed. The distinction only matters for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("invalid project id: {0:?}")]
    InvalidProjectId(String),

    #[error("project {0} is not in the catalog")]
    ProjectNotFound(u32),

    #[error("invalid project name: {0:?}")]
    InvalidProjectName(String),

    #[error("failed to load project catalog: {0}")]
    CatalogLoadFailure(String),

    #[error("project frame failed to load: {0}")]
    FrameLoadFailure(String),

    #[error("no project was requested")]
    MissingProject,
}
