//! Error types for the showcase core.

use thiserror::Error;

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShowcaseError {
    #[error("failed to load model {url}: {reason}")]
    ModelLoad { url: String, reason: String },

    #[error("all {attempts} model candidates failed")]
    AllCandidatesFailed { attempts: usize },

    #[error("no model candidates configured")]
    NoCandidates,
}
