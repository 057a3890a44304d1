use thiserror::Error;

use crate::types::View;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Analysis failed: {0}")]
    AnalysisFailure(String),

    #[error("No information for word: {0}")]
    LookupMiss(String),

    #[error("An analysis is already in progress")]
    AnalysisPending,

    #[error("A chat reply is already in progress")]
    ChatPending,

    #[error("No article has been analyzed yet")]
    NoAnalysis,

    #[error("View is not available: {0}")]
    ViewUnavailable(View),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Errors caused by what the user submitted rather than by the system.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput
                | Error::LookupMiss(_)
                | Error::AnalysisPending
                | Error::ChatPending
                | Error::NoAnalysis
                | Error::ViewUnavailable(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
