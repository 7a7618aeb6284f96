pub mod cast;
pub mod export;
pub mod extract;
pub mod format;
pub mod provider;
pub mod record;
pub mod session;
pub mod types;


pub use cast::{CastEntry, CastOrigin, CastResolver, CastSource, PrimaryCast};
pub use export::{Export, ExportFormat, export};
pub use provider::{HttpClient, KinopoiskProvider, UnofficialProvider};
pub use record::{FilmRecord, RECORD_KEYS, assemble};
pub use session::Session;

/// Pipeline result type
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Pipeline error taxonomy. Formatter-level problems never surface here;
/// they are absorbed into sentinel values locally.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Distinct process exit code per failure kind, for batch callers
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 2,
            Self::Api { .. } => 3,
            Self::Network(_) => 4,
            Self::Parse(_) => 5,
            Self::Export(_) => 6,
            Self::Io(_) => 7,
        }
    }
}
