mod cli;
mod client;
mod error;
mod submit;

pub mod prelude {
    pub use super::cli::{analyze_root, AnalyzeArgs, SAMPLE_LYRICS};
    pub use super::client::{
        decode_envelope, AnalysisBackend, HttpAnalysisClient, MockAnalysisBackend,
    };
    pub use super::error::{TransportError, ValidationError};
    pub use super::submit::{run_submission, SubmissionOutcome};
}
