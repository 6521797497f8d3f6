use super::client::AnalysisBackend;
use super::error::TransportError;
use crate::models::prelude::{AnalysisRequest, ResponseEnvelope};
use crate::report::prelude::{render, CritiqueView};
use crate::shared::prelude::PresentationController;

/// What one settled exchange came to, for the caller to narrate.
#[derive(Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// The critique was rendered into the view.
    Rendered,
    /// The backend answered with its error channel; nothing was rendered.
    BackendError(String),
}

/// Drives one submission through the exchange and, on success, the render.
///
/// The loading indicator is held by a guard scoped to the exchange itself:
/// it releases when the exchange settles, before any rendering, on success,
/// failure, and unwind alike. The view is only touched with a validated
/// result, so a failed exchange leaves previously rendered output intact.
pub async fn run_submission(
    request: &AnalysisRequest,
    backend: &dyn AnalysisBackend,
    controller: &PresentationController,
    view: &mut dyn CritiqueView,
) -> Result<SubmissionOutcome, TransportError> {
    let settled = {
        let _loading = controller.begin_loading();
        backend.send(request).await
    };

    match settled? {
        ResponseEnvelope::Failure { error } => Ok(SubmissionOutcome::BackendError(error)),
        ResponseEnvelope::Success { analysis } => {
            render(&analysis, view);
            Ok(SubmissionOutcome::Rendered)
        }
    }
}
