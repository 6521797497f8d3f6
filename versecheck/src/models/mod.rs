mod request;
mod result;

pub mod prelude {
    pub use super::request::{AnalysisRequest, Genre, Mood, Section};
    pub use super::result::{
        metric_display, AnalysisResult, FeedbackItem, LineSuggestion, ResponseEnvelope,
    };
}
