mod config;
mod logging;
mod progress;

pub mod prelude {
    pub use super::config::{ConfigOptions, FoundConfig, DEFAULT_ENDPOINT};
    pub use super::logging::LoggingOpts;
    pub use super::progress::{
        LoadingGuard, LoadingIndicator, MockLoadingIndicator, PresentationController,
        SpinnerIndicator, ViewState,
    };
}
