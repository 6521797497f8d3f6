use indicatif::{ProgressBar, ProgressDrawTarget};
use mockall::automock;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

use super::logging::spinner_style;

/// The two presentation states. There is no sticky error state: failures are
/// transient notifications, and the view always returns to `Idle` once an
/// exchange settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
}

#[automock]
pub trait LoadingIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// Terminal spinner shown while an exchange is in flight. On non-tty output
/// the spinner stays hidden and a plain progress line is logged instead.
pub struct SpinnerIndicator {
    bar: ProgressBar,
    message: String,
}

impl SpinnerIndicator {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_style(spinner_style());
        bar.set_message(message.to_string());
        Self {
            bar,
            message: message.to_string(),
        }
    }
}

impl LoadingIndicator for SpinnerIndicator {
    fn show(&self) {
        info!(target: "progress", "{}", self.message);
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
        self.bar.enable_steady_tick(Duration::from_millis(120));
    }

    fn hide(&self) {
        self.bar.finish_and_clear();
    }
}

/// Owns the loading indicator and the `Idle`/`Loading` state machine.
pub struct PresentationController {
    indicator: Box<dyn LoadingIndicator>,
    state: Mutex<ViewState>,
}

impl PresentationController {
    pub fn new(indicator: Box<dyn LoadingIndicator>) -> Self {
        Self {
            indicator,
            state: Mutex::new(ViewState::Idle),
        }
    }

    pub fn state(&self) -> ViewState {
        *self.state.lock().expect("presentation state lock")
    }

    /// Enters `Loading` and shows the indicator. The returned guard restores
    /// `Idle` and hides the indicator when dropped, which covers every exit
    /// path: success, error returns, and unwinding panics.
    pub fn begin_loading(&self) -> LoadingGuard<'_> {
        *self.state.lock().expect("presentation state lock") = ViewState::Loading;
        self.indicator.show();
        LoadingGuard { controller: self }
    }
}

pub struct LoadingGuard<'a> {
    controller: &'a PresentationController,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.controller.state.lock() {
            *state = ViewState::Idle;
        }
        self.controller.indicator.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn controller_expecting_one_cycle() -> PresentationController {
        let mut indicator = MockLoadingIndicator::new();
        indicator.expect_show().times(1).return_const(());
        indicator.expect_hide().times(1).return_const(());
        PresentationController::new(Box::new(indicator))
    }

    #[test]
    fn guard_walks_the_state_machine_both_ways() {
        let controller = controller_expecting_one_cycle();
        assert_eq!(controller.state(), ViewState::Idle);

        {
            let _guard = controller.begin_loading();
            assert_eq!(controller.state(), ViewState::Loading);
        }

        assert_eq!(controller.state(), ViewState::Idle);
    }

    #[test]
    fn guard_releases_on_an_early_error_return() {
        let controller = controller_expecting_one_cycle();

        fn faulty(controller: &PresentationController) -> Result<(), String> {
            let _guard = controller.begin_loading();
            Err("boom".to_string())?;
            Ok(())
        }

        assert!(faulty(&controller).is_err());
        assert_eq!(controller.state(), ViewState::Idle);
    }

    #[test]
    fn guard_releases_when_the_protected_code_panics() {
        let controller = controller_expecting_one_cycle();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = controller.begin_loading();
            panic!("unexpected failure mid-exchange");
        }));

        assert!(result.is_err());
        assert_eq!(controller.state(), ViewState::Idle);
    }

    #[test]
    fn consecutive_exchanges_each_get_their_own_cycle() {
        let mut indicator = MockLoadingIndicator::new();
        indicator.expect_show().times(2).return_const(());
        indicator.expect_hide().times(2).return_const(());
        let controller = PresentationController::new(Box::new(indicator));

        for _ in 0..2 {
            let guard = controller.begin_loading();
            assert_eq!(controller.state(), ViewState::Loading);
            drop(guard);
            assert_eq!(controller.state(), ViewState::Idle);
        }
    }
}
