use crate::error::{BarkeepError, Result};

/// Lifecycle state shared by every widget.
///
/// Widgets begin `Idle`, move to `Running` when started, and end in either
/// `Completed` or `Aborted`. The terminal states are final: a finished widget
/// cannot be restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Created or paused, not currently rendering progress.
    Idle,
    /// Actively rendering and accepting updates.
    Running,
    /// Finished successfully.
    Completed,
    /// Finished without reaching its goal, or failed.
    Aborted,
}

impl WidgetState {
    /// Whether the state is terminal.
    pub fn is_done(self) -> bool {
        matches!(self, Self::Completed | Self::Aborted)
    }

    /// Whether the widget is actively running.
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

/// Common lifecycle interface for anything the display can manage.
///
/// As long as a type implements this, it can participate in the shared
/// display alongside the built-in bars and spinners.
pub trait Widget {
    /// Current lifecycle state.
    fn state(&self) -> WidgetState;

    /// Whether the widget has reached a terminal state.
    fn is_done(&self) -> bool {
        self.state().is_done()
    }

    /// Whether the widget is currently running.
    fn is_running(&self) -> bool {
        self.state().is_running()
    }

    /// Begin rendering. Starting a widget that is already running is a no-op;
    /// starting a finished widget is an error.
    fn start(&mut self) -> Result<()>;

    /// Reset progress and start again. Errors on a finished widget.
    fn restart(&mut self) -> Result<()>;

    /// Finish the widget. Errors when it has already finished.
    fn stop(&mut self) -> Result<()>;

    /// Return to `Idle` without finishing. Never fails; pausing a finished
    /// widget does nothing.
    fn pause(&mut self);
}

/// Reject lifecycle operations on widgets that have already finished.
pub(crate) fn ensure_not_done(
    state: WidgetState,
    widget: &'static str,
    action: &'static str,
) -> Result<()> {
    if state.is_done() {
        return Err(BarkeepError::AlreadyFinished { widget, action });
    }
    Ok(())
}
