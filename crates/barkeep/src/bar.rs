use indicatif::{ProgressBar as DisplayBar, ProgressDrawTarget};

use crate::{
    error::{BarkeepError, Result},
    manager::Manager,
    style,
    widget::{Widget, WidgetState, ensure_not_done},
};

/// Name used for progress bars in error messages.
const WIDGET_NAME: &str = "progress bar";

/// Options for constructing a [`ProgressBar`].
#[derive(Debug, Clone, Default)]
pub struct BarOptions {
    /// Starting position, in case some work already happened.
    pub current: u64,
    /// Text rendered before the description, e.g. `"[ 1/10] "`.
    pub prefix: String,
    /// Keep the bar rendered after it finishes.
    pub persist: bool,
    /// Manager to attach to; the global manager when `None`.
    pub manager: Option<Manager>,
}

/// A progress bar wrapping the underlying widget library, customised and
/// simplified to be closer to what tqdm uses as defaults, as that makes much
/// more sense than the wrapped library's defaults.
///
/// For example:
///
/// ```text
/// Epoch 1 - Train   4% ━╸━━━━━━━━━━━━━━━━━━━━━━━━━━━━  36/800 • 0:01:09 • ETA 0:18:08
/// ```
///
/// The bar is created idle and invisible; it appears when started and is
/// removed when it finishes, unless `persist` was requested. Dropping a
/// running bar finishes it as if [`Widget::stop`] had been called.
#[derive(Debug)]
pub struct ProgressBar {
    /// Description rendered ahead of the bar.
    desc: String,
    /// The position at which the bar counts as completed.
    total: u64,
    /// Keep the bar rendered after it finishes.
    persist: bool,
    /// Current lifecycle state.
    state: WidgetState,
    /// Manager owning the shared display.
    manager: Manager,
    /// Underlying display bar.
    bar: DisplayBar,
    /// Whether the display bar has been attached to the manager.
    attached: bool,
}

impl ProgressBar {
    /// Create a bar on the global manager with default options.
    pub fn new(desc: impl Into<String>, total: u64) -> Self {
        Self::with_options(desc, total, BarOptions::default())
    }

    /// Create a bar with explicit options.
    pub fn with_options(desc: impl Into<String>, total: u64, options: BarOptions) -> Self {
        let desc = desc.into();
        let manager = options.manager.unwrap_or_else(|| Manager::global().clone());

        let bar = DisplayBar::new(total);
        // Not rendered until attached to the manager on start.
        bar.set_draw_target(ProgressDrawTarget::hidden());
        bar.set_style(style::bar_style(manager.colors_enabled()));
        bar.set_prefix(options.prefix);
        bar.set_message(desc.clone());
        bar.set_position(options.current);

        Self {
            desc,
            total,
            persist: options.persist,
            state: WidgetState::Idle,
            manager,
            bar,
            attached: false,
        }
    }

    /// Advance the bar by `n` steps.
    ///
    /// Errors when the bar is not running, or when it already reached its
    /// total.
    pub fn advance(&mut self, n: u64) -> Result<()> {
        if !self.state.is_running() {
            return Err(BarkeepError::NotRunning {
                widget: WIDGET_NAME,
                action: "advance",
            });
        }
        if self.bar.position() >= self.total {
            return Err(BarkeepError::Exhausted { total: self.total });
        }
        self.bar.inc(n);
        Ok(())
    }

    /// Current position.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// The position at which the bar counts as completed.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Description rendered ahead of the bar.
    pub fn description(&self) -> &str {
        &self.desc
    }

    /// Attach the display bar to the manager the first time the bar starts.
    fn attach_if_needed(&mut self) {
        if !self.attached {
            self.bar = self.manager.attach(self.bar.clone());
            self.attached = true;
        }
    }

    /// Settle the display once the bar has reached a terminal state.
    fn finish_display(&mut self, completed: bool) {
        if !self.attached {
            // Never shown; nothing to settle on screen.
            self.bar.finish_and_clear();
            return;
        }

        if self.persist {
            if completed {
                self.bar.finish();
            } else {
                self.bar.abandon();
            }
            self.manager.promote(&self.bar);
        } else {
            self.bar.finish_and_clear();
            self.manager.detach(&self.bar);
            self.attached = false;
        }
    }
}

impl Widget for ProgressBar {
    fn state(&self) -> WidgetState {
        self.state
    }

    fn start(&mut self) -> Result<()> {
        ensure_not_done(self.state, WIDGET_NAME, "started")?;
        if self.state.is_running() {
            return Ok(());
        }
        if !self.attached {
            self.attach_if_needed();
            self.bar.reset_elapsed();
            self.bar.reset_eta();
        }
        self.state = WidgetState::Running;
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        ensure_not_done(self.state, WIDGET_NAME, "restarted")?;
        self.attach_if_needed();
        self.bar.reset();
        self.state = WidgetState::Running;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.state.is_done() {
            return Err(BarkeepError::NotRunning {
                widget: WIDGET_NAME,
                action: "stop",
            });
        }
        let completed = self.bar.position() >= self.total;
        self.state = if completed {
            WidgetState::Completed
        } else {
            WidgetState::Aborted
        };
        self.finish_display(completed);
        Ok(())
    }

    fn pause(&mut self) {
        // The wrapped library has no per-bar clock stop, so pausing only
        // halts updates; the elapsed clock keeps running.
        if self.state.is_running() {
            self.bar.tick();
            self.state = WidgetState::Idle;
        }
    }
}

impl Drop for ProgressBar {
    #[allow(clippy::let_underscore_must_use)]
    fn drop(&mut self) {
        if !self.state.is_done() {
            let _ = self.stop();
        }
    }
}
