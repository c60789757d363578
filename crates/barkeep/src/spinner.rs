use indicatif::{ProgressBar as DisplayBar, ProgressDrawTarget};
use termcolor::Color;

use crate::{
    error::{BarkeepError, Result},
    manager::Manager,
    style::{self, TickStyle},
    widget::{Widget, WidgetState, ensure_not_done},
};

/// Name used for spinners in error messages.
const WIDGET_NAME: &str = "spinner";

/// Options for constructing a [`Spinner`].
#[derive(Debug, Clone)]
pub struct SpinnerOptions {
    /// Frame set used for the animation.
    pub frames: TickStyle,
    /// Keep the spinner's last message rendered after a plain stop.
    pub persist: bool,
    /// Icon for the [`Spinner::success`] finish line.
    pub success_icon: String,
    /// Icon for the [`Spinner::fail`] finish line.
    pub fail_icon: String,
    /// Manager to attach to; the global manager when `None`.
    pub manager: Option<Manager>,
}

impl Default for SpinnerOptions {
    fn default() -> Self {
        Self {
            frames: TickStyle::default(),
            persist: false,
            success_icon: "✔".to_string(),
            fail_icon: "✖".to_string(),
            manager: None,
        }
    }
}

/// A spinner wrapping the underlying widget library, customised and
/// integrated with the other widgets.
///
/// For example:
///
/// ```text
/// ⠦ Saving new best model to: log/example/best
/// ```
///
/// [`Spinner::success`] and [`Spinner::fail`] replace the animation with a
/// persistent finish line:
///
/// ```text
/// ✔ Saved new best model
/// ```
#[derive(Debug)]
pub struct Spinner {
    /// Message rendered next to the animation.
    text: String,
    /// Keep the last message rendered after a plain stop.
    persist: bool,
    /// Icon for the success finish line.
    success_icon: String,
    /// Icon for the failure finish line.
    fail_icon: String,
    /// Current lifecycle state.
    state: WidgetState,
    /// Manager owning the shared display.
    manager: Manager,
    /// Underlying display bar.
    bar: DisplayBar,
    /// Whether the display bar has been attached to the manager.
    attached: bool,
}

impl Spinner {
    /// Create a spinner on the global manager with default options.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_options(text, SpinnerOptions::default())
    }

    /// Create a spinner with explicit options.
    pub fn with_options(text: impl Into<String>, options: SpinnerOptions) -> Self {
        let text = text.into();
        let manager = options.manager.unwrap_or_else(|| Manager::global().clone());

        let bar = DisplayBar::new_spinner();
        // Not rendered until attached to the manager on start.
        bar.set_draw_target(ProgressDrawTarget::hidden());
        bar.set_style(style::spinner_style(options.frames, manager.colors_enabled()));
        bar.set_message(text.clone());

        Self {
            text,
            persist: options.persist,
            success_icon: options.success_icon,
            fail_icon: options.fail_icon,
            state: WidgetState::Idle,
            manager,
            bar,
            attached: false,
        }
    }

    /// Replace the message while the spinner runs.
    ///
    /// Errors once the spinner has finished.
    pub fn update(&mut self, text: impl Into<String>) -> Result<()> {
        ensure_not_done(self.state, WIDGET_NAME, "updated")?;
        self.text = text.into();
        self.bar.set_message(self.text.clone());
        Ok(())
    }

    /// Stop and persist a success finish line, using `text` or the current
    /// message when `None`.
    pub fn success(&mut self, text: Option<&str>) -> Result<()> {
        self.finish_line(true, text)
    }

    /// Stop and persist a failure finish line; the final state is `Aborted`.
    pub fn fail(&mut self, text: Option<&str>) -> Result<()> {
        self.finish_line(false, text)
    }

    /// Message rendered next to the animation.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attach the display bar to the manager the first time the spinner
    /// starts.
    fn attach_if_needed(&mut self) {
        if !self.attached {
            self.bar = self.manager.attach(self.bar.clone());
            self.attached = true;
        }
    }

    /// Replace the animation with a persistent, colored finish line.
    fn finish_line(&mut self, success: bool, text: Option<&str>) -> Result<()> {
        ensure_not_done(self.state, WIDGET_NAME, "finished")?;

        let icon = if success {
            self.success_icon.clone()
        } else {
            self.fail_icon.clone()
        };
        let color = if success { Color::Green } else { Color::Red };
        let text = text.unwrap_or(&self.text).to_string();
        let line = format!(
            "{} {text}",
            style::paint(&icon, color, self.manager.colors_enabled())?
        );

        self.persist = true;
        self.attach_if_needed();
        self.bar.disable_steady_tick();
        self.bar.set_style(style::final_style());
        self.bar.abandon_with_message(line);
        self.manager.promote(&self.bar);
        self.state = if success {
            WidgetState::Completed
        } else {
            WidgetState::Aborted
        };
        Ok(())
    }
}

impl Widget for Spinner {
    fn state(&self) -> WidgetState {
        self.state
    }

    fn start(&mut self) -> Result<()> {
        ensure_not_done(self.state, WIDGET_NAME, "started")?;
        if self.state.is_running() {
            return Ok(());
        }
        self.attach_if_needed();
        self.bar.enable_steady_tick(style::TICK_INTERVAL);
        self.state = WidgetState::Running;
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        ensure_not_done(self.state, WIDGET_NAME, "restarted")?;
        self.attach_if_needed();
        self.bar.reset_elapsed();
        self.bar.enable_steady_tick(style::TICK_INTERVAL);
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

        self.bar.disable_steady_tick();
        if self.attached {
            if self.persist {
                self.bar.abandon();
                self.manager.promote(&self.bar);
            } else {
                self.bar.finish_and_clear();
                self.manager.detach(&self.bar);
                self.attached = false;
            }
        } else {
            self.bar.finish_and_clear();
        }
        self.state = WidgetState::Completed;
        Ok(())
    }

    fn pause(&mut self) {
        if self.state.is_running() {
            self.bar.disable_steady_tick();
            self.state = WidgetState::Idle;
        }
    }
}

impl Drop for Spinner {
    #[allow(clippy::let_underscore_must_use)]
    fn drop(&mut self) {
        if !self.state.is_done() {
            let _ = self.stop();
        }
    }
}
