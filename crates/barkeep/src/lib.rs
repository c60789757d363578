#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
//! Progress bars, spinners and other terminal widgets made more intuitive.
//!
//! This crate wraps [`indicatif`] with defaults closer to what tqdm-style
//! tools use, and adds the pieces that are tedious to wire up by hand:
//!
//! - [`ProgressBar`]: a bar with description, percentage, count, elapsed time
//!   and ETA columns out of the box
//! - [`Spinner`]: an activity indicator with persistent `✔`/`✖` finish lines
//! - [`Manager`]: a shared display that lets any number of bars and spinners
//!   render simultaneously
//! - [`Output`]: colored status lines that print above the live widgets
//!
//! Every widget follows the same lifecycle (idle, running, completed or
//! aborted), and misuse such as advancing a bar that was never started is
//! reported as a [`BarkeepError`] instead of silently ignored.

/// Progress bar widget with tqdm-like column defaults.
mod bar;
/// Error types shared across the crate.
mod error;
/// Shared display coordination for concurrent widgets.
mod manager;
/// Colored status line abstractions and implementations.
mod output;
/// Spinner widget with success/failure finish lines.
mod spinner;
/// Render templates, spinner frame sets and ANSI painting.
mod style;
/// Widget lifecycle states and the `Widget` trait.
mod widget;

pub use bar::{BarOptions, ProgressBar};
pub use error::{BarkeepError, Result};
pub use manager::{Manager, ManagerOptions};
pub use output::{Output, Quiet, Terminal};
pub use spinner::{Spinner, SpinnerOptions};
pub use style::TickStyle;
pub use widget::{Widget, WidgetState};
