use std::{
    io::{self, IsTerminal},
    sync::{
        Arc, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use indicatif::{MultiProgress, ProgressBar as DisplayBar, ProgressDrawTarget};

use crate::error::Result;

/// Process-wide default manager, created on first use.
static GLOBAL: OnceLock<Manager> = OnceLock::new();

/// Options for constructing a [`Manager`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagerOptions {
    /// Render to a hidden draw target instead of stderr. Useful for tests and
    /// non-interactive environments.
    pub hidden: bool,
    /// Force colors on or off. `None` auto-detects from the terminal.
    pub colors: Option<bool>,
    /// Re-insert finished persistent widgets above running ones.
    pub completed_on_top: bool,
}

/// Bookkeeping shared by all clones of a manager.
#[derive(Debug)]
struct Inner {
    /// The draw group every widget attaches to.
    multi: MultiProgress,
    /// Whether the display renders anywhere.
    hidden: bool,
    /// Whether finish lines and bars use ANSI colors.
    colors: bool,
    /// Whether finished persistent widgets move above running ones.
    completed_on_top: bool,
    /// Number of widgets currently attached to the display.
    attached: AtomicUsize,
}

/// Coordinates any number of bars and spinners in one live display.
///
/// The wrapped widget library cannot render several independent bars at the
/// same time unless they share a draw group; the manager owns that group so
/// callers never compose one by hand. Widgets attach when started and detach
/// when they finish without persisting. Cloning is cheap and every clone
/// shares the same display.
#[derive(Debug, Clone)]
pub struct Manager {
    /// Shared state behind the clones.
    inner: Arc<Inner>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Create a manager rendering to stderr with default options.
    pub fn new() -> Self {
        Self::with_options(ManagerOptions::default())
    }

    /// Create a manager with explicit options.
    pub fn with_options(options: ManagerOptions) -> Self {
        let multi = if options.hidden {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        };

        let colors = options
            .colors
            .unwrap_or_else(|| !options.hidden && io::stderr().is_terminal());

        Self {
            inner: Arc::new(Inner {
                multi,
                hidden: options.hidden,
                colors,
                completed_on_top: options.completed_on_top,
                attached: AtomicUsize::new(0),
            }),
        }
    }

    /// The process-wide default manager, created lazily. Widgets attach to it
    /// unless an explicit manager is supplied in their options.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Print a line above the live widgets without clobbering them.
    pub fn println(&self, line: impl AsRef<str>) -> Result<()> {
        self.inner.multi.println(line)?;
        Ok(())
    }

    /// Pause drawing while running `f`, for output the manager does not own.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.inner.multi.suspend(f)
    }

    /// Remove every widget from the display and forget them.
    pub fn clear(&self) -> Result<()> {
        self.inner.multi.clear()?;
        self.inner.attached.store(0, Ordering::SeqCst);
        Ok(())
    }

    /// Number of widgets currently attached to the display, including
    /// finished ones that persist.
    pub fn attached(&self) -> usize {
        self.inner.attached.load(Ordering::SeqCst)
    }

    /// Whether the display renders anywhere.
    pub fn is_hidden(&self) -> bool {
        self.inner.hidden
    }

    /// Whether finish lines and bars use ANSI colors.
    pub fn colors_enabled(&self) -> bool {
        self.inner.colors
    }

    /// Attach a widget's display bar to the draw group.
    pub(crate) fn attach(&self, bar: DisplayBar) -> DisplayBar {
        let bar = self.inner.multi.add(bar);
        self.inner.attached.fetch_add(1, Ordering::SeqCst);
        bar
    }

    /// Detach a widget's display bar from the draw group.
    pub(crate) fn detach(&self, bar: &DisplayBar) {
        self.inner.multi.remove(bar);
        // Saturating: clear() may already have reset the counter.
        let _updated = self
            .inner
            .attached
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                Some(n.saturating_sub(1))
            });
    }

    /// Move a finished persistent widget above the running ones, when the
    /// manager was configured with `completed_on_top`.
    pub(crate) fn promote(&self, bar: &DisplayBar) {
        if !self.inner.completed_on_top {
            return;
        }
        self.inner.multi.remove(bar);
        drop(self.inner.multi.insert(0, bar.clone()));
    }
}
