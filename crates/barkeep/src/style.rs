use std::{io::Write, time::Duration};

use indicatif::ProgressStyle;
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

use crate::error::Result;

/// Interval between spinner animation frames.
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Bar template when colors are enabled.
///
/// Renders like tqdm rather than like indicatif's defaults:
///
/// Epoch 1 - Train   4% ━╸━━━━━━━━━━━━━━━━━━━━━━━━━━━━  36/800 • 0:01:09 • ETA 0:18:08
const BAR_TEMPLATE_COLOR: &str =
    "{prefix}{msg} {percent:>3}% {bar:30.magenta/dim} {pos}/{len} • {elapsed_precise} • ETA {eta_precise}";

/// Bar template when colors are disabled.
const BAR_TEMPLATE_PLAIN: &str =
    "{prefix}{msg} {percent:>3}% {bar:30} {pos}/{len} • {elapsed_precise} • ETA {eta_precise}";

/// Spinner template when colors are enabled.
const SPINNER_TEMPLATE_COLOR: &str = "{spinner:.green} {msg}";

/// Spinner template when colors are disabled.
const SPINNER_TEMPLATE_PLAIN: &str = "{spinner} {msg}";

/// Template used once a spinner has finished with a final line.
const FINAL_TEMPLATE: &str = "{msg}";

/// Bar fill characters: done, leading edge, remaining.
const BAR_PROGRESS_CHARS: &str = "━╸━";

/// Named spinner frame sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickStyle {
    /// Braille dots, the default.
    #[default]
    Dots,
    /// A rotating ASCII line, for terminals without braille glyphs.
    Line,
    /// A rotating arc.
    Arc,
}

impl TickStyle {
    /// Animation frames. The trailing space is the finished-state character.
    fn frames(self) -> &'static str {
        match self {
            Self::Dots => "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ",
            Self::Line => "-\\|/ ",
            Self::Arc => "◜◠◝◞◡◟ ",
        }
    }
}

/// Style for progress bars with tqdm-like columns.
pub(crate) fn bar_style(colors: bool) -> ProgressStyle {
    let template = if colors {
        BAR_TEMPLATE_COLOR
    } else {
        BAR_TEMPLATE_PLAIN
    };
    ProgressStyle::with_template(template)
        .expect("bar template parses")
        .progress_chars(BAR_PROGRESS_CHARS)
}

/// Style for spinners using the given frame set.
pub(crate) fn spinner_style(frames: TickStyle, colors: bool) -> ProgressStyle {
    let template = if colors {
        SPINNER_TEMPLATE_COLOR
    } else {
        SPINNER_TEMPLATE_PLAIN
    };
    ProgressStyle::with_template(template)
        .expect("spinner template parses")
        .tick_chars(frames.frames())
}

/// Style for a spinner's persistent finish line.
pub(crate) fn final_style() -> ProgressStyle {
    ProgressStyle::with_template(FINAL_TEMPLATE).expect("final template parses")
}

/// Wrap `text` in ANSI codes for `color`, or return it unchanged when colors
/// are disabled.
pub(crate) fn paint(text: &str, color: Color, enabled: bool) -> Result<String> {
    if !enabled {
        return Ok(text.to_string());
    }

    let mut ansi = Ansi::new(Vec::new());
    ansi.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(ansi, "{text}")?;
    ansi.reset()?;
    Ok(String::from_utf8_lossy(&ansi.into_inner()).into_owned())
}
