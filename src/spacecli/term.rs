//! Terminal presentation settings for one run: whether to emit colors, the
//! progress bar geometry, and the compiled output templates.

use crate::error::Result;
use crate::styles::SPACECLI_THEME;
use crate::templates::{COMMANDS_TEMPLATE, HELP_TEMPLATE};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;
use tinge::{ProgressBar, Renderer};

pub const COLOR_ENV: &str = "SPACECLI_COLOR";

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Reads [`COLOR_ENV`]; unset or unrecognized values mean `Auto`.
    pub fn from_env() -> Self {
        std::env::var(COLOR_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn use_color(self) -> bool {
        match self {
            ColorChoice::Auto => tinge::colors_supported(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(format!("unknown color choice: {}", other)),
        }
    }
}

pub struct Terminal {
    use_color: bool,
    progress: ProgressBar,
    renderer: Renderer,
}

impl Terminal {
    pub fn new(use_color: bool, progress_width: usize) -> Result<Self> {
        let mut renderer = Renderer::with_color(SPACECLI_THEME.clone(), use_color);
        renderer.add_template("help", HELP_TEMPLATE)?;
        renderer.add_template("commands", COMMANDS_TEMPLATE)?;
        Ok(Self {
            use_color,
            progress: ProgressBar::new(progress_width),
            renderer,
        })
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn progress_bar(&self) -> ProgressBar {
        self.progress
    }

    /// Paints text with a `fg[:bg]` color spec, or leaves it plain when
    /// colors are off.
    pub fn style(&self, spec: &str, text: &str) -> String {
        tinge::paint(spec, text, self.use_color)
    }

    pub fn draw_progress(
        &self,
        out: &mut dyn Write,
        label: &str,
        current: u64,
        total: u64,
    ) -> std::io::Result<()> {
        self.progress.draw(out, label, current, total)
    }

    pub(crate) fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        Ok(self.renderer.render(template, data)?)
    }
}
