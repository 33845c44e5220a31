//! # Tinge - Terminal Presentation Helpers
//!
//! Small building blocks for styled command-line output:
//!
//! - [`palette`]: fixed foreground/background color tables and `fg:bg` color
//!   specs ([`paint`], [`ColorSpec`])
//! - [`Styles`] / [`Theme`]: named `console::Style`s, applied from templates
//!   through a `style` filter
//! - [`Renderer`]: minijinja templates registered once and rendered with a
//!   theme, with or without ANSI codes
//! - [`ProgressBar`]: a single-line `label [###...] 42%` bar
//!
//! ## Quick Example
//!
//! ```rust
//! use tinge::{Renderer, Theme};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { name: String }
//!
//! let theme = Theme::new().spec("header", "lime");
//! let mut renderer = Renderer::with_color(theme, false);
//! renderer.add_template("hello", r#"{{ name | style("header") }}!"#).unwrap();
//!
//! let out = renderer.render("hello", &Data { name: "world".into() }).unwrap();
//! assert_eq!(out, "world!");
//! ```
//!
//! ## Terminal Detection
//!
//! [`colors_supported`] asks the `console` crate whether stdout can show
//! colors. Callers decide what to do with the answer; every rendering entry
//! point takes an explicit `use_color` flag.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

pub mod palette;
pub mod progress;

pub use minijinja::Error as RenderError;
pub use palette::{paint, ColorSpec, Swatch, BACKGROUNDS, FOREGROUNDS};
pub use progress::ProgressBar;

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Returns true when stdout is a terminal that supports colors.
pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

/// A collection of named styles.
///
/// When a style name is not found, a configurable indicator is prepended to the
/// text to help catch typos in templates (defaults to `(!?)`).
///
/// ```rust
/// use tinge::Styles;
/// use console::Style;
///
/// let styles = Styles::new().add("error", Style::new().red());
/// let unknown = styles.apply("typo", "Hello");
/// assert!(unknown.starts_with("(!?)"));
/// ```
#[derive(Clone)]
pub struct Styles {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indicator prepended for unknown style names. Empty disables it.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds a named style, replacing any existing style with the same name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style to text, with ANSI codes.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None if self.missing_indicator.is_empty() => text.to_string(),
            None => format!("{} {}", self.missing_indicator, text),
        }
    }

    /// Same lookup as [`Styles::apply`] but never emits ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) || self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A named collection of styles used when rendering templates.
#[derive(Clone, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles = self.styles.add(name, style);
        self
    }

    /// Adds a named style from a `fg[:bg]` color spec.
    pub fn spec(self, name: &str, spec: &str) -> Self {
        let style = ColorSpec::parse(spec).style();
        self.add(name, style)
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

/// A renderer with pre-registered templates.
///
/// Templates are compiled once, when added, and rendered by name.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with explicit color control.
    pub fn with_color(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        register_style_filter(&mut env, theme, use_color);
        Self { env }
    }

    /// Registers a named template. Syntax errors are reported here.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    let styles = theme.styles;
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            styles.apply(&name, &text)
        } else {
            styles.apply_plain(&name, &text)
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_styles_add_and_has() {
        let styles = Styles::new()
            .add("error", Style::new().red())
            .add("ok", Style::new().green());

        assert!(styles.has("error"));
        assert!(!styles.has("warning"));
        assert_eq!(styles.len(), 2);
    }

    #[test]
    fn test_styles_apply_unknown_shows_indicator() {
        assert_eq!(Styles::new().apply("nope", "hello"), "(!?) hello");
        assert_eq!(Styles::new().apply_plain("nope", "hello"), "(!?) hello");
    }

    #[test]
    fn test_styles_apply_unknown_with_empty_indicator() {
        let styles = Styles::new().missing_indicator("");
        assert_eq!(styles.apply("nope", "hello"), "hello");
    }

    #[test]
    fn test_styles_apply_known_style() {
        let styles = Styles::new().add("bold", Style::new().bold());
        let result = styles.apply("bold", "hello");
        assert!(result.contains("\x1b[1m"));
        assert_eq!(styles.apply_plain("bold", "hello"), "hello");
    }

    #[test]
    fn test_theme_spec_uses_palette() {
        let theme = Theme::new().spec("alert", "red:white");
        let out = theme.styles().apply("alert", "x");
        assert!(out.contains("\x1b[31m"));
        assert!(out.contains("\x1b[47m"));
    }

    #[test]
    fn test_renderer_without_color() {
        let theme = Theme::new().spec("ok", "green");
        let mut renderer = Renderer::with_color(theme, false);
        renderer
            .add_template("msg", r#"{{ message | style("ok") }}"#)
            .unwrap();

        let out = renderer.render("msg", &json!({ "message": "hi" })).unwrap();
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_renderer_with_color() {
        let theme = Theme::new().spec("ok", "green");
        let mut renderer = Renderer::with_color(theme, true);
        renderer
            .add_template("msg", r#"{{ message | style("ok") }}"#)
            .unwrap();

        let out = renderer.render("msg", &json!({ "message": "hi" })).unwrap();
        assert!(out.contains("\x1b[32m"));
        assert!(out.contains("hi"));
    }

    #[test]
    fn test_renderer_loop() {
        let mut renderer = Renderer::with_color(Theme::new().spec("item", "teal"), false);
        renderer
            .add_template(
                "list",
                "{% for item in items %}{{ item | style(\"item\") }}\n{% endfor %}",
            )
            .unwrap();

        let out = renderer
            .render("list", &json!({ "items": ["one", "two"] }))
            .unwrap();
        assert_eq!(out, "one\ntwo\n");
    }

    #[test]
    fn test_renderer_unknown_template_error() {
        let renderer = Renderer::with_color(Theme::new(), false);
        assert!(renderer.render("missing", &json!({})).is_err());
    }

    #[test]
    fn test_template_syntax_error() {
        let mut renderer = Renderer::with_color(Theme::new(), false);
        assert!(renderer.add_template("bad", "{{ unclosed").is_err());
    }
}
