//! Named terminal colors and `fg:bg` color specs.
//!
//! The palettes are fixed, read-only tables: sixteen foregrounds (eight base
//! colors, each with a bright variant rendered bold) and eight backgrounds.
//! A color spec names a foreground and, optionally, a background separated by
//! a colon, e.g. `"white:green"`.

use console::{Color, Style};

/// One named entry of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub color: Color,
    /// Bright foregrounds are emitted as bold + base color.
    pub bright: bool,
}

const fn swatch(name: &'static str, color: Color, bright: bool) -> Swatch {
    Swatch {
        name,
        color,
        bright,
    }
}

/// Foreground colors, in display order.
pub static FOREGROUNDS: &[Swatch] = &[
    swatch("black", Color::Black, false),
    swatch("gray", Color::Black, true),
    swatch("silver", Color::White, false),
    swatch("white", Color::White, true),
    swatch("navy", Color::Blue, false),
    swatch("blue", Color::Blue, true),
    swatch("green", Color::Green, false),
    swatch("lime", Color::Green, true),
    swatch("teal", Color::Cyan, false),
    swatch("aqua", Color::Cyan, true),
    swatch("maroon", Color::Red, false),
    swatch("red", Color::Red, true),
    swatch("purple", Color::Magenta, false),
    swatch("fuchsia", Color::Magenta, true),
    swatch("olive", Color::Yellow, false),
    swatch("yellow", Color::Yellow, true),
];

/// Background colors, in display order.
pub static BACKGROUNDS: &[Swatch] = &[
    swatch("black", Color::Black, false),
    swatch("red", Color::Red, false),
    swatch("green", Color::Green, false),
    swatch("yellow", Color::Yellow, false),
    swatch("blue", Color::Blue, false),
    swatch("purple", Color::Magenta, false),
    swatch("cyan", Color::Cyan, false),
    swatch("white", Color::White, false),
];

/// Looks up a foreground by name.
pub fn foreground(name: &str) -> Option<&'static Swatch> {
    FOREGROUNDS.iter().find(|s| s.name == name)
}

/// Looks up a background by name.
pub fn background(name: &str) -> Option<&'static Swatch> {
    BACKGROUNDS.iter().find(|s| s.name == name)
}

/// A parsed `fg[:bg]` color spec.
///
/// Unknown names resolve to `None`: an unknown foreground leaves the text
/// unstyled (the background still applies), an unknown background is ignored.
/// A background is only read when the spec has exactly two parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSpec {
    pub foreground: Option<&'static Swatch>,
    pub background: Option<&'static Swatch>,
}

impl ColorSpec {
    pub fn parse(spec: &str) -> Self {
        let parts: Vec<&str> = spec.split(':').collect();
        let background = match parts.as_slice() {
            [_, bg] => background(bg),
            _ => None,
        };
        Self {
            foreground: parts.first().and_then(|fg| foreground(fg)),
            background,
        }
    }

    /// Builds the `console::Style` for this spec.
    pub fn style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.foreground {
            style = style.fg(fg.color);
            if fg.bright {
                style = style.bold();
            }
        }
        if let Some(bg) = self.background {
            style = style.bg(bg.color);
        }
        style
    }
}

/// Paints `text` with a color spec.
///
/// With `use_color` off the text is returned untouched.
pub fn paint(spec: &str, text: &str, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    ColorSpec::parse(spec)
        .style()
        .force_styling(true)
        .apply_to(text)
        .to_string()
}
