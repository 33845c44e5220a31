//! Named styles used by the built-in output templates.
//!
//! Templates refer to styles by what the text *is* (`title`, `error`,
//! `example`), never by color. The colors themselves come from the `tinge`
//! palette, so the same names used by handlers in color specs (`lime`,
//! `yellow`) look the same here.

use console::Style;
use once_cell::sync::Lazy;
use tinge::Theme;

pub static SPACECLI_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .spec("title", "lime")
        .spec("error", "red")
        .spec("example_label", "yellow")
        .spec("example", "green")
        .spec("param", "aqua")
        .add("heading", Style::new().bold())
});
