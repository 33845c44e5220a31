//! Output templates for the built-in commands.
//!
//! Templates live in `templates/` as standalone files and are included here as
//! string constants. Line breaks are explicit: every emitted line ends inside
//! the template with its own newline, and the file's final newline is dropped
//! by minijinja.

pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
pub const COMMANDS_TEMPLATE: &str = include_str!("templates/commands.tmp");
