//! # SpaceCLI Architecture
//!
//! SpaceCLI is a **small framework for sub-command CLIs**. An application is a
//! value implementing [`Application`] that lists its handlers; the framework
//! turns raw process arguments into a command name plus named parameters and
//! calls the matching handler with its arguments bound by name.
//!
//! ```text
//! raw args ──► args::tokenize ──► params::bind ──► dispatch::Dispatcher ──► handler
//!                                                        │
//!                                               registry::Registry
//! ```
//!
//! ## The Grammar
//!
//! ```text
//! <program> <command> [--name=value | --name value | --flag]...
//! ```
//!
//! The first argument is always the command. `--name=value` sets a value,
//! `--name value` binds the next bare argument to the flag before it, and a
//! flag followed by another flag (or by nothing) is boolean true. See
//! [`args`] and [`params`] for the exact rules.
//!
//! ## Commands by Convention
//!
//! Handlers are registered with identifiers following the `command_<name>`
//! convention; `command_default` replaces the fallback that runs for a
//! missing or unknown command. Every application gets `help` for free:
//!
//! ```rust,ignore
//! impl Application for Demo {
//!     fn handlers(&self) -> Vec<Handler<Self>> {
//!         vec![Handler::new("command_team", Demo::command_team)
//!             .describe("Writes football team name in color")
//!             .param(Param::optional("team", "Boheminas Praha 1905"))
//!             .param(Param::nullable("best"))]
//!     }
//! }
//! ```
//!
//! ## Key Principle: Output Is a Stream
//!
//! Nothing below `main.rs` prints directly or exits the process. Handlers
//! write through their [`Session`], which wraps whatever `Write` the caller
//! passed to [`run`]; diagnostics go through `tracing` to stderr. Unknown
//! commands and missing parameters are ordinary [`Outcome`]s, not errors.
//!
//! ## Module Overview
//!
//! - [`args`]: Tokenizer
//! - [`params`]: Parameter binder and parameter values
//! - [`context`]: One parsed invocation
//! - [`command`]: Handler records, formal parameters, binding
//! - [`registry`]: Command discovery by naming convention
//! - [`dispatch`]: Routing, fallback and missing-parameter reporting
//! - [`session`]: What handlers see of the running application
//! - [`config`]: Configuration sections from a TOML file
//! - [`term`]: Color choice, progress bar and output templates
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod args;
mod builtin;
pub mod command;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod params;
pub mod registry;
pub mod session;
mod styles;
mod templates;
pub mod term;

pub use command::{Arguments, Handler, HandlerFn, Param};
pub use config::{Config, ConfigProvider, TomlConfig};
pub use context::InvocationContext;
pub use dispatch::{Dispatcher, Outcome};
pub use error::{CliError, Result};
pub use params::Value;
pub use registry::Registry;
pub use session::Session;
pub use term::{ColorChoice, Terminal};

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;

/// Library version, with the git hash appended on development builds.
pub fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

/// A command-line application built on SpaceCLI.
pub trait Application: Sized {
    /// Registration records for the application's commands.
    fn handlers(&self) -> Vec<Handler<Self>>;

    /// Banner printed before anything else.
    fn title(&self, terminal: &Terminal) -> String {
        terminal.style("lime", &format!(" SpaceCLI {} ", version()))
    }

    fn progress_width(&self) -> usize {
        tinge::progress::DEFAULT_WIDTH
    }

    fn config_path(&self, script: &str) -> PathBuf {
        config::config_path(script)
    }

    fn load_config(&self, path: &Path) -> Result<Option<Config>> {
        TomlConfig.load(path)
    }

    /// Runs after parsing, before the command.
    fn setup(&mut self, _session: &mut Session<'_, Self>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs after the command, unless dispatch failed.
    fn teardown(&mut self, _session: &mut Session<'_, Self>) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Runs one invocation of `app`, honoring `SPACECLI_COLOR`.
///
/// `args` is the full argument list, program name first.
pub fn run<A, I, S>(app: &mut A, args: I, out: &mut dyn Write) -> Result<Outcome>
where
    A: Application,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run_with(app, args, out, ColorChoice::from_env())
}

pub fn run_with<A, I, S>(app: &mut A, args: I, out: &mut dyn Write, color: ColorChoice) -> Result<Outcome>
where
    A: Application,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let terminal = Terminal::new(color.use_color(), app.progress_width())?;
    writeln!(out, "{}", app.title(&terminal))?;

    let registry = Registry::discover(app.handlers());
    let context = InvocationContext::parse(args);

    let config_path = app.config_path(context.script());
    let config = app.load_config(&config_path)?.unwrap_or_default();

    let dispatcher = Dispatcher::new(registry, config, terminal);
    app.setup(&mut dispatcher.session(&context, out))
        .map_err(CliError::Handler)?;
    let outcome = dispatcher.dispatch(app, &context, out)?;
    app.teardown(&mut dispatcher.session(&context, out))
        .map_err(CliError::Handler)?;

    info!(outcome = ?outcome, "run finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Lifecycle {
        events: Vec<String>,
    }

    impl Lifecycle {
        fn command_echo(&mut self, session: &mut Session<'_, Self>, args: &Arguments) -> anyhow::Result<()> {
            self.events.push("echo".into());
            session.write_line(args.text("text").unwrap_or("-"))?;
            Ok(())
        }
    }

    impl Application for Lifecycle {
        fn handlers(&self) -> Vec<Handler<Self>> {
            vec![Handler::new("command_echo", Lifecycle::command_echo as HandlerFn<Self>)
                .param(Param::optional("text", "hi"))]
        }

        fn title(&self, _: &Terminal) -> String {
            "Lifecycle".into()
        }

        fn config_path(&self, _: &str) -> PathBuf {
            PathBuf::from("/nonexistent/lifecycle.toml")
        }

        fn setup(&mut self, session: &mut Session<'_, Self>) -> anyhow::Result<()> {
            self.events.push(format!("setup {}", session.command().unwrap_or("")));
            Ok(())
        }

        fn teardown(&mut self, _: &mut Session<'_, Self>) -> anyhow::Result<()> {
            self.events.push("teardown".into());
            Ok(())
        }
    }

    fn run_plain(app: &mut Lifecycle, args: &[&str]) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run_with(app, args.iter().copied(), &mut out, ColorChoice::Never).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lifecycle_order() {
        let mut app = Lifecycle::default();
        let (outcome, output) = run_plain(&mut app, &["demo", "echo", "--text", "hello"]);

        assert!(outcome.is_completed());
        assert_eq!(output, "Lifecycle\nhello\n");
        assert_eq!(app.events, ["setup echo", "echo", "teardown"]);
    }

    #[test]
    fn hooks_run_around_fallback() {
        let mut app = Lifecycle::default();
        let (outcome, output) = run_plain(&mut app, &["demo", "nope"]);

        assert_eq!(
            outcome,
            Outcome::Fallback {
                requested: Some("nope".into())
            }
        );
        assert!(output.contains(" * echo\n"));
        assert_eq!(app.events, ["setup nope", "teardown"]);
    }

    #[test]
    fn version_starts_with_package_version() {
        assert!(version().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
