//! # Dispatcher
//!
//! Routes one invocation to a handler:
//!
//! - no command, or a name the registry does not know: the fallback handler
//!   runs with the requested name (if any) as its first argument;
//! - a known command: its formal parameters are bound from the parsed
//!   parameters and defaults. When a required parameter has no value the
//!   handler is not called and the problem is reported on the output.
//!
//! Handler faults are returned unchanged as [`CliError::Handler`].

use crate::config::Config;
use crate::context::InvocationContext;
use crate::error::{CliError, Result};
use crate::registry::Registry;
use crate::session::Session;
use crate::term::Terminal;
use std::io::Write;
use tracing::{debug, info, warn};

/// How an invocation was routed.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command's handler ran to completion.
    Completed { command: String },
    /// No command was given or it was not recognized.
    Fallback { requested: Option<String> },
    /// The handler was not called.
    MissingParameter { command: String, parameter: String },
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }
}

pub struct Dispatcher<A> {
    registry: Registry<A>,
    config: Config,
    terminal: Terminal,
}

impl<A> Dispatcher<A> {
    pub fn new(registry: Registry<A>, config: Config, terminal: Terminal) -> Self {
        Self {
            registry,
            config,
            terminal,
        }
    }

    pub fn registry(&self) -> &Registry<A> {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// A session over this dispatcher's state, for lifecycle hooks that run
    /// outside of a command.
    pub fn session<'a>(
        &'a self,
        context: &'a InvocationContext,
        out: &'a mut dyn Write,
    ) -> Session<'a, A> {
        Session::new(context, &self.registry, &self.config, &self.terminal, out)
    }

    pub fn dispatch(
        &self,
        app: &mut A,
        context: &InvocationContext,
        out: &mut dyn Write,
    ) -> Result<Outcome> {
        let mut session = self.session(context, out);

        let Some(name) = context.command() else {
            info!("no command given");
            session.fall_back(app, None)?;
            return Ok(Outcome::Fallback { requested: None });
        };

        let command = match self.registry.lookup(name) {
            Ok(command) => command,
            Err(CliError::UnknownCommand(_)) => {
                info!(command = %name, "unrecognized command");
                session.fall_back(app, Some(name))?;
                return Ok(Outcome::Fallback {
                    requested: Some(name.to_string()),
                });
            }
            Err(err) => return Err(err),
        };

        let args = match command.bind(context.params()) {
            Ok(args) => args,
            Err(err) => {
                let CliError::MissingParameter { command, parameter } = &err else {
                    return Err(err);
                };
                warn!(command = %command, parameter = %parameter, "required parameter missing");
                session.write_line(&err)?;
                return Ok(Outcome::MissingParameter {
                    command: command.clone(),
                    parameter: parameter.clone(),
                });
            }
        };

        debug!(command = %name, arguments = args.len(), "invoking handler");
        command.invoke(app, &mut session, &args)?;
        Ok(Outcome::Completed {
            command: name.to_string(),
        })
    }
}
