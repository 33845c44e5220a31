//! # Command Registry
//!
//! Discovery turns an application's [`Handler`] records into the mapping from
//! command name to [`Command`] that the dispatcher consults. It runs once per
//! run; the registry is read-only afterwards.
//!
//! ## Naming convention
//!
//! A handler is eligible when its identifier starts with `command`, compared
//! case-insensitively. The rest of the identifier, with one leading `_`
//! trimmed and lower-cased, is the command name:
//!
//! ```text
//! command_team   -> team
//! commandColors  -> colors
//! command_default -> (fallback handler, not a command)
//! run_team       -> (ignored)
//! ```
//!
//! The built-in `help` command and the built-in fallback are registered
//! before the application's handlers, so an application can replace either.

use crate::builtin;
use crate::command::{Command, CommandDescriptor, DocLine, DocProvider, Handler, HandlerFn, Param};
use crate::error::{CliError, Result};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const HANDLER_PREFIX: &str = "command";
pub const DEFAULT_HANDLER: &str = "default";

/// Where a handler identifier lands during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovered {
    Command(String),
    Fallback,
}

/// Applies the naming convention to a handler identifier.
pub fn classify_ident(ident: &str) -> Option<Discovered> {
    let prefix = ident.get(..HANDLER_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(HANDLER_PREFIX) {
        return None;
    }
    let rest = &ident[HANDLER_PREFIX.len()..];
    let name = rest.strip_prefix('_').unwrap_or(rest).to_lowercase();
    match name.as_str() {
        "" => None,
        DEFAULT_HANDLER => Some(Discovered::Fallback),
        _ => Some(Discovered::Command(name)),
    }
}

pub struct Registry<A> {
    commands: BTreeMap<String, Command<A>>,
    fallback: Command<A>,
}

impl<A> Registry<A> {
    /// Builds the registry from the built-ins plus `handlers`, in order.
    pub fn discover<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = Handler<A>>,
    {
        let mut registry = Self {
            commands: BTreeMap::new(),
            fallback: Command::new(DEFAULT_HANDLER.to_string(), builtin_fallback()),
        };
        registry.register(builtin_help());
        for handler in handlers {
            registry.register(handler);
        }
        registry
    }

    fn register(&mut self, handler: Handler<A>) {
        match classify_ident(handler.ident()) {
            Some(Discovered::Command(name)) => {
                debug!(command = %name, ident = handler.ident(), "registering command");
                let command = Command::new(name.clone(), handler);
                if self.commands.insert(name.clone(), command).is_some() {
                    warn!(command = %name, "command registered twice; keeping the later handler");
                }
            }
            Some(Discovered::Fallback) => {
                debug!(ident = handler.ident(), "replacing fallback handler");
                self.fallback = Command::new(DEFAULT_HANDLER.to_string(), handler);
            }
            None => debug!(ident = handler.ident(), "ignoring handler outside naming convention"),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<&Command<A>> {
        self.commands
            .get(name)
            .ok_or_else(|| CliError::UnknownCommand(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn fallback(&self) -> &Command<A> {
        &self.fallback
    }

    /// Command names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command<A>> {
        self.commands.values()
    }

    pub fn descriptors(&self) -> Vec<&CommandDescriptor> {
        self.commands.values().map(Command::descriptor).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<A> DocProvider for Registry<A> {
    fn describe(&self, command: &str) -> Option<Vec<DocLine>> {
        let doc = &self.commands.get(command)?.descriptor().doc;
        if doc.is_empty() {
            None
        } else {
            Some(doc.lines())
        }
    }
}

fn builtin_help<A>() -> Handler<A> {
    Handler::new("command_help", builtin::help::<A> as HandlerFn<A>)
        .describe("Shows the documentation of a command")
        .example("help COMMAND")
        .param(Param::nullable("command").help("command to describe"))
}

fn builtin_fallback<A>() -> Handler<A> {
    Handler::new("command_default", builtin::list_commands::<A> as HandlerFn<A>)
        .param(Param::nullable("command"))
}
