//! # Commands
//!
//! A command is a handler function plus the metadata the dispatcher needs to
//! call it: its formal parameters (name, default, help text) and the
//! documentation shown by `help`. Applications describe their commands with
//! [`Handler`] records; discovery (see [`crate::registry`]) turns those into
//! [`Command`]s.
//!
//! ```rust,ignore
//! Handler::new("command_team", DemoApp::command_team)
//!     .describe("Writes football team name in color")
//!     .example("demo team --team \"Bohemians 1905\" --best")
//!     .param(Param::optional("team", "Boheminas Praha 1905"))
//!     .param(Param::nullable("best"))
//! ```

use crate::error::{CliError, Result};
use crate::params::{ParameterMap, Value};
use crate::session::Session;

/// Signature shared by every handler, the fallback included.
pub type HandlerFn<A> = fn(&mut A, &mut Session<'_, A>, &Arguments) -> anyhow::Result<()>;

/// What a formal parameter falls back to when no value was passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamDefault {
    /// No default: the command cannot run without a value.
    Required,
    /// Optional, bound as absent.
    Absent,
    Value(Value),
}

/// A formal parameter of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub default: ParamDefault,
    pub help: Option<String>,
}

impl Param {
    pub fn required(name: impl Into<String>) -> Self {
        Self::with_default(name, ParamDefault::Required)
    }

    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self::with_default(name, ParamDefault::Value(default.into()))
    }

    /// Optional with no default value; bound as absent when not given.
    pub fn nullable(name: impl Into<String>) -> Self {
        Self::with_default(name, ParamDefault::Absent)
    }

    fn with_default(name: impl Into<String>, default: ParamDefault) -> Self {
        Self {
            name: name.into(),
            default,
            help: None,
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_required(&self) -> bool {
        matches!(self.default, ParamDefault::Required)
    }

    pub fn has_default(&self) -> bool {
        !self.is_required()
    }

    pub fn default_value(&self) -> Option<&Value> {
        match &self.default {
            ParamDefault::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// Human documentation attached to a command at registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandDoc {
    pub description: Vec<String>,
    pub examples: Vec<String>,
}

impl CommandDoc {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.examples.is_empty()
    }

    /// Documentation as ordered lines: descriptions first, then examples.
    pub fn lines(&self) -> Vec<DocLine> {
        self.description
            .iter()
            .cloned()
            .map(DocLine::Description)
            .chain(self.examples.iter().cloned().map(DocLine::Example))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocLine {
    Description(String),
    Example(String),
}

/// Source of per-command documentation for `help`.
pub trait DocProvider {
    /// Documentation lines for a command, or `None` when there are none.
    fn describe(&self, command: &str) -> Option<Vec<DocLine>>;
}

/// Name, formal parameters and documentation of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: String,
    pub parameters: Vec<Param>,
    pub doc: CommandDoc,
}

/// Values bound to a command's formal parameters, in declaration order.
/// `None` marks a parameter bound as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: Vec<(String, Option<Value>)>,
}

impl Arguments {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Text value of a parameter; `None` when absent or given as a bare switch.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    /// True when the parameter is bound to any value.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_ref()))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Value>)> for Arguments {
    fn from_iter<T: IntoIterator<Item = (K, Option<Value>)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }
}

/// Registration record: an identifier, the handler and its metadata.
///
/// The identifier decides the command name during discovery: `command_team`
/// and `commandTeam` both register `team`, `command_default` replaces the
/// fallback handler.
pub struct Handler<A> {
    pub(crate) ident: String,
    pub(crate) func: HandlerFn<A>,
    pub(crate) params: Vec<Param>,
    pub(crate) doc: CommandDoc,
}

impl<A> Handler<A> {
    pub fn new(ident: impl Into<String>, func: HandlerFn<A>) -> Self {
        Self {
            ident: ident.into(),
            func,
            params: Vec::new(),
            doc: CommandDoc::default(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn describe(mut self, line: impl Into<String>) -> Self {
        self.doc.description.push(line.into());
        self
    }

    pub fn example(mut self, line: impl Into<String>) -> Self {
        self.doc.examples.push(line.into());
        self
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }
}

/// A discovered command, ready to be dispatched.
pub struct Command<A> {
    descriptor: CommandDescriptor,
    handler: HandlerFn<A>,
}

impl<A> Command<A> {
    pub(crate) fn new(name: String, handler: Handler<A>) -> Self {
        Self {
            descriptor: CommandDescriptor {
                name,
                parameters: handler.params,
                doc: handler.doc,
            },
            handler: handler.func,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    /// Resolves every formal parameter from `params`, else from its default.
    ///
    /// Stops at the first required parameter without a value.
    pub fn bind(&self, params: &ParameterMap) -> Result<Arguments> {
        let mut values = Vec::with_capacity(self.descriptor.parameters.len());
        for param in &self.descriptor.parameters {
            let value = match (params.get(&param.name), &param.default) {
                (Some(value), _) => Some(value.clone()),
                (None, ParamDefault::Value(value)) => Some(value.clone()),
                (None, ParamDefault::Absent) => None,
                (None, ParamDefault::Required) => {
                    return Err(CliError::MissingParameter {
                        command: self.descriptor.name.clone(),
                        parameter: param.name.clone(),
                    })
                }
            };
            values.push((param.name.clone(), value));
        }
        Ok(Arguments { values })
    }

    /// Binds for the fallback handler: the first formal parameter receives the
    /// requested command name, the rest bind leniently and never fail.
    pub fn bind_fallback(&self, params: &ParameterMap, requested: Option<&str>) -> Arguments {
        let mut parameters = self.descriptor.parameters.iter();
        let first = parameters
            .next()
            .map(|p| (p.name.clone(), requested.map(Value::from)));
        let rest = parameters.map(|p| {
            let value = params.get(&p.name).or_else(|| p.default_value()).cloned();
            (p.name.clone(), value)
        });
        first.into_iter().chain(rest).collect()
    }

    pub fn invoke(&self, app: &mut A, session: &mut Session<'_, A>, args: &Arguments) -> Result<()> {
        (self.handler)(app, session, args).map_err(CliError::Handler)
    }
}
