//! What a handler sees of the running application besides its bound
//! [`Arguments`](crate::command::Arguments): the invocation, the loaded
//! configuration, the registry and the output stream.

use crate::config::Config;
use crate::context::InvocationContext;
use crate::error::Result;
use crate::params::{ParameterMap, Value};
use crate::registry::Registry;
use crate::term::Terminal;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};
use tracing::debug;

pub struct Session<'a, A> {
    context: &'a InvocationContext,
    registry: &'a Registry<A>,
    config: &'a Config,
    terminal: &'a Terminal,
    out: &'a mut dyn Write,
}

impl<'a, A> Session<'a, A> {
    pub(crate) fn new(
        context: &'a InvocationContext,
        registry: &'a Registry<A>,
        config: &'a Config,
        terminal: &'a Terminal,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            context,
            registry,
            config,
            terminal,
            out,
        }
    }

    pub fn script(&self) -> &'a str {
        self.context.script()
    }

    pub fn command(&self) -> Option<&'a str> {
        self.context.command()
    }

    pub fn raw_args(&self) -> &'a [String] {
        self.context.raw_args()
    }

    pub fn params(&self) -> &'a ParameterMap {
        self.context.params()
    }

    /// Looks up a parsed parameter by name, declared by the handler or not.
    pub fn param(&self, name: &str) -> Option<&'a Value> {
        self.context.param(name)
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    pub fn registry(&self) -> &'a Registry<A> {
        self.registry
    }

    pub fn terminal(&self) -> &'a Terminal {
        self.terminal
    }

    pub fn use_color(&self) -> bool {
        self.terminal.use_color()
    }

    /// Paints `text` with a `fg[:bg]` color spec.
    pub fn style(&self, spec: &str, text: &str) -> String {
        self.terminal.style(spec, text)
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    pub fn write_line(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Draws one frame of the progress bar. The line ends with `\r` until
    /// `current` reaches `total`.
    pub fn progress(&mut self, label: &str, current: u64, total: u64) -> io::Result<()> {
        self.terminal
            .draw_progress(&mut *self.out, label, current, total)
    }

    pub(crate) fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.terminal.render(template, data)
    }

    /// Hands the invocation to the fallback handler, as if `requested` had
    /// not been found.
    pub fn fall_back(&mut self, app: &mut A, requested: Option<&str>) -> Result<()> {
        debug!(requested = ?requested, "running fallback handler");
        let registry = self.registry;
        let fallback = registry.fallback();
        let args = fallback.bind_fallback(self.context.params(), requested);
        fallback.invoke(app, self, &args)
    }
}
