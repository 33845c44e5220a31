use crate::args::{tokenize, Token};
use crate::params::{bind, ParameterMap, Value};

/// Everything known about one run: the raw arguments and what they parsed to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    script: String,
    command: Option<String>,
    raw_args: Vec<String>,
    params: ParameterMap,
}

impl InvocationContext {
    /// Parses the full argument list, program name first.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw_args: Vec<String> = args.into_iter().map(Into::into).collect();
        let script = raw_args.first().cloned().unwrap_or_default();

        let tokens = tokenize(raw_args.iter().skip(1));
        let command = match tokens.first() {
            Some(Token::Command(name)) => Some(name.clone()),
            _ => None,
        };
        let params = bind(tokens.get(1..).unwrap_or_default());

        Self {
            script,
            command,
            raw_args,
            params,
        }
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// The full argument list, program name included.
    pub fn raw_args(&self) -> &[String] {
        &self.raw_args
    }

    pub fn params(&self) -> &ParameterMap {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}
