//! # Tokenizer
//!
//! Classifies raw process arguments into [`Token`]s. The first argument after
//! the program name is always the command; every later argument is classified
//! on its own, without looking at its neighbours:
//!
//! | argument          | token                              |
//! |-------------------|------------------------------------|
//! | `--name=value`    | `FlagWithValue("name", "value")`   |
//! | `--name`          | `FlagOnly("name")`                 |
//! | `value`           | `BareValue("value")`               |
//!
//! `--name=value` only applies when `name` is made of `[a-z0-9_+-]`; anything
//! else that starts with a dash is a plain flag whose name is the argument with
//! its leading dashes stripped (so `--Name=x` is the flag `Name=x`, and `-`
//! is a flag with an empty name).
//! Pairing flags with the values that follow them is the binder's job, see
//! [`crate::params`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Command(String),
    FlagOnly(String),
    FlagWithValue(String, String),
    BareValue(String),
}

/// Tokenizes the arguments that follow the program name.
pub fn tokenize<I, S>(args: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    let mut tokens = Vec::new();
    if let Some(command) = args.next() {
        tokens.push(Token::Command(command.as_ref().to_string()));
    }
    tokens.extend(args.map(|arg| classify(arg.as_ref())));
    tokens
}

/// Classifies a single non-command argument.
pub fn classify(arg: &str) -> Token {
    if !arg.starts_with('-') {
        return Token::BareValue(arg.to_string());
    }
    if let Some((key, value)) = split_assignment(arg) {
        return Token::FlagWithValue(key.to_string(), value.to_string());
    }
    Token::FlagOnly(arg.trim_start_matches('-').to_string())
}

/// Matches `-+name=value`. The leading dash run is as long as possible but
/// always leaves at least one character for the name, so `--=x` names `-`.
fn split_assignment(arg: &str) -> Option<(&str, &str)> {
    let (head, value) = arg.split_once('=')?;
    if head.len() < 2 || !is_param_name(head) {
        return None;
    }
    let name = match head.trim_start_matches('-') {
        "" => &head[head.len() - 1..],
        name => name,
    };
    Some((name, value))
}

fn is_param_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '+')
        })
}
