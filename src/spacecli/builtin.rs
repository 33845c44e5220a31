//! The handlers every application gets for free: `help` and the fallback
//! that lists the available commands.

use crate::command::{Arguments, CommandDescriptor, DocLine, DocProvider, Param, ParamDefault};
use crate::session::Session;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Serialize)]
struct HelpPage {
    name: String,
    documented: bool,
    description: Vec<String>,
    examples: Vec<String>,
    parameters: Vec<ParamRow>,
}

#[derive(Debug, Serialize)]
struct ParamRow {
    flag: String,
    padding: String,
    summary: String,
}

#[derive(Debug, Serialize)]
struct CommandListing<'a> {
    unrecognized: Option<&'a str>,
    commands: Vec<&'a str>,
}

/// `help [COMMAND]`
pub(crate) fn help<A>(app: &mut A, session: &mut Session<'_, A>, args: &Arguments) -> anyhow::Result<()> {
    let Some(target) = help_target(session, args) else {
        let hint = format!("Type {} help COMMAND", session.script());
        session.write_line(hint)?;
        session.fall_back(app, None)?;
        return Ok(());
    };

    let registry = session.registry();
    let Ok(command) = registry.lookup(&target) else {
        session.fall_back(app, Some(&target))?;
        return Ok(());
    };

    let page = help_page(registry, command.descriptor());
    let text = session.render("help", &page)?;
    session.write(&text)?;
    Ok(())
}

/// Default fallback: the unrecognized command, if any, then every command.
pub(crate) fn list_commands<A>(
    _app: &mut A,
    session: &mut Session<'_, A>,
    args: &Arguments,
) -> anyhow::Result<()> {
    let listing = CommandListing {
        unrecognized: args.text("command"),
        commands: session.registry().names().collect(),
    };
    let text = session.render("commands", &listing)?;
    session.write(&text)?;
    Ok(())
}

/// The `command` parameter when given, else the raw argument right after
/// `help`, taken as is: `help --verbose` asks for a command named `--verbose`.
fn help_target<A>(session: &Session<'_, A>, args: &Arguments) -> Option<String> {
    if let Some(target) = args.text("command") {
        return Some(target.to_string());
    }
    session.raw_args().get(2).cloned()
}

fn help_page(docs: &dyn DocProvider, descriptor: &CommandDescriptor) -> HelpPage {
    let lines = docs.describe(&descriptor.name);
    let mut description = Vec::new();
    let mut examples = Vec::new();
    for line in lines.iter().flatten() {
        match line {
            DocLine::Description(text) => description.push(text.clone()),
            DocLine::Example(text) => examples.push(text.clone()),
        }
    }

    HelpPage {
        name: descriptor.name.clone(),
        documented: lines.is_some(),
        description,
        examples,
        parameters: param_rows(&descriptor.parameters),
    }
}

fn param_rows(params: &[Param]) -> Vec<ParamRow> {
    let flags: Vec<String> = params.iter().map(|p| format!("--{}", p.name)).collect();
    let column = flags.iter().map(|f| f.width()).max().unwrap_or(0) + 2;

    params
        .iter()
        .zip(flags)
        .map(|(param, flag)| ParamRow {
            padding: " ".repeat(column - flag.width()),
            flag,
            summary: param_summary(param),
        })
        .collect()
}

fn param_summary(param: &Param) -> String {
    let status = match &param.default {
        ParamDefault::Required => "required".to_string(),
        ParamDefault::Absent => "optional".to_string(),
        ParamDefault::Value(value) => format!("default: \"{}\"", value),
    };
    match &param.help {
        Some(help) => format!("{} ({})", help, status),
        None => format!("({})", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandDoc;

    struct NoDocs;

    impl DocProvider for NoDocs {
        fn describe(&self, _: &str) -> Option<Vec<DocLine>> {
            None
        }
    }

    fn descriptor() -> CommandDescriptor {
        CommandDescriptor {
            name: "team".into(),
            parameters: vec![
                Param::optional("team", "Boheminas Praha 1905").help("team name"),
                Param::required("color"),
                Param::nullable("best"),
            ],
            doc: CommandDoc::default(),
        }
    }

    #[test]
    fn summaries_describe_defaults() {
        let rows = param_rows(&descriptor().parameters);
        let summaries: Vec<_> = rows.iter().map(|r| r.summary.as_str()).collect();
        assert_eq!(
            summaries,
            [
                "team name (default: \"Boheminas Praha 1905\")",
                "(required)",
                "(optional)"
            ]
        );
    }

    #[test]
    fn flags_are_aligned() {
        let rows = param_rows(&descriptor().parameters);
        let widths: Vec<_> = rows
            .iter()
            .map(|r| r.flag.width() + r.padding.len())
            .collect();
        assert_eq!(widths, [9, 9, 9]);
    }

    #[test]
    fn undocumented_page() {
        let page = help_page(&NoDocs, &descriptor());
        assert!(!page.documented);
        assert!(page.description.is_empty());
        assert_eq!(page.parameters.len(), 3);
    }
}
