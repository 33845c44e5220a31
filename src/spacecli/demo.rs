//! Test & demo application shipped as the `spacecli` binary.

use anyhow::Context;
use spacecli::{Application, Arguments, Handler, HandlerFn, Param, Session, Terminal, Value};
use std::thread;
use std::time::Duration;
use tinge::{BACKGROUNDS, FOREGROUNDS};

const DEFAULT_TEAM: &str = "Boheminas Praha 1905";
const PROGRESS_WIDTH: usize = 40;

#[derive(Debug, Default)]
pub struct DemoApp;

impl DemoApp {
    fn command_colors(&mut self, session: &mut Session<'_, Self>, _: &Arguments) -> anyhow::Result<()> {
        for fg in FOREGROUNDS {
            for bg in BACKGROUNDS {
                let spec = format!("{}:{}", fg.name, bg.name);
                let painted = session.style(&spec, &spec);
                session.write_line(painted)?;
            }
        }
        Ok(())
    }

    fn command_progress(&mut self, session: &mut Session<'_, Self>, args: &Arguments) -> anyhow::Result<()> {
        let steps = whole_number(args, "steps")?;
        let delay = Duration::from_millis(whole_number(args, "delay")?);

        session.write_line("Progress bar test:")?;
        let label = session.style("yellow", "Testing:");
        for step in 0..=steps {
            thread::sleep(delay);
            session.progress(&label, step, steps)?;
        }
        Ok(())
    }

    fn command_team(&mut self, session: &mut Session<'_, Self>, args: &Arguments) -> anyhow::Result<()> {
        let team = args
            .get("team")
            .map(Value::to_string)
            .unwrap_or_else(|| DEFAULT_TEAM.to_string());
        let color = args.text("color").unwrap_or("white:green");
        let suffix = if args.is_set("best") { " is the best!" } else { "" };

        let line = format!("{}{}", session.style(color, &team), suffix);
        session.write_line(line)?;
        Ok(())
    }

    fn command_config(&mut self, session: &mut Session<'_, Self>, _: &Arguments) -> anyhow::Result<()> {
        let config = session.config();
        if config.is_empty() {
            session.write_line("No configuration loaded.")?;
            return Ok(());
        }
        for (name, section) in config.sections() {
            session.write_line(format!("[{}]", name))?;
            for (key, value) in section {
                session.write_line(format!("{} = {}", key, value))?;
            }
        }
        Ok(())
    }
}

fn whole_number(args: &Arguments, name: &str) -> anyhow::Result<u64> {
    let raw = args.get(name).map(Value::to_string).unwrap_or_default();
    raw.parse()
        .with_context(|| format!("--{} expects a whole number, got \"{}\"", name, raw))
}

impl Application for DemoApp {
    fn title(&self, terminal: &Terminal) -> String {
        format!(
            "{}\nTest & demo for SpaceCLI",
            terminal.style("lime", "SpaceCLI TEST")
        )
    }

    fn progress_width(&self) -> usize {
        PROGRESS_WIDTH
    }

    fn handlers(&self) -> Vec<Handler<Self>> {
        vec![
            Handler::new("commandColors", DemoApp::command_colors as HandlerFn<Self>)
                .describe("Paints every foreground on every background"),
            Handler::new("commandProgress", DemoApp::command_progress as HandlerFn<Self>)
                .describe("Progress bar demo")
                .example("spacecli progress --steps=5 --delay=200")
                .param(Param::optional("steps", "17").help("number of steps"))
                .param(Param::optional("delay", "1000").help("milliseconds between steps")),
            Handler::new("commandTeam", DemoApp::command_team as HandlerFn<Self>)
                .describe("Writes football team name in color; says whether named one is the best")
                .example("spacecli team --team \"Bohemians 1905\" --color=white:green --best")
                .param(Param::optional("team", DEFAULT_TEAM).help("team name"))
                .param(Param::optional("color", "white:green").help("fg[:bg] color spec"))
                .param(Param::nullable("best").help("praise the team")),
            Handler::new("command_config", DemoApp::command_config as HandlerFn<Self>)
                .describe("Shows the loaded configuration"),
        ]
    }
}
