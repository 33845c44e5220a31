use spacecli::Result;
use std::io;
use tracing::debug;

mod demo;
use demo::DemoApp;

fn main() {
    spacecli::logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut app = DemoApp;
    let outcome = spacecli::run(&mut app, args, &mut out)?;
    debug!(outcome = ?outcome, "done");
    Ok(())
}
