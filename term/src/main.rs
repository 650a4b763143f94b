use clap::Parser;
use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

mod app;
mod cli;
mod command;
mod render;
mod settings;
mod ticker;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    let settings = settings::Settings::resolve(&args)?;
    log::debug!("Settings: {:?}", settings);

    let (tx, rx) = mpsc::channel();

    let input = tx.clone();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input.send(app::Msg::Line(line)).is_err() {
                return;
            }
        }
        let _ = input.send(app::Msg::InputClosed);
    });

    println!("{}", command::HELP);
    let mut app = app::App::new(&settings, tx, io::stdout());
    app.run(rx)
}
