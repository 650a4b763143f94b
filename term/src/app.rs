use minado_core::*;
use std::io::Write;
use std::sync::mpsc::{Receiver, Sender};

use crate::command::{Command, HELP};
use crate::render::render;
use crate::settings::Settings;
use crate::ticker::{TICK_PERIOD, Ticker};

#[derive(Debug)]
pub enum Msg {
    Line(String),
    Tick(ClockToken),
    InputClosed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal frontend: turns input lines into gestures, owns the ticker and
/// prints a fresh snapshot after every move.
pub struct App<W: Write> {
    session: Session,
    presses: PressTracker,
    ticker: Option<Ticker>,
    tx: Sender<Msg>,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(settings: &Settings, tx: Sender<Msg>, out: W) -> Self {
        let session = match settings.seed {
            Some(seed) => Session::seeded(settings.difficulty, seed),
            None => Session::new(settings.difficulty),
        };
        Self {
            session,
            presses: PressTracker::new(settings.gestures()),
            ticker: None,
            tx,
            out,
        }
    }

    pub fn run(&mut self, rx: Receiver<Msg>) -> anyhow::Result<()> {
        self.show()?;
        for msg in rx {
            if self.update(msg)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn update(&mut self, msg: Msg) -> anyhow::Result<Flow> {
        match msg {
            Msg::Tick(token) => {
                self.session.tick(token);
                Ok(Flow::Continue)
            }
            Msg::InputClosed => Ok(Flow::Quit),
            Msg::Line(line) => match Command::parse(&line) {
                Ok(None) => Ok(Flow::Continue),
                Ok(Some(command)) => self.apply(command),
                Err(problem) => {
                    writeln!(self.out, "{problem}")?;
                    Ok(Flow::Continue)
                }
            },
        }
    }

    fn apply(&mut self, command: Command) -> anyhow::Result<Flow> {
        log::debug!("Command: {:?}", command);
        let result = match command {
            Command::Open(coords) => self.session.handle(Gesture::Tap, coords).map(drop),
            Command::Flag(coords) => self.session.handle(Gesture::LongPress, coords).map(drop),
            Command::Hold(coords, held) => {
                let now = Instant::now();
                self.presses.press_at(coords, now);
                match self.presses.release_at(coords, now + held) {
                    Some(gesture) => self.session.handle(gesture, coords).map(drop),
                    None => Ok(()),
                }
            }
            Command::NewGame(difficulty) => {
                let difficulty = difficulty.unwrap_or(self.session.difficulty());
                self.presses.cancel();
                self.session.start_or_reset(difficulty);
                Ok(())
            }
            Command::Restart => {
                self.presses.cancel();
                self.session.restart();
                Ok(())
            }
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        if let Err(err) = result {
            writeln!(self.out, "{err}")?;
            return Ok(Flow::Continue);
        }
        self.dispatch_events()?;
        self.show()?;
        Ok(Flow::Continue)
    }

    fn dispatch_events(&mut self) -> anyhow::Result<()> {
        for event in self.session.drain_events() {
            match event {
                GameEvent::ClockStarted(token) => {
                    self.ticker = Some(Ticker::spawn(token, TICK_PERIOD, self.tx.clone()));
                }
                GameEvent::ClockStopped => {
                    if let Some(ticker) = self.ticker.take() {
                        log::debug!("Stopping ticker for epoch {}", ticker.token().epoch());
                    }
                }
                GameEvent::Detonated((row, col)) => {
                    writeln!(self.out, "Game over: you hit a mine at {row} {col}!")?;
                }
                GameEvent::Completed => {
                    writeln!(self.out, "Congratulations, you won the game!")?;
                }
            }
        }
        Ok(())
    }

    fn show(&mut self) -> anyhow::Result<()> {
        let snapshot = self.session.snapshot();
        write!(self.out, "{}", render(&snapshot))?;
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn has_ticker(&self) -> bool {
        self.ticker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn app() -> App<Vec<u8>> {
        let settings = Settings {
            seed: Some(17),
            ..Settings::default()
        };
        let (tx, _rx) = mpsc::channel();
        App::new(&settings, tx, Vec::new())
    }

    fn output(app: &mut App<Vec<u8>>) -> String {
        String::from_utf8(core::mem::take(&mut app.out)).unwrap()
    }

    fn line(app: &mut App<Vec<u8>>, text: &str) -> Flow {
        app.update(Msg::Line(text.to_owned())).unwrap()
    }

    #[test]
    fn flag_renders_without_starting_clock() {
        let mut app = app();

        assert_eq!(line(&mut app, "f 0 0"), Flow::Continue);

        assert!(output(&mut app).contains("[009]"));
        assert!(app.session.state().is_flagged((0, 0)));
        assert!(!app.has_ticker());
    }

    #[test]
    fn short_hold_opens_and_long_hold_flags() {
        let mut app = app();
        line(&mut app, "h 3 4 2.5");
        assert!(app.session.state().is_flagged((3, 4)));

        line(&mut app, "h 3 4 2");
        assert!(!app.session.state().is_flagged((3, 4)));

        line(&mut app, "h 3 4 0.2");
        assert!(app.session.state().is_revealed((3, 4)));
    }

    #[test]
    fn bad_input_is_reported_and_ignored() {
        let mut app = app();

        line(&mut app, "o 99 0");
        line(&mut app, "jump");

        let text = output(&mut app);
        assert!(text.contains("outside of a (8, 8) board"));
        assert!(text.contains("type ? for help"));
        assert_eq!(app.session.state().phase(), GamePhase::NotStarted);
    }

    #[test]
    fn new_game_switches_difficulty_and_drops_ticker() {
        let mut app = app();
        line(&mut app, "o 0 0");
        let running = app.session.state().is_clock_running();
        assert_eq!(app.has_ticker(), running);

        line(&mut app, "n medium");

        assert!(!app.has_ticker());
        assert_eq!(app.session.difficulty(), Difficulty::Medium);
        assert_eq!(app.session.snapshot().size, (12, 12));
    }

    #[test]
    fn quit_and_closed_input_stop_the_loop() {
        let mut app = app();

        assert_eq!(line(&mut app, "q"), Flow::Quit);
        assert_eq!(app.update(Msg::InputClosed).unwrap(), Flow::Quit);
    }
}
