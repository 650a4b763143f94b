use minado_core::ClockToken;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crate::app::Msg;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background interval posting [`Msg::Tick`] into the event loop.
///
/// Dropping it cancels the interval. A tick already in flight may still
/// arrive; the session drops it since the clock is stopped or the token stale.
#[derive(Debug)]
pub struct Ticker {
    token: ClockToken,
    cancelled: Arc<AtomicBool>,
}

impl Ticker {
    pub fn spawn(token: ClockToken, period: Duration, tx: Sender<Msg>) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        thread::spawn(move || {
            loop {
                thread::sleep(period);
                if flag.load(Ordering::Acquire) || tx.send(Msg::Tick(token)).is_err() {
                    break;
                }
            }
            log::trace!("Ticker for epoch {} stopped", token.epoch());
        });
        log::debug!("Ticker for epoch {} started", token.epoch());
        Self { token, cancelled }
    }

    pub fn token(&self) -> ClockToken {
        self.token
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
    }
}
