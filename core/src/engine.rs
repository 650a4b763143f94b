use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - NotStarted -> Won
/// - NotStarted -> Lost
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board generated, nothing opened yet
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// No further moves are accepted once this holds.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of opening a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    /// Safe open, with the number of newly revealed cells
    Revealed(CellCount),
    Detonated,
    Completed,
}

impl OpenOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Notifications for the presentation layer, in the order they happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Schedule a once-per-second tick carrying this token.
    ClockStarted(ClockToken),
    /// Cancel the scheduled tick.
    ClockStopped,
    Detonated(Coord2),
    Completed,
}

/// Authoritative state of one game: static board, opened and flagged cells,
/// phase and clock. Replaced as a whole on reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    revealed: RevealedSet,
    flagged: FlaggedSet,
    phase: GamePhase,
    clock: GameClock,
    detonated: Option<Coord2>,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self::with_epoch(board, 0)
    }

    pub(crate) fn with_epoch(board: Board, epoch: u64) -> Self {
        let size = board.size();
        Self {
            board,
            revealed: RevealedSet::new(size),
            flagged: FlaggedSet::new(size),
            phase: GamePhase::default(),
            clock: GameClock::new(epoch),
            detonated: None,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mines minus flags; goes negative when over-flagged.
    pub fn remaining_mines(&self) -> i32 {
        i32::from(self.board.mine_count()) - i32::from(self.flagged.len())
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.clock.elapsed_secs()
    }

    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn clock_token(&self) -> ClockToken {
        self.clock.token()
    }

    pub fn revealed(&self) -> &RevealedSet {
        &self.revealed
    }

    pub fn flagged(&self) -> &FlaggedSet {
        &self.flagged
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed.contains(coords)
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flagged.contains(coords)
    }

    pub fn detonated(&self) -> Option<Coord2> {
        self.detonated
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.view_at(coords))
    }

    /// Takes the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn open_cell(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        let coords = self.guard(coords)?;

        if self.phase.is_finished() || self.is_revealed(coords) || self.is_flagged(coords) {
            log::trace!("Open at {:?} ignored", coords);
            return Ok(OpenOutcome::NoChange);
        }

        let clock_was_running = self.clock.is_running();
        self.mark_started();

        let next = reveal(&self.board, &self.revealed, coords);
        let opened = next.len() - self.revealed.len();
        self.revealed = next;

        let outcome = if self.board.contains_mine(coords) {
            self.detonated = Some(coords);
            self.end_game(GamePhase::Lost);
            OpenOutcome::Detonated
        } else {
            // flags reached by the fill stay set and keep counting against the mines
            if self.is_cleared() {
                self.end_game(GamePhase::Won);
                OpenOutcome::Completed
            } else {
                OpenOutcome::Revealed(opened)
            }
        };

        self.queue_clock_change(clock_was_running);
        match outcome {
            OpenOutcome::Detonated => self.events.push(GameEvent::Detonated(coords)),
            OpenOutcome::Completed => self.events.push(GameEvent::Completed),
            _ => {}
        }
        Ok(outcome)
    }

    /// Flagging never starts the game or its clock.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.guard(coords)?;

        if self.phase.is_finished() || self.is_revealed(coords) {
            return Ok(FlagOutcome::NoChange);
        }

        Ok(if self.flagged.toggle(coords) {
            log::debug!("Flagged {:?}", coords);
            FlagOutcome::Flagged
        } else {
            log::debug!("Unflagged {:?}", coords);
            FlagOutcome::Unflagged
        })
    }

    /// Advances the clock by one second; ticks with a stale token do nothing.
    pub fn tick(&mut self, token: ClockToken) -> bool {
        let counted = self.phase == GamePhase::InProgress && self.clock.tick(token);
        if !counted {
            log::trace!("Dropped tick for epoch {}", token.epoch());
        }
        counted
    }

    pub(crate) fn view_at(&self, coords: Coord2) -> CellView {
        use CellView::*;

        let revealed = self.is_revealed(coords);
        let flagged = self.is_flagged(coords);

        match (self.phase, self.board[coords], revealed, flagged) {
            (_, BoardCell::Mine, true, _) => Detonated,
            (_, BoardCell::Clear(count), true, _) => Revealed(count),
            (GamePhase::Lost, BoardCell::Clear(_), false, true) => WrongFlag,
            (GamePhase::Lost, BoardCell::Mine, false, false) => Mine,
            (GamePhase::Won, BoardCell::Mine, false, _) => Flagged,
            (_, _, false, true) => Flagged,
            (_, _, false, false) => Hidden,
        }
    }

    fn guard(&self, coords: Coord2) -> Result<Coord2> {
        self.board.validate_coords(coords).inspect_err(|err| {
            log::warn!("Rejected move: {}", err);
        })
    }

    fn is_cleared(&self) -> bool {
        self.board.total_cells() - self.revealed.len() == self.board.mine_count()
    }

    fn mark_started(&mut self) {
        if self.phase.is_initial() {
            self.phase = GamePhase::InProgress;
            self.clock.start();
            log::info!("Game started");
        }
    }

    fn end_game(&mut self, phase: GamePhase) {
        if self.phase.is_finished() {
            return;
        }
        self.phase = phase;
        self.clock.stop();
        log::info!(
            "Game {} after {}s",
            if phase == GamePhase::Won { "won" } else { "lost" },
            self.clock.elapsed_secs()
        );
    }

    fn queue_clock_change(&mut self, was_running: bool) {
        match (was_running, self.clock.is_running()) {
            (false, true) => self.events.push(GameEvent::ClockStarted(self.clock.token())),
            (true, false) => self.events.push(GameEvent::ClockStopped),
            _ => {}
        }
    }
}
