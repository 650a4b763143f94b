use crate::*;

/// Controller owning the current game. Every gesture from the presentation
/// layer goes through here, and a reset swaps the whole [`GameState`] at once.
#[derive(Debug)]
pub struct Session<G = RandomBoardGenerator> {
    generator: G,
    difficulty: Difficulty,
    state: GameState,
    epoch: u64,
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_generator(difficulty, RandomBoardGenerator::from_entropy())
    }

    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_generator(difficulty, RandomBoardGenerator::new(seed))
    }
}

impl<G: BoardGenerator> Session<G> {
    pub fn with_generator(difficulty: Difficulty, mut generator: G) -> Self {
        let board = generator.generate(difficulty.config());
        log::info!("New {} game", difficulty);
        Self {
            generator,
            difficulty,
            state: GameState::with_epoch(board, 0),
            epoch: 0,
            events: Vec::new(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(&self.state)
    }

    /// Replaces the running game with a fresh board of `difficulty`.
    pub fn start_or_reset(&mut self, difficulty: Difficulty) {
        let board = self.generator.generate(difficulty.config());
        self.difficulty = difficulty;
        self.replace(board);
        log::info!("New {} game", difficulty);
    }

    pub fn restart(&mut self) {
        self.start_or_reset(self.difficulty);
    }

    /// Starts a game on arbitrary dimensions; keeps the current game on error.
    pub fn start_custom(&mut self, config: BoardConfig) -> Result<()> {
        let config = BoardConfig::new(config.rows(), config.cols(), config.mines())?;
        let board = self.generator.generate(config);
        self.replace(board);
        log::info!(
            "New custom game {}x{} with {} mines",
            config.rows(),
            config.cols(),
            config.mines()
        );
        Ok(())
    }

    pub fn open_cell(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        self.state.open_cell(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        self.state.toggle_flag(coords)
    }

    /// Routes a classified gesture; returns whether anything changed.
    pub fn handle(&mut self, gesture: Gesture, coords: Coord2) -> Result<bool> {
        Ok(match gesture {
            Gesture::Tap => self.open_cell(coords)?.has_update(),
            Gesture::LongPress => self.toggle_flag(coords)?.has_update(),
        })
    }

    pub fn tick(&mut self, token: ClockToken) -> bool {
        self.state.tick(token)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        let mut events = core::mem::take(&mut self.events);
        events.append(&mut self.state.drain_events());
        events
    }

    fn replace(&mut self, board: Board) {
        // events of the outgoing game are still owed to the presentation
        self.events.append(&mut self.state.drain_events());
        if self.state.is_clock_running() {
            self.events.push(GameEvent::ClockStopped);
        }
        self.epoch += 1;
        self.state = GameState::with_epoch(board, self.epoch);
    }
}
