use minado_core::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn easy_board(seed: u64) -> Board {
    let config = Difficulty::Easy.config();
    let mut rng = SmallRng::seed_from_u64(seed);
    generate(config.rows(), config.cols(), config.mines(), &mut rng).unwrap()
}

#[test]
fn three_by_three_corner_mine_is_won_in_one_open() {
    let board = Board::from_mine_coords((3, 3), &[(0, 0)]).unwrap();
    let mut game = GameState::new(board);

    assert_eq!(game.open_cell((2, 2)), Ok(OpenOutcome::Completed));
    assert_eq!(game.phase(), GamePhase::Won);
    assert_eq!(game.revealed().len(), 8);
    assert_eq!(game.elapsed_secs(), 0);
}

#[test]
fn three_by_three_corner_mine_is_lost_on_the_mine() {
    let board = Board::from_mine_coords((3, 3), &[(0, 0)]).unwrap();
    let mut game = GameState::new(board);

    assert_eq!(game.open_cell((0, 0)), Ok(OpenOutcome::Detonated));
    assert_eq!(game.phase(), GamePhase::Lost);
    assert_eq!(game.revealed().iter().collect::<Vec<_>>(), vec![(0, 0)]);
}

#[test]
fn opening_every_safe_cell_of_easy_board_wins() {
    for seed in 0..20 {
        let board = easy_board(seed);
        let safe: Vec<_> = iter_coords(board.size())
            .filter(|&coords| !board.contains_mine(coords))
            .collect();
        let mut game = GameState::new(board);

        for &coords in &safe {
            assert_eq!(game.phase() == GamePhase::Won, safe.iter().all(|&c| game.is_revealed(c)));
            game.open_cell(coords).unwrap();
        }

        assert_eq!(game.phase(), GamePhase::Won, "seed {seed}");
        assert_eq!(game.revealed().len(), 54);
        assert_eq!(game.drain_events().last(), Some(&GameEvent::Completed));
    }
}

#[test]
fn mine_before_clearing_loses_easy_board() {
    let board = easy_board(5);
    let mine = board.mines().next().unwrap();
    let safe = iter_coords(board.size())
        .find(|&coords| board[coords] == BoardCell::Clear(1))
        .unwrap();
    let mut game = GameState::new(board);

    game.open_cell(safe).unwrap();
    assert_eq!(game.open_cell(mine), Ok(OpenOutcome::Detonated));
    assert_eq!(game.phase(), GamePhase::Lost);
    assert_eq!(game.open_cell(safe), Ok(OpenOutcome::NoChange));
}

#[test]
fn session_drives_a_full_game_with_ticks() {
    let mut session = Session::seeded(Difficulty::Easy, 9);
    let mut token = None;

    let targets: Vec<_> = iter_coords((8, 8)).collect();
    for coords in targets {
        let snapshot = session.snapshot();
        if snapshot.phase.is_finished() {
            break;
        }
        if snapshot.cell(coords) != Some(CellView::Hidden) {
            continue;
        }
        session.handle(Gesture::Tap, coords).unwrap();
        for event in session.drain_events() {
            match event {
                GameEvent::ClockStarted(started) => token = Some(started),
                GameEvent::ClockStopped => token = None,
                GameEvent::Detonated(_) | GameEvent::Completed => {}
            }
        }
        if let Some(token) = token {
            assert!(session.tick(token));
        }
    }

    let snapshot = session.snapshot();
    assert!(snapshot.phase.is_finished());
    let frozen = snapshot.elapsed_secs;
    assert!(!session.tick(session.state().clock_token()));
    assert_eq!(session.snapshot().elapsed_secs, frozen);
}

#[test]
fn over_flagging_passes_through_negative_counts() {
    let mut session = Session::seeded(Difficulty::Easy, 1);

    for coords in iter_coords((8, 8)).take(12) {
        assert_eq!(session.toggle_flag(coords), Ok(FlagOutcome::Flagged));
    }

    assert_eq!(session.snapshot().remaining_mines, -2);
    assert_eq!(session.state().phase(), GamePhase::NotStarted);
}
