//! End-to-end session tests: drop pieces, clear rows, watch score and level.

use retrotris::core::Session;
use retrotris::types::{GameAction, Phase, PieceKind, BOARD_WIDTH};

/// Soft-drop the current piece until it locks and the next one spawns.
fn drop_and_lock(session: &mut Session) {
    while session.handle(GameAction::SoftDrop) {}
}

/// Fill the bottom `n` rows completely.
fn fill_bottom_rows(session: &mut Session, n: usize) {
    for y in (20 - n as i8)..20 {
        for x in 0..BOARD_WIDTH as i8 {
            session.board_mut().place(x, y, Some(PieceKind::I));
        }
    }
}

/// A started session whose first falling piece is `kind`.
fn session_with_first(kind: PieceKind) -> Session {
    (0..500u64)
        .map(Session::with_seed)
        .find_map(|mut s| {
            s.start();
            (s.current().unwrap().kind == kind).then_some(s)
        })
        .expect("some seed yields the requested first piece")
}

#[test]
fn single_line_clear_scores_100() {
    let mut session = Session::with_seed(3);
    session.start();
    fill_bottom_rows(&mut session, 1);

    drop_and_lock(&mut session);

    assert_eq!(session.score(), 100);
    assert_eq!(session.lines(), 1);
    assert_eq!(session.level(), 1);
}

#[test]
fn quadruple_line_clear_scores_800() {
    let mut session = Session::with_seed(3);
    session.start();
    fill_bottom_rows(&mut session, 4);

    drop_and_lock(&mut session);

    assert_eq!(session.score(), 800);
    assert_eq!(session.lines(), 4);
    assert_eq!(session.level(), 1);
    assert_eq!(session.drop_interval_ms(), 1000);
}

#[test]
fn tenth_line_raises_level_and_speed() {
    let mut session = Session::with_seed(3);
    session.start();

    fill_bottom_rows(&mut session, 4);
    drop_and_lock(&mut session);
    fill_bottom_rows(&mut session, 4);
    drop_and_lock(&mut session);
    assert_eq!(session.lines(), 8);
    assert_eq!(session.score(), 1600);
    assert_eq!(session.level(), 1);

    // The clear that crosses 10 lines still scores at the old level.
    fill_bottom_rows(&mut session, 2);
    drop_and_lock(&mut session);
    assert_eq!(session.lines(), 10);
    assert_eq!(session.score(), 1900);
    assert_eq!(session.level(), 2);
    assert_eq!(session.drop_interval_ms(), 900);

    // Subsequent clears use the new multiplier.
    fill_bottom_rows(&mut session, 1);
    drop_and_lock(&mut session);
    assert_eq!(session.lines(), 11);
    assert_eq!(session.score(), 2100);
    assert_eq!(session.level(), 2);
}

#[test]
fn o_piece_locks_flat_without_scoring() {
    let mut session = session_with_first(PieceKind::O);
    drop_and_lock(&mut session);

    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    // O spawns at columns 4-5 and settles on the floor, two rows tall.
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(session.board().get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(session.board().row_occupancy(19), 2);
}

#[test]
fn o_piece_completes_a_prepared_row() {
    let mut session = session_with_first(PieceKind::O);
    for x in 0..BOARD_WIDTH as i8 {
        if x != 4 && x != 5 {
            session.board_mut().place(x, 19, Some(PieceKind::I));
        }
    }

    drop_and_lock(&mut session);

    // Bottom row completed and cleared; the O's top half shifted down.
    assert_eq!(session.score(), 100);
    assert_eq!(session.lines(), 1);
    assert_eq!(session.board().row_occupancy(19), 2);
    assert_eq!(session.board().get(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(session.board().get(5, 19), Some(Some(PieceKind::O)));
    assert_eq!(session.board().row_occupancy(18), 0);
}

#[test]
fn stacking_without_clears_eventually_ends_the_game() {
    let mut session = Session::with_seed(11);
    session.start();

    // Pieces pile up in the spawn columns; nothing ever completes a row.
    for _ in 0..200 {
        if session.phase() == Phase::GameOver {
            break;
        }
        drop_and_lock(&mut session);
    }

    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    assert!(session.current().is_none());
}
