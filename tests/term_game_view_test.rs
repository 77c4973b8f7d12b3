use tui_wordfall::core::{CycleLetters, GameConfig, GameSnapshot, GameState, Grid, Lexicon};
use tui_wordfall::term::{Flash, GameView, Rgb, ViewState, Viewport};
use tui_wordfall::types::Pos;

fn small_game() -> GameState<CycleLetters> {
    let grid = Grid::from_rows(&["CTAX", "XYZW", "ZWXY", "CTAW"]).unwrap();
    GameState::from_grid(
        GameConfig::default(),
        Lexicon::from_words(["CAT"], 3),
        grid,
        CycleLetters::new("Q"),
        1,
    )
}

fn snap() -> GameSnapshot {
    small_game().snapshot()
}

/// Screen column and row of the letter in tile `pos` for a 60x20 viewport.
///
/// Board frame is 14x6 and the board plus panel span 30 columns, so the frame
/// starts at (15, 7) and the first tile at (16, 8).
fn letter_xy(pos: Pos) -> (u16, u16) {
    (16 + pos.col as u16 * 3 + 1, 8 + pos.row as u16)
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();
    // 4 tiles * 3 columns + border => 14x6, too narrow for the side panel.
    let fb = view.render(&snap(), &ViewState::default(), Viewport::new(14, 6));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 5).unwrap().ch, '└');
    assert_eq!(fb.get(13, 5).unwrap().ch, '┘');
    assert_eq!(fb.find_text("SCORE"), None);
}

#[test]
fn term_view_renders_letters_three_columns_wide() {
    let view = GameView::default();
    let fb = view.render(&snap(), &ViewState::default(), Viewport::new(14, 6));

    assert_eq!(fb.row_text(1), "│ C  T  A  X │");
    assert_eq!(fb.row_text(4), "│ C  T  A  W │");
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let view = GameView::default();
    let fb = view.render(&snap(), &ViewState::default(), Viewport::new(60, 20));

    assert_eq!(fb.find_text("SCORE"), Some((31, 7)));
    assert!(fb.find_text("TIME").is_some());
    assert!(fb.find_text("60s").is_some());
    assert!(fb.find_text("3/3").is_some());
    assert!(fb.find_text("WORDS").is_some());
}

#[test]
fn term_view_cursor_uses_brackets() {
    let view = GameView::default();
    let state = ViewState {
        cursor: Some(Pos::new(1, 1)),
        flash: None,
    };
    let fb = view.render(&snap(), &state, Viewport::new(60, 20));

    let (x, y) = letter_xy(Pos::new(1, 1));
    assert_eq!(fb.get(x - 1, y).unwrap().ch, '[');
    assert_eq!(fb.get(x, y).unwrap().ch, 'Y');
    assert_eq!(fb.get(x + 1, y).unwrap().ch, ']');
}

#[test]
fn term_view_highlights_selection_and_flash() {
    let mut game = small_game();
    game.select(Pos::new(2, 2)).unwrap();
    let view = GameView::default();
    let state = ViewState {
        cursor: None,
        flash: Some(Flash::rejected(Pos::new(0, 0), Pos::new(0, 1))),
    };
    let fb = view.render(&game.snapshot(), &state, Viewport::new(60, 20));

    let bg = |pos: Pos| {
        let (x, y) = letter_xy(pos);
        fb.get(x, y).unwrap().style.bg
    };
    let plain = bg(Pos::new(3, 3));
    assert_ne!(bg(Pos::new(2, 2)), plain);
    assert_eq!(bg(Pos::new(0, 0)), Rgb::new(190, 60, 60));
    assert_eq!(bg(Pos::new(0, 1)), Rgb::new(190, 60, 60));
    assert_ne!(bg(Pos::new(0, 0)), bg(Pos::new(2, 2)));
}

#[test]
fn term_view_cell_at_round_trips_with_render() {
    let view = GameView::default();
    let snapshot = snap();
    let vp = Viewport::new(60, 20);
    let fb = view.render(&snapshot, &ViewState::default(), vp);

    for row in 0..4 {
        for col in 0..4 {
            let pos = Pos::new(row, col);
            let (x, y) = letter_xy(pos);
            let letter = snapshot.grid.letter(pos).unwrap().as_char();
            assert_eq!(fb.get(x, y).unwrap().ch, letter);
            assert_eq!(view.cell_at(4, vp, x, y), Some(pos));
            // The padding columns belong to the same tile.
            assert_eq!(view.cell_at(4, vp, x - 1, y), Some(pos));
            assert_eq!(view.cell_at(4, vp, x + 1, y), Some(pos));
        }
    }
}

#[test]
fn term_view_cell_at_misses_outside_board() {
    let view = GameView::default();
    let vp = Viewport::new(60, 20);

    assert_eq!(view.cell_at(4, vp, 15, 8), None);
    assert_eq!(view.cell_at(4, vp, 16, 7), None);
    assert_eq!(view.cell_at(4, vp, 28, 8), None);
    assert_eq!(view.cell_at(4, vp, 16, 12), None);
    assert_eq!(view.cell_at(4, vp, 0, 0), None);
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut game = small_game();
    game.attempt_swap(Pos::new(0, 1), Pos::new(0, 2));
    game.attempt_swap(Pos::new(3, 1), Pos::new(3, 2));
    let snapshot = game.snapshot();
    assert!(snapshot.phase.is_game_over());

    let view = GameView::default();
    let fb = view.render(&snapshot, &ViewState::default(), Viewport::new(60, 20));
    assert!(fb.find_text("GAME OVER").is_some());
    assert!(fb.find_text("no moves left").is_some());
    assert!(fb.find_text("SCORE 600").is_some());
}

#[test]
fn term_view_centers_board_on_tall_viewports() {
    let view = GameView::default();
    // Frame is 6 rows tall: start_y = (16 - 6) / 2 = 5.
    let fb = view.render(&snap(), &ViewState::default(), Viewport::new(14, 16));
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');
}
