use tui_snake::core::{GameConfig, GameState};
use tui_snake::term::{AnchorY, GameView, Viewport};
use tui_snake::types::{Cell, Direction, EndReason};

fn screen_text(fb: &tui_snake::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(GameConfig::default()).unwrap().snapshot();
    let view = GameView::default();

    // 20 cells at cell_w=2, cell_h=1 => 40x20, plus border => 42x22.
    let fb = view.render(&snap, Viewport::new(42, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(41, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_puts_north_at_the_top() {
    let mut snap = GameState::new(GameConfig::default()).unwrap().snapshot();
    snap.snake = vec![Cell::new(-10, 9), Cell::new(-10, 8)];
    snap.food = Some(Cell::new(9, -10));

    let fb = GameView::default().render(&snap, Viewport::new(42, 22));

    // Top-left playable cell.
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
    assert_eq!(fb.get(2, 1).unwrap().ch, '█');
    assert_eq!(fb.get(1, 2).unwrap().ch, '▓');
    // Bottom-right playable cell.
    assert_eq!(fb.get(39, 20).unwrap().ch, '●');
    assert_eq!(fb.get(40, 20).unwrap().ch, '●');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(GameConfig::default()).unwrap().snapshot();
    snap.score = 1234;
    snap.heading = Direction::North;

    let fb = GameView::default().render(&snap, Viewport::new(70, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LENGTH"));
    assert!(all.contains("north"));
}

#[test]
fn term_view_skips_panel_when_narrow() {
    let snap = GameState::new(GameConfig::default()).unwrap().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(42, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_announces_board_filled() {
    let mut snap = GameState::new(GameConfig::default().with_grid_cells(4))
        .unwrap()
        .snapshot();
    snap.ended = true;
    snap.end_reason = Some(EndReason::BoardFilled);
    snap.food = None;

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(30, 10));
    let all = screen_text(&fb);
    assert!(all.contains("BOARD FILLED"));
    assert!(!all.contains("GAME OVER"));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let snap = GameState::new(GameConfig::default()).unwrap().snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(80, 24));

    view.render_into(&snap, Viewport::new(42, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (42, 22));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_survives_oversized_grid_snapshot() {
    let mut snap = GameState::new(GameConfig::default()).unwrap().snapshot();
    snap.grid_cells = 40_000;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert_eq!((fb.width(), fb.height()), (80, 24));
}
