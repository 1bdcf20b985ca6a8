//! Per-frame scene for the game. The whole frame is recorded from scratch
//! every time; nothing is cached between frames.

use tictac_core::{Cell, Game, Mark, Outcome, Score};
use tictac_engine::coords::{Rect, Vec2};
use tictac_engine::paint::Color;
use tictac_engine::scene::DrawList;

use crate::layout::Layout;

/// Game colors, authored in sRGB and stored linear.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub x: Color,
    pub o: Color,
    pub button: Color,
    pub button_label: Color,
    pub score: Color,
    pub draw: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_srgb_rgb(0.1, 0.1, 0.15),
            grid: Color::from_srgb_rgb(0.8, 0.8, 0.8),
            x: Color::from_srgb_rgb(0.9, 0.2, 0.2),
            o: Color::from_srgb_rgb(0.2, 0.5, 0.9),
            button: Color::from_srgb_rgb(0.3, 0.6, 0.4),
            button_label: Color::WHITE,
            score: Color::from_srgb_rgb(0.9, 0.9, 0.9),
            draw: Color::from_srgb_rgb(0.7, 0.7, 0.7),
        }
    }
}

impl Palette {
    #[inline]
    pub fn mark(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

pub const RESTART_LABEL: &str = "Restart Game";

/// Status text for the current round.
pub fn status_line(outcome: Outcome, turn: Mark) -> &'static str {
    match outcome {
        Outcome::InProgress => match turn {
            Mark::X => "Player X's Turn",
            Mark::O => "Player O's Turn",
        },
        Outcome::Win(Mark::X) => "Player X Wins!",
        Outcome::Win(Mark::O) => "Player O Wins!",
        Outcome::Draw => "It's a Draw!",
    }
}

/// Status color: the player the message is about, grey for a draw.
pub fn status_color(outcome: Outcome, turn: Mark, palette: &Palette) -> Color {
    match outcome {
        Outcome::InProgress => palette.mark(turn),
        Outcome::Win(mark) => palette.mark(mark),
        Outcome::Draw => palette.draw,
    }
}

pub fn score_line(score: Score) -> String {
    format!("Score: X - {}  O - {}", score.x, score.o)
}

/// Records the full frame for `game` into `list`.
///
/// Order: grid, marks, restart button, then (when `with_text`) the button
/// label, score and status lines. The list is cleared first.
pub fn compose_frame(
    list: &mut DrawList,
    game: &Game,
    layout: &Layout,
    palette: &Palette,
    with_text: bool,
) {
    list.clear();

    for (from, to) in layout.grid_lines() {
        list.push_line(from, to, layout.grid_line_width, palette.grid);
    }

    for (row, col, cell) in game.board().iter() {
        let Cell::Marked(mark) = cell else { continue };
        let rect = layout.cell_rect(row, col);
        match mark {
            Mark::X => push_x(list, rect, layout, palette.x),
            Mark::O => list.push_circle(
                rect.center(),
                layout.cell_size * 0.5 - layout.symbol_padding,
                layout.symbol_stroke,
                palette.o,
            ),
        }
    }

    list.push_rect(layout.button, palette.button);

    if !with_text {
        return;
    }

    let label = layout.button_label;
    list.push_text(RESTART_LABEL, label.origin, label.scale, palette.button_label);

    let score = layout.score;
    list.push_text(score_line(game.score()), score.origin, score.scale, palette.score);

    let (outcome, turn) = (game.outcome(), game.turn());
    let status = layout.status;
    list.push_text(
        status_line(outcome, turn),
        status.origin,
        status.scale,
        status_color(outcome, turn, palette),
    );
}

fn push_x(list: &mut DrawList, cell: Rect, layout: &Layout, color: Color) {
    let inner = cell.inset(layout.symbol_padding);
    let (min, max) = (inner.min(), inner.max());
    list.push_line(min, max, layout.symbol_stroke, color);
    list.push_line(
        Vec2::new(max.x, min.y),
        Vec2::new(min.x, max.y),
        layout.symbol_stroke,
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::scene::DrawCmd;

    fn compose(game: &Game, with_text: bool) -> DrawList {
        let mut list = DrawList::new();
        compose_frame(&mut list, game, &Layout::standard(), &Palette::default(), with_text);
        list
    }

    fn count(list: &DrawList) -> (usize, usize, usize, usize) {
        let mut n = (0, 0, 0, 0);
        for cmd in list.iter() {
            match cmd {
                DrawCmd::Rect(_) => n.0 += 1,
                DrawCmd::Line(_) => n.1 += 1,
                DrawCmd::Circle(_) => n.2 += 1,
                DrawCmd::Text(_) => n.3 += 1,
            }
        }
        n
    }

    fn texts(list: &DrawList) -> Vec<String> {
        list.iter()
            .filter_map(|c| match c {
                DrawCmd::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_board_draws_grid_button_and_text() {
        let list = compose(&Game::new(), true);
        // (rects, lines, circles, texts)
        assert_eq!(count(&list), (1, 4, 0, 3));
        assert_eq!(
            texts(&list),
            ["Restart Game", "Score: X - 0  O - 0", "Player X's Turn"]
        );
    }

    #[test]
    fn marks_add_strokes_and_circles() {
        let mut g = Game::new();
        for (r, c) in [(0, 0), (1, 1), (2, 2)] {
            g.apply_move(r, c).unwrap();
        }
        let list = compose(&g, true);
        assert_eq!(count(&list), (1, 4 + 2 * 2, 1, 3));
    }

    #[test]
    fn text_is_omitted_without_a_font() {
        let list = compose(&Game::new(), false);
        assert_eq!(count(&list), (1, 4, 0, 0));
    }

    #[test]
    fn x_strokes_span_the_padded_cell() {
        let mut g = Game::new();
        g.apply_move(0, 0).unwrap();
        let list = compose(&g, false);
        let strokes: Vec<(Vec2, Vec2)> = list
            .items()
            .iter()
            .skip(4)
            .filter_map(|c| match c {
                DrawCmd::Line(l) => Some((l.from, l.to)),
                _ => None,
            })
            .collect();
        assert_eq!(
            strokes,
            [
                (Vec2::new(200.0, 70.0), Vec2::new(300.0, 170.0)),
                (Vec2::new(300.0, 70.0), Vec2::new(200.0, 170.0)),
            ]
        );
    }

    #[test]
    fn o_is_a_circle_centered_in_its_cell() {
        let mut g = Game::new();
        g.apply_move(0, 0).unwrap();
        g.apply_move(2, 1).unwrap();
        let list = compose(&g, false);
        let circle = list
            .iter()
            .find_map(|c| match c {
                DrawCmd::Circle(c) => Some(c.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(circle.center, Vec2::new(400.0, 420.0));
        assert_eq!(circle.radius, 50.0);
        assert_eq!(circle.stroke_width, 15.0);
    }

    #[test]
    fn recomposing_replaces_the_previous_frame() {
        let mut list = DrawList::new();
        let (l, p) = (Layout::standard(), Palette::default());
        compose_frame(&mut list, &Game::new(), &l, &p, true);
        compose_frame(&mut list, &Game::new(), &l, &p, true);
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn status_strings_follow_the_outcome() {
        assert_eq!(status_line(Outcome::InProgress, Mark::O), "Player O's Turn");
        assert_eq!(status_line(Outcome::Win(Mark::X), Mark::O), "Player X Wins!");
        assert_eq!(status_line(Outcome::Win(Mark::O), Mark::X), "Player O Wins!");
        assert_eq!(status_line(Outcome::Draw, Mark::O), "It's a Draw!");
    }

    #[test]
    fn status_color_tracks_the_player() {
        let p = Palette::default();
        assert_eq!(status_color(Outcome::InProgress, Mark::O, &p), p.o);
        assert_eq!(status_color(Outcome::Win(Mark::X), Mark::O, &p), p.x);
        assert_eq!(status_color(Outcome::Draw, Mark::X, &p), p.draw);
    }

    #[test]
    fn score_line_formats_both_counters() {
        assert_eq!(score_line(Score { x: 3, o: 12 }), "Score: X - 3  O - 12");
    }
}
