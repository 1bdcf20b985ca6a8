use tictac_core::Game;
use tictac_engine::coords::{ortho, Mat4};
use tictac_engine::core::{App, AppControl, FrameCtx};
use tictac_engine::input::MouseButton;
use tictac_engine::render::{PrimitiveRenderer, TextRenderer};
use tictac_engine::scene::DrawList;
use tictac_engine::text::FontAtlas;

use crate::compose::{compose_frame, Palette};
use crate::input_map::{handle_click, to_layout};
use crate::layout::Layout;

/// The game plus everything needed to draw it.
pub struct TicTacToeApp {
    game: Game,
    layout: Layout,
    palette: Palette,

    draw_list: DrawList,
    projection: Mat4,
    primitives: PrimitiveRenderer,
    /// `None` when no font could be loaded.
    text: Option<TextRenderer>,
}

impl TicTacToeApp {
    pub fn new(atlas: Option<FontAtlas>) -> Self {
        let layout = Layout::standard();
        Self {
            game: Game::new(),
            projection: ortho(0.0, layout.size.width, 0.0, layout.size.height),
            layout,
            palette: Palette::default(),
            draw_list: DrawList::new(),
            primitives: PrimitiveRenderer::new(),
            text: atlas.map(TextRenderer::new),
        }
    }
}

impl App for TicTacToeApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let window = ctx.window.logical_size();
        for pos in ctx.input_frame.presses(MouseButton::Left) {
            match to_layout(&self.layout, window, pos) {
                Some(point) => {
                    handle_click(&self.layout, &mut self.game, point);
                }
                None => log::debug!("click ignored: window has no area"),
            }
        }

        compose_frame(
            &mut self.draw_list,
            &self.game,
            &self.layout,
            &self.palette,
            self.text.is_some(),
        );

        let draw_list = &self.draw_list;
        let projection = &self.projection;
        let primitives = &mut self.primitives;
        let text = &mut self.text;

        ctx.render(self.palette.background, |rctx, target| {
            primitives.render(rctx, target, draw_list, projection);
            if let Some(text) = text.as_mut() {
                text.render(rctx, target, draw_list, projection);
            }
        })
    }
}
