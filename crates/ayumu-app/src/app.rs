//! Desktop memory game UI.
//!
//! # Design Notes
//! - Renders a fixed-aspect canvas scaled to the window, with the header,
//!   board and footer drawn as painter primitives.
//! - Mouse clicks on the board and the Space key are the only inputs.
//! - The clock is read once per frame and passed into the game.

use std::time::{Duration, Instant};

use ayumu_core::BoardLayout;
use ayumu_game::Game;
use ayumu_generator::{GridGenerator, SeededShuffler};
use eframe::{
    App, CreationContext, Frame,
    egui::{self, CentralPanel, Context, Visuals},
};

use crate::{
    action::ActionRequestQueue,
    action_handler,
    config::AppConfig,
    ui::{
        self,
        theme::{FontSizes, Palette},
    },
    view_model_builder,
};

const COUNTDOWN_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct AyumuApp {
    game: Game<SeededShuffler>,
    layout: BoardLayout,
    palette: Palette,
    fonts: FontSizes,
}

impl AyumuApp {
    pub fn new(cc: &CreationContext<'_>, config: &AppConfig) -> Self {
        cc.egui_ctx.set_visuals(Visuals::light());
        Self::from_config(config, Instant::now())
    }

    fn from_config(config: &AppConfig, now: Instant) -> Self {
        let shuffler = config
            .seed
            .map_or_else(SeededShuffler::from_random_seed, SeededShuffler::new);
        log::info!(
            "starting at level {} with shuffle seed {}",
            config.start_level,
            shuffler.seed()
        );
        let generator = GridGenerator::new(config.layout);
        Self {
            game: Game::new(generator, shuffler, config.start_level, now),
            layout: config.layout,
            palette: Palette::default(),
            fonts: FontSizes::default(),
        }
    }
}

impl App for AyumuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        let mut action_queue = ActionRequestQueue::default();

        let mut changed = self.game.tick(now).is_some();

        ctx.input(|i| {
            ui::input::handle_input(i, &mut action_queue);
        });
        changed |= action_handler::handle_all(&mut self.game, &mut action_queue, now);

        let snapshot = self.game.snapshot(now);
        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&snapshot, &self.layout);

        CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.palette.background))
            .show(ctx, |ui| {
                ui::game_screen::show(
                    ui,
                    &game_screen_vm,
                    &self.palette,
                    &self.fonts,
                    &mut action_queue,
                );
            });

        changed |= action_handler::handle_all(&mut self.game, &mut action_queue, now);

        if changed {
            ctx.request_repaint();
        } else if self.game.phase().is_memorize() {
            ctx.request_repaint_after(COUNTDOWN_REPAINT_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use ayumu_core::Level;
    use ayumu_game::Phase;

    use super::*;

    #[test]
    fn config_sets_start_level_and_enters_memorize() {
        let config = AppConfig {
            seed: Some(7),
            start_level: Level::from_number(5),
            ..AppConfig::default()
        };
        let app = AyumuApp::from_config(&config, Instant::now());
        assert_eq!(app.game.level(), Level::from_number(5));
        assert_eq!(app.game.phase(), Phase::Memorize);
    }

    #[test]
    fn same_seed_produces_same_board() {
        let config = AppConfig {
            seed: Some(99),
            start_level: Level::LAST,
            ..AppConfig::default()
        };
        let now = Instant::now();
        let a = AyumuApp::from_config(&config, now);
        let b = AyumuApp::from_config(&config, now);
        assert_eq!(a.game.grid(), b.game.grid());
    }
}
