use ayumu_core::{BoardLayout, Level};
use eframe::egui::{Align2, Color32, FontId, Painter, Stroke};

use crate::ui::{
    layout::CanvasTransform,
    theme::{FontSizes, Palette, RULE_WIDTH},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum FooterViewModel {
    Blank,
    LevelUp { level: Level },
    GameOver,
}

impl FooterViewModel {
    #[must_use]
    pub(crate) fn text(self) -> Option<String> {
        match self {
            Self::Blank => None,
            Self::LevelUp { level } => Some(format!("Level {level}! Space to start")),
            Self::GameOver => Some("Game Over! Space to restart".to_owned()),
        }
    }

    fn colors(self, palette: &Palette) -> (Color32, Color32) {
        match self {
            Self::Blank => (palette.strip_bg, palette.text),
            Self::LevelUp { .. } => (palette.level_up_bg, palette.level_up_text),
            Self::GameOver => (palette.game_over_bg, palette.game_over_text),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn show(
    painter: &Painter,
    vm: FooterViewModel,
    layout: &BoardLayout,
    transform: &CanvasTransform,
    palette: &Palette,
    fonts: &FontSizes,
) {
    let scale = transform.scale();
    let width = layout.canvas_width() as f32;
    let top = layout.footer_top() as f32;
    let center_y = top + layout.footer_height as f32 / 2.0;
    let (bg, fg) = vm.colors(palette);

    painter.rect_filled(
        transform.rect(
            0,
            layout.footer_top(),
            layout.canvas_width(),
            layout.footer_height,
        ),
        0.0,
        bg,
    );
    if let Some(text) = vm.text() {
        painter.text(
            transform.to_screen(width / 2.0, center_y),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(fonts.footer * scale),
            fg,
        );
    }
    painter.line_segment(
        [transform.to_screen(0.0, top), transform.to_screen(width, top)],
        Stroke::new(RULE_WIDTH * scale, palette.rule),
    );
}
