use ayumu_core::{BoardLayout, Level};
use eframe::egui::{Align2, FontId, Painter, Stroke};

use crate::ui::{
    layout::CanvasTransform,
    theme::{FontSizes, Palette, RULE_WIDTH},
};

const LEVEL_TEXT_INSET: f32 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeaderViewModel {
    level: Level,
    countdown_secs: Option<u64>,
}

impl HeaderViewModel {
    #[must_use]
    pub(crate) fn new(level: Level, countdown_secs: Option<u64>) -> Self {
        Self {
            level,
            countdown_secs,
        }
    }

    #[must_use]
    pub(crate) fn level_text(&self) -> String {
        format!("Level: {}", self.level)
    }

    #[must_use]
    pub(crate) fn countdown_text(&self) -> Option<String> {
        self.countdown_secs.map(|secs| format!("Memorize: {secs}s"))
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn show(
    painter: &Painter,
    vm: &HeaderViewModel,
    layout: &BoardLayout,
    transform: &CanvasTransform,
    palette: &Palette,
    fonts: &FontSizes,
) {
    let scale = transform.scale();
    let width = layout.canvas_width() as f32;
    let height = layout.header_height as f32;
    let font = FontId::proportional(fonts.header * scale);

    painter.rect_filled(
        transform.rect(0, 0, layout.canvas_width(), layout.header_height),
        0.0,
        palette.strip_bg,
    );
    painter.line_segment(
        [transform.to_screen(0.0, height), transform.to_screen(width, height)],
        Stroke::new(RULE_WIDTH * scale, palette.rule),
    );

    painter.text(
        transform.to_screen(LEVEL_TEXT_INSET, height / 2.0),
        Align2::LEFT_CENTER,
        vm.level_text(),
        font.clone(),
        palette.text,
    );
    if let Some(countdown) = vm.countdown_text() {
        painter.text(
            transform.to_screen(width / 2.0, height / 2.0),
            Align2::CENTER_CENTER,
            countdown,
            font,
            palette.text,
        );
    }
}
