use ayumu_core::{TileMark, TileRect};
use eframe::egui::{Align2, Color32, FontId, Painter, Stroke, StrokeKind};

use crate::ui::{
    layout::CanvasTransform,
    theme::{FontSizes, Palette, TILE_OUTLINE_WIDTH},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardTile {
    pub(crate) rect: TileRect,
    pub(crate) number: Option<u8>,
    pub(crate) mark: TileMark,
}

impl BoardTile {
    fn fill_color(&self, palette: &Palette) -> Color32 {
        match self.mark {
            TileMark::Plain => palette.tile_plain,
            TileMark::Filler => palette.tile_filler,
            TileMark::Correct => palette.tile_correct,
            TileMark::Wrong => palette.tile_wrong,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardViewModel {
    pub(crate) tiles: Vec<BoardTile>,
}

impl BoardViewModel {
    #[must_use]
    pub(crate) fn new(tiles: Vec<BoardTile>) -> Self {
        Self { tiles }
    }
}

pub(crate) fn show(
    painter: &Painter,
    vm: &BoardViewModel,
    transform: &CanvasTransform,
    palette: &Palette,
    fonts: &FontSizes,
) {
    let scale = transform.scale();
    let outline = Stroke::new(TILE_OUTLINE_WIDTH * scale, palette.tile_outline);
    let font = FontId::proportional(fonts.tile * scale);

    for tile in &vm.tiles {
        let rect = transform.tile_rect(tile.rect);
        painter.rect_filled(rect, 0.0, tile.fill_color(palette));
        painter.rect_stroke(rect, 0.0, outline, StrokeKind::Inside);
        if let Some(number) = tile.number {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                number.to_string(),
                font.clone(),
                palette.text,
            );
        }
    }
}
