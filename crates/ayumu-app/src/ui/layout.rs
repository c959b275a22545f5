use ayumu_core::{BoardLayout, Point, TileRect};
use eframe::egui::{Pos2, Rect, Vec2};

/// Size of the whole canvas in canvas pixels.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn canvas_size(layout: &BoardLayout) -> Vec2 {
    Vec2::new(layout.canvas_width() as f32, layout.canvas_height() as f32)
}

/// Maps between canvas pixels and egui screen points.
///
/// The canvas is scaled uniformly, so one factor applies to both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CanvasTransform {
    origin: Pos2,
    scale: f32,
}

impl CanvasTransform {
    #[must_use]
    pub(crate) fn new(origin: Pos2, scale: f32) -> Self {
        Self { origin, scale }
    }

    /// Picks the largest scale at which the canvas fits in `available`.
    #[must_use]
    pub(crate) fn fit_scale(layout: &BoardLayout, available: Vec2) -> f32 {
        let canvas = canvas_size(layout);
        (available.x / canvas.x).min(available.y / canvas.y).max(0.0)
    }

    #[must_use]
    pub(crate) fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub(crate) fn to_screen(&self, x: f32, y: f32) -> Pos2 {
        self.origin + Vec2::new(x, y) * self.scale
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn rect(&self, x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect::from_min_size(
            self.to_screen(x as f32, y as f32),
            Vec2::new(width as f32, height as f32) * self.scale,
        )
    }

    #[must_use]
    pub(crate) fn tile_rect(&self, rect: TileRect) -> Rect {
        self.rect(rect.x(), rect.y(), rect.size(), rect.size())
    }

    #[must_use]
    pub(crate) fn to_canvas(&self, pos: Pos2) -> Point {
        let offset = (pos - self.origin) / self.scale;
        Point::new(offset.x, offset.y)
    }
}
