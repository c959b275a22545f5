use eframe::egui::Color32;

/// Fixed color palette for the game canvas.
///
/// The canvas ignores `egui::Visuals`; the game always renders on a light
/// background with tone-coded tiles.
#[derive(Debug, Clone)]
pub(crate) struct Palette {
    pub(crate) background: Color32,
    pub(crate) strip_bg: Color32,
    pub(crate) rule: Color32,
    pub(crate) text: Color32,

    pub(crate) tile_plain: Color32,
    pub(crate) tile_filler: Color32,
    pub(crate) tile_correct: Color32,
    pub(crate) tile_wrong: Color32,
    pub(crate) tile_outline: Color32,

    pub(crate) level_up_bg: Color32,
    pub(crate) level_up_text: Color32,
    pub(crate) game_over_bg: Color32,
    pub(crate) game_over_text: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        let light_green = Color32::from_rgb(150, 255, 150);
        let light_red = Color32::from_rgb(255, 150, 150);
        Self {
            background: Color32::WHITE,
            strip_bg: Color32::from_gray(240),
            rule: Color32::BLACK,
            text: Color32::BLACK,

            tile_plain: Color32::WHITE,
            tile_filler: Color32::from_gray(128),
            tile_correct: light_green,
            tile_wrong: light_red,
            tile_outline: Color32::BLACK,

            level_up_bg: light_green,
            level_up_text: Color32::from_rgb(0, 180, 0),
            game_over_bg: light_red,
            game_over_text: Color32::from_rgb(180, 0, 0),
        }
    }
}

/// Font sizes in canvas pixels; scaled with the canvas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FontSizes {
    pub(crate) tile: f32,
    pub(crate) header: f32,
    pub(crate) footer: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            tile: 56.0,
            header: 26.0,
            footer: 36.0,
        }
    }
}

pub(crate) const TILE_OUTLINE_WIDTH: f32 = 2.0;
pub(crate) const RULE_WIDTH: f32 = 1.0;
