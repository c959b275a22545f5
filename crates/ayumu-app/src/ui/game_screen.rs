use ayumu_core::BoardLayout;
use eframe::egui::{Sense, Ui};
use egui_extras::{Size, StripBuilder};

use super::{board, footer, header, layout::canvas_size};
use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        board::BoardViewModel,
        footer::FooterViewModel,
        header::HeaderViewModel,
        layout::CanvasTransform,
        theme::{FontSizes, Palette},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GameScreenViewModel {
    pub(crate) layout: BoardLayout,
    pub(crate) header_vm: HeaderViewModel,
    pub(crate) board_vm: BoardViewModel,
    pub(crate) footer_vm: FooterViewModel,
}

impl GameScreenViewModel {
    pub(crate) fn new(
        layout: BoardLayout,
        header_vm: HeaderViewModel,
        board_vm: BoardViewModel,
        footer_vm: FooterViewModel,
    ) -> Self {
        Self {
            layout,
            header_vm,
            board_vm,
            footer_vm,
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GameScreenViewModel,
    palette: &Palette,
    fonts: &FontSizes,
    action_queue: &mut ActionRequestQueue,
) {
    let scale = CanvasTransform::fit_scale(&vm.layout, ui.available_size());
    let size = canvas_size(&vm.layout) * scale;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(size.x))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(size.y))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            show_canvas(ui, vm, scale, palette, fonts, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}

fn show_canvas(
    ui: &mut Ui,
    vm: &GameScreenViewModel,
    scale: f32,
    palette: &Palette,
    fonts: &FontSizes,
    action_queue: &mut ActionRequestQueue,
) {
    let (rect, response) = ui.allocate_exact_size(canvas_size(&vm.layout) * scale, Sense::click());
    let transform = CanvasTransform::new(rect.min, scale);
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, palette.background);
    header::show(&painter, &vm.header_vm, &vm.layout, &transform, palette, fonts);
    board::show(&painter, &vm.board_vm, &transform, palette, fonts);
    footer::show(&painter, vm.footer_vm, &vm.layout, &transform, palette, fonts);

    if response.clicked()
        && let Some(pos) = response.interact_pointer_pos()
    {
        action_queue.request(Action::ClickBoard(transform.to_canvas(pos)));
    }
}
