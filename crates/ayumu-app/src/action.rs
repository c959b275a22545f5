use std::mem;

use ayumu_core::Point;

#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub(crate) enum Action {
    /// Primary click on the canvas, in canvas coordinates.
    ClickBoard(Point),
    Restart,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
