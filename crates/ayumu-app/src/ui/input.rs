use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue};

const RESTART_KEY: Key = Key::Space;

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    if i.key_pressed(RESTART_KEY) {
        action_queue.request(Action::Restart);
    }
}
