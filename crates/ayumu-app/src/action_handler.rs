use std::time::Instant;

use ayumu_game::{ClickOutcome, Game};
use ayumu_generator::TileShuffler;

use crate::action::{Action, ActionRequestQueue};

/// Applies every queued action to the game.
///
/// Returns `true` if any action changed the game state.
pub(crate) fn handle_all<S>(
    game: &mut Game<S>,
    action_queue: &mut ActionRequestQueue,
    now: Instant,
) -> bool
where
    S: TileShuffler,
{
    let mut changed = false;
    for action in action_queue.take_all() {
        changed |= handle(game, action, now);
    }
    changed
}

fn handle<S>(game: &mut Game<S>, action: Action, now: Instant) -> bool
where
    S: TileShuffler,
{
    match action {
        Action::ClickBoard(point) => {
            let outcome = game.handle_click(point);
            if outcome == ClickOutcome::Ignored {
                return false;
            }
            log::debug!("click at ({:.0}, {:.0}): {outcome:?}", point.x, point.y);
            true
        }
        Action::Restart => {
            let restarted = game.handle_restart(now);
            if restarted {
                log::info!("restarting at level {}", game.level());
            }
            restarted
        }
    }
}
