use ayumu_core::{BoardLayout, Level};
use ayumu_game::{GameSnapshot, Phase, TileView};

use crate::ui::{
    board::{BoardTile, BoardViewModel},
    footer::FooterViewModel,
    game_screen::GameScreenViewModel,
    header::HeaderViewModel,
};

#[must_use]
pub(crate) fn build_game_screen_view_model(
    snapshot: &GameSnapshot,
    layout: &BoardLayout,
) -> GameScreenViewModel {
    GameScreenViewModel::new(
        *layout,
        build_header_vm(snapshot),
        build_board_vm(&snapshot.tiles),
        build_footer_vm(snapshot.phase, snapshot.level),
    )
}

fn build_header_vm(snapshot: &GameSnapshot) -> HeaderViewModel {
    HeaderViewModel::new(snapshot.level, snapshot.remaining_memorize_secs)
}

fn build_board_vm(tiles: &[TileView]) -> BoardViewModel {
    let tiles = tiles
        .iter()
        .map(|tile| BoardTile {
            rect: tile.rect,
            number: tile.number,
            mark: tile.mark,
        })
        .collect();
    BoardViewModel::new(tiles)
}

// The level has already advanced when a round is cleared.
fn build_footer_vm(phase: Phase, level: Level) -> FooterViewModel {
    match phase {
        Phase::LevelUp => FooterViewModel::LevelUp { level },
        Phase::GameOver => FooterViewModel::GameOver,
        Phase::Setup | Phase::Memorize | Phase::Playing => FooterViewModel::Blank,
    }
}
