use std::time::Instant;

use ayumu_core::{Grid, Level, Point};
use ayumu_generator::{GridGenerator, SeededShuffler, TileShuffler};

use crate::{ClickOutcome, GameSnapshot, MemorizeTimer, Phase, TileView};

/// A memory game session.
///
/// Owns the current grid, the level, the next expected number and the
/// memorize countdown. All tile mutation goes through [`handle_click`],
/// [`handle_restart`] and [`tick`]; callers only ever see the grid by
/// shared reference or through a [`GameSnapshot`].
///
/// The clock is never read here. Every time-dependent operation takes the
/// current [`Instant`] from the caller.
///
/// [`handle_click`]: Self::handle_click
/// [`handle_restart`]: Self::handle_restart
/// [`tick`]: Self::tick
#[derive(Debug, Clone)]
pub struct Game<S = SeededShuffler> {
    generator: GridGenerator,
    shuffler: S,
    grid: Grid,
    level: Level,
    next_number: u8,
    phase: Phase,
    timer: MemorizeTimer,
}

impl<S> Game<S>
where
    S: TileShuffler,
{
    /// Starts a session at `level`.
    ///
    /// The game passes through [`Phase::Setup`] and is returned in
    /// [`Phase::Memorize`], with every tile face-up and the countdown
    /// starting at `now`.
    #[must_use]
    pub fn new(generator: GridGenerator, mut shuffler: S, level: Level, now: Instant) -> Self {
        let grid = generator.generate(level, &mut shuffler);
        let mut game = Self {
            generator,
            shuffler,
            grid,
            level,
            next_number: 1,
            phase: Phase::Setup,
            timer: MemorizeTimer::start(now, level.memorize_duration()),
        };
        game.enter_memorize(now);
        game
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the number the player has to pick next.
    #[must_use]
    pub fn next_number(&self) -> u8 {
        self.next_number
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the memorize countdown of the current round.
    #[must_use]
    pub fn timer(&self) -> &MemorizeTimer {
        &self.timer
    }

    /// Advances time-driven transitions.
    ///
    /// In [`Phase::Memorize`], once the level's memorize duration has elapsed,
    /// every tile is turned face-down and the game enters [`Phase::Playing`].
    /// Returns the new phase if a transition happened.
    pub fn tick(&mut self, now: Instant) -> Option<Phase> {
        if !self.phase.is_memorize() || !self.timer.is_expired(now) {
            return None;
        }
        self.grid.hide_all();
        self.set_phase(Phase::Playing);
        Some(self.phase)
    }

    /// Resolves a pointer click at `point`.
    ///
    /// Only acts in [`Phase::Playing`]. The first clickable tile containing the
    /// point is revealed; picking the expected number marks it solved, picking
    /// any other number flags it and ends the round.
    pub fn handle_click(&mut self, point: Point) -> ClickOutcome {
        if !self.phase.is_playing() {
            return ClickOutcome::Ignored;
        }
        let Some(index) = self.grid.hit_test(point) else {
            return ClickOutcome::Ignored;
        };
        let expected = self.next_number;
        let Some(tile) = self.grid.tile_mut(index) else {
            return ClickOutcome::Ignored;
        };
        let Some(found) = tile.value() else {
            return ClickOutcome::Ignored;
        };

        tile.reveal();
        if found != expected {
            tile.mark_wrong();
            log::info!("picked {found} instead of {expected} on level {}", self.level);
            self.set_phase(Phase::GameOver);
            return ClickOutcome::Mistake { expected, found };
        }

        tile.mark_solved();
        self.next_number += 1;
        if self.grid.is_complete() {
            return self.complete_level();
        }
        ClickOutcome::Correct { number: found }
    }

    /// Handles the restart input.
    ///
    /// In [`Phase::LevelUp`] and [`Phase::GameOver`] a fresh grid is built for
    /// the current level (already advanced after a level-up, unchanged after a
    /// game over) and the memorize countdown restarts at `now`. Returns `false`
    /// and does nothing in any other phase.
    pub fn handle_restart(&mut self, now: Instant) -> bool {
        if !self.phase.accepts_restart() {
            return false;
        }
        self.setup(now);
        true
    }

    /// Captures the state needed for rendering.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> GameSnapshot {
        let tiles = self
            .grid
            .tiles()
            .iter()
            .map(|tile| TileView {
                rect: tile.rect(),
                number: tile.displayed_number(),
                mark: tile.mark(),
                revealed: tile.is_revealed(),
            })
            .collect();
        GameSnapshot {
            phase: self.phase,
            level: self.level,
            remaining_memorize_secs: self
                .phase
                .is_memorize()
                .then(|| self.timer.remaining_secs(now)),
            tiles,
        }
    }

    fn setup(&mut self, now: Instant) {
        self.set_phase(Phase::Setup);
        self.grid = self.generator.generate(self.level, &mut self.shuffler);
        self.next_number = 1;
        self.enter_memorize(now);
    }

    fn enter_memorize(&mut self, now: Instant) {
        debug_assert!(self.phase.is_setup());
        self.timer = MemorizeTimer::start(now, self.level.memorize_duration());
        self.grid.reveal_all();
        self.set_phase(Phase::Memorize);
    }

    fn complete_level(&mut self) -> ClickOutcome {
        if let Some(next) = self.level.next() {
            log::info!("level {} cleared, advancing to {next}", self.level);
            self.level = next;
            self.set_phase(Phase::LevelUp);
            ClickOutcome::LevelCleared
        } else {
            log::info!("final level {} cleared", self.level);
            self.set_phase(Phase::GameOver);
            ClickOutcome::AllLevelsCleared
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        log::debug!("phase {} -> {phase} (level {})", self.phase, self.level);
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ayumu_core::{BoardLayout, TileMark};
    use proptest::prelude::*;

    use super::*;

    /// Keeps values ascending: numbered tiles first, fillers last.
    #[derive(Debug)]
    struct IdentityShuffler;

    impl TileShuffler for IdentityShuffler {
        fn shuffle(&mut self, _values: &mut [Option<u8>]) {}
    }

    /// Puts fillers first and numbers in descending order.
    #[derive(Debug)]
    struct ReverseShuffler;

    impl TileShuffler for ReverseShuffler {
        fn shuffle(&mut self, values: &mut [Option<u8>]) {
            values.reverse();
        }
    }

    fn new_game<S: TileShuffler>(shuffler: S, level: u8, now: Instant) -> Game<S> {
        let generator = GridGenerator::new(BoardLayout::default());
        Game::new(generator, shuffler, Level::from_number(level), now)
    }

    fn playing_game<S: TileShuffler>(shuffler: S, level: u8, t0: Instant) -> Game<S> {
        let mut game = new_game(shuffler, level, t0);
        game.tick(t0 + Duration::from_secs(8));
        assert_eq!(game.phase(), Phase::Playing);
        game
    }

    #[allow(clippy::cast_precision_loss)]
    fn center_of<S: TileShuffler>(game: &Game<S>, index: usize) -> Point {
        let rect = game.grid().tiles()[index].rect();
        let half = rect.size() as f32 / 2.0;
        Point::new(rect.x() as f32 + half, rect.y() as f32 + half)
    }

    fn index_of<S: TileShuffler>(game: &Game<S>, value: Option<u8>) -> usize {
        game.grid()
            .tiles()
            .iter()
            .position(|tile| tile.value() == value)
            .unwrap()
    }

    fn click_number<S: TileShuffler>(game: &mut Game<S>, number: u8) -> ClickOutcome {
        let point = center_of(game, index_of(game, Some(number)));
        game.handle_click(point)
    }

    fn click_filler<S: TileShuffler>(game: &mut Game<S>) -> ClickOutcome {
        let point = center_of(game, index_of(game, None));
        game.handle_click(point)
    }

    #[test]
    fn test_new_game_enters_memorize_with_all_revealed() {
        let t0 = Instant::now();
        let game = new_game(IdentityShuffler, 1, t0);
        assert_eq!(game.phase(), Phase::Memorize);
        assert_eq!(game.next_number(), 1);
        assert_eq!(game.level(), Level::FIRST);
        assert!(game.grid().tiles().iter().all(|t| t.is_revealed()));
        assert_eq!(game.timer().started_at(), t0);
    }

    #[test]
    fn test_tick_waits_for_memorize_duration() {
        let t0 = Instant::now();
        let mut game = new_game(IdentityShuffler, 3, t0);

        assert_eq!(game.tick(t0 + Duration::from_millis(2999)), None);
        assert_eq!(game.phase(), Phase::Memorize);

        assert_eq!(game.tick(t0 + Duration::from_secs(3)), Some(Phase::Playing));
        assert!(game.grid().tiles().iter().all(|t| !t.is_revealed()));

        assert_eq!(game.tick(t0 + Duration::from_secs(30)), None);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_memorize_duration_follows_level() {
        let t0 = Instant::now();
        for (level, secs) in (1..=9).zip([2, 2, 3, 3, 5, 5, 8, 8, 8]) {
            let mut game = new_game(IdentityShuffler, level, t0);
            let almost = t0 + Duration::from_secs(secs) - Duration::from_millis(1);
            assert_eq!(game.tick(almost), None, "level {level}");
            assert_eq!(
                game.tick(t0 + Duration::from_secs(secs)),
                Some(Phase::Playing),
                "level {level}"
            );
        }
    }

    #[test]
    fn test_snapshot_countdown_only_while_memorizing() {
        let t0 = Instant::now();
        let mut game = new_game(IdentityShuffler, 5, t0);

        let snapshot = game.snapshot(t0);
        assert_eq!(snapshot.remaining_memorize_secs, Some(5));
        assert_eq!(snapshot.tiles.len(), 9);
        assert!(snapshot.tiles.iter().all(|t| t.revealed && t.number.is_some()));

        let snapshot = game.snapshot(t0 + Duration::from_millis(1500));
        assert_eq!(snapshot.remaining_memorize_secs, Some(3));

        game.tick(t0 + Duration::from_secs(5));
        let snapshot = game.snapshot(t0 + Duration::from_secs(5));
        assert_eq!(snapshot.phase, Phase::Playing);
        assert_eq!(snapshot.remaining_memorize_secs, None);
        assert!(snapshot.tiles.iter().all(|t| t.number.is_none()));
    }

    #[test]
    fn test_level_one_cleared_leads_to_level_up() {
        let t0 = Instant::now();
        let mut game = playing_game(ReverseShuffler, 1, t0);

        assert_eq!(click_number(&mut game, 1), ClickOutcome::Correct { number: 1 });
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.next_number(), 2);

        assert_eq!(click_number(&mut game, 2), ClickOutcome::LevelCleared);
        assert_eq!(game.phase(), Phase::LevelUp);
        assert_eq!(game.level(), Level::from_number(2));
        assert!(game.grid().tiles().iter().all(|t| t.mark() == TileMark::Correct));
    }

    #[test]
    fn test_out_of_order_click_ends_round() {
        let t0 = Instant::now();
        let mut game = playing_game(IdentityShuffler, 3, t0);

        assert!(click_number(&mut game, 1).is_correct());
        assert_eq!(
            click_number(&mut game, 3),
            ClickOutcome::Mistake {
                expected: 2,
                found: 3
            }
        );
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.level(), Level::from_number(3));

        let wrong = &game.grid().tiles()[index_of(&game, Some(3))];
        assert!(wrong.is_revealed());
        assert_eq!(wrong.mark(), TileMark::Wrong);
        assert!(!wrong.is_solved());
    }

    #[test]
    fn test_first_click_wrong_ends_round() {
        let t0 = Instant::now();
        let mut game = playing_game(IdentityShuffler, 9, t0);
        assert!(click_number(&mut game, 9).is_mistake());
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn test_filler_or_empty_click_is_noop() {
        let t0 = Instant::now();
        let mut game = playing_game(IdentityShuffler, 6, t0);
        let before = game.grid().clone();

        assert_eq!(click_filler(&mut game), ClickOutcome::Ignored);
        assert_eq!(game.handle_click(Point::new(5.0, 5.0)), ClickOutcome::Ignored);
        assert_eq!(game.handle_click(Point::new(-50.0, 900.0)), ClickOutcome::Ignored);

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.next_number(), 1);
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn test_solved_tile_cannot_be_clicked_again() {
        let t0 = Instant::now();
        let mut game = playing_game(IdentityShuffler, 2, t0);
        assert!(click_number(&mut game, 1).is_correct());
        assert_eq!(click_number(&mut game, 1), ClickOutcome::Ignored);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.next_number(), 2);
    }

    #[test]
    fn test_clicks_ignored_outside_playing() {
        let t0 = Instant::now();

        let mut game = new_game(IdentityShuffler, 2, t0);
        let before = game.grid().clone();
        assert_eq!(click_number(&mut game, 1), ClickOutcome::Ignored);
        assert_eq!(game.grid(), &before);
        assert_eq!(game.next_number(), 1);

        let mut game = playing_game(IdentityShuffler, 1, t0);
        click_number(&mut game, 1);
        click_number(&mut game, 2);
        assert_eq!(game.phase(), Phase::LevelUp);
        let before = game.grid().clone();
        assert_eq!(click_number(&mut game, 1), ClickOutcome::Ignored);
        assert_eq!(game.grid(), &before);

        let mut game = playing_game(IdentityShuffler, 4, t0);
        click_number(&mut game, 2);
        assert_eq!(game.phase(), Phase::GameOver);
        let before = game.grid().clone();
        assert_eq!(click_number(&mut game, 1), ClickOutcome::Ignored);
        assert_eq!(game.grid(), &before);
        assert_eq!(game.next_number(), 1);
    }

    #[test]
    fn test_last_level_ends_in_game_over() {
        let t0 = Instant::now();
        let mut game = playing_game(ReverseShuffler, 9, t0);

        for number in 1..=8 {
            assert_eq!(click_filler(&mut game), ClickOutcome::Ignored);
            assert_eq!(click_number(&mut game, number), ClickOutcome::Correct { number });
        }
        assert_eq!(click_filler(&mut game), ClickOutcome::Ignored);
        assert_eq!(click_number(&mut game, 9), ClickOutcome::AllLevelsCleared);
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.level(), Level::LAST);
    }

    #[test]
    fn test_restart_after_game_over_keeps_level() {
        let t0 = Instant::now();
        let mut game = playing_game(IdentityShuffler, 3, t0);
        click_number(&mut game, 2);
        assert_eq!(game.phase(), Phase::GameOver);

        let t1 = t0 + Duration::from_secs(20);
        assert!(game.handle_restart(t1));
        assert_eq!(game.phase(), Phase::Memorize);
        assert_eq!(game.level(), Level::from_number(3));
        assert_eq!(game.next_number(), 1);
        assert_eq!(game.timer().started_at(), t1);
        assert!(
            game.grid()
                .tiles()
                .iter()
                .all(|t| t.is_revealed() && t.mark() == TileMark::Plain)
        );
    }

    #[test]
    fn test_restart_after_level_up_builds_next_level() {
        let t0 = Instant::now();
        let mut game = playing_game(IdentityShuffler, 1, t0);
        click_number(&mut game, 1);
        click_number(&mut game, 2);
        assert_eq!(game.phase(), Phase::LevelUp);

        let t1 = t0 + Duration::from_secs(20);
        assert!(game.handle_restart(t1));
        assert_eq!(game.phase(), Phase::Memorize);
        assert_eq!(game.level(), Level::from_number(2));
        assert_eq!(game.grid().tiles().len(), 4);

        assert_eq!(game.tick(t1 + Duration::from_secs(2)), Some(Phase::Playing));
    }

    #[test]
    fn test_restart_ignored_while_memorizing_or_playing() {
        let t0 = Instant::now();
        let mut game = new_game(IdentityShuffler, 2, t0);
        assert!(!game.handle_restart(t0 + Duration::from_secs(1)));
        assert_eq!(game.timer().started_at(), t0);

        game.tick(t0 + Duration::from_secs(2));
        click_number(&mut game, 1);
        assert!(!game.handle_restart(t0 + Duration::from_secs(3)));
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.next_number(), 2);
    }

    #[test]
    fn test_snapshot_reflects_marks_after_mistake() {
        let t0 = Instant::now();
        let mut game = playing_game(IdentityShuffler, 6, t0);
        click_number(&mut game, 1);
        click_number(&mut game, 3);

        let snapshot = game.snapshot(t0);
        assert_eq!(snapshot.phase, Phase::GameOver);
        assert_eq!(snapshot.tiles[0].mark, TileMark::Correct);
        assert_eq!(snapshot.tiles[0].number, Some(1));
        assert_eq!(snapshot.tiles[1].number, None);
        assert_eq!(snapshot.tiles[2].mark, TileMark::Wrong);
        assert_eq!(snapshot.tiles[2].number, Some(3));
        assert_eq!(snapshot.tiles[11].mark, TileMark::Filler);
    }

    proptest! {
        #[test]
        fn prop_in_order_clicks_clear_any_level(number in 1u8..=9, seed in any::<u64>()) {
            let t0 = Instant::now();
            let mut game = playing_game(SeededShuffler::new(seed), number, t0);
            let count = game.grid().shape().numbered_count();
            for n in 1..count {
                prop_assert_eq!(click_number(&mut game, n), ClickOutcome::Correct { number: n });
            }
            let last = click_number(&mut game, count);
            if number == 9 {
                prop_assert_eq!(last, ClickOutcome::AllLevelsCleared);
                prop_assert_eq!(game.phase(), Phase::GameOver);
                prop_assert_eq!(game.level(), Level::LAST);
            } else {
                prop_assert_eq!(last, ClickOutcome::LevelCleared);
                prop_assert_eq!(game.phase(), Phase::LevelUp);
                prop_assert_eq!(game.level().number(), number + 1);
            }
        }

        #[test]
        fn prop_any_out_of_order_click_is_game_over(
            number in 2u8..=9,
            seed in any::<u64>(),
            progress in 0u8..8,
            skip in 1u8..8,
        ) {
            let t0 = Instant::now();
            let mut game = playing_game(SeededShuffler::new(seed), number, t0);
            let count = game.grid().shape().numbered_count();
            let progress = progress % (count - 1);
            for n in 1..=progress {
                click_number(&mut game, n);
            }
            let remaining = count - progress;
            let wrong = progress + 1 + (skip % (remaining - 1)) + 1;
            let outcome = click_number(&mut game, wrong);
            prop_assert!(outcome.is_mistake(), "{outcome:?}");
            prop_assert_eq!(game.phase(), Phase::GameOver);
            prop_assert_eq!(game.level().number(), number);
        }
    }
}
