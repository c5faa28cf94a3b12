//! The puzzle controller: one owner for level, tiles and the player's guess.

use crate::assets;
use crate::attribute::{Attribute, ValueIndex};
use crate::combination::{attempt, AttemptOutcome, Combination, Solution};
use crate::config::PuzzleConfig;
use crate::layout::{InputTarget, MenuAction, Region, RegionId};
use crate::level::{normalize_level, Level, LevelBand, LevelGenerator};
use crate::rng::{RandomSource, SimpleRng};
use crate::tile::{is_complete, MysteryTile, TileView, TARGET_TILE};
use serde::Serialize;
use std::time::Duration;

/// Growth of the success image per tick once the level is solved
const CELEBRATION_GROWTH: f64 = 1.01;

/// Wobble step and limit for the tile awaiting an answer, in degrees
const WOBBLE_STEP: f64 = 5.0;
const WOBBLE_LIMIT: f64 = 10.0;

/// Permission to advance past a solved level.
///
/// Issued when a level is completed. It only works while that level is
/// still loaded; any level load in between makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    generation: u64,
    next_level: usize,
    delay: Duration,
}

impl AdvanceTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Level the ticket loads
    pub fn next_level(&self) -> usize {
        self.next_level
    }

    /// How long the front end should wait before firing it
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Result of clicking a mystery tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptResult {
    /// The tile is not hidden; nothing to try
    Ignored,
    /// Wrong guess; the combination was cleared
    Mismatched,
    /// Right guess; carries a ticket when this solved the level
    Matched { advance: Option<AdvanceTicket> },
}

/// Result of applying an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Selected(Attribute, ValueIndex),
    Attempt(AttemptResult),
    LevelChanged(usize),
    /// Menu actions the front end handles itself (home, help, about)
    FrontEnd(MenuAction),
}

/// What the combination preview shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// The try-again image replaces the shape until the next pick
    pub try_again: bool,
    pub shape: Option<ValueIndex>,
    pub color: Option<ValueIndex>,
    pub expression: Option<ValueIndex>,
}

/// Serializable snapshot for renderers and JSON export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PuzzleView {
    pub level: usize,
    pub band: LevelBand,
    pub tiles: Vec<TileView>,
    pub combination: [i8; 3],
    pub try_again: bool,
    pub complete: bool,
    pub success_image: &'static str,
    pub generation: u64,
}

/// All mutable puzzle state, owned by a single controller
pub struct PuzzleState<R = SimpleRng> {
    config: PuzzleConfig,
    generator: LevelGenerator<R>,
    level: Level,
    tiles: Vec<MysteryTile>,
    combination: Combination,
    try_again: bool,
    complete: bool,
    /// Bumped on every level load; stale advance tickets compare against it
    generation: u64,
    success_image: &'static str,
    frame: u32,
    celebration_scale: f64,
    wobble: f64,
    wobble_step: f64,
}

impl PuzzleState<SimpleRng> {
    /// Start a session; seeded from the config or the platform
    pub fn new(config: PuzzleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SimpleRng::with_seed(seed),
            None => SimpleRng::new(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> PuzzleState<R> {
    /// Start a session drawing from `rng`
    pub fn with_rng(config: PuzzleConfig, rng: R) -> Self {
        let mut generator = LevelGenerator::with_rng(rng);
        let level = generator.generate(config.start_level);
        let success_image = Self::draw_success_image(&mut generator);
        let tiles = level.tiles();

        Self {
            config,
            generator,
            level,
            tiles,
            combination: Combination::new(),
            try_again: false,
            complete: false,
            generation: 0,
            success_image,
            frame: 0,
            celebration_scale: 1.0,
            wobble: 0.0,
            wobble_step: WOBBLE_STEP,
        }
    }

    fn draw_success_image(generator: &mut LevelGenerator<R>) -> &'static str {
        let pick = generator.rng_mut().next_index(assets::SUCCESS_IMAGES.len());
        assets::SUCCESS_IMAGES[pick]
    }

    /// Generate and show a level. Out-of-range requests wrap around.
    pub fn load_level(&mut self, requested: i64) -> usize {
        self.level = self.generator.generate(requested);
        self.tiles = self.level.tiles();
        self.combination.clear();
        self.try_again = false;
        self.complete = false;
        self.generation = self.generation.wrapping_add(1);
        self.success_image = Self::draw_success_image(&mut self.generator);
        self.celebration_scale = 1.0;
        self.wobble = 0.0;
        self.wobble_step = WOBBLE_STEP;
        self.level.index()
    }

    pub fn next_level(&mut self) -> usize {
        self.load_level(self.level.index() as i64 + 1)
    }

    pub fn previous_level(&mut self) -> usize {
        self.load_level(self.level.index() as i64 - 1)
    }

    /// Set one attribute of the guess, clearing a showing try-again marker
    pub fn player_select(&mut self, attribute: Attribute, value: ValueIndex) {
        self.try_again = false;
        self.combination.select(attribute, value);
    }

    /// Try the current combination on the question-mark tile
    pub fn player_attempt_target(&mut self) -> AttemptResult {
        self.attempt_tile(TARGET_TILE)
    }

    /// Try the current combination on a tile. Only hidden tiles respond.
    pub fn attempt_tile(&mut self, index: usize) -> AttemptResult {
        let Some(tile) = self.tiles.get(index) else {
            return AttemptResult::Ignored;
        };
        if !tile.is_unknown() {
            return AttemptResult::Ignored;
        }

        match attempt(&self.combination, tile.solution()) {
            AttemptOutcome::Mismatched => {
                self.combination.clear();
                self.try_again = true;
                AttemptResult::Mismatched
            }
            AttemptOutcome::Matched => {
                self.tiles[index].reveal();
                AttemptResult::Matched {
                    advance: self.check_complete(),
                }
            }
        }
    }

    /// Recompute completion; issues a ticket the first time it flips
    fn check_complete(&mut self) -> Option<AdvanceTicket> {
        if self.complete || !is_complete(&self.tiles) {
            return None;
        }
        self.complete = true;
        self.wobble = 0.0;
        self.pending_advance()
    }

    /// The advance ticket for the loaded level, once it is solved
    pub fn pending_advance(&self) -> Option<AdvanceTicket> {
        self.complete.then(|| AdvanceTicket {
            generation: self.generation,
            next_level: normalize_level(self.level.index() as i64 + 1),
            delay: self.config.advance_delay(),
        })
    }

    /// Advance if the ticket still belongs to the loaded, solved level.
    /// Returns whether a new level was loaded.
    pub fn fire_advance(&mut self, ticket: AdvanceTicket) -> bool {
        if ticket.generation != self.generation || !self.complete {
            return false;
        }
        self.load_level(ticket.next_level as i64);
        true
    }

    /// Route an input event from the dispatch table
    pub fn apply(&mut self, target: InputTarget) -> InputOutcome {
        match target {
            InputTarget::Shape(value) => self.select_outcome(Attribute::Shape, value),
            InputTarget::Color(value) => self.select_outcome(Attribute::Color, value),
            InputTarget::Expression(value) => self.select_outcome(Attribute::Expression, value),
            InputTarget::Target(index) => InputOutcome::Attempt(self.attempt_tile(index)),
            InputTarget::Menu(MenuAction::Previous) => {
                InputOutcome::LevelChanged(self.previous_level())
            }
            InputTarget::Menu(MenuAction::Next) => InputOutcome::LevelChanged(self.next_level()),
            InputTarget::Menu(action) => InputOutcome::FrontEnd(action),
        }
    }

    fn select_outcome(&mut self, attribute: Attribute, value: ValueIndex) -> InputOutcome {
        self.player_select(attribute, value);
        InputOutcome::Selected(attribute, value)
    }

    /// Cosmetic heartbeat
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if self.complete {
            self.celebration_scale *= CELEBRATION_GROWTH;
        } else if self.tiles.get(TARGET_TILE).is_some_and(MysteryTile::is_unknown) {
            self.wobble += self.wobble_step;
            if self.wobble.abs() > WOBBLE_LIMIT {
                self.wobble_step = -self.wobble_step;
            }
        }
    }

    /// Whether a slot should grow under the pointer right now
    pub fn is_hoverable(&self, region: RegionId, slot: usize) -> bool {
        let region = Region::get(region);
        if !region.hoverable(slot) {
            return false;
        }
        match region.id {
            RegionId::Mystery => self.tiles.get(slot).is_some_and(MysteryTile::is_unknown),
            _ => true,
        }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }
    pub fn level(&self) -> &Level {
        &self.level
    }
    pub fn tiles(&self) -> &[MysteryTile] {
        &self.tiles
    }
    pub fn combination(&self) -> &Combination {
        &self.combination
    }
    pub fn try_again(&self) -> bool {
        self.try_again
    }
    pub fn is_complete(&self) -> bool {
        self.complete
    }
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn success_image(&self) -> &'static str {
        self.success_image
    }
    pub fn frame(&self) -> u32 {
        self.frame
    }
    pub fn celebration_scale(&self) -> f64 {
        self.celebration_scale
    }
    /// Rotation of the tile awaiting an answer, in degrees
    pub fn wobble_angle(&self) -> f64 {
        self.wobble
    }

    /// Level number as shown to the player
    pub fn display_level(&self) -> usize {
        self.level.display_number()
    }

    pub fn tile_views(&self) -> Vec<TileView> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| TileView::of(i, tile))
            .collect()
    }

    pub fn preview(&self) -> Preview {
        Preview {
            try_again: self.try_again,
            shape: self.combination.get(Attribute::Shape),
            color: self.combination.get(Attribute::Color),
            expression: self.combination.get(Attribute::Expression),
        }
    }

    /// Solution of a revealed tile; hidden tiles give nothing away
    pub fn revealed_solution(&self, index: usize) -> Option<&Solution> {
        self.tiles
            .get(index)
            .filter(|tile| !tile.is_unknown())
            .map(MysteryTile::solution)
    }

    pub fn to_view(&self) -> PuzzleView {
        PuzzleView {
            level: self.display_level(),
            band: self.level.band(),
            tiles: self.tile_views(),
            combination: self.combination.as_sentinel(),
            try_again: self.try_again,
            complete: self.complete,
            success_image: self.success_image,
            generation: self.generation,
        }
    }
}

impl<R> std::fmt::Debug for PuzzleState<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleState")
            .field("level", &self.level.index())
            .field("combination", &self.combination)
            .field("try_again", &self.try_again)
            .field("complete", &self.complete)
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TILE_COUNT;

    fn seeded(level: i64) -> PuzzleState {
        PuzzleState::new(PuzzleConfig::default().with_seed(17).with_start_level(level))
    }

    fn select_all(state: &mut PuzzleState, solution: Solution) {
        state.player_select(Attribute::Shape, solution.shape);
        state.player_select(Attribute::Color, solution.color);
        state.player_select(Attribute::Expression, solution.expression);
    }

    /// Any triple that differs from `solution`
    fn wrong(solution: Solution) -> Solution {
        let shape = ValueIndex::ALL[(solution.shape.as_usize() + 1) % 4];
        Solution::new(shape, solution.color, solution.expression)
    }

    #[test]
    fn test_new_state() {
        let state = seeded(0);
        assert_eq!(state.level().index(), 0);
        assert_eq!(state.display_level(), 1);
        assert!(state.combination().is_empty());
        assert!(!state.try_again());
        assert!(!state.is_complete());
        assert_eq!(state.tiles().len(), TILE_COUNT);
        assert!(state.tiles()[TARGET_TILE].is_unknown());
        assert!(assets::SUCCESS_IMAGES.contains(&state.success_image()));
    }

    #[test]
    fn test_mismatch_resets_and_flags() {
        let mut state = seeded(0);
        let target = *state.level().target_solution();
        select_all(&mut state, wrong(target));

        assert_eq!(state.player_attempt_target(), AttemptResult::Mismatched);
        assert!(state.combination().is_empty());
        assert!(state.try_again());
        assert!(state.tiles()[TARGET_TILE].is_unknown());

        // The next pick clears the marker
        state.player_select(Attribute::Color, target.color);
        assert!(!state.try_again());
    }

    #[test]
    fn test_incomplete_selection_mismatches() {
        let mut state = seeded(3);
        let target = *state.level().target_solution();
        state.player_select(Attribute::Shape, target.shape);
        assert_eq!(state.player_attempt_target(), AttemptResult::Mismatched);
    }

    #[test]
    fn test_match_completes_and_issues_ticket() {
        let mut state = seeded(6);
        let target = *state.level().target_solution();
        select_all(&mut state, target);

        let AttemptResult::Matched { advance: Some(ticket) } = state.player_attempt_target() else {
            panic!("expected a completing match");
        };
        assert!(state.is_complete());
        assert!(!state.tiles()[TARGET_TILE].is_unknown());
        assert_eq!(state.revealed_solution(TARGET_TILE), Some(&target));
        assert_eq!(ticket.next_level(), 0);
        assert_eq!(ticket.delay(), Duration::from_secs(3));

        assert!(state.fire_advance(ticket));
        assert_eq!(state.level().index(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_revealed_tiles_ignore_clicks() {
        let mut state = seeded(1);
        assert_eq!(state.attempt_tile(0), AttemptResult::Ignored);
        assert_eq!(state.attempt_tile(TILE_COUNT + 3), AttemptResult::Ignored);
        assert!(!state.try_again());
    }

    #[test]
    fn test_stale_ticket_is_noop() {
        let mut state = seeded(2);
        let target = *state.level().target_solution();
        select_all(&mut state, target);
        let AttemptResult::Matched { advance: Some(ticket) } = state.player_attempt_target() else {
            panic!("expected a completing match");
        };

        // The player moves on before the timer fires
        state.next_level();
        assert_eq!(state.level().index(), 3);
        assert!(!state.fire_advance(ticket));
        assert_eq!(state.level().index(), 3);
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut state = seeded(5);
        let target = *state.level().target_solution();
        select_all(&mut state, target);
        let AttemptResult::Matched { advance: Some(ticket) } = state.player_attempt_target() else {
            panic!("expected a completing match");
        };

        assert!(state.fire_advance(ticket));
        assert_eq!(state.level().index(), 6);
        assert!(!state.fire_advance(ticket));
        assert_eq!(state.level().index(), 6);
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut state = seeded(0);
        assert_eq!(
            state.apply(InputTarget::Menu(MenuAction::Previous)),
            InputOutcome::LevelChanged(6)
        );
        assert_eq!(
            state.apply(InputTarget::Menu(MenuAction::Next)),
            InputOutcome::LevelChanged(0)
        );
        assert_eq!(
            state.apply(InputTarget::Menu(MenuAction::Help)),
            InputOutcome::FrontEnd(MenuAction::Help)
        );
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_apply_selection() {
        let mut state = seeded(0);
        let value = ValueIndex::ALL[2];
        assert_eq!(
            state.apply(InputTarget::Expression(value)),
            InputOutcome::Selected(Attribute::Expression, value)
        );
        assert_eq!(state.combination().get(Attribute::Expression), Some(value));
        assert_eq!(state.preview().expression, Some(value));
    }

    #[test]
    fn test_tick_wobbles_then_celebrates() {
        let mut state = seeded(0);
        let angles: Vec<f64> = (0..6)
            .map(|_| {
                state.tick();
                state.wobble_angle()
            })
            .collect();
        assert_eq!(angles, vec![5.0, 10.0, 15.0, 10.0, 5.0, 0.0]);

        let target = *state.level().target_solution();
        select_all(&mut state, target);
        state.player_attempt_target();
        state.tick();
        state.tick();
        assert!((state.celebration_scale() - 1.01 * 1.01).abs() < 1e-12);
        assert_eq!(state.frame(), 8);
    }

    #[test]
    fn test_level_load_restarts_wobble() {
        let mut state = seeded(0);
        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(state.wobble_angle(), 15.0);

        state.load_level(1);
        assert_eq!(state.wobble_angle(), 0.0);
        state.tick();
        assert_eq!(state.wobble_angle(), 5.0);
    }

    #[test]
    fn test_hoverable_follows_tile_state() {
        let mut state = seeded(0);
        assert!(state.is_hoverable(RegionId::Mystery, TARGET_TILE));
        assert!(!state.is_hoverable(RegionId::Mystery, 0));
        assert!(state.is_hoverable(RegionId::Menu, 4));

        let target = *state.level().target_solution();
        select_all(&mut state, target);
        state.player_attempt_target();
        assert!(!state.is_hoverable(RegionId::Mystery, TARGET_TILE));
    }

    #[test]
    fn test_view_json() {
        let state = seeded(0);
        let json = serde_json::to_value(state.to_view()).unwrap();
        assert_eq!(json["level"], 1);
        assert_eq!(json["combination"], serde_json::json!([-1, -1, -1]));
        assert_eq!(json["tiles"][11]["state"], "unknown");
        assert_eq!(json["complete"], false);
    }
}
