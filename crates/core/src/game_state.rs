//! Game state module - rules, scoring and per-tick orchestration
//!
//! Owns the falling-object grid, the player and the static scenery, and
//! threads them through every tick:
//!
//! 1. input updates posture and facing (mirroring all player frames on a turn)
//! 2. the basket cell follows the marker glyph in the active player frame
//! 3. processed flags are reset on their own cadence
//! 4. a new egg is dropped on a random emitter when the spawn timer fires
//! 5. one simulation pass runs
//! 6. the spawn speed ramps up, and three smashes end the game
//!
//! Composition into a [`Screen`] is a separate read-only call.

use crate::entity::Entity;
use crate::grid::{Cell, Egg, EggGrid};
use crate::rng::SimpleRng;
use crate::screen::Screen;
use crate::sim;
use crate::sprite::LoadError;
use crate::types::*;

/// Texture sources for every entity in the scene, in the texture file format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSet {
    pub player_down: String,
    pub player_up: String,
    pub tray_upper: String,
    pub tray_lower: String,
    pub ground: String,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Emitter that received a new egg
    pub spawned: Option<(usize, usize)>,
    pub caught: u32,
    /// An egg smashed; the caller should pause for [`SMASH_PAUSE_MS`]
    pub smashed: bool,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: EggGrid,
    player: Entity,
    trays: Vec<Entity>,
    ground: Entity,
    facing: Facing,
    posture: Posture,
    score: u32,
    smashed: u32,
    spawn_speed: u32,
    tick: u64,
    game_over: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Build every entity from `textures` and lay out the scene.
    ///
    /// Fails if any texture is malformed, if a sprite would not fit inside
    /// the grid at its fixed position, or if a player frame lacks the basket
    /// marker.
    pub fn new(textures: &TextureSet, seed: u32) -> Result<Self, LoadError> {
        let mut player = Entity::builder()
            .frame(Posture::Down.as_str(), textures.player_down.as_str())
            .frame(Posture::Up.as_str(), textures.player_up.as_str())
            .build()?;
        let player_x = (GRID_WIDTH / 2).saturating_sub(player.compose(0).width() / 2);
        player.move_to(player_x, PLAYER_ROW);
        for frame in player.frames() {
            if frame.sprite.find(BASKET_MARKER).is_none() {
                return Err(LoadError::MissingMarker {
                    frame: frame.name.clone(),
                    marker: BASKET_MARKER,
                });
            }
        }
        ensure_fits("player", &player)?;

        let mut trays = Vec::with_capacity(TRAY_POSITIONS.len());
        for (i, &(x, y)) in TRAY_POSITIONS.iter().enumerate() {
            let texture = if i % 2 == 0 {
                &textures.tray_upper
            } else {
                &textures.tray_lower
            };
            let mut tray = Entity::builder()
                .at(x, y)
                .frame("tray", texture.as_str())
                .build()?;
            if x >= GRID_WIDTH / 2 {
                tray.mirror();
            }
            ensure_fits("tray", &tray)?;
            trays.push(tray);
        }

        let ground = Entity::builder()
            .at(GROUND_POSITION.0, GROUND_POSITION.1)
            .frame("ground", textures.ground.as_str())
            .build()?;
        ensure_fits("ground", &ground)?;

        let mut state = Self {
            grid: EggGrid::new(),
            player,
            trays,
            ground,
            facing: Facing::Left,
            posture: Posture::Down,
            score: 0,
            smashed: 0,
            spawn_speed: INITIAL_SPAWN_SPEED,
            tick: 0,
            game_over: false,
            rng: SimpleRng::new(seed),
        };
        state.stamp_trays();
        state.sync_basket();
        Ok(state)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn smashed(&self) -> u32 {
        self.smashed
    }

    pub fn spawn_speed(&self) -> u32 {
        self.spawn_speed
    }

    /// Ticks since the game (or the last restart) began
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn posture(&self) -> Posture {
        self.posture
    }

    pub fn grid(&self) -> &EggGrid {
        &self.grid
    }

    /// Direct grid access for setting up scenarios.
    pub fn grid_mut(&mut self) -> &mut EggGrid {
        &mut self.grid
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn trays(&self) -> &[Entity] {
        &self.trays
    }

    pub fn ground(&self) -> &Entity {
        &self.ground
    }

    /// Advance the game by one tick. Does nothing once the game is over.
    pub fn tick(&mut self, input: InputSample) -> TickOutcome {
        if self.game_over {
            return TickOutcome {
                game_over: true,
                ..TickOutcome::default()
            };
        }

        let mut outcome = TickOutcome::default();

        self.apply_input(input);
        self.sync_basket();

        if self.tick % PROCESSED_RESET_EVERY_TICKS == 0 {
            self.grid.clear_processed();
        }

        if self.tick % u64::from(self.spawn_speed) == 0 {
            outcome.spawned = Some(self.spawn_egg());
        }

        if self.tick % EGG_STEP_EVERY_TICKS == 0 {
            let report = sim::step(&mut self.grid);
            outcome.caught = report.caught_count();
            if outcome.caught > 0 {
                self.score = self.score.saturating_add(outcome.caught);
                log::debug!("caught {} egg(s), score {}", outcome.caught, self.score);
            }
            if let Some((x, y)) = report.smashed {
                self.smashed += 1;
                self.spawn_speed = INITIAL_SPAWN_SPEED;
                outcome.smashed = true;
                log::info!(
                    "egg smashed at ({x}, {y}), {} egg(s) cleared, {} smashed so far",
                    report.cleared,
                    self.smashed
                );
            }
        }

        if self.tick % SPAWN_RAMP_EVERY_TICKS == 0 && self.spawn_speed > SPAWN_SPEED_FLOOR {
            self.spawn_speed -= 1;
        }

        if self.smashed >= GAME_OVER_SMASHES {
            self.game_over = true;
            log::info!("game over with score {}", self.score);
        }
        outcome.game_over = self.game_over;

        self.tick += 1;
        outcome
    }

    /// Reset grid, counters, spawn speed and the player's pose.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.stamp_trays();
        self.score = 0;
        self.smashed = 0;
        self.spawn_speed = INITIAL_SPAWN_SPEED;
        self.tick = 0;
        self.game_over = false;
        if self.facing != Facing::Left {
            self.player.mirror();
        }
        self.facing = Facing::Left;
        self.posture = Posture::Down;
        self.sync_basket();
        log::debug!("game restarted");
    }

    /// Composite the whole frame: trays, ground, player, eggs, then overlays.
    pub fn compose(&self, screen: &mut Screen) {
        screen.clear();
        for tray in &self.trays {
            screen.blit(tray, 0);
        }
        screen.blit(&self.ground, 0);
        screen.blit(&self.player, self.posture.frame_index());
        screen.draw_eggs(&self.grid);

        let score = format!("{SCORE_LABEL}{}", self.score);
        screen.draw_text(GRID_WIDTH - score.chars().count(), 0, &score);

        let stride = SMASHED_EGG.chars().count() + 1;
        for i in 0..self.smashed.min(GAME_OVER_SMASHES) as usize {
            screen.draw_text(stride * i + 1, 0, SMASHED_EGG);
        }

        if self.game_over {
            let x = GRID_WIDTH / 2 - GAME_OVER_TEXT.chars().count() / 2;
            screen.draw_text(x, GRID_HEIGHT / 2, GAME_OVER_TEXT);
        }
    }

    fn apply_input(&mut self, input: InputSample) {
        self.posture = input.posture(self.posture);
        let facing = input.facing(self.facing);
        if facing != self.facing {
            self.player.mirror();
            self.facing = facing;
        }
    }

    fn sync_basket(&mut self) {
        self.grid.clear_basket();
        if let Some((x, y)) = self
            .player
            .find_marker(self.posture.frame_index(), BASKET_MARKER)
        {
            self.grid.place_basket(x as i16, y as i16);
        }
    }

    /// New eggs start flagged as processed, so they rest on their emitter
    /// until the next flag reset.
    fn spawn_egg(&mut self) -> (usize, usize) {
        let (x, y) = *self.rng.pick(&EMITTERS);
        let mut egg = Egg::new(EGG_GLYPHS);
        egg.processed = true;
        self.grid.set(x as i16, y as i16, Cell::Egg(egg));
        log::debug!("egg spawned at ({x}, {y})");
        (x, y)
    }

    fn stamp_trays(&mut self) {
        for tray in &self.trays {
            self.grid.stamp(tray, 0);
        }
    }
}

fn ensure_fits(name: &str, entity: &Entity) -> Result<(), LoadError> {
    if entity.fits_within(GRID_WIDTH, GRID_HEIGHT) {
        Ok(())
    } else {
        Err(LoadError::OutOfBounds {
            entity: name.to_string(),
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
        })
    }
}
