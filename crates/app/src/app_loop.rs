use dungeon_core::{
    ActorState, Dungeon, DungeonGenerator, GenerationError, GeneratorConfig, ScreenSize, Vec2,
};
use macroquad::prelude::KeyCode;

pub const PLAYER_WIDTH: i32 = 32;
pub const PLAYER_HEIGHT: i32 = 48;
pub const PLAYER_MAX_HEALTH: i32 = 200;
/// Pixels per second.
pub const PLAYER_SPEED: f32 = 200.0;
/// Longest simulated step; slower frames are slowed down rather than skipped through.
pub const MAX_FRAME_DT: f32 = 0.05;

const MOVE_LEFT: [KeyCode; 2] = [KeyCode::A, KeyCode::Left];
const MOVE_RIGHT: [KeyCode; 2] = [KeyCode::D, KeyCode::Right];
const MOVE_UP: [KeyCode; 2] = [KeyCode::W, KeyCode::Up];
const MOVE_DOWN: [KeyCode; 2] = [KeyCode::S, KeyCode::Down];

/// Input gathered for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppInput {
    /// Keys held this frame, used for movement.
    pub keys_down: Vec<KeyCode>,
    /// Keys that went down this frame, used for toggles and commands.
    pub keys_pressed: Vec<KeyCode>,
}

/// Unit movement direction for the held keys; opposing keys cancel out.
pub fn movement_from_keys(keys_down: &[KeyCode]) -> Vec2 {
    let held = |keys: [KeyCode; 2]| keys.iter().any(|key| keys_down.contains(key));
    let mut axis = Vec2::default();
    if held(MOVE_LEFT) {
        axis.x -= 1.0;
    }
    if held(MOVE_RIGHT) {
        axis.x += 1.0;
    }
    if held(MOVE_UP) {
        axis.y -= 1.0;
    }
    if held(MOVE_DOWN) {
        axis.y += 1.0;
    }
    axis.normalized()
}

/// What happened during one `tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub room_changed: bool,
    pub player_died: bool,
    /// Seed of a dungeon generated this tick.
    pub regenerated: Option<u64>,
}

pub struct AppState {
    pub config: GeneratorConfig,
    pub dungeon: Dungeon,
    pub player: ActorState,
    pub debug_overlay: bool,
    pub deaths: u32,
}

impl AppState {
    /// Generates the first dungeon for `seed` and places the player in the start room.
    pub fn new(config: GeneratorConfig, seed: u64) -> Result<Self, GenerationError> {
        let config = GeneratorConfig { seed: Some(seed), ..config };
        let dungeon = DungeonGenerator::new(config).generate()?;
        let player = spawn_player(config.screen_size);
        Ok(Self { config, dungeon, player, debug_overlay: false, deaths: 0 })
    }

    pub fn seed(&self) -> u64 {
        self.dungeon.seed()
    }

    /// Replaces the dungeon with a freshly generated one and respawns the player.
    pub fn regenerate(&mut self, seed: u64) -> Result<(), GenerationError> {
        let config = GeneratorConfig { seed: Some(seed), ..self.config };
        self.dungeon = DungeonGenerator::new(config).generate()?;
        self.config = config;
        self.player = spawn_player(config.screen_size);
        tracing::info!("regenerated dungeon with seed {seed}");
        Ok(())
    }

    /// One frame: toggles, movement, room simulation, transitions, death.
    ///
    /// `fresh_seed` is only called when R asks for a new dungeon. K rebuilds the current seed.
    pub fn tick(
        &mut self,
        input: &AppInput,
        dt: f32,
        fresh_seed: impl FnOnce() -> u64,
    ) -> Result<TickReport, GenerationError> {
        let mut report = TickReport::default();

        if input.keys_pressed.contains(&KeyCode::F1) {
            self.debug_overlay = !self.debug_overlay;
        }
        if input.keys_pressed.contains(&KeyCode::R) {
            let seed = fresh_seed();
            self.regenerate(seed)?;
            report.regenerated = Some(seed);
            return Ok(report);
        }
        if input.keys_pressed.contains(&KeyCode::K) {
            let seed = self.seed();
            self.regenerate(seed)?;
            report.regenerated = Some(seed);
            return Ok(report);
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.move_player(movement_from_keys(&input.keys_down) * (PLAYER_SPEED * dt));

        report.room_changed = self.dungeon.update(&mut self.player, dt);

        if self.player.is_dead() {
            self.deaths += 1;
            tracing::info!("player died in room {}, back to start", self.dungeon.current_id());
            self.dungeon.reset_to_start();
            self.player = spawn_player(self.dungeon.screen_size());
            report.player_died = true;
        }
        Ok(report)
    }

    /// Moves one axis at a time so the player slides along interior walls; stays on screen.
    fn move_player(&mut self, delta: Vec2) {
        let screen = self.dungeon.screen_size();
        let half_w = self.player.width as f32 / 2.0;
        let half_h = self.player.height as f32 / 2.0;
        let start = self.player.pos;

        let x = (start.x + delta.x).clamp(half_w, screen.width as f32 - half_w);
        self.player.set_center(Vec2::new(x, start.y));
        if self.blocked() {
            self.player.set_center(start);
        }

        let current = self.player.pos;
        let y = (current.y + delta.y).clamp(half_h, screen.height as f32 - half_h);
        self.player.set_center(Vec2::new(current.x, y));
        if self.blocked() {
            self.player.set_center(current);
        }
    }

    fn blocked(&self) -> bool {
        let bounds = self.player.bounds();
        self.dungeon.current_room().walls.iter().any(|wall| wall.collides(bounds))
    }
}

fn spawn_player(screen: ScreenSize) -> ActorState {
    let center = Vec2::new((screen.width / 2) as f32, (screen.height / 2) as f32);
    ActorState::new(center, PLAYER_WIDTH, PLAYER_HEIGHT, PLAYER_MAX_HEALTH)
}
