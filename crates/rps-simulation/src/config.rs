use rps_core::{Rect, TokenKind, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Whether the acting token takes part in its own collision scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Scan the whole population. A token always overlaps itself, so it only
    /// ever resolves against a colliding token earlier in the population.
    #[default]
    IncludeSelf,
    /// Skip the acting token; the first other overlapping token wins.
    SkipSelf,
}

/// Spawn position (top-left corner) for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnHomes {
    /// Where rocks spawn.
    pub rock: Vec2,
    /// Where papers spawn.
    pub paper: Vec2,
    /// Where scissors spawn.
    pub scissors: Vec2,
    /// Where lizards spawn.
    pub lizard: Vec2,
    /// Where Spocks spawn.
    pub spock: Vec2,
}

impl SpawnHomes {
    /// The classic layout scaled to an arena: rocks top centre, papers and
    /// scissors on the left and right, lizards and Spocks in the lower half.
    pub fn scaled_to(width: i32, height: i32) -> Self {
        Self {
            rock: Vec2::new(width / 2, height / 8),
            paper: Vec2::new(width / 8, height * 3 / 8),
            scissors: Vec2::new(width * 7 / 8, height * 3 / 8),
            lizard: Vec2::new(width / 8, height * 3 / 4),
            spock: Vec2::new(width * 3 / 4, height * 3 / 4),
        }
    }

    /// The home of `kind`.
    pub fn get(&self, kind: TokenKind) -> Vec2 {
        match kind {
            TokenKind::Rock => self.rock,
            TokenKind::Paper => self.paper,
            TokenKind::Scissors => self.scissors,
            TokenKind::Lizard => self.lizard,
            TokenKind::Spock => self.spock,
        }
    }

    /// Move the home of `kind`.
    pub fn set(&mut self, kind: TokenKind, home: Vec2) {
        let slot = match kind {
            TokenKind::Rock => &mut self.rock,
            TokenKind::Paper => &mut self.paper,
            TokenKind::Scissors => &mut self.scissors,
            TokenKind::Lizard => &mut self.lizard,
            TokenKind::Spock => &mut self.spock,
        };
        *slot = home;
    }
}

/// Event log capacity used by [`SimConfig::default`].
pub const DEFAULT_MAX_EVENTS: usize = 10_000;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Arena width in pixels.
    pub width: i32,
    /// Arena height in pixels.
    pub height: i32,
    /// Tokens spawned per kind.
    pub spawn_count: u32,
    /// Smallest velocity component drawn at spawn (inclusive).
    pub min_speed: i32,
    /// Largest velocity component drawn at spawn (inclusive).
    pub max_speed: i32,
    /// Ticks during which tokens are held in place.
    pub grace_ticks: u64,
    /// Side length of every token's square bounding box.
    pub token_size: i32,
    /// RNG seed for spawn velocities.
    pub seed: u64,
    /// Explicit spawn homes. `None` uses [`SpawnHomes::scaled_to`] the arena.
    pub homes: Option<SpawnHomes>,
    /// Collision scan policy.
    pub scan_policy: ScanPolicy,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    /// Defaults to [`DEFAULT_MAX_EVENTS`].
    pub max_events: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            spawn_count: 20,
            min_speed: -5,
            max_speed: 5,
            grace_ticks: 45,
            token_size: 30,
            seed: 42,
            homes: None,
            scan_policy: ScanPolicy::IncludeSelf,
            max_events: DEFAULT_MAX_EVENTS,
        }
    }
}

impl SimConfig {
    /// Set the arena size.
    pub fn with_arena(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of tokens spawned per kind.
    pub fn with_spawn_count(mut self, count: u32) -> Self {
        self.spawn_count = count;
        self
    }

    /// Set the inclusive range velocity components are drawn from.
    pub fn with_speed_range(mut self, min: i32, max: i32) -> Self {
        self.min_speed = min;
        self.max_speed = max;
        self
    }

    /// Set the grace period in ticks.
    pub fn with_grace_ticks(mut self, ticks: u64) -> Self {
        self.grace_ticks = ticks;
        self
    }

    /// Set the token bounding-box side length.
    pub fn with_token_size(mut self, size: i32) -> Self {
        self.token_size = size;
        self
    }

    /// Set the RNG seed for deterministic simulation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use explicit spawn homes instead of the scaled default layout.
    pub fn with_homes(mut self, homes: SpawnHomes) -> Self {
        self.homes = Some(homes);
        self
    }

    /// Set the collision scan policy.
    pub fn with_scan_policy(mut self, policy: ScanPolicy) -> Self {
        self.scan_policy = policy;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    ///
    /// Every conversion adds an event, so an unlimited log grows for as long
    /// as a run keeps cycling without converging.
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// The arena as a rectangle anchored at the origin.
    pub fn arena(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// The effective spawn homes.
    ///
    /// The scaled default layout is pulled in from the right and bottom
    /// edges so every token starts fully inside the arena.
    pub fn spawn_homes(&self) -> SpawnHomes {
        if let Some(homes) = self.homes {
            return homes;
        }
        let mut homes = SpawnHomes::scaled_to(self.width, self.height);
        let max_x = (self.width - self.token_size).max(0);
        let max_y = (self.height - self.token_size).max(0);
        for kind in TokenKind::ALL {
            let home = homes.get(kind);
            homes.set(kind, Vec2::new(home.x.min(max_x), home.y.min(max_y)));
        }
        homes
    }

    /// Total number of tokens a fresh population holds.
    pub fn population_size(&self) -> usize {
        self.spawn_count as usize * TokenKind::COUNT
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(SimError::InvalidConfig(format!(
                "arena must have positive dimensions, got {}x{}",
                self.width, self.height
            )));
        }
        if self.token_size <= 0 {
            return Err(SimError::InvalidConfig(format!(
                "token size must be positive, got {}",
                self.token_size
            )));
        }
        if self.token_size > self.width || self.token_size > self.height {
            return Err(SimError::InvalidConfig(format!(
                "token size {} does not fit the {}x{} arena",
                self.token_size, self.width, self.height
            )));
        }
        if self.min_speed > self.max_speed {
            return Err(SimError::InvalidConfig(format!(
                "min speed {} exceeds max speed {}",
                self.min_speed, self.max_speed
            )));
        }
        let speed_limit = self.width.min(self.height).unsigned_abs();
        if self.min_speed.unsigned_abs() >= speed_limit
            || self.max_speed.unsigned_abs() >= speed_limit
        {
            return Err(SimError::InvalidConfig(format!(
                "speed range {}..={} must stay below {speed_limit} per tick for a {}x{} arena",
                self.min_speed, self.max_speed, self.width, self.height
            )));
        }
        let arena = self.arena();
        let homes = self.spawn_homes();
        for kind in TokenKind::ALL {
            let home = homes.get(kind);
            let bounds = Rect::square(home, self.token_size);
            if bounds.left() < arena.left()
                || bounds.top() < arena.top()
                || bounds.right() > arena.right()
                || bounds.bottom() > arena.bottom()
            {
                return Err(SimError::InvalidConfig(format!(
                    "{kind} home {home} lies outside the {}x{} arena",
                    self.width, self.height
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height), (800, 800));
        assert_eq!(config.spawn_count, 20);
        assert_eq!((config.min_speed, config.max_speed), (-5, 5));
        assert_eq!(config.token_size, 30);
        assert_eq!(config.seed, 42);
        assert_eq!(config.population_size(), 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = SimConfig::default()
            .with_arena(400, 300)
            .with_spawn_count(3)
            .with_speed_range(-2, 2)
            .with_grace_ticks(0)
            .with_token_size(10)
            .with_seed(7)
            .with_scan_policy(ScanPolicy::SkipSelf)
            .with_max_events(50);
        assert_eq!((config.width, config.height), (400, 300));
        assert_eq!(config.spawn_count, 3);
        assert_eq!((config.min_speed, config.max_speed), (-2, 2));
        assert_eq!(config.grace_ticks, 0);
        assert_eq!(config.token_size, 10);
        assert_eq!(config.seed, 7);
        assert_eq!(config.scan_policy, ScanPolicy::SkipSelf);
        assert_eq!(config.max_events, 50);
    }

    #[test]
    fn default_homes_match_classic_layout() {
        let homes = SimConfig::default().spawn_homes();
        assert_eq!(homes.rock, Vec2::new(400, 100));
        assert_eq!(homes.paper, Vec2::new(100, 300));
        assert_eq!(homes.scissors, Vec2::new(700, 300));
        assert_eq!(homes.lizard, Vec2::new(100, 600));
        assert_eq!(homes.spock, Vec2::new(600, 600));
    }

    #[test]
    fn homes_get_and_set() {
        let mut homes = SpawnHomes::scaled_to(100, 100);
        homes.set(TokenKind::Lizard, Vec2::new(1, 2));
        assert_eq!(homes.get(TokenKind::Lizard), Vec2::new(1, 2));
        assert_eq!(homes.get(TokenKind::Rock), Vec2::new(50, 12));
    }

    #[test]
    fn rejects_non_positive_arena() {
        let err = SimConfig::default().with_arena(0, 800).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
        assert!(SimConfig::default().with_arena(800, -1).validate().is_err());
    }

    #[test]
    fn rejects_inverted_speed_range() {
        let err = SimConfig::default()
            .with_speed_range(3, -3)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("min speed 3 exceeds max speed -3"));
    }

    #[test]
    fn rejects_extreme_speed_range() {
        for (min, max) in [
            (i32::MIN, i32::MIN),
            (i32::MAX - 10, i32::MAX),
            (-800, 5),
            (-5, 800),
        ] {
            let err = SimConfig::default()
                .with_speed_range(min, max)
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("must stay below 800"), "{min}..={max}");
        }
        let narrow = SimConfig::default().with_arena(800, 100).with_speed_range(-100, 0);
        assert!(narrow.validate().is_err());
    }

    #[test]
    fn accepts_speeds_just_below_arena_size() {
        assert!(SimConfig::default().with_speed_range(-799, 799).validate().is_ok());
    }

    #[test]
    fn default_event_log_is_capped() {
        assert_eq!(SimConfig::default().max_events, DEFAULT_MAX_EVENTS);
        assert!(DEFAULT_MAX_EVENTS > 0);
    }

    #[test]
    fn accepts_degenerate_speed_range() {
        assert!(SimConfig::default().with_speed_range(2, 2).validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_token_size() {
        assert!(SimConfig::default().with_token_size(0).validate().is_err());
    }

    #[test]
    fn rejects_token_larger_than_arena() {
        let err = SimConfig::default()
            .with_arena(20, 200)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn default_homes_keep_tokens_inside_small_arenas() {
        let config = SimConfig::default().with_arena(100, 100);
        let homes = config.spawn_homes();
        assert_eq!(homes.scissors, Vec2::new(70, 37));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_home_outside_arena() {
        let mut homes = SpawnHomes::scaled_to(800, 800);
        homes.set(TokenKind::Spock, Vec2::new(900, 10));
        let err = SimConfig::default().with_homes(homes).validate().unwrap_err();
        assert!(err.to_string().contains("Spock home"));
    }

    #[test]
    fn config_serializes_to_json() {
        let json = serde_json::to_value(SimConfig::default()).unwrap();
        assert_eq!(json["scan_policy"], "include_self");
        assert_eq!(json["spawn_count"], 20);
    }
}
