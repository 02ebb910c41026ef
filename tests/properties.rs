use duck_hunt::GameConfig;
use duck_hunt::consts::SIM_DT;
use duck_hunt::sim::{Duck, GameState, ScreenMode, ShotOutcome};
use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
enum Action {
    Click(f32, f32),
    /// Click dead centre on the front-most duck, if any
    Snipe,
    Tick(u8),
    Pause,
    Skip,
    Advance,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0.0f32..1000.0, 0.0f32..640.0).prop_map(|(x, y)| Action::Click(x, y)),
        4 => Just(Action::Snipe),
        4 => (1u8..30).prop_map(Action::Tick),
        1 => Just(Action::Pause),
        1 => Just(Action::Skip),
        1 => Just(Action::Advance),
    ]
}

fn config() -> GameConfig {
    GameConfig {
        spawn_interval: 0.2,
        spawn_interval_min: 0.05,
        ammo_from_level: 2,
        bullets_after_level_5: 4,
        ducks_to_clear: 4,
        total_levels: 4,
        ..Default::default()
    }
}

fn apply(state: &mut GameState, action: &Action) {
    match *action {
        Action::Click(x, y) => {
            state.on_click(Vec2::new(x, y));
        }
        Action::Snipe => {
            if let Some(pos) = state.level.ducks.last().map(|d| d.pos) {
                state.on_click(pos);
            }
        }
        Action::Tick(n) => {
            for _ in 0..n {
                state.on_frame_tick(SIM_DT);
            }
        }
        Action::Pause => state.toggle_pause(),
        Action::Skip => state.skip_level(),
        Action::Advance => {
            state.advance_level();
        }
    }
}

proptest! {
    #[test]
    fn counters_stay_in_range(seed in any::<u64>(), actions in prop::collection::vec(action(), 1..120)) {
        let config = config();
        let mut state = GameState::new(config.clone(), seed).unwrap();

        let mut level = state.level.level;
        let mut hits = state.level.hits;
        let mut bullets = state.level.bullets;

        for a in &actions {
            let was_cleared = matches!(state.mode, ScreenMode::LevelCleared);
            apply(&mut state, a);

            prop_assert!(state.level.health <= config.health_per_level);
            prop_assert!(state.level.hits <= config.ducks_to_clear);
            prop_assert!(state.level.ducks.len() <= config.ducks_on_screen(state.level.level));
            prop_assert_eq!(state.level.bullets.is_some(), config.has_limited_ammo(state.level.level));
            if state.level.health == 0 {
                prop_assert_eq!(state.mode, ScreenMode::Failed);
            }

            if state.level.level == level {
                // Monotonic within a level
                prop_assert!(state.level.hits >= hits);
                if let (Some(before), Some(now)) = (bullets, state.level.bullets) {
                    prop_assert!(now <= before);
                }
            } else {
                prop_assert!(was_cleared);
                prop_assert_eq!(state.level.level, level + 1);
                prop_assert_eq!(state.level.hits, 0);
                prop_assert_eq!(state.level.health, config.health_per_level);
            }

            level = state.level.level;
            hits = state.level.hits;
            bullets = state.level.bullets;
        }
    }

    #[test]
    fn victory_only_on_final_level(seed in any::<u64>(), actions in prop::collection::vec(action(), 1..200)) {
        let config = config();
        let mut state = GameState::new(config.clone(), seed).unwrap();
        for a in &actions {
            apply(&mut state, a);
            match state.mode {
                ScreenMode::Victory => prop_assert_eq!(state.level.level, config.total_levels),
                ScreenMode::LevelCleared => prop_assert!(state.level.level < config.total_levels),
                _ => {}
            }
        }
    }

    #[test]
    fn failed_blocks_clicks(seed in any::<u64>(), clicks in prop::collection::vec((0.0f32..1000.0, 0.0f32..640.0), 1..20)) {
        let mut state = GameState::new(config(), seed).unwrap();
        while state.mode != ScreenMode::Failed {
            state.on_click(Vec2::new(-50.0, -50.0));
        }
        state.insert_duck(Vec2::new(500.0, 300.0), Vec2::ZERO);
        for (x, y) in clicks {
            prop_assert_eq!(state.on_click(Vec2::new(x, y)), ShotOutcome::Ignored);
        }
        prop_assert_eq!(state.level.health, 0);
        prop_assert_eq!(state.level.ducks.len(), 1);
    }

    #[test]
    fn pause_freezes_everything(seed in any::<u64>(), warmup in 1usize..200, frozen in 1usize..200) {
        let mut state = GameState::new(config(), seed).unwrap();
        for _ in 0..warmup {
            state.on_frame_tick(SIM_DT);
        }
        if let Some(pos) = state.level.ducks.last().map(|d| d.pos) {
            state.on_click(pos);
        }

        state.toggle_pause();
        let ducks: Vec<(Vec2, Vec2, f32)> =
            state.level.ducks.iter().map(|d| (d.pos, d.vel, d.flap)).collect();
        let particles: Vec<f32> = state.particles.iter().map(|p| p.lifetime).collect();
        let health = state.level.health;

        for _ in 0..frozen {
            state.on_frame_tick(SIM_DT);
        }
        state.toggle_pause();

        let ducks_after: Vec<(Vec2, Vec2, f32)> =
            state.level.ducks.iter().map(|d| (d.pos, d.vel, d.flap)).collect();
        let particles_after: Vec<f32> = state.particles.iter().map(|p| p.lifetime).collect();
        prop_assert_eq!(ducks, ducks_after);
        prop_assert_eq!(particles, particles_after);
        prop_assert_eq!(state.level.health, health);
    }

    #[test]
    fn duck_speed_never_drops_with_level(seed in any::<u64>(), base in 10.0f32..400.0, growth in 0.0f32..0.5) {
        let config = GameConfig {
            duck_base_speed: base,
            speed_growth_per_level: growth,
            ..Default::default()
        };
        let mean_speed = |level: u32| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let total: f32 = (0..64)
                .map(|id| Duck::spawn(id, level, &config, &mut rng).vel.x.abs())
                .sum();
            total / 64.0
        };
        let mut prev = mean_speed(1);
        for level in 2..=config.total_levels {
            let now = mean_speed(level);
            prop_assert!(now >= prev, "level {} mean {} < {}", level, now, prev);
            prev = now;
        }
    }

    #[test]
    fn ducks_stay_in_bounds_while_bouncing(seed in any::<u64>(), level in 1u32..=10, frames in 1usize..600) {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut duck = Duck::spawn(1, level, &config, &mut rng);
        duck.bounces_left = u32::MAX;
        for _ in 0..frames {
            duck_hunt::sim::Advance::advance(&mut duck, SIM_DT);
            prop_assert!(duck.pos.x >= duck.bounds.min - 1e-3);
            prop_assert!(duck.pos.x <= duck.bounds.max + 1e-3);
        }
    }
}
