//! Property-based invariant tests for the simulation.
use proptest::prelude::*;
use rps_core::{Token, TokenKind, Vec2};
use rps_simulation::{Phase, ScanPolicy, SimConfig, Simulation};

fn any_kind() -> impl Strategy<Value = TokenKind> {
    prop::sample::select(TokenKind::ALL.to_vec())
}

fn any_token() -> impl Strategy<Value = Token> {
    (any_kind(), 0..170i32, 0..170i32, -4..=4i32, -4..=4i32)
        .prop_map(|(kind, x, y, dx, dy)| Token::new(kind, Vec2::new(x, y), Vec2::new(dx, dy)))
}

fn small_arena() -> SimConfig {
    SimConfig::default()
        .with_arena(200, 200)
        .with_token_size(20)
        .with_grace_ticks(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ledger_total_matches_population(
        tokens in prop::collection::vec(any_token(), 1..40),
        skip_self in any::<bool>(),
    ) {
        let policy = if skip_self { ScanPolicy::SkipSelf } else { ScanPolicy::IncludeSelf };
        let size = tokens.len();
        let mut sim = Simulation::with_tokens(small_arena().with_scan_policy(policy), tokens).unwrap();
        for _ in 0..60 {
            let snap = sim.tick();
            prop_assert_eq!(snap.scores.total(), size);
            prop_assert_eq!(snap.population_size(), size);
            for kind in TokenKind::ALL {
                let live = snap.entities.iter().filter(|e| e.kind == kind).count();
                prop_assert_eq!(live, snap.scores.count(kind) as usize);
            }
        }
    }

    #[test]
    fn homogeneous_population_is_a_fixed_point(
        kind in any_kind(),
        tokens in prop::collection::vec(any_token(), 1..30),
    ) {
        let tokens: Vec<Token> = tokens.into_iter().map(|t| Token { kind, ..t }).collect();
        let mut sim = Simulation::with_tokens(small_arena(), tokens).unwrap();
        let first = sim.tick();
        prop_assert_eq!(first.winner, Some(kind));
        for _ in 0..40 {
            let snap = sim.tick();
            prop_assert!(snap.entities.iter().all(|e| e.kind == kind));
            prop_assert_eq!(snap.scores, first.scores);
            prop_assert_eq!(snap.winner, Some(kind));
        }
    }

    #[test]
    fn winner_never_changes_once_declared(seed in any::<u64>()) {
        let config = SimConfig::default()
            .with_arena(300, 300)
            .with_spawn_count(3)
            .with_grace_ticks(0)
            .with_seed(seed);
        let mut sim = Simulation::new(config).unwrap();
        let mut declared = None;
        for _ in 0..400 {
            let snap = sim.tick();
            if let Some(w) = declared {
                prop_assert_eq!(snap.winner, Some(w));
                prop_assert_eq!(snap.scores.count(w) as usize, snap.population_size());
            }
            declared = declared.or(snap.winner);
        }
    }

    #[test]
    fn left_wall_always_reflects(y in 0..170i32, dx in -5..0i32, dy in -3..=3i32) {
        let token = Token::new(TokenKind::Rock, Vec2::new(0, y), Vec2::new(dx, dy));
        let mut sim = Simulation::with_tokens(small_arena(), vec![token]).unwrap();
        let snap = sim.tick();
        prop_assert_eq!(snap.phase, Phase::Running);
        prop_assert!(snap.entities[0].velocity.x >= 0);
    }
}

#[test]
fn reset_restores_seeded_ledger() {
    let config = SimConfig::default().with_spawn_count(20).with_grace_ticks(3);
    let mut sim = Simulation::new(config).unwrap();
    sim.run(500);
    sim.reset();

    let snap = sim.snapshot();
    assert_eq!(snap.tick, 0);
    assert_eq!(snap.phase, Phase::Warmup);
    assert_eq!(snap.winner, None);
    for kind in TokenKind::ALL {
        assert_eq!(snap.scores.count(kind), 20);
    }
    assert_eq!(snap.scores.total(), 100);
}

#[test]
fn default_game_converges_deterministically() {
    let play = || {
        let mut sim = Simulation::new(SimConfig::default().with_seed(2024)).unwrap();
        let winner = sim.run_until_converged(50_000);
        (winner, sim.current_tick(), sim.events().conversions())
    };
    assert_eq!(play(), play());
}

#[test]
fn snapshot_serializes_for_harnesses() {
    let mut sim = Simulation::new(SimConfig::default().with_spawn_count(1)).unwrap();
    let snap = sim.tick();
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["tick"], 1);
    assert_eq!(json["phase"], "warmup");
    assert_eq!(json["entities"].as_array().unwrap().len(), 5);
    assert_eq!(json["scores"]["lizard"], 1);
    assert!(json["winner"].is_null());
}
