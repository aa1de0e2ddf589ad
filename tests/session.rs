// Session-level tests (native) for the `love-catch` crate.
// These drive the public simulation API the same way the browser loop does.

use glam::Vec2;
use love_catch::consts::*;
use love_catch::sim::{GameEvent, GamePhase, GameState, Heart, Scene, TickInput, Viewport, tick};
use love_catch::tuning::Tuning;

fn quiet_tuning() -> Tuning {
    Tuning {
        spawn_chance: 0.0,
        narrow_spawn_boost: 0.0,
        ..Tuning::default()
    }
}

fn started(tuning: Tuning) -> GameState {
    let mut state = GameState::new(2024, Viewport::default(), tuning);
    assert!(state.start_session());
    state
}

/// Drop a heart straight into the basket and run one frame
fn feed_catch(state: &mut GameState) {
    let player = state.player.clone().expect("session started");
    state.hearts.push(Heart {
        x: player.x + player.w / 2.0,
        y: player.y - 10.0,
        size: 30.0,
        speed: 2.0,
        hue: 350.0,
    });
    tick(state, &TickInput::default(), FRAME_DT_MS);
}

#[test]
fn fifteen_catches_reach_the_proposal() {
    let mut state = started(quiet_tuning());
    for _ in 0..15 {
        feed_catch(&mut state);
    }

    assert_eq!(state.phase, GamePhase::Proposal);
    assert_eq!(state.score, 15);
    assert_eq!(state.fill_percent(), 100.0);

    let events = state.drain_events();
    assert_eq!(
        events.last(),
        Some(&GameEvent::ProposalTriggered),
        "the last catch triggers the proposal"
    );
    assert!(events.contains(&GameEvent::ScoreChanged {
        score: 15,
        fill_percent: 100.0
    }));
}

#[test]
fn proposal_scene_appears_after_reveal_delay() {
    let mut state = started(quiet_tuning());
    for _ in 0..15 {
        feed_catch(&mut state);
    }
    state.drain_events();

    // 450ms at ~16.7ms per frame, give or take float rounding
    let mut frames = 0;
    while state.visible_scene() != Scene::Proposal {
        tick(&mut state, &TickInput::default(), FRAME_DT_MS);
        frames += 1;
        assert!(frames < 100, "proposal never revealed");
    }
    assert!((27..=28).contains(&frames), "revealed after {} frames", frames);
    assert_eq!(
        state.drain_events(),
        vec![GameEvent::SceneChanged(Scene::Proposal)]
    );
}

#[test]
fn heart_below_viewport_is_dropped_without_score() {
    let mut state = started(quiet_tuning());
    let height = state.viewport.height;
    state.hearts.push(Heart {
        x: 5.0,
        y: height + 1.0,
        size: 25.0,
        speed: 2.0,
        hue: 350.0,
    });

    tick(&mut state, &TickInput::default(), FRAME_DT_MS);

    assert!(state.hearts.is_empty());
    assert_eq!(state.score, 0);
    assert!(state.particles.is_empty());
}

#[test]
fn decline_button_stops_after_eight_activations() {
    let mut state = started(quiet_tuning());
    for _ in 0..15 {
        feed_catch(&mut state);
    }

    let size = Vec2::new(90.0, 40.0);
    for _ in 0..8 {
        state.decline_activated(size);
    }
    let settled_at = state.decline.pos;
    assert!(settled_at.is_some());

    assert!(state.decline_activated(size).is_none());
    assert_eq!(state.decline.pos, settled_at);
    assert_eq!(state.decline.escapes, 9);
}

#[test]
fn resize_after_start_reanchors_and_clamps() {
    let mut state = started(quiet_tuning());
    let input = TickInput {
        pointer_x: Some(5000.0),
        ..Default::default()
    };
    tick(&mut state, &input, FRAME_DT_MS);
    assert_eq!(state.player.as_ref().unwrap().x, 1280.0 - PLAYER_WIDTH);

    state.resize(Viewport::new(390.0, 844.0, 3.0));
    let player = state.player.as_ref().unwrap();
    assert_eq!(player.y, 844.0 - 100.0);
    assert!(player.x >= 0.0 && player.x <= 390.0 - PLAYER_WIDTH);
}

#[test]
fn accepting_bursts_confetti_and_ends() {
    let mut state = GameState::new(9, Viewport::new(390.0, 844.0, 3.0), quiet_tuning());
    state.start_session();
    for _ in 0..15 {
        feed_catch(&mut state);
    }
    // Let every spark expire first
    for _ in 0..60 {
        tick(&mut state, &TickInput::default(), FRAME_DT_MS);
    }
    assert!(state.particles.is_empty());

    assert!(state.accept());
    assert_eq!(state.phase, GamePhase::End);
    assert_eq!(state.particles.len(), 140);

    // Confetti lives 70 frames
    for _ in 0..69 {
        tick(&mut state, &TickInput::default(), FRAME_DT_MS);
    }
    assert_eq!(state.particles.len(), 140);
    tick(&mut state, &TickInput::default(), FRAME_DT_MS);
    assert!(state.particles.is_empty());

    // No way out of END except an explicit reset
    assert!(!state.start_session());
    state.reset();
    assert_eq!(state.visible_scene(), Scene::Start);
    assert!(state.start_session());
}

#[test]
fn same_seed_same_session() {
    let run = |seed: u64| {
        let mut state = GameState::new(seed, Viewport::default(), Tuning::default());
        state.start_session();
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..3000 {
            tick(&mut state, &input, FRAME_DT_MS);
        }
        (state.score, state.phase, state.hearts.len(), state.particles.len())
    };
    assert_eq!(run(31337), run(31337));
}
