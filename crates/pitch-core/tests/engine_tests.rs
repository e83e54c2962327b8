// Host-side tests for the scheduler, clock gating, and the
// selection-to-lifecycle bridge, using a recording visual backend.

use glam::{Quat, Vec3};
use pitch_core::{parse_league, ComboKey, Command, Engine, PitchRecord, VisualBackend};

/// Renderer stub that records handle lifecycles and per-tick updates.
#[derive(Debug, Default)]
struct RecordingVisuals {
    next_handle: u32,
    created: Vec<u32>,
    destroyed: Vec<u32>,
    updates: Vec<(u32, Vec3)>,
}

impl VisualBackend for RecordingVisuals {
    type Handle = u32;

    fn create_visual(&mut self, _key: &ComboKey, _record: &PitchRecord) -> Self::Handle {
        self.next_handle += 1;
        self.created.push(self.next_handle);
        self.next_handle
    }

    fn destroy_visual(&mut self, handle: Self::Handle) {
        self.destroyed.push(handle);
    }

    fn update_visual(&mut self, handle: &Self::Handle, position: Vec3, _orientation: Quat) {
        self.updates.push((*handle, position));
    }
}

fn record_json() -> &'static str {
    r#"{"release":[0,6,-2.03],"velocity":[0,-5,38],"acceleration":[0,-32,0],"spin_rate":2200,"spin_axis":210}"#
}

fn league_json(combos: &[&str]) -> String {
    let entries: Vec<String> = combos
        .iter()
        .map(|c| format!("\"{c}\": {}", record_json()))
        .collect();
    format!(
        "{{\"Harbor Cats\": {{\"Vega\": {{{}}}, \"Okafor\": {{\"CH 4\": {}}}}}}}",
        entries.join(","),
        record_json()
    )
}

fn make_engine(combos: &[&str]) -> Engine<RecordingVisuals> {
    let league = parse_league(&league_json(combos)).expect("test league");
    let mut engine = Engine::new(league, RecordingVisuals::default());
    engine.set_pitcher("Harbor Cats", "Vega");
    engine
}

fn ff5() -> ComboKey {
    ComboKey::new("FF", 5)
}

#[test]
fn activate_then_deactivate_round_trips_the_live_set() {
    let mut engine = make_engine(&["FF 5"]);
    assert_eq!(engine.live_count(), 0);

    engine.activate(&ff5());
    assert_eq!(engine.live_count(), 1);
    assert!(engine.is_live(&ff5()));

    engine.deactivate(&ff5());
    assert_eq!(engine.live_count(), 0);
    assert_eq!(engine.visuals().destroyed, vec![1], "handle released");
}

#[test]
fn duplicate_activate_is_idempotent() {
    let mut engine = make_engine(&["FF 5"]);
    engine.activate(&ff5());
    engine.activate(&ff5());
    assert_eq!(engine.live_count(), 1);
    assert_eq!(engine.visuals().created.len(), 1, "no second visual");
}

#[test]
fn activating_an_absent_combo_is_a_noop() {
    let mut engine = make_engine(&["FF 1", "SL 9"]);
    engine.activate(&ff5());
    assert_eq!(engine.live_count(), 0);
    assert!(engine.visuals().created.is_empty());
}

#[test]
fn activating_with_no_pitcher_selected_is_a_noop() {
    let league = parse_league(&league_json(&["FF 5"])).expect("test league");
    let mut engine = Engine::new(league, RecordingVisuals::default());
    engine.activate(&ff5());
    assert_eq!(engine.live_count(), 0);
}

#[test]
fn deactivating_an_absent_combo_is_a_noop() {
    let mut engine = make_engine(&["FF 5"]);
    engine.deactivate(&ff5());
    assert_eq!(engine.live_count(), 0);
    assert!(engine.visuals().destroyed.is_empty());
}

#[test]
fn ticks_advance_flights_by_wall_time() {
    let mut engine = make_engine(&["FF 5"]);
    engine.activate(&ff5());
    let release = engine.balls()[0].record.release;

    engine.tick_at(0.5);
    let expected = engine.balls()[0].record.position_at(0.5);
    assert!((engine.balls()[0].position - expected).length() < 1e-5);
    assert!(engine.balls()[0].position != release);
}

#[test]
fn replay_restarts_flights_without_recreating_entities() {
    let mut engine = make_engine(&["FF 5", "SL 9"]);
    engine.activate(&ff5());
    engine.activate(&ComboKey::new("SL", 9));
    engine.tick_at(1.0);

    let handles: Vec<u32> = engine.balls().iter().map(|b| b.handle).collect();
    engine.replay();
    engine.tick_at(1.0);

    assert_eq!(engine.live_count(), 2);
    let after: Vec<u32> = engine.balls().iter().map(|b| b.handle).collect();
    assert_eq!(after, handles, "same entities, same visuals");
    for ball in engine.balls() {
        assert_eq!(ball.position, ball.record.release);
        assert_eq!(ball.spin_phase, 0.0);
    }
    assert!(engine.visuals().destroyed.is_empty());
}

#[test]
fn replay_clears_a_crossed_flight() {
    let mut engine = make_engine(&["FF 5"]);
    engine.activate(&ff5());
    engine.tick_at(1.0);
    engine.tick_at(5.0);
    assert!(engine.balls()[0].crossed);

    engine.replay();
    engine.tick_at(5.0);
    assert!(!engine.balls()[0].crossed);
    assert_eq!(engine.balls()[0].position, engine.balls()[0].record.release);
}

#[test]
fn paused_ticks_freeze_physics_and_resume_continues_from_frozen_time() {
    let mut engine = make_engine(&["FF 5"]);
    engine.activate(&ff5());
    engine.tick_at(0.5);
    let frozen = engine.balls()[0].position;
    let frozen_phase = engine.balls()[0].spin_phase;

    engine.toggle_pause();
    engine.tick_at(1.0);
    engine.tick_at(1.5);
    assert_eq!(engine.balls()[0].position, frozen);
    assert_eq!(engine.balls()[0].spin_phase, frozen_phase);

    // Half a second of wall time after resuming: flight time is 1.0 total,
    // not the 2.0 the wall clock would suggest.
    engine.toggle_pause();
    engine.tick_at(2.0);
    let expected = engine.balls()[0].record.position_at(1.0);
    assert!((engine.balls()[0].position - expected).length() < 1e-4);
}

#[test]
fn paused_ticks_still_forward_state_to_the_renderer() {
    let mut engine = make_engine(&["FF 5"]);
    engine.activate(&ff5());
    engine.toggle_pause();
    let before = engine.visuals().updates.len();
    engine.tick_at(1.0);
    engine.tick_at(2.0);
    assert_eq!(engine.visuals().updates.len(), before + 2);
}

#[test]
fn identical_records_launched_together_stay_in_lockstep() {
    let mut engine = make_engine(&["FF 1", "FF 2"]);
    engine.activate(&ComboKey::new("FF", 1));
    engine.activate(&ComboKey::new("FF", 2));
    for i in 1..=10 {
        engine.tick_at(i as f64 * 0.1);
        let balls = engine.balls();
        assert_eq!(balls[0].position, balls[1].position, "tick {i}");
        assert_eq!(balls[0].spin_phase, balls[1].spin_phase, "tick {i}");
    }
}

#[test]
fn set_pitcher_clears_the_live_set_and_switches_groups() {
    let mut engine = make_engine(&["FF 5", "SL 9"]);
    engine.activate(&ff5());
    engine.activate(&ComboKey::new("SL", 9));

    engine.set_pitcher("Harbor Cats", "Okafor");
    assert_eq!(engine.live_count(), 0);
    assert_eq!(engine.visuals().destroyed.len(), 2);

    let groups = engine.current_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].pitch_type, "CH");
    assert_eq!(groups[0].zones.as_slice(), &[4]);
}

#[test]
fn unknown_pitcher_clears_selection() {
    let mut engine = make_engine(&["FF 5"]);
    engine.set_pitcher("Harbor Cats", "Nobody");
    assert!(engine.current_pitcher().is_none());
    assert!(engine.current_groups().is_empty());
}

#[test]
fn commands_apply_in_order_at_the_tick_boundary() {
    let mut engine = make_engine(&["FF 5"]);
    engine.push(Command::Activate(ff5()));
    engine.push(Command::TogglePause);
    assert_eq!(engine.live_count(), 0, "queued, not yet applied");

    engine.tick_at(0.0);
    assert_eq!(engine.live_count(), 1);
    assert!(engine.is_paused());
}

#[test]
fn groups_list_only_zones_that_exist() {
    let engine = make_engine(&["FF 1", "FF 5", "SL 9"]);
    let groups = engine.current_groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].pitch_type, "FF");
    assert_eq!(groups[0].zones.as_slice(), &[1, 5]);
    assert_eq!(groups[1].pitch_type, "SL");
    assert_eq!(groups[1].zones.as_slice(), &[9]);
}
