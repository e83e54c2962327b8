//! The scheduler and selection bridge: owns the clock, the live set of ball
//! entities, and the command queue that input handlers feed.
//!
//! The host calls [`Engine::tick`] once per display refresh, forever;
//! stopping the animation is simply ceasing to call it. All mutation is
//! synchronous within a tick, so user commands queued between ticks are
//! never re-entrant with an in-progress advance.

use std::collections::VecDeque;

use log::{debug, info, warn};

use crate::clock::SimulationClock;
use crate::entity::BallEntity;
use crate::record::{ComboKey, League, PitchGroup, PitcherBook};
use crate::visual::VisualBackend;

/// User-facing operations, queued by input handlers and drained in order
/// once per tick boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Activate(ComboKey),
    Deactivate(ComboKey),
    SetPitcher { team: String, pitcher: String },
    TogglePause,
    Replay,
}

/// Simulation context: pitch data, clock, live entities, renderer handles.
pub struct Engine<V: VisualBackend> {
    league: League,
    current: Option<(String, String)>,
    clock: SimulationClock,
    balls: Vec<BallEntity<V::Handle>>,
    visuals: V,
    queue: VecDeque<Command>,
}

impl<V: VisualBackend> Engine<V> {
    /// Build an engine over a loaded league. No pitcher is selected yet, so
    /// the live set starts (and stays) empty until `set_pitcher`.
    pub fn new(league: League, visuals: V) -> Self {
        info!(
            "engine ready: {} teams, {} records",
            league.teams().len(),
            league.record_count()
        );
        Self {
            league,
            current: None,
            clock: SimulationClock::new(),
            balls: Vec::new(),
            visuals,
            queue: VecDeque::new(),
        }
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn visuals(&self) -> &V {
        &self.visuals
    }

    pub fn visuals_mut(&mut self) -> &mut V {
        &mut self.visuals
    }

    pub fn balls(&self) -> &[BallEntity<V::Handle>] {
        &self.balls
    }

    pub fn live_count(&self) -> usize {
        self.balls.len()
    }

    pub fn is_live(&self, key: &ComboKey) -> bool {
        self.balls.iter().any(|b| &b.key == key)
    }

    pub fn is_paused(&self) -> bool {
        !self.clock.is_running()
    }

    /// The currently selected (team, pitcher), if any.
    pub fn current_pitcher(&self) -> Option<(&str, &str)> {
        self.current
            .as_ref()
            .map(|(t, p)| (t.as_str(), p.as_str()))
    }

    fn current_book(&self) -> Option<&PitcherBook> {
        let (team, pitcher) = self.current.as_ref()?;
        self.league.pitcher(team, pitcher)
    }

    /// Grouped (pitch type, zones) pairs of the current pitcher, the data
    /// the UI collaborator needs to build its checkbox grid.
    pub fn current_groups(&self) -> Vec<PitchGroup> {
        self.current_book().map(PitcherBook::groups).unwrap_or_default()
    }

    /// Queue a command for the next tick boundary.
    pub fn push(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    /// Switch the active pitcher, clearing every live entity first. An
    /// unknown team/pitcher clears the selection and warns.
    pub fn set_pitcher(&mut self, team: &str, pitcher: &str) {
        self.reset_all();
        if self.league.pitcher(team, pitcher).is_some() {
            info!("pitcher selected: {team} / {pitcher}");
            self.current = Some((team.to_owned(), pitcher.to_owned()));
        } else {
            warn!("unknown pitcher: {team} / {pitcher}");
            self.current = None;
        }
    }

    /// Launch a ball for a combo of the current pitcher. A combo that is
    /// already live, or that has no record, is a no-op.
    pub fn activate(&mut self, key: &ComboKey) {
        if self.is_live(key) {
            debug!("combo already live: {key}");
            return;
        }
        let record = match self.current_book().and_then(|b| b.get(key)) {
            Some(r) => *r,
            None => {
                warn!("no pitch record for combo: {key}");
                return;
            }
        };
        let handle = self.visuals.create_visual(key, &record);
        let t0 = self.clock.elapsed();
        self.balls
            .push(BallEntity::launch(key.clone(), record, handle, t0));
        debug!("activated {key} at t0={t0:.3}");
    }

    /// Remove the ball tagged with this combo, releasing its visual. No
    /// matching ball is a no-op.
    pub fn deactivate(&mut self, key: &ComboKey) {
        if let Some(i) = self.balls.iter().position(|b| &b.key == key) {
            let ball = self.balls.swap_remove(i);
            self.visuals.destroy_visual(ball.handle);
            debug!("deactivated {key}");
        }
    }

    /// Clear the whole live set, releasing every visual.
    pub fn reset_all(&mut self) {
        for ball in self.balls.drain(..) {
            self.visuals.destroy_visual(ball.handle);
        }
    }

    /// Restart every live flight from its release point, preserving entity
    /// identity and visual handles.
    pub fn replay(&mut self) {
        let t0 = self.clock.elapsed();
        for ball in &mut self.balls {
            ball.relaunch(t0);
        }
        debug!("replayed {} flights at t0={t0:.3}", self.balls.len());
    }

    pub fn toggle_pause(&mut self) {
        self.clock.toggle();
        info!(
            "simulation {}",
            if self.clock.is_running() { "running" } else { "paused" }
        );
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Activate(key) => self.activate(&key),
            Command::Deactivate(key) => self.deactivate(&key),
            Command::SetPitcher { team, pitcher } => self.set_pitcher(&team, &pitcher),
            Command::TogglePause => self.toggle_pause(),
            Command::Replay => self.replay(),
        }
    }

    /// One frame: drain queued commands, sample the wall clock, advance
    /// physics if running, and always forward entity state to the renderer.
    pub fn tick(&mut self) {
        self.drain_commands();
        let dt = self.clock.sample();
        self.step(dt);
    }

    /// Same as [`tick`](Self::tick) with an injected wall time, for hosts
    /// with their own timing source and for tests.
    pub fn tick_at(&mut self, now: f64) {
        self.drain_commands();
        let dt = self.clock.sample_at(now);
        self.step(dt);
    }

    fn drain_commands(&mut self) {
        while let Some(command) = self.queue.pop_front() {
            self.apply(command);
        }
    }

    fn step(&mut self, dt: f64) {
        if self.clock.is_running() {
            let elapsed = self.clock.elapsed();
            for ball in &mut self.balls {
                let t = (elapsed - ball.t0) as f32;
                ball.advance(t, dt as f32);
            }
        }
        // Pausing freezes physics, not the redraw.
        for ball in &self.balls {
            self.visuals
                .update_visual(&ball.handle, ball.position, ball.orientation());
        }
    }
}
