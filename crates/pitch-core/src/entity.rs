//! Live ball state: one entity per active (pitch type, zone) selection.

use glam::{Quat, Vec3};

use crate::record::{ComboKey, PitchRecord};
use crate::trajectory;

/// One active, animated trajectory instance bound to a PitchRecord.
///
/// `H` is the rendering collaborator's handle type. The engine is the only
/// writer of position and spin phase; the bridge operations are the only
/// code that creates or removes entities.
#[derive(Debug)]
pub struct BallEntity<H> {
    /// Lifecycle tag, equal to the selection's combo key.
    pub key: ComboKey,
    pub record: PitchRecord,
    pub handle: H,
    /// Clock elapsed time at creation or last replay.
    pub t0: f64,
    pub position: Vec3,
    pub spin_phase: f32,
    /// Fixed rotation axis, normalized once at launch and reused every frame.
    spin_axis: Vec3,
    /// Set once the flight reaches the plate plane; the entity then freezes.
    pub crossed: bool,
}

impl<H> BallEntity<H> {
    pub fn launch(key: ComboKey, record: PitchRecord, handle: H, t0: f64) -> Self {
        Self {
            key,
            record,
            handle,
            t0,
            position: record.release,
            spin_phase: 0.0,
            spin_axis: record.spin_axis(),
            crossed: false,
        }
    }

    /// Advance to flight time `t` with frame delta `dt`. Once the next
    /// position reaches the plate plane the entity freezes at its last
    /// pre-crossing value and ignores further advances until replayed.
    pub fn advance(&mut self, t: f32, dt: f32) {
        if self.crossed {
            return;
        }
        let next = self.record.position_at(t.max(0.0));
        if trajectory::crossed_plate(next) {
            self.crossed = true;
            return;
        }
        self.position = next;
        self.spin_phase += self.record.spin_phase_delta(dt);
    }

    /// Restart the flight in place: same entity, same handle, flight time
    /// back to zero at the given clock time.
    pub fn relaunch(&mut self, t0: f64) {
        self.t0 = t0;
        self.position = self.record.release;
        self.spin_phase = 0.0;
        self.crossed = false;
    }

    /// Current orientation as a rotation about the fixed spin axis.
    pub fn orientation(&self) -> Quat {
        if self.spin_phase == 0.0 {
            return Quat::IDENTITY;
        }
        Quat::from_axis_angle(self.spin_axis, self.spin_phase)
    }
}
