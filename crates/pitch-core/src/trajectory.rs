//! Closed-form flight model: constant-acceleration kinematics plus spin
//! phase accumulation, independent of any rendering concern.

use glam::Vec3;

use crate::constants::PLATE_PLANE_Z;
use crate::record::PitchRecord;

impl PitchRecord {
    /// Position after `t` seconds of flight.
    ///
    /// `p(t) = release + velocity * t + 0.5 * acceleration * t^2`
    #[inline]
    pub fn position_at(&self, t: f32) -> Vec3 {
        self.release + self.velocity * t + 0.5 * self.acceleration * t * t
    }

    /// Unit spin axis in the horizontal plane at `spin_axis_deg`.
    #[inline]
    pub fn spin_axis(&self) -> Vec3 {
        let theta = self.spin_axis_deg.to_radians();
        Vec3::new(theta.cos(), 0.0, theta.sin())
    }

    /// Spin phase advance over `dt` seconds, radians. Zero spin means no
    /// rotation and no arithmetic at all.
    #[inline]
    pub fn spin_phase_delta(&self, dt: f32) -> f32 {
        if self.spin_rpm <= 0.0 {
            return 0.0;
        }
        (self.spin_rpm / 60.0) * std::f32::consts::TAU * dt
    }
}

/// Whether a position has reached or passed the home-plate plane.
#[inline]
pub fn crossed_plate(position: Vec3) -> bool {
    position.z >= PLATE_PLANE_Z
}
