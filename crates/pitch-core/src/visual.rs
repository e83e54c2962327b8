//! Narrow interface to the rendering collaborator.

use glam::{Quat, Vec3};

use crate::record::{ComboKey, PitchRecord};

/// What the engine needs from a renderer: a visual per entity, updated once
/// per tick. The renderer owns camera, scene and lighting; the engine never
/// touches them.
pub trait VisualBackend {
    type Handle;

    /// Allocate a visual for a newly activated ball.
    fn create_visual(&mut self, key: &ComboKey, record: &PitchRecord) -> Self::Handle;

    /// Release a visual when its ball is deactivated.
    fn destroy_visual(&mut self, handle: Self::Handle);

    /// Forward the entity's current state. Called every tick, paused or not.
    fn update_visual(&mut self, handle: &Self::Handle, position: Vec3, orientation: Quat);
}

/// Backend that renders nothing, for headless hosts and tests.
#[derive(Debug, Default)]
pub struct NullVisuals;

impl VisualBackend for NullVisuals {
    type Handle = ();

    fn create_visual(&mut self, _key: &ComboKey, _record: &PitchRecord) -> Self::Handle {}

    fn destroy_visual(&mut self, _handle: Self::Handle) {}

    fn update_visual(&mut self, _handle: &Self::Handle, _position: Vec3, _orientation: Quat) {}
}
