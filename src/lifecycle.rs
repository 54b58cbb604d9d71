use crate::frame::FrameInfo;
use crate::scene::Scene;

/// Lifecycle contract implemented by every renderable entity.
///
/// `start` performs one-time setup and registers visual state into the scene,
/// `update` performs per-frame mutation, `dispose` removes everything `start`
/// registered. Calling `update` or `dispose` before `start` must be a no-op.
pub trait LifeCycle {
    /// One-time setup; registers owned objects into the scene.
    /// A second call while already registered must not duplicate anything.
    fn start(&mut self, scene: &mut Scene);

    /// Per-frame mutation. May be a no-op.
    fn update(&mut self, scene: &mut Scene, frame: &FrameInfo);

    /// Removes every object registered by `start` and releases handles.
    fn dispose(&mut self, scene: &mut Scene);
}
