use glam::Vec3;

use crate::entities::Diorama;
use crate::frame::FrameInfo;
use crate::lifecycle::LifeCycle;
use crate::scene::{HemisphereLight, Scene};

const LIGHT_INTENSITY: f32 = 0.2;
const LIGHT_POSITION: Vec3 = Vec3::new(100.0, 100.0, 100.0);

/// Owner of the scene graph, camera, lights, and the running diorama.
///
/// Constructed once at the application boundary and passed by reference to
/// whoever needs the scene. `init` is silently idempotent: calling it again
/// never creates duplicate lights, cameras, or entities.
pub struct SceneContext {
    scene: Scene,
    diorama: Diorama,
    initialized: bool,
}

impl SceneContext {
    pub fn new(aspect: f32) -> Self {
        Self {
            scene: Scene::new(aspect),
            diorama: Diorama::new(),
            initialized: false,
        }
    }

    /// Builds the scene content: black background, the perspective camera in
    /// its initial placement, one hemisphere light, and a started diorama.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        self.scene.set_background(Vec3::ZERO);
        self.scene.add_light(HemisphereLight {
            sky_color: Vec3::ONE,
            ground_color: Vec3::ONE,
            intensity: LIGHT_INTENSITY,
            position: LIGHT_POSITION,
        });

        self.diorama.start(&mut self.scene);
        log::info!(
            "scene initialized: {} objects, {} light(s)",
            self.scene.len(),
            self.scene.lights().len()
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Per-frame step: advances the diorama's camera animation.
    pub fn update(&mut self, frame: &FrameInfo) {
        self.diorama.update(&mut self.scene, frame);
    }

    /// Stops the animation and disposes every entity the diorama owns.
    pub fn shutdown(&mut self) {
        self.diorama.dispose(&mut self.scene);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn diorama(&self) -> &Diorama {
        &self.diorama
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_builds_expected_scene() {
        let mut context = SceneContext::new(1.0);
        context.init();

        assert!(context.is_initialized());
        assert_eq!(context.scene().lights().len(), 1);
        // snake head, food, ground grid
        assert_eq!(context.scene().len(), 3);
        assert_eq!(context.scene().background(), Vec3::ZERO);
    }

    #[test]
    fn init_is_idempotent() {
        let mut context = SceneContext::new(1.0);

        context.init();
        context.init();

        assert_eq!(context.scene().lights().len(), 1);
        assert_eq!(context.scene().len(), 3);
    }

    #[test]
    fn light_matches_fixed_parameters() {
        let mut context = SceneContext::new(1.0);
        context.init();

        let light = context.scene().lights()[0];
        assert_eq!(light.sky_color, Vec3::ONE);
        assert_eq!(light.ground_color, Vec3::ONE);
        assert_eq!(light.intensity, 0.2);
        assert_eq!(light.position, Vec3::new(100.0, 100.0, 100.0));
    }

    #[test]
    fn shutdown_disposes_every_entity() {
        let mut context = SceneContext::new(1.0);
        context.init();

        context.shutdown();

        assert!(context.scene().is_empty());
        assert!(context.diorama().is_stopped());
    }

    #[test]
    fn update_before_init_is_safe() {
        let mut context = SceneContext::new(1.0);
        let before = context.scene().camera().position();

        context.update(&FrameInfo::new(0, 0.0, 1.0));

        assert_eq!(context.scene().camera().position(), before);
    }
}
