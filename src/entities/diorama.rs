use glam::Vec3;

use crate::entities::{Food, Ground, Snake};
use crate::frame::FrameInfo;
use crate::lifecycle::LifeCycle;
use crate::scene::Scene;

pub const ORBIT_DISTANCE: f32 = 20.0;
pub const ORBIT_HEIGHT: f32 = 5.0;
/// Angular speed of the camera orbit in radians per second.
pub const ORBIT_ANGULAR_SPEED: f32 = 0.1;

/// Composite owner of all entities for one running instance of the scene.
///
/// `start` builds and registers the entities and resets the animation clock;
/// `update` integrates elapsed time by the frame delta and drives the camera
/// orbit around the origin; `dispose` stops the animation and removes every
/// entity symmetrically with `start`. At most one run is live at a time: a
/// second `start` without an intervening `dispose` is a no-op.
pub struct Diorama {
    entities: Vec<Box<dyn LifeCycle>>,
    elapsed: f32,
    started: bool,
    stopped: bool,
}

impl Diorama {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            elapsed: 0.0,
            started: false,
            stopped: true,
        }
    }

    /// Elapsed animation time in seconds since the current run started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Camera position on the orbit circle for a given elapsed time.
    pub fn orbit_position(elapsed: f32) -> Vec3 {
        let angle = elapsed * ORBIT_ANGULAR_SPEED;
        Vec3::new(
            ORBIT_DISTANCE * angle.sin(),
            ORBIT_HEIGHT,
            ORBIT_DISTANCE * angle.cos(),
        )
    }
}

impl Default for Diorama {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeCycle for Diorama {
    fn start(&mut self, scene: &mut Scene) {
        if self.started {
            return;
        }
        self.started = true;
        self.stopped = false;
        self.elapsed = 0.0;

        self.entities = vec![
            Box::new(Snake::new()),
            Box::new(Food::new()),
            Box::new(Ground::new()),
        ];
        for entity in &mut self.entities {
            entity.start(scene);
        }
        log::debug!("diorama started with {} entities", self.entities.len());
    }

    fn update(&mut self, scene: &mut Scene, frame: &FrameInfo) {
        // A dispose racing an already-scheduled frame turns that frame into
        // a no-op here; the render loop itself keeps running.
        if self.stopped {
            return;
        }

        self.elapsed += frame.delta;

        let camera = scene.camera_mut();
        camera.set_position(Self::orbit_position(self.elapsed));
        camera.look_at(Vec3::ZERO);

        for entity in &mut self.entities {
            entity.update(scene, frame);
        }
    }

    fn dispose(&mut self, scene: &mut Scene) {
        if !self.started {
            return;
        }
        self.stopped = true;
        self.started = false;

        for mut entity in self.entities.drain(..) {
            entity.dispose(scene);
        }
        log::debug!("diorama disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame(delta: f32) -> FrameInfo {
        FrameInfo::new(0, 0.0, delta)
    }

    #[test]
    fn start_populates_the_scene() {
        let mut scene = Scene::new(1.0);
        let mut diorama = Diorama::new();

        diorama.start(&mut scene);

        // snake head, food, ground grid
        assert_eq!(scene.len(), 3);
        assert!(!diorama.is_stopped());
    }

    #[test]
    fn double_start_does_not_duplicate_entities() {
        let mut scene = Scene::new(1.0);
        let mut diorama = Diorama::new();

        diorama.start(&mut scene);
        diorama.start(&mut scene);

        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn update_orbits_the_camera() {
        let mut scene = Scene::new(1.0);
        let mut diorama = Diorama::new();
        diorama.start(&mut scene);

        diorama.update(&mut scene, &frame(2.0));

        let expected = Diorama::orbit_position(2.0);
        let position = scene.camera().position();
        assert_relative_eq!(position.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(position.y, ORBIT_HEIGHT, epsilon = 1e-5);
        assert_relative_eq!(position.z, expected.z, epsilon = 1e-5);
        assert_eq!(scene.camera().target(), Vec3::ZERO);
    }

    #[test]
    fn orbit_stays_on_the_circle() {
        for step in 0..100 {
            let t = step as f32 * 0.7;
            let p = Diorama::orbit_position(t);
            let radius = (p.x * p.x + p.z * p.z).sqrt();
            assert_relative_eq!(radius, ORBIT_DISTANCE, epsilon = 1e-3);
            assert_relative_eq!(p.y, ORBIT_HEIGHT);
        }
    }

    #[test]
    fn elapsed_integrates_frame_deltas() {
        let mut scene = Scene::new(1.0);
        let mut diorama = Diorama::new();
        diorama.start(&mut scene);

        for _ in 0..60 {
            diorama.update(&mut scene, &frame(1.0 / 60.0));
        }

        assert_relative_eq!(diorama.elapsed(), 1.0, epsilon = 1e-4);
        let expected = Diorama::orbit_position(diorama.elapsed());
        assert_relative_eq!(scene.camera().position().x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(scene.camera().position().z, expected.z, epsilon = 1e-4);
    }

    #[test]
    fn dispose_halts_camera_mutation() {
        let mut scene = Scene::new(1.0);
        let mut diorama = Diorama::new();
        diorama.start(&mut scene);
        diorama.update(&mut scene, &frame(1.0));
        let frozen = scene.camera().position();

        diorama.dispose(&mut scene);
        diorama.update(&mut scene, &frame(1.0));

        assert_eq!(scene.camera().position(), frozen);
        assert!(diorama.is_stopped());
    }

    #[test]
    fn dispose_empties_the_scene() {
        let mut scene = Scene::new(1.0);
        let mut diorama = Diorama::new();
        diorama.start(&mut scene);

        diorama.dispose(&mut scene);

        assert!(scene.is_empty());
    }

    #[test]
    fn restart_after_dispose_leaves_no_duplicates() {
        let mut scene = Scene::new(1.0);
        let mut diorama = Diorama::new();

        diorama.start(&mut scene);
        diorama.dispose(&mut scene);
        diorama.start(&mut scene);

        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn restart_resets_elapsed_time() {
        let mut scene = Scene::new(1.0);
        let mut diorama = Diorama::new();
        diorama.start(&mut scene);
        diorama.update(&mut scene, &frame(5.0));

        diorama.dispose(&mut scene);
        diorama.start(&mut scene);

        assert_relative_eq!(diorama.elapsed(), 0.0);
    }

    #[test]
    fn update_before_start_is_a_noop() {
        let mut scene = Scene::new(1.0);
        let mut diorama = Diorama::new();
        let before = scene.camera().position();

        diorama.update(&mut scene, &frame(1.0));

        assert_eq!(scene.camera().position(), before);
    }
}
