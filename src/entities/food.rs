use glam::Vec3;

use crate::frame::FrameInfo;
use crate::lifecycle::LifeCycle;
use crate::scene::{Material, ObjectId, Scene, SceneObject, Shape};

const FOOD_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const FOOD_POSITION: Vec3 = Vec3::new(4.0, 0.0, 4.0);
const METALNESS: f32 = 0.5;
const ROUGHNESS: f32 = 0.55;

/// A glowing green unit cube marking the food position.
pub struct Food {
    object: SceneObject,
    id: Option<ObjectId>,
}

impl Food {
    pub fn new() -> Self {
        Self {
            object: SceneObject {
                shape: Shape::Cube { size: 1.0 },
                material: Material::emissive(FOOD_COLOR, METALNESS, ROUGHNESS),
                position: FOOD_POSITION,
            },
            id: None,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.id.is_some()
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeCycle for Food {
    fn start(&mut self, scene: &mut Scene) {
        if self.id.is_none() {
            self.id = Some(scene.add(self.object));
        }
    }

    fn update(&mut self, _scene: &mut Scene, _frame: &FrameInfo) {}

    fn dispose(&mut self, scene: &mut Scene) {
        if let Some(id) = self.id.take() {
            scene.remove(id);
        }
    }
}
