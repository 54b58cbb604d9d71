use glam::Vec3;

use crate::frame::FrameInfo;
use crate::lifecycle::LifeCycle;
use crate::scene::{Material, ObjectId, Scene, SceneObject, Shape};

pub const GRID_SIZE: f32 = 15.0;
pub const GRID_DIVISIONS: u32 = 15;
/// The grid sits half a unit below the origin so unit cubes rest on it.
pub const GRID_HEIGHT: f32 = -0.5;

const GRID_COLOR: Vec3 = Vec3::new(0.1, 0.1, 0.1);

/// The ground plane: a dark grey line grid centered under the play field.
pub struct Ground {
    object: SceneObject,
    id: Option<ObjectId>,
}

impl Ground {
    pub fn new() -> Self {
        Self {
            object: SceneObject {
                shape: Shape::Grid {
                    size: GRID_SIZE,
                    divisions: GRID_DIVISIONS,
                },
                material: Material::flat(GRID_COLOR),
                position: Vec3::new(0.0, GRID_HEIGHT, 0.0),
            },
            id: None,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.id.is_some()
    }
}

impl Default for Ground {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeCycle for Ground {
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
