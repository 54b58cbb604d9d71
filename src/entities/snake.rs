use glam::Vec3;

use crate::frame::FrameInfo;
use crate::lifecycle::LifeCycle;
use crate::scene::{Material, ObjectId, Scene, SceneObject, Shape};

const SNAKE_COLOR: Vec3 = Vec3::new(0.0, 0.0, 1.0);
const HEAD_POSITION: Vec3 = Vec3::new(0.0, 0.0, 0.0);
const METALNESS: f32 = 0.5;
const ROUGHNESS: f32 = 0.55;

struct Segment {
    object: SceneObject,
    id: Option<ObjectId>,
}

/// The snake: a glowing blue head cube plus an ordered, append-only list of
/// trailing segments. Segments are reserved for future growth rules; nothing
/// populates them yet, but each one is an independently owned mesh removed on
/// dispose.
pub struct Snake {
    head: SceneObject,
    head_id: Option<ObjectId>,
    segments: Vec<Segment>,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            head: SceneObject {
                shape: Shape::Cube { size: 1.0 },
                material: Material::emissive(SNAKE_COLOR, METALNESS, ROUGHNESS),
                position: HEAD_POSITION,
            },
            head_id: None,
            segments: Vec::new(),
        }
    }

    pub fn is_registered(&self) -> bool {
        self.head_id.is_some()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Appends one trailing segment at the given position. Insertion order is
    /// the tail order. The segment registers immediately if the snake has
    /// already started.
    pub fn push_segment(&mut self, scene: &mut Scene, position: Vec3) {
        let object = SceneObject {
            position,
            ..self.head
        };
        let id = self.head_id.map(|_| scene.add(object));
        self.segments.push(Segment { object, id });
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeCycle for Snake {
    fn start(&mut self, scene: &mut Scene) {
        if self.head_id.is_none() {
            self.head_id = Some(scene.add(self.head));
        }
        for segment in &mut self.segments {
            if segment.id.is_none() {
                segment.id = Some(scene.add(segment.object));
            }
        }
    }

    fn update(&mut self, _scene: &mut Scene, _frame: &FrameInfo) {}

    fn dispose(&mut self, scene: &mut Scene) {
        if let Some(id) = self.head_id.take() {
            scene.remove(id);
        }
        for segment in &mut self.segments {
            if let Some(id) = segment.id.take() {
                scene.remove(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_head_only() {
        let mut scene = Scene::new(1.0);
        let mut snake = Snake::new();

        snake.start(&mut scene);

        assert_eq!(scene.len(), 1);
        assert_eq!(snake.segment_count(), 0);
    }

    #[test]
    fn double_start_registers_head_once() {
        let mut scene = Scene::new(1.0);
        let mut snake = Snake::new();

        snake.start(&mut scene);
        snake.start(&mut scene);

        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn segments_keep_insertion_order_and_register() {
        let mut scene = Scene::new(1.0);
        let mut snake = Snake::new();
        snake.start(&mut scene);

        snake.push_segment(&mut scene, Vec3::new(-1.0, 0.0, 0.0));
        snake.push_segment(&mut scene, Vec3::new(-2.0, 0.0, 0.0));

        assert_eq!(snake.segment_count(), 2);
        assert_eq!(scene.len(), 3);

        let positions: Vec<Vec3> = scene.objects().map(|(_, o)| o.position).collect();
        assert_eq!(positions[1], Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(positions[2], Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn segments_pushed_before_start_register_on_start() {
        let mut scene = Scene::new(1.0);
        let mut snake = Snake::new();

        snake.push_segment(&mut scene, Vec3::new(-1.0, 0.0, 0.0));
        assert!(scene.is_empty());

        snake.start(&mut scene);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn dispose_removes_head_and_segments() {
        let mut scene = Scene::new(1.0);
        let mut snake = Snake::new();
        snake.start(&mut scene);
        snake.push_segment(&mut scene, Vec3::new(-1.0, 0.0, 0.0));

        snake.dispose(&mut scene);

        assert!(scene.is_empty());
        assert!(!snake.is_registered());
    }
}
