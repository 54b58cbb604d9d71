use glam::Vec3;

use crate::camera::Camera;

/// Handle to an object registered in the scene. Handles are unique for the
/// lifetime of the scene and never reused, so a stale handle after removal
/// simply misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cube { size: f32 },
    Grid { size: f32, divisions: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub emissive: Vec3,
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    /// Standard material with matching emissive color, as used by the
    /// glowing game pieces.
    pub fn emissive(color: Vec3, metalness: f32, roughness: f32) -> Self {
        Self {
            color,
            emissive: color,
            metalness,
            roughness,
        }
    }

    /// Unlit flat material for line work.
    pub fn flat(color: Vec3) -> Self {
        Self {
            color,
            emissive: Vec3::ZERO,
            metalness: 0.0,
            roughness: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SceneObject {
    pub shape: Shape,
    pub material: Material,
    pub position: Vec3,
}

/// Hemisphere light: sky color above, ground color below, blended across the
/// surface normal.
#[derive(Debug, Clone, Copy)]
pub struct HemisphereLight {
    pub sky_color: Vec3,
    pub ground_color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

/// Scene graph root: the ordered registry of renderable objects plus the
/// active camera and lights. Objects are registered by entities through
/// [`Scene::add`] and removed with the returned handle.
pub struct Scene {
    background: Vec3,
    camera: Camera,
    lights: Vec<HemisphereLight>,
    objects: Vec<(ObjectId, SceneObject)>,
    next_id: u64,
}

impl Scene {
    pub fn new(aspect: f32) -> Self {
        Self {
            background: Vec3::ZERO,
            camera: Camera::new(aspect),
            lights: Vec::new(),
            objects: Vec::new(),
            next_id: 0,
        }
    }

    pub fn background(&self) -> Vec3 {
        self.background
    }

    pub fn set_background(&mut self, color: Vec3) {
        self.background = color;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn add_light(&mut self, light: HemisphereLight) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &[HemisphereLight] {
        &self.lights
    }

    /// Registers an object and returns its handle.
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push((id, object));
        id
    }

    /// Removes an object by handle. Removing an already-removed object is a
    /// harmless no-op returning `None`.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|(oid, _)| *oid == id)?;
        Some(self.objects.remove(index).1)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.iter().any(|(oid, _)| *oid == id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects
            .iter()
            .find(|(oid, _)| *oid == id)
            .map(|(_, obj)| obj)
    }

    /// Objects in registration order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, obj)| (*id, obj))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_at(x: f32, z: f32) -> SceneObject {
        SceneObject {
            shape: Shape::Cube { size: 1.0 },
            material: Material::emissive(Vec3::new(0.0, 1.0, 0.0), 0.5, 0.55),
            position: Vec3::new(x, 0.0, z),
        }
    }

    #[test]
    fn add_returns_unique_handles() {
        let mut scene = Scene::new(1.0);

        let a = scene.add(cube_at(0.0, 0.0));
        let b = scene.add(cube_at(1.0, 0.0));

        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn remove_deregisters_exactly_one_object() {
        let mut scene = Scene::new(1.0);
        let a = scene.add(cube_at(0.0, 0.0));
        let b = scene.add(cube_at(4.0, 4.0));

        assert!(scene.remove(a).is_some());
        assert!(!scene.contains(a));
        assert!(scene.contains(b));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn remove_twice_is_a_noop() {
        let mut scene = Scene::new(1.0);
        let a = scene.add(cube_at(0.0, 0.0));

        assert!(scene.remove(a).is_some());
        assert!(scene.remove(a).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn handles_are_never_reused() {
        let mut scene = Scene::new(1.0);
        let a = scene.add(cube_at(0.0, 0.0));
        scene.remove(a);

        let b = scene.add(cube_at(0.0, 0.0));

        assert_ne!(a, b);
        assert!(!scene.contains(a));
    }

    #[test]
    fn objects_iterate_in_registration_order() {
        let mut scene = Scene::new(1.0);
        let first = scene.add(cube_at(0.0, 0.0));
        let second = scene.add(cube_at(1.0, 1.0));
        let third = scene.add(cube_at(2.0, 2.0));
        scene.remove(second);

        let order: Vec<ObjectId> = scene.objects().map(|(id, _)| id).collect();
        assert_eq!(order, vec![first, third]);
    }
}
