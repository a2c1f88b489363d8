//! The seam between the controller and the host scene.
//!
//! The controller reaches the scene only through [`SceneRuntime`], passed
//! into each call that needs it: the camera handle, object lookup by id,
//! and event emission. [`MemoryScene`] is an in-memory implementation for
//! headless hosts and tests.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::camera::CameraTransform;
use crate::error::EmitError;

/// Host scene access.
pub trait SceneRuntime {
    /// Mutable camera handle, or `None` once the camera is gone.
    fn camera_mut(&mut self) -> Option<&mut CameraTransform>;

    /// World position of a scene object.
    fn object_position(&self, id: &str) -> Option<Vec3>;

    /// Mutable Euler rotation of a scene object.
    fn object_rotation_mut(&mut self, id: &str) -> Option<&mut Vec3>;

    /// Emit a named event on a scene object.
    fn emit(&mut self, event: &str, object_id: &str) -> Result<(), EmitError>;
}

/// An event delivered to [`MemoryScene`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedEvent {
    /// Event name.
    pub event: String,
    /// Target object id.
    pub object_id: String,
}

/// One object in a [`MemoryScene`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneObject {
    /// World position.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
}

/// In-memory scene with a camera, named objects, and an event log.
#[derive(Debug, Clone)]
pub struct MemoryScene {
    camera: Option<CameraTransform>,
    objects: FxHashMap<String, SceneObject>,
    emitted: Vec<EmittedEvent>,
    reject_emits: bool,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryScene {
    /// Scene with a camera at the origin and no objects.
    #[must_use]
    pub fn new() -> Self {
        Self {
            camera: Some(CameraTransform::default()),
            objects: FxHashMap::default(),
            emitted: Vec::new(),
            reject_emits: false,
        }
    }

    /// Builder: add an object at `position`.
    #[must_use]
    pub fn with_object(mut self, id: &str, position: Vec3) -> Self {
        self.add_object(id, position);
        self
    }

    /// Add or replace an object.
    pub fn add_object(&mut self, id: &str, position: Vec3) {
        let _ = self.objects.insert(
            id.to_owned(),
            SceneObject {
                position,
                rotation: Vec3::ZERO,
            },
        );
    }

    /// Look up an object.
    #[must_use]
    pub fn object(&self, id: &str) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Current camera transform, if the camera exists.
    #[must_use]
    pub fn camera(&self) -> Option<&CameraTransform> {
        self.camera.as_ref()
    }

    /// Remove the camera, as when the host disposes it.
    pub fn drop_camera(&mut self) {
        self.camera = None;
    }

    /// Put a camera back at `transform`.
    pub fn attach_camera(&mut self, transform: CameraTransform) {
        self.camera = Some(transform);
    }

    /// Make every subsequent emit fail (or succeed again).
    pub fn set_reject_emits(&mut self, reject: bool) {
        self.reject_emits = reject;
    }

    /// Every event delivered so far, oldest first.
    #[must_use]
    pub fn emitted(&self) -> &[EmittedEvent] {
        &self.emitted
    }

    /// How many times `event` was delivered to `object_id`.
    #[must_use]
    pub fn count_emitted(&self, event: &str, object_id: &str) -> usize {
        self.emitted
            .iter()
            .filter(|e| e.event == event && e.object_id == object_id)
            .count()
    }
}

impl SceneRuntime for MemoryScene {
    fn camera_mut(&mut self) -> Option<&mut CameraTransform> {
        self.camera.as_mut()
    }

    fn object_position(&self, id: &str) -> Option<Vec3> {
        self.objects.get(id).map(|o| o.position)
    }

    fn object_rotation_mut(&mut self, id: &str) -> Option<&mut Vec3> {
        self.objects.get_mut(id).map(|o| &mut o.rotation)
    }

    fn emit(&mut self, event: &str, object_id: &str) -> Result<(), EmitError> {
        if !self.objects.contains_key(object_id) {
            return Err(EmitError::UnknownObject(object_id.to_owned()));
        }
        if self.reject_emits {
            return Err(EmitError::Rejected(format!(
                "`{event}` on `{object_id}`"
            )));
        }
        self.emitted.push(EmittedEvent {
            event: event.to_owned(),
            object_id: object_id.to_owned(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_requires_known_object() {
        let mut scene = MemoryScene::new().with_object("door", Vec3::ZERO);
        assert!(scene.emit("open", "door").is_ok());
        assert_eq!(
            scene.emit("open", "window"),
            Err(EmitError::UnknownObject("window".into()))
        );
        assert_eq!(scene.count_emitted("open", "door"), 1);
    }

    #[test]
    fn rejected_emits_are_not_logged() {
        let mut scene = MemoryScene::new().with_object("door", Vec3::ZERO);
        scene.set_reject_emits(true);
        assert!(matches!(
            scene.emit("open", "door"),
            Err(EmitError::Rejected(_))
        ));
        assert!(scene.emitted().is_empty());
    }

    #[test]
    fn camera_handle_can_go_away() {
        let mut scene = MemoryScene::new();
        assert!(scene.camera_mut().is_some());
        scene.drop_camera();
        assert!(scene.camera_mut().is_none());
        scene.attach_camera(CameraTransform::default());
        assert!(scene.camera().is_some());
    }

    #[test]
    fn object_rotation_is_mutable() {
        let mut scene = MemoryScene::new().with_object("statue", Vec3::X);
        if let Some(rot) = scene.object_rotation_mut("statue") {
            rot.y = 1.0;
        }
        assert_eq!(scene.object("statue").map(|o| o.rotation.y), Some(1.0));
        assert_eq!(scene.object_position("statue"), Some(Vec3::X));
    }
}
