use serde::{Deserialize, Serialize};

use crate::object::GameObject;
use gameloop_common::ObjectId;

/// An event record produced by every mutation to the manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectEvent {
    /// Object was added to the scene.
    Added { id: ObjectId, name: String },
    /// Object was activated or deactivated.
    ActivityChanged { id: ObjectId, active: bool },
    /// `update_all` ran; `updated` counts the active objects it touched.
    Stepped { tick: u64, updated: usize },
}

/// Errors from manager operations.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("object {0:?} not found")]
    NotFound(ObjectId),
}

/// Owns every game object and drives the per-frame update.
///
/// Objects are kept in insertion order and never removed. Deactivating an
/// object excludes it from [`ObjectManager::update_all`] and from
/// [`ObjectManager::active`], which renderers iterate.
#[derive(Debug, Clone, Default)]
pub struct ObjectManager {
    objects: Vec<GameObject>,
    tick: u64,
    /// Append-only log of all mutations.
    events: Vec<ObjectEvent>,
}

impl ObjectManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed `update_all` calls.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Add an object to the scene. Returns its id.
    pub fn add(&mut self, object: GameObject) -> ObjectId {
        let id = object.id();
        tracing::info!(
            id = %id.short(),
            name = object.name(),
            kind = %object.kind(),
            "added to the game"
        );
        self.events.push(ObjectEvent::Added {
            id,
            name: object.name().to_owned(),
        });
        self.objects.push(object);
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// First object with the given name, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.name() == name)
    }

    /// Activate or deactivate an object and log the change.
    pub fn set_active(&mut self, id: ObjectId, active: bool) -> Result<(), ObjectError> {
        let object = self
            .objects
            .iter_mut()
            .find(|o| o.id() == id)
            .ok_or(ObjectError::NotFound(id))?;
        if object.active != active {
            object.active = active;
            tracing::debug!(name = object.name(), active, "activity changed");
            self.events.push(ObjectEvent::ActivityChanged { id, active });
        }
        Ok(())
    }

    /// Update every active object by `dt` seconds. Returns how many ran.
    pub fn update_all(&mut self, dt: f32) -> usize {
        let _span = tracing::debug_span!("update_all", tick = self.tick + 1).entered();
        let mut updated = 0;
        for object in self.objects.iter_mut().filter(|o| o.active) {
            object.update(dt);
            updated += 1;
        }
        self.tick += 1;
        self.events.push(ObjectEvent::Stepped {
            tick: self.tick,
            updated,
        });
        updated
    }

    /// Active objects in insertion order. This is what gets rendered.
    pub fn active(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.iter().filter(|o| o.active)
    }

    /// All objects, active or not, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.iter()
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[ObjectEvent] {
        &self.events
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<ObjectEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectKind;
    use glam::Vec2;

    fn demo_scene() -> (ObjectManager, ObjectId, ObjectId) {
        let mut m = ObjectManager::new();
        let hero = m.add(GameObject::player("Hero", 0.0, 0.0));
        let goblin = m.add(GameObject::enemy("Goblin", 10.0, 0.0));
        (m, hero, goblin)
    }

    #[test]
    fn manager_starts_empty() {
        let m = ObjectManager::new();
        assert!(m.is_empty());
        assert_eq!(m.tick(), 0);
    }

    #[test]
    fn end_to_end_single_second() {
        let (mut m, hero, goblin) = demo_scene();
        assert_eq!(m.update_all(1.0), 2);
        assert_eq!(m.get(hero).unwrap().transform().position(), Vec2::new(1.0, 0.0));
        assert_eq!(m.get(goblin).unwrap().transform().position(), Vec2::new(9.5, 0.0));
    }

    #[test]
    fn inactive_object_is_not_updated() {
        let (mut m, hero, goblin) = demo_scene();
        m.set_active(goblin, false).unwrap();
        assert_eq!(m.update_all(1.0), 1);
        assert_eq!(m.get(goblin).unwrap().transform().position(), Vec2::new(10.0, 0.0));
        assert_eq!(m.get(hero).unwrap().transform().position(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn inactive_object_is_not_listed_for_render() {
        let (mut m, _, goblin) = demo_scene();
        m.set_active(goblin, false).unwrap();
        let names: Vec<&str> = m.active().map(|o| o.name()).collect();
        assert_eq!(names, vec!["Hero"]);
        assert_eq!(m.iter().count(), 2);
    }

    #[test]
    fn deactivation_via_get_mut_also_gates() {
        let (mut m, hero, _) = demo_scene();
        m.get_mut(hero).unwrap().active = false;
        m.update_all(1.0);
        assert_eq!(m.get(hero).unwrap().transform().position(), Vec2::ZERO);
    }

    #[test]
    fn reactivated_object_resumes() {
        let (mut m, _, goblin) = demo_scene();
        m.set_active(goblin, false).unwrap();
        m.update_all(1.0);
        m.set_active(goblin, true).unwrap();
        m.update_all(1.0);
        assert_eq!(m.get(goblin).unwrap().transform().position().x, 9.5);
    }

    #[test]
    fn set_active_unknown_id_errors() {
        let (mut m, _, _) = demo_scene();
        let err = m.set_active(ObjectId::new(), false).unwrap_err();
        assert!(matches!(err, ObjectError::NotFound(_)));
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut m = ObjectManager::new();
        for (i, kind) in [ObjectKind::Item, ObjectKind::Player, ObjectKind::Obstacle]
            .into_iter()
            .enumerate()
        {
            m.add(GameObject::new(format!("obj_{i}"), kind, 0.0, 0.0));
        }
        let names: Vec<&str> = m.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["obj_0", "obj_1", "obj_2"]);
    }

    #[test]
    fn find_by_name() {
        let (m, hero, _) = demo_scene();
        assert_eq!(m.find_by_name("Hero").map(|o| o.id()), Some(hero));
        assert!(m.find_by_name("Dragon").is_none());
    }

    #[test]
    fn events_are_recorded() {
        let (mut m, _, goblin) = demo_scene();
        m.set_active(goblin, false).unwrap();
        // Setting the same value again is not a change.
        m.set_active(goblin, false).unwrap();
        m.update_all(0.016);
        let events = m.events();
        assert_eq!(events.len(), 4); // 2 adds + 1 activity change + 1 step
        assert_eq!(
            events[3],
            ObjectEvent::Stepped {
                tick: 1,
                updated: 1
            }
        );
    }

    #[test]
    fn drain_events_clears_log() {
        let (mut m, _, _) = demo_scene();
        let events = m.drain_events();
        assert_eq!(events.len(), 2);
        assert!(m.events().is_empty());
    }

    #[test]
    fn sixty_frames_at_fixed_step() {
        let (mut m, hero, goblin) = demo_scene();
        for _ in 0..60 {
            m.update_all(0.016);
        }
        assert_eq!(m.tick(), 60);
        let hx = m.get(hero).unwrap().transform().position().x;
        let gx = m.get(goblin).unwrap().transform().position().x;
        assert!((hx - 0.96).abs() < 1e-4);
        assert!((gx - 9.52).abs() < 1e-4);
    }
}
