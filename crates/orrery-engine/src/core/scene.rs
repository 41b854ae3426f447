use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Flat entity storage for a small, mostly static scene.
/// Spawn order is preserved; render systems sort by layer on top of it.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Active entities ordered back-to-front by render layer.
    /// Entities on the same layer keep their spawn order.
    pub fn iter_layered(&self) -> impl Iterator<Item = &Entity> {
        let mut ordered: Vec<&Entity> = self.entities.iter().filter(|e| e.active).collect();
        ordered.sort_by_key(|e| e.layer);
        ordered.into_iter()
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layer::RenderLayer;
    use glam::Vec2;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec2::new(10.0, 20.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn iteration_keeps_spawn_order() {
        let mut scene = Scene::new();
        for i in [3, 1, 2] {
            scene.spawn(Entity::new(EntityId(i)));
        }
        let ids: Vec<u32> = scene.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(scene.get(EntityId(9)).is_none());
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("moon"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("label"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("moon"));
        assert_eq!(scene.find_by_tag("label").unwrap().id, EntityId(2));
        assert_eq!(scene.find_by_tag("moon").unwrap().id, EntityId(1));
        assert!(scene.find_by_tag("ring").is_none());
    }

    #[test]
    fn layered_iteration_is_back_to_front_and_stable() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_layer(RenderLayer::Ui));
        scene.spawn(Entity::new(EntityId(2)));
        scene.spawn(Entity::new(EntityId(3)).with_layer(RenderLayer::Background));
        scene.spawn(Entity::new(EntityId(4)));
        let mut hidden = Entity::new(EntityId(5));
        hidden.active = false;
        scene.spawn(hidden);

        let ids: Vec<u32> = scene.iter_layered().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }
}
