use crate::core::scene::Scene;
use crate::renderer::sdf_instance::{SDFBuffer, SDFInstance};

/// Build the SDF instance buffer from entities with mesh components,
/// back-to-front by layer. Returns the number of meshes that did not fit.
pub fn build_sdf_buffer(scene: &Scene, buffer: &mut SDFBuffer) -> usize {
    buffer.clear();
    let mut dropped = 0;
    for entity in scene.iter_layered() {
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let pushed = buffer.push(SDFInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            radius: mesh.radius(),
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            a: mesh.color.a,
            layer: entity.layer.as_u8() as f32,
        });
        if !pushed {
            dropped += 1;
        }
    }
    dropped
}

/// Number of active entities that will produce an SDF instance.
pub fn count_meshes(scene: &Scene) -> usize {
    scene.iter().filter(|e| e.active && e.mesh.is_some()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::Entity;
    use crate::components::layer::RenderLayer;
    use crate::components::mesh::{MeshComponent, SDFColor};
    use glam::Vec2;

    #[test]
    fn build_sdf_buffer_from_entity_with_mesh() {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(50.0, 75.0))
                .with_mesh(MeshComponent::circle(15.0, SDFColor::new(1.0, 0.0, 0.0))),
        );

        let mut buffer = SDFBuffer::new();
        assert_eq!(build_sdf_buffer(&scene, &mut buffer), 0);

        let inst = buffer.instances()[0];
        assert_eq!((inst.x, inst.y, inst.radius), (50.0, 75.0, 15.0));
        assert_eq!((inst.r, inst.g, inst.b, inst.a), (1.0, 0.0, 0.0, 1.0));
        assert_eq!(inst.layer, RenderLayer::Objects.as_u8() as f32);
    }

    #[test]
    fn skips_inactive_and_meshless_and_orders_by_layer() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)));
        let mut hidden = Entity::new(EntityId(2)).with_mesh(MeshComponent::circle(1.0, SDFColor::WHITE));
        hidden.active = false;
        scene.spawn(hidden);
        scene.spawn(Entity::new(EntityId(3)).with_mesh(MeshComponent::circle(3.0, SDFColor::WHITE)));
        scene.spawn(
            Entity::new(EntityId(4))
                .with_layer(RenderLayer::Background)
                .with_mesh(MeshComponent::circle(4.0, SDFColor::WHITE)),
        );

        let mut buffer = SDFBuffer::new();
        build_sdf_buffer(&scene, &mut buffer);
        let radii: Vec<f32> = buffer.instances().iter().map(|i| i.radius).collect();
        assert_eq!(radii, vec![4.0, 3.0]);
        assert_eq!(count_meshes(&scene), 2);
    }

    #[test]
    fn reports_overflow() {
        let mut scene = Scene::new();
        for i in 0..3 {
            scene.spawn(Entity::new(EntityId(i)).with_mesh(MeshComponent::circle(1.0, SDFColor::WHITE)));
        }
        let mut buffer = SDFBuffer::with_capacity(2);
        assert_eq!(build_sdf_buffer(&scene, &mut buffer), 1);
    }
}
