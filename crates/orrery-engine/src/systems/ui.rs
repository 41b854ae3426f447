//! Pointer hit testing for button entities.

use crate::api::types::EntityId;
use crate::core::scene::Scene;
use crate::input::queue::{InputEvent, InputQueue};

/// Feed pointer events through every active button and return the buttons
/// that completed a click, in event order.
pub fn collect_clicks(scene: &mut Scene, input: &InputQueue) -> Vec<EntityId> {
    let mut clicks = Vec::new();
    for event in input.iter() {
        let point = event.position();
        match event {
            InputEvent::PointerDown { .. } => {
                for entity in scene.iter_mut().filter(|e| e.active) {
                    let pos = entity.pos;
                    if let Some(button) = entity.button.as_mut() {
                        button.armed = button.contains(pos, point);
                    }
                }
            }
            InputEvent::PointerUp { .. } => {
                for entity in scene.iter_mut().filter(|e| e.active) {
                    let pos = entity.pos;
                    if let Some(button) = entity.button.as_mut() {
                        if button.armed && button.contains(pos, point) {
                            clicks.push(entity.id);
                        }
                        button.armed = false;
                    }
                }
            }
            InputEvent::PointerMove { .. } => {}
        }
    }
    clicks
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::components::button::ButtonComponent;
    use crate::components::entity::Entity;

    fn scene_with_button() -> Scene {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(7))
                .with_pos(Vec2::new(10.0, 10.0))
                .with_button(ButtonComponent::new(Vec2::new(50.0, 50.0))),
        );
        scene.spawn(Entity::new(EntityId(8)).with_pos(Vec2::new(10.0, 10.0)));
        scene
    }

    #[test]
    fn press_and_release_inside_clicks() {
        let mut scene = scene_with_button();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 20.0, y: 20.0 });
        input.push(InputEvent::PointerMove { x: 25.0, y: 25.0 });
        input.push(InputEvent::PointerUp { x: 30.0, y: 30.0 });
        assert_eq!(collect_clicks(&mut scene, &input), vec![EntityId(7)]);
        assert!(!scene.get(EntityId(7)).unwrap().button.unwrap().armed);
    }

    #[test]
    fn release_outside_cancels() {
        let mut scene = scene_with_button();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 20.0, y: 20.0 });
        input.push(InputEvent::PointerUp { x: 300.0, y: 300.0 });
        assert!(collect_clicks(&mut scene, &input).is_empty());
    }

    #[test]
    fn press_outside_never_clicks() {
        let mut scene = scene_with_button();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 400.0, y: 300.0 });
        input.push(InputEvent::PointerUp { x: 20.0, y: 20.0 });
        assert!(collect_clicks(&mut scene, &input).is_empty());
    }

    #[test]
    fn press_survives_across_frames() {
        let mut scene = scene_with_button();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 20.0, y: 20.0 });
        assert!(collect_clicks(&mut scene, &input).is_empty());
        input.clear();
        input.push(InputEvent::PointerUp { x: 21.0, y: 21.0 });
        assert_eq!(collect_clicks(&mut scene, &input), vec![EntityId(7)]);
    }

    #[test]
    fn inactive_button_ignored() {
        let mut scene = scene_with_button();
        scene.get_mut(EntityId(7)).unwrap().active = false;
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 20.0, y: 20.0 });
        input.push(InputEvent::PointerUp { x: 20.0, y: 20.0 });
        assert!(collect_clicks(&mut scene, &input).is_empty());
    }
}
