use glam::Vec2;

/// Clickable rectangle anchored at the entity position (top-left corner).
///
/// A click is a pointer press and a pointer release that both land inside
/// the rectangle. Releasing outside cancels the press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonComponent {
    pub size: Vec2,
    /// Set between a press inside the button and the matching release.
    pub armed: bool,
}

impl ButtonComponent {
    pub fn new(size: Vec2) -> Self {
        Self { size, armed: false }
    }

    /// Whether `point` lies inside the button placed at `origin`.
    pub fn contains(&self, origin: Vec2, point: Vec2) -> bool {
        let max = origin + self.size;
        point.x >= origin.x && point.y >= origin.y && point.x <= max.x && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let b = ButtonComponent::new(Vec2::new(50.0, 40.0));
        let origin = Vec2::new(10.0, 10.0);
        assert!(b.contains(origin, Vec2::new(10.0, 10.0)));
        assert!(b.contains(origin, Vec2::new(60.0, 50.0)));
        assert!(b.contains(origin, Vec2::new(30.0, 30.0)));
        assert!(!b.contains(origin, Vec2::new(9.9, 30.0)));
        assert!(!b.contains(origin, Vec2::new(30.0, 50.1)));
    }
}
