/// Circular orbit math, pure and engine-free.
///
/// Angles are f64 and never wrapped, so long runs stay exact enough to
/// compare against `start + n * increment`. Conversion to f32 screen
/// coordinates happens in game.rs.

use crate::bodies::Moon;

/// Angular state of one body on a circular orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub radius: f64,
    /// Radians, unbounded.
    pub angle: f64,
    /// Radians added per step.
    pub increment: f64,
}

impl Orbit {
    pub fn new(radius: f64, increment: f64) -> Self {
        Self { radius, angle: 0.0, increment }
    }

    /// Advance by one increment. Returns the new angle.
    pub fn advance(&mut self) -> f64 {
        self.angle += self.increment;
        self.angle
    }

    /// Position on the circle around `center` at the current angle.
    pub fn position(&self, center: (f64, f64)) -> (f64, f64) {
        circle_point(center, self.radius, self.angle)
    }
}

/// Point on a circle of `radius` around `center` at `angle` radians.
pub fn circle_point(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
}

/// Angles of every orbiting moon, owned by the game.
#[derive(Debug, Clone)]
pub struct OrbitState {
    orbits: Vec<Orbit>,
}

impl OrbitState {
    pub fn from_moons(moons: &[Moon]) -> Self {
        Self {
            orbits: moons.iter().map(|m| Orbit::new(m.radius, m.increment)).collect(),
        }
    }

    /// Advance every orbit by one step.
    pub fn step(&mut self) {
        for orbit in &mut self.orbits {
            orbit.advance();
        }
    }

    pub fn get(&self, index: usize) -> Option<&Orbit> {
        self.orbits.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Orbit> {
        self.orbits.iter()
    }

    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{CENTER, MOONS};

    #[test]
    fn starts_at_angle_zero() {
        let orbit = Orbit::new(100.0, 0.05);
        let (x, y) = orbit.position(CENTER);
        assert_eq!((x, y), (500.0, 300.0));
    }

    #[test]
    fn angle_grows_linearly() {
        let mut orbit = Orbit::new(150.0, 0.03);
        for _ in 0..1000 {
            orbit.advance();
        }
        assert!((orbit.angle - 30.0).abs() < 1e-9, "angle = {}", orbit.angle);
    }

    #[test]
    fn angle_is_not_wrapped() {
        let mut orbit = Orbit::new(45.0, 0.1);
        for _ in 0..100 {
            orbit.advance();
        }
        assert!(orbit.angle > std::f64::consts::TAU);
    }

    #[test]
    fn distance_from_center_is_radius() {
        let mut state = OrbitState::from_moons(&MOONS);
        for _ in 0..37 {
            state.step();
        }
        for orbit in state.iter() {
            let (x, y) = orbit.position(CENTER);
            let d = ((x - CENTER.0).powi(2) + (y - CENTER.1).powi(2)).sqrt();
            assert!((d - orbit.radius).abs() < 1e-9, "distance {d} vs radius {}", orbit.radius);
        }
    }

    #[test]
    fn state_tracks_every_moon() {
        let mut state = OrbitState::from_moons(&MOONS);
        assert_eq!(state.len(), MOONS.len());
        state.step();
        for (orbit, moon) in state.iter().zip(MOONS.iter()) {
            assert_eq!(orbit.angle, moon.increment);
        }
        assert!(state.get(MOONS.len()).is_none());
    }
}
