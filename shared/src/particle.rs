use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// A single star or tiny dot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u64,
    /// `(left, top)` in page pixels.
    pub position: (f64, f64),
    pub color: Rgb,
    pub visible: bool,
    pub size: f64,
    pub life: f64,
    velocity: (f64, f64),
}

impl Particle {
    pub fn new(
        id: u64,
        position: (f64, f64),
        velocity: (f64, f64),
        color: Rgb,
        size: f64,
    ) -> Particle {
        Particle {
            id,
            position,
            color,
            visible: true,
            size,
            life: 0.0,
            velocity,
        }
    }

    #[cfg(test)]
    pub fn velocity(&self) -> (f64, f64) {
        self.velocity
    }

    /// Moves, shrinks and ages a star by one step scaled by `time_factor`.
    pub fn advanced(
        &self,
        time_factor: f64,
        size_decay: f64,
        size_floor: f64,
        life_rate: f64,
    ) -> Particle {
        let size = (self.size - size_decay * time_factor).max(size_floor);

        Particle {
            position: (
                self.position.0 + self.velocity.0 * time_factor,
                self.position.1 + self.velocity.1 * time_factor,
            ),
            visible: size > size_floor,
            size,
            life: self.life + life_rate * time_factor,
            ..self.clone()
        }
    }

    /// Ages a dot in place; dots neither move nor shrink.
    pub fn aged(&self, time_factor: f64, life_rate: f64) -> Particle {
        Particle {
            life: self.life + life_rate * time_factor,
            ..self.clone()
        }
    }

    pub fn is_alive(&self, size_floor: f64, life_threshold: f64) -> bool {
        self.size > size_floor || self.life < life_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_renders_as_css() {
        assert_eq!(Rgb(255, 12, 0).to_string(), "rgb(255, 12, 0)");
    }

    #[test]
    fn size_never_drops_below_floor() {
        let mut particle = Particle::new(0, (0.0, 0.0), (0.0, 0.0), Rgb(255, 0, 0), 2.01);

        particle = particle.advanced(3.0, 0.05, 2.0, 0.5);

        assert_eq!(particle.size, 2.0);
        assert!(!particle.visible);
    }

    #[test]
    fn star_dies_only_when_small_and_old() {
        let mut particle = Particle::new(0, (0.0, 0.0), (0.0, 0.0), Rgb(255, 0, 0), 2.0);
        assert!(particle.is_alive(2.0, 100.0));

        particle.life = 100.0;
        assert!(!particle.is_alive(2.0, 100.0));

        particle.size = 2.5;
        assert!(particle.is_alive(2.0, 100.0));
    }
}
