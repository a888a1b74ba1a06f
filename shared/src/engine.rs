use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaCha8Rng,
};
use tracing::{debug, trace};

use crate::{Palette, Particle, SparkleConfig, Throttle};

/// Slack allowed when comparing a frame delta against the target interval, so
/// timestamps spaced exactly one interval apart are not rejected by rounding.
const FRAME_TOLERANCE: f64 = 1e-6;

/// What a call to [`Engine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The page is hidden; nothing was touched.
    Hidden,
    /// Less than one frame interval since the last processed tick.
    FrameCapped,
    /// Both pools were advanced.
    Advanced { delta: f64, time_factor: f64 },
}

/// Cursor particle simulation: a pool of stars spawned by pointer movement and a
/// pool of tiny dots, both advanced once per display frame.
pub struct Engine {
    config: SparkleConfig,
    stars: Vec<Particle>,
    dots: Vec<Particle>,
    last_tick: f64,
    active: bool,
    next_id: u64,
    spawn_throttle: Throttle,
    palette: Palette,
    rng: ChaCha8Rng,
}

impl Engine {
    pub fn new(config: SparkleConfig, seed: u64, now: f64) -> Engine {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let palette = Palette::generate(config.palette_size, &mut rng);

        Engine {
            spawn_throttle: Throttle::new(config.throttle_ms),
            stars: Vec::with_capacity(config.capacity),
            dots: Vec::new(),
            last_tick: now,
            active: true,
            next_id: 0,
            palette,
            rng,
            config,
        }
    }

    pub fn stars(&self) -> &[Particle] {
        &self.stars
    }

    pub fn dots(&self) -> &[Particle] {
        &self.dots
    }

    /// No particles left in either pool; the frame loop may stop.
    pub fn is_idle(&self) -> bool {
        self.stars.is_empty() && self.dots.is_empty()
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn unit(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Spawns a star at `(x, y)` unless hidden, full or throttled.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, now: f64) -> Option<u64> {
        if !self.active || self.stars.len() >= self.config.capacity {
            trace!(stars = self.stars.len(), active = self.active, "spawn suppressed");
            return None;
        }

        if !self.spawn_throttle.accept(now) {
            return None;
        }

        if self.is_idle() {
            self.last_tick = now;
        }

        let id = self.next_id();
        let color = self.palette.pick(&mut self.rng);
        let velocity = ((self.unit() - 0.5) * 2.0, 1.0 + self.unit() * 3.0);

        self.stars.push(Particle::new(
            id,
            (x, y),
            velocity,
            color,
            self.config.initial_size,
        ));

        debug!(id, stars = self.stars.len(), "star spawned");

        Some(id)
    }

    /// Adds a tiny dot at `(x, y)`. Dots only age and disappear once their life runs out.
    pub fn push_dot(&mut self, x: f64, y: f64) -> Option<u64> {
        if self.dots.len() >= self.config.capacity {
            return None;
        }

        let id = self.next_id();
        let color = self.palette.pick(&mut self.rng);

        self.dots.push(Particle::new(
            id,
            (x, y),
            (0.0, 0.0),
            color,
            self.config.initial_size,
        ));

        Some(id)
    }

    /// Inserts a fully specified star, bypassing the pointer path.
    pub fn push_star(&mut self, x: f64, y: f64, velocity: (f64, f64)) -> Option<u64> {
        if self.stars.len() >= self.config.capacity {
            return None;
        }

        let id = self.next_id();
        let color = self.palette.pick(&mut self.rng);

        self.stars.push(Particle::new(
            id,
            (x, y),
            velocity,
            color,
            self.config.initial_size,
        ));

        Some(id)
    }

    /// Returns whether the frame loop has to run again, i.e. the page is visible and
    /// particles are waiting to be advanced.
    pub fn set_active(&mut self, is_visible: bool, now: f64) -> bool {
        if is_visible && !self.active {
            self.last_tick = now;
        }

        self.active = is_visible;

        is_visible && !self.is_idle()
    }

    pub fn tick(&mut self, now: f64) -> TickOutcome {
        if !self.active {
            return TickOutcome::Hidden;
        }

        let delta = now - self.last_tick;

        if delta + FRAME_TOLERANCE < self.config.frame_ms {
            trace!(delta, "frame capped");
            return TickOutcome::FrameCapped;
        }

        self.last_tick = now;

        let time_factor = delta / self.config.frame_ms;
        let SparkleConfig {
            size_decay,
            size_floor,
            life_rate,
            life_threshold,
            ..
        } = self.config;

        let stars: Vec<Particle> = self
            .stars
            .iter()
            .map(|star| star.advanced(time_factor, size_decay, size_floor, life_rate))
            .filter(|star| star.is_alive(size_floor, life_threshold))
            .collect();

        let dots: Vec<Particle> = self
            .dots
            .iter()
            .map(|dot| dot.aged(time_factor, life_rate))
            .filter(|dot| dot.life < life_threshold)
            .collect();

        let retired = (self.stars.len() - stars.len()) + (self.dots.len() - dots.len());

        if retired > 0 {
            debug!(retired, stars = stars.len(), dots = dots.len(), "particles retired");
        }

        self.stars = stars;
        self.dots = dots;

        TickOutcome::Advanced { delta, time_factor }
    }
}
