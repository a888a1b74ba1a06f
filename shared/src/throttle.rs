/// Leading-edge rate limiter over host timestamps in milliseconds.
///
/// The first attempt is always accepted; later attempts are accepted once
/// `interval` has passed since the last accepted one. Rejected attempts do not
/// move the window.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: f64,
    last_accepted: Option<f64>,
}

impl Throttle {
    pub fn new(interval: f64) -> Throttle {
        Throttle {
            interval,
            last_accepted: None,
        }
    }

    /// Whether an attempt at `now` would pass, without recording it.
    pub fn ready(&self, now: f64) -> bool {
        match self.last_accepted {
            Some(last) => now - last >= self.interval,
            None => true,
        }
    }

    pub fn accept(&mut self, now: f64) -> bool {
        if self.ready(now) {
            self.last_accepted = Some(now);
            true
        } else {
            false
        }
    }
}
