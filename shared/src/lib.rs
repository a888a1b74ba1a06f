mod config;
pub use config::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod palette;
pub use palette::*;

mod particle;
pub use particle::*;

pub mod progress;
pub mod scheme;
pub mod tag;

mod throttle;
pub use throttle::*;

pub mod toc;

pub use scheme::{Scheme, SchemeSetting};
