mod app;
mod frame;

pub use app::*;
pub use frame::*;
