pub mod constants;
pub mod effect;
pub mod field;
pub mod glow;
pub mod monitor;
pub mod particle;
pub mod probe;
pub mod quality;
pub mod render;
pub mod scheduler;
pub mod tier;

pub use constants::*;
pub use effect::*;
pub use field::*;
pub use glow::*;
pub use monitor::*;
pub use particle::*;
pub use probe::*;
pub use quality::*;
pub use render::*;
pub use scheduler::*;
pub use tier::*;
