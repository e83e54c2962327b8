pub mod clock;
pub mod constants;
pub mod engine;
pub mod entity;
pub mod record;
pub mod source;
pub mod trajectory;
pub mod visual;

pub use clock::*;
pub use constants::*;
pub use engine::*;
pub use entity::*;
pub use record::*;
pub use source::*;
pub use trajectory::*;
pub use visual::*;
