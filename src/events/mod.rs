mod animation;
mod pointer;

pub use animation::subscribe_once;
pub use pointer::{wire_mousemove, TrailEmitter};
