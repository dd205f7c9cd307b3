mod catalog;
mod leaders;
mod player;
mod ranking;

pub use catalog::*;
pub use leaders::*;
pub use player::*;
pub use ranking::*;
