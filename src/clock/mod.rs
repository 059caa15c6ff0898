pub mod angles;
pub mod arcs;
pub mod color;
pub mod countdown;
pub mod error;
pub mod face;
pub mod live;
pub mod parse;
pub mod scheduler;
pub mod ticks;
pub mod timezone;
