pub mod player;
pub mod pointer;
pub mod scroll;

pub use player::{wire_player, PlayerReadouts, PlayerWiring};
pub use pointer::wire_orbit_controls;
pub use scroll::wire_parallax;
