pub mod api;
pub mod roster;
