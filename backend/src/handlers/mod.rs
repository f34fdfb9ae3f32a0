pub mod events;
pub mod family;
pub mod health;
pub mod users;
