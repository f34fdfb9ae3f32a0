//! Types and calendar logic shared by the backend and the Yew frontend.

pub mod api;
pub mod attendees;
pub mod calendar;
pub mod clock;
pub mod family;
pub mod flappy;
pub mod forms;
pub mod games;
pub mod models;
