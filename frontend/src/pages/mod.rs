pub mod bird;
pub mod games;
pub mod home;
pub mod not_found;
