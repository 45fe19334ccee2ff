pub mod checks;
pub mod home;
pub mod not_found;
