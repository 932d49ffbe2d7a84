pub mod hod;
pub mod login;
pub mod profile;
