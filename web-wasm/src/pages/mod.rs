pub mod home;
pub mod learn;
pub mod tool;
