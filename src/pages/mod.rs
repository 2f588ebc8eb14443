pub mod home;
pub mod privacy;
