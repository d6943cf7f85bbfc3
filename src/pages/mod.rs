pub mod home;
pub mod review;
pub mod spice;
