pub mod cloudinary;
pub mod forum;
pub mod general;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod profile_page;
pub mod profiles;
pub mod restore_password;
pub mod signup;
pub mod single;
