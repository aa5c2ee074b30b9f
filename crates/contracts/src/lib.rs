//! Wire contract between the PetStar frontend and its backend API.
//!
//! Field names follow the backend's JSON (camelCase, including its own
//! spellings such as `forumTopicTittle`).

pub mod auth;
pub mod cloudinary;
pub mod common;
pub mod forum;
pub mod posts;
