pub mod components;
pub mod load_state;
pub mod notification;
