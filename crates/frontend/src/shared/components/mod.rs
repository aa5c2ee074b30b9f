pub mod form_field;
pub mod post_card;
