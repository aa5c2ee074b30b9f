//! Typed form drafts.
//!
//! Each draft validates into the request it would send, or a [`Rejection`]
//! that is shown to the user without touching the network.

pub mod content;
pub mod login;
pub mod password;
pub mod profile;
pub mod signup;

use crate::shared::notification::Notice;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("New password must be different from old password")]
    PasswordUnchanged,
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("This link is invalid")]
    InvalidLink,
}

impl Rejection {
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}

pub(crate) fn require(value: &str, field: &'static str) -> Result<String, Rejection> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Rejection::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_trims_and_rejects_blank() {
        assert_eq!(require("  Rex ", "PetStar name"), Ok("Rex".to_string()));
        assert_eq!(
            require("   ", "PetStar name"),
            Err(Rejection::Missing("PetStar name"))
        );
        assert_eq!(
            Rejection::Missing("Email").to_string(),
            "Email is required"
        );
    }

    #[test]
    fn optional_maps_blank_to_none() {
        assert_eq!(optional(""), None);
        assert_eq!(optional(" pug "), Some("pug".to_string()));
    }
}
