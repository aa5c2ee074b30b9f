//! Registration draft and its dispatch decision.

use contracts::auth::RegisterRequest;

use super::Rejection;
use crate::api::ApiError;
use crate::shared::notification::Notice;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub petstar_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

impl SignupForm {
    /// Terms are checked before the password confirmation.
    pub fn validate(&self) -> Result<RegisterRequest, Rejection> {
        if !self.terms_accepted {
            return Err(Rejection::TermsNotAccepted);
        }
        if self.password != self.confirm_password {
            return Err(Rejection::PasswordMismatch);
        }

        Ok(RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            pet_star: self.petstar_name.clone(),
            user_photo: None,
            breed: None,
            birth_date: None,
            hobbies: None,
        })
    }

    /// The request to send, or the notice explaining why nothing is sent.
    pub fn submit(&self) -> Result<RegisterRequest, Notice> {
        self.validate().map_err(|rejection| rejection.notice())
    }
}

/// Notice shown once the registration call settles.
pub fn outcome_notice(result: &Result<(), ApiError>) -> Notice {
    match result {
        Ok(()) => Notice::success("Account created successfully!"),
        Err(e) => Notice::error("Registration failed").with_text(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::NoticeKind;

    fn filled(password: &str, confirm: &str, terms: bool) -> SignupForm {
        SignupForm {
            petstar_name: "Rex".into(),
            email: "a@b.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
            terms_accepted: terms,
        }
    }

    #[test]
    fn terms_not_accepted_never_dispatches() {
        for form in [filled("x", "x", false), filled("x", "y", false), filled("", "", false)] {
            let notice = form.submit().unwrap_err();
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(notice.title, "You must accept the terms and conditions");
        }
    }

    #[test]
    fn mismatched_passwords_never_dispatch() {
        let notice = filled("x", "y", true).submit().unwrap_err();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Passwords do not match");
    }

    #[test]
    fn valid_form_dispatches_entered_values() {
        let request = filled("x", "x", true).submit().unwrap();
        assert_eq!(
            request,
            RegisterRequest {
                email: "a@b.com".into(),
                password: "x".into(),
                confirm_password: "x".into(),
                pet_star: "Rex".into(),
                user_photo: None,
                breed: None,
                birth_date: None,
                hobbies: None,
            }
        );
    }

    #[test]
    fn success_notice_confirms_account() {
        let notice = outcome_notice(&Ok(()));
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.title, "Account created successfully!");
    }

    #[test]
    fn failure_notice_shows_backend_message() {
        let result = Err(ApiError::Rejected {
            status: 400,
            message: "The email used is already in use".into(),
        });
        let notice = outcome_notice(&result);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Registration failed");
        assert_eq!(notice.text.as_deref(), Some("The email used is already in use"));
    }
}
