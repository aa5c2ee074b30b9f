use contracts::auth::{LoginRequest, RestoreLinkRequest};

use super::{require, Rejection};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub terms_accepted: bool,
}

impl LoginForm {
    /// Prefills the email, e.g. right after a registration.
    pub fn for_email(email: Option<String>) -> Self {
        Self {
            email: email.unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<LoginRequest, Rejection> {
        if !self.terms_accepted {
            return Err(Rejection::TermsNotAccepted);
        }
        Ok(LoginRequest {
            email: require(&self.email, "Email")?,
            password: require(&self.password, "Password")?,
        })
    }
}

/// "Forgot password" draft on the login page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestoreLinkForm {
    pub email: String,
}

impl RestoreLinkForm {
    pub fn validate(&self) -> Result<RestoreLinkRequest, Rejection> {
        Ok(RestoreLinkRequest {
            email: require(&self.email, "Email")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_are_checked_first() {
        let form = LoginForm {
            email: String::new(),
            password: String::new(),
            terms_accepted: false,
        };
        assert_eq!(form.validate(), Err(Rejection::TermsNotAccepted));
    }

    #[test]
    fn credentials_are_required_and_email_trimmed() {
        let mut form = LoginForm::for_email(Some(" a@b.com ".into()));
        form.terms_accepted = true;
        assert_eq!(form.validate(), Err(Rejection::Missing("Password")));

        form.password = "secret".into();
        assert_eq!(
            form.validate(),
            Ok(LoginRequest {
                email: "a@b.com".into(),
                password: "secret".into(),
            })
        );
    }

    #[test]
    fn restore_link_needs_email() {
        assert_eq!(
            RestoreLinkForm::default().validate(),
            Err(Rejection::Missing("Email"))
        );
    }
}
