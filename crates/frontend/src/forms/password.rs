use contracts::auth::{ChangePasswordRequest, RestorePasswordRequest};
use uuid::Uuid;

use super::{require, Rejection};

/// New password chosen through a mailed restore link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestorePasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl RestorePasswordForm {
    pub fn validate(&self, token: Option<&str>) -> Result<RestorePasswordRequest, Rejection> {
        let uuid = parse_restore_token(token)?;
        let password = require(&self.password, "Password")?;
        if self.password != self.confirm_password {
            return Err(Rejection::PasswordMismatch);
        }
        Ok(RestorePasswordRequest {
            uuid: uuid.to_string(),
            password,
        })
    }
}

/// The `:uuid` route segment of a restore link.
pub fn parse_restore_token(token: Option<&str>) -> Result<Uuid, Rejection> {
    token
        .and_then(|t| Uuid::parse_str(t.trim()).ok())
        .ok_or(Rejection::InvalidLink)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

impl ChangePasswordForm {
    pub fn validate(&self) -> Result<ChangePasswordRequest, Rejection> {
        let old_password = require(&self.old_password, "Current password")?;
        let new_password = require(&self.new_password, "New password")?;
        if self.new_password == self.old_password {
            return Err(Rejection::PasswordUnchanged);
        }
        if self.new_password != self.confirm_new_password {
            return Err(Rejection::PasswordMismatch);
        }
        Ok(ChangePasswordRequest {
            old_password,
            new_password,
            confirm_new_password: self.confirm_new_password.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "3f2b8c1e-9a4d-4e7b-8f61-2c5d9e0a7b14";

    #[test]
    fn restore_rejects_bad_links_before_anything_else() {
        let form = RestorePasswordForm {
            password: "x".into(),
            confirm_password: "x".into(),
        };
        assert_eq!(form.validate(None), Err(Rejection::InvalidLink));
        assert_eq!(form.validate(Some("not-a-uuid")), Err(Rejection::InvalidLink));
    }

    #[test]
    fn restore_requires_matching_passwords() {
        let form = RestorePasswordForm {
            password: "x".into(),
            confirm_password: "y".into(),
        };
        assert_eq!(form.validate(Some(TOKEN)), Err(Rejection::PasswordMismatch));

        let form = RestorePasswordForm {
            password: "x".into(),
            confirm_password: "x".into(),
        };
        let request = form.validate(Some(TOKEN)).unwrap();
        assert_eq!(request.uuid, TOKEN);
        assert_eq!(request.password, "x");
    }

    #[test]
    fn change_password_rules() {
        let mut form = ChangePasswordForm {
            old_password: "old".into(),
            new_password: "old".into(),
            confirm_new_password: "old".into(),
        };
        assert_eq!(form.validate(), Err(Rejection::PasswordUnchanged));

        form.new_password = "new".into();
        assert_eq!(form.validate(), Err(Rejection::PasswordMismatch));

        form.confirm_new_password = "new".into();
        let request = form.validate().unwrap();
        assert_eq!(request.new_password, "new");
        assert_eq!(request.confirm_new_password, "new");
    }
}
