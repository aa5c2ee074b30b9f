use serde::{Deserialize, Serialize};

/// `POST /api/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub pet_star: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
}

/// `POST /api/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub msg: String,
    pub jwt_token: String,
    pub user_data: UserData,
}

/// Profile of a registered user.
///
/// The login endpoint spells the photo field `userphoto`, `GET /api/user`
/// spells it `userPhoto`; both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub pet_star: String,
    #[serde(default, alias = "userphoto")]
    pub user_photo: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub hobbies: Option<String>,
}

/// `GET /api/user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub msg: String,
    pub user_data: UserData,
}

/// `PUT /api/user`. Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_star: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
}

/// `PUT /api/changePassword`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

/// `POST /api/restorePassword`: asks the backend to mail a restore link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreLinkRequest {
    pub email: String,
}

/// `PUT /api/restorePassword`: sets a new password using the mailed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestorePasswordRequest {
    pub uuid: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_request_uses_backend_field_names() {
        let request = RegisterRequest {
            email: "a@b.com".into(),
            password: "x".into(),
            confirm_password: "x".into(),
            pet_star: "Rex".into(),
            user_photo: None,
            breed: Some("Beagle".into()),
            birth_date: None,
            hobbies: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "email": "a@b.com",
                "password": "x",
                "confirmPassword": "x",
                "petStar": "Rex",
                "breed": "Beagle"
            })
        );
    }

    #[test]
    fn login_response_accepts_lowercase_userphoto() {
        let body = json!({
            "msg": "Ok",
            "jwt_token": "token",
            "user_data": {
                "id": 7,
                "email": "a@b.com",
                "userphoto": "https://img/1.png",
                "petStar": "Rex",
                "breed": null,
                "birthDate": "2020-01-01",
                "hobbies": null
            }
        });
        let response: LoginResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.jwt_token, "token");
        assert_eq!(response.user_data.id, Some(7));
        assert_eq!(
            response.user_data.user_photo.as_deref(),
            Some("https://img/1.png")
        );
        assert_eq!(response.user_data.birth_date.as_deref(), Some("2020-01-01"));
    }

    #[test]
    fn user_response_without_id() {
        let body = json!({
            "msg": "ok",
            "user_data": {
                "email": "a@b.com",
                "userPhoto": null,
                "petStar": "Rex",
                "breed": "Pug",
                "birthDate": null,
                "hobbies": "naps"
            }
        });
        let response: UserResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.user_data.id, None);
        assert_eq!(response.user_data.breed.as_deref(), Some("Pug"));
    }

    #[test]
    fn empty_profile_update_serializes_to_empty_object() {
        let value = serde_json::to_value(UpdateUserRequest::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
