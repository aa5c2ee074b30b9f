use contracts::auth::UserData;
use log::warn;
use web_sys::window;

const TOKEN_KEY: &str = "petstar_token";
const USER_KEY: &str = "petstar_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the token and a snapshot of the user
pub fn save_session(token: &str, user: &UserData) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    save_user(user);
}

pub fn save_user(user: &UserData) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_KEY, &json);
        }
        Err(e) => warn!("could not persist user snapshot: {}", e),
    }
}

/// Token and user snapshot saved by a previous visit
pub fn load_session() -> Option<(String, Option<UserData>)> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let user = storage
        .get_item(USER_KEY)
        .ok()
        .flatten()
        .and_then(|json| serde_json::from_str(&json).ok());
    Some((token, user))
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
