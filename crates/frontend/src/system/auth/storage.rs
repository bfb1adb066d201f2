use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "teacher_helper_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage. Cookie sessions work without one.
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Forget the access token on logout.
pub fn clear_access_token() {
    if let Some(storage) = get_local_storage() {
        if let Err(err) = storage.remove_item(ACCESS_TOKEN_KEY) {
            log::debug!("Failed to clear access token: {:?}", err);
        }
    }
}
