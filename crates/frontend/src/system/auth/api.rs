use contracts::system::users::{AppUser, UpdateMyUserRequest};
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::{api_base, api_url};

use super::storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("user is not authenticated")]
    Unauthenticated,
    #[error("request failed with status {0}")]
    Http(u16),
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Maps an HTTP status of the user API onto the error taxonomy.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(ApiError::Unauthenticated),
        other => Err(ApiError::Http(other)),
    }
}

/// Get the currently signed-in user.
pub async fn me() -> Result<AppUser, ApiError> {
    let mut request = Request::get(&api_url("/api/users/me"));
    if let Some(token) = storage::get_access_token() {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response.status())?;

    response
        .json::<AppUser>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Save the editable profile fields and get the updated user back.
pub async fn update_me(full_name: &str) -> Result<AppUser, ApiError> {
    let mut request = Request::patch(&api_url("/api/users/me"));
    if let Some(token) = storage::get_access_token() {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .json(&UpdateMyUserRequest::new(full_name))
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response.status())?;

    response
        .json::<AppUser>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Ends the backend session and forgets the local token.
///
/// The token is cleared even when the request fails.
pub async fn logout() -> Result<(), ApiError> {
    let mut request = Request::post(&api_url("/api/auth/logout"));
    if let Some(token) = storage::get_access_token() {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    storage::clear_access_token();

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response.status())
}

/// Login page of the backend; it redirects back to `return_to` once the user signed in.
pub fn login_url(return_to: &str) -> String {
    login_url_with_base(&api_base(), return_to)
}

fn login_url_with_base(base: &str, return_to: &str) -> String {
    format!(
        "{}/api/auth/login?redirect={}",
        base,
        urlencoding::encode(return_to)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(401), Err(ApiError::Unauthenticated));
        assert_eq!(check_status(403), Err(ApiError::Unauthenticated));
        assert_eq!(check_status(500), Err(ApiError::Http(500)));
    }

    #[test]
    fn test_login_url_encodes_return_address() {
        assert_eq!(
            login_url_with_base("http://localhost:3000", "https://app.example/learning?x=1"),
            "http://localhost:3000/api/auth/login?redirect=https%3A%2F%2Fapp.example%2Flearning%3Fx%3D1"
        );
    }
}
