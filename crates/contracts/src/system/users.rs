use serde::{Deserialize, Serialize};

/// Роль пользователя приложения. Всё, что не `admin`, считается обычным учеником.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

/// Authenticated application user as returned by `GET /api/users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub total_points: u64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

fn default_level() -> u32 {
    1
}

impl Default for AppUser {
    fn default() -> Self {
        Self {
            role: UserRole::default(),
            level: default_level(),
            total_points: 0,
            full_name: String::new(),
            email: String::new(),
            profile_picture_url: None,
        }
    }
}

impl AppUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Level as shown to the user; a zero level coming from the backend reads as 1.
    pub fn display_level(&self) -> u32 {
        self.level.max(1)
    }

    pub fn profile_picture(&self) -> Option<&str> {
        self.profile_picture_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// Body of `PATCH /api/users/me`. Only the name is editable; the email comes from the login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMyUserRequest {
    pub full_name: String,
}

impl UpdateMyUserRequest {
    pub fn new(full_name: &str) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let user: AppUser = serde_json::from_str(r#"{"full_name":"Анна","email":"a@b.ru"}"#).unwrap();
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.level, 1);
        assert_eq!(user.total_points, 0);
        assert_eq!(user.profile_picture(), None);
    }

    #[test]
    fn test_unknown_role_is_regular_user() {
        let user: AppUser = serde_json::from_str(r#"{"role":"teacher"}"#).unwrap();
        assert!(!user.is_admin());

        let admin: AppUser = serde_json::from_str(r#"{"role":"admin","level":4}"#).unwrap();
        assert!(admin.is_admin());
        assert_eq!(admin.display_level(), 4);
    }

    #[test]
    fn test_zero_level_displays_as_one() {
        let user: AppUser = serde_json::from_str(r#"{"level":0,"profile_picture_url":""}"#).unwrap();
        assert_eq!(user.display_level(), 1);
        assert_eq!(user.profile_picture(), None);
    }

    #[test]
    fn test_update_request_body() {
        let body = serde_json::to_value(UpdateMyUserRequest::new("  Анна Петрова ")).unwrap();
        assert_eq!(body, serde_json::json!({ "full_name": "Анна Петрова" }));
    }
}
