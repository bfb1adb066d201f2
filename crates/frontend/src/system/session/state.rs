use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::platform::telegram::TelegramUser;
use contracts::system::users::AppUser;

use crate::system::auth::api::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlatformStatus {
    /// SDK script injected, no load/error event yet.
    #[default]
    Loading,
    Available,
    Unavailable,
}

/// Everything the shell knows about who is using it.
///
/// The application user and the Telegram user come from independent sources and either may
/// be missing. Both are resolved at most once per mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub app_user: Option<AppUser>,
    pub user_resolved: bool,
    pub platform_user: Option<TelegramUser>,
    pub platform: PlatformStatus,
    pub main_button_bound: bool,
}

impl SessionState {
    /// Applies the result of `me()`. Any error means "guest".
    ///
    /// Returns `false` if a user was already resolved for this mount; the first answer wins,
    /// so an admin entry is never removed again.
    pub fn resolve_user(&mut self, result: Result<AppUser, ApiError>) -> bool {
        if self.user_resolved {
            return false;
        }
        self.user_resolved = true;
        self.app_user = match result {
            Ok(user) => Some(user),
            Err(ApiError::Unauthenticated) => {
                log::info!("Пользователь не авторизован");
                None
            }
            Err(err) => {
                log::warn!("Failed to load current user, continuing as guest: {}", err);
                None
            }
        };
        true
    }

    /// A newer copy of the signed-in user, e.g. after a profile save.
    ///
    /// Unlike [`resolve_user`](Self::resolve_user) this always wins, but it never turns a
    /// guest session into a signed-in one.
    pub fn replace_user(&mut self, user: AppUser) -> bool {
        if self.app_user.is_none() {
            log::warn!("Ignoring profile update without a signed-in user");
            return false;
        }
        self.app_user = Some(user);
        true
    }

    /// Guest mode after logout; the platform side stays as it is.
    pub fn sign_out(&mut self) {
        self.app_user = None;
        self.user_resolved = true;
    }

    pub fn platform_ready(&mut self, user: Option<TelegramUser>) {
        self.platform = PlatformStatus::Available;
        self.platform_user = user;
    }

    pub fn platform_unavailable(&mut self) {
        self.platform = PlatformStatus::Unavailable;
        self.platform_user = None;
        self.main_button_bound = false;
    }

    pub fn platform_available(&self) -> bool {
        self.platform == PlatformStatus::Available
    }

    pub fn is_admin(&self) -> bool {
        self.app_user.as_ref().map(AppUser::is_admin).unwrap_or(false)
    }

    pub fn show_achievements(&self) -> bool {
        self.app_user.is_some()
    }

    pub fn show_platform_panel(&self) -> bool {
        self.platform_available() && self.platform_user.is_some()
    }
}

/// Cleared by the owning component's cleanup; async work checks it before writing state.
#[derive(Clone, Debug)]
pub struct MountFlag(Arc<AtomicBool>);

impl MountFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use contracts::system::users::UserRole;

    use super::*;

    fn user(role: UserRole) -> AppUser {
        AppUser {
            role,
            level: 3,
            total_points: 120,
            full_name: "Мария Иванова".into(),
            email: "maria@example.com".into(),
            profile_picture_url: None,
        }
    }

    #[test]
    fn test_rejected_fetch_is_guest_mode() {
        let mut state = SessionState::default();
        assert!(state.resolve_user(Err(ApiError::Unauthenticated)));
        assert!(state.user_resolved);
        assert!(state.app_user.is_none());
        assert!(!state.show_achievements());
        assert!(!state.is_admin());

        let mut state = SessionState::default();
        state.resolve_user(Err(ApiError::Network("offline".into())));
        assert!(!state.show_achievements());
    }

    #[test]
    fn test_user_resolves_once() {
        let mut state = SessionState::default();
        assert!(state.resolve_user(Ok(user(UserRole::Admin))));
        assert!(state.is_admin());

        assert!(!state.resolve_user(Err(ApiError::Unauthenticated)));
        assert!(state.is_admin());
        assert!(state.show_achievements());
    }

    #[test]
    fn test_profile_save_replaces_resolved_user() {
        let mut state = SessionState::default();
        state.resolve_user(Ok(user(UserRole::User)));

        let mut renamed = user(UserRole::User);
        renamed.full_name = "Мария Петрова".into();
        assert!(state.replace_user(renamed));
        assert_eq!(
            state.app_user.as_ref().map(|u| u.full_name.as_str()),
            Some("Мария Петрова")
        );
    }

    #[test]
    fn test_profile_save_needs_signed_in_user() {
        let mut state = SessionState::default();
        state.resolve_user(Err(ApiError::Unauthenticated));
        assert!(!state.replace_user(user(UserRole::User)));
        assert!(state.app_user.is_none());
    }

    #[test]
    fn test_sign_out_drops_admin_and_achievements() {
        let mut state = SessionState::default();
        state.resolve_user(Ok(user(UserRole::Admin)));
        state.platform_ready(None);

        state.sign_out();
        assert!(!state.is_admin());
        assert!(!state.show_achievements());
        assert!(state.user_resolved);
        assert!(state.platform_available());
        // A late answer from the first fetch cannot sign the user back in.
        assert!(!state.resolve_user(Ok(user(UserRole::Admin))));
    }

    #[test]
    fn test_platform_panel_requires_available_platform() {
        let mut state = SessionState::default();
        assert_eq!(state.platform, PlatformStatus::Loading);
        assert!(!state.show_platform_panel());

        state.platform_ready(None);
        assert!(state.platform_available());
        assert!(!state.show_platform_panel());

        state.platform_unavailable();
        assert!(!state.platform_available());
        assert!(!state.show_platform_panel());
    }

    #[test]
    fn test_mount_flag() {
        let flag = MountFlag::new();
        let shared = flag.clone();
        assert!(shared.is_mounted());
        flag.unmount();
        assert!(!shared.is_mounted());
    }
}
