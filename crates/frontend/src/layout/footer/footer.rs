use contracts::platform::telegram::TelegramUser;
use contracts::system::users::AppUser;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;

pub const FALLBACK_NAME: &str = "Ученик";
pub const TELEGRAM_SUBTITLE: &str = "Telegram User";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    Telegram(String),
    Profile(String),
    Placeholder,
}

/// Who the footer says is signed in. The Telegram identity wins over the app account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterIdentity {
    pub avatar: Avatar,
    pub name: String,
    pub subtitle: Option<String>,
}

impl FooterIdentity {
    pub fn resolve(platform: Option<&TelegramUser>, app: Option<&AppUser>) -> Self {
        let avatar = if let Some(photo) = platform.and_then(TelegramUser::photo) {
            Avatar::Telegram(photo.to_string())
        } else if let Some(picture) = app.and_then(AppUser::profile_picture) {
            Avatar::Profile(picture.to_string())
        } else {
            Avatar::Placeholder
        };

        let name = platform
            .map(|u| u.first_name.as_str())
            .filter(|name| !name.is_empty())
            .or_else(|| app.map(|u| u.full_name.as_str()).filter(|name| !name.is_empty()))
            .unwrap_or(FALLBACK_NAME)
            .to_string();

        let subtitle = match platform {
            Some(_) => Some(TELEGRAM_SUBTITLE.to_string()),
            None => app.map(|u| u.email.clone()).filter(|email| !email.is_empty()),
        };

        Self {
            avatar,
            name,
            subtitle,
        }
    }
}

#[component]
pub fn SidebarFooter() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let identity = Memo::new(move |_| {
        ctx.session
            .with(|s| FooterIdentity::resolve(s.platform_user.as_ref(), s.app_user.as_ref()))
    });

    view! {
        <footer data-zone="sidebar-footer" class="app-sidebar__footer">
            <div class="app-sidebar__avatar">
                {move || match identity.get().avatar {
                    Avatar::Telegram(src) => view! {
                        <img src=src alt="Telegram Profile" class="app-sidebar__avatar-img" />
                    }.into_any(),
                    Avatar::Profile(src) => view! {
                        <img src=src alt="Profile" class="app-sidebar__avatar-img" />
                    }.into_any(),
                    Avatar::Placeholder => icon("user"),
                }}
            </div>
            <div class="app-sidebar__identity">
                <p class="app-sidebar__identity-name">{move || identity.get().name}</p>
                <p class="app-sidebar__identity-subtitle">
                    {move || identity.get().subtitle.unwrap_or_default()}
                </p>
            </div>
            <Show when=move || ctx.platform_available()>
                <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Brand>"TG"</Badge>
            </Show>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use contracts::system::users::UserRole;

    use super::*;

    fn app_user(picture: Option<&str>) -> AppUser {
        AppUser {
            role: UserRole::User,
            level: 2,
            total_points: 40,
            full_name: "Мария Иванова".into(),
            email: "maria@example.com".into(),
            profile_picture_url: picture.map(str::to_string),
        }
    }

    fn telegram_user(photo: Option<&str>) -> TelegramUser {
        TelegramUser {
            id: Some(1),
            first_name: "Маша".into(),
            last_name: None,
            username: Some("masha".into()),
            photo_url: photo.map(str::to_string),
            language_code: None,
        }
    }

    #[test]
    fn test_telegram_identity_wins() {
        let app = app_user(Some("https://cdn/app.png"));
        let tg = telegram_user(Some("https://t.me/photo.jpg"));
        let identity = FooterIdentity::resolve(Some(&tg), Some(&app));

        assert_eq!(identity.name, "Маша");
        assert_eq!(identity.avatar, Avatar::Telegram("https://t.me/photo.jpg".into()));
        assert_eq!(identity.subtitle.as_deref(), Some(TELEGRAM_SUBTITLE));
    }

    #[test]
    fn test_profile_picture_when_telegram_has_no_photo() {
        let app = app_user(Some("https://cdn/app.png"));
        let tg = telegram_user(None);
        let identity = FooterIdentity::resolve(Some(&tg), Some(&app));

        assert_eq!(identity.avatar, Avatar::Profile("https://cdn/app.png".into()));
        assert_eq!(identity.name, "Маша");
    }

    #[test]
    fn test_app_user_only() {
        let app = app_user(None);
        let identity = FooterIdentity::resolve(None, Some(&app));

        assert_eq!(identity.avatar, Avatar::Placeholder);
        assert_eq!(identity.name, "Мария Иванова");
        assert_eq!(identity.subtitle.as_deref(), Some("maria@example.com"));
    }

    #[test]
    fn test_guest() {
        let identity = FooterIdentity::resolve(None, None);
        assert_eq!(identity.avatar, Avatar::Placeholder);
        assert_eq!(identity.name, FALLBACK_NAME);
        assert_eq!(identity.subtitle, None);
    }

    #[test]
    fn test_empty_full_name_falls_back() {
        let mut app = app_user(None);
        app.full_name.clear();
        assert_eq!(FooterIdentity::resolve(None, Some(&app)).name, FALLBACK_NAME);
    }
}
