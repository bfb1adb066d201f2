use contracts::system::users::AppUser;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, Input};

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::{Page, DEFAULT_PAGE};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::api;
use crate::system::auth::guard::RequireUser;

/// Label for the role badge.
pub fn role_label(user: &AppUser) -> &'static str {
    if user.is_admin() {
        "Администратор"
    } else {
        "Ученик"
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed,
}

impl SaveState {
    pub fn button_label(self) -> &'static str {
        match self {
            SaveState::Idle | SaveState::Failed => "Сохранить",
            SaveState::Saving => "Сохранение...",
            SaveState::Saved => "Сохранено!",
        }
    }
}

/// Whether the typed name differs from the stored one once trimmed.
pub fn name_changed(stored: &str, typed: &str) -> bool {
    stored.trim() != typed.trim()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <PageFrame page=Page::Profile subtitle="Здесь вы можете обновить информацию о себе.".to_string()>
            <RequireUser>
                <ProfileForm />
            </RequireUser>
        </PageFrame>
    }
}

#[component]
fn ProfileForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let navigate = StoredValue::new_local(use_navigate());
    let user = Memo::new(move |_| ctx.session.with(|s| s.app_user.clone()));

    let full_name = RwSignal::new(
        user.get_untracked()
            .map(|u| u.full_name)
            .unwrap_or_default(),
    );
    let save_state = RwSignal::new(SaveState::Idle);

    Effect::new(move |_| {
        full_name.track();
        // Editing again clears the "saved" mark.
        if save_state.get_untracked() == SaveState::Saved {
            let stored = user.with_untracked(|u| u.as_ref().map(|u| u.full_name.clone()));
            if stored.is_some_and(|stored| name_changed(&stored, &full_name.get_untracked())) {
                save_state.set(SaveState::Idle);
            }
        }
    });

    let save = move || {
        if save_state.get_untracked() == SaveState::Saving {
            return;
        }
        let typed = full_name.get_untracked();
        save_state.set(SaveState::Saving);
        spawn_local(async move {
            match api::update_me(&typed).await {
                Ok(updated) => {
                    log::info!("Профиль сохранён");
                    ctx.session.update(|s| {
                        s.replace_user(updated);
                    });
                    save_state.set(SaveState::Saved);
                }
                Err(err) => {
                    log::error!("Ошибка сохранения профиля: {}", err);
                    save_state.set(SaveState::Failed);
                }
            }
        });
    };

    let logout = move || {
        spawn_local(async move {
            if let Err(err) = api::logout().await {
                log::warn!("Logout request failed, signing out locally: {}", err);
            }
            ctx.session.update(|s| s.sign_out());
            navigate.with_value(|navigate| navigate(&DEFAULT_PAGE.url(), Default::default()));
        });
    };

    move || {
        user.get().map(|user| {
            let role = role_label(&user);
            let level = format!("Уровень {}", user.display_level());
            let points = format!("Баллы: {}", user.total_points);
            view! {
                <div class="card profile-summary">
                    <div class="card__header">
                        <span class="card__title">"Мой профиль"</span>
                        <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Brand>
                            {role}
                        </Badge>
                    </div>
                    <div class="card__content">
                        <div class="form-group">
                            <label>"Email"</label>
                            <p class="profile-summary__email">{user.email}</p>
                            <p class="help-text">
                                "Email нельзя изменить, так как он используется для входа."
                            </p>
                        </div>
                        <div class="form-group">
                            <label>"Полное имя"</label>
                            <Input value=full_name placeholder="Ваше имя" />
                        </div>
                        <p>{level}</p>
                        <p>{points}</p>
                        <Show when=move || save_state.get() == SaveState::Failed>
                            <div class="error-message">"Не удалось сохранить профиль"</div>
                        </Show>
                    </div>
                    <div class="card__footer profile-summary__actions">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| logout()>
                            {icon("log-out")}
                            "Выйти"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| save()
                            disabled=Signal::derive(move || save_state.get() == SaveState::Saving)
                        >
                            {move || save_state.get().button_label()}
                        </Button>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use contracts::system::users::UserRole;

    use super::*;

    #[test]
    fn test_role_label() {
        let mut user = AppUser::default();
        assert_eq!(role_label(&user), "Ученик");
        user.role = UserRole::Admin;
        assert_eq!(role_label(&user), "Администратор");
    }

    #[test]
    fn test_name_changed_ignores_surrounding_spaces() {
        assert!(!name_changed("Анна", " Анна "));
        assert!(name_changed("Анна", "Анна П."));
    }

    #[test]
    fn test_save_button_label() {
        assert_eq!(SaveState::default().button_label(), "Сохранить");
        assert_eq!(SaveState::Saving.button_label(), "Сохранение...");
        assert_eq!(SaveState::Saved.button_label(), "Сохранено!");
        assert_eq!(SaveState::Failed.button_label(), "Сохранить");
    }
}
