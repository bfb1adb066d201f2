use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::icons::icon;
use crate::system::auth::api;

fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let current = location.href().unwrap_or_default();
    if let Err(err) = location.set_href(&api::login_url(&current)) {
        log::error!("Failed to open login page: {:?}", err);
    }
}

/// Guest view for pages that need a signed-in user.
#[component]
pub fn LoginPrompt() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__logo">{icon("graduation-cap")}</div>
                <h1>"TeacherHelper"</h1>
                <h2>"Войдите, чтобы продолжить обучение"</h2>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| redirect_to_login()
                >
                    "Войти"
                </Button>
            </div>
        </div>
    }
}
