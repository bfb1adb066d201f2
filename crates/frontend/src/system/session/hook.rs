use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use super::bootstrap::{main_button_target, on_script_loaded, script_failed, sync_main_button};
use super::state::{MountFlag, SessionState};
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::DEFAULT_PAGE;
use crate::system::auth::api;
use crate::system::telegram::script::{DomScriptHost, InjectedScript, ScriptCallbacks};
use crate::system::telegram::web_app::release_main_button_handler;
use crate::system::telegram::{
    MainButtonConfig, TelegramWebApp, WebAppApi, WebAppTheme, TELEGRAM_SDK_URL,
};

/// Starts the session for the mounted shell.
///
/// Runs once per mount: the user fetch and the script injection are not repeated on
/// navigation. Only the main button visibility follows the current route.
pub fn use_session_bootstrap() {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let mounted = MountFlag::new();
    let default_url = DEFAULT_PAGE.url();

    ctx.session.set(SessionState::default());

    // Application user, independent of the SDK.
    {
        let mounted = mounted.clone();
        spawn_local(async move {
            let result = api::me().await;
            if !mounted.is_mounted() {
                log::debug!("Shell unmounted before the current user arrived");
                return;
            }
            ctx.session.update(|state| {
                state.resolve_user(result);
            });
        });
    }

    let on_load = {
        let mounted = mounted.clone();
        let default_url = default_url.clone();
        move || {
            if !mounted.is_mounted() {
                return;
            }
            let sdk = TelegramWebApp::detect();
            let click_target = default_url.clone();
            let on_click = Box::new(move || {
                let current = pathname.get_untracked();
                if let Some(target) = main_button_target(&current, &click_target) {
                    navigate(target, Default::default());
                }
            });
            let current = pathname.get_untracked();
            // SDK calls run before the session is touched; the update itself is short.
            let outcome = on_script_loaded(
                sdk.as_ref(),
                &WebAppTheme::default(),
                &MainButtonConfig::default(),
                on_click,
                &current,
                &default_url,
            );
            ctx.session.update(|state| outcome.apply(state));
        }
    };

    let on_error = {
        let mounted = mounted.clone();
        move || {
            if mounted.is_mounted() {
                ctx.session
                    .update(|state| script_failed(TELEGRAM_SDK_URL).apply(state));
            }
        }
    };

    let script = match InjectedScript::inject(
        &DomScriptHost,
        TELEGRAM_SDK_URL,
        ScriptCallbacks {
            on_load: Box::new(on_load),
            on_error: Box::new(on_error),
        },
    ) {
        Ok(script) => Some(script),
        Err(err) => {
            log::error!("Failed to inject Telegram WebApp SDK: {}", err);
            ctx.session.update(|state| state.platform_unavailable());
            None
        }
    };

    // Main button visibility follows the route.
    let button_bound =
        Memo::new(move |_| ctx.session.with(|s| s.platform_available() && s.main_button_bound));
    Effect::new(move |_| {
        let path = pathname.get();
        if !button_bound.get() {
            return;
        }
        if let Some(button) = TelegramWebApp::detect().and_then(|app| app.main_button()) {
            sync_main_button(&button, &path, &default_url);
        }
    });

    on_cleanup(move || {
        mounted.unmount();
        release_main_button_handler();
        if let Some(mut script) = script {
            script.release(&DomScriptHost);
        }
    });
}
