//! Platform side of the session bootstrap, independent of the DOM and of Leptos.

use contracts::platform::telegram::TelegramUser;

use super::state::SessionState;
use crate::system::telegram::{
    best_effort, MainButtonApi, MainButtonConfig, PlatformError, WebAppApi, WebAppTheme,
};

#[derive(Clone, Debug, PartialEq)]
pub enum PlatformOutcome {
    Unavailable,
    Ready { user: Option<TelegramUser> },
}

impl PlatformOutcome {
    pub fn apply(self, state: &mut SessionState) {
        match self {
            PlatformOutcome::Unavailable => state.platform_unavailable(),
            PlatformOutcome::Ready { user } => state.platform_ready(user),
        }
    }
}

/// Script `error` event: nothing else is touched.
pub fn script_failed(src: &str) -> PlatformOutcome {
    log::warn!("{}", PlatformError::ScriptLoad(src.to_string()));
    PlatformOutcome::Unavailable
}

/// Script `load` event. `sdk` is `None` when the script ran but installed no `Telegram.WebApp`.
pub fn initialize_platform<W: WebAppApi>(sdk: Option<&W>, theme: &WebAppTheme) -> PlatformOutcome {
    let Some(sdk) = sdk else {
        log::info!("Telegram WebApp SDK loaded outside of Telegram");
        return PlatformOutcome::Unavailable;
    };

    best_effort("ready", sdk.ready());
    best_effort("setHeaderColor", sdk.set_header_color(theme.header_color));
    best_effort("setBackgroundColor", sdk.set_background_color(theme.background_color));

    let user = sdk.init_user();
    if let Some(user) = &user {
        log::debug!("Telegram user: {}", user.display_name());
    }
    PlatformOutcome::Ready { user }
}

/// Configures the main button and installs its click handler.
///
/// Returns `false` if the client cannot even label the button; such a button is left alone.
pub fn bind_main_button<B: MainButtonApi>(
    button: &B,
    config: &MainButtonConfig,
    on_click: Box<dyn Fn()>,
) -> bool {
    if best_effort("MainButton.setText", button.configure(config)).is_none() {
        return false;
    }
    best_effort("MainButton.onClick", button.on_click(on_click));
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainButtonVisibility {
    Shown,
    Hidden,
}

/// The button leads to the default page, so it is hidden there.
pub fn main_button_visibility(current_path: &str, default_url: &str) -> MainButtonVisibility {
    if current_path == default_url {
        MainButtonVisibility::Hidden
    } else {
        MainButtonVisibility::Shown
    }
}

pub fn sync_main_button<B: MainButtonApi>(
    button: &B,
    current_path: &str,
    default_url: &str,
) -> MainButtonVisibility {
    let visibility = main_button_visibility(current_path, default_url);
    match visibility {
        MainButtonVisibility::Shown => best_effort("MainButton.show", button.show()),
        MainButtonVisibility::Hidden => best_effort("MainButton.hide", button.hide()),
    };
    visibility
}

/// Where a main button click should navigate, if anywhere.
pub fn main_button_target<'a>(current_path: &str, default_url: &'a str) -> Option<&'a str> {
    (current_path != default_url).then_some(default_url)
}

/// Result of the script `load` event, applied to the session in one short update.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadOutcome {
    pub platform: PlatformOutcome,
    pub main_button_bound: bool,
}

impl LoadOutcome {
    pub fn apply(self, state: &mut SessionState) {
        self.platform.apply(state);
        state.main_button_bound = self.main_button_bound && state.platform_available();
    }
}

/// Full `load` handling: platform init, main button binding and the first visibility sync.
///
/// Talks to the SDK only; the caller applies the returned outcome to the session.
pub fn on_script_loaded<W: WebAppApi>(
    sdk: Option<&W>,
    theme: &WebAppTheme,
    button_config: &MainButtonConfig,
    on_click: Box<dyn Fn()>,
    current_path: &str,
    default_url: &str,
) -> LoadOutcome {
    let platform = initialize_platform(sdk, theme);

    let button = sdk.and_then(|sdk| sdk.main_button());
    let main_button_bound = match &button {
        Some(button) => bind_main_button(button, button_config, on_click),
        None => false,
    };

    if let (true, Some(button)) = (main_button_bound, &button) {
        sync_main_button(button, current_path, default_url);
    }

    LoadOutcome {
        platform,
        main_button_bound,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::system::auth::api::ApiError;
    use crate::system::session::state::PlatformStatus;
    use crate::system::telegram::script::testing::FakeScriptHost;
    use crate::system::telegram::script::{InjectedScript, ScriptCallbacks};
    use crate::system::telegram::sdk::testing::{FakeMainButton, FakeWebApp};

    const LEARNING: &str = "/learning";

    fn telegram_user() -> TelegramUser {
        TelegramUser {
            id: Some(7),
            first_name: "Пётр".into(),
            last_name: Some("Смирнов".into()),
            username: Some("petr".into()),
            photo_url: None,
            language_code: Some("ru".into()),
        }
    }

    fn load(sdk: Option<&FakeWebApp>, path: &str) -> (SessionState, Rc<RefCell<Vec<String>>>) {
        let navigations = Rc::new(RefCell::new(Vec::new()));
        let recorded = navigations.clone();
        let current = path.to_string();
        let mut state = SessionState::default();
        on_script_loaded(
            sdk,
            &WebAppTheme::default(),
            &MainButtonConfig::default(),
            Box::new(move || {
                if let Some(target) = main_button_target(&current, LEARNING) {
                    recorded.borrow_mut().push(target.to_string());
                }
            }),
            path,
            LEARNING,
        )
        .apply(&mut state);
        (state, navigations)
    }

    #[test]
    fn test_full_sdk_initializes_everything() {
        let mut sdk = FakeWebApp::full();
        sdk.user = Some(telegram_user());
        let (state, _) = load(Some(&sdk), "/profile");

        assert!(state.platform_available());
        assert!(state.show_platform_panel());
        assert!(state.main_button_bound);
        assert_eq!(
            sdk.calls(),
            vec!["ready", "setHeaderColor(#ffffff)", "setBackgroundColor(#f8fafc)"]
        );
        let button = sdk.button.as_ref().unwrap();
        assert_eq!(button.calls(), vec!["configure", "onClick", "show"]);
        assert_eq!(button.state.borrow().text.as_deref(), Some("Начать обучение"));
    }

    /// Injects through a fake `<head>` with callbacks wired like the shell does.
    fn inject(
        host: &FakeScriptHost,
        sdk: &FakeWebApp,
        state: &Rc<RefCell<SessionState>>,
    ) -> InjectedScript {
        let loaded_sdk = sdk.clone();
        let on_load_state = state.clone();
        let on_error_state = state.clone();
        InjectedScript::inject(
            host,
            "https://telegram.org/js/telegram-web-app.js",
            ScriptCallbacks {
                on_load: Box::new(move || {
                    let outcome = on_script_loaded(
                        Some(&loaded_sdk),
                        &WebAppTheme::default(),
                        &MainButtonConfig::default(),
                        Box::new(|| {}),
                        "/profile",
                        LEARNING,
                    );
                    outcome.apply(&mut on_load_state.borrow_mut());
                }),
                on_error: Box::new(move || {
                    script_failed("https://telegram.org/js/telegram-web-app.js")
                        .apply(&mut on_error_state.borrow_mut());
                }),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_script_error_touches_no_platform_method() {
        let mut sdk = FakeWebApp::full();
        sdk.user = Some(telegram_user());
        let host = FakeScriptHost::default();
        let state = Rc::new(RefCell::new(SessionState::default()));
        state.borrow_mut().resolve_user(Err(ApiError::Unauthenticated));

        let script = inject(&host, &sdk, &state);
        host.fire_error(script.id());
        // The element fires only one of its events.
        host.fire_load(script.id());

        let state = state.borrow();
        assert_eq!(state.platform, PlatformStatus::Unavailable);
        assert!(!state.platform_available());
        assert!(!state.show_platform_panel());
        assert!(!state.main_button_bound);
        assert!(sdk.calls().is_empty());
        assert!(sdk.button.as_ref().unwrap().calls().is_empty());
    }

    #[test]
    fn test_script_load_through_host_initializes_platform() {
        let mut sdk = FakeWebApp::full();
        sdk.user = Some(telegram_user());
        let host = FakeScriptHost::default();
        let state = Rc::new(RefCell::new(SessionState::default()));

        let script = inject(&host, &sdk, &state);
        host.fire_load(script.id());

        assert!(state.borrow().show_platform_panel());
        assert!(state.borrow().main_button_bound);
        assert_eq!(sdk.calls().len(), 3);
        assert_eq!(sdk.button.as_ref().unwrap().visible(), Some(true));
    }

    #[test]
    fn test_unavailable_platform_never_reports_bound_button() {
        let mut state = SessionState::default();
        LoadOutcome {
            platform: PlatformOutcome::Unavailable,
            main_button_bound: true,
        }
        .apply(&mut state);
        assert!(!state.main_button_bound);
    }

    #[test]
    fn test_loaded_without_global_is_unavailable() {
        let (state, _) = load(None, "/profile");
        assert!(!state.platform_available());
        assert!(!state.main_button_bound);
        assert!(state.platform_user.is_none());
    }

    #[test]
    fn test_partial_sdk_checks_each_method() {
        // Old client: no ready(), no colours, button without show().
        let mut sdk = FakeWebApp::with_methods(&["setBackgroundColor"]);
        sdk.button = Some(FakeMainButton::with_methods(&["setText", "onClick", "hide"]));
        sdk.user = Some(telegram_user());

        let (state, _) = load(Some(&sdk), "/progress");

        assert!(state.platform_available());
        assert!(state.show_platform_panel());
        assert_eq!(sdk.calls(), vec!["setBackgroundColor(#f8fafc)"]);
        let button = sdk.button.as_ref().unwrap();
        assert_eq!(button.calls(), vec!["configure", "onClick"]);
        assert_eq!(button.visible(), None);
    }

    #[test]
    fn test_failing_ready_does_not_stop_bootstrap() {
        let mut sdk = FakeWebApp::full();
        sdk.failing.insert("ready");
        sdk.user = Some(telegram_user());

        let (state, _) = load(Some(&sdk), "/premium");

        assert!(state.show_platform_panel());
        assert_eq!(sdk.calls().len(), 3);
    }

    #[test]
    fn test_button_without_set_text_is_left_alone() {
        let mut sdk = FakeWebApp::full();
        sdk.button = Some(FakeMainButton::with_methods(&["onClick", "show", "hide"]));

        let (state, _) = load(Some(&sdk), "/profile");

        assert!(!state.main_button_bound);
        assert!(sdk.button.as_ref().unwrap().calls().is_empty());
    }

    #[test]
    fn test_main_button_visibility_across_routes() {
        let button = FakeMainButton::full();
        for path in ["/leaderboard", "/progress", "/profile", "/aihelper"] {
            assert_eq!(
                sync_main_button(&button, path, LEARNING),
                MainButtonVisibility::Shown
            );
            assert_eq!(button.visible(), Some(true));
        }

        assert_eq!(
            sync_main_button(&button, LEARNING, LEARNING),
            MainButtonVisibility::Hidden
        );
        assert_eq!(button.visible(), Some(false));
    }

    #[test]
    fn test_click_navigates_only_away_from_default() {
        let sdk = FakeWebApp::full();
        let (_, navigations) = load(Some(&sdk), "/profile");
        sdk.button.as_ref().unwrap().click();
        assert_eq!(*navigations.borrow(), vec![LEARNING.to_string()]);

        let sdk = FakeWebApp::full();
        let (_, navigations) = load(Some(&sdk), LEARNING);
        let button = sdk.button.as_ref().unwrap();
        assert_eq!(button.visible(), Some(false));
        button.click();
        assert!(navigations.borrow().is_empty());
    }

    #[test]
    fn test_main_button_target() {
        assert_eq!(main_button_target("/profile", LEARNING), Some(LEARNING));
        assert_eq!(main_button_target(LEARNING, LEARNING), None);
    }
}
