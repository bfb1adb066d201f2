//! Capability-checked view of the Telegram WebApp SDK.
//!
//! Every method of the SDK may be missing depending on the Telegram client version, so each
//! call returns [`PlatformResult`] and reports [`PlatformError::Unsupported`] instead of
//! throwing. The browser implementation lives in [`super::web_app`]; tests use in-memory fakes.

use contracts::platform::telegram::TelegramUser;

use super::error::PlatformResult;

pub const TELEGRAM_SDK_URL: &str = "https://telegram.org/js/telegram-web-app.js";

/// Optional SDK methods reported by the Telegram helper panel.
pub const HELPER_METHODS: [&str; 4] = [
    "switchInlineQuery",
    "showPopup",
    "showAlert",
    "openTelegramLink",
];

/// Colours applied to the Telegram chrome after `ready()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebAppTheme {
    pub header_color: &'static str,
    pub background_color: &'static str,
}

impl Default for WebAppTheme {
    fn default() -> Self {
        Self {
            header_color: "#ffffff",
            background_color: "#f8fafc",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainButtonConfig {
    pub text: &'static str,
    pub color: &'static str,
    pub text_color: &'static str,
}

impl Default for MainButtonConfig {
    fn default() -> Self {
        Self {
            text: "Начать обучение",
            color: "#000000",
            text_color: "#ffffff",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupButtonKind {
    Ok,
    Cancel,
}

impl PopupButtonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PopupButtonKind::Ok => "ok",
            PopupButtonKind::Cancel => "cancel",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupButton {
    pub id: &'static str,
    pub kind: PopupButtonKind,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Popup {
    pub title: &'static str,
    pub message: &'static str,
    pub buttons: Vec<PopupButton>,
}

/// `Telegram.WebApp` global.
pub trait WebAppApi {
    type MainButton: MainButtonApi;

    /// Whether the SDK object exposes `method` as a function.
    fn supports(&self, method: &'static str) -> bool;

    fn ready(&self) -> PlatformResult<()>;
    fn set_header_color(&self, color: &str) -> PlatformResult<()>;
    fn set_background_color(&self, color: &str) -> PlatformResult<()>;

    /// `initDataUnsafe.user`, if Telegram embedded one.
    fn init_user(&self) -> Option<TelegramUser>;

    fn main_button(&self) -> Option<Self::MainButton>;

    fn expand(&self) -> PlatformResult<()>;
    fn enable_closing_confirmation(&self) -> PlatformResult<()>;
    fn switch_inline_query(&self, query: &str) -> PlatformResult<()>;
    fn show_alert(&self, message: &str) -> PlatformResult<()>;
    /// `on_close` receives the id of the pressed button, `None` when dismissed.
    fn show_popup(
        &self,
        popup: &Popup,
        on_close: Box<dyn FnOnce(Option<String>)>,
    ) -> PlatformResult<()>;
    fn open_telegram_link(&self, url: &str) -> PlatformResult<()>;
}

/// `Telegram.WebApp.MainButton`.
pub trait MainButtonApi {
    /// Sets text and colours. Gated on `setText`, the oldest member of the button API.
    fn configure(&self, config: &MainButtonConfig) -> PlatformResult<()>;
    fn on_click(&self, handler: Box<dyn Fn()>) -> PlatformResult<()>;
    fn show(&self) -> PlatformResult<()>;
    fn hide(&self) -> PlatformResult<()>;
}
