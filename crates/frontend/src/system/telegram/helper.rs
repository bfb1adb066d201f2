//! "Telegram возможности" panel: share progress, feedback and rating.
//!
//! Each action prefers the Telegram dialog and falls back to plain browser dialogs when the
//! client lacks the method or the call fails.

use leptos::prelude::*;

use super::error::best_effort;
use super::sdk::{Popup, PopupButton, PopupButtonKind, WebAppApi, HELPER_METHODS};
use super::web_app::TelegramWebApp;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::browser::{Browser, DomBrowser, ShareRequest};
use crate::shared::icons::icon;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance};

pub const TELEGRAM_BOT_LINK: &str = "https://t.me/TeacherHistory_bot";
pub const SUPPORT_EMAIL: &str = "support@teacherhelper.ru";

const FEEDBACK_SUBJECT: &str = "Обратная связь по TeacherHelper";
const FEEDBACK_BODY: &str = "Здравствуйте! Хочу поделиться мнением о приложении TeacherHelper...";
const WEB_SHARE_TEXT: &str = "🎓 Изучаю историю с помощью TeacherHelper! Присоединяйтесь!";
const RATE_TELEGRAM_MESSAGE: &str =
    "Спасибо за использование TeacherHelper! Оцените нас в Telegram Store.";
const RATE_FALLBACK_MESSAGE: &str =
    "Спасибо за использование TeacherHelper! Ваше мнение очень важно для нас.";

pub fn share_text(level: u32) -> String {
    format!(
        "🎓 Изучаю историю с помощью TeacherHelper! \n📊 Мой прогресс: уровень {}\n🏆 Присоединяйтесь!",
        level.max(1)
    )
}

pub fn feedback_mailto() -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        SUPPORT_EMAIL,
        urlencoding::encode(FEEDBACK_SUBJECT),
        urlencoding::encode(FEEDBACK_BODY)
    )
}

fn feedback_popup() -> Popup {
    Popup {
        title: "Обратная связь",
        message: "Хотите поделиться мнением о приложении?",
        buttons: vec![
            PopupButton {
                id: "ok",
                kind: PopupButtonKind::Ok,
                text: "Да",
            },
            PopupButton {
                id: "cancel",
                kind: PopupButtonKind::Cancel,
                text: "Отмена",
            },
        ],
    }
}

/// How the panel presents itself: inside Telegram, or in a browser with the Web Share API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelMode {
    Telegram,
    Web,
}

impl PanelMode {
    /// `None` hides the panel: no Telegram and nothing to share with.
    pub fn detect(platform_available: bool, can_share: bool) -> Option<Self> {
        if platform_available {
            Some(PanelMode::Telegram)
        } else if can_share {
            Some(PanelMode::Web)
        } else {
            None
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PanelMode::Telegram => "Telegram возможности",
            PanelMode::Web => "Поделиться",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            PanelMode::Telegram => "Telegram",
            PanelMode::Web => "Web",
        }
    }
}

/// Number of [`HELPER_METHODS`] the client supports.
pub fn supported_method_count<W: WebAppApi>(sdk: &W) -> usize {
    HELPER_METHODS
        .iter()
        .filter(|method| sdk.supports(**method))
        .count()
}

/// Full-height app with a confirmation before closing.
pub fn prepare_web_app<W: WebAppApi>(sdk: &W) {
    best_effort("expand", sdk.expand());
    best_effort("enableClosingConfirmation", sdk.enable_closing_confirmation());
}

pub fn share_progress<W, B>(sdk: Option<&W>, browser: &B, level: u32)
where
    W: WebAppApi,
    B: Browser + Clone + 'static,
{
    if let Some(sdk) = sdk {
        if best_effort("switchInlineQuery", sdk.switch_inline_query(&share_text(level))).is_some() {
            return;
        }
    }
    fallback_share(browser);
}

fn fallback_share<B: Browser + Clone + 'static>(browser: &B) {
    let url = browser.page_url();
    if browser.can_share() {
        browser.share(&ShareRequest {
            title: "TeacherHelper".to_string(),
            text: WEB_SHARE_TEXT.to_string(),
            url,
        });
        return;
    }
    let dialogs = browser.clone();
    let link = url.clone();
    browser.copy_text(
        &url,
        Box::new(move |copied| {
            if copied {
                dialogs.alert("Ссылка скопирована в буфер обмена!");
            } else {
                dialogs.alert(&format!("Поделитесь ссылкой: {}", link));
            }
        }),
    );
}

pub fn send_feedback<W, B>(sdk: Option<&W>, browser: &B)
where
    W: WebAppApi + Clone + 'static,
    B: Browser + Clone + 'static,
{
    if let Some(sdk) = sdk {
        let app = sdk.clone();
        let dialogs = browser.clone();
        let shown = sdk.show_popup(
            &feedback_popup(),
            Box::new(move |button_id| {
                if button_id.as_deref() == Some("ok") {
                    let opened = app.open_telegram_link(TELEGRAM_BOT_LINK);
                    if best_effort("openTelegramLink", opened).is_none() {
                        fallback_feedback(&dialogs);
                    }
                }
            }),
        );
        if best_effort("showPopup", shown).is_some() {
            return;
        }
    }
    fallback_feedback(browser);
}

fn fallback_feedback<B: Browser>(browser: &B) {
    if browser.confirm("Хотите отправить обратную связь по email?") {
        browser.open(&feedback_mailto());
    }
}

pub fn rate_app<W: WebAppApi, B: Browser>(sdk: Option<&W>, browser: &B) {
    if let Some(sdk) = sdk {
        if best_effort("showAlert", sdk.show_alert(RATE_TELEGRAM_MESSAGE)).is_some() {
            return;
        }
    }
    browser.alert(RATE_FALLBACK_MESSAGE);
}

#[component]
pub fn TelegramHelper() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let can_share = DomBrowser.can_share();

    // Runs after the platform becomes available, at most once per mount.
    let prepared = StoredValue::new(false);
    let supported = RwSignal::new(0usize);
    Effect::new(move |_| {
        if !ctx.platform_available() || prepared.get_value() {
            return;
        }
        if let Some(sdk) = TelegramWebApp::detect() {
            prepare_web_app(&sdk);
            supported.set(supported_method_count(&sdk));
            prepared.set_value(true);
        }
    });

    let mode = Memo::new(move |_| PanelMode::detect(ctx.platform_available(), can_share));
    // Outside Telegram every action goes straight to the browser fallbacks.
    let sdk = move || {
        if mode.get_untracked() == Some(PanelMode::Telegram) {
            TelegramWebApp::detect()
        } else {
            None
        }
    };
    let level = move || {
        ctx.session
            .with_untracked(|s| s.app_user.as_ref().map(|u| u.display_level()).unwrap_or(1))
    };

    view! {
        <Show when=move || mode.get().is_some()>
            <div class="card telegram-helper">
                <div class="card__header telegram-helper__header">
                    {icon("message-circle")}
                    <span class="card__title">
                        {move || mode.get().map(PanelMode::title).unwrap_or_default()}
                    </span>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || mode.get().map(PanelMode::badge).unwrap_or_default()}
                    </Badge>
                </div>
                <div class="card__content telegram-helper__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| share_progress(sdk().as_ref(), &DomBrowser, level())
                    >
                        {icon("share")}
                        "Поделиться прогрессом"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| send_feedback(sdk().as_ref(), &DomBrowser)
                    >
                        {icon("message-circle")}
                        "Отправить отзыв"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| rate_app(sdk().as_ref(), &DomBrowser)
                    >
                        {icon("star")}
                        "Оценить приложение"
                    </Button>
                    <Show when=move || mode.get() == Some(PanelMode::Telegram)>
                        <p class="telegram-helper__methods">
                            {move || format!("🔧 Доступные методы: {} из {}", supported.get(), HELPER_METHODS.len())}
                        </p>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
