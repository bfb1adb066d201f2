//! Browser implementation of [`WebAppApi`] on top of `window.Telegram.WebApp`.

use std::cell::RefCell;

use contracts::platform::telegram::TelegramUser;
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::error::{best_effort, PlatformError, PlatformResult};
use super::sdk::{MainButtonApi, MainButtonConfig, Popup, WebAppApi};

thread_local! {
    // Telegram keeps one MainButton per page, so a single JS trampoline is registered
    // per button object and dispatches to the handler of the currently mounted shell.
    static MAIN_BUTTON_HANDLER: RefCell<Option<Box<dyn Fn()>>> = RefCell::new(None);
    static MAIN_BUTTON_TRAMPOLINE: RefCell<Option<(JsValue, Closure<dyn Fn()>)>> =
        RefCell::new(None);
}

/// Drops the click handler of the current mount. The trampoline stays registered.
pub fn release_main_button_handler() {
    MAIN_BUTTON_HANDLER.with(|slot| slot.borrow_mut().take());
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn method(target: &JsValue, name: &'static str) -> PlatformResult<Function> {
    get(target, name)
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(PlatformError::Unsupported(name))
}

fn describe(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", err)
}

fn call(target: &JsValue, name: &'static str, args: &[JsValue]) -> PlatformResult<JsValue> {
    let function = method(target, name)?;
    let args = args.iter().collect::<Array>();
    function
        .apply(target, &args)
        .map_err(|err| PlatformError::CallFailed {
            method: name,
            reason: describe(&err),
        })
}

fn set(target: &JsValue, key: &'static str, value: &str) -> PlatformResult<()> {
    Reflect::set(target, &JsValue::from_str(key), &JsValue::from_str(value))
        .map(|_| ())
        .map_err(|err| PlatformError::CallFailed {
            method: key,
            reason: describe(&err),
        })
}

#[derive(Serialize)]
struct PopupParams<'a> {
    title: &'a str,
    message: &'a str,
    buttons: Vec<PopupButtonParams<'a>>,
}

#[derive(Serialize)]
struct PopupButtonParams<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    text: &'a str,
}

#[derive(Clone, Debug)]
pub struct TelegramWebApp {
    app: JsValue,
}

impl TelegramWebApp {
    /// Looks up `window.Telegram.WebApp`; `None` when the SDK did not install it.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let telegram = get(window.as_ref(), "Telegram")?;
        let app = get(&telegram, "WebApp")?;
        app.is_object().then(|| Self { app })
    }
}

impl WebAppApi for TelegramWebApp {
    type MainButton = TelegramMainButton;

    fn supports(&self, name: &'static str) -> bool {
        method(&self.app, name).is_ok()
    }

    fn ready(&self) -> PlatformResult<()> {
        call(&self.app, "ready", &[]).map(|_| ())
    }

    fn set_header_color(&self, color: &str) -> PlatformResult<()> {
        call(&self.app, "setHeaderColor", &[JsValue::from_str(color)]).map(|_| ())
    }

    fn set_background_color(&self, color: &str) -> PlatformResult<()> {
        call(&self.app, "setBackgroundColor", &[JsValue::from_str(color)]).map(|_| ())
    }

    fn init_user(&self) -> Option<TelegramUser> {
        let user = get(&self.app, "initDataUnsafe").and_then(|data| get(&data, "user"))?;
        match serde_wasm_bindgen::from_value::<TelegramUser>(user) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("Telegram initDataUnsafe.user has unexpected shape: {}", err);
                None
            }
        }
    }

    fn main_button(&self) -> Option<TelegramMainButton> {
        get(&self.app, "MainButton")
            .filter(|button| button.is_object())
            .map(|button| TelegramMainButton { button })
    }

    fn expand(&self) -> PlatformResult<()> {
        call(&self.app, "expand", &[]).map(|_| ())
    }

    fn enable_closing_confirmation(&self) -> PlatformResult<()> {
        call(&self.app, "enableClosingConfirmation", &[]).map(|_| ())
    }

    fn switch_inline_query(&self, query: &str) -> PlatformResult<()> {
        call(&self.app, "switchInlineQuery", &[JsValue::from_str(query)]).map(|_| ())
    }

    fn show_alert(&self, message: &str) -> PlatformResult<()> {
        call(&self.app, "showAlert", &[JsValue::from_str(message)]).map(|_| ())
    }

    fn show_popup(
        &self,
        popup: &Popup,
        on_close: Box<dyn FnOnce(Option<String>)>,
    ) -> PlatformResult<()> {
        // Check before building the callback so an unsupported client leaks nothing.
        method(&self.app, "showPopup")?;

        let params = PopupParams {
            title: popup.title,
            message: popup.message,
            buttons: popup
                .buttons
                .iter()
                .map(|button| PopupButtonParams {
                    id: button.id,
                    kind: button.kind.as_str(),
                    text: button.text,
                })
                .collect(),
        };
        let params = serde_wasm_bindgen::to_value(&params)
            .map_err(|err| PlatformError::Dom(err.to_string()))?;
        let callback = Closure::once_into_js(move |button_id: JsValue| {
            on_close(button_id.as_string().filter(|id| !id.is_empty()));
        });

        call(&self.app, "showPopup", &[params, callback]).map(|_| ())
    }

    fn open_telegram_link(&self, url: &str) -> PlatformResult<()> {
        call(&self.app, "openTelegramLink", &[JsValue::from_str(url)]).map(|_| ())
    }
}

#[derive(Clone, Debug)]
pub struct TelegramMainButton {
    button: JsValue,
}

impl TelegramMainButton {
    fn ensure_trampoline(&self) -> PlatformResult<()> {
        let registered = MAIN_BUTTON_TRAMPOLINE.with(|slot| {
            slot.borrow()
                .as_ref()
                .map(|(button, _)| Object::is(button, &self.button))
                .unwrap_or(false)
        });
        if registered {
            return Ok(());
        }

        let trampoline = Closure::wrap(Box::new(|| {
            MAIN_BUTTON_HANDLER.with(|slot| {
                if let Some(handler) = slot.borrow().as_ref() {
                    handler();
                }
            });
        }) as Box<dyn Fn()>);

        call(&self.button, "onClick", &[trampoline.as_ref().clone()])?;

        // A reloaded SDK builds a new button object; the old trampoline is released.
        let previous = MAIN_BUTTON_TRAMPOLINE
            .with(|slot| slot.borrow_mut().replace((self.button.clone(), trampoline)));
        if let Some((old_button, old)) = previous {
            best_effort(
                "MainButton.offClick",
                call(&old_button, "offClick", &[old.as_ref().clone()]),
            );
        }
        Ok(())
    }
}

impl MainButtonApi for TelegramMainButton {
    fn configure(&self, config: &MainButtonConfig) -> PlatformResult<()> {
        method(&self.button, "setText")?;
        set(&self.button, "text", config.text)?;
        set(&self.button, "color", config.color)?;
        set(&self.button, "textColor", config.text_color)
    }

    fn on_click(&self, handler: Box<dyn Fn()>) -> PlatformResult<()> {
        method(&self.button, "onClick")?;
        MAIN_BUTTON_HANDLER.with(|slot| *slot.borrow_mut() = Some(handler));
        self.ensure_trampoline()
    }

    fn show(&self) -> PlatformResult<()> {
        call(&self.button, "show", &[]).map(|_| ())
    }

    fn hide(&self) -> PlatformResult<()> {
        call(&self.button, "hide", &[]).map(|_| ())
    }
}
