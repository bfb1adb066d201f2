//! Plain browser dialogs used when Telegram does not provide its own.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::clipboard::copy_to_clipboard_with_result;

/// Payload of the Web Share API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

pub trait Browser {
    fn page_url(&self) -> String;
    /// Whether `navigator.share` exists.
    fn can_share(&self) -> bool;
    fn share(&self, request: &ShareRequest);
    fn copy_text(&self, text: &str, on_done: Box<dyn FnOnce(bool)>);
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn open(&self, url: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DomBrowser;

impl Browser for DomBrowser {
    fn page_url(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }

    fn can_share(&self) -> bool {
        web_sys::window()
            .and_then(|w| Reflect::get(&w.navigator(), &JsValue::from_str("share")).ok())
            .map(|share| share.is_function())
            .unwrap_or(false)
    }

    fn share(&self, request: &ShareRequest) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let data = web_sys::ShareData::new();
        data.set_title(&request.title);
        data.set_text(&request.text);
        data.set_url(&request.url);
        let promise = window.navigator().share_with_data(&data);
        spawn_local(async move {
            // Rejected as well when the user closes the share sheet.
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("navigator.share rejected: {:?}", err);
            }
        });
    }

    fn copy_text(&self, text: &str, on_done: Box<dyn FnOnce(bool)>) {
        copy_to_clipboard_with_result(text, on_done);
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::debug!("alert() failed: {:?}", err);
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn open(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url(url) {
                log::warn!("Failed to open {}: {:?}", url, err);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Browser, ShareRequest};

    /// Records dialogs; clones share the log.
    #[derive(Clone, Default)]
    pub struct FakeBrowser {
        pub url: String,
        pub share_supported: bool,
        pub clipboard_works: bool,
        pub confirm_answer: bool,
        pub log: Rc<RefCell<Vec<String>>>,
    }

    impl FakeBrowser {
        pub fn entries(&self) -> Vec<String> {
            self.log.borrow().clone()
        }
    }

    impl Browser for FakeBrowser {
        fn page_url(&self) -> String {
            self.url.clone()
        }

        fn can_share(&self) -> bool {
            self.share_supported
        }

        fn share(&self, request: &ShareRequest) {
            self.log
                .borrow_mut()
                .push(format!("share:{}|{}", request.title, request.url));
        }

        fn copy_text(&self, text: &str, on_done: Box<dyn FnOnce(bool)>) {
            self.log.borrow_mut().push(format!("copy:{}", text));
            on_done(self.clipboard_works);
        }

        fn alert(&self, message: &str) {
            self.log.borrow_mut().push(format!("alert:{}", message));
        }

        fn confirm(&self, message: &str) -> bool {
            self.log.borrow_mut().push(format!("confirm:{}", message));
            self.confirm_answer
        }

        fn open(&self, url: &str) {
            self.log.borrow_mut().push(format!("open:{}", url));
        }
    }
}
