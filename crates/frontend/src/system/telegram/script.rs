//! Injection and removal of the SDK `<script>` element.
//!
//! An [`InjectedScript`] is owned by exactly one mount of the shell. Releasing it removes the
//! element from `<head>` if it is still there; releasing twice is a no-op.

use std::sync::atomic::{AtomicU64, Ordering};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::error::{PlatformError, PlatformResult};

static NEXT_SCRIPT_ID: AtomicU64 = AtomicU64::new(1);

/// Load callbacks; exactly one of them fires for a given element.
pub struct ScriptCallbacks {
    pub on_load: Box<dyn FnOnce()>,
    pub on_error: Box<dyn FnOnce()>,
}

/// Document operations needed to manage an injected script.
pub trait ScriptHost {
    fn append(&self, id: &str, src: &str, callbacks: ScriptCallbacks) -> PlatformResult<()>;
    fn is_attached(&self, id: &str) -> bool;
    fn remove(&self, id: &str) -> PlatformResult<()>;
}

#[derive(Debug, PartialEq, Eq)]
pub struct InjectedScript {
    id: String,
    released: bool,
}

impl InjectedScript {
    pub fn inject<H: ScriptHost>(
        host: &H,
        src: &str,
        callbacks: ScriptCallbacks,
    ) -> PlatformResult<Self> {
        let id = format!(
            "telegram-web-app-sdk-{}",
            NEXT_SCRIPT_ID.fetch_add(1, Ordering::Relaxed)
        );
        host.append(&id, src, callbacks)?;
        log::debug!("Injected script #{} ({})", id, src);
        Ok(Self {
            id,
            released: false,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if this call detached the element.
    pub fn release<H: ScriptHost>(&mut self, host: &H) -> bool {
        if self.released {
            return false;
        }
        self.released = true;

        if !host.is_attached(&self.id) {
            return false;
        }
        match host.remove(&self.id) {
            Ok(()) => {
                log::debug!("Removed script #{}", self.id);
                true
            }
            Err(err) => {
                log::warn!("Failed to remove script #{}: {}", self.id, err);
                false
            }
        }
    }
}

/// `document.head` of the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomScriptHost;

impl DomScriptHost {
    fn document() -> PlatformResult<web_sys::Document> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| PlatformError::Dom("document is not available".to_string()))
    }
}

impl ScriptHost for DomScriptHost {
    fn append(&self, id: &str, src: &str, callbacks: ScriptCallbacks) -> PlatformResult<()> {
        let document = Self::document()?;
        let head = document
            .head()
            .ok_or_else(|| PlatformError::Dom("document has no <head>".to_string()))?;

        let script = document
            .create_element("script")
            .map_err(|err| PlatformError::Dom(format!("{:?}", err)))?
            .dyn_into::<web_sys::HtmlScriptElement>()
            .map_err(|_| PlatformError::Dom("created element is not a script".to_string()))?;
        script.set_id(id);
        script.set_src(src);
        script.set_async(true);

        let ScriptCallbacks { on_load, on_error } = callbacks;
        let on_load = Closure::once_into_js(move || on_load());
        let on_error = Closure::once_into_js(move || on_error());
        script.set_onload(Some(on_load.unchecked_ref()));
        script.set_onerror(Some(on_error.unchecked_ref()));

        head.append_child(&script)
            .map(|_| ())
            .map_err(|err| PlatformError::Dom(format!("{:?}", err)))
    }

    fn is_attached(&self, id: &str) -> bool {
        Self::document()
            .ok()
            .and_then(|document| document.get_element_by_id(id))
            .is_some()
    }

    fn remove(&self, id: &str) -> PlatformResult<()> {
        let element = Self::document()?
            .get_element_by_id(id)
            .ok_or_else(|| PlatformError::Dom(format!("script #{} is not attached", id)))?;
        element.remove();
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use super::*;

    /// In-memory `<head>`: keeps attached ids and the pending callbacks of each script.
    #[derive(Default)]
    pub struct FakeScriptHost {
        pub attached: RefCell<Vec<String>>,
        pub appended: RefCell<usize>,
        pub removed: RefCell<usize>,
        pending: RefCell<BTreeMap<String, ScriptCallbacks>>,
    }

    impl FakeScriptHost {
        pub fn attached_count(&self) -> usize {
            self.attached.borrow().len()
        }

        pub fn fire_load(&self, id: &str) {
            let callbacks = self.pending.borrow_mut().remove(id);
            if let Some(callbacks) = callbacks {
                (callbacks.on_load)();
            }
        }

        pub fn fire_error(&self, id: &str) {
            let callbacks = self.pending.borrow_mut().remove(id);
            if let Some(callbacks) = callbacks {
                (callbacks.on_error)();
            }
        }
    }

    impl ScriptHost for FakeScriptHost {
        fn append(&self, id: &str, _src: &str, callbacks: ScriptCallbacks) -> PlatformResult<()> {
            self.attached.borrow_mut().push(id.to_string());
            self.pending.borrow_mut().insert(id.to_string(), callbacks);
            *self.appended.borrow_mut() += 1;
            Ok(())
        }

        fn is_attached(&self, id: &str) -> bool {
            self.attached.borrow().iter().any(|attached| attached == id)
        }

        fn remove(&self, id: &str) -> PlatformResult<()> {
            self.attached.borrow_mut().retain(|attached| attached != id);
            *self.removed.borrow_mut() += 1;
            Ok(())
        }
    }
}
