//! Head meta tags the Telegram client expects.

use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

pub const META_TAGS: [(&str, &str); 2] = [
    ("telegram-web-app", "1"),
    (
        "viewport",
        "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no",
    ),
];

/// Tags from [`META_TAGS`] whose name is not in the document yet.
pub fn missing_tags(exists: impl Fn(&str) -> bool) -> Vec<(&'static str, &'static str)> {
    META_TAGS
        .iter()
        .copied()
        .filter(|(name, _)| !exists(name))
        .collect()
}

/// Adds the missing tags to `<head>`. Safe to call more than once.
pub fn ensure_meta_tags() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        log::warn!("Document has no <head>, meta tags skipped");
        return;
    };

    let exists = |name: &str| {
        document
            .query_selector(&format!("meta[name=\"{}\"]", name))
            .ok()
            .flatten()
            .is_some()
    };

    for (name, content) in missing_tags(exists) {
        let meta = match document
            .create_element("meta")
            .map(|el| el.unchecked_into::<HtmlMetaElement>())
        {
            Ok(meta) => meta,
            Err(err) => {
                log::warn!("Failed to create meta tag {}: {:?}", name, err);
                continue;
            }
        };
        meta.set_name(name);
        meta.set_content(content);
        if let Err(err) = head.append_child(&meta) {
            log::warn!("Failed to append meta tag {}: {:?}", name, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tags() {
        assert_eq!(missing_tags(|_| false).len(), 2);
        assert!(missing_tags(|_| true).is_empty());

        let missing = missing_tags(|name| name == "viewport");
        assert_eq!(missing, vec![("telegram-web-app", "1")]);
    }
}
