//! PageFrame: standard root wrapper for every routed page.
//!
//! Sets `id="page--{segment}"` on the root element so a page found in the DOM Inspector
//! maps straight back to its [`Page`] variant.

use leptos::prelude::*;

use crate::routes::routes::Page;
use crate::shared::components::page_header::PageHeader;

#[component]
pub fn PageFrame(
    page: Page,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div id=format!("page--{}", page.segment()) class="page" data-page=page.name()>
            <PageHeader title=page.title() subtitle=subtitle />
            <div class="page__content">
                {children.map(|children| children())}
            </div>
        </div>
    }
}
