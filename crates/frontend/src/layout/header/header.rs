use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Mobile-only top bar: sidebar trigger, title and the Telegram marker.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header header--mobile">
            <div class="header__content">
                <button
                    class="button button--ghost header__trigger"
                    aria-label="Toggle Sidebar"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {icon("menu")}
                </button>
                <h1 class="header__title">"TeacherHelper"</h1>
                <Show when=move || ctx.platform_available()>
                    <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Brand class="header__badge">"Telegram"</Badge>
                </Show>
            </div>
        </header>
    }
}
