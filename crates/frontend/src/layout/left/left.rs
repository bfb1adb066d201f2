use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar zone. Always visible on desktop; on mobile it slides in while `sidebar_open`.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.sidebar_open.get();

    view! {
        <div data-zone="left" class="left" class:left--open=is_open>
            {children()}
        </div>
        <Show when=is_open>
            <div class="left__backdrop" on:click=move |_| ctx.close_sidebar()></div>
        </Show>
    }
}
