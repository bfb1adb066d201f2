use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::DEFAULT_PAGE;
use crate::system::pages::login::LoginPrompt;

/// Component that requires a signed-in user.
/// Shows the login prompt for guests.
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    move || {
        let (resolved, has_user) = ctx
            .session
            .with(|s| (s.user_resolved, s.app_user.is_some()));
        match (resolved, has_user) {
            (false, _) => view! { <div class="page__loading">"Загрузка..."</div> }.into_any(),
            (true, false) => view! { <LoginPrompt /> }.into_any(),
            (true, true) => children().into_any(),
        }
    }
}

/// Component that requires admin privileges.
/// Non-admins are sent to the default page once the user is known.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let navigate = use_navigate();

    Effect::new(move |_| {
        let (resolved, is_admin) = ctx.session.with(|s| (s.user_resolved, s.is_admin()));
        if resolved && !is_admin {
            log::info!("Admin page requested without admin role, redirecting");
            navigate(&DEFAULT_PAGE.url(), Default::default());
        }
    });

    view! {
        <Show
            when=move || ctx.session.with(|s| s.is_admin())
            fallback=|| view! { <div class="page__loading">"Проверка доступа..."</div> }
        >
            {children()}
        </Show>
    }
}
