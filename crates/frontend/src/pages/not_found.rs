use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::routes::DEFAULT_PAGE;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div id="page--not-found" class="page page--not-found">
            <h1>"Страница не найдена"</h1>
            <A href=DEFAULT_PAGE.url()>"Вернуться к обучению"</A>
        </div>
    }
}
