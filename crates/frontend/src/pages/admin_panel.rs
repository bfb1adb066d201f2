use leptos::prelude::*;

use crate::routes::routes::Page;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::guard::RequireAdmin;

#[component]
pub fn AdminPanelPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <PageFrame page=Page::AdminPanel subtitle="Управление платформой".to_string() />
        </RequireAdmin>
    }
}
