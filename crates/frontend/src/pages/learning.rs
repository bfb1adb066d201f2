use leptos::prelude::*;

use crate::routes::routes::Page;
use crate::shared::page_frame::PageFrame;
use crate::system::telegram::helper::TelegramHelper;

#[component]
pub fn LearningPage() -> impl IntoView {
    view! {
        <PageFrame page=Page::Learning subtitle="Изучайте историю шаг за шагом".to_string()>
            <TelegramHelper />
        </PageFrame>
    }
}
