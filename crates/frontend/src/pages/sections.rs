//! Leaderboard, progress, premium and AI helper pages: a titled frame each.

use leptos::prelude::*;

use crate::routes::routes::Page;
use crate::shared::page_frame::PageFrame;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    view! { <PageFrame page=Page::Leaderboard subtitle="Лучшие ученики недели".to_string() /> }
}

#[component]
pub fn ProgressPage() -> impl IntoView {
    view! { <PageFrame page=Page::Progress /> }
}

#[component]
pub fn PremiumPage() -> impl IntoView {
    view! { <PageFrame page=Page::Premium /> }
}

#[component]
pub fn AiHelperPage() -> impl IntoView {
    view! { <PageFrame page=Page::AiHelper subtitle="Задайте вопрос по истории".to_string() /> }
}
