//! Sidebar: brand, navigation, achievements, Telegram identity and the footer.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use crate::layout::footer::SidebarFooter;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::navigation::NavItem;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <aside data-zone="sidebar" class="app-sidebar">
            <div class="app-sidebar__header">
                <div class="app-sidebar__logo">{icon("graduation-cap")}</div>
                <div>
                    <h2 class="app-sidebar__title">"TeacherHelper"</h2>
                    <p class="app-sidebar__subtitle">"Умный помощник педагога"</p>
                </div>
            </div>

            <div class="app-sidebar__content">
                <NavigationGroup />
                <Show when=move || ctx.session.with(|s| s.show_achievements())>
                    <AchievementsGroup />
                </Show>
                <Show when=move || ctx.session.with(|s| s.show_platform_panel())>
                    <TelegramGroup />
                </Show>
            </div>

            <SidebarFooter />
        </aside>
    }
}

#[component]
fn NavigationGroup() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let pathname = use_location().pathname;
    let items = Memo::new(move |_| ctx.nav_items());

    view! {
        <div class="app-sidebar__group">
            <div class="app-sidebar__group-label">"Навигация"</div>
            <nav class="app-sidebar__menu">
                <For
                    each=move || items.get()
                    key=|item| item.url.clone()
                    children=move |item: NavItem| {
                        let href = item.url.clone();
                        let (title, icon_name) = (item.title, item.icon);
                        let active = move || pathname.with(|path| item.is_active(path));
                        view! {
                            <A
                                href={href}
                                {..}
                                attr:class="app-sidebar__item"
                                class:app-sidebar__item--active=active
                                on:click=move |_| ctx.close_sidebar()
                            >
                                {icon(icon_name)}
                                <span class="app-sidebar__item-label">{title}</span>
                            </A>
                        }
                    }
                />
            </nav>
        </div>
    }
}

#[component]
fn AchievementsGroup() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let level = move || {
        ctx.session
            .with(|s| s.app_user.as_ref().map(|u| u.display_level()).unwrap_or(1))
    };
    let points = move || {
        ctx.session
            .with(|s| s.app_user.as_ref().map(|u| u.total_points).unwrap_or(0))
    };

    view! {
        <div class="app-sidebar__group">
            <div class="app-sidebar__group-label">"Мои достижения"</div>
            <div class="app-sidebar__stats">
                <div class="app-sidebar__stat">
                    <span class="app-sidebar__stat-label">
                        {icon("crown")}
                        "Уровень"
                    </span>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>{level}</Badge>
                </div>
                <div class="app-sidebar__stat">
                    <span class="app-sidebar__stat-label">"Баллы"</span>
                    <span class="app-sidebar__stat-value">{points}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TelegramGroup() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let name = move || {
        ctx.session
            .with(|s| s.platform_user.as_ref().map(|u| u.display_name()))
            .unwrap_or_default()
    };
    let handle = move || {
        ctx.session
            .with(|s| s.platform_user.as_ref().and_then(|u| u.handle()))
    };

    view! {
        <div class="app-sidebar__group app-sidebar__group--telegram">
            <div class="app-sidebar__group-label">"Telegram"</div>
            <div class="app-sidebar__telegram">
                <p class="app-sidebar__telegram-name">{name}</p>
                {move || handle().map(|h| view! { <p class="app-sidebar__telegram-handle">{h}</p> })}
            </div>
        </div>
    }
}
