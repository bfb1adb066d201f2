use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::layout::Shell;
use crate::pages::{
    AdminPanelPage, AiHelperPage, LeaderboardPage, LearningPage, NotFoundPage, PremiumPage,
    ProfilePage, ProgressPage,
};

/// Application pages addressable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Learning,
    Leaderboard,
    Progress,
    Premium,
    AiHelper,
    Profile,
    AdminPanel,
}

/// Target of the Telegram main button.
pub const DEFAULT_PAGE: Page = Page::Learning;

impl Page {
    /// Pages every user sees, in sidebar order.
    pub const PRIMARY: [Page; 6] = [
        Page::Learning,
        Page::Leaderboard,
        Page::Progress,
        Page::Premium,
        Page::AiHelper,
        Page::Profile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Page::Learning => "Learning",
            Page::Leaderboard => "Leaderboard",
            Page::Progress => "Progress",
            Page::Premium => "Premium",
            Page::AiHelper => "AIHelper",
            Page::Profile => "Profile",
            Page::AdminPanel => "AdminPanel",
        }
    }

    /// Path segment registered with the router; always equal to `create_page_url(name)`.
    pub fn segment(self) -> &'static str {
        match self {
            Page::Learning => "learning",
            Page::Leaderboard => "leaderboard",
            Page::Progress => "progress",
            Page::Premium => "premium",
            Page::AiHelper => "aihelper",
            Page::Profile => "profile",
            Page::AdminPanel => "adminpanel",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Learning => "Обучение",
            Page::Leaderboard => "Рейтинг",
            Page::Progress => "Мой прогресс",
            Page::Premium => "Премиум",
            Page::AiHelper => "ИИ-Помощник",
            Page::Profile => "Профиль",
            Page::AdminPanel => "Админ-панель",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Learning => "book-open",
            Page::Leaderboard => "trophy",
            Page::Progress => "bar-chart",
            Page::Premium => "crown",
            Page::AiHelper => "brain",
            Page::Profile => "user",
            Page::AdminPanel => "settings",
        }
    }

    pub fn url(self) -> String {
        create_page_url(self.name())
    }
}

/// Maps a page name onto its path: `"AdminPanel"` -> `"/adminpanel"`, `"My Page"` -> `"/my-page"`.
pub fn create_page_url(name: &str) -> String {
    format!("/{}", name.trim().to_lowercase().replace(' ', "-"))
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DEFAULT_PAGE.url() /> } />
                    <Route path=StaticSegment(Page::Learning.segment()) view=LearningPage />
                    <Route path=StaticSegment(Page::Leaderboard.segment()) view=LeaderboardPage />
                    <Route path=StaticSegment(Page::Progress.segment()) view=ProgressPage />
                    <Route path=StaticSegment(Page::Premium.segment()) view=PremiumPage />
                    <Route path=StaticSegment(Page::AiHelper.segment()) view=AiHelperPage />
                    <Route path=StaticSegment(Page::Profile.segment()) view=ProfilePage />
                    <Route path=StaticSegment(Page::AdminPanel.segment()) view=AdminPanelPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_page_url() {
        assert_eq!(create_page_url("Learning"), "/learning");
        assert_eq!(create_page_url("AIHelper"), "/aihelper");
        assert_eq!(create_page_url("Teacher Notes"), "/teacher-notes");
    }

    #[test]
    fn test_segments_match_page_urls() {
        for page in Page::PRIMARY.into_iter().chain([Page::AdminPanel]) {
            assert_eq!(page.url(), format!("/{}", page.segment()), "{:?}", page);
        }
    }

    #[test]
    fn test_default_page_is_primary() {
        assert_eq!(Page::PRIMARY[0], DEFAULT_PAGE);
        assert!(!Page::PRIMARY.contains(&Page::AdminPanel));
    }
}
