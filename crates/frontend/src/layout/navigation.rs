//! Sidebar navigation entries.

use contracts::system::users::AppUser;

use crate::routes::routes::Page;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub url: String,
    pub icon: &'static str,
}

impl NavItem {
    pub fn for_page(page: Page) -> Self {
        Self {
            title: page.title(),
            url: page.url(),
            icon: page.icon(),
        }
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        self.url == current_path
    }
}

/// Primary pages in fixed order, plus the admin panel last for admins.
pub fn navigation_items(user: Option<&AppUser>) -> Vec<NavItem> {
    let mut items: Vec<NavItem> = Page::PRIMARY.into_iter().map(NavItem::for_page).collect();
    if user.map(AppUser::is_admin).unwrap_or(false) {
        items.push(NavItem::for_page(Page::AdminPanel));
    }
    items
}
