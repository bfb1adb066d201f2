pub mod center;
pub mod footer;
pub mod global_context;
pub mod header;
pub mod left;
pub mod navigation;

use crate::system::session::use_session_bootstrap;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |  Header (mobile only)        |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |  Content (Center)            |
/// |           |                              |
/// +-----------+------------------------------+
/// ```
///
/// Mounting the shell starts the session bootstrap; unmounting releases the SDK script.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    use_session_bootstrap();

    view! {
        <div class="app-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>

            <main class="app-main">
                <header::Header />
                <center::Center>
                    {children()}
                </center::Center>
            </main>
        </div>
    }
}
