pub mod admin_panel;
pub mod learning;
pub mod not_found;
pub mod profile;
pub mod sections;

pub use admin_panel::AdminPanelPage;
pub use learning::LearningPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use sections::{AiHelperPage, LeaderboardPage, PremiumPage, ProgressPage};
