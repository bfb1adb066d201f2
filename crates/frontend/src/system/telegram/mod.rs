pub mod error;
pub mod helper;
pub mod script;
pub mod sdk;
pub mod web_app;

pub use error::{best_effort, PlatformError, PlatformResult};
pub use sdk::{MainButtonApi, MainButtonConfig, WebAppApi, WebAppTheme, TELEGRAM_SDK_URL};
pub use web_app::TelegramWebApp;
