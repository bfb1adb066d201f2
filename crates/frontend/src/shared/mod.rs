pub mod api_utils;
pub mod browser;
pub mod clipboard;
pub mod components;
pub mod icons;
pub mod meta;
pub mod page_frame;
