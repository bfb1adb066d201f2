pub mod footer;

pub use footer::{FooterIdentity, SidebarFooter};
