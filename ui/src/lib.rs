//! Shared UI crate for Otodash. The presentation core and all dashboard
//! views live here; the platform crates only supply routing and launch glue.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
    pub use app_navbar::Theme;
}
