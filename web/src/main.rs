use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder, Theme};
use ui::components::AppNavbar;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Dashboard {},
}

// Shared theme lives in the ui crate; embed it so web and desktop render
// from the same stylesheet.
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            dashboard: nav_dashboard,
        });
    }

    // Global language code shared with the navbar's locale switcher.
    use_context_provider(|| Signal::new("en-US".to_string()));
    // Color scheme toggled from the navbar; not persisted.
    use_context_provider(|| Signal::new(Theme::Dark));

    rsx! {
        // Global app resources
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    let theme: Signal<Theme> = use_context();

    rsx! {
        div { class: "app-shell {theme().class()}",
            AppNavbar { }
            Outlet::<Route> {}
        }
    }
}
