use api::ApiClient;
use dioxus::prelude::*;

use crate::core::format;
use crate::dashboard::{
    BrandAnalysis, CorrelationHeatmap, DashboardState, KpiCards, PriceDistribution, VehicleDataset,
};
use crate::t;

#[cfg(debug_assertions)]
fn log_dashboard_render(state: &DashboardState) {
    // Lightweight render trace for diagnosing fetch/readiness issues.
    tracing::debug!(ready = state.is_ready(), "dashboard render");
}

#[component]
pub fn Dashboard() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // One fetch per page lifecycle. All five resources join inside the
    // resource future, so the page observes a complete snapshot or nothing.
    let snapshot = use_resource(|| async move { ApiClient::new().load_dashboard().await });

    let settled = snapshot.read();
    let state = DashboardState::from_settled((*settled).as_ref());

    #[cfg(debug_assertions)]
    {
        log_dashboard_render(&state);
    }

    match state {
        DashboardState::Loading => render_skeleton(),
        DashboardState::Failed(reason) => render_error(reason),
        DashboardState::Ready(data) => {
            let cars_count = format::format_count(data.summary.total_cars);
            let brands_count = format::format_count(data.summary.total_brands);
            let records_line = t!(
                "dashboard-records",
                cars = cars_count.clone(),
                brands = brands_count.clone()
            );
            let footer_line = t!("dashboard-footer", cars = cars_count, brands = brands_count);

            rsx! {
                section { class: "page page-dashboard",
                    header { class: "dashboard-header",
                        div {
                            h1 { class: "dashboard-header__title", {t!("dashboard-title")} }
                            p { class: "dashboard-header__subtitle", {t!("dashboard-subtitle")} }
                        }
                        p { class: "dashboard-header__meta", "{records_line}" }
                    }

                    KpiCards { summary: data.summary.clone() }

                    div { class: "dashboard-grid",
                        PriceDistribution { segments: data.segments.clone() }
                        BrandAnalysis { brands: data.brands.clone() }
                    }

                    VehicleDataset { cars: data.cars.clone() }

                    if !data.correlation.is_empty() {
                        CorrelationHeatmap { correlation: data.correlation.clone() }
                    }

                    footer { class: "dashboard-footer",
                        p { "{footer_line}" }
                    }
                }
            }
        }
    }
}

fn render_skeleton() -> Element {
    rsx! {
        section { class: "page page-dashboard page-dashboard--loading",
            div { class: "skeleton skeleton--title" }
            div { class: "skeleton skeleton--subtitle" }
            div { class: "kpi-grid",
                for i in 0..5 {
                    div { key: "{i}", class: "skeleton skeleton--kpi" }
                }
            }
            div { class: "dashboard-grid",
                div { class: "skeleton skeleton--card" }
                div { class: "skeleton skeleton--card" }
            }
            div { class: "skeleton skeleton--card skeleton--card-tall" }
        }
    }
}

fn render_error(reason: String) -> Element {
    rsx! {
        section { class: "page page-dashboard",
            div { class: "glass-card dashboard-error",
                h2 { class: "dashboard-error__title", {t!("dashboard-error-title")} }
                p { class: "dashboard-error__reason", "{reason}" }
                p { class: "dashboard-error__hint", {t!("dashboard-error-hint")} }
            }
        }
    }
}
