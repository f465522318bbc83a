use api::models::Summary;
use dioxus::prelude::*;

use crate::core::format;
use crate::t;

#[component]
pub fn KpiCards(summary: Summary) -> Element {
    let cards = [
        (
            t!("kpi-total-cars"),
            format::format_count(summary.total_cars),
            "kpi-card__icon--blue",
        ),
        (
            t!("kpi-total-brands"),
            format::format_count(summary.total_brands),
            "kpi-card__icon--violet",
        ),
        (
            t!("kpi-avg-performance"),
            format_stat(summary.avg_performance),
            "kpi-card__icon--amber",
        ),
        (
            t!("kpi-avg-safety"),
            format_stat(summary.avg_safety),
            "kpi-card__icon--emerald",
        ),
        (
            t!("kpi-avg-comfort"),
            format_stat(summary.avg_comfort),
            "kpi-card__icon--cyan",
        ),
    ];

    rsx! {
        section { class: "kpi-grid",
            for (label, value, accent) in cards.into_iter() {
                div { class: "kpi-card",
                    div { class: "kpi-card__icon {accent}", aria_hidden: "true" }
                    p { class: "kpi-card__value", "{value}" }
                    p { class: "kpi-card__label", "{label}" }
                }
            }
        }
    }
}

/// Upstream emits null for statistics it could not compute; show a dash
/// rather than a misleading zero.
fn format_stat(stat: Option<f64>) -> String {
    stat.map(|v| format::format_index(v, 1))
        .unwrap_or_else(|| "—".to_string())
}
