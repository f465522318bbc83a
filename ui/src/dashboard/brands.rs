use api::models::BrandRow;
use dioxus::prelude::*;

use crate::core::format;
use crate::core::sort::{SortDirection, SortState, TableRow};
use crate::dashboard::columns::{self, BrandColumn};
use crate::dashboard::sortable_table;
use crate::t;

#[component]
pub fn BrandAnalysis(brands: Vec<BrandRow>) -> Element {
    let extended = brands
        .first()
        .map(|row| matches!(row, BrandRow::Extended(_)))
        .unwrap_or(true);
    let table_columns = columns::brand_columns(extended);

    // Magnitude column by default, largest sellers first.
    let sort_state = use_signal(|| SortState::new(BrandColumn::Sales, SortDirection::Descending));

    let max_sales = brands
        .iter()
        .map(|row| row.total_sales())
        .fold(1.0_f64, f64::max);

    rsx! {
        section { class: "glass-card dashboard-card",
            div { class: "section-header",
                span { class: "section-header__icon section-header__icon--purple", aria_hidden: "true" }
                {t!("section-brand-analysis")}
                span { class: "badge", {t!("badge-brands", count = brands.len().to_string())} }
            }
            div { class: "dashboard-card__scroll",
                {sortable_table(&table_columns, &brands, sort_state, move |row, key| {
                    render_brand_cell(row, key, max_sales)
                })}
            }
        }
    }
}

fn render_brand_cell(row: &BrandRow, key: BrandColumn, max_sales: f64) -> Element {
    match key {
        BrandColumn::Brand => rsx! {
            span { class: "data-table__primary", "{row.brand()}" }
        },
        BrandColumn::AvgPrice => rsx! {
            span { class: "data-table__mono", "{format::format_currency(row.cell(key).as_f64())}" }
        },
        BrandColumn::Sales => {
            let sales = row.total_sales();
            let fill_style = format!("width: {:.1}%", sales / max_sales * 100.0);
            rsx! {
                div { class: "data-table__sales",
                    span { class: "data-table__mono", "{format::format_count(sales.round().max(0.0) as u64)}" }
                    div { class: "spark-bar",
                        div { class: "spark-bar-fill", style: "{fill_style}" }
                    }
                }
            }
        }
        BrandColumn::Models => rsx! {
            span { class: "data-table__mono", "{format::format_count(row.cell(key).as_f64() as u64)}" }
        },
        _ => rsx! {
            span { class: "data-table__mono", "{format::format_index(row.cell(key).as_f64(), 1)}" }
        },
    }
}
