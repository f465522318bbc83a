use api::models::CarRow;
use dioxus::prelude::*;

use crate::core::format;
use crate::core::sort::{SortDirection, SortState, TableRow};
use crate::dashboard::columns::{self, CarColumn};
use crate::dashboard::sortable_table;
use crate::t;

#[component]
pub fn VehicleDataset(cars: Vec<CarRow>) -> Element {
    let mut search = use_signal(String::new);

    let extended = cars
        .first()
        .map(|row| matches!(row, CarRow::Extended(_)))
        .unwrap_or(true);
    let table_columns = columns::car_columns(extended);

    let sort_state = use_signal(|| SortState::new(CarColumn::Brand, SortDirection::Ascending));

    let filtered = filter_rows(&cars, &search());
    let placeholder = t!("search-placeholder");

    rsx! {
        section { class: "glass-card dashboard-card",
            div { class: "dashboard-card__toolbar",
                div { class: "section-header",
                    span { class: "section-header__icon section-header__icon--cyan", aria_hidden: "true" }
                    {t!("section-vehicle-dataset")}
                    span { class: "badge", "{filtered.len()} / {cars.len()}" }
                }
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "{placeholder}",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            div { class: "dashboard-card__scroll dashboard-card__scroll--tall",
                {sortable_table(&table_columns, &filtered, sort_state, render_car_cell)}
            }
        }
    }
}

/// Case-insensitive substring match on brand or model. An empty query keeps
/// every row; filtering derives a new collection, the source is untouched.
fn filter_rows(cars: &[CarRow], query: &str) -> Vec<CarRow> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return cars.to_vec();
    }
    cars.iter()
        .filter(|car| {
            car.brand().to_lowercase().contains(&query)
                || car.model().to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

fn render_car_cell(row: &CarRow, key: CarColumn) -> Element {
    match key {
        CarColumn::Brand => rsx! {
            span { class: "data-table__primary", "{row.brand()}" }
        },
        CarColumn::Model => rsx! {
            span { "{row.model()}" }
        },
        CarColumn::Price => rsx! {
            span { class: "data-table__mono", "{format::format_currency(row.cell(key).as_f64())}" }
        },
        _ => rsx! {
            span { class: "data-table__mono", "{format::format_index(row.cell(key).as_f64(), 2)}" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn car(brand: &str, model: &str) -> CarRow {
        serde_json::from_value(json!({
            "BRAND": brand,
            "MODEL": model,
            "HARGAOTR": 200_000_000.0,
            "SCORE_FEATURE": 6.0,
            "SCORE_SAFETY": 6.0,
            "SCORE_PERFORMANCE": 6.0,
            "SCORE_POPULARITY": 6.0,
            "SCORE_VALUE": 6.0
        }))
        .expect("car fixture should decode")
    }

    #[test]
    fn empty_query_keeps_every_row() {
        let rows = vec![car("Toyota", "Avanza"), car("Honda", "Brio")];
        assert_eq!(filter_rows(&rows, "").len(), 2);
        assert_eq!(filter_rows(&rows, "   ").len(), 2);
    }

    #[test]
    fn query_matches_brand_or_model_case_insensitively() {
        let rows = vec![
            car("Toyota", "Avanza"),
            car("Honda", "Brio"),
            car("Daihatsu", "Terios"),
        ];
        let hits = filter_rows(&rows, "toy");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].brand(), "Toyota");

        let hits = filter_rows(&rows, "RIO");
        assert_eq!(hits.len(), 2, "Brio and Terios both contain \"rio\"");
    }

    #[test]
    fn filtering_never_mutates_the_source() {
        let rows = vec![car("Toyota", "Avanza"), car("Honda", "Brio")];
        let before = rows.clone();
        let _ = filter_rows(&rows, "honda");
        assert_eq!(rows, before);
    }
}
