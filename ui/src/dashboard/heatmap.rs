use api::models::CorrelationData;
use dioxus::prelude::*;

use crate::core::heatmap;
use crate::t;

#[component]
pub fn CorrelationHeatmap(correlation: CorrelationData) -> Element {
    let header: Vec<(String, String)> = correlation
        .columns
        .iter()
        .map(|col| (col.clone(), shorten_label(col)))
        .collect();
    let rows = matrix_rows(&correlation);

    rsx! {
        section { class: "glass-card dashboard-card",
            div { class: "section-header",
                span { class: "section-header__icon section-header__icon--emerald", aria_hidden: "true" }
                {t!("section-correlation")}
                span { class: "badge", {t!("badge-heatmap")} }
            }
            div { class: "dashboard-card__scroll",
                table { class: "data-table data-table--matrix",
                    thead {
                        tr {
                            th { class: "matrix-corner" }
                            for (full, short) in header.iter() {
                                th { class: "matrix-col-label", title: "{full}", "{short}" }
                            }
                        }
                    }
                    tbody {
                        for row in rows.into_iter() {
                            tr { key: "{row.label}",
                                td { class: "matrix-row-label", "{row.label}" }
                                for cell in row.cells.into_iter() {
                                    td { class: "matrix-cell",
                                        div {
                                            class: "{cell.class}",
                                            style: "background: {cell.background}",
                                            title: "{cell.tooltip}",
                                            "{cell.text}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            // Diverging legend mirrors the scale endpoints.
            div { class: "heatmap-legend",
                span { "-1.0" }
                div { class: "heatmap-legend__bar" }
                span { "+1.0" }
            }
        }
    }
}

struct MatrixRow {
    label: String,
    cells: Vec<MatrixCell>,
}

struct MatrixCell {
    text: String,
    class: &'static str,
    background: String,
    tooltip: String,
}

fn matrix_rows(correlation: &CorrelationData) -> Vec<MatrixRow> {
    let size = correlation.len();

    (0..size)
        .map(|i| MatrixRow {
            label: shorten_label(&correlation.columns[i]),
            cells: (0..size)
                .map(|j| {
                    let value = correlation.value(i, j);
                    let diagonal = i == j;
                    MatrixCell {
                        text: format!("{value:.2}"),
                        class: cell_class(value, diagonal),
                        background: if diagonal {
                            heatmap::DIAGONAL_HIGHLIGHT.css()
                        } else {
                            heatmap::correlation_color(value).css()
                        },
                        tooltip: format!(
                            "{} × {} = {value:.3}",
                            correlation.columns[i], correlation.columns[j]
                        ),
                    }
                })
                .collect(),
        })
        .collect()
}

fn cell_class(value: f64, diagonal: bool) -> &'static str {
    if diagonal {
        "heatmap-cell heatmap-cell--diagonal"
    } else if heatmap::needs_high_contrast_label(value) {
        "heatmap-cell heatmap-cell--bright"
    } else {
        "heatmap-cell"
    }
}

/// Compact axis labels: the `INDEX_` prefix is noise in a dense grid and the
/// two physical columns carry their unit in the name.
fn shorten_label(column: &str) -> String {
    column
        .replace("INDEX_", "")
        .replace("HORSE POWER (HP)", "HP")
        .replace("TORQUE (Nm)", "Torque")
}
