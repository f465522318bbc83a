//! Shared sortable-table renderer.
//!
//! One generic component body serves both row schemas and both table views;
//! the caller supplies the column descriptors and a cell renderer, the table
//! owns header toggles, sort indicators, and the derived ordering.

use dioxus::prelude::*;

use crate::core::sort::{self, Align, Column, SortDirection, SortState, TableRow};

pub(crate) fn sortable_table<R, F>(
    columns: &[Column<R::Key>],
    rows: &[R],
    mut state: Signal<SortState<R::Key>>,
    render_cell: F,
) -> Element
where
    R: TableRow + Clone + 'static,
    R::Key: PartialEq + Copy + 'static,
    F: Fn(&R, R::Key) -> Element,
{
    let current = state();
    let ordered = sort::sorted_by_column(rows, current.key, current.direction);

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    for col in columns.iter() {
                        th {
                            class: if col.align == Align::Right { "data-table__head data-table__head--right" } else { "data-table__head" },
                            button {
                                r#type: "button",
                                class: "data-table__sort",
                                onclick: {
                                    let key = col.key;
                                    let default_direction = col.default_direction;
                                    move |_| state.with_mut(|s| s.toggle(key, default_direction))
                                },
                                "{col.label}"
                                span { class: "data-table__sort-icon", "{sort_glyph(&current, col.key)}" }
                            }
                        }
                    }
                }
            }
            tbody {
                for row in ordered.iter() {
                    tr {
                        for col in columns.iter() {
                            td {
                                class: if col.align == Align::Right { "data-table__cell data-table__cell--right" } else { "data-table__cell" },
                                {render_cell(row, col.key)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sort_glyph<K: PartialEq + Copy>(state: &SortState<K>, key: K) -> &'static str {
    if state.key != key {
        "↕"
    } else if state.direction == SortDirection::Ascending {
        "↑"
    } else {
        "↓"
    }
}
