#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the dashboard markup
  (cards, tables, heatmap cells, loading/error surfaces) remain present in
  the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to
  the shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS
  relied upon by Rust components (tables, heatmap, KPI tiles, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app-shell",
    ".page {",
    ".theme-light",
    // Cards & section chrome
    ".glass-card",
    ".section-header",
    ".badge",
    ".kpi-grid",
    ".kpi-card",
    // Segment bars
    ".bar-track",
    ".bar-fill",
    // Data tables
    ".data-table",
    ".data-table__sort",
    ".data-table__cell--right",
    ".spark-bar",
    ".search-input",
    // Correlation heatmap
    ".heatmap-cell",
    ".heatmap-cell--diagonal",
    ".heatmap-cell--bright",
    ".heatmap-legend",
    // Loading & error surfaces
    ".skeleton",
    ".dashboard-error",
];

#[test]
fn required_selectors_are_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Shared theme is missing required selectors:\n  {}",
        missing.join("\n  ")
    );
}
