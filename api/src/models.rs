//! Payload models for the five dashboard resources.
//!
//! The upstream service emits `null` wherever a statistic is undefined
//! (NaN/inf in the source frame), so every derived statistic decodes as an
//! `Option`. Brand and car rows exist in two historical shapes — an indexed
//! "extended" schema and a scored "legacy" schema — decoded as untagged
//! unions so either snapshot renders through the same views.

use serde::Deserialize;

/// KPI aggregate for the whole dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Summary {
    pub total_cars: u64,
    pub total_brands: u64,
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub price_median: Option<f64>,
    #[serde(default)]
    pub price_std: Option<f64>,
    #[serde(default)]
    pub p75_performance: Option<f64>,
    #[serde(default)]
    pub p75_safety: Option<f64>,
    #[serde(default)]
    pub p75_comfort: Option<f64>,
    #[serde(default)]
    pub avg_performance: Option<f64>,
    #[serde(default)]
    pub avg_efficiency: Option<f64>,
    #[serde(default)]
    pub avg_safety: Option<f64>,
    #[serde(default)]
    pub avg_comfort: Option<f64>,
    #[serde(default)]
    pub avg_tech: Option<f64>,
    #[serde(default)]
    pub avg_space: Option<f64>,
    #[serde(default)]
    pub avg_popularity: Option<f64>,
    #[serde(default)]
    pub avg_price: Option<f64>,
}

/// One bar of the price-segment distribution, in upstream order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Segment {
    pub segment: String,
    pub count: u64,
}

/// Per-brand aggregate row. Extended is tried first; a row missing the
/// indexed means falls through to the legacy scored shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BrandRow {
    Extended(BrandExtended),
    Legacy(BrandLegacy),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BrandExtended {
    #[serde(rename = "BRAND")]
    pub brand: String,
    pub avg_price_otr: Option<f64>,
    pub avg_performance: Option<f64>,
    pub avg_efficiency: Option<f64>,
    pub avg_safety: Option<f64>,
    pub avg_comfort: Option<f64>,
    pub avg_tech: Option<f64>,
    pub avg_space: Option<f64>,
    pub avg_popularity: Option<f64>,
    pub avg_price: Option<f64>,
    pub total_sales: Option<f64>,
    pub total_models: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BrandLegacy {
    #[serde(rename = "BRAND")]
    pub brand: String,
    pub avg_price: Option<f64>,
    pub avg_feature: Option<f64>,
    pub avg_safety: Option<f64>,
    pub avg_performance: Option<f64>,
    pub avg_value: Option<f64>,
    pub total_sales: Option<f64>,
}

impl BrandRow {
    pub fn brand(&self) -> &str {
        match self {
            BrandRow::Extended(row) => &row.brand,
            BrandRow::Legacy(row) => &row.brand,
        }
    }

    pub fn total_sales(&self) -> f64 {
        let sales = match self {
            BrandRow::Extended(row) => row.total_sales,
            BrandRow::Legacy(row) => row.total_sales,
        };
        sales.unwrap_or(0.0)
    }
}

/// Raw per-vehicle record, same extended/legacy split as [`BrandRow`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CarRow {
    Extended(CarExtended),
    Legacy(CarLegacy),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarExtended {
    #[serde(rename = "BRAND")]
    pub brand: String,
    #[serde(rename = "MODEL")]
    pub model: String,
    #[serde(rename = "HARGAOTR")]
    pub price_otr: Option<f64>,
    #[serde(rename = "INDEX_PERFORMANCE")]
    pub index_performance: Option<f64>,
    #[serde(rename = "INDEX_EFFICIENCY")]
    pub index_efficiency: Option<f64>,
    #[serde(rename = "INDEX_SAFETY")]
    pub index_safety: Option<f64>,
    #[serde(rename = "INDEX_COMFORT")]
    pub index_comfort: Option<f64>,
    #[serde(rename = "INDEX_TECH")]
    pub index_tech: Option<f64>,
    #[serde(rename = "INDEX_SPACE")]
    pub index_space: Option<f64>,
    #[serde(rename = "INDEX_POPULARITY")]
    pub index_popularity: Option<f64>,
    #[serde(rename = "INDEX_PRICE")]
    pub index_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarLegacy {
    #[serde(rename = "BRAND")]
    pub brand: String,
    #[serde(rename = "MODEL")]
    pub model: String,
    #[serde(rename = "HARGAOTR")]
    pub price_otr: Option<f64>,
    #[serde(rename = "SCORE_FEATURE")]
    pub score_feature: Option<f64>,
    #[serde(rename = "SCORE_SAFETY")]
    pub score_safety: Option<f64>,
    #[serde(rename = "SCORE_PERFORMANCE")]
    pub score_performance: Option<f64>,
    #[serde(rename = "SCORE_POPULARITY")]
    pub score_popularity: Option<f64>,
    #[serde(rename = "SCORE_VALUE")]
    pub score_value: Option<f64>,
}

impl CarRow {
    pub fn brand(&self) -> &str {
        match self {
            CarRow::Extended(row) => &row.brand,
            CarRow::Legacy(row) => &row.brand,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            CarRow::Extended(row) => &row.model,
            CarRow::Legacy(row) => &row.model,
        }
    }
}

/// Pairwise correlation of the numeric dataset columns.
///
/// Squareness, symmetry, and a unit diagonal are upstream guarantees, not
/// validated here; [`CorrelationData::value`] only shields against ragged
/// rows and null cells.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CorrelationData {
    pub columns: Vec<String>,
    pub matrix: Vec<Vec<Option<f64>>>,
}

impl CorrelationData {
    /// Coefficient at `(row, col)`; missing or null cells read as 0.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.matrix
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .flatten()
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The five resources combined into one consistent snapshot. The UI only
/// ever sees a complete bundle; partial fetches never reach rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub summary: Summary,
    pub segments: Vec<Segment>,
    pub brands: Vec<BrandRow>,
    pub cars: Vec<CarRow>,
    pub correlation: CorrelationData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extended_car_row_decodes() {
        let row: CarRow = serde_json::from_value(json!({
            "BRAND": "Toyota",
            "MODEL": "Avanza",
            "HARGAOTR": 255_000_000.0,
            "INDEX_PERFORMANCE": 61.2,
            "INDEX_EFFICIENCY": 71.0,
            "INDEX_SAFETY": 66.4,
            "INDEX_COMFORT": 58.9,
            "INDEX_TECH": 52.3,
            "INDEX_SPACE": 70.1,
            "INDEX_POPULARITY": 88.0,
            "INDEX_PRICE": 74.5,
            "BODY TYPE": "MPV"
        }))
        .expect("extended row should decode");

        assert!(matches!(row, CarRow::Extended(_)));
        assert_eq!(row.brand(), "Toyota");
        assert_eq!(row.model(), "Avanza");
    }

    #[test]
    fn legacy_car_row_decodes() {
        let row: CarRow = serde_json::from_value(json!({
            "BRAND": "Honda",
            "MODEL": "Brio",
            "HARGAOTR": 167_900_000.0,
            "SCORE_FEATURE": 6.1,
            "SCORE_SAFETY": 7.0,
            "SCORE_PERFORMANCE": 5.8,
            "SCORE_POPULARITY": 8.2,
            "SCORE_VALUE": 7.4
        }))
        .expect("legacy row should decode");

        assert!(matches!(row, CarRow::Legacy(_)));
        assert_eq!(row.model(), "Brio");
    }

    #[test]
    fn brand_row_variants_decode() {
        let extended: BrandRow = serde_json::from_value(json!({
            "BRAND": "Daihatsu",
            "avg_price_otr": 210_500_000.0,
            "avg_performance": 55.0,
            "avg_efficiency": 68.3,
            "avg_safety": 60.1,
            "avg_comfort": 57.7,
            "avg_tech": 49.0,
            "avg_space": 66.2,
            "avg_popularity": 71.9,
            "avg_price": 69.4,
            "total_sales": 182_330.0,
            "total_models": 14
        }))
        .expect("extended brand should decode");
        assert!(matches!(extended, BrandRow::Extended(_)));

        let legacy: BrandRow = serde_json::from_value(json!({
            "BRAND": "Suzuki",
            "avg_price": 198_000_000.0,
            "avg_feature": 6.3,
            "avg_safety": 6.8,
            "avg_performance": 6.1,
            "avg_value": 7.2,
            "total_sales": 88_410.0
        }))
        .expect("legacy brand should decode");
        assert!(matches!(legacy, BrandRow::Legacy(_)));
        assert_eq!(legacy.total_sales(), 88_410.0);
    }

    #[test]
    fn summary_tolerates_null_statistics() {
        let summary: Summary = serde_json::from_value(json!({
            "total_cars": 412,
            "total_brands": 33,
            "price_min": 112_000_000.0,
            "price_max": null,
            "price_median": 310_000_000.0,
            "price_std": null,
            "avg_performance": 58.4,
            "avg_safety": null
        }))
        .expect("summary should decode with nulls and absent keys");

        assert_eq!(summary.total_cars, 412);
        assert_eq!(summary.price_max, None);
        assert_eq!(summary.avg_safety, None);
        assert_eq!(summary.avg_comfort, None);
        assert_eq!(summary.avg_performance, Some(58.4));
    }

    #[test]
    fn correlation_access_is_defensive() {
        let correlation: CorrelationData = serde_json::from_value(json!({
            "columns": ["HARGAOTR", "INDEX_SAFETY"],
            "matrix": [[1.0, null], [0.42, 1.0]]
        }))
        .expect("correlation should decode");

        assert_eq!(correlation.len(), 2);
        assert_eq!(correlation.value(0, 0), 1.0);
        assert_eq!(correlation.value(0, 1), 0.0, "null cell reads as 0");
        assert_eq!(correlation.value(1, 0), 0.42);
        assert_eq!(correlation.value(7, 7), 0.0, "out of range reads as 0");
    }
}
