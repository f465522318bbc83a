//! Column identifiers and descriptor sets for the two row schemas.
//!
//! The sort engine never inspects a row shape; these adapters map an
//! enumerated column key onto whichever schema variant a payload decoded
//! into. Keys absent from a variant read as [`CellValue::Missing`], which
//! the engine coerces to zero.

use api::models::{BrandRow, CarRow};

use crate::core::sort::{Align, CellValue, Column, SortDirection, TableRow};

/// Sortable columns of the brand aggregate table, across both schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandColumn {
    Brand,
    AvgPrice,
    Feature,
    Performance,
    Efficiency,
    Safety,
    Comfort,
    Tech,
    Space,
    Popularity,
    Value,
    Sales,
    Models,
}

impl TableRow for BrandRow {
    type Key = BrandColumn;

    fn cell(&self, key: BrandColumn) -> CellValue<'_> {
        match self {
            BrandRow::Extended(row) => match key {
                BrandColumn::Brand => CellValue::Text(&row.brand),
                BrandColumn::AvgPrice => stat(row.avg_price_otr),
                BrandColumn::Performance => stat(row.avg_performance),
                BrandColumn::Efficiency => stat(row.avg_efficiency),
                BrandColumn::Safety => stat(row.avg_safety),
                BrandColumn::Comfort => stat(row.avg_comfort),
                BrandColumn::Tech => stat(row.avg_tech),
                BrandColumn::Space => stat(row.avg_space),
                BrandColumn::Popularity => stat(row.avg_popularity),
                BrandColumn::Sales => stat(row.total_sales),
                BrandColumn::Models => CellValue::Number(row.total_models as f64),
                BrandColumn::Feature | BrandColumn::Value => CellValue::Missing,
            },
            BrandRow::Legacy(row) => match key {
                BrandColumn::Brand => CellValue::Text(&row.brand),
                BrandColumn::AvgPrice => stat(row.avg_price),
                BrandColumn::Feature => stat(row.avg_feature),
                BrandColumn::Safety => stat(row.avg_safety),
                BrandColumn::Performance => stat(row.avg_performance),
                BrandColumn::Value => stat(row.avg_value),
                BrandColumn::Sales => stat(row.total_sales),
                _ => CellValue::Missing,
            },
        }
    }
}

/// Sortable columns of the raw vehicle table, across both schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarColumn {
    Brand,
    Model,
    Price,
    Feature,
    Performance,
    Efficiency,
    Safety,
    Comfort,
    Tech,
    Space,
    Popularity,
    Value,
    PriceIndex,
}

impl TableRow for CarRow {
    type Key = CarColumn;

    fn cell(&self, key: CarColumn) -> CellValue<'_> {
        match self {
            CarRow::Extended(row) => match key {
                CarColumn::Brand => CellValue::Text(&row.brand),
                CarColumn::Model => CellValue::Text(&row.model),
                CarColumn::Price => stat(row.price_otr),
                CarColumn::Performance => stat(row.index_performance),
                CarColumn::Efficiency => stat(row.index_efficiency),
                CarColumn::Safety => stat(row.index_safety),
                CarColumn::Comfort => stat(row.index_comfort),
                CarColumn::Tech => stat(row.index_tech),
                CarColumn::Space => stat(row.index_space),
                CarColumn::Popularity => stat(row.index_popularity),
                CarColumn::PriceIndex => stat(row.index_price),
                CarColumn::Feature | CarColumn::Value => CellValue::Missing,
            },
            CarRow::Legacy(row) => match key {
                CarColumn::Brand => CellValue::Text(&row.brand),
                CarColumn::Model => CellValue::Text(&row.model),
                CarColumn::Price => stat(row.price_otr),
                CarColumn::Feature => stat(row.score_feature),
                CarColumn::Safety => stat(row.score_safety),
                CarColumn::Performance => stat(row.score_performance),
                CarColumn::Popularity => stat(row.score_popularity),
                CarColumn::Value => stat(row.score_value),
                _ => CellValue::Missing,
            },
        }
    }
}

fn stat(value: Option<f64>) -> CellValue<'static> {
    match value {
        Some(n) => CellValue::Number(n),
        None => CellValue::Missing,
    }
}

/// Descriptor set for the brand table matching the decoded schema. Text
/// columns start ascending, magnitudes descending — declared here, never
/// inferred by the engine.
pub fn brand_columns(extended: bool) -> Vec<Column<BrandColumn>> {
    use BrandColumn::*;
    use SortDirection::{Ascending, Descending};

    if extended {
        vec![
            Column::new(Brand, "Brand", Align::Left, Ascending),
            Column::new(AvgPrice, "Avg Price", Align::Right, Descending),
            Column::new(Performance, "Perf", Align::Right, Descending),
            Column::new(Efficiency, "Efficiency", Align::Right, Descending),
            Column::new(Safety, "Safety", Align::Right, Descending),
            Column::new(Comfort, "Comfort", Align::Right, Descending),
            Column::new(Tech, "Tech", Align::Right, Descending),
            Column::new(Space, "Space", Align::Right, Descending),
            Column::new(Popularity, "Popularity", Align::Right, Descending),
            Column::new(Sales, "Sales", Align::Right, Descending),
            Column::new(Models, "Models", Align::Right, Descending),
        ]
    } else {
        vec![
            Column::new(Brand, "Brand", Align::Left, Ascending),
            Column::new(AvgPrice, "Avg Price", Align::Right, Descending),
            Column::new(Feature, "Feature", Align::Right, Descending),
            Column::new(Safety, "Safety", Align::Right, Descending),
            Column::new(Performance, "Perf", Align::Right, Descending),
            Column::new(Value, "Value", Align::Right, Descending),
            Column::new(Sales, "Sales", Align::Right, Descending),
        ]
    }
}

/// Descriptor set for the vehicle table matching the decoded schema.
pub fn car_columns(extended: bool) -> Vec<Column<CarColumn>> {
    use CarColumn::*;
    use SortDirection::{Ascending, Descending};

    if extended {
        vec![
            Column::new(Brand, "Brand", Align::Left, Ascending),
            Column::new(Model, "Model", Align::Left, Ascending),
            Column::new(Price, "Harga OTR", Align::Right, Descending),
            Column::new(Performance, "Performance", Align::Right, Descending),
            Column::new(Efficiency, "Efficiency", Align::Right, Descending),
            Column::new(Safety, "Safety", Align::Right, Descending),
            Column::new(Comfort, "Comfort", Align::Right, Descending),
            Column::new(Tech, "Tech", Align::Right, Descending),
            Column::new(Space, "Space", Align::Right, Descending),
            Column::new(Popularity, "Popularity", Align::Right, Descending),
            Column::new(PriceIndex, "Price Idx", Align::Right, Descending),
        ]
    } else {
        vec![
            Column::new(Brand, "Brand", Align::Left, Ascending),
            Column::new(Model, "Model", Align::Left, Ascending),
            Column::new(Price, "Harga OTR", Align::Right, Descending),
            Column::new(Feature, "Feature", Align::Right, Descending),
            Column::new(Safety, "Safety", Align::Right, Descending),
            Column::new(Performance, "Performance", Align::Right, Descending),
            Column::new(Popularity, "Popularity", Align::Right, Descending),
            Column::new(Value, "Value", Align::Right, Descending),
        ]
    }
}
