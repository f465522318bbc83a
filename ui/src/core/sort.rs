//! Generic column sorting for the dashboard tables.
//!
//! Rows expose typed cells through [`TableRow`], so the engine only ever
//! sees a key and a [`CellValue`] — never a concrete row shape. Both table
//! schemas (the scored legacy rows and the indexed extended rows) share this
//! one implementation; their column descriptors absorb the difference.

use std::cmp::Ordering;

/// A single cell as seen by the sort engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
    Missing,
}

impl CellValue<'_> {
    /// Numeric coercion applied when a comparison is not text-vs-text.
    /// Missing cells and non-numeric text read as zero; source data quality
    /// is not guaranteed, so sorting must not fail on a dirty row.
    pub fn as_f64(self) -> f64 {
        match self {
            CellValue::Number(n) if n.is_finite() => n,
            CellValue::Number(_) => 0.0,
            CellValue::Text(s) => s.trim().parse().unwrap_or(0.0),
            CellValue::Missing => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Horizontal alignment of a column, declared per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Column descriptor consumed (not owned) by the engine. Each view declares
/// its own set, including the direction a freshly selected column starts in:
/// ascending for identifier-like text columns, descending for magnitudes.
#[derive(Debug, Clone)]
pub struct Column<K> {
    pub key: K,
    pub label: String,
    pub align: Align,
    pub default_direction: SortDirection,
}

impl<K> Column<K> {
    pub fn new(
        key: K,
        label: impl Into<String>,
        align: Align,
        default_direction: SortDirection,
    ) -> Self {
        Self {
            key,
            label: label.into(),
            align,
            default_direction,
        }
    }
}

/// Active sort key and direction for one table. Initialized to a
/// view-specific default and mutated only by explicit sort requests; never
/// persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: PartialEq + Copy> SortState<K> {
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Re-selecting the active column flips the direction; selecting a new
    /// column adopts that column's declared default.
    pub fn toggle(&mut self, key: K, default_direction: SortDirection) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = default_direction;
        }
    }
}

/// Typed cell access keyed by an enumerated column identifier.
pub trait TableRow {
    type Key: Copy;

    fn cell(&self, key: Self::Key) -> CellValue<'_>;
}

/// Compare two cells: text pairs collate case- and diacritic-insensitively,
/// anything else compares numerically by signed difference.
pub fn compare_cells(a: CellValue<'_>, b: CellValue<'_>) -> Ordering {
    match (a, b) {
        (CellValue::Text(a), CellValue::Text(b)) => collate(a, b),
        _ => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
    }
}

/// Produce a new ordering of `rows` by the given column; the input is never
/// mutated. The sort is stable, so rows with equal keys keep their original
/// relative order and toggling the direction twice restores it.
pub fn sorted_by_column<R>(rows: &[R], key: R::Key, direction: SortDirection) -> Vec<R>
where
    R: TableRow + Clone,
{
    let mut ordered = rows.to_vec();
    ordered.sort_by(|a, b| {
        let ord = compare_cells(a.cell(key), b.cell(key));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    ordered
}

/// Locale-style string comparison: primary pass over folded characters,
/// falling back to a codepoint comparison so case-only differences still
/// order deterministically.
fn collate(a: &str, b: &str) -> Ordering {
    let primary = a.chars().map(fold_char).cmp(b.chars().map(fold_char));
    if primary != Ordering::Equal {
        return primary;
    }
    a.cmp(b)
}

/// Primary collation key for one character: lowercase with the Latin
/// diacritics that appear in brand and model names folded to their base
/// letter (Škoda sorts with the S entries, Citroën with the C entries).
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        'š' | 'Š' => 's',
        'ž' | 'Ž' => 'z',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}
