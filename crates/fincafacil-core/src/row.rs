use std::collections::BTreeMap;

/// A spreadsheet-shaped cell value: text, a number, or blank.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
    Empty,
}

impl RawValue {
    /// Classify a raw cell. Cells that parse as plain numbers come back
    /// typed so integral spreadsheet values do not pick up a `.0` suffix.
    pub fn from_cell(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.is_empty() {
            return Self::Empty;
        }
        if let Ok(number) = cell.parse::<f64>() {
            if number.is_finite() {
                return Self::Number(number);
            }
        }
        Self::Text(cell.to_string())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Render the cell as trimmed text, or `None` when blank. Integral
    /// numbers render without a fractional part.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                }
            }
            Self::Number(number) => {
                if number.fract() == 0.0 && number.abs() < 1e15 {
                    Some(format!("{}", *number as i64))
                } else {
                    Some(number.to_string())
                }
            }
        }
    }
}

/// One raw input row, keyed by normalized (lower-cased, trimmed) column
/// header. The engine does not care whether the underlying source was a
/// spreadsheet, a CSV file, or a UI form.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    cells: BTreeMap<String, RawValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from header/text pairs. Empty strings become blank cells.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut row = Self::new();
        for (header, value) in pairs {
            row.set(header, RawValue::from_cell(value));
        }
        row
    }

    pub fn set(&mut self, header: &str, value: RawValue) {
        self.cells.insert(header.trim().to_lowercase(), value);
    }

    /// Non-blank trimmed text for a field, or `None` when absent or empty.
    pub fn get(&self, field: &str) -> Option<String> {
        self.cells.get(field).and_then(RawValue::as_text)
    }

    /// True when every cell in the row is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(RawValue::is_empty)
    }
}
