use serde::Serialize;

/// A single typed value in an output table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    Real(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Value formatted for terminal output (reals to two decimals)
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Real(r) => format!("{:.2}", r),
        }
    }

    pub fn sql_type(&self) -> &'static str {
        match self {
            Cell::Text(_) => "TEXT",
            Cell::Int(_) => "INTEGER",
            Cell::Real(_) => "REAL",
        }
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Real(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// Headers plus rows of cells; every report converts into one of these
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column types taken from the first row; TEXT when the table is empty
    pub fn column_types(&self) -> Vec<&'static str> {
        match self.rows.first() {
            Some(row) => row.iter().map(Cell::sql_type).collect(),
            None => vec!["TEXT"; self.headers.len()],
        }
    }
}

/// Types that render as a table
pub trait ToTable {
    fn to_table(&self) -> Table;
}
