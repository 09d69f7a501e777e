use super::resources::CrudResource;

/// One rendered row: display cells plus the low-stock highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<String>,
    pub flagged: bool,
}

/// How a resource's records become table rows.
pub trait TableView: CrudResource {
    fn columns(&self) -> &'static [&'static str];

    fn cells(&self, record: &Self::Record) -> Vec<String>;

    fn is_flagged(&self, _record: &Self::Record) -> bool {
        false
    }

    fn row(&self, record: &Self::Record) -> TableRow {
        TableRow {
            id: self.record_id(record).to_string(),
            cells: self.cells(record),
            flagged: self.is_flagged(record),
        }
    }
}

/// Whole numbers print without a fraction, like the JS number formatting.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Case-insensitive match of `term` against any cell.
pub fn search<'a>(rows: &'a [TableRow], term: &str) -> Vec<&'a TableRow> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| row.cells.iter().any(|cell| cell.to_lowercase().contains(&needle)))
        .collect()
}
