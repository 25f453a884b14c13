// src/process/mod.rs
use csv::ReaderBuilder;

pub mod lookup;
pub mod months;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names, from the header row of the yearly CSV file.
    pub headers: Vec<String>,
    /// Each data row, as a Vec of Strings (one per field), in file order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse CSV text in header-row mode. The first line defines the column
    /// names; blank records are skipped. Ragged rows are kept as-is, so a
    /// missing trailing cell reads back as an absent value.
    pub fn parse(text: &str) -> Result<Self, csv::Error> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of `header` in the header row, if present.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cell at (`row`, `header`). `None` when the column does not exist or
    /// the row is too short to carry it; an empty string is a present cell.
    pub fn value(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.column_index(header)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}
