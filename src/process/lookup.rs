// src/process/lookup.rs
use super::RawTable;

/// Substrings that identify the location column in the feed header. The
/// header text has varied across years ("Lämmitystarveluvut ... (17°Cvrk)"
/// and variants), so the column is discovered, not assumed.
const LOCATION_MARKERS: [&str; 2] = ["Lämmitystarveluvut", "°Cvrk)"];

impl RawTable {
    /// First header, in header order, containing either location marker.
    pub fn location_column(&self) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| LOCATION_MARKERS.iter().any(|marker| h.contains(marker)))
    }

    /// Distinct location names in first-occurrence order. Empty cells are
    /// not locations and are dropped.
    pub fn locations(&self, location_col: usize) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            let Some(name) = row.get(location_col) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            if !seen.iter().any(|s| s == name) {
                seen.push(name.clone());
            }
        }
        seen
    }

    /// First row whose location cell contains `query`. Exact-case
    /// containment is tried over the whole table first; only when that
    /// finds nothing does the case-insensitive pass run, so an exact match
    /// always wins over a folded one.
    pub fn find_location_row(&self, location_col: usize, query: &str) -> Option<usize> {
        if let Some(row) = self.match_row(location_col, |name| name.contains(query)) {
            return Some(row);
        }
        let folded = query.to_lowercase();
        self.match_row(location_col, |name| name.to_lowercase().contains(&folded))
    }

    fn match_row<F>(&self, location_col: usize, pred: F) -> Option<usize>
    where
        F: Fn(&str) -> bool,
    {
        self.rows.iter().position(|row| {
            row.get(location_col)
                .is_some_and(|name| !name.is_empty() && pred(name))
        })
    }
}
