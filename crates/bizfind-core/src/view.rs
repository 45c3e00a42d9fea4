//! Display rows for the results table.

use crate::business::{format_number, Business};

/// Shown in place of any value the backend did not provide.
pub const PLACEHOLDER: &str = "N/A";

/// Column headings of the results table, in display order.
pub const DISPLAY_COLUMNS: [&str; 6] = ["Name", "Address", "Phone", "Website", "Reviews", "Rating"];

/// One business rendered as text, ready for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub reviews: String,
    pub rating: String,
}

impl DisplayRow {
    #[must_use]
    pub fn cells(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.address.as_str(),
            self.phone.as_str(),
            self.website.as_str(),
            self.reviews.as_str(),
            self.rating.as_str(),
        ]
    }
}

impl From<&Business> for DisplayRow {
    fn from(business: &Business) -> Self {
        Self {
            name: text(business.name.as_deref()),
            address: text(business.address.as_deref()),
            phone: text(business.phone.as_deref()),
            website: text(business.website.as_deref()),
            reviews: business.reviews.map_or_else(placeholder, format_number),
            rating: business.rating.map_or_else(placeholder, format_number),
        }
    }
}

/// Renders every business as a display row, in result order.
#[must_use]
pub fn display_rows(results: &[Business]) -> Vec<DisplayRow> {
    results.iter().map(DisplayRow::from).collect()
}

// Empty strings are as uninformative as missing ones.
fn text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => placeholder(),
    }
}

fn placeholder() -> String {
    PLACEHOLDER.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_placeholder() {
        let row = DisplayRow::from(&Business::named("Cafe X"));
        assert_eq!(row.name, "Cafe X");
        assert_eq!(row.address, PLACEHOLDER);
        assert_eq!(row.website, PLACEHOLDER);
        assert_eq!(row.reviews, PLACEHOLDER);
        assert_eq!(row.rating, PLACEHOLDER);
    }

    #[test]
    fn empty_strings_use_placeholder() {
        let row = DisplayRow::from(&Business {
            website: Some(String::new()),
            phone: Some("  ".to_owned()),
            ..Business::default()
        });
        assert_eq!(row.website, PLACEHOLDER);
        assert_eq!(row.phone, PLACEHOLDER);
    }

    #[test]
    fn numbers_render_like_export() {
        let row = DisplayRow::from(&Business {
            reviews: Some(50.0),
            rating: Some(4.0),
            ..Business::default()
        });
        assert_eq!(row.reviews, "50");
        assert_eq!(row.rating, "4");
    }

    #[test]
    fn rows_follow_result_order() {
        let rows = display_rows(&[Business::named("B"), Business::named("A")]);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(rows[0].cells().len(), DISPLAY_COLUMNS.len());
    }
}
