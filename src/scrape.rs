//! HTML field extraction
//!
//! The lookup sites publish no API, so values are read out of their table
//! cells by position. Each site adapter describes its page with a
//! [`CellLayout`] that maps semantic labels to cell indices, which keeps the
//! positional coupling in one place per site and turns a layout change into
//! a named [`CurrentTempError::Extraction`] instead of a silent misread.

use crate::{CurrentTempError, Result};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use tracing::debug;

/// Label to `td` index mapping for one site
#[derive(Debug, Clone, Copy)]
pub struct CellLayout {
    /// Site name used in errors and logs
    pub site: &'static str,
    /// `(label, index)` pairs into the document's `td` elements, in document order
    pub fields: &'static [(&'static str, usize)],
}

/// Field values read from a page through a [`CellLayout`]
#[derive(Debug, Clone)]
pub struct ScrapedFields {
    site: &'static str,
    values: HashMap<&'static str, String>,
}

impl ScrapedFields {
    /// Value of `label`; an error if the layout never declared it
    pub fn get(&self, label: &'static str) -> Result<&str> {
        self.values.get(label).map(String::as_str).ok_or_else(|| {
            CurrentTempError::extraction(self.site, label, "field is not part of the site layout")
        })
    }
}

fn parse_selector(site: &'static str, field: &'static str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| {
        CurrentTempError::extraction(site, field, format!("invalid selector '{css}': {e}"))
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Text of every `td` element in document order
pub fn table_cells(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    // "td" is a constant, valid selector
    let Ok(selector) = Selector::parse("td") else {
        return Vec::new();
    };

    document.select(&selector).map(element_text).collect()
}

/// Read every field of `layout` from `html`.
///
/// Values are trimmed of surrounding whitespace. A page with fewer cells
/// than a field's index fails with an extraction error naming that field.
pub fn extract_cells(html: &str, layout: &CellLayout) -> Result<ScrapedFields> {
    let cells = table_cells(html);
    debug!(site = layout.site, "Found {} table cells", cells.len());

    let mut values = HashMap::with_capacity(layout.fields.len());
    for &(label, index) in layout.fields {
        let value = cells.get(index).ok_or_else(|| {
            CurrentTempError::extraction(
                layout.site,
                label,
                format!(
                    "no table cell at index {index} (page has {} cells)",
                    cells.len()
                ),
            )
        })?;

        debug!(site = layout.site, label, index, value = %value.trim(), "Extracted cell");
        values.insert(label, value.trim().to_string());
    }

    Ok(ScrapedFields {
        site: layout.site,
        values,
    })
}

/// Trimmed text of the first element matching `css`
pub fn first_match_text(
    html: &str,
    css: &str,
    site: &'static str,
    field: &'static str,
) -> Result<String> {
    let selector = parse_selector(site, field, css)?;
    let document = Html::parse_document(html);

    let text = document
        .select(&selector)
        .next()
        .map(|element| element_text(element).trim().to_string());

    text.ok_or_else(|| {
        CurrentTempError::extraction(site, field, format!("no element matches '{css}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: CellLayout = CellLayout {
        site: "test",
        fields: &[("first", 0), ("third", 2)],
    };

    #[test]
    fn test_table_cells_in_document_order() {
        let html = "<table><tr><td>a</td><td> b </td></tr><tr><td>c<b>d</b></td></tr></table>";
        assert_eq!(table_cells(html), vec!["a", " b ", "cd"]);
    }

    #[test]
    fn test_table_cells_of_empty_document() {
        assert!(table_cells("").is_empty());
    }

    #[test]
    fn test_extract_cells_by_label() {
        let html = "<table><tr><td>one</td><td>two</td><td>\n three \n</td></tr></table>";
        let fields = extract_cells(html, &LAYOUT).unwrap();
        assert_eq!(fields.get("first").unwrap(), "one");
        assert_eq!(fields.get("third").unwrap(), "three");
    }

    #[test]
    fn test_extract_cells_missing_index_names_field() {
        let html = "<table><tr><td>one</td><td>two</td></tr></table>";
        let err = extract_cells(html, &LAYOUT).unwrap_err();
        match err {
            CurrentTempError::Extraction { site, field, message } => {
                assert_eq!(site, "test");
                assert_eq!(field, "third");
                assert!(message.contains("index 2"));
                assert!(message.contains("2 cells"));
            }
            other => panic!("expected extraction error, got {other:?}"),
        }
    }

    #[test]
    fn test_undeclared_label_is_an_error() {
        let html = "<table><tr><td>one</td><td>two</td><td>three</td></tr></table>";
        let fields = extract_cells(html, &LAYOUT).unwrap();
        assert!(fields.get("second").is_err());
    }

    #[test]
    fn test_first_match_text() {
        let html = r#"<p class="big">75&deg;F</p><p class="big">80&deg;F</p>"#;
        assert_eq!(first_match_text(html, ".big", "test", "temp").unwrap(), "75°F");
    }

    #[test]
    fn test_first_match_missing() {
        let err = first_match_text("<p>nothing</p>", ".big", "test", "temp").unwrap_err();
        assert!(matches!(err, CurrentTempError::Extraction { field: "temp", .. }));
    }

    #[test]
    fn test_invalid_selector() {
        let err = first_match_text("<p></p>", "..", "test", "temp").unwrap_err();
        assert!(err.to_string().contains("invalid selector"));
    }
}
