//! Plain-text rendering used by `--once`.

use std::fmt::Write;

use super::lists::failure_line;
use super::HEADING;
use crate::models::CatalogRecord;
use crate::view_state::{CatalogView, Resource};

/// Render the view as plain text, one list entry per line.
///
/// Lists that failed render their fallback line instead of entries.
pub fn render_plain(view: &CatalogView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", HEADING);
    write_section(&mut out, "Categories", "categories", &view.categories);
    write_section(&mut out, "Items", "items", &view.items);
    out
}

fn write_section<T: CatalogRecord>(
    out: &mut String,
    title: &str,
    resource_name: &str,
    resource: &Resource<Vec<T>>,
) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    match resource {
        Resource::Loading => {
            let _ = writeln!(out, "  loading…");
        }
        Resource::Failed(err) => {
            let _ = writeln!(out, "  {}", failure_line(resource_name, err));
        }
        Resource::Loaded(records) => {
            for record in records {
                let _ = writeln!(out, "  - {}", record.label());
            }
        }
    }
}
