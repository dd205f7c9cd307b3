pub(crate) mod career;
pub(crate) mod leaders;

use ::scraper::ElementRef;

/// Extract trimmed text from a table cell.
pub(crate) fn cell_text(el: &ElementRef) -> String {
    el.text()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("")
}
