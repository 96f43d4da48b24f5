//! World page parsing

use super::html::{decode_html_entities, extract_meta_content};
use super::symbols::normalize_symbols;
use crate::types::{FetchError, WorldSnapshot};

const TITLE_SEPARATOR: &str = " by ";

/// Split an `og:title` of the form `<world> by <author>`.
///
/// Splits at the first separator. The author part starts one byte past the
/// separator's position, so it keeps the `by ` prefix:
/// `"Neon Club by Jane"` gives `("Neon Club", "by Jane")`.
pub fn split_title(title: &str) -> Option<(&str, &str)> {
    let index = title.find(TITLE_SEPARATOR)?;
    Some((&title[..index], &title[index + 1..]))
}

/// Build a snapshot from a world page's HTML
pub fn parse_world_page(id: &str, html: &str) -> Result<WorldSnapshot, FetchError> {
    let title = extract_meta_content(html, "og:title")
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    if title.is_empty() {
        return Err(FetchError::MissingTitle);
    }

    let (world, author) =
        split_title(&title).ok_or_else(|| FetchError::TitleFormat(title.clone()))?;

    let image_url = extract_meta_content(html, "og:image")
        .map(|i| i.trim().to_string())
        .unwrap_or_default();

    Ok(WorldSnapshot {
        id: id.to_string(),
        name: normalize_symbols(&decode_html_entities(world)),
        author_name: normalize_symbols(&decode_html_entities(author)),
        image_url,
    })
}
