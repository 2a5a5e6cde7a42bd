//! Locate the screenshot image in a Lightshot page.

use crate::error::ExtractionError;
use scraper::{Html, Selector};

/// `id` of the `<img>` the screenshot viewer renders.
pub const SCREENSHOT_ELEMENT_ID: &str = "screenshot-image";

/// Returns the `src` of the `#screenshot-image` element exactly as written.
/// Relative sources are not resolved.
pub fn extract_image_source(html: &str) -> Result<String, ExtractionError> {
    let Ok(selector) = Selector::parse(&format!("#{SCREENSHOT_ELEMENT_ID}")) else {
        return Err(ExtractionError::MissingElement(SCREENSHOT_ELEMENT_ID));
    };
    let document = Html::parse_document(html);
    let element = document
        .select(&selector)
        .next()
        .ok_or(ExtractionError::MissingElement(SCREENSHOT_ELEMENT_ID))?;

    element
        .value()
        .attr("src")
        .map(str::to_string)
        .ok_or(ExtractionError::MissingSource)
}
