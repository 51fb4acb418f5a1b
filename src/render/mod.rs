pub mod card;
pub mod page;

use crate::dataset::AnimalRecord;

/// Two-step pipeline: records → card fragments → injected page text.
pub fn render_page(animals: &[AnimalRecord], template: &str) -> String {
    let cards = card::render_cards(animals);
    page::inject(template, &cards)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const TEMPLATE: &str = "<html><ul class=\"cards\">__REPLACE_ANIMALS_INFO__</ul></html>";

    #[test]
    fn lion_dataset_renders_one_card_with_fallback_location() {
        let animals =
            crate::dataset::load_dataset(Path::new("tests/fixtures/lion_only.json")).unwrap();
        let html = render_page(&animals, TEMPLATE);

        assert_eq!(html.matches("cards__item").count(), 1);
        assert!(html.contains("Lion"));
        assert!(html.contains("<li><strong>Skin Type:</strong> Fur</li>"));
        assert!(html.contains("<li><strong>Diet:</strong> Carnivore</li>"));
        assert!(html.contains("<li><strong>Lifespan:</strong> 12 years</li>"));
        assert!(html.contains("Location not found"));
        assert!(!html.contains("<strong>Type:</strong>"));
        assert!(!html.contains("<strong>Top Speed:</strong>"));
        assert!(html.starts_with("<html>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn empty_selection_yields_empty_card_list() {
        let html = render_page(&[], TEMPLATE);
        assert_eq!(html, "<html><ul class=\"cards\"></ul></html>");
    }

    #[test]
    fn not_found_message_injects_like_cards_do() {
        let message = crate::fetcher::not_found_message("Zzyx");
        let html = page::inject(TEMPLATE, &message);
        assert!(html.contains("The animal 'Zzyx' doesn't exist"));
        assert!(!html.contains(page::PLACEHOLDER));
    }
}
