use crate::dataset::AnimalRecord;

const NAME_FALLBACK: &str = "Name not found";
const SKIN_FALLBACK: &str = "Skin Type not found";
const DIET_FALLBACK: &str = "Diet not found";
const LIFESPAN_FALLBACK: &str = "Lifespan not found";
const LOCATION_FALLBACK: &str = "Location not found";

/// Render every record into one concatenated fragment, in input order.
pub fn render_cards(animals: &[AnimalRecord]) -> String {
    animals.iter().map(render_card).collect()
}

/// One record → one `<li class="cards__item">` fragment.
///
/// Missing name/skin/diet/lifespan/locations get fixed fallback text; the
/// Type and Top Speed entries are omitted entirely when absent. Field
/// values are trusted as-is, no HTML escaping.
pub fn render_card(animal: &AnimalRecord) -> String {
    let c = &animal.characteristics;
    let locations = match &animal.locations {
        Some(locations) => locations.join(", "),
        None => LOCATION_FALLBACK.to_string(),
    };

    let mut card = String::new();
    card.push_str("<li class=\"cards__item\">\n");
    card.push_str(&format!(
        "<div class=\"card__title\">{}</div>\n",
        animal.name.as_deref().unwrap_or(NAME_FALLBACK)
    ));
    card.push_str("<div class=\"card__text\"><ul>\n");
    push_entry(&mut card, "Skin Type", c.skin_type.as_deref().unwrap_or(SKIN_FALLBACK));
    push_entry(&mut card, "Diet", c.diet.as_deref().unwrap_or(DIET_FALLBACK));
    if let Some(kind) = c.kind.as_deref() {
        push_entry(&mut card, "Type", &capitalize(kind));
    }
    push_entry(&mut card, "Location(s)", &locations);
    push_entry(&mut card, "Lifespan", c.lifespan.as_deref().unwrap_or(LIFESPAN_FALLBACK));
    if let Some(top_speed) = c.top_speed.as_deref() {
        push_entry(&mut card, "Top Speed", top_speed);
    }
    card.push_str("</ul>\n</div>\n</li>\n");
    card
}

fn push_entry(card: &mut String, label: &str, value: &str) {
    card.push_str(&format!("<li><strong>{}:</strong> {}</li>\n", label, value));
}

/// First character uppercased, the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ── Tests ──
