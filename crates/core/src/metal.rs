//! Metal-color classification for the two-tone feature.
//!
//! Two-tone rendering paints the head white-gold and the shank in the
//! selected color. It is only offered for gold-family colors, detected by
//! substring matching on the color's names plus a small set of known hex
//! values. Classification is pure: it reads nothing but the color record.

use crate::catalog::MetalColor;

/// Hex value recognized as white gold, and the head color used by
/// two-tone when the catalog has no explicit white-gold entry.
pub const WHITE_GOLD_HEX: &str = "#c2c2c3";
/// Hex value recognized as yellow gold.
pub const YELLOW_GOLD_HEX: &str = "#e5b477";
/// Hex value recognized as rose gold.
pub const ROSE_GOLD_HEX: &str = "#f2af83";

/// Lowercased slug form of the color's primary name: whitespace and
/// hyphen runs collapse to `_`.
fn normalized_key(color: &MetalColor) -> String {
    let raw = if color.internal_name.is_empty() {
        &color.display_name
    } else {
        &color.internal_name
    };
    let mut key = String::with_capacity(raw.len());
    let mut prev_sep = false;
    for ch in raw.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !prev_sep {
                key.push('_');
                prev_sep = true;
            }
        } else {
            key.push(ch);
            prev_sep = false;
        }
    }
    key
}

/// Both names joined for loose substring matching.
fn search_text(color: &MetalColor) -> String {
    let mut text = String::new();
    for part in [&color.internal_name, &color.display_name] {
        if part.is_empty() {
            continue;
        }
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(part);
    }
    text.to_lowercase()
}

/// Whether the color reads as white gold: "white" in either name, or the
/// known white-gold hex.
pub fn is_white_like(color: &MetalColor) -> bool {
    let hex = color.hex_color.to_lowercase();
    normalized_key(color).contains("white")
        || search_text(color).contains("white")
        || hex == WHITE_GOLD_HEX
}

/// Whether a color may be rendered two-tone.
///
/// White-like colors are never eligible, even when they also match a
/// yellow or rose pattern; otherwise the color must read as yellow or
/// rose gold by name substring or known hex.
pub fn eligible_for_two_tone(color: &MetalColor) -> bool {
    if is_white_like(color) {
        return false;
    }
    let key = normalized_key(color);
    let text = search_text(color);
    let hex = color.hex_color.to_lowercase();
    key.contains("yellow")
        || key.contains("rose")
        || text.contains("yellow")
        || text.contains("rose")
        || hex == YELLOW_GOLD_HEX
        || hex == ROSE_GOLD_HEX
}

/// The hex painted onto the head in two-tone mode: the first catalog
/// color whose display name mentions "white", else [`WHITE_GOLD_HEX`].
pub fn white_gold_hex(colors: &[MetalColor]) -> &str {
    colors
        .iter()
        .find(|c| c.display_name.to_lowercase().contains("white"))
        .map(|c| c.hex_color.as_str())
        .unwrap_or(WHITE_GOLD_HEX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn color(internal: &str, display: &str, hex: &str) -> MetalColor {
        MetalColor {
            id: 1,
            internal_name: internal.into(),
            display_name: display.into(),
            hex_color: hex.into(),
            active: true,
        }
    }

    // -- eligible_for_two_tone --

    #[test]
    fn yellow_gold_is_eligible() {
        assert!(eligible_for_two_tone(&color("yellow_gold", "Yellow Gold", "#e5b377")));
    }

    #[test]
    fn rose_gold_is_eligible_with_hyphenated_name() {
        assert!(eligible_for_two_tone(&color("rose-gold", "Rosé", "#123456")));
    }

    #[test]
    fn known_hex_alone_is_enough() {
        assert!(eligible_for_two_tone(&color("sunset", "Sunset", "#E5B477")));
        assert!(eligible_for_two_tone(&color("blush", "Blush", "#f2af83")));
    }

    #[test]
    fn white_gold_is_never_eligible() {
        assert!(!eligible_for_two_tone(&color("white_gold", "White Gold", "#c2c2c3")));
        // White-likeness wins even over a yellow match.
        assert!(!eligible_for_two_tone(&color(
            "white_yellow_gold",
            "White & Yellow Gold",
            "#e5b477"
        )));
        // Hex alone marks a color white-like regardless of its names.
        assert!(!eligible_for_two_tone(&color("frost", "Frost", "#C2C2C3")));
    }

    #[test]
    fn unrelated_colors_are_not_eligible() {
        assert!(!eligible_for_two_tone(&color("platinum", "Platinum", "#d6d6d6")));
    }

    // -- white_gold_hex --

    #[test]
    fn white_gold_hex_uses_catalog_entry_when_present() {
        let colors = vec![
            color("yellow_gold", "Yellow Gold", "#e5b377"),
            color("white_gold", "White Gold", "#cccccd"),
        ];
        assert_eq!(white_gold_hex(&colors), "#cccccd");
    }

    #[test]
    fn white_gold_hex_falls_back_to_constant() {
        let colors = vec![color("yellow_gold", "Yellow Gold", "#e5b377")];
        assert_eq!(white_gold_hex(&colors), WHITE_GOLD_HEX);
    }
}
