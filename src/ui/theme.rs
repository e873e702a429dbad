// MailTriage - ui/theme.rs
//
// Colour scheme, badge colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::validate::TextValidity;
use crate::util::constants::{CHAR_COUNT_ALERT, CHAR_COUNT_WARN};
use crate::util::error::ErrorKind;
use egui::Color32;

/// Badge foreground and background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColours {
    pub fg: Color32,
    pub bg: Color32,
}

const GREEN: Color32 = Color32::from_rgb(34, 197, 94); // Green 500
const AMBER: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600
const RED: Color32 = Color32::from_rgb(220, 38, 38); // Red 600
const BLUE: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500
const GRAY: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

fn badge(colour: Color32) -> BadgeColours {
    BadgeColours {
        fg: colour,
        bg: Color32::from_rgba_unmultiplied(colour.r(), colour.g(), colour.b(), 40),
    }
}

/// Colours for a category badge, keyed on its class string
/// (`category-badge <category>`).
pub fn category_colours(class: &str) -> BadgeColours {
    let category = class.strip_prefix("category-badge ").unwrap_or(class);
    match category {
        "produtivo" => badge(GREEN),
        "improdutivo" => badge(GRAY),
        _ => badge(BLUE),
    }
}

/// Colours for a priority badge, keyed on its class string
/// (`priority-<priority>`). Accented and plain spellings both map.
pub fn priority_colours(class: &str) -> BadgeColours {
    match class {
        "priority-alta" | "priority-high" => badge(RED),
        "priority-média" | "priority-media" | "priority-medium" => badge(AMBER),
        "priority-baixa" | "priority-low" => badge(GREEN),
        _ => badge(GRAY),
    }
}

/// Character counter colour: green, amber above 2000, red above 5000.
pub fn char_count_colour(count: usize) -> Color32 {
    if count > CHAR_COUNT_ALERT {
        Color32::from_rgb(231, 76, 60)
    } else if count > CHAR_COUNT_WARN {
        Color32::from_rgb(243, 156, 18)
    } else {
        Color32::from_rgb(39, 174, 96)
    }
}

/// Text box border while typing.
pub fn text_border_colour(validity: TextValidity) -> Color32 {
    match validity {
        TextValidity::Empty => Color32::from_rgb(233, 236, 239),
        TextValidity::Valid => Color32::from_rgb(40, 167, 69),
        TextValidity::Invalid => Color32::from_rgb(220, 53, 69),
    }
}

/// Error banner background.
pub fn banner_colour(kind: ErrorKind) -> Color32 {
    match kind {
        ErrorKind::Network => Color32::from_rgb(180, 83, 9), // Amber 700
        _ => Color32::from_rgb(238, 90, 82),
    }
}

pub const BANNER_TEXT: Color32 = Color32::WHITE;

/// Copy control background while the "copied" glyph is shown.
pub const COPY_OK_BG: Color32 = Color32::from_rgba_premultiplied(40, 167, 69, 77);

/// Layout constants.
pub const CONTENT_MAX_WIDTH: f32 = 760.0;
pub const TEXT_ROWS: usize = 12;
pub const DROP_AREA_HEIGHT: f32 = 120.0;
pub const SECTION_SPACING: f32 = 12.0;
