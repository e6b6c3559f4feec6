use std::collections::HashMap;

use ratatui::style::Color;

use crate::models::{Family, Tint};

/// Family to display colour lookup. Built once at startup and owned by the
/// app; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Palette {
    families: HashMap<Family, Color>,
    fallback: Color,
}

impl Palette {
    pub fn new(families: HashMap<Family, Color>) -> Self {
        Self {
            families,
            fallback: Color::Gray,
        }
    }

    pub fn family(&self, family: Family) -> Color {
        self.families.get(&family).copied().unwrap_or(self.fallback)
    }

    /// Badge colour for halogens, which are a column rather than a family.
    pub fn halogen(&self) -> Color {
        Color::Yellow
    }

    /// Text colour that stays readable on top of a family tile.
    pub fn text_on(&self, family: Family) -> Color {
        match family {
            Family::Actinide | Family::Nonmetal => Color::Black,
            _ => Color::White,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let families = HashMap::from([
            (Family::Nonmetal, Color::Rgb(255, 149, 0)),
            (Family::AlkaliMetal, Color::Rgb(255, 59, 48)),
            (Family::AlkalineEarthMetal, Color::Rgb(255, 45, 85)),
            (Family::TransitionMetal, Color::Rgb(0, 122, 255)),
            (Family::PostTransitionMetal, Color::Rgb(66, 135, 245)),
            (Family::NobleGas, Color::Rgb(175, 82, 222)),
            (Family::Metalloid, Color::Rgb(40, 40, 40)),
            (Family::Radioactive, Color::Rgb(110, 191, 82)),
            (Family::Lanthanide, Color::Rgb(52, 199, 89)),
            (Family::Actinide, Color::Rgb(224, 214, 23)),
        ]);
        Self::new(families)
    }
}

/// Terminal colour for an element's picture tint.
pub fn tint_color(tint: Tint) -> Color {
    Color::Rgb(tint.r, tint.g, tint.b)
}
