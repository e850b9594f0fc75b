//! The displayed subset of a Scryfall card object and its text rendering.

use {
    serde::Deserialize,
    crate::mana::format_mana_cost
};

pub const UNKNOWN_MANA_COST: &str = "((Unknown mana cost))";
pub const UNKNOWN_ORACLE_TEXT: &str = "((Unknown oracle text))";

fn unknown_mana_cost() -> String { UNKNOWN_MANA_COST.to_owned() }
fn unknown_oracle_text() -> String { UNKNOWN_ORACLE_TEXT.to_owned() }

/// The part of a Scryfall card object this crate displays. Everything else in the object is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub name: String,
    #[serde(default = "unknown_mana_cost")]
    pub mana_cost: String,
    #[serde(default = "unknown_oracle_text")]
    pub oracle_text: String,
    pub power: Option<String>,
    pub toughness: Option<String>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub colored: bool
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions { colored: true }
    }
}

impl Card {
    /// Renders the name and mana cost, the oracle text, and the power/toughness line if the card has both.
    pub fn render(&self, options: RenderOptions) -> String {
        let mut text = format!("{} - {}\n{}\n", self.name, format_mana_cost(&self.mana_cost, options.colored), self.oracle_text);
        if let (Some(pow), Some(tou)) = (&self.power, &self.toughness) {
            text.push_str(&format!("{}/{}", pow, tou));
        }
        text.trim().to_owned()
    }
}
