//! Rendering of mana costs written in Scryfall's `{…}` pip notation.

use ansi_term::Colour;

const NUMERAL_PIPS: [(&str, &str); 9] = [
    ("{1}", "1"),
    ("{2}", "2"),
    ("{3}", "3"),
    ("{4}", "4"),
    ("{5}", "5"),
    ("{6}", "6"),
    ("{7}", "7"),
    ("{8}", "8"),
    ("{9}", "9")
];

/// Color letters in the order they are painted.
const COLOR_PIPS: [(char, Colour); 5] = [
    ('W', Colour::White),
    ('U', Colour::Blue),
    ('R', Colour::Red),
    ('B', Colour::Cyan),
    ('G', Colour::Green)
];

/// Strips the braces from numeral and color pips, then paints every color letter.
///
/// This is a textual substitution: any `W`, `U`, `R`, `B` or `G` left in the string after
/// the braces are gone is painted, whether or not it came from a pip. With `colored` off the
/// painting step leaves the text unchanged.
pub fn format_mana_cost(mana_cost: &str, colored: bool) -> String {
    let mut formatted = mana_cost.to_owned();
    for &(pip, numeral) in &NUMERAL_PIPS {
        formatted = formatted.replace(pip, numeral);
    }
    for &(letter, _) in &COLOR_PIPS {
        formatted = formatted.replace(&format!("{{{}}}", letter), &letter.to_string());
    }
    if colored {
        for &(letter, colour) in &COLOR_PIPS {
            formatted = formatted.replace(letter, &colour.paint(letter.to_string()).to_string());
        }
    }
    formatted
}
