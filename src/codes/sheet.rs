//! Character sheet rendering.
//!
//! Produces the fixed-width monospace block the bot posts in chat.
//! Pure formatting: a valid [`Character`] always renders.

use crate::codes::character::{BuildEra, Character, STAT_NAMES};

/// Render a character as a printable sheet.
pub fn make_sheet(character: &Character) -> String {
    match character.era {
        BuildEra::Pre202 => legacy_sheet(character),
        BuildEra::Post202 => modern_sheet(character),
    }
}

/// No suffix at zero, `+N` when positive; a negative bonus already
/// carries its minus sign.
fn bonus_suffix(bonus: i32) -> String {
    match bonus {
        0 => String::new(),
        b if b > 0 => format!("+{b}"),
        b => b.to_string(),
    }
}

/// Legacy codes bake bonuses into the attributes, so the sheet shows
/// the attribute with the bonus peeled back out.
fn legacy_sheet(character: &Character) -> String {
    let mut rows = Vec::with_capacity(6);
    for i in 0..6 {
        let label = format!("{}:", STAT_NAMES[i]);
        let shown = character.attrs[i] - character.bonuses[i];
        rows.push(format!(
            "{label:<14}{shown:>2}{}",
            bonus_suffix(character.bonuses[i])
        ));
    }

    let mut sheet = format!(
        "Genotype:  {}\n{:<11}{}",
        character.genotype.display(),
        character.genotype.class_label(),
        character.class_name
    );
    for i in 0..3 {
        sheet.push_str(&format!("\n{:<21}    {}", rows[i], rows[i + 3]));
    }
    sheet.push_str(&format!(
        "\n{:<11}{}",
        character.genotype.ext_label(),
        character.extensions.join(", ")
    ));
    sheet.push_str(&format!("\nSkills:    {}", character.skills.join(", ")));
    sheet
}

/// Modern codes carry extra metadata and store attributes without
/// bonuses; there is no class skill list to surface.
fn modern_sheet(character: &Character) -> String {
    const WIDTHS: [usize; 6] = [11, 11, 11, 14, 14, 14];

    let mut rows = Vec::with_capacity(6);
    for i in 0..6 {
        let label = format!("{}:", STAT_NAMES[i]);
        rows.push(format!(
            "{label:<width$}{:>2}{}",
            character.attrs[i],
            bonus_suffix(character.bonuses[i]),
            width = WIDTHS[i]
        ));
    }

    let mut sheet = match &character.name {
        Some(name) => format!(
            "{name} the {} {}",
            character.genotype.display(),
            character.class_name
        ),
        None => format!(
            "{} {}",
            character.genotype.display(),
            character.class_name
        ),
    };
    for i in 0..3 {
        sheet.push_str(&format!("\n{:<18}{}", rows[i], rows[i + 3]));
    }
    sheet.push_str(&format!(
        "\n{} {}",
        character.genotype.ext_label(),
        character.extensions.join(", ")
    ));
    if let Some(location) = &character.starting_location {
        sheet.push_str(&format!("\nStarting location: {location}"));
    }
    sheet
}
