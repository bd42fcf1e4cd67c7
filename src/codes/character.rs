//! The decoded player character and its supporting vocabulary.

/// Attribute names in game order. Every 6-element stat vector in the
/// crate follows this order.
pub const STAT_NAMES: [&str; 6] = [
    "Strength",
    "Agility",
    "Toughness",
    "Intelligence",
    "Willpower",
    "Ego",
];

/// Index of Toughness in the fixed stat order.
pub const TOUGHNESS: usize = 2;

/// Top-level character lineage. The game has exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genotype {
    TrueKin,
    MutatedHuman,
}

impl Genotype {
    /// Parse a genotype display name as it appears in game data and
    /// in modern build payloads.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "True Kin" => Some(Self::TrueKin),
            "Mutated Human" => Some(Self::MutatedHuman),
            _ => None,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Self::TrueKin => "True Kin",
            Self::MutatedHuman => "Mutated Human",
        }
    }

    /// The class system label: True Kin have castes, mutants callings.
    pub fn class_label(&self) -> &'static str {
        match self {
            Self::TrueKin => "Caste:",
            Self::MutatedHuman => "Calling:",
        }
    }

    /// Label for the mutation/implant list on the character sheet.
    pub fn ext_label(&self) -> &'static str {
        match self {
            Self::TrueKin => "Implants:",
            Self::MutatedHuman => "Mutations:",
        }
    }

    /// Starting value of every attribute before points are spent.
    pub fn attribute_base(&self) -> i32 {
        match self {
            Self::TrueKin => 12,
            Self::MutatedHuman => 10,
        }
    }

    /// Attribute points granted at character creation.
    pub fn point_budget(&self) -> i32 {
        match self {
            Self::TrueKin => 38,
            Self::MutatedHuman => 44,
        }
    }
}

/// Which generation of build code a character was decoded from.
///
/// The build-code format changed at game version 2.0.202: older codes
/// are fixed-width letter strings with class bonuses baked into the
/// encoded attributes, newer ones are gzipped JSON with attributes
/// stored as purchased points only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEra {
    Pre202,
    Post202,
}

/// A fully decoded player character. Immutable once constructed;
/// decoding the same code twice yields identical values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub era: BuildEra,
    pub genotype: Genotype,
    pub class_name: String,
    /// Attribute values in game order. For [`BuildEra::Pre202`] these
    /// include the bonuses (the sheet subtracts them for display);
    /// for [`BuildEra::Post202`] they are base plus purchased points.
    pub attrs: [i32; 6],
    /// Per-stat bonuses from class and mods, in game order.
    pub bonuses: [i32; 6],
    /// Mutations or implants, in the order they appear in the code.
    pub extensions: Vec<String>,
    /// Class skills. Not encoded in the code; empty for modern codes,
    /// which do not surface a class-exclusive skill list.
    pub skills: Vec<String>,
    // Cosmetic metadata, only present in modern codes.
    pub name: Option<String>,
    pub pet: Option<String>,
    pub gender: Option<String>,
    pub pronoun_set: Option<String>,
    pub starting_location: Option<String>,
}
