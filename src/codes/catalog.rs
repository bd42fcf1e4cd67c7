//! Game data tables: the code-to-name mappings build codes are
//! decoded against.
//!
//! Loaded once at startup from a JSON file and read-only afterwards,
//! so a single catalog can be shared across concurrent decode calls
//! without locking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::codes::character::Genotype;
use crate::common::error::{DataError, LookupError};

/// Raw table file layout, as serialized in `data/gamedata.json`.
#[derive(Debug, Deserialize)]
struct RawTables {
    genotypes: HashMap<String, String>,
    castes: HashMap<String, String>,
    callings: HashMap<String, String>,
    class_bonuses: HashMap<String, [i32; 6]>,
    class_skills: HashMap<String, Vec<String>>,
    mod_codes: HashMap<String, String>,
    arcology_implants: [String; 3],
    mod_bonuses: HashMap<String, [i32; 6]>,
    /// Variant tables are absent from older game-data exports;
    /// their presence is what enables `#N` variant markers.
    #[serde(default)]
    mutation_variants: Option<HashMap<String, Vec<String>>>,
}

/// Lookup tables mapping build-code tokens to their in-game meaning.
#[derive(Debug)]
pub struct GameDataCatalog {
    genotypes: HashMap<char, Genotype>,
    castes: HashMap<char, String>,
    callings: HashMap<char, String>,
    class_bonuses: HashMap<String, [i32; 6]>,
    class_skills: HashMap<String, Vec<String>>,
    mod_codes: HashMap<String, String>,
    arcology_implants: [String; 3],
    mod_bonuses: HashMap<String, [i32; 6]>,
    mutation_variants: HashMap<String, Vec<String>>,
    variants_supported: bool,
}

impl GameDataCatalog {
    /// Load and validate the tables from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DataError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let raw: RawTables = serde_json::from_str(&text).map_err(|e| DataError::ParseError {
            message: e.to_string(),
        })?;
        Self::from_tables(raw)
    }

    fn from_tables(raw: RawTables) -> Result<Self, DataError> {
        let mut errors = Vec::new();

        let mut genotypes = HashMap::new();
        for (code, name) in &raw.genotypes {
            match (single_char(code), Genotype::from_name(name)) {
                (Some(c), Some(genotype)) => {
                    genotypes.insert(c, genotype);
                }
                (None, _) => errors.push(format!("genotype code '{code}' is not a single letter")),
                (_, None) => errors.push(format!("'{name}' is not a known genotype")),
            }
        }
        if genotypes.len() != 2 {
            errors.push(format!(
                "expected exactly 2 genotype codes, got {}",
                genotypes.len()
            ));
        }

        let castes = letter_table(&raw.castes, "caste", &mut errors);
        let callings = letter_table(&raw.callings, "calling", &mut errors);

        // Every class must have a bonus vector and a skill list.
        for class in castes.values().chain(callings.values()) {
            if !raw.class_bonuses.contains_key(class) {
                errors.push(format!("class '{class}' has no bonus entry"));
            }
            if !raw.class_skills.contains_key(class) {
                errors.push(format!("class '{class}' has no skill list"));
            }
        }

        if !errors.is_empty() {
            return Err(DataError::ValidationError {
                message: errors.join("\n"),
            });
        }

        let variants_supported = raw.mutation_variants.is_some();
        Ok(Self {
            genotypes,
            castes,
            callings,
            class_bonuses: raw.class_bonuses,
            class_skills: raw.class_skills,
            mod_codes: raw.mod_codes,
            arcology_implants: raw.arcology_implants,
            mod_bonuses: raw.mod_bonuses,
            mutation_variants: raw.mutation_variants.unwrap_or_default(),
            variants_supported,
        })
    }

    pub fn genotype(&self, code: char) -> Result<Genotype, LookupError> {
        self.genotypes.get(&code).copied().ok_or(LookupError {
            table: "genotype",
            token: code.to_string(),
        })
    }

    pub fn class_for(&self, genotype: Genotype, code: char) -> Result<&str, LookupError> {
        let (table, name) = match genotype {
            Genotype::TrueKin => ("caste", self.castes.get(&code)),
            Genotype::MutatedHuman => ("calling", self.callings.get(&code)),
        };
        name.map(String::as_str).ok_or(LookupError {
            table,
            token: code.to_string(),
        })
    }

    pub fn class_bonuses(&self, class_name: &str) -> Result<[i32; 6], LookupError> {
        self.class_bonuses
            .get(class_name)
            .copied()
            .ok_or_else(|| LookupError {
                table: "class bonus",
                token: class_name.to_string(),
            })
    }

    pub fn class_skills(&self, class_name: &str) -> Result<&[String], LookupError> {
        self.class_skills
            .get(class_name)
            .map(Vec::as_slice)
            .ok_or_else(|| LookupError {
                table: "class skill",
                token: class_name.to_string(),
            })
    }

    pub fn mod_name(&self, token: &str) -> Result<&str, LookupError> {
        self.mod_codes
            .get(token)
            .map(String::as_str)
            .ok_or_else(|| LookupError {
                table: "mod",
                token: token.to_string(),
            })
    }

    /// The implant behind the polymorphic `16` token, which depends on
    /// which arcology the character's caste letter falls into.
    pub fn arcology_implant(&self, class_code: char) -> Result<&str, LookupError> {
        let index = match class_code {
            'A'..='D' => 0,
            'E'..='H' => 1,
            'I'..='L' => 2,
            _ => {
                return Err(LookupError {
                    table: "arcology",
                    token: class_code.to_string(),
                })
            }
        };
        Ok(&self.arcology_implants[index])
    }

    /// Stat deltas for the mods that perturb attributes, keyed by
    /// display name (modern codes carry names, not tokens).
    pub fn mod_bonuses(&self, name: &str) -> Option<&[i32; 6]> {
        self.mod_bonuses.get(name)
    }

    pub fn variants_for(&self, token: &str) -> Option<&[String]> {
        self.mutation_variants.get(token).map(Vec::as_slice)
    }

    /// Whether this game-data export ships mutation variant tables.
    pub fn supports_variants(&self) -> bool {
        self.variants_supported
    }

    pub fn mod_count(&self) -> usize {
        self.mod_codes.len()
    }

    pub fn class_count(&self) -> usize {
        self.castes.len() + self.callings.len()
    }
}

fn single_char(code: &str) -> Option<char> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn letter_table(
    raw: &HashMap<String, String>,
    table: &str,
    errors: &mut Vec<String>,
) -> HashMap<char, String> {
    let mut out = HashMap::new();
    for (code, name) in raw {
        match single_char(code) {
            Some(c) => {
                out.insert(c, name.clone());
            }
            None => errors.push(format!("{table} code '{code}' is not a single letter")),
        }
    }
    out
}

#[cfg(test)]
impl GameDataCatalog {
    /// Reverse lookup used by the round-trip test encoder.
    pub(crate) fn token_for(&self, name: &str) -> Option<&str> {
        self.mod_codes
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(token, _)| token.as_str())
    }
}

#[cfg(test)]
pub(crate) fn test_catalog() -> GameDataCatalog {
    GameDataCatalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/gamedata.json"))
        .expect("bundled game data should load")
}
