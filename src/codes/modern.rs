//! Decoder for modern (2.0.202+) build codes.
//!
//! The game client emits these as JSON, gzipped and base64-encoded.
//! Since arbitrary chat text can coincidentally look like base64, a
//! candidate that fails to inflate is simply not a build code; only a
//! payload that inflates but then fails semantically is malformed.

use std::collections::HashMap;
use std::io::Read;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use flate2::read::GzDecoder;
use serde::Deserialize;

use crate::codes::catalog::GameDataCatalog;
use crate::codes::character::{BuildEra, Character, Genotype, STAT_NAMES, TOUGHNESS};
use crate::common::error::DecodeError;

/// Run the base64 -> gzip -> UTF-8 pipeline. `None` means the
/// candidate was not a build code at all.
pub fn inflate(candidate: &str) -> Option<String> {
    let compressed = BASE64.decode(candidate.trim()).ok()?;
    let mut text = String::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_string(&mut text)
        .ok()?;
    Some(text)
}

/// The module types a build payload can carry. Tags outside this set
/// are ignored for forward compatibility with newer game versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModuleKind {
    Genotype,
    Subtype,
    Mutations,
    Cybernetics,
    Attributes,
    Customize,
    StartingLocation,
    Unknown,
}

impl ModuleKind {
    /// Tags look like
    /// `XRL.CharacterBuilds.Qud.QudGenotypeModule, Assembly-CSharp, ...`;
    /// only the last segment of the type name matters.
    fn from_tag(tag: &str) -> Self {
        let type_name = tag.split(',').next().unwrap_or("").trim();
        match type_name.rsplit('.').next().unwrap_or("") {
            "QudGenotypeModule" => Self::Genotype,
            "QudSubtypeModule" => Self::Subtype,
            "QudMutationsModule" => Self::Mutations,
            "QudCyberneticsModule" => Self::Cybernetics,
            "QudAttributesModule" => Self::Attributes,
            "QudCustomizeCharacterModule" => Self::Customize,
            "QudChooseStartingLocationModule" => Self::StartingLocation,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BuildPayload {
    modules: Vec<BuildModule>,
}

#[derive(Debug, Deserialize)]
struct BuildModule {
    #[serde(rename = "moduleType")]
    module_type: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenotypeData {
    #[serde(rename = "Genotype")]
    genotype: String,
}

#[derive(Debug, Deserialize)]
struct SubtypeData {
    #[serde(rename = "Subtype")]
    subtype: String,
}

#[derive(Debug, Deserialize)]
struct SelectionsData {
    selections: Vec<Selection>,
}

#[derive(Debug, Deserialize)]
struct Selection {
    #[serde(rename = "Mutation")]
    mutation: Option<String>,
    #[serde(rename = "Cybernetic")]
    cybernetic: Option<String>,
    #[serde(rename = "Count", default = "one")]
    count: u32,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct AttributesData {
    #[serde(rename = "PointsPurchased")]
    points_purchased: HashMap<String, i32>,
}

#[derive(Debug, Deserialize)]
struct CustomizeData {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    pet: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(rename = "pronounSet", default)]
    pronoun_set: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StartingLocationData {
    #[serde(rename = "StartingLocation")]
    starting_location: String,
}

fn module_data<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(|e| DecodeError::InvalidPayload {
        message: e.to_string(),
    })
}

/// Decode an inflated build payload against the given catalog.
pub fn decode_modern(json_text: &str, catalog: &GameDataCatalog) -> Result<Character, DecodeError> {
    let payload: BuildPayload =
        serde_json::from_str(json_text).map_err(|e| DecodeError::InvalidPayload {
            message: e.to_string(),
        })?;

    let mut genotype = None;
    let mut class_name: Option<String> = None;
    let mut points: Option<HashMap<String, i32>> = None;
    let mut extensions: Vec<String> = Vec::new();
    // Mod contributions are accumulated separately and added to the
    // class baseline at the end, so module order cannot matter.
    let mut mod_bonuses = [0i32; 6];
    let mut name = None;
    let mut pet = None;
    let mut gender = None;
    let mut pronoun_set = None;
    let mut starting_location = None;

    for module in payload.modules {
        let kind = ModuleKind::from_tag(&module.module_type);
        match kind {
            ModuleKind::Genotype => {
                let data: GenotypeData = module_data(module.data)?;
                genotype = Some(Genotype::from_name(&data.genotype).ok_or(
                    DecodeError::UnknownGenotypeName {
                        name: data.genotype,
                    },
                )?);
            }
            ModuleKind::Subtype => {
                let data: SubtypeData = module_data(module.data)?;
                class_name = Some(data.subtype);
            }
            ModuleKind::Mutations | ModuleKind::Cybernetics => {
                let data: SelectionsData = module_data(module.data)?;
                for selection in data.selections {
                    apply_selection(
                        catalog,
                        kind,
                        selection,
                        &mut extensions,
                        &mut mod_bonuses,
                    )?;
                }
            }
            ModuleKind::Attributes => {
                let data: AttributesData = module_data(module.data)?;
                points = Some(data.points_purchased);
            }
            ModuleKind::Customize => {
                let data: CustomizeData = module_data(module.data)?;
                name = data.name;
                pet = data.pet;
                gender = data.gender;
                pronoun_set = data.pronoun_set;
            }
            ModuleKind::StartingLocation => {
                let data: StartingLocationData = module_data(module.data)?;
                starting_location = Some(data.starting_location);
            }
            ModuleKind::Unknown => {}
        }
    }

    let genotype = genotype.ok_or(DecodeError::MissingModule { module: "genotype" })?;
    let class_name = class_name.ok_or(DecodeError::MissingModule { module: "subtype" })?;
    let points = points.ok_or(DecodeError::MissingModule {
        module: "attributes",
    })?;

    let class_bonuses = catalog
        .class_bonuses(&class_name)
        .map_err(|_| DecodeError::UnknownClassName {
            name: class_name.clone(),
        })?;
    let mut bonuses = [0i32; 6];
    for (i, bonus) in bonuses.iter_mut().enumerate() {
        *bonus = class_bonuses[i] + mod_bonuses[i];
    }

    // Purchased points are keyed by stat name; map them into game
    // order rather than trusting payload key order.
    let mut attrs = [genotype.attribute_base(); 6];
    for (stat, purchased) in &points {
        let index = STAT_NAMES
            .iter()
            .position(|s| s == stat)
            .ok_or_else(|| DecodeError::UnknownStat { name: stat.clone() })?;
        attrs[index] += purchased;
    }

    let skills = Vec::new();

    Ok(Character {
        era: BuildEra::Post202,
        genotype,
        class_name,
        attrs,
        bonuses,
        extensions,
        skills,
        name,
        pet,
        gender,
        pronoun_set,
        starting_location,
    })
}

fn apply_selection(
    catalog: &GameDataCatalog,
    kind: ModuleKind,
    selection: Selection,
    extensions: &mut Vec<String>,
    mod_bonuses: &mut [i32; 6],
) -> Result<(), DecodeError> {
    let picked = match kind {
        ModuleKind::Mutations => selection.mutation,
        _ => selection.cybernetic,
    };
    let Some(name) = picked else {
        if kind == ModuleKind::Cybernetics {
            // True Kin who decline an implant get +1 Toughness.
            mod_bonuses[TOUGHNESS] += 1;
            extensions.push("None".to_string());
            return Ok(());
        }
        return Err(DecodeError::InvalidPayload {
            message: "mutation selection with no name".to_string(),
        });
    };
    if selection.count > 1 {
        // A stacked pick (e.g. Unstable Genome) is one entry, not N.
        extensions.push(format!("{name} x{}", selection.count));
        return Ok(());
    }
    if let Some(delta) = catalog.mod_bonuses(&name) {
        for (bonus, d) in mod_bonuses.iter_mut().zip(delta) {
            *bonus += d;
        }
    }
    extensions.push(name);
    Ok(())
}
