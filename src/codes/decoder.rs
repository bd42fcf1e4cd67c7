//! Decoder for legacy (pre-2.0.202) build codes.
//!
//! These are fixed-width letter strings like `BARFIGHTBABE`: one
//! genotype letter, one class letter, six attribute letters, then
//! optional 2-character mod tokens until the code ends.

use crate::codes::catalog::GameDataCatalog;
use crate::codes::character::{BuildEra, Character, Genotype};
use crate::common::error::DecodeError;

/// Shortest valid code: genotype + class + six attributes.
pub const MIN_CODE_LEN: usize = 8;

/// Attribute letters map 'A' -> 6 through 'Z' -> 31.
const ATTR_OFFSET: i32 = 59;

/// Decode a legacy build code against the given catalog.
///
/// All-or-nothing: any unknown token fails the whole decode, naming
/// the offending substring and its position.
pub fn decode_legacy(code: &str, catalog: &GameDataCatalog) -> Result<Character, DecodeError> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() < MIN_CODE_LEN {
        return Err(DecodeError::TooShort {
            length: chars.len(),
        });
    }

    let genotype = catalog
        .genotype(chars[0])
        .map_err(|_| DecodeError::UnknownGenotype { code: chars[0] })?;

    // The class letter is kept around: the polymorphic `16` implant
    // token resolves against it later.
    let class_code = chars[1];
    let class_name = catalog
        .class_for(genotype, class_code)
        .map_err(|_| DecodeError::UnknownClass {
            genotype: genotype.display(),
            code: class_code,
        })?
        .to_string();

    let mut attrs = [0i32; 6];
    for (attr, &c) in attrs.iter_mut().zip(&chars[2..8]) {
        *attr = c as i32 - ATTR_OFFSET;
    }

    let mut bonuses = catalog.class_bonuses(&class_name)?;
    let mut extensions: Vec<String> = Vec::new();

    // Walk the remainder in 2-character tokens. The previous token is
    // loop state: a `#N` marker replaces the extension it produced.
    let mut pos = MIN_CODE_LEN;
    let mut last_token: Option<String> = None;
    while pos < chars.len() {
        if chars.len() - pos < 2 {
            return Err(DecodeError::DanglingCharacter {
                character: chars[pos],
                position: pos,
            });
        }
        let token: String = chars[pos..pos + 2].iter().collect();

        if token.starts_with('#') {
            let index = chars[pos + 1]
                .to_digit(10)
                .ok_or_else(|| DecodeError::UnknownModToken {
                    token: token.clone(),
                    position: pos,
                })?;
            apply_variant(catalog, &mut extensions, &last_token, index, pos)?;
        } else if token == "16" {
            extensions.push(catalog.arcology_implant(class_code)?.to_string());
            last_token = Some(token);
        } else {
            let name = catalog
                .mod_name(&token)
                .map_err(|_| DecodeError::UnknownModToken {
                    token: token.clone(),
                    position: pos,
                })?
                .to_string();
            if let Some(delta) = catalog.mod_bonuses(&name) {
                for (bonus, d) in bonuses.iter_mut().zip(delta) {
                    *bonus += d;
                }
            }
            extensions.push(name);
            last_token = Some(token);
        }
        pos += 2;
    }

    let skills = catalog.class_skills(&class_name)?.to_vec();

    Ok(Character {
        era: BuildEra::Pre202,
        genotype,
        class_name,
        attrs,
        bonuses,
        extensions,
        skills,
        name: None,
        pet: None,
        gender: None,
        pronoun_set: None,
        starting_location: None,
    })
}

/// Replace the most recently appended extension with variant N of the
/// same mod. The marker never appends a new entry.
fn apply_variant(
    catalog: &GameDataCatalog,
    extensions: &mut Vec<String>,
    last_token: &Option<String>,
    index: u32,
    position: usize,
) -> Result<(), DecodeError> {
    if !catalog.supports_variants() {
        return Err(DecodeError::VariantsUnsupported { position });
    }
    let (token, slot) = match (last_token, extensions.last_mut()) {
        (Some(token), Some(slot)) => (token, slot),
        _ => return Err(DecodeError::VariantWithoutMod { position }),
    };
    let variants = catalog
        .variants_for(token)
        .ok_or_else(|| DecodeError::UnknownVariant {
            token: token.clone(),
            index,
        })?;
    let name = variants
        .get(index as usize)
        .ok_or_else(|| DecodeError::UnknownVariant {
            token: token.clone(),
            index,
        })?;
    *slot = name.clone();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::catalog::test_catalog;

    /// Re-encode a decoded character back into a legacy code string.
    /// Test-only: exercises the decode round-trip property.
    fn encode_legacy(character: &Character, catalog: &GameDataCatalog) -> String {
        let genotype_code = match character.genotype {
            Genotype::TrueKin => 'A',
            Genotype::MutatedHuman => 'B',
        };
        let class_code = ('A'..='L')
            .find(|&c| {
                catalog
                    .class_for(character.genotype, c)
                    .map(|name| name == character.class_name)
                    .unwrap_or(false)
            })
            .expect("class should reverse-map to a letter");
        let mut code = String::new();
        code.push(genotype_code);
        code.push(class_code);
        for attr in character.attrs {
            code.push(char::from_u32((attr + ATTR_OFFSET) as u32).expect("attr in letter range"));
        }
        for name in &character.extensions {
            if name == catalog.arcology_implant(class_code).unwrap() {
                code.push_str("16");
                continue;
            }
            let token = catalog
                .token_for(name)
                .expect("extension should reverse-map to a token");
            code.push_str(token);
        }
        code
    }

    // Legacy regression corpus from years of community build codes.
    const BUILD_CODES: [&str; 7] = [
        "AAPMNNJL16",
        "BARFIGHTBABE",
        "BJQMMOEIBNBOBPBRDPED",
        "BAIIMLLRB5CHDADCDDDX",
        "BCCGDEHEBKB2CDDB",
        "BAMMMMLLU5EB",
        "BINKMMKKBPBSB1B2CADP",
    ];

    // Contains every mutation and implant token in the tables.
    const ALL_MODS: &str =
        "BAEEEEEGAAABBABBBCB6BDBEBFBGBHBIBJBKBLBMBNBOBPBQBRBSBTBUBVBWBXBYBZB1B2B3B4B5CACBC\
         CCDCECFCGCHCICJCLDADBDCDDDEDFDGDHDIDJDKDLDMDNDODPDQDRDSDTDUDVDWDXDYDZD1EAEBECEDEE\
         EFEG0001040506070809111213141516U1U2U3U4";

    #[test]
    fn test_corpus_decodes() {
        let catalog = test_catalog();
        for code in BUILD_CODES {
            let character = decode_legacy(code, &catalog)
                .unwrap_or_else(|e| panic!("{code} should decode: {e}"));
            assert_eq!(character.attrs.len(), 6);
            assert_eq!(character.bonuses.len(), 6);
            assert_eq!(character.era, BuildEra::Pre202);
        }
    }

    #[test]
    fn test_all_mods_stress() {
        let catalog = test_catalog();
        let character = decode_legacy(ALL_MODS, &catalog).unwrap();
        // Every token resolves, and the bonus-carrying ones stack:
        // Double-muscled, Triple-jointed, Two-hearted, Beak, Brittle
        // Bones, on top of the Apostle's +2 Ego.
        assert_eq!(character.bonuses, [2, 2, 1, 0, 0, 3]);
        assert!(character.extensions.len() > 90);
    }

    #[test]
    fn test_true_kin_header() {
        let catalog = test_catalog();
        let character = decode_legacy("AAPMNNJL16", &catalog).unwrap();
        assert_eq!(character.genotype, Genotype::TrueKin);
        assert_eq!(character.class_name, "Horticulturist");
        assert_eq!(character.attrs, [21, 18, 19, 19, 15, 17]);
        assert_eq!(character.bonuses, [0, 0, 0, 2, 0, 0]);
        assert_eq!(character.extensions, vec!["Stabilizer Arm Locks"]);
        assert!(!character.skills.is_empty());
    }

    #[test]
    fn test_barfightbabe_attrs() {
        let catalog = test_catalog();
        let character = decode_legacy("BARFIGHTBABE", &catalog).unwrap();
        assert_eq!(character.genotype, Genotype::MutatedHuman);
        assert_eq!(character.attrs, [23, 11, 14, 12, 13, 25]);
        assert_eq!(character.extensions.len(), 2);
    }

    #[test]
    fn test_decode_is_idempotent() {
        let catalog = test_catalog();
        for code in BUILD_CODES {
            let first = decode_legacy(code, &catalog).unwrap();
            let second = decode_legacy(code, &catalog).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_polymorphic_token_tracks_class_letter() {
        let catalog = test_catalog();
        let mut names = Vec::new();
        for class_letter in ['A', 'E', 'I'] {
            let code = format!("A{class_letter}MMMMMM16");
            let character = decode_legacy(&code, &catalog).unwrap();
            assert_eq!(character.extensions.len(), 1);
            names.push(character.extensions[0].clone());
        }
        assert_eq!(names[0], "Stabilizer Arm Locks");
        assert_eq!(names[1], "Rapid Release Finger Flexors");
        assert_eq!(names[2], "Carbide Hand Bones");
    }

    #[test]
    fn test_mod_bonuses_accumulate() {
        let catalog = test_catalog();
        // Apostle baseline +2 Ego, then Double-muscled (B6) +2 Strength
        // and Triple-jointed (BX) +2 Agility, element-wise.
        let character = decode_legacy("BAEEEEEGB6BX", &catalog).unwrap();
        assert_eq!(character.bonuses, [2, 2, 0, 0, 0, 2]);
    }

    #[test]
    fn test_variant_marker_replaces_last_extension() {
        let catalog = test_catalog();
        let character = decode_legacy("BAEEEEEGBV#2", &catalog).unwrap();
        assert_eq!(character.extensions, vec!["Stinger (Poisoning Venom)"]);

        let character = decode_legacy("BAEEEEEGBABV#0", &catalog).unwrap();
        assert_eq!(
            character.extensions,
            vec!["Burrowing Claws", "Stinger (Confusing Venom)"]
        );
    }

    #[test]
    fn test_variant_marker_without_mod_fails() {
        let catalog = test_catalog();
        let err = decode_legacy("BAEEEEEG#1", &catalog).unwrap_err();
        assert_eq!(err, DecodeError::VariantWithoutMod { position: 8 });
    }

    #[test]
    fn test_variant_out_of_range_fails() {
        let catalog = test_catalog();
        let err = decode_legacy("BAEEEEEGBV#9", &catalog).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownVariant { index: 9, .. }));
    }

    #[test]
    fn test_unknown_token_names_the_token() {
        let catalog = test_catalog();
        let err = decode_legacy("BAEEEEEGB6ZZ", &catalog).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownModToken {
                token: "ZZ".to_string(),
                position: 10,
            }
        );
    }

    #[test]
    fn test_too_short_and_dangling() {
        let catalog = test_catalog();
        assert_eq!(
            decode_legacy("BAEEEEE", &catalog).unwrap_err(),
            DecodeError::TooShort { length: 7 }
        );
        assert_eq!(
            decode_legacy("BAEEEEEGB", &catalog).unwrap_err(),
            DecodeError::DanglingCharacter {
                character: 'B',
                position: 8,
            }
        );
    }

    #[test]
    fn test_unknown_genotype_and_class() {
        let catalog = test_catalog();
        assert_eq!(
            decode_legacy("XAEEEEEE", &catalog).unwrap_err(),
            DecodeError::UnknownGenotype { code: 'X' }
        );
        assert_eq!(
            decode_legacy("BMEEEEEE", &catalog).unwrap_err(),
            DecodeError::UnknownClass {
                genotype: "Mutated Human",
                code: 'M',
            }
        );
    }

    #[test]
    fn test_round_trip_without_variants() {
        let catalog = test_catalog();
        for code in BUILD_CODES {
            let character = decode_legacy(code, &catalog).unwrap();
            let re_encoded = encode_legacy(&character, &catalog);
            let re_decoded = decode_legacy(&re_encoded, &catalog).unwrap();
            assert_eq!(character.attrs, re_decoded.attrs, "attrs for {code}");
            assert_eq!(character.bonuses, re_decoded.bonuses, "bonuses for {code}");
            assert_eq!(character.extensions, re_decoded.extensions);
        }
    }
}
