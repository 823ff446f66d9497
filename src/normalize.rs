//! # Field-name normalization
//!
//! The indicator spreadsheets arrive with several distinct labelings of the
//! same semantic column (accents dropped, units appended, stray whitespace,
//! arbitrary casing). This module is the single boundary that maps a raw
//! row (`header → cell text`) onto the canonical [`SegmentRecord`], so the
//! scorer itself never sees a raw header.
//!
//! Lookup order per header: exact synonym match (normalized) → substring
//! probe on a few discriminating fragments → ignored.

use crate::record::{parse_class, parse_pothole, parse_quantity, SegmentRecord};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A raw spreadsheet row as supplied by the reading collaborator.
pub type RawRow = HashMap<String, String>;

/// Canonical attributes the scorer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PotholePresence,
    RoadClass,
    RoadLengthM,
    LightingPoints,
}

/// Known header spellings, normalized. Includes the exact headers of the
/// original municipal dataset plus accent-less and English variants.
static HEADER_SYNONYMS: Lazy<HashMap<&'static str, Field>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for (k, f) in [
        ("présence du nid de poule", Field::PotholePresence),
        ("presence du nid de poule", Field::PotholePresence),
        ("nid de poule", Field::PotholePresence),
        ("pothole", Field::PotholePresence),
        ("has pothole", Field::PotholePresence),
        ("classe de voirie", Field::RoadClass),
        ("classe voirie", Field::RoadClass),
        ("road class", Field::RoadClass),
        ("linéaire de voirie(ml)", Field::RoadLengthM),
        ("lineaire de voirie(ml)", Field::RoadLengthM),
        ("linéaire de voirie (ml)", Field::RoadLengthM),
        ("linéaire (ml)", Field::RoadLengthM),
        ("road length (m)", Field::RoadLengthM),
        ("road length m", Field::RoadLengthM),
        ("nombre de point lumineux sur le tronçon", Field::LightingPoints),
        ("nombre de points lumineux", Field::LightingPoints),
        ("points lumineux", Field::LightingPoints),
        ("lighting points", Field::LightingPoints),
    ] {
        m.insert(k, f);
    }
    m
});

/// Discriminating fragments for the substring fallback. Checked in order;
/// first hit wins.
const HEADER_FRAGMENTS: &[(&str, Field)] = &[
    ("nid de poule", Field::PotholePresence),
    ("pothole", Field::PotholePresence),
    ("classe", Field::RoadClass),
    ("linéaire", Field::RoadLengthM),
    ("lineaire", Field::RoadLengthM),
    ("length", Field::RoadLengthM),
    ("lumineux", Field::LightingPoints),
    ("lighting", Field::LightingPoints),
    ("éclairage", Field::LightingPoints),
];

/// Resolve a raw header to a canonical field, if it names one.
pub fn canonical_field(header: &str) -> Option<Field> {
    let h = normalize_header(header);
    if let Some(&f) = HEADER_SYNONYMS.get(h.as_str()) {
        return Some(f);
    }
    for (frag, f) in HEADER_FRAGMENTS {
        if h.contains(frag) {
            return Some(*f);
        }
    }
    None
}

/// Build a canonical record from a raw row. Absent or unrecognized columns
/// simply leave the field at its zero/false default; when two headers map
/// to the same field the first non-empty cell wins.
pub fn segment_from_row(row: &RawRow) -> SegmentRecord {
    let mut cells: HashMap<Field, &str> = HashMap::new();
    for (header, value) in row {
        if let Some(field) = canonical_field(header) {
            let v = value.trim();
            if !v.is_empty() {
                cells.entry(field).or_insert(v);
            }
        }
    }

    SegmentRecord {
        road_length_m: cells
            .get(&Field::RoadLengthM)
            .copied()
            .map_or(0.0, parse_quantity),
        road_class: cells
            .get(&Field::RoadClass)
            .copied()
            .map(parse_class)
            .unwrap_or_default(),
        lighting_point_count: cells
            .get(&Field::LightingPoints)
            .copied()
            .map_or(0.0, parse_quantity),
        has_pothole: cells
            .get(&Field::PotholePresence)
            .copied()
            .is_some_and(parse_pothole),
    }
}

/// Lowercase + condensed internal whitespace + trim. Accents are kept
/// (the synonym table carries both spellings).
fn normalize_header(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            last_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RoadClass;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolves_original_dataset_headers() {
        assert_eq!(
            canonical_field("présence du nid de poule"),
            Some(Field::PotholePresence)
        );
        assert_eq!(canonical_field("classe de voirie"), Some(Field::RoadClass));
        assert_eq!(
            canonical_field("linéaire de voirie(ml)"),
            Some(Field::RoadLengthM)
        );
        assert_eq!(
            canonical_field("Nombre de point lumineux sur le tronçon"),
            Some(Field::LightingPoints)
        );
    }

    #[test]
    fn header_lookup_survives_case_and_whitespace() {
        assert_eq!(
            canonical_field("  PRÉSENCE   DU NID DE POULE "),
            Some(Field::PotholePresence)
        );
        assert_eq!(canonical_field("Road   Class"), Some(Field::RoadClass));
        assert_eq!(canonical_field("Nom de la Commune"), None);
    }

    #[test]
    fn row_maps_to_canonical_record() {
        let r = segment_from_row(&row(&[
            ("présence du nid de poule", "Oui"),
            ("classe de voirie", "Primaire"),
            ("linéaire de voirie(ml)", "3000"),
            ("Nombre de point lumineux sur le tronçon", "2"),
            ("Nom de la Commune", "Yaounde 3"),
        ]));
        assert!(r.has_pothole);
        assert_eq!(r.road_class, RoadClass::Primaire);
        assert_eq!(r.road_length_m, 3000.0);
        assert_eq!(r.lighting_point_count, 2.0);
    }

    #[test]
    fn empty_row_yields_default_record() {
        let r = segment_from_row(&row(&[("commune", "Douala 1")]));
        assert_eq!(r, SegmentRecord::default());
    }
}
