//! Treasure flavour text: names and descriptions, with a CSV loader.
//!
//! # CSV format
//!
//! One row per entry, `kind` is either `name` or `description`:
//!
//! ```csv
//! kind,text
//! name,Ancient Coin
//! name,Golden Chalice
//! description,A mysterious artifact from an ancient civilization.
//! ```
//!
//! A catalog must carry at least one name and one description — the
//! spawner picks from both uniformly and unconditionally.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use hunt_core::SessionRng;

use crate::CatalogError;

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Validated pools of treasure names and descriptions.
///
/// Fields are private so the non-empty invariant established at
/// construction holds for the life of the value, which is what lets the
/// uniform picks index without bounds ceremony.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    names: Vec<String>,
    descriptions: Vec<String>,
}

impl Catalog {
    /// Build a catalog from explicit pools.
    ///
    /// # Errors
    ///
    /// `CatalogError::Empty` if either pool is empty.
    pub fn new(names: Vec<String>, descriptions: Vec<String>) -> Result<Catalog, CatalogError> {
        if names.is_empty() {
            return Err(CatalogError::Empty("names"));
        }
        if descriptions.is_empty() {
            return Err(CatalogError::Empty("descriptions"));
        }
        Ok(Catalog { names, descriptions })
    }

    /// Uniform pick from the name pool.
    pub fn pick_name(&self, rng: &mut SessionRng) -> String {
        self.names[rng.gen_range(0..self.names.len())].clone()
    }

    /// Uniform pick from the description pool.
    pub fn pick_description(&self, rng: &mut SessionRng) -> String {
        self.descriptions[rng.gen_range(0..self.descriptions.len())].clone()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }
}

impl Default for Catalog {
    /// The built-in flavour set.
    fn default() -> Self {
        let names = [
            "Ancient Coin",
            "Golden Chalice",
            "Crystal Orb",
            "Emerald Necklace",
            "Ruby Ring",
            "Sapphire Crown",
            "Diamond Dagger",
            "Silver Bracelet",
            "Obsidian Statue",
            "Jade Figurine",
            "Bronze Medallion",
            "Amber Gemstone",
        ];
        let descriptions = [
            "A mysterious artifact from an ancient civilization.",
            "A valuable treasure hidden by pirates centuries ago.",
            "A rare and precious gemstone with magical properties.",
            "A royal treasure lost during a historic battle.",
            "A sacred relic sought by treasure hunters for generations.",
        ];
        Catalog {
            names: names.iter().map(|s| s.to_string()).collect(),
            descriptions: descriptions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    kind: String,
    text: String,
}

/// Load a catalog from a CSV file.
pub fn load_catalog_csv(path: &Path) -> Result<Catalog, CatalogError> {
    let file = std::fs::File::open(path).map_err(CatalogError::Io)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for catalogs embedded
/// in the binary.
pub fn load_catalog_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut names = Vec::new();
    let mut descriptions = Vec::new();

    for result in csv_reader.deserialize::<CatalogRecord>() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        match row.kind.trim() {
            "name" => names.push(row.text),
            "description" => descriptions.push(row.text),
            other => {
                return Err(CatalogError::Parse(format!(
                    "invalid kind {other:?}: expected \"name\" or \"description\""
                )));
            }
        }
    }

    Catalog::new(names, descriptions)
}
