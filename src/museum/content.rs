//! Dance content: history, clothing and video link for each dance.
//!
//! The built-in tables are compile-time `phf` maps keyed by dance name. Every
//! lookup falls back to an empty string, so a dance missing from one table
//! still gets its slides, just with an empty body (or no video link).
//!
//! A YAML content file can replace the built-in catalog:
//!
//! ```yaml
//! dances:
//!   - name: Huayno
//!     history: "El huayno es..."
//!     clothing: "- Mujer: pollera..."
//!     video_url: "https://www.youtube.com/watch?v=..."
//! ```

use super::error::{MuseumError, Result};
use phf::phf_map;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Dance names in menu and slide order.
pub const DANCES: [&str; 7] = [
    "Huayno", "Marinera", "Festejo", "Diablada", "Tondero", "Saya", "Carnaval",
];

static HISTORY_TEXT: phf::Map<&'static str, &'static str> = phf_map! {
    "Huayno" => "El huayno es una expresión musical y dancística andina con raíces precolombinas y mestizas...",
    "Marinera" => "La marinera es un baile costeño considerado un símbolo de elegancia y coqueteo...",
    "Festejo" => "El festejo es una danza afroperuana de la costa peruana que celebra...",
    "Diablada" => "La diablada es una danza de fuerte carácter ritual originaria del Altiplano...",
    "Tondero" => "El tondero es un baile costeño del norte del Perú con influencias españolas y africanas...",
    "Saya" => "La saya es una expresión afroanda de la región del sur, con ritmos marcados...",
    "Carnaval" => "Las danzas de carnaval varían por región; suelen incluir comparsas, máscaras y música festiva...",
};

static CLOTHING_TEXT: phf::Map<&'static str, &'static str> = phf_map! {
    "Huayno" => "- Mujer: pollera, manta bordada, chompa de lana, sombrero.\n- Hombre: poncho, sombrero, pantalón resistente.",
    "Marinera" => "- Mujer: vestido elegante, pollera, pañuelo blanco.\n- Hombre: traje claro, sombrero, pañuelo.",
    "Festejo" => "- Mujer: vestido con vuelo, accesorios de estación.\n- Hombre: camisa y pantalón con colores vivos.",
    "Diablada" => "- Trajes con máscaras, colorido y detalles simbólicos.",
    "Tondero" => "- Mujer: falda amplia, blusas bordadas.\n- Hombre: camisa, pantalón y sombrero típico.",
    "Saya" => "- Ropa con influencia afro, adornos de cintura.\n- Hombre: vestimenta sencilla, elementos rituales.",
    "Carnaval" => "- Varía por región: trajes coloridos, máscaras y adornos festivos.",
};

static VIDEO_LINKS: phf::Map<&'static str, &'static str> = phf_map! {
    "Huayno" => "https://www.youtube.com/watch?v=PLACEHOLDER_HUAYNO",
    "Marinera" => "https://www.youtube.com/watch?v=PLACEHOLDER_MARINERA",
    "Festejo" => "https://www.youtube.com/watch?v=PLACEHOLDER_FESTEJO",
    "Diablada" => "https://www.youtube.com/watch?v=PLACEHOLDER_DIABLADA",
    "Tondero" => "https://www.youtube.com/watch?v=PLACEHOLDER_TONDERO",
    "Saya" => "https://www.youtube.com/watch?v=PLACEHOLDER_SAYA",
    "Carnaval" => "https://www.youtube.com/watch?v=PLACEHOLDER_CARNAVAL",
};

/// History text for `name`, or `""` for an unknown dance.
#[inline]
pub fn history_text(name: &str) -> &'static str {
    HISTORY_TEXT.get(name).copied().unwrap_or_default()
}

/// Clothing text for `name`, or `""` for an unknown dance.
#[inline]
pub fn clothing_text(name: &str) -> &'static str {
    CLOTHING_TEXT.get(name).copied().unwrap_or_default()
}

/// Video URL for `name`, or `""` for an unknown dance.
#[inline]
pub fn video_link(name: &str) -> &'static str {
    VIDEO_LINKS.get(name).copied().unwrap_or_default()
}

/// One dance of the museum.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dance {
    pub name: String,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub clothing: String,
    /// Empty when the dance has no video
    #[serde(default)]
    pub video_url: String,
}

impl Dance {
    /// Look `name` up in the built-in tables.
    pub fn builtin(name: &str) -> Self {
        Self {
            name: name.to_string(),
            history: history_text(name).to_string(),
            clothing: clothing_text(name).to_string(),
            video_url: video_link(name).to_string(),
        }
    }

    pub fn has_video(&self) -> bool {
        !self.video_url.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct ContentFile {
    dances: Vec<Dance>,
}

/// Ordered list of dances with unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanceCatalog {
    dances: Vec<Dance>,
}

impl DanceCatalog {
    /// The seven built-in dances.
    pub fn builtin() -> Self {
        Self {
            dances: DANCES.iter().map(|name| Dance::builtin(name)).collect(),
        }
    }

    /// Build a catalog, rejecting duplicate names.
    pub fn new(dances: Vec<Dance>) -> Result<Self> {
        let mut seen = HashSet::new();
        for dance in &dances {
            if !seen.insert(dance.name.as_str()) {
                return Err(MuseumError::Config(format!(
                    "dance '{}' is listed more than once",
                    dance.name
                )));
            }
        }
        Ok(Self { dances })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: ContentFile = serde_saphyr::from_str(yaml)
            .map_err(|e| MuseumError::Config(format!("Failed to parse content YAML: {}", e)))?;
        Self::new(file.dances)
    }

    /// Load a YAML content file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn dances(&self) -> &[Dance] {
        &self.dances
    }

    pub fn get(&self, name: &str) -> Option<&Dance> {
        self.dances.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.dances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dances.is_empty()
    }
}

impl Default for DanceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
