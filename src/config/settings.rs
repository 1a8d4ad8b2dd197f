// ClipRing - Structure de configuration et valeurs par defaut
//
// Ce module definit la structure `Settings` qui regroupe les parametres
// du ring : capacite, gabarit de l'apercu et longueur du nom affiche.
//
// # Chargement
// `Settings::load(path)` lit un fichier TOML. Les sections et cles
// manquantes gardent leur defaut, les valeurs hors bornes sont clampees
// (ex: capacity 1..1000) avec un avertissement.
// `Settings::load_or_default(path)` ne retourne jamais d'erreur : un
// fichier absent donne les defauts, un fichier invalide aussi apres un
// avertissement.
//
// # Fichier par defaut
// `Settings::save_default(path)` genere un fichier commente avec toutes
// les options disponibles et leurs valeurs.
//
// # Format
// ```toml
// [ring]
// capacity = 20
//
// [preview]
// lines = 3
// line_length = 16
//
// [name]
// max_length = 250
// ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::*;
use crate::error::{RingError, RingResult};
use crate::history::entry::ItemFormat;
use crate::history::ring::ClipboardRing;

/// Section [ring].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingSettings {
    pub capacity: usize,
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_RING_CAPACITY,
        }
    }
}

/// Section [preview].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    pub lines: usize,
    pub line_length: usize,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            lines: DEFAULT_PREVIEW_LINES,
            line_length: DEFAULT_PREVIEW_LINE_LENGTH,
        }
    }
}

/// Section [name].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameSettings {
    pub max_length: usize,
}

impl Default for NameSettings {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_NAME_MAX_LENGTH,
        }
    }
}

/// Configuration complete du ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ring: RingSettings,
    pub preview: PreviewSettings,
    pub name: NameSettings,
}

impl Settings {
    /// Parse une configuration TOML et clampe les valeurs.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let parsed: Settings = toml::from_str(text)?;
        Ok(parsed.validated())
    }

    /// Charge la configuration depuis un fichier.
    ///
    /// # Errors
    /// - `RingError::Io` : fichier illisible
    /// - `RingError::ConfigParse` : TOML invalide
    pub fn load(path: &Path) -> RingResult<Self> {
        debug!("Loading config from: {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|source| RingError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Charge la configuration, ou les defauts si le fichier est absent
    /// ou invalide.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file found at: {}", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Config error, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Ecrit le fichier de configuration commente par defaut.
    /// Refuse d'ecraser un fichier existant.
    pub fn save_default(path: &Path) -> RingResult<()> {
        if path.exists() {
            return Err(RingError::Config(format!(
                "config file already exists: {}",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, default_config_text())?;
        Ok(())
    }

    /// Chemin par defaut : `<config_dir>/clipring/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
    }

    /// Gabarit des champs derives des entrees.
    pub fn item_format(&self) -> ItemFormat {
        ItemFormat {
            preview_lines: self.preview.lines,
            preview_line_length: self.preview.line_length,
            name_max_length: self.name.max_length,
        }
    }

    /// Construit un ring vide configure.
    pub fn build_ring(&self) -> ClipboardRing {
        ClipboardRing::with_format(self.ring.capacity, self.item_format())
    }

    /// Ramene chaque valeur dans ses bornes.
    pub fn validated(mut self) -> Self {
        self.ring.capacity = clamp_setting("ring.capacity", self.ring.capacity, 1, MAX_RING_CAPACITY);
        self.preview.lines = clamp_setting("preview.lines", self.preview.lines, 1, MAX_PREVIEW_LINES);
        self.preview.line_length = clamp_setting(
            "preview.line_length",
            self.preview.line_length,
            1,
            MAX_PREVIEW_LINE_LENGTH,
        );
        self.name.max_length = clamp_setting("name.max_length", self.name.max_length, 1, MAX_NAME_LENGTH);
        self
    }
}

fn clamp_setting(key: &str, value: usize, min: usize, max: usize) -> usize {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{} = {} out of range {}..={}, using {}", key, value, min, max, clamped);
    }
    clamped
}

/// Texte par defaut du fichier de configuration.
pub fn default_config_text() -> String {
    format!(
        r#"# ClipRing Configuration

[ring]
# Nombre de copies conservees (1..{max_cap})
capacity = {cap}

[preview]
# Lignes affichees dans l'apercu (1..{max_lines})
lines = {lines}
# Caracteres par ligne avant "..." (1..{max_len})
line_length = {len}

[name]
# Longueur max du nom affiche (1..{max_name})
max_length = {name}
"#,
        max_cap = MAX_RING_CAPACITY,
        cap = DEFAULT_RING_CAPACITY,
        max_lines = MAX_PREVIEW_LINES,
        lines = DEFAULT_PREVIEW_LINES,
        max_len = MAX_PREVIEW_LINE_LENGTH,
        len = DEFAULT_PREVIEW_LINE_LENGTH,
        max_name = MAX_NAME_LENGTH,
        name = DEFAULT_NAME_MAX_LENGTH,
    )
}
