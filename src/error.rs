// ClipRing - Types d'erreur centralises
//
// Ce module definit l'enumeration `RingError` et le type alias
// `RingResult<T>` utilises aux frontieres faillibles de la crate.
//
// # Categories d'erreurs
// - `Io` : echec de lecture/ecriture (fichier de configuration, stdin)
// - `ConfigParse` : fichier de configuration TOML invalide
// - `Config` : valeur de configuration incoherente
//
// Les operations du ring lui-meme sont totales : elles ne retournent
// jamais d'erreur. Une violation d'invariant (capacite depassee,
// doublon) est une erreur de programmation verifiee par debug_assert.

use std::path::PathBuf;
use thiserror::Error;

/// Enumeration de toutes les erreurs possibles dans ClipRing.
#[derive(Error, Debug)]
pub enum RingError {
    /// Erreur de lecture/ecriture
    #[error("[Io] {0}")]
    Io(#[from] std::io::Error),

    /// Fichier de configuration illisible en TOML
    #[error("[Config] invalid file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Erreur de configuration
    #[error("[Config] {0}")]
    Config(String),
}

/// Type Result specialise pour ClipRing.
pub type RingResult<T> = Result<T, RingError>;
