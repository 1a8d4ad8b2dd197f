// ClipRing - Arbre de modules (crate library)
//
// Ce fichier constitue le point d'entree de la crate library de ClipRing.
// Il re-exporte tous les modules pour permettre l'acces depuis le binaire
// et faciliter les tests d'integration.
//
// # Modules
// - `app`       : session de l'hote, possede le ring
// - `clipboard` : reception des copies et adaptation a la boite a outils
// - `config`    : lecture/ecriture de la configuration utilisateur
// - `constants` : constantes globales (capacite, apercu, noms de fichiers)
// - `error`     : types d'erreur centralises (RingError, RingResult)
// - `history`   : ring des copies en memoire (ring, entrees, recherche)

/// Session de l'application hote.
pub mod app;
/// Reception des copies et boite a outils de l'hote.
pub mod clipboard;
/// Configuration utilisateur.
pub mod config;
/// Constantes globales de l'application.
pub mod constants;
/// Types d'erreur centralises.
pub mod error;
/// Ring des copies en memoire.
pub mod history;

pub use app::App;
pub use clipboard::toolbox::{ClipboardToolboxNode, TextInsertTarget, ToolboxItem};
pub use config::Settings;
pub use error::{RingError, RingResult};
pub use history::entry::{ItemFormat, RingItem};
pub use history::ring::{ClipboardRing, SubscriptionId};
pub use history::search::matches;
pub use history::shared::SharedRing;
