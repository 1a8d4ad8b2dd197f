// ClipRing - Constantes globales
//
// Ce module centralise les valeurs par defaut de l'application :
// - Taille du ring (nombre d'entrees conservees)
// - Gabarit de l'apercu (lignes, longueur de ligne)
// - Longueur max du nom affiche
// - Noms de fichiers et repertoires de configuration
//
// Les constantes sont utilisees par les modules history, config
// et clipboard pour garantir la coherence des valeurs.

/// Nombre max d'entrees dans le ring
pub const DEFAULT_RING_CAPACITY: usize = 20;

/// Nombre de lignes conservees dans l'apercu
pub const DEFAULT_PREVIEW_LINES: usize = 3;

/// Longueur max d'une ligne d'apercu (caracteres)
pub const DEFAULT_PREVIEW_LINE_LENGTH: usize = 16;

/// Longueur max du nom affiche (caracteres)
pub const DEFAULT_NAME_MAX_LENGTH: usize = 250;

/// Suffixe ajoute a une ligne d'apercu tronquee
pub const TRUNCATION_SUFFIX: &str = "...";

/// Separateur entre les lignes de l'apercu
pub const PREVIEW_LINE_SEPARATOR: &str = "\n";

/// Categorie affichee par la boite a outils de l'hote
pub const TOOLBOX_CATEGORY: &str = "Clipboard Ring";

/// Type MIME accepte par les elements du ring
pub const TOOLBOX_MIME_FILTER: &str = "text/plain";

/// Nom du dossier application dans le repertoire de configuration
pub const APP_DIR_NAME: &str = "clipring";

/// Nom du fichier de configuration
pub const CONFIG_FILENAME: &str = "config.toml";

/// Bornes de validation de la configuration
pub const MAX_RING_CAPACITY: usize = 1000;
pub const MAX_PREVIEW_LINES: usize = 20;
pub const MAX_PREVIEW_LINE_LENGTH: usize = 200;
pub const MAX_NAME_LENGTH: usize = 4096;
