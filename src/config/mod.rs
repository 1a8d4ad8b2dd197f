// ClipRing - Module config
// Lecture/ecriture de la configuration utilisateur
//
// La configuration est un fichier TOML situe par defaut dans
// `<config_dir>/clipring/config.toml`. Elle ne regle que les valeurs
// fixees par defaut dans `constants` : capacite du ring et gabarit des
// champs derives.
//
// # Sous-modules
// - `settings` : structure Settings (serde), valeurs par defaut,
//                validation des plages et fichier commente par defaut.

/// Structure de configuration et valeurs par defaut.
pub mod settings;

pub use settings::Settings;
