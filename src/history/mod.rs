// ClipRing - Module history
// Gestion du ring des copies en memoire
//
// Ce module gere les textes copies recemment. Il est independant de la
// plateforme et de l'interface de l'hote.
//
// # Sous-modules
// - `entry`  : structure RingItem avec apercu et nom affiche precalcules
// - `ring`   : ClipboardRing borne, deduplique, ordonne par recence,
//              avec abonnement aux notifications
// - `search` : recherche insensible a la casse dans les entrees
// - `shared` : ring protege par verrou pour les hotes multi-threads
//
// # Architecture
// Le ring utilise un Vec<RingItem> : la plus ancienne entree en tete,
// la plus recente en fin. L'entree en tete est supprimee quand la
// capacite est depassee.

/// Structure de donnees d'une entree du ring.
pub mod entry;
/// Ring borne et deduplique avec notifications.
pub mod ring;
/// Recherche insensible a la casse dans les entrees.
pub mod search;
/// Ring partage entre threads.
pub mod shared;
