// ClipRing - Recherche dans le ring
// Filtrage par sous-chaine, insensible a la casse
//
// Ce module fournit le predicat de recherche utilise par le filtre de
// l'hote : une entree correspond si le mot-cle apparait dans son texte.
//
// # Casse
// La comparaison replie les deux chaines caractere par caractere avec
// les tables Unicode, sans jamais consulter la locale du systeme. Le
// resultat est donc identique sur toutes les machines.
//
// # Asymetrie
// La deduplication du ring reste une egalite exacte : seule la
// recherche ignore la casse.
//
// # Portabilite
// Ce module est en pur Rust, sans dependance plateforme.

use crate::history::entry::RingItem;

/// Replie la casse caractere par caractere.
///
/// `str::to_lowercase` tient compte du contexte (sigma final) : "ΟΔΟΣ"
/// donnerait "οδος" et "Σ" seul "σ". Le repli par caractere, avec `ς`
/// ramene a `σ`, assure qu'une sous-chaine litterale corresponde toujours.
fn fold_case(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

/// Retourne true si `keyword` apparait dans le texte de l'entree,
/// sans tenir compte de la casse. Un mot-cle vide correspond toujours.
pub fn matches(item: &RingItem, keyword: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }
    fold_case(item.text()).contains(&fold_case(keyword))
}

/// Filtre les entrees dont le texte contient la requete.
/// Retourne les indices des entrees correspondantes, dans l'ordre.
pub fn filter_items(items: &[RingItem], query: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, e)| matches(e, query))
        .map(|(i, _)| i)
        .collect()
}
