// ClipRing - Structure RingItem
// Represente une entree du ring avec ses metadonnees d'affichage
//
// Ce module definit les types de donnees fondamentaux du ring :
// - `ItemFormat` : gabarit des champs derives (apercu, nom)
// - `RingItem` : texte copie + apercu multi-ligne + nom echappe
//
// # Champs derives
// L'apercu et le nom affiche sont calcules une seule fois, a la
// construction de l'entree. Le texte etant immuable, ils ne changent
// plus ensuite : une entree deplacee en fin de ring conserve ses
// champs derives tels quels.
//
// # Caracteres
// Les longueurs sont comptees en caracteres Unicode (`char`), jamais
// en octets, pour ne jamais couper une sequence UTF-8.
//
// # Portabilite
// Ce module est en pur Rust, sans dependance plateforme.

use crate::constants::*;

/// Gabarit des champs derives d'une entree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemFormat {
    /// Nombre de lignes gardees dans l'apercu
    pub preview_lines: usize,
    /// Longueur max d'une ligne d'apercu avant troncature
    pub preview_line_length: usize,
    /// Longueur a partir de laquelle le nom affiche est coupe
    pub name_max_length: usize,
}

impl Default for ItemFormat {
    fn default() -> Self {
        Self {
            preview_lines: DEFAULT_PREVIEW_LINES,
            preview_line_length: DEFAULT_PREVIEW_LINE_LENGTH,
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
        }
    }
}

/// Une entree du ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingItem {
    text: String,
    preview: String,
    display_name: String,
}

impl RingItem {
    /// Cree une entree avec le gabarit par defaut.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_format(text, &ItemFormat::default())
    }

    /// Cree une entree et calcule ses champs derives selon `format`.
    pub fn with_format(text: impl Into<String>, format: &ItemFormat) -> Self {
        let text = text.into();
        let preview = compute_preview(&text, format.preview_lines, format.preview_line_length);
        let display_name = compute_display_name(&text, format.name_max_length);
        Self {
            text,
            preview,
            display_name,
        }
    }

    /// Texte brut copie (cle de deduplication).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apercu multi-ligne.
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Nom sur une ligne, caracteres de controle echappes.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Construit l'apercu : les `max_lines` premieres lignes, chacune
/// tronquee a `line_length` caracteres suivis de "..." si besoin.
///
/// Seul `\n` separe les lignes ; un `\r` final reste dans la ligne.
pub fn compute_preview(text: &str, max_lines: usize, line_length: usize) -> String {
    let mut preview = String::new();
    for (i, line) in text.split('\n').take(max_lines).enumerate() {
        if i > 0 {
            preview.push_str(PREVIEW_LINE_SEPARATOR);
        }
        match line.char_indices().nth(line_length) {
            Some((cut, _)) => {
                preview.push_str(&line[..cut]);
                preview.push_str(TRUNCATION_SUFFIX);
            }
            None => preview.push_str(line),
        }
    }
    preview
}

/// Construit le nom affiche : `\t`, `\r` et `\n` deviennent des
/// sequences litterales de deux caracteres, le reste est recopie.
///
/// La limite est testee apres chaque unite ajoutee : une sequence
/// d'echappement commencee sous la limite est ajoutee en entier, le
/// resultat peut donc faire `max_len + 1` caracteres.
pub fn compute_display_name(text: &str, max_len: usize) -> String {
    let mut name = String::with_capacity(text.len().min(max_len + 1));
    let mut count = 0usize;
    for ch in text.chars() {
        match ch {
            '\t' => {
                name.push_str("\\t");
                count += 2;
            }
            '\r' => {
                name.push_str("\\r");
                count += 2;
            }
            '\n' => {
                name.push_str("\\n");
                count += 2;
            }
            c => {
                name.push(c);
                count += 1;
            }
        }
        if count >= max_len {
            break;
        }
    }
    name
}
