// ClipRing - Elements de boite a outils
// Adapte les entrees du ring a l'interface de l'hote
//
// L'hote affiche le ring dans une boite a outils : liste filtrable,
// glisser-deposer, insertion au curseur. Ce module expose ces
// capacites sans que `RingItem` en depende :
// - `ToolboxItem` : trait consomme par l'hote
// - `ClipboardToolboxNode` : adaptateur construit depuis un `&RingItem`
// - `TextInsertTarget` : document de l'hote qui recoit le texte insere
//
// Les fonctions libres `get_search_text`, `get_full_text` et
// `display_name` donnent le meme acces sans passer par l'adaptateur.

use crate::constants::{TOOLBOX_CATEGORY, TOOLBOX_MIME_FILTER};
use crate::history::entry::RingItem;
use crate::history::search;

/// Document de l'hote capable d'inserer du texte au curseur.
pub trait TextInsertTarget {
    fn insert_at_caret(&mut self, text: &str);
}

impl TextInsertTarget for String {
    fn insert_at_caret(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Capacites d'un element affiche dans la boite a outils de l'hote.
pub trait ToolboxItem {
    /// Nom sur une ligne.
    fn name(&self) -> &str;

    /// Description courte affichee dans la liste.
    fn description(&self) -> &str;

    /// Texte complet insere ou glisse.
    fn full_text(&self) -> &str;

    /// Filtre de recherche de l'hote.
    fn filter(&self, keyword: &str) -> bool;

    fn category(&self) -> &str {
        TOOLBOX_CATEGORY
    }

    fn mime_filter(&self) -> &str {
        TOOLBOX_MIME_FILTER
    }

    /// Contenu transporte par un glisser-deposer.
    fn drag_preview(&self) -> &str {
        self.full_text()
    }

    fn insert_at_caret(&self, target: &mut dyn TextInsertTarget) {
        target.insert_at_caret(self.full_text());
    }

    /// Du texte brut s'insere dans n'importe quel document.
    fn is_compatible_with(&self, _mime_type: &str) -> bool {
        true
    }
}

/// Adaptateur entre une entree du ring et la boite a outils.
#[derive(Debug, Clone, Copy)]
pub struct ClipboardToolboxNode<'a> {
    item: &'a RingItem,
}

impl<'a> ClipboardToolboxNode<'a> {
    pub fn new(item: &'a RingItem) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &'a RingItem {
        self.item
    }
}

impl<'a> From<&'a RingItem> for ClipboardToolboxNode<'a> {
    fn from(item: &'a RingItem) -> Self {
        Self::new(item)
    }
}

impl ToolboxItem for ClipboardToolboxNode<'_> {
    fn name(&self) -> &str {
        self.item.display_name()
    }

    fn description(&self) -> &str {
        self.item.preview()
    }

    fn full_text(&self) -> &str {
        self.item.text()
    }

    fn filter(&self, keyword: &str) -> bool {
        search::matches(self.item, keyword)
    }
}

/// Texte court pour la liste de l'hote (l'apercu).
pub fn get_search_text(item: &RingItem) -> &str {
    item.preview()
}

/// Texte complet, pour l'insertion ou le glisser-deposer.
pub fn get_full_text(item: &RingItem) -> &str {
    item.text()
}

/// Nom affiche de l'entree.
pub fn display_name(item: &RingItem) -> &str {
    item.display_name()
}
