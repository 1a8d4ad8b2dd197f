// ClipRing - Reception des copies
// Relie l'evenement "copie" de l'hote au ring.
//
// L'hote appelle `CopyHook::on_copy` a chaque copie, avec le texte
// copie ou `None` pour une copie vide ou non textuelle. Le hook ne fait
// que transmettre : la deduplication, la rotation et la notification
// restent dans `ClipboardRing::record`.
//
// Le hook emprunte le ring : l'hote garde la propriete du ring et le
// passe explicitement, sans etat global.
//
// # Securite
// Le contenu copie n'est jamais journalise, seulement sa taille.

use tracing::trace;

use crate::history::ring::ClipboardRing;

/// Source d'evenements de copie cote hote.
pub trait CopySource {
    /// Prochaine copie, `None` quand la source est epuisee.
    /// `Some(None)` represente une copie sans texte.
    fn next_copy(&mut self) -> Option<Option<String>>;
}

/// Transmet les copies de l'hote au ring.
pub struct CopyHook<'a> {
    ring: &'a mut ClipboardRing,
}

impl<'a> CopyHook<'a> {
    pub fn new(ring: &'a mut ClipboardRing) -> Self {
        Self { ring }
    }

    /// Traite une copie. Retourne true si le ring a change.
    pub fn on_copy(&mut self, copied: Option<&str>) -> bool {
        trace!(
            bytes = copied.map_or(0, str::len),
            "copy event received"
        );
        self.ring.record_copy(copied)
    }

    /// Vide une source d'evenements dans le ring.
    /// Retourne le nombre de copies qui ont modifie le ring.
    pub fn drain<S: CopySource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut changed = 0;
        while let Some(copied) = source.next_copy() {
            if self.on_copy(copied.as_deref()) {
                changed += 1;
            }
        }
        changed
    }
}

impl<I> CopySource for I
where
    I: Iterator<Item = Option<String>>,
{
    fn next_copy(&mut self) -> Option<Option<String>> {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_copy_forwards_to_ring() {
        let mut ring = ClipboardRing::new();
        let mut hook = CopyHook::new(&mut ring);
        assert!(hook.on_copy(Some("snippet")));
        assert!(!hook.on_copy(None));
        assert!(!hook.on_copy(Some("")));
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn test_drain_counts_effective_copies() {
        let mut ring = ClipboardRing::with_capacity(2);
        let mut events = vec![
            Some("a".to_string()),
            None,
            Some("b".to_string()),
            Some("a".to_string()),
            Some("c".to_string()),
        ]
        .into_iter();
        let changed = CopyHook::new(&mut ring).drain(&mut events);
        assert_eq!(changed, 4);
        let texts: Vec<&str> = ring.iter().map(|e| e.text()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }
}
