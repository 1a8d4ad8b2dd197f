// ClipRing - Ring des copies recentes
// Liste bornee, dedupliquee, ordonnee par recence
//
// Ce module implemente le stockage en memoire des textes copies sous
// forme de liste ordonnee : la plus ancienne entree en tete, la plus
// recente en fin.
//
// # Capacite et rotation
// Apres chaque ajout, les entrees en tete sont supprimees tant que la
// capacite est depassee. La boucle garantit l'invariant quelle que
// soit la capacite.
//
// # Deduplication
// Un texte deja present (egalite exacte, sensible a la casse) est
// deplace en fin de liste avec ses champs derives intacts au lieu
// d'etre duplique.
//
// # Notifications
// Chaque `record` effectif appelle les observateurs de facon synchrone,
// une fois la mutation terminee. Un texte vide ne notifie personne.
// Un observateur ne doit pas rappeler le ring pendant la notification.
//
// # Portabilite
// Ce module est en pur Rust, sans dependance plateforme.

use std::fmt;

use tracing::{debug, trace};

use crate::constants::DEFAULT_RING_CAPACITY;
use crate::history::entry::{ItemFormat, RingItem};

/// Identifiant d'un abonnement aux notifications du ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback de notification, sans argument.
pub type Observer = Box<dyn Fn() + Send + Sync>;

/// Ring des textes copies.
/// Les entrees sont stockees dans un Vec, la plus ancienne en tete.
pub struct ClipboardRing {
    entries: Vec<RingItem>,
    capacity: usize,
    format: ItemFormat,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl ClipboardRing {
    /// Cree un ring vide avec la capacite et le gabarit par defaut.
    pub fn new() -> Self {
        Self::with_format(DEFAULT_RING_CAPACITY, ItemFormat::default())
    }

    /// Cree un ring vide avec la capacite donnee.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_format(capacity, ItemFormat::default())
    }

    /// Cree un ring vide avec la capacite et le gabarit donnes.
    /// Une capacite nulle est ramenee a 1.
    pub fn with_format(capacity: usize, format: ItemFormat) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity.min(1024) + 1),
            capacity,
            format,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Enregistre un texte copie.
    ///
    /// Un texte vide est ignore. Un texte deja present est deplace en
    /// fin de ring ; sinon une nouvelle entree est creee. Les entrees
    /// les plus anciennes sont supprimees tant que la capacite est
    /// depassee, puis les observateurs sont notifies.
    ///
    /// Retourne true si le ring a ete modifie.
    pub fn record(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        let item = match self.entries.iter().position(|e| e.text() == text) {
            Some(index) => {
                trace!(index, "moving existing entry to the most recent slot");
                self.entries.remove(index)
            }
            None => RingItem::with_format(text, &self.format),
        };
        self.entries.push(item);

        self.enforce_capacity();
        self.check_invariants();

        debug!(len = self.entries.len(), bytes = text.len(), "clipboard ring updated");
        self.notify();
        true
    }

    /// Enregistre le resultat d'une copie, qui peut etre absent.
    pub fn record_copy(&mut self, copied: Option<&str>) -> bool {
        match copied {
            Some(text) => self.record(text),
            None => false,
        }
    }

    /// Supprime les entrees excedentaires (les plus anciennes).
    fn enforce_capacity(&mut self) {
        while self.entries.len() > self.capacity {
            self.entries.remove(0);
            trace!(capacity = self.capacity, "evicted least recently used entry");
        }
    }

    fn check_invariants(&self) {
        debug_assert!(self.entries.len() <= self.capacity);
        debug_assert!(self
            .entries
            .iter()
            .enumerate()
            .all(|(i, a)| self.entries[i + 1..].iter().all(|b| a.text() != b.text())));
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer();
        }
    }

    /// Abonne un callback aux modifications du ring.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Desabonne un callback. Retourne false si l'abonnement est inconnu.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Nombre d'observateurs abonnes.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Entrees dans l'ordre de stockage (plus ancienne en premier).
    pub fn items(&self) -> &[RingItem] {
        &self.entries
    }

    /// Retourne l'entree a l'index donne (0 = plus ancienne).
    pub fn get(&self, index: usize) -> Option<&RingItem> {
        self.entries.get(index)
    }

    /// Entree la plus recente.
    pub fn latest(&self) -> Option<&RingItem> {
        self.entries.last()
    }

    /// Retourne un iterateur sur les entrees (plus ancienne en premier).
    pub fn iter(&self) -> std::slice::Iter<'_, RingItem> {
        self.entries.iter()
    }

    /// Nombre d'entrees dans le ring.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Retourne true si le ring est vide.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capacite maximale.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Gabarit des champs derives.
    pub fn format(&self) -> &ItemFormat {
        &self.format
    }
}

impl Default for ClipboardRing {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClipboardRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipboardRing")
            .field("entries", &self.entries)
            .field("capacity", &self.capacity)
            .field("format", &self.format)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ClipboardRing {
    type Item = &'a RingItem;
    type IntoIter = std::slice::Iter<'a, RingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn texts(ring: &ClipboardRing) -> Vec<&str> {
        ring.iter().map(|e| e.text()).collect()
    }

    fn counting_observer(ring: &mut ClipboardRing) -> (SubscriptionId, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let id = ring.subscribe(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (id, count)
    }

    #[test]
    fn test_record_appends_most_recent_last() {
        let mut ring = ClipboardRing::new();
        ring.record("hello");
        ring.record("world");
        assert_eq!(texts(&ring), vec!["hello", "world"]);
        assert_eq!(ring.latest().unwrap().text(), "world");
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(ClipboardRing::new().capacity(), 20);
        assert_eq!(ClipboardRing::with_capacity(0).capacity(), 1);
    }

    #[test]
    fn test_deduplication_moves_to_end() {
        let mut ring = ClipboardRing::new();
        ring.record("a");
        ring.record("b");
        ring.record("c");
        assert!(ring.record("a"));
        assert_eq!(texts(&ring), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_deduplication_is_case_sensitive() {
        let mut ring = ClipboardRing::new();
        ring.record("Hello");
        ring.record("hello");
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn test_moved_entry_keeps_derived_fields() {
        let format = ItemFormat::default();
        let mut ring = ClipboardRing::with_format(5, format);
        ring.record("first\tline\nsecond");
        let before = ring.get(0).unwrap().clone();
        ring.record("other");
        ring.record("first\tline\nsecond");
        let after = ring.latest().unwrap();
        assert_eq!(after.preview(), before.preview());
        assert_eq!(after.display_name(), before.display_name());
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn test_capacity_enforcement() {
        let mut ring = ClipboardRing::with_capacity(3);
        ring.record("a");
        ring.record("b");
        ring.record("c");
        ring.record("d");
        assert_eq!(texts(&ring), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_eviction_respects_touch_order() {
        let mut ring = ClipboardRing::with_capacity(3);
        ring.record("a");
        ring.record("b");
        ring.record("c");
        ring.record("a"); // "b" devient la plus ancienne
        ring.record("d");
        assert_eq!(texts(&ring), vec!["c", "a", "d"]);
    }

    #[test]
    fn test_twenty_one_records_evict_first() {
        let mut ring = ClipboardRing::new();
        let all: Vec<String> = (0..=20).map(|i| format!("t{}", i)).collect();
        for t in &all {
            ring.record(t);
        }
        assert_eq!(ring.len(), 20);
        let expected: Vec<&str> = all[1..].iter().map(|s| s.as_str()).collect();
        assert_eq!(texts(&ring), expected);
    }

    #[test]
    fn test_empty_text_is_noop() {
        let mut ring = ClipboardRing::new();
        let (_, count) = counting_observer(&mut ring);
        assert!(!ring.record(""));
        assert!(!ring.record_copy(None));
        assert!(!ring.record_copy(Some("")));
        assert!(ring.is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_notification_after_each_record() {
        let mut ring = ClipboardRing::new();
        let (_, count) = counting_observer(&mut ring);
        ring.record("a");
        ring.record("a");
        ring.record_copy(Some("b"));
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut ring = ClipboardRing::new();
        let (id, count) = counting_observer(&mut ring);
        let (_, other) = counting_observer(&mut ring);
        ring.record("a");
        assert!(ring.unsubscribe(id));
        assert!(!ring.unsubscribe(id));
        ring.record("b");
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(other.load(Ordering::SeqCst), 2);
        assert_eq!(ring.observer_count(), 1);
    }

    #[test]
    fn test_returned_view_is_stable() {
        let mut ring = ClipboardRing::new();
        ring.record("a");
        let snapshot = ring.items().to_vec();
        ring.record("b");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(ring.items().len(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_capacity_and_uniqueness_hold(
            capacity in 1usize..8,
            inputs in prop::collection::vec("[a-e]{0,2}", 0..60),
        ) {
            let mut ring = ClipboardRing::with_capacity(capacity);
            for text in &inputs {
                ring.record(text);
                prop_assert!(ring.len() <= capacity);
                let mut seen: Vec<&str> = ring.iter().map(|e| e.text()).collect();
                seen.sort_unstable();
                seen.dedup();
                prop_assert_eq!(seen.len(), ring.len());
            }
        }

        #[test]
        fn prop_recorded_text_is_latest(
            inputs in prop::collection::vec("[a-z]{1,3}", 1..40),
        ) {
            let mut ring = ClipboardRing::new();
            for text in &inputs {
                ring.record(text);
                prop_assert_eq!(ring.latest().map(|e| e.text()), Some(text.as_str()));
            }
        }
    }
}
