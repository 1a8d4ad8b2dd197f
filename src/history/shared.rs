// ClipRing - Ring partage entre threads
//
// Enveloppe `ClipboardRing` dans un `Arc<RwLock<_>>` pour les hotes
// qui lisent le ring depuis plusieurs threads.
//
// # Verrouillage
// - `record` prend le verrou en ecriture pour toute la sequence
//   lecture-modification-notification.
// - `snapshot` prend le verrou en lecture et copie les entrees : la
//   copie retournee ne change plus ensuite.
//
// Un observateur est appele sous le verrou en ecriture : il ne doit pas
// rappeler ce ring (interblocage). Un verrou empoisonne est recupere,
// chaque operation laissant le ring dans un etat valide.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::history::entry::RingItem;
use crate::history::ring::{ClipboardRing, SubscriptionId};
use crate::history::search;

/// Poignee clonable vers un ring partage.
#[derive(Debug, Clone, Default)]
pub struct SharedRing {
    inner: Arc<RwLock<ClipboardRing>>,
}

impl SharedRing {
    pub fn new(ring: ClipboardRing) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ring)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ClipboardRing> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ClipboardRing> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enregistre un texte copie sous verrou exclusif.
    pub fn record(&self, text: &str) -> bool {
        self.write().record(text)
    }

    /// Enregistre le resultat d'une copie, qui peut etre absent.
    pub fn record_copy(&self, copied: Option<&str>) -> bool {
        self.write().record_copy(copied)
    }

    /// Copie des entrees (plus ancienne en premier).
    pub fn snapshot(&self) -> Vec<RingItem> {
        self.read().items().to_vec()
    }

    /// Copie des entrees dont le texte contient `keyword`.
    pub fn search(&self, keyword: &str) -> Vec<RingItem> {
        self.read()
            .iter()
            .filter(|item| search::matches(item, keyword))
            .cloned()
            .collect()
    }

    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.write().subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.write().unsubscribe(id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.read().capacity()
    }
}

impl From<ClipboardRing> for SharedRing {
    fn from(ring: ClipboardRing) -> Self {
        Self::new(ring)
    }
}
