// ClipRing - Orchestrateur de session
// Relie la configuration, le ring et la vue de l'hote
//
// `App` est l'objet de session que l'hote construit au demarrage et
// detruit a la fermeture. Il possede le ring : pas d'instance globale,
// plusieurs sessions independantes peuvent coexister.
//
// # Cycle de vie
// 1. `App::new(settings)` : ring vide configure
// 2. `App::on_copy(..)`   : chaque copie de l'hote
// 3. `App::toolbox_items(..)` : la vue relit le ring apres notification
//
// Il n'y a pas de nettoyage explicite : le ring disparait avec l'App.

use tracing::info;

use crate::clipboard::monitor::{CopyHook, CopySource};
use crate::clipboard::toolbox::ClipboardToolboxNode;
use crate::config::Settings;
use crate::history::ring::{ClipboardRing, SubscriptionId};
use crate::history::search;

/// Session de l'application hote.
#[derive(Debug)]
pub struct App {
    settings: Settings,
    ring: ClipboardRing,
}

impl App {
    /// Cree une session avec un ring vide.
    pub fn new(settings: Settings) -> Self {
        let ring = settings.build_ring();
        info!(
            capacity = ring.capacity(),
            preview_lines = settings.preview.lines,
            "clipboard ring ready"
        );
        Self { settings, ring }
    }

    /// Copie recue de l'hote. Retourne true si le ring a change.
    pub fn on_copy(&mut self, copied: Option<&str>) -> bool {
        CopyHook::new(&mut self.ring).on_copy(copied)
    }

    /// Vide une source de copies dans le ring.
    /// Retourne le nombre de copies qui ont modifie le ring.
    pub fn drain_copies<S: CopySource + ?Sized>(&mut self, source: &mut S) -> usize {
        CopyHook::new(&mut self.ring).drain(source)
    }

    /// Abonne la vue de l'hote aux changements du ring.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.ring.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.ring.unsubscribe(id)
    }

    /// Elements de la boite a outils, filtres par mot-cle si fourni.
    ///
    /// Choix de presentation : la liste de l'hote montre la copie la plus
    /// recente en premier, alors que `ClipboardRing::items` garde l'ordre
    /// de stockage (plus ancienne en premier).
    pub fn toolbox_items(&self, keyword: Option<&str>) -> Vec<ClipboardToolboxNode<'_>> {
        let items = self.ring.items();
        search::filter_items(items, keyword.unwrap_or(""))
            .into_iter()
            .rev()
            .map(|i| ClipboardToolboxNode::new(&items[i]))
            .collect()
    }

    pub fn ring(&self) -> &ClipboardRing {
        &self.ring
    }

    pub fn ring_mut(&mut self) -> &mut ClipboardRing {
        &mut self.ring
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
