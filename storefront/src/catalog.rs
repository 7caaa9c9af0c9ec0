use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;

use plant_api::domain::{shape, Category, Plant, ALL_CATEGORIES_ID};

use crate::CatalogFetcher;

/// Which slice of the catalog the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Category(String),
}

impl Selection {
    /// Map a clicked category id to a selection. The sentinel id (and a
    /// missing id) requests the unfiltered list.
    pub fn from_category_id(id: &str) -> Self {
        if id.is_empty() || id == ALL_CATEGORIES_ID {
            Selection::All
        } else {
            Selection::Category(id.to_string())
        }
    }
}

/// A plant load that has been issued but not yet applied.
///
/// Loads carry a sequence number so that responses from overlapping
/// fetches are applied at most once, and only while no newer load has
/// been issued. A slow response for an old selection can therefore never
/// overwrite the list the user asked for last.
#[derive(Debug)]
pub struct PlantsLoad {
    seq: u64,
    selection: Selection,
}

impl PlantsLoad {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

/// The current catalog: category list and plant list, each replaced
/// wholesale on every load. Owned by the presentation layer, which
/// re-renders after each mutating call.
pub struct Catalog {
    fetcher: Arc<dyn CatalogFetcher>,
    categories: Vec<Category>,
    plants: Vec<Plant>,
    selection: Selection,
    issued_seq: AtomicU64,
    applied_seq: u64,
}

impl Catalog {
    pub fn new(fetcher: Arc<dyn CatalogFetcher>) -> Self {
        Self {
            fetcher,
            categories: vec![Category::all()],
            plants: Vec::new(),
            selection: Selection::All,
            issued_seq: AtomicU64::new(0),
            applied_seq: 0,
        }
    }

    /// Current category list. The synthetic "All Trees" entry is always
    /// first, even before the first load, and is the default selection.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Detail-view lookup by plant id. Reuses the already-normalized
    /// record; no network fetch.
    pub fn plant(&self, id: &str) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    /// Fetch and replace the category list, keeping the sentinel entry
    /// prepended. A failed fetch leaves just the sentinel.
    pub async fn load_categories(&mut self) {
        let raw = self.fetcher.fetch_categories().await;

        let mut categories = vec![Category::all()];
        categories.extend(
            shape::locate_array(raw.as_ref(), Category::ARRAY_PATHS)
                .iter()
                .map(Category::from_raw),
        );

        tracing::debug!(count = categories.len() - 1, "replacing category list");
        self.categories = categories;
    }

    /// Issue a plant load for the given selection. No caching: issuing
    /// the same selection twice fetches twice.
    pub fn begin_plants_load(&self, selection: Selection) -> PlantsLoad {
        let seq = self.issued_seq.fetch_add(1, Ordering::Relaxed) + 1;
        PlantsLoad { seq, selection }
    }

    /// Fetch the raw payload for an issued load.
    pub async fn fetch_plants(&self, load: &PlantsLoad) -> Option<Value> {
        match &load.selection {
            Selection::All => self.fetcher.fetch_all_plants().await,
            Selection::Category(id) => self.fetcher.fetch_plants_by_category(id).await,
        }
    }

    /// Apply a fetched payload: locate the array, normalize every record
    /// (dropping nulls), and replace the plant list wholesale. Returns
    /// false without touching state when the load is stale, i.e. a newer
    /// load has been issued since this one.
    pub fn apply_plants(&mut self, load: PlantsLoad, raw: Option<Value>) -> bool {
        let latest = self.issued_seq.load(Ordering::Relaxed);
        if load.seq < latest || load.seq <= self.applied_seq {
            tracing::debug!(seq = load.seq, latest, "dropping stale plant load");
            return false;
        }

        let plants: Vec<Plant> = shape::locate_array(raw.as_ref(), Plant::ARRAY_PATHS)
            .iter()
            .filter_map(Plant::from_raw)
            .collect();

        tracing::debug!(seq = load.seq, count = plants.len(), "replacing plant list");
        self.plants = plants;
        self.selection = load.selection;
        self.applied_seq = load.seq;
        true
    }

    /// Issue, fetch and apply in one step. This is the common sequential
    /// path; presentation layers juggling overlapping loads use the
    /// begin/fetch/apply pieces directly.
    pub async fn load_plants(&mut self, selection: Selection) -> bool {
        let load = self.begin_plants_load(selection);
        let raw = self.fetch_plants(&load).await;
        self.apply_plants(load, raw)
    }
}
