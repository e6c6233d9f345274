use super::backend::{StorageBackend, CATEGORIES_KEY, INVENTORY_KEY, THEME_KEY};
use super::{codec, seed};
use crate::error::{Result, StockError};
use crate::model::{Category, Item, ItemPatch, NewCategory, NewItem, Theme};
use tracing::{debug, info, warn};

/// Owns the item and category collections and writes them back to the
/// backend after every mutation.
///
/// A mutation whose write fails is rolled back in memory, so the collections
/// always match what was last persisted.
pub struct InventoryStore<B: StorageBackend> {
    pub(crate) backend: B,
    items: Vec<Item>,
    categories: Vec<Category>,
}

/// Next id for a collection: one past the current maximum, or 1 when empty.
/// Deleting the highest record frees its id for reuse.
fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

impl<B: StorageBackend> InventoryStore<B> {
    /// Load both collections without seeding.
    pub fn with_backend(backend: B) -> Result<Self> {
        let (items, categories) = Self::load(&backend)?;
        Ok(Self {
            backend,
            items,
            categories,
        })
    }

    /// Boot the store: load, and install the sample dataset on a first run.
    ///
    /// A first run is a backend that has never stored either collection. Once
    /// anything has been written, emptied or corrupt collections stay as they
    /// are and the sample data is never installed over them.
    pub fn open(backend: B, seed_on_empty: bool) -> Result<Self> {
        let first_run = Self::is_first_run(&backend)?;
        let mut store = Self::with_backend(backend)?;
        if seed_on_empty && first_run {
            info!("First run, installing sample data");
            store.categories = seed::sample_categories();
            store.items = seed::sample_items();
            store.persist()?;
        }
        Ok(store)
    }

    fn is_first_run(backend: &B) -> Result<bool> {
        Ok(backend.read(INVENTORY_KEY)?.is_none() && backend.read(CATEGORIES_KEY)?.is_none())
    }

    /// Read both collections from `backend`.
    ///
    /// Missing keys yield empty collections. Malformed values are logged and
    /// also yield empty collections; only backend I/O failures are errors.
    pub fn load(backend: &B) -> Result<(Vec<Item>, Vec<Category>)> {
        let items = Self::load_key(backend, INVENTORY_KEY)?;
        let categories = Self::load_key(backend, CATEGORIES_KEY)?;
        debug!(
            items = items.len(),
            categories = categories.len(),
            "Loaded inventory"
        );
        Ok((items, categories))
    }

    fn load_key<T: serde::de::DeserializeOwned>(backend: &B, key: &str) -> Result<Vec<T>> {
        let raw = backend.read(key)?;
        match codec::decode(key, raw.as_deref()) {
            Ok(records) => Ok(records),
            Err(err @ StockError::MalformedPersistedData { .. }) => {
                warn!(key, error = %err, "Discarding malformed persisted data");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Write both collections.
    pub fn persist(&self) -> Result<()> {
        self.persist_items()?;
        self.persist_categories()
    }

    fn persist_items(&self) -> Result<()> {
        debug!(count = self.items.len(), "Persisting inventory");
        self.backend
            .write(INVENTORY_KEY, &codec::encode(&self.items)?)
    }

    fn persist_categories(&self) -> Result<()> {
        debug!(count = self.categories.len(), "Persisting categories");
        self.backend
            .write(CATEGORIES_KEY, &codec::encode(&self.categories)?)
    }

    // --- Items ---

    pub fn list_items(&self) -> &[Item] {
        &self.items
    }

    pub fn get_item(&self, id: u64) -> Result<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StockError::ItemNotFound(id))
    }

    pub fn add_item(&mut self, fields: NewItem) -> Result<Item> {
        self.check_category_exists(&fields.category)?;
        check_price(fields.price)?;

        let item = fields.into_item(next_id(self.items.iter().map(|i| i.id)));
        self.items.push(item.clone());
        if let Err(e) = self.persist_items() {
            self.items.pop();
            return Err(e);
        }
        Ok(item)
    }

    /// Merge `patch` onto the item with `id`.
    pub fn update_item(&mut self, id: u64, patch: ItemPatch) -> Result<Item> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StockError::ItemNotFound(id))?;

        if let Some(category) = &patch.category {
            if *category != self.items[pos].category {
                self.check_category_exists(category)?;
            }
        }
        if let Some(price) = patch.price {
            check_price(price)?;
        }

        let previous = self.items[pos].clone();
        patch.apply(&mut self.items[pos]);
        if let Err(e) = self.persist_items() {
            self.items[pos] = previous;
            return Err(e);
        }
        Ok(self.items[pos].clone())
    }

    /// Remove the item with `id`. Returns whether a record was removed.
    pub fn delete_item(&mut self, id: u64) -> Result<bool> {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return Ok(false);
        };
        let removed = self.items.remove(pos);
        if let Err(e) = self.persist_items() {
            self.items.insert(pos, removed);
            return Err(e);
        }
        Ok(true)
    }

    // --- Categories ---

    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get_category(&self, id: u64) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or(StockError::CategoryNotFound(id))
    }

    /// First category with this exact name. Names are not unique.
    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Number of items referencing the category `name`.
    pub fn category_item_count(&self, name: &str) -> usize {
        self.items.iter().filter(|i| i.category == name).count()
    }

    pub fn add_category(&mut self, fields: NewCategory) -> Result<Category> {
        let category = fields.into_category(next_id(self.categories.iter().map(|c| c.id)));
        self.categories.push(category.clone());
        if let Err(e) = self.persist_categories() {
            self.categories.pop();
            return Err(e);
        }
        Ok(category)
    }

    /// Check that the category with `id` exists and nothing references it.
    pub fn ensure_category_deletable(&self, id: u64) -> Result<&Category> {
        let category = self.get_category(id)?;
        let items = self.category_item_count(&category.name);
        if items > 0 {
            return Err(StockError::CategoryInUse {
                name: category.name.clone(),
                items,
            });
        }
        Ok(category)
    }

    /// Remove the category with `id`, refusing while any item references it.
    pub fn delete_category(&mut self, id: u64) -> Result<Category> {
        self.ensure_category_deletable(id)?;
        let pos = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(StockError::CategoryNotFound(id))?;
        let removed = self.categories.remove(pos);
        if let Err(e) = self.persist_categories() {
            self.categories.insert(pos, removed);
            return Err(e);
        }
        Ok(removed)
    }

    fn check_category_exists(&self, name: &str) -> Result<()> {
        if self.find_category_by_name(name).is_none() {
            return Err(StockError::UnknownCategory(name.to_string()));
        }
        Ok(())
    }

    // --- Theme ---

    /// Stored presentation theme; missing or unreadable values fall back to the default.
    pub fn theme(&self) -> Result<Theme> {
        let raw = self.backend.read(THEME_KEY)?;
        Ok(raw
            .and_then(|value| value.trim().trim_matches('"').parse::<Theme>().ok())
            .unwrap_or_default())
    }

    /// Stores the bare theme name, `light` or `dark`.
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.backend.write(THEME_KEY, theme.as_str())
    }
}

fn check_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(StockError::InvalidField(format!(
            "price must be a non-negative number, got {}",
            price
        )));
    }
    Ok(())
}
