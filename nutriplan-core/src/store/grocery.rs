//! Grocery list state: items, categories, stores, price comparisons,
//! filters and the running total.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::models::{
    GroceryItem, GroceryItemUpdate, ItemFilters, PriceComparison, SortKey, SortOrder, Store,
};
use crate::store::error::StoreError;

fn default_categories() -> Vec<String> {
    [
        "Fruits & Vegetables",
        "Meat & Seafood",
        "Dairy & Eggs",
        "Pantry Staples",
        "Frozen Foods",
        "Beverages",
        "Snacks",
        "Health & Beauty",
        "Household",
        "Other",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// The grocery list slice.
///
/// `current_total` is maintained incrementally: every mutation adjusts it
/// by the affected item's price x quantity delta instead of re-summing the
/// list. That only holds if all mutations go through these methods, so
/// `recomputed_total` exposes the ground truth for invariant checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryList {
    pub items: Vec<GroceryItem>,
    pub categories: Vec<String>,
    pub stores: Vec<Store>,
    pub price_comparisons: Vec<PriceComparison>,
    pub selected_store: Option<Uuid>,
    pub total_budget: f64,
    pub current_total: f64,
    pub filters: ItemFilters,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl Default for GroceryList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            categories: default_categories(),
            stores: Vec::new(),
            price_comparisons: Vec::new(),
            selected_store: None,
            total_budget: 0.0,
            current_total: 0.0,
            filters: ItemFilters::default(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl GroceryList {
    /// Add an item to the list, returning its id.
    pub fn add_item(&mut self, item: GroceryItem) -> Uuid {
        let id = item.id;
        self.current_total += item.line_total();
        self.items.push(item);
        id
    }

    /// Apply a partial update, adjusting the running total by the
    /// before/after delta of the item's line total.
    pub fn update_item(&mut self, id: Uuid, update: &GroceryItemUpdate) -> Result<(), StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))?;
        let before = item.line_total();
        update.apply(item);
        let after = item.line_total();
        self.current_total = self.current_total - before + after;
        Ok(())
    }

    pub fn remove_item(&mut self, id: Uuid) -> Result<GroceryItem, StoreError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))?;
        let item = self.items.remove(index);
        self.current_total -= item.line_total();
        Ok(item)
    }

    /// Flip the completed flag. The running total is unaffected; completed
    /// items still count toward it until they are removed or cleared.
    pub fn toggle_completed(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))?;
        item.is_completed = !item.is_completed;
        Ok(item.is_completed)
    }

    /// Remove every completed item, returning how many were cleared.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        for item in self.items.iter().filter(|item| item.is_completed) {
            self.current_total -= item.line_total();
        }
        self.items.retain(|item| !item.is_completed);
        before - self.items.len()
    }

    /// Empty the list entirely.
    pub fn clear(&mut self) {
        self.items.clear();
        self.current_total = 0.0;
    }

    /// Add a user-defined category if it is not already present.
    pub fn add_custom_category(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.categories.contains(&name) {
            self.categories.push(name);
        }
    }

    /// Replace the store directory. A stale selection is dropped.
    pub fn set_stores(&mut self, stores: Vec<Store>) {
        self.stores = stores;
        if let Some(selected) = self.selected_store {
            if !self.stores.iter().any(|store| store.id == selected) {
                self.selected_store = None;
            }
        }
    }

    pub fn set_selected_store(&mut self, store_id: Option<Uuid>) {
        self.selected_store = store_id;
    }

    pub fn set_price_comparisons(&mut self, comparisons: Vec<PriceComparison>) {
        self.price_comparisons = comparisons;
    }

    pub fn comparison_for(&self, item_id: Uuid) -> Option<&PriceComparison> {
        self.price_comparisons
            .iter()
            .find(|comparison| comparison.item_id == item_id)
    }

    pub fn find_store_by_name(&self, name: &str) -> Option<&Store> {
        let name = name.to_lowercase();
        self.stores.iter().find(|store| store.name.to_lowercase() == name)
    }

    pub fn set_budget(&mut self, amount: f64) {
        self.total_budget = amount;
    }

    pub fn budget_remaining(&self) -> f64 {
        self.total_budget - self.current_total
    }

    pub fn set_filters(&mut self, filters: ItemFilters) {
        self.filters = filters;
    }

    pub fn set_sorting(&mut self, key: SortKey, order: SortOrder) {
        self.sort_key = key;
        self.sort_order = order;
    }

    /// Items matching the active filters, in the active sort order.
    pub fn visible_items(&self) -> Vec<&GroceryItem> {
        let mut visible: Vec<&GroceryItem> = self
            .items
            .iter()
            .filter(|item| {
                if let Some(category) = &self.filters.category {
                    if &item.category != category {
                        return false;
                    }
                }
                if let Some(completed) = self.filters.completed {
                    if item.is_completed != completed {
                        return false;
                    }
                }
                if let Some(store) = &self.filters.store {
                    if item.store.as_ref() != Some(store) {
                        return false;
                    }
                }
                true
            })
            .collect();
        visible.sort_by(|a, b| {
            let ordering = match self.sort_key {
                SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                SortKey::Category => a.category.cmp(&b.category),
                SortKey::Price => a
                    .price
                    .unwrap_or(0.0)
                    .partial_cmp(&b.price.unwrap_or(0.0))
                    .unwrap_or(Ordering::Equal),
                SortKey::Store => a
                    .store
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .cmp(&b.store.as_deref().unwrap_or("").to_lowercase()),
            };
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        visible
    }

    /// One-shot import of meal-plan ingredients. An incoming item whose
    /// name (case-insensitive) and category match an existing line merges
    /// into it by adding quantities; everything else lands as a new line
    /// with a fresh id.
    pub fn import_from_meal_plan(&mut self, incoming: Vec<GroceryItem>) {
        for item in incoming {
            let existing = self.items.iter_mut().find(|existing| {
                existing.name.to_lowercase() == item.name.to_lowercase()
                    && existing.category == item.category
            });
            match existing {
                Some(existing) => {
                    existing.quantity += item.quantity;
                    // Charged at the incoming item's own price, matching
                    // the add path for brand-new lines.
                    self.current_total += item.line_total();
                }
                None => {
                    let mut item = item;
                    item.id = Uuid::new_v4();
                    item.is_completed = false;
                    self.current_total += item.line_total();
                    self.items.push(item);
                }
            }
        }
    }

    /// Ground-truth total from the item list itself.
    pub fn recomputed_total(&self) -> f64 {
        self.items.iter().map(|item| item.line_total()).sum()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&GroceryItem> {
        let name = name.to_lowercase();
        self.items.iter().find(|item| item.name.to_lowercase() == name)
    }
}
