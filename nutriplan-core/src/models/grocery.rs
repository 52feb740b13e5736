use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::nutrition::NutritionInfo;

/// A single line on the grocery list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub price: Option<f64>,
    pub store: Option<String>,
    pub is_completed: bool,
    pub notes: Option<String>,
    pub nutrition_info: Option<NutritionInfo>,
}

impl GroceryItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            quantity,
            unit: unit.into(),
            price: None,
            store: None,
            is_completed: false,
            notes: None,
            nutrition_info: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = Some(store.into());
        self
    }

    pub fn with_nutrition(mut self, info: NutritionInfo) -> Self {
        self.nutrition_info = Some(info);
        self
    }

    /// Price contribution of this line: price x quantity, 0 when unpriced.
    pub fn line_total(&self) -> f64 {
        self.price.unwrap_or(0.0) * self.quantity
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.is_completed { "[x]" } else { "[ ]" };
        write!(f, "{} {} {} {}", check, self.quantity, self.unit, self.name)?;
        if let Some(price) = self.price {
            write!(f, " (${:.2})", price * self.quantity)?;
        }
        Ok(())
    }
}

/// Partial update for a grocery item. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct GroceryItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub price: Option<f64>,
    pub store: Option<String>,
    pub notes: Option<String>,
}

impl GroceryItemUpdate {
    pub fn apply(&self, item: &mut GroceryItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = &self.unit {
            item.unit = unit.clone();
        }
        if let Some(price) = self.price {
            item.price = Some(price);
        }
        if let Some(store) = &self.store {
            item.store = Some(store.clone());
        }
        if let Some(notes) = &self.notes {
            item.notes = Some(notes.clone());
        }
    }
}

/// Rough price tier of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceLevel::Low => "low",
            PriceLevel::Medium => "medium",
            PriceLevel::High => "high",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for PriceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(PriceLevel::Low),
            "medium" => Ok(PriceLevel::Medium),
            "high" => Ok(PriceLevel::High),
            _ => Err(format!(
                "Invalid price level '{}'. Valid options: low, medium, high",
                s
            )),
        }
    }
}

/// A nearby grocery store that list items can be priced against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub distance_miles: f64,
    pub rating: f64,
    pub price_level: PriceLevel,
}

impl Store {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            distance_miles: 0.0,
            rating: 0.0,
            price_level: PriceLevel::Medium,
        }
    }

    pub fn with_distance(mut self, miles: f64) -> Self {
        self.distance_miles = miles;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_price_level(mut self, level: PriceLevel) -> Self {
        self.price_level = level;
        self
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({:.1} mi, {:.1} stars, {} prices)",
            self.name, self.address, self.distance_miles, self.rating, self.price_level
        )
    }
}

/// One store's quote for an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorePrice {
    pub store_id: Uuid,
    pub store_name: String,
    pub price: f64,
    pub available: bool,
    pub discount: Option<f64>,
}

impl StorePrice {
    /// Price after any discount.
    pub fn effective_price(&self) -> f64 {
        self.price - self.discount.unwrap_or(0.0)
    }
}

/// Per-item quotes across stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceComparison {
    pub item_id: Uuid,
    pub stores: Vec<StorePrice>,
}

impl PriceComparison {
    pub fn new(item_id: Uuid) -> Self {
        Self {
            item_id,
            stores: Vec::new(),
        }
    }

    /// The cheapest quote among stores that actually stock the item.
    pub fn cheapest(&self) -> Option<&StorePrice> {
        self.stores
            .iter()
            .filter(|quote| quote.available)
            .min_by(|a, b| {
                a.effective_price()
                    .partial_cmp(&b.effective_price())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// View filters for the grocery list. `None` means "don't filter".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemFilters {
    pub category: Option<String>,
    pub completed: Option<bool>,
    pub store: Option<String>,
}

/// Field the grocery list view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Category,
    Price,
    Store,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "price" => Ok(SortKey::Price),
            "store" => Ok(SortKey::Store),
            _ => Err(format!(
                "Invalid sort key '{}'. Valid options: name, category, price, store",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order '{}'. Use asc or desc", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grocery_item_new() {
        let item = GroceryItem::new("Milk", "Dairy & Eggs", 2.0, "gal");
        assert_eq!(item.name, "Milk");
        assert_eq!(item.category, "Dairy & Eggs");
        assert!(!item.is_completed);
        assert!(item.price.is_none());
    }

    #[test]
    fn test_line_total() {
        let item = GroceryItem::new("Milk", "Dairy & Eggs", 2.0, "gal").with_price(3.0);
        assert_eq!(item.line_total(), 6.0);

        let unpriced = GroceryItem::new("Basil", "Fruits & Vegetables", 1.0, "bunch");
        assert_eq!(unpriced.line_total(), 0.0);
    }

    #[test]
    fn test_update_apply_partial() {
        let mut item = GroceryItem::new("Milk", "Dairy & Eggs", 1.0, "gal").with_price(3.0);
        let update = GroceryItemUpdate {
            quantity: Some(2.0),
            notes: Some("organic".to_string()),
            ..Default::default()
        };
        update.apply(&mut item);
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.notes.as_deref(), Some("organic"));
        assert_eq!(item.price, Some(3.0));
        assert_eq!(item.name, "Milk");
    }

    #[test]
    fn test_display_with_price() {
        let item = GroceryItem::new("Milk", "Dairy & Eggs", 2.0, "gal").with_price(3.0);
        assert_eq!(format!("{}", item), "[ ] 2 gal Milk ($6.00)");
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!(SortKey::from_str("Price").unwrap(), SortKey::Price);
        assert_eq!(SortKey::from_str("store").unwrap(), SortKey::Store);
        assert!(SortKey::from_str("aisle").is_err());
    }

    #[test]
    fn test_price_level_from_str() {
        assert_eq!(PriceLevel::from_str("Low").unwrap(), PriceLevel::Low);
        assert!(PriceLevel::from_str("bargain").is_err());
    }

    #[test]
    fn test_update_apply_store() {
        let mut item = GroceryItem::new("Milk", "Dairy & Eggs", 1.0, "gal");
        let update = GroceryItemUpdate {
            store: Some("Fresh Mart".to_string()),
            ..Default::default()
        };
        update.apply(&mut item);
        assert_eq!(item.store.as_deref(), Some("Fresh Mart"));
    }

    #[test]
    fn test_cheapest_skips_unavailable_and_applies_discount() {
        let item_id = Uuid::new_v4();
        let mut comparison = PriceComparison::new(item_id);
        comparison.stores.push(StorePrice {
            store_id: Uuid::new_v4(),
            store_name: "Fresh Mart".to_string(),
            price: 2.0,
            available: false,
            discount: None,
        });
        comparison.stores.push(StorePrice {
            store_id: Uuid::new_v4(),
            store_name: "Value Grocer".to_string(),
            price: 3.0,
            available: true,
            discount: Some(0.75),
        });
        comparison.stores.push(StorePrice {
            store_id: Uuid::new_v4(),
            store_name: "Corner Shop".to_string(),
            price: 2.5,
            available: true,
            discount: None,
        });

        let cheapest = comparison.cheapest().unwrap();
        assert_eq!(cheapest.store_name, "Value Grocer");
        assert_eq!(cheapest.effective_price(), 2.25);
    }

    #[test]
    fn test_json_roundtrip() {
        let item = GroceryItem::new("Eggs", "Dairy & Eggs", 12.0, "ct").with_price(0.25);
        let json = serde_json::to_string(&item).unwrap();
        let parsed: GroceryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, item.id);
        assert_eq!(parsed.line_total(), item.line_total());
    }
}
