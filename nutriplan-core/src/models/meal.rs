use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::grocery::GroceryItem;
use super::nutrition::NutritionInfo;

/// An ingredient a meal contributes to the grocery list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealIngredient {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub price: Option<f64>,
}

impl MealIngredient {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            unit: unit.into(),
            price: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Draft grocery line for this ingredient (fresh id, not completed).
    pub fn to_grocery_item(&self) -> GroceryItem {
        let item = GroceryItem::new(
            self.name.clone(),
            self.category.clone(),
            self.quantity,
            self.unit.clone(),
        );
        match self.price {
            Some(price) => item.with_price(price),
            None => item,
        }
    }
}

/// A meal from the catalog that can be placed on the weekly grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub nutrition: NutritionInfo,
    pub prep_time_minutes: u32,
    pub ingredients: Vec<MealIngredient>,
}

impl Meal {
    pub fn new(name: impl Into<String>, calories: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
            nutrition: NutritionInfo {
                calories,
                ..Default::default()
            },
            prep_time_minutes: 0,
            ingredients: Vec::new(),
        }
    }

    pub fn with_nutrition(mut self, nutrition: NutritionInfo) -> Self {
        self.nutrition = nutrition;
        self
    }

    pub fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time_minutes = minutes;
        self
    }

    pub fn with_ingredient(mut self, ingredient: MealIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.0} kcal", self.name, self.calories)?;
        if self.prep_time_minutes > 0 {
            write!(f, ", {} min", self.prep_time_minutes)?;
        }
        write!(f, ")")
    }
}
