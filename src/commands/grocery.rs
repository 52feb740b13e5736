use clap::{Args, Subcommand};

use nutriplan_core::{
    AppState, GroceryItem, GroceryItemUpdate, ItemFilters, PriceComparison, PriceLevel, SortKey,
    SortOrder, Store, StoreError, StorePrice,
};

#[derive(Args)]
pub struct GroceryCommand {
    #[command(subcommand)]
    pub command: GrocerySubcommand,
}

#[derive(Subcommand)]
pub enum GrocerySubcommand {
    /// Add an item to the list
    Add {
        /// Item name
        name: String,

        /// Category (defaults to Other)
        #[arg(long, default_value = "Other")]
        category: String,

        /// Quantity
        #[arg(long, short, default_value_t = 1.0)]
        quantity: f64,

        /// Unit (e.g. lbs, ct, gal)
        #[arg(long, short, default_value = "ct")]
        unit: String,

        /// Price per unit
        #[arg(long, short)]
        price: Option<f64>,

        /// Store to buy this item at
        #[arg(long)]
        store: Option<String>,

        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the list with the active filters and sorting
    List {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,

        /// Only show completed (or with =false, open) items
        #[arg(long)]
        completed: Option<bool>,

        /// Only show items assigned to this store
        #[arg(long)]
        store: Option<String>,

        /// Sort by name, category or price
        #[arg(long, default_value = "name")]
        sort: SortKey,

        /// Sort order (asc or desc)
        #[arg(long, default_value = "asc")]
        order: SortOrder,
    },

    /// Change quantity or price of an item
    Update {
        /// Item name
        name: String,

        #[arg(long, short)]
        quantity: Option<f64>,

        #[arg(long, short)]
        price: Option<f64>,
    },

    /// Check or uncheck an item
    Toggle {
        /// Item name
        name: String,
    },

    /// Remove an item from the list
    Remove {
        /// Item name
        name: String,
    },

    /// Remove every checked item
    ClearCompleted,

    /// Import ingredients from the current meal plan
    Import,

    /// Set the grocery budget
    Budget {
        /// Budget amount in dollars
        amount: f64,
    },

    /// Show the running total against the budget
    Total,

    /// List known stores
    Stores,

    /// Add a store to the directory
    AddStore {
        /// Store name
        name: String,

        /// Street address
        address: String,

        /// Distance in miles
        #[arg(long, default_value_t = 0.0)]
        distance: f64,

        /// Rating out of 5
        #[arg(long, default_value_t = 0.0)]
        rating: f64,

        /// Price level (low, medium or high)
        #[arg(long, default_value = "medium")]
        price_level: PriceLevel,
    },

    /// Pick a preferred store (omit the name to clear the selection)
    SelectStore {
        /// Store name
        name: Option<String>,
    },

    /// Record a store's price for an item
    AddPrice {
        /// Item name
        item: String,

        /// Store name
        store: String,

        /// Quoted price
        price: f64,

        /// Discount off the quoted price
        #[arg(long)]
        discount: Option<f64>,

        /// Mark the item as out of stock at this store
        #[arg(long)]
        unavailable: bool,
    },

    /// Compare an item's price across stores
    Compare {
        /// Item name
        item: String,
    },
}

impl GroceryCommand {
    pub fn run(&self, state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            GrocerySubcommand::Add {
                name,
                category,
                quantity,
                unit,
                price,
                store,
                notes,
            } => {
                let mut item = GroceryItem::new(name.clone(), category.clone(), *quantity, unit.clone());
                if let Some(price) = price {
                    item = item.with_price(*price);
                }
                if let Some(store) = store {
                    item = item.with_store(store.clone());
                }
                if let Some(notes) = notes {
                    item = item.with_notes(notes.clone());
                }
                state.grocery.add_custom_category(category.clone());
                state.grocery.add_item(item);
                println!("Added {} to the list", name);
                Ok(())
            }
            GrocerySubcommand::List {
                category,
                completed,
                store,
                sort,
                order,
            } => {
                state.grocery.set_filters(ItemFilters {
                    category: category.clone(),
                    completed: *completed,
                    store: store.clone(),
                });
                state.grocery.set_sorting(*sort, *order);
                let items = state.grocery.visible_items();
                if items.is_empty() {
                    println!("No items match");
                } else {
                    for item in items {
                        println!("{}", item);
                    }
                }
                println!("Total: ${:.2}", state.grocery.current_total);
                Ok(())
            }
            GrocerySubcommand::Update { name, quantity, price } => {
                let id = find_item(state, name)?;
                state.grocery.update_item(
                    id,
                    &GroceryItemUpdate {
                        quantity: *quantity,
                        price: *price,
                        ..Default::default()
                    },
                )?;
                println!("Updated {}", name);
                Ok(())
            }
            GrocerySubcommand::Toggle { name } => {
                let id = find_item(state, name)?;
                let completed = state.grocery.toggle_completed(id)?;
                println!(
                    "{} is now {}",
                    name,
                    if completed { "checked" } else { "unchecked" }
                );
                Ok(())
            }
            GrocerySubcommand::Remove { name } => {
                let id = find_item(state, name)?;
                state.grocery.remove_item(id)?;
                println!("Removed {}", name);
                Ok(())
            }
            GrocerySubcommand::ClearCompleted => {
                let cleared = state.grocery.clear_completed();
                println!("Cleared {} completed item(s)", cleared);
                Ok(())
            }
            GrocerySubcommand::Import => {
                let imported = state.import_plan_to_grocery();
                println!("Imported {} ingredient(s) from the meal plan", imported);
                Ok(())
            }
            GrocerySubcommand::Budget { amount } => {
                state.grocery.set_budget(*amount);
                println!("Budget set to ${:.2}", amount);
                Ok(())
            }
            GrocerySubcommand::Total => {
                println!("Current total: ${:.2}", state.grocery.current_total);
                if state.grocery.total_budget > 0.0 {
                    println!("Budget: ${:.2}", state.grocery.total_budget);
                    println!("Remaining: ${:.2}", state.grocery.budget_remaining());
                }
                Ok(())
            }
            GrocerySubcommand::Stores => {
                if state.grocery.stores.is_empty() {
                    println!("No stores yet");
                    return Ok(());
                }
                for store in &state.grocery.stores {
                    let mark = if state.grocery.selected_store == Some(store.id) {
                        "*"
                    } else {
                        " "
                    };
                    println!("{} {}", mark, store);
                }
                Ok(())
            }
            GrocerySubcommand::AddStore {
                name,
                address,
                distance,
                rating,
                price_level,
            } => {
                let mut stores = state.grocery.stores.clone();
                stores.push(
                    Store::new(name.clone(), address.clone())
                        .with_distance(*distance)
                        .with_rating(*rating)
                        .with_price_level(*price_level),
                );
                state.grocery.set_stores(stores);
                println!("Added store {}", name);
                Ok(())
            }
            GrocerySubcommand::SelectStore { name } => {
                match name {
                    Some(name) => {
                        let id = find_store(state, name)?;
                        state.grocery.set_selected_store(Some(id));
                        println!("Selected store {}", name);
                    }
                    None => {
                        state.grocery.set_selected_store(None);
                        println!("Cleared store selection");
                    }
                }
                Ok(())
            }
            GrocerySubcommand::AddPrice {
                item,
                store,
                price,
                discount,
                unavailable,
            } => {
                let item_id = find_item(state, item)?;
                let store_id = find_store(state, store)?;
                let quote = StorePrice {
                    store_id,
                    store_name: store.clone(),
                    price: *price,
                    available: !unavailable,
                    discount: *discount,
                };
                let mut comparisons = state.grocery.price_comparisons.clone();
                match comparisons.iter_mut().find(|c| c.item_id == item_id) {
                    Some(comparison) => {
                        comparison.stores.retain(|s| s.store_id != store_id);
                        comparison.stores.push(quote);
                    }
                    None => {
                        let mut comparison = PriceComparison::new(item_id);
                        comparison.stores.push(quote);
                        comparisons.push(comparison);
                    }
                }
                state.grocery.set_price_comparisons(comparisons);
                println!("Recorded {} at ${:.2} for {}", store, price, item);
                Ok(())
            }
            GrocerySubcommand::Compare { item } => {
                let item_id = find_item(state, item)?;
                let Some(comparison) = state.grocery.comparison_for(item_id) else {
                    println!("No price data for {}", item);
                    return Ok(());
                };
                for quote in &comparison.stores {
                    let stock = if quote.available { "" } else { " (out of stock)" };
                    println!(
                        "{}: ${:.2}{}",
                        quote.store_name,
                        quote.effective_price(),
                        stock
                    );
                }
                if let Some(cheapest) = comparison.cheapest() {
                    println!(
                        "Cheapest: {} at ${:.2}",
                        cheapest.store_name,
                        cheapest.effective_price()
                    );
                }
                Ok(())
            }
        }
    }
}

fn find_store(state: &AppState, name: &str) -> Result<uuid::Uuid, StoreError> {
    state
        .grocery
        .find_store_by_name(name)
        .map(|store| store.id)
        .ok_or_else(|| StoreError::RequestFailed(format!("No store named '{}'", name)))
}

fn find_item(state: &AppState, name: &str) -> Result<uuid::Uuid, StoreError> {
    state
        .grocery
        .find_by_name(name)
        .map(|item| item.id)
        .ok_or_else(|| StoreError::RequestFailed(format!("No grocery item named '{}'", name)))
}
