use std::sync::Arc;

use plant_api::CatalogClient;
use storefront::money::format_money;
use storefront::{Cart, Catalog, Selection};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut catalog = Catalog::new(Arc::new(CatalogClient::new()));

    // Startup ordering: categories first, then the unfiltered plant list.
    catalog.load_categories().await;
    catalog.load_plants(Selection::All).await;

    println!("Categories:");
    for category in catalog.categories() {
        println!("  [{}] {}", category.id, category.name);
    }

    println!("\nPlants ({}):", catalog.plants().len());
    if catalog.plants().is_empty() {
        println!("  No plants found.");
    }
    for plant in catalog.plants().iter().take(10) {
        println!(
            "  {} | {} | {}",
            plant.name,
            plant.category,
            format_money(plant.price)
        );
    }

    // Simulate a category switch using the first real category.
    if let Some(category) = catalog.categories().iter().find(|c| !c.is_all()).cloned() {
        catalog
            .load_plants(Selection::from_category_id(&category.id))
            .await;
        println!(
            "\n{} plants in category {:?}",
            catalog.plants().len(),
            category.name
        );
    }

    // Add a couple of plants to the cart, then remove one.
    let mut cart = Cart::new();
    let ids: Vec<String> = catalog.plants().iter().take(2).map(|p| p.id.clone()).collect();
    for id in &ids {
        if let Some(plant) = catalog.plant(id) {
            cart.add(plant);
        }
    }
    let removable = ids.first().and_then(|id| catalog.plant(id)).map(|p| p.clone());
    if let Some(plant) = removable {
        let cart_id = cart.add(&plant);
        cart.remove(cart_id);
    }

    println!("\nCart ({} items):", cart.len());
    for item in cart.items() {
        println!("  {} {}", item.name, format_money(item.price));
    }
    println!("Total: {}", format_money(cart.total()));
}
