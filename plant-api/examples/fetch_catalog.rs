use plant_api::domain::{shape, Category, Plant};
use plant_api::CatalogClient;

#[tokio::main]
async fn main() {
    let client = CatalogClient::new();

    let raw = client.fetch_categories().await;
    let categories: Vec<Category> = shape::locate_array(raw.as_ref(), Category::ARRAY_PATHS)
        .iter()
        .map(Category::from_raw)
        .collect();

    println!("{} categories:", categories.len());
    for category in &categories {
        println!("  [{}] {}", category.id, category.name);
    }

    let raw = client.fetch_all_plants().await;
    let plants: Vec<Plant> = shape::locate_array(raw.as_ref(), Plant::ARRAY_PATHS)
        .iter()
        .filter_map(Plant::from_raw)
        .collect();

    println!("{} plants:", plants.len());
    for plant in plants.iter().take(10) {
        println!("  {} ({}) at {}", plant.name, plant.category, plant.price);
    }
}
