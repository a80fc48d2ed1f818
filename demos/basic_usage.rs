//! # Basic Usage Example
//!
//! This example demonstrates the fundamental concepts of QueryWire:
//! - Building a query with the chainable `QueryBuilder`
//! - Compiling it into API parameters with the base grammar
//! - Overriding derived parameters through the raw query
//! - Sending it to a search API and reading the normalized response
//!
//! Point `QUERYWIRE_BASE_URL` at a compatible API to run the request part.

use querywire::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 QueryWire Basic Usage Example");

    let query = QueryBuilder::new()
        .select(["id", "title", "artist_display"])
        .search("water lilies")
        .order_by("date_start", SortOrder::Desc)
        .aggregate("types", json!({"terms": {"field": "artwork_type_title"}}))
        .for_page(1, 5)
        .raw("fields", json!("id,title"))
        .build();

    let parameters = BaseGrammar::new().compile(&query)?;
    println!("Compiled parameters:");
    for (name, value) in &parameters {
        println!("  {} = {}", name, value);
    }

    let base_url = std::env::var("QUERYWIRE_BASE_URL")
        .unwrap_or_else(|_| "https://api.artic.edu/api/v1".to_string());
    let api = ApiConsumer::from_config(AppConfig {
        client: ClientConfig::new(base_url).with_header("Accept", "application/json"),
    })?;

    let response = api.get("artworks/search", &query).await?;
    println!("Status: {}", response.status);
    match response.body {
        Some(body) => println!("Body: {}", body),
        None => println!("Body was not JSON"),
    }

    Ok(())
}
