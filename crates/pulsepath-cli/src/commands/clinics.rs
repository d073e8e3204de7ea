use pulsepath_core::Config;
use pulsepath_providers::{PlacesClient, PlacesQuery, PlacesSearcher};

use super::fail;

pub async fn run(config: &Config, lat: f64, lng: f64, radius: Option<u32>) -> anyhow::Result<()> {
    config.validate_places()?;
    let client = PlacesClient::from_config(&config.places)?;

    let mut query = PlacesQuery::new(lat, lng);
    if let Some(radius) = radius {
        query = query.with_radius(radius);
    }

    match client.nearby(&query).await {
        Ok(body) => println!("{}", body),
        Err(e) => fail(e),
    }

    Ok(())
}
