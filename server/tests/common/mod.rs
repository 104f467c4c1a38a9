#![allow(dead_code)]

use std::sync::Arc;

use server::store::Store;
use server::{endpoints, AppContext, Config};
use shared::HousingLocationInfo;

pub fn sample_locations() -> Vec<HousingLocationInfo> {
    vec![
        HousingLocationInfo {
            id: 0,
            name: "Acme Fresh Start Housing".to_owned(),
            city: "Chicago".to_owned(),
            state: "IL".to_owned(),
            photo: "https://example.com/acme.jpg".to_owned(),
            available_units: 4,
            wifi: true,
            laundry: true,
        },
        HousingLocationInfo {
            id: 1,
            name: "A113 Transitional Housing".to_owned(),
            city: "Santa Monica".to_owned(),
            state: "CA".to_owned(),
            photo: "https://example.com/a113.jpg".to_owned(),
            available_units: 0,
            wifi: false,
            laundry: true,
        },
        HousingLocationInfo {
            id: 2,
            name: "Warm Beds Housing Support".to_owned(),
            city: "Juneau".to_owned(),
            state: "AK".to_owned(),
            photo: "https://example.com/warm-beds.jpg".to_owned(),
            available_units: 1,
            wifi: false,
            laundry: false,
        },
    ]
}

/// Boots the full router on an ephemeral port and returns its base URL.
pub async fn spawn_app(locations: Vec<HousingLocationInfo>) -> anyhow::Result<String> {
    let config = Config {
        bind: "127.0.0.1:0".parse()?,
        data_file: "unused".into(),
        api_url: Some("http://localhost:3000".parse()?),
        spa_dist: None,
    };
    let context = AppContext {
        config: Arc::new(config),
        store: Store::from_locations(locations),
    };
    let app = endpoints::app(context);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("test server task");
    });
    Ok(format!("http://{addr}"))
}
