use gloo_net::http::Request;
use gloo_net::Error;
use shared::{ApplicationRequest, HousingLocationInfo};

use super::with_auth;

/// All housing locations. Network or decode failures are logged here and
/// surfaced as an empty list, never propagated to the caller.
pub async fn get_all_housing_locations(api_url: &str) -> Vec<HousingLocationInfo> {
    match fetch_all(api_url).await {
        Ok(locations) => locations,
        Err(error) => {
            log::warn!("Fail to fetch housing locations, error: {error}");
            Vec::new()
        }
    }
}

/// A single housing location, or `None` when it is unknown or the backend is
/// unreachable.
pub async fn get_housing_location_by_id(api_url: &str, id: i64) -> Option<HousingLocationInfo> {
    match fetch_by_id(api_url, id).await {
        Ok(locations) => locations.into_iter().next(),
        Err(error) => {
            log::warn!("Fail to fetch housing location, id={id}, error: {error}");
            None
        }
    }
}

/// Fire-and-forget application submit.
pub fn submit_application(application: &ApplicationRequest) {
    log::info!(
        "Homes application received: firstName: {}, lastName: {}, email: {}.",
        application.first_name,
        application.last_name,
        application.email,
    );
}

async fn fetch_all(api_url: &str) -> Result<Vec<HousingLocationInfo>, Error> {
    let endpoint = format!("{api_url}/locations");
    let locations = with_auth(Request::get(&endpoint))
        .send()
        .await?
        .json::<Vec<HousingLocationInfo>>()
        .await?;
    Ok(locations)
}

// The mock data server answers id filters json-server style, with a
// possibly empty array.
async fn fetch_by_id(api_url: &str, id: i64) -> Result<Vec<HousingLocationInfo>, Error> {
    let endpoint = format!("{api_url}/locations?id={id}");
    let locations = with_auth(Request::get(&endpoint))
        .send()
        .await?
        .json::<Vec<HousingLocationInfo>>()
        .await?;
    Ok(locations)
}
