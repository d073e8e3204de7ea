use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use pulsepath_providers::PlacesQuery;
use serde::{Deserialize, Deserializer};

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClinicsParams {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub radius: Option<u32>,
}

/// `radius=` with no value falls back to the configured default, like an omitted one.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl From<ClinicsParams> for PlacesQuery {
    fn from(params: ClinicsParams) -> Self {
        PlacesQuery {
            lat: params.lat,
            lng: params.lng,
            radius: params.radius,
        }
    }
}

pub async fn clinics(
    State(state): State<AppState>,
    params: std::result::Result<Query<ClinicsParams>, QueryRejection>,
) -> Result<Response> {
    let Query(params) = params?;
    let query = PlacesQuery::from(params);
    let body = state.places.nearby(&query).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
