use serde::{Deserialize, Serialize};

/// Optional filter parameters accepted by `GET /titles`. Each provided
/// parameter narrows the result set; absent (or empty) parameters place no
/// constraint on their field.
#[derive(Debug, Default, Deserialize)]
pub struct TitleFilter {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
}

/// One entry in the route listing served at `/`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RouteInfo {
    pub path: &'static str,
    pub methods: &'static [&'static str],
}
