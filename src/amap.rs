//! Amap (高德地图) Web service API v3.
//!
//! See also: <https://lbs.amap.com/api/webservice/summary>.

pub mod driving;
pub mod error;
pub mod geocode;
pub mod place;

use std::fmt::{Display, Formatter};

use monostate::MustBe;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    amap::{
        driving::{DrivingRequest, Extensions, Route},
        error::Error,
        geocode::GeocodeRequest,
        place::{Poi, TextSearchRequest},
    },
    prelude::{info, instrument},
};

/// Amap API connection.
#[must_use]
#[derive(Clone)]
pub struct Amap {
    client: Client,
    api_key: SecretString,
    root_url: Url,
}

impl Amap {
    pub fn new(client: Client, api_key: SecretString) -> crate::prelude::Result<Self> {
        Ok(Self::with_root_url(client, api_key, Url::parse("https://restapi.amap.com")?))
    }

    pub fn with_root_url(client: Client, api_key: SecretString, root_url: Url) -> Self {
        Self { client, api_key, root_url }
    }

    /// Resolve a free-text place name to a coordinate.
    ///
    /// Returns [`None`] on a non-success status or an empty result set. Only a
    /// transport-level failure (network error, non-2xx, malformed payload) is
    /// an [`Error`].
    #[instrument(skip_all, fields(address = address))]
    pub async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, Error> {
        let request = GeocodeRequest::builder().address(address).build();
        let response: AmapResponse<geocode::Geocodes> =
            self.get("/v3/geocode/geo", &request).await?;
        Ok(response
            .ok()
            .and_then(|payload| payload.geocodes.into_iter().next())
            .map(|geocode| geocode.location))
    }

    /// Search places of interest around the center.
    ///
    /// An empty list is a valid outcome, distinct from a failure.
    #[instrument(skip_all, fields(keywords = request.keywords))]
    pub async fn search_nearby(&self, request: &TextSearchRequest<'_>) -> Result<Vec<Poi>, Error> {
        info!("🔎 Searching…");
        let response: AmapResponse<place::Pois> = self.get("/v3/place/text", request).await?;
        Ok(response.into_result()?.pois)
    }

    /// Plan a driving route between the two coordinates.
    #[instrument(skip_all, fields(origin = %origin, destination = %destination))]
    pub async fn drive(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        extensions: Extensions,
    ) -> Result<Route, Error> {
        let request =
            DrivingRequest::builder().origin(origin).destination(destination).extensions(extensions).build();
        let response: AmapResponse<driving::Directions> =
            self.get("/v3/direction/driving", &request).await?;
        Ok(response.into_result()?.route)
    }

    async fn get<P, R>(&self, path: &str, params: &P) -> Result<R, Error>
    where
        P: Serialize,
        R: serde::de::DeserializeOwned,
    {
        let mut url = self.root_url.clone();
        url.set_path(path);
        url.set_query(Some(&serde_qs::to_string(params)?));
        url.query_pairs_mut().append_pair("key", self.api_key.expose_secret());
        Ok(self.client.get(url).send().await?.error_for_status()?.json().await?)
    }
}

/// Coordinate pair in the provider's `lon,lat` text form.
///
/// Opaque beyond round-tripping it into subsequent requests.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
#[must_use]
pub struct Coordinate(String);

impl Coordinate {
    pub fn new(inner: impl Into<String>) -> Self {
        Self(inner.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Amap API response envelope: `status` is `"1"` on success.
#[derive(Deserialize)]
#[must_use]
#[serde(untagged)]
pub enum AmapResponse<T> {
    Ok {
        #[allow(dead_code)]
        status: MustBe!("1"),

        #[serde(flatten)]
        payload: T,
    },

    Err {
        status: String,
        info: String,
    },
}

impl<T> AmapResponse<T> {
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Ok { payload, .. } => Ok(payload),
            Self::Err { status, info } => Err(Error::Api { status, info }),
        }
    }

    pub fn ok(self) -> Option<T> {
        self.into_result().ok()
    }
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::GET, MockServer};

    use super::*;
    use crate::prelude::Result;

    #[tokio::test]
    async fn search_nearby_sends_the_key_ok() -> Result {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v3/place/text")
                .query_param("keywords", "咖啡")
                .query_param("location", "116.48,39.99")
                .query_param("key", "test-key");
            then.status(200).json_body_obj(&serde_json::json!({
                "status": "1",
                "info": "OK",
                "count": "1",
                "pois": [{
                    "name": "星巴克",
                    "address": "望京街9号",
                    "location": "116.482086,39.990496",
                    "distance": "354"
                }]
            }));
        });

        let amap = Amap::with_root_url(
            crate::client::build()?,
            SecretString::from("test-key".to_string()),
            Url::parse(&server.base_url())?,
        );
        let location = Coordinate::new("116.48,39.99");
        let request = TextSearchRequest::builder().keywords("咖啡").location(&location).build();
        let pois = amap.search_nearby(&request).await?;

        mock.assert();
        assert_eq!(pois.len(), 1);
        assert_eq!(pois[0].name, "星巴克");
        assert_eq!(pois[0].distance, Some(354));
        Ok(())
    }

    #[test]
    fn error_response_ok() -> Result {
        // language=json
        let response: AmapResponse<geocode::Geocodes> = serde_json::from_str(
            r#"{"status": "0", "info": "INVALID_USER_KEY", "infocode": "10001"}"#,
        )?;
        match response {
            AmapResponse::Ok { .. } => unreachable!(),
            AmapResponse::Err { status, info } => {
                assert_eq!(status, "0");
                assert_eq!(info, "INVALID_USER_KEY");
            }
        }
        Ok(())
    }
}
