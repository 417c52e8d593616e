//! [Place search][1] endpoint.
//!
//! [1]: https://lbs.amap.com/api/webservice/guide/api/search

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::amap::Coordinate;

/// Search radius around the center, in meters.
pub const SEARCH_RADIUS: u32 = 1000;

/// Page size. Only the first page is ever requested.
pub const PAGE_SIZE: u32 = 20;

#[must_use]
#[derive(Builder, Serialize)]
pub struct TextSearchRequest<'a> {
    pub keywords: &'a str,
    pub location: &'a Coordinate,

    #[builder(default = SEARCH_RADIUS)]
    pub radius: u32,

    /// Page size, up to 25.
    #[builder(default = PAGE_SIZE)]
    pub offset: u32,

    #[builder(default = 1)]
    pub page: u32,
}

#[derive(Deserialize)]
#[must_use]
pub struct Pois {
    #[serde(default)]
    pub pois: Vec<Poi>,
}

/// Point of interest: a named place with an address.
#[derive(Debug, Deserialize)]
#[must_use]
pub struct Poi {
    pub name: String,

    #[serde(default, with = "crate::serde::lenient_text")]
    pub address: String,

    /// Distance from the search center, in meters.
    #[serde(default, with = "crate::serde::option_u64_from_text")]
    pub distance: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{amap::AmapResponse, prelude::Result};

    #[test]
    fn search_request_query_ok() -> Result {
        let location = Coordinate::new("116.48,39.99");
        let request = TextSearchRequest::builder().keywords("咖啡").location(&location).build();
        assert_eq!(
            serde_qs::to_string(&request)?,
            "keywords=%E5%92%96%E5%95%A1&location=116.48%2C39.99&radius=1000&offset=20&page=1",
        );
        Ok(())
    }

    #[test]
    fn pois_response_ok() -> Result {
        // language=json
        let response: AmapResponse<Pois> = serde_json::from_str(
            r#"{
                "status": "1",
                "info": "OK",
                "count": "2",
                "pois": [
                    {
                        "name": "星巴克(望京店)",
                        "address": "阜通东大街6号院3号楼",
                        "location": "116.482086,39.990496",
                        "distance": "156"
                    },
                    {
                        "name": "瑞幸咖啡",
                        "address": [],
                        "location": "116.480656,39.989542",
                        "distance": ""
                    }
                ]
            }"#,
        )?;
        let pois = response.into_result()?.pois;
        assert_eq!(pois.len(), 2);
        assert_eq!(pois[0].distance, Some(156));
        assert_eq!(pois[1].distance, None);
        Ok(())
    }
}
