//! [Geocoding][1] endpoint.
//!
//! [1]: https://lbs.amap.com/api/webservice/guide/api/georegeo

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::amap::Coordinate;

#[must_use]
#[derive(Builder, Serialize)]
pub struct GeocodeRequest<'a> {
    pub address: &'a str,
}

#[derive(Deserialize)]
#[must_use]
pub struct Geocodes {
    #[serde(default)]
    pub geocodes: Vec<Geocode>,
}

#[derive(Deserialize)]
#[must_use]
pub struct Geocode {
    pub location: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{amap::AmapResponse, prelude::Result};

    #[test]
    fn geocode_response_ok() -> Result {
        // Trimmed from an actual `/v3/geocode/geo` response.
        // language=json
        let response: AmapResponse<Geocodes> = serde_json::from_str(
            r#"{
                "status": "1",
                "info": "OK",
                "count": "1",
                "geocodes": [{
                    "formatted_address": "北京市朝阳区阜通东大街6号",
                    "province": "北京市",
                    "location": "116.483038,39.990633",
                    "level": "门牌号"
                }]
            }"#,
        )?;
        let geocodes = response.into_result()?.geocodes;
        assert_eq!(geocodes.len(), 1);
        assert_eq!(geocodes[0].location.as_str(), "116.483038,39.990633");
        Ok(())
    }

    #[test]
    fn empty_result_set_ok() -> Result {
        // language=json
        let response: AmapResponse<Geocodes> = serde_json::from_str(
            r#"{"status": "1", "info": "OK", "count": "0", "geocodes": []}"#,
        )?;
        assert!(response.into_result()?.geocodes.is_empty());
        Ok(())
    }
}
