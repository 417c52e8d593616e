//! [Driving directions][1] endpoint.
//!
//! [1]: https://lbs.amap.com/api/webservice/guide/api/direction

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::amap::Coordinate;

#[must_use]
#[derive(Builder, Serialize)]
pub struct DrivingRequest<'a> {
    pub origin: &'a Coordinate,
    pub destination: &'a Coordinate,
    pub extensions: Extensions,
}

/// Response detail level.
#[derive(Copy, Clone, Serialize)]
#[must_use]
pub enum Extensions {
    /// Distance and duration only.
    #[serde(rename = "base")]
    Base,

    /// Adds per-step instructions, traffic conditions and traffic lights.
    #[serde(rename = "all")]
    All,
}

#[derive(Deserialize)]
#[must_use]
pub struct Directions {
    pub route: Route,
}

#[derive(Debug, Deserialize)]
#[must_use]
pub struct Route {
    /// Alternative paths, best first.
    #[serde(default)]
    pub paths: Vec<Path>,
}

#[derive(Debug, Deserialize)]
#[must_use]
pub struct Path {
    /// Total distance in meters.
    #[serde(with = "crate::serde::u64_from_text")]
    pub distance: u64,

    /// Total duration in seconds.
    #[serde(with = "crate::serde::u64_from_text")]
    pub duration: u64,

    #[serde(default, with = "crate::serde::option_u64_from_text")]
    pub traffic_lights: Option<u64>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[must_use]
pub struct Step {
    pub instruction: String,

    /// Traffic segments, present with [`Extensions::All`].
    #[serde(default)]
    pub tmcs: Vec<Tmc>,
}

impl Step {
    /// Qualitative traffic-condition label of the step, e.g. 畅通 or 拥堵.
    #[must_use]
    pub fn traffic_status(&self) -> Option<&str> {
        self.tmcs.first().map(|tmc| tmc.status.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[must_use]
pub struct Tmc {
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{amap::AmapResponse, prelude::Result};

    #[test]
    fn driving_request_query_ok() -> Result {
        let origin = Coordinate::new("116.48,39.99");
        let destination = Coordinate::new("116.43,39.90");
        let request = DrivingRequest::builder()
            .origin(&origin)
            .destination(&destination)
            .extensions(Extensions::All)
            .build();
        assert_eq!(
            serde_qs::to_string(&request)?,
            "origin=116.48%2C39.99&destination=116.43%2C39.90&extensions=all",
        );
        Ok(())
    }

    #[test]
    fn directions_response_ok() -> Result {
        // Trimmed from an actual `extensions=all` response.
        // language=json
        let response: AmapResponse<Directions> = serde_json::from_str(
            r#"{
                "status": "1",
                "info": "OK",
                "count": "1",
                "route": {
                    "origin": "116.48,39.99",
                    "destination": "116.43,39.90",
                    "paths": [{
                        "distance": "12345",
                        "duration": "1800",
                        "traffic_lights": "5",
                        "steps": [
                            {
                                "instruction": "向西南行驶112米右转",
                                "tmcs": [{"status": "畅通", "distance": "112"}]
                            },
                            {
                                "instruction": "沿阜通东大街行驶1.2公里",
                                "tmcs": [{"status": "缓行", "distance": "1200"}]
                            }
                        ]
                    }]
                }
            }"#,
        )?;
        let route = response.into_result()?.route;
        let path = &route.paths[0];
        assert_eq!(path.distance, 12345);
        assert_eq!(path.duration, 1800);
        assert_eq!(path.traffic_lights, Some(5));
        assert_eq!(path.steps[1].traffic_status(), Some("缓行"));
        Ok(())
    }

    #[test]
    fn base_response_ok() -> Result {
        // language=json
        let response: AmapResponse<Directions> = serde_json::from_str(
            r#"{
                "status": "1",
                "info": "OK",
                "route": {"paths": [{"distance": "500", "duration": "120", "steps": []}]}
            }"#,
        )?;
        let path = &response.into_result()?.route.paths[0];
        assert_eq!(path.distance, 500);
        assert_eq!(path.traffic_lights, None);
        Ok(())
    }
}
