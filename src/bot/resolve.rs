//! Turns parsed place names into coordinates.

use async_trait::async_trait;

use crate::{
    amap::{Amap, Coordinate},
    bot::error::{CommandError, CommandResult},
    db::fixed_location::FixedLocation,
    prelude::*,
};

/// Narrow geocoding seam so that resolution is testable without HTTP.
#[async_trait]
pub trait Geocoder {
    /// Resolve a free-text place name, [`None`] meaning no hit.
    async fn resolve(&self, place: &str) -> Result<Option<Coordinate>>;
}

#[async_trait]
impl Geocoder for Amap {
    async fn resolve(&self, place: &str) -> Result<Option<Coordinate>> {
        Ok(self.geocode(place).await?)
    }
}

/// A resolved end of the route.
#[derive(Debug)]
#[must_use]
pub struct Endpoint {
    pub name: String,
    pub coordinate: Coordinate,
}

/// Resolve the origin and destination of a route query.
///
/// Without an explicit origin the fixed location steps in, its stored
/// coordinate reused without re-geocoding. Resolution runs origin first and
/// short-circuits on the first failure, so the destination is never looked up
/// for nothing.
pub async fn resolve_endpoints(
    geocoder: &impl Geocoder,
    fixed: Option<FixedLocation>,
    origin: Option<String>,
    destination: String,
) -> CommandResult<(Endpoint, Endpoint)> {
    let origin = match origin {
        Some(name) => resolve_one(geocoder, name).await?,
        None => {
            let fixed = fixed.ok_or(CommandError::MissingFixedLocation)?;
            Endpoint { name: fixed.name, coordinate: fixed.coordinate }
        }
    };
    let destination = resolve_one(geocoder, destination).await?;
    Ok((origin, destination))
}

pub async fn resolve_one(
    geocoder: &impl Geocoder,
    name: String,
) -> CommandResult<Endpoint> {
    match geocoder.resolve(&name).await.map_err(CommandError::Transport)? {
        Some(coordinate) => Ok(Endpoint { name, coordinate }),
        None => Err(CommandError::PlaceNotFound(name)),
    }
}
