//! Candidate places as received from the catalogue, and their located form.

use serde::{Deserialize, Serialize};

use crate::{CoreResult, Coordinate, Geometry, PlaceId};

/// A candidate point of interest.  Read-only from the engine's perspective.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id:          PlaceId,
    pub coordinates: Geometry,
}

impl Place {
    pub fn new(id: impl Into<PlaceId>, coordinates: Geometry) -> Self {
        Self { id: id.into(), coordinates }
    }

    /// Extract the coordinate, failing with the place id on bad geometry.
    pub fn locate(&self) -> CoreResult<LocatedPlace> {
        Ok(LocatedPlace {
            id:         self.id.clone(),
            coordinate: self.coordinates.extract(&self.id)?,
        })
    }
}

/// A place whose geometry has already been parsed.  This is what the
/// sequencer, trimmer and metrics aggregator operate on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocatedPlace {
    pub id:         PlaceId,
    pub coordinate: Coordinate,
}

impl LocatedPlace {
    pub fn new(id: impl Into<PlaceId>, coordinate: Coordinate) -> Self {
        Self { id: id.into(), coordinate }
    }
}
