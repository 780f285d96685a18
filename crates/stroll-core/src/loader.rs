//! CSV candidate loader.
//!
//! # CSV format
//!
//! One row per candidate place.  Either a WKT `geometry` column or a pair of
//! `lon`/`lat` columns must be present on each row:
//!
//! ```csv
//! id,geometry
//! cathedral,POINT(13.4010 52.5190)
//! museum,SRID=4326;POINT(13.3977 52.5212)
//! ```
//!
//! ```csv
//! id,lon,lat
//! cathedral,13.4010,52.5190
//! ```
//!
//! Geometry is not validated here; extraction errors surface per place when
//! the path is generated.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{CoreError, CoreResult, Geometry, Place, PlaceId};

#[derive(Deserialize)]
struct PlaceRecord {
    id:       String,
    #[serde(default)]
    geometry: Option<String>,
    #[serde(default)]
    lon:      Option<f64>,
    #[serde(default)]
    lat:      Option<f64>,
}

/// Load candidate places from a CSV file.
pub fn load_places_csv(path: &Path) -> CoreResult<Vec<Place>> {
    let file = std::fs::File::open(path)?;
    load_places_reader(file)
}

/// Like [`load_places_csv`] but accepts any `Read` source.
pub fn load_places_reader<R: Read>(reader: R) -> CoreResult<Vec<Place>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut places = Vec::new();
    for (row, result) in csv_reader.deserialize::<PlaceRecord>().enumerate() {
        let record = result.map_err(|e| CoreError::Parse(e.to_string()))?;
        let coordinates = match (record.geometry, record.lon, record.lat) {
            (Some(wkt), _, _) if !wkt.is_empty() => Geometry::Wkt(wkt),
            (_, Some(lon), Some(lat)) => Geometry::point(lon, lat),
            _ => {
                return Err(CoreError::Parse(format!(
                    "row {}: place {:?} has neither a geometry column nor lon/lat",
                    row + 1,
                    record.id
                )));
            }
        };
        places.push(Place { id: PlaceId(record.id), coordinates });
    }

    tracing::debug!(count = places.len(), "loaded candidate places");
    Ok(places)
}
