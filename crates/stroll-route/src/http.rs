//! Async client for an external pedestrian routing service.
//!
//! Only this module performs I/O, and only it is asynchronous.  The planner
//! never awaits: fetch a [`LegMatrix`] for the candidate pool first, then
//! pass the matrix to the synchronous planner as its provider.
//!
//! The client speaks the OSRM HTTP API:
//!
//! | Call             | Endpoint                                                    |
//! |------------------|-------------------------------------------------------------|
//! | single leg       | `GET {base}/route/v1/{profile}/{lon},{lat};{lon},{lat}`     |
//! | full matrix      | `GET {base}/table/v1/{profile}/{lon},{lat};…`               |

use async_trait::async_trait;
use serde::Deserialize;

use stroll_core::Coordinate;

use crate::{Leg, LegMatrix, RouteError, RouteResult};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Leg estimator backed by a remote service.
#[async_trait]
pub trait AsyncRouteDistanceProvider: Send + Sync {
    async fn leg(&self, from: Coordinate, to: Coordinate) -> RouteResult<Leg>;

    /// Every ordered pair of `points`.  The default issues one request per
    /// pair; services with a matrix endpoint should override it.
    async fn matrix(&self, points: &[Coordinate]) -> RouteResult<LegMatrix> {
        let mut matrix = LegMatrix::with_capacity(points.len());
        for &from in points {
            for &to in points {
                if from == to {
                    continue;
                }
                matrix.insert(from, to, self.leg(from, to).await?);
            }
        }
        Ok(matrix)
    }
}

// ── OSRM client ───────────────────────────────────────────────────────────────

pub struct OsrmFootClientParams {
    /// Service root, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Routing profile; `foot` for pedestrian data sets.
    pub profile:  String,
}

impl OsrmFootClientParams {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), profile: "foot".to_owned() }
    }
}

pub struct OsrmFootClient {
    params: OsrmFootClientParams,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct RouteResponse {
    code:   String,
    #[serde(default)]
    routes: Vec<RouteSummary>,
}

#[derive(Deserialize)]
struct RouteSummary {
    /// Metres.
    distance: f64,
    /// Seconds.
    duration: f64,
}

#[derive(Deserialize)]
struct TableResponse {
    code:      String,
    #[serde(default)]
    durations: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    distances: Vec<Vec<Option<f64>>>,
}

impl OsrmFootClient {
    pub fn new(params: OsrmFootClientParams) -> Self {
        Self { params, client: reqwest::Client::new() }
    }

    fn url(&self, service: &str, points: &[Coordinate]) -> String {
        let coords = points
            .iter()
            .map(|c| format!("{},{}", c.longitude, c.latitude))
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{}/{service}/v1/{}/{coords}",
            self.params.base_url.trim_end_matches('/'),
            self.params.profile
        )
    }
}

fn leg_from_osrm(distance_m: f64, duration_s: f64) -> Leg {
    Leg {
        distance_km:    distance_m / 1000.0,
        travel_minutes: (duration_s / 60.0).ceil() as u32,
    }
}

#[async_trait]
impl AsyncRouteDistanceProvider for OsrmFootClient {
    #[tracing::instrument(skip(self))]
    async fn leg(&self, from: Coordinate, to: Coordinate) -> RouteResult<Leg> {
        let response = self
            .client
            .get(self.url("route", &[from, to]))
            .query(&[("overview", "false")])
            .send()
            .await?
            .error_for_status()?;

        let data: RouteResponse = response.json().await?;
        if data.code != "Ok" {
            return Err(RouteError::Upstream(format!("route service answered {}", data.code)));
        }

        let route = data
            .routes
            .first()
            .ok_or_else(|| RouteError::Upstream("route response has no routes".into()))?;
        Ok(leg_from_osrm(route.distance, route.duration))
    }

    #[tracing::instrument(skip(self, points), fields(points = points.len()))]
    async fn matrix(&self, points: &[Coordinate]) -> RouteResult<LegMatrix> {
        if points.len() < 2 {
            return Ok(LegMatrix::new());
        }

        let response = self
            .client
            .get(self.url("table", points))
            .query(&[("annotations", "duration,distance")])
            .send()
            .await?
            .error_for_status()?;

        let data: TableResponse = response.json().await?;
        if data.code != "Ok" {
            return Err(RouteError::Upstream(format!("table service answered {}", data.code)));
        }

        let n = points.len();
        if data.durations.len() != n || data.distances.len() != n {
            return Err(RouteError::Upstream(format!(
                "table response is not {n}x{n}"
            )));
        }

        let mut matrix = LegMatrix::with_capacity(n);
        for (i, &from) in points.iter().enumerate() {
            for (j, &to) in points.iter().enumerate() {
                let duration = data.durations[i].get(j).copied().flatten();
                let distance = data.distances[i].get(j).copied().flatten();
                // Unreachable pairs come back as null; leave them out so the
                // planner reports a missing leg instead of a zero one.
                if let (Some(distance), Some(duration)) = (distance, duration) {
                    matrix.insert(from, to, leg_from_osrm(distance, duration));
                }
            }
        }

        tracing::debug!(legs = matrix.len(), "fetched leg matrix");
        Ok(matrix)
    }
}
