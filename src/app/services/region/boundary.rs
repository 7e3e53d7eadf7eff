//! Region boundary geometry and membership tests
//!
//! Wraps the target region's polygon together with a bounding-box
//! approximation and a buffer width. Built once at startup and shared
//! read-only across all classifier invocations.

use std::path::Path;

use geo::{BoundingRect, Contains, EuclideanDistance, MultiPolygon, Point, Polygon, Rect};
use tracing::{debug, info};

use crate::{Error, Result};

/// Immutable region boundary with containment and proximity tests
///
/// Membership comes in three flavors used by different classifiers:
/// exact polygon containment, bounding-box containment, and proximity to
/// the boundary rings within a buffer width (degrees).
#[derive(Debug, Clone)]
pub struct RegionBoundary {
    name: String,
    polygons: MultiPolygon<f64>,
    bbox: Rect<f64>,
    buffer_degrees: f64,
}

impl RegionBoundary {
    /// Build a boundary from resolved geometry
    ///
    /// When no bounding box is supplied it is derived from the polygon
    /// extent.
    pub fn new(
        name: impl Into<String>,
        polygons: MultiPolygon<f64>,
        bbox: Option<Rect<f64>>,
        buffer_degrees: f64,
    ) -> Result<Self> {
        let name = name.into();

        let bbox = match bbox {
            Some(rect) => rect,
            None => polygons.bounding_rect().ok_or_else(|| {
                Error::configuration(format!("region '{}' has empty geometry", name))
            })?,
        };

        Ok(Self {
            name,
            polygons,
            bbox,
            buffer_degrees,
        })
    }

    /// Load a region's geometry by feature name from a GeoJSON
    /// administrative-boundary dataset
    ///
    /// The dataset is expected to be a FeatureCollection whose features
    /// carry a `name` property (Natural Earth admin-1 states/provinces).
    /// A missing region is fatal: no classification can proceed without
    /// the boundary.
    pub fn from_geojson_file(
        path: &Path,
        region_name: &str,
        bbox: Option<Rect<f64>>,
        buffer_degrees: f64,
    ) -> Result<Self> {
        info!(
            "Loading region '{}' from {}",
            region_name,
            path.display()
        );

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;

        let geojson: geojson::GeoJson = content
            .parse()
            .map_err(|e| Error::boundary_format(path.display().to_string(), format!("{}", e)))?;

        let geojson::GeoJson::FeatureCollection(collection) = geojson else {
            return Err(Error::boundary_format(
                path.display().to_string(),
                "expected a FeatureCollection",
            ));
        };

        let feature = collection
            .features
            .into_iter()
            .find(|f| {
                f.properties
                    .as_ref()
                    .and_then(|p| p.get("name"))
                    .and_then(|v| v.as_str())
                    == Some(region_name)
            })
            .ok_or_else(|| Error::unresolved_region(region_name))?;

        let geometry = feature
            .geometry
            .ok_or_else(|| Error::unresolved_region(region_name))?;

        let polygons = multipolygon_from_geojson(geometry.value, path)?;
        debug!(
            "Region '{}' resolved: {} polygon(s)",
            region_name,
            polygons.0.len()
        );

        Self::new(region_name, polygons, bbox, buffer_degrees)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buffer_degrees(&self) -> f64 {
        self.buffer_degrees
    }

    /// Exact polygon containment
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.polygons.contains(&Point::new(longitude, latitude))
    }

    /// Axis-aligned bounding-box containment
    pub fn in_bounding_box(&self, latitude: f64, longitude: f64) -> bool {
        self.bbox.contains(&Point::new(longitude, latitude))
    }

    /// Loose on-land test: polygon containment or bounding box
    pub fn on_land(&self, latitude: f64, longitude: f64) -> bool {
        self.contains(latitude, longitude) || self.in_bounding_box(latitude, longitude)
    }

    /// Distance in degrees from a point to the region's area (zero inside)
    pub fn distance_to_region(&self, latitude: f64, longitude: f64) -> f64 {
        let point = Point::new(longitude, latitude);
        self.polygons
            .0
            .iter()
            .map(|polygon| point.euclidean_distance(polygon))
            .fold(f64::INFINITY, f64::min)
    }

    /// Distance in degrees from a point to the boundary rings
    pub fn distance_to_border(&self, latitude: f64, longitude: f64) -> f64 {
        let point = Point::new(longitude, latitude);
        self.polygons
            .0
            .iter()
            .flat_map(polygon_rings)
            .map(|ring| point.euclidean_distance(ring))
            .fold(f64::INFINITY, f64::min)
    }

    /// Near-land test used by the transition and multi-signal classifiers:
    /// inside the polygon, inside its buffered outline, or within the
    /// buffer width of the border
    pub fn near_land(&self, latitude: f64, longitude: f64) -> bool {
        self.contains(latitude, longitude)
            || self.distance_to_region(latitude, longitude) <= self.buffer_degrees
            || self.distance_to_border(latitude, longitude) < self.buffer_degrees
    }
}

/// All rings of a polygon: exterior plus any interior holes
fn polygon_rings(polygon: &Polygon<f64>) -> impl Iterator<Item = &geo::LineString<f64>> {
    std::iter::once(polygon.exterior()).chain(polygon.interiors().iter())
}

/// Narrow a GeoJSON geometry value to polygon geometry
fn multipolygon_from_geojson(value: geojson::Value, path: &Path) -> Result<MultiPolygon<f64>> {
    let geometry: geo::Geometry<f64> = value
        .try_into()
        .map_err(|e: geojson::Error| {
            Error::boundary_format(path.display().to_string(), format!("{}", e))
        })?;

    match geometry {
        geo::Geometry::Polygon(polygon) => Ok(MultiPolygon(vec![polygon])),
        geo::Geometry::MultiPolygon(polygons) => Ok(polygons),
        other => Err(Error::boundary_format(
            path.display().to_string(),
            format!("expected polygon geometry, got {}", geometry_kind(&other)),
        )),
    }
}

fn geometry_kind(geometry: &geo::Geometry<f64>) -> &'static str {
    match geometry {
        geo::Geometry::Point(_) => "Point",
        geo::Geometry::Line(_) => "Line",
        geo::Geometry::LineString(_) => "LineString",
        geo::Geometry::Polygon(_) => "Polygon",
        geo::Geometry::MultiPoint(_) => "MultiPoint",
        geo::Geometry::MultiLineString(_) => "MultiLineString",
        geo::Geometry::MultiPolygon(_) => "MultiPolygon",
        geo::Geometry::GeometryCollection(_) => "GeometryCollection",
        geo::Geometry::Rect(_) => "Rect",
        geo::Geometry::Triangle(_) => "Triangle",
    }
}
