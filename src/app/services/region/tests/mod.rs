//! Test geometry and fixtures for region membership tests

use geo::{coord, LineString, MultiPolygon, Polygon, Rect};
use std::io::Write;
use tempfile::NamedTempFile;

use super::RegionBoundary;


/// A unit square from (0,0) to (10,10) in lon/lat space
pub fn square_region(buffer_degrees: f64) -> RegionBoundary {
    let square = Polygon::new(
        LineString::from(vec![
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]),
        vec![],
    );
    RegionBoundary::new("Square", MultiPolygon(vec![square]), None, buffer_degrees).unwrap()
}

/// The same square with a wider, offset bounding box supplied explicitly
pub fn square_region_with_wide_bbox(buffer_degrees: f64) -> RegionBoundary {
    let square = Polygon::new(
        LineString::from(vec![
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]),
        vec![],
    );
    let bbox = Rect::new(coord! { x: -5.0, y: -5.0 }, coord! { x: 15.0, y: 15.0 });
    RegionBoundary::new(
        "Square",
        MultiPolygon(vec![square]),
        Some(bbox),
        buffer_degrees,
    )
    .unwrap()
}

/// A GeoJSON FeatureCollection with one named square feature
pub fn create_geojson_fixture() -> NamedTempFile {
    let content = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "name": "Testland" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "name": "Elsewhere" },
      "geometry": {
        "type": "Point",
        "coordinates": [50.0, 50.0]
      }
    }
  ]
}"#;
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
