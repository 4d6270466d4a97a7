//! Full pipeline tests against GeoTIFF scenes written to temp directories.

use std::collections::HashSet;

use band_store::{BandStore, BandStoreConfig};
use image::ImageFormat;
use index_common::{BoundingBox, IndexError};
use index_processor::IndexService;
use renderer::CLASSES;
use test_utils::{bbox, column_ramp, layout, RasterLayout, SceneFixture};

fn to_bbox(b: (f64, f64, f64, f64)) -> BoundingBox {
    BoundingBox::new(b.0, b.1, b.2, b.3)
}

fn service_for(scene: &SceneFixture) -> IndexService {
    IndexService::new(BandStore::new(BandStoreConfig::from_paths(scene.paths.clone())))
}

fn decode(png: &[u8]) -> image::RgbaImage {
    image::load_from_memory_with_format(png, ImageFormat::Png)
        .expect("valid PNG")
        .to_rgba8()
}

fn class_colors() -> HashSet<[u8; 4]> {
    CLASSES
        .iter()
        .map(|c| [c.color[0], c.color[1], c.color[2], 255])
        .collect()
}

// ============================================================================
// Successful requests
// ============================================================================

#[test]
fn test_ndvi_end_to_end() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let service = service_for(&scene);

    let bundle = service
        .compute("ndvi", &to_bbox(bbox::SCENE_REQUEST))
        .unwrap();

    assert_eq!(bundle.bounds, [50.0, 10.0, 50.1, 10.1]);
    assert_eq!(bundle.index_name, "NDVI");

    let stats = bundle.stats.unwrap();
    assert!(stats.min <= stats.max);
    assert!(stats.min >= -1.0 && stats.max <= 1.0);

    let image = decode(&bundle.image);
    assert_eq!(image.dimensions(), (100, 100));
    let palette = class_colors();
    assert!(image.pixels().all(|p| palette.contains(&p.0)));

    let legend = decode(&bundle.colorbar);
    assert_eq!(legend.dimensions(), (240, 40));
}

#[test]
fn test_every_index_computes() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let service = service_for(&scene);
    let request = to_bbox(bbox::SCENE_CORNER);

    for name in ["NDVI", "ndwi", "Evi", "savi", "GNDVI"] {
        let bundle = service.compute(name, &request).unwrap();
        assert_eq!(bundle.index_name, name.to_uppercase());
        assert!(bundle.stats.is_some(), "{} has no stats", name);
    }
}

#[test]
fn test_partial_overlap_renders_clipped_extent() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let bundle = service_for(&scene)
        .compute("savi", &to_bbox(bbox::SCENE_EAST_OVERLAP))
        .unwrap();

    // Bounds echo the request even though only half of it has data
    assert_eq!(bundle.bounds, [50.0, 10.1, 50.1, 10.3]);
    assert_eq!(decode(&bundle.image).dimensions(), (50, 100));
}

#[test]
fn test_larger_optional_band_is_truncated_to_common_shape() {
    // Blue covers one extra column east and one extra row south
    let wide = RasterLayout::new(11, 11, 0.0, 10.0, 1.0);
    let blue = column_ramp(11, 11, 300, 900);
    let blue_top_left: Vec<u16> = blue
        .chunks(11)
        .take(10)
        .flat_map(|row| row[..10].to_vec())
        .collect();

    let mut scene = SceneFixture::sentinel2(layout::SIMPLE_10X10);
    scene.write_band("B02", &wide, &blue);
    let mut reference = SceneFixture::sentinel2(layout::SIMPLE_10X10);
    reference.write_band("B02", &layout::SIMPLE_10X10, &blue_top_left);

    let request = BoundingBox::new(0.0, -1.0, 11.0, 10.0);
    let bundle = service_for(&scene).compute("evi", &request).unwrap();
    let expected = service_for(&reference).compute("evi", &request).unwrap();

    assert_eq!(decode(&bundle.image).dimensions(), (10, 10));
    assert_eq!(bundle.stats, expected.stats);
    assert_eq!(decode(&bundle.image), decode(&expected.image));
}

#[test]
fn test_missing_optional_band_degrades() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    scene.remove_band_file("B11");

    let service = service_for(&scene);
    let request = to_bbox(bbox::SCENE_REQUEST);

    let ndwi = service.compute("ndwi", &request).unwrap();
    let ndvi = service.compute("ndvi", &request).unwrap();

    // SWIR falls back to red, which reduces NDWI to NDVI
    assert_eq!(ndwi.index_name, "NDWI");
    assert_eq!(ndwi.stats, ndvi.stats);
    assert_eq!(ndwi.image, ndvi.image);
}

#[test]
fn test_corrupt_optional_band_degrades() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    scene.corrupt_band_file("B03");
    let service = service_for(&scene);
    let request = to_bbox(bbox::SCENE_REQUEST);

    let gndvi = service.compute("gndvi", &request).unwrap();
    let ndvi = service.compute("ndvi", &request).unwrap();
    assert_eq!(gndvi.stats, ndvi.stats);
}

#[test]
fn test_unused_optional_band_is_not_read() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    scene.corrupt_band_file("B02");
    scene.corrupt_band_file("B03");
    scene.corrupt_band_file("B11");

    let result = service_for(&scene).compute("ndvi", &to_bbox(bbox::SCENE_REQUEST));
    assert!(result.is_ok());
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unknown_index_fails_before_io() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    for code in ["B04", "B08"] {
        scene.corrupt_band_file(code);
    }

    let err = service_for(&scene)
        .compute("foo", &to_bbox(bbox::SCENE_REQUEST))
        .unwrap_err();
    assert!(matches!(err, IndexError::UnknownIndex(ref name) if name == "foo"));
    assert_eq!(err.http_status_code(), 400);
}

#[test]
fn test_missing_nir_file() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    scene.remove_band_file("B08");

    let err = service_for(&scene)
        .compute("ndvi", &to_bbox(bbox::SCENE_REQUEST))
        .unwrap_err();
    assert!(matches!(err, IndexError::MissingBand(_)));
}

#[test]
fn test_nir_not_configured() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let mut paths = scene.paths.clone();
    paths.remove("B08");
    let service = IndexService::new(BandStore::new(BandStoreConfig::from_paths(paths)));

    for index in ["ndvi", "evi"] {
        let err = service
            .compute(index, &to_bbox(bbox::SCENE_REQUEST))
            .unwrap_err();
        assert!(matches!(err, IndexError::MissingBand(_)));
    }
}

#[test]
fn test_corrupt_mandatory_band() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    scene.corrupt_band_file("B04");

    let err = service_for(&scene)
        .compute("ndvi", &to_bbox(bbox::SCENE_REQUEST))
        .unwrap_err();
    assert!(matches!(err, IndexError::DataAccess(_)));
    assert_eq!(err.http_status_code(), 500);
}

#[test]
fn test_disjoint_bbox_is_geometry_error() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let err = service_for(&scene)
        .compute("ndvi", &to_bbox(bbox::DISJOINT))
        .unwrap_err();
    assert!(matches!(err, IndexError::Geometry(_)));
}

#[test]
fn test_sliver_bbox_is_geometry_error() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let err = service_for(&scene)
        .compute("ndvi", &to_bbox(bbox::SLIVER))
        .unwrap_err();
    assert!(matches!(err, IndexError::Geometry(_)));
}

#[test]
fn test_inverted_bbox_rejected() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let err = service_for(&scene)
        .compute("ndvi", &BoundingBox::new(10.1, 50.0, 10.0, 50.1))
        .unwrap_err();
    assert!(matches!(err, IndexError::InvalidBbox(_)));
}
