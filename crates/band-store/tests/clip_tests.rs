//! Clip and alignment tests against GeoTIFF fixtures on disk.

use std::collections::BTreeMap;

use band_store::{align, clip, BandSource, BandStore, BandStoreConfig, BandStoreError};
use index_common::{BandRole, BoundingBox};
use test_utils::{
    assert_approx_eq, bbox, create_test_grid, layout, write_geotiff_f32, RasterLayout,
    SceneFixture,
};

fn to_bbox(b: (f64, f64, f64, f64)) -> BoundingBox {
    BoundingBox::new(b.0, b.1, b.2, b.3)
}

fn scene_store(scene: &SceneFixture) -> BandStore {
    BandStore::new(BandStoreConfig::from_paths(scene.paths.clone()))
}

// ============================================================================
// Clip window tests
// ============================================================================

#[test]
fn test_clip_request_box_shape_and_transform() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let store = scene_store(&scene);
    let source = store.require_role(BandRole::Red).unwrap();

    let clipped = clip(&source, &to_bbox(bbox::SCENE_REQUEST)).unwrap();

    assert_eq!(clipped.code, "B04");
    assert_eq!(clipped.shape(), (100, 100));
    assert_approx_eq!(clipped.transform.origin_x, 10.0, 1e-9);
    assert_approx_eq!(clipped.transform.origin_y, 50.1, 1e-9);
    assert_approx_eq!(clipped.transform.pixel_width, 0.001, 1e-12);
    assert_approx_eq!(clipped.transform.pixel_height, -0.001, 1e-12);
}

#[test]
fn test_clip_reads_the_right_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.tiff");
    let layout = layout::SCENE;
    write_geotiff_f32(&path, &layout, &create_test_grid(layout.width, layout.height)).unwrap();

    let source = BandSource {
        code: "PATTERN".to_string(),
        path,
    };
    let clipped = clip(&source, &to_bbox(bbox::SCENE_CORNER)).unwrap();

    // Corner box starts at column 10, row 10 of the scene
    assert_eq!(clipped.shape(), (40, 40));
    assert_eq!(clipped.grid.get(0, 0), Some((10 * 1000 + 10) as f32));
    assert_eq!(clipped.grid.get(39, 39), Some((49 * 1000 + 49) as f32));
}

#[test]
fn test_clip_partial_overlap_is_cropped_to_extent() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let source = scene_store(&scene).require_role(BandRole::Nir).unwrap();

    let clipped = clip(&source, &to_bbox(bbox::SCENE_EAST_OVERLAP)).unwrap();
    assert_eq!(clipped.shape(), (100, 50));
    assert_approx_eq!(clipped.transform.origin_x, 10.1, 1e-9);
}

#[test]
fn test_clip_disjoint_box() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let source = scene_store(&scene).require_role(BandRole::Red).unwrap();

    let result = clip(&source, &to_bbox(bbox::DISJOINT));
    assert!(matches!(result, Err(BandStoreError::NoIntersection { .. })));
}

#[test]
fn test_clip_sliver_box_has_no_pixels() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let source = scene_store(&scene).require_role(BandRole::Red).unwrap();

    let result = clip(&source, &to_bbox(bbox::SLIVER));
    assert!(matches!(result, Err(BandStoreError::EmptyClip(_))));
}

#[test]
fn test_clip_corrupt_file() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    scene.corrupt_band_file("B04");
    let source = scene_store(&scene).require_role(BandRole::Red).unwrap();

    let result = clip(&source, &to_bbox(bbox::SCENE_REQUEST));
    assert!(matches!(result, Err(BandStoreError::Decode(_))));
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalized_red_reflectance() {
    let scene = SceneFixture::sentinel2(layout::SCENE);
    let source = scene_store(&scene).require_role(BandRole::Red).unwrap();

    let normalized = clip(&source, &to_bbox(bbox::SCENE_REQUEST))
        .unwrap()
        .normalize();

    // Red fixture is a constant 1000 DN
    assert!(normalized.grid.data().iter().all(|&v| (v - 0.1).abs() < 1e-6));
}

// ============================================================================
// Alignment of independently clipped bands
// ============================================================================

#[test]
fn test_align_bands_clipped_from_different_grids() {
    let dir = tempfile::tempdir().unwrap();

    // Same origin and resolution, different sizes
    let big = RasterLayout::new(12, 12, 0.0, 12.0, 1.0);
    let narrow = RasterLayout::new(9, 12, 0.0, 12.0, 1.0);
    let short = RasterLayout::new(12, 10, 0.0, 12.0, 1.0);

    let mut sources = Vec::new();
    for (name, layout) in [("big", big), ("narrow", narrow), ("short", short)] {
        let path = dir.path().join(format!("{}.tiff", name));
        write_geotiff_f32(&path, &layout, &create_test_grid(layout.width, layout.height)).unwrap();
        sources.push(BandSource {
            code: name.to_string(),
            path,
        });
    }

    let request = BoundingBox::new(0.0, 0.0, 12.0, 12.0);
    let mut grids = BTreeMap::new();
    for source in &sources {
        let clipped = clip(source, &request).unwrap();
        grids.insert(source.code.clone(), clipped.grid);
    }
    assert_eq!(grids["narrow"].shape(), (12, 9));
    assert_eq!(grids["short"].shape(), (10, 12));

    let aligned = align(grids);
    for grid in aligned.values() {
        assert_eq!(grid.shape(), (10, 9));
        // Top-left anchored: pixel (r, c) keeps its original value
        assert_eq!(grid.get(9, 8), Some((8 * 1000 + 9) as f32));
    }
}
