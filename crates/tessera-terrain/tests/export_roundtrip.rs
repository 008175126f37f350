use tessera_terrain::raster::read_png;
use tessera_terrain::{
    ColorTier, Grid, HeightFieldConfig, HeightFieldGenerator, Seed, export_to_file,
};

fn assert_rgb_round_trips(grid: &Grid) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terrain.png");
    export_to_file(grid, &path).unwrap();

    let decoded = read_png(&path).unwrap();
    assert_eq!(decoded.dimensions(), (grid.width(), grid.depth()));
    for cell in grid.cells() {
        let [r, g, b, _] = decoded.get_pixel(cell.x, cell.z);
        assert_eq!(
            [r, g, b],
            cell.color.rgb(),
            "RGB mismatch at ({}, {})",
            cell.x,
            cell.z
        );
    }
}

#[test]
fn noise_terrain_survives_png_round_trip() {
    let config = HeightFieldConfig {
        width: 50,
        depth: 40,
        max_height: 10.0,
        relief: 6.0,
        ..Default::default()
    };
    let generator = HeightFieldGenerator::with_seed(config, Seed::from_u64(2024)).unwrap();
    let grid = Grid::generate_parallel(&generator, 0);
    assert_rgb_round_trips(&grid);
}

#[test]
fn random_terrain_survives_png_round_trip() {
    let config = HeightFieldConfig {
        width: 16,
        depth: 16,
        use_noise_mode: false,
        ..Default::default()
    };
    let generator = HeightFieldGenerator::new(config).unwrap();
    let grid = Grid::generate(&generator);
    assert!(
        grid.cells()
            .iter()
            .all(|c| (0.0..=10.0).contains(&c.elevation))
    );
    assert_rgb_round_trips(&grid);
}

#[test]
fn live_reconfiguration_then_export() {
    let config = HeightFieldConfig {
        width: 12,
        depth: 9,
        smooth_interpolation: true,
        ..Default::default()
    };
    let generator = HeightFieldGenerator::new(config.clone()).unwrap();
    let grid = Grid::generate(&generator);

    let rougher = generator
        .reconfigure(HeightFieldConfig {
            relief: 2.0,
            smooth_interpolation: false,
            max_height: 4.0,
            ..config
        })
        .unwrap();
    let regenerated = grid.regenerate(&rougher);
    assert_eq!(regenerated.len(), grid.len());
    for cell in regenerated.cells() {
        assert_eq!(cell.elevation, cell.elevation.round());
        assert!(cell.elevation <= 4.0);
        let tier = ColorTier::classify(cell.elevation, rougher.config());
        assert_eq!(cell.color.rgb(), tier.rgb());
    }
    assert_rgb_round_trips(&regenerated);
}

#[test]
fn zero_relief_is_rejected_before_generation() {
    let config = HeightFieldConfig {
        relief: 0.0,
        use_noise_mode: true,
        ..Default::default()
    };
    let err = HeightFieldGenerator::new(config).unwrap_err();
    assert!(err.to_string().starts_with("invalid configuration"));
}
