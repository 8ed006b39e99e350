//! Integrationstests für Kurven-Registry und Dateisystem-Speicher.

use ease_curve_editor::core::presets;
use ease_curve_editor::{
    ControlPoint, CurveError, CurveRegistry, CurveSpline, FsBlobStore, Interpolation,
};
use glam::DVec2;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn shaped_curve(name: &str) -> CurveSpline {
    let mut curve = CurveSpline::new(name);
    curve.add_point(
        ControlPoint::new(0.4, 0.9).with_tangents(DVec2::new(-0.15, -0.05), DVec2::new(0.2, 0.1)),
    );
    curve.add_point(ControlPoint::linear(0.8, 0.6));
    curve
}

#[test]
fn test_curves_survive_restart() {
    init_logger();
    let tmp = tempfile::tempdir().unwrap();

    let mut curve = shaped_curve("Ease Out Back");
    {
        let mut registry = CurveRegistry::new(FsBlobStore::open(tmp.path()).unwrap());
        let key = registry.save(&mut curve).unwrap();
        assert_eq!(key, "ease_out_back");
        assert!(tmp.path().join("ease_out_back.json").is_file());
    }

    let mut registry = CurveRegistry::new(FsBlobStore::open(tmp.path()).unwrap());
    let report = registry.load_all().unwrap();
    assert_eq!(report.loaded, 1);
    assert!(report.skipped.is_empty());

    let loaded = registry.curve("ease_out_back").unwrap();
    assert_eq!(loaded.points(), curve.points());
    assert!(!loaded.points()[2].smooth);
}

#[test]
fn test_malformed_file_is_skipped_not_fatal() {
    init_logger();
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("broken.json"), "{\"key\": 5}").unwrap();
    std::fs::write(
        tmp.path().join("legacy.json"),
        r#"{"key":"legacy","name":"Legacy","points":[{"x":0,"y":0},{"x":1,"y":1}]}"#,
    )
    .unwrap();

    let mut registry = CurveRegistry::new(FsBlobStore::open(tmp.path()).unwrap());
    let report = registry.load_all().unwrap();
    assert_eq!(report.loaded, 1);
    assert_eq!(report.skipped, vec!["broken".to_string()]);
    assert!(registry.get("legacy").is_some_and(|c| c.points()[0].smooth));
}

#[test]
fn test_rename_and_delete_on_disk() {
    init_logger();
    let tmp = tempfile::tempdir().unwrap();
    let mut registry = CurveRegistry::new(FsBlobStore::open(tmp.path()).unwrap());
    let mut curve = shaped_curve("First");
    registry.save(&mut curve).unwrap();

    assert!(registry.rename("first", "renamed").unwrap());
    assert!(!tmp.path().join("first.json").exists());
    assert!(tmp.path().join("renamed.json").is_file());

    registry.reload().unwrap();
    assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["renamed"]);

    assert!(registry.delete("renamed").unwrap());
    assert!(!registry.delete("renamed").unwrap());
    assert!(registry.reload().unwrap().loaded == 0);
}

#[test]
fn test_interpolation_through_registry() {
    init_logger();
    let tmp = tempfile::tempdir().unwrap();
    let mut registry = CurveRegistry::new(FsBlobStore::open(tmp.path()).unwrap());
    assert_eq!(registry.register_presets().unwrap(), presets::all().len());

    let steps = Interpolation::Custom("steps".into());
    let mid = steps.interpolate(&registry, 0.5, 100.0, 200.0).unwrap();
    assert!((100.0..=200.0).contains(&mid));
    assert_eq!(steps.interpolate(&registry, 1.0, 100.0, 200.0).unwrap(), 200.0);

    assert_eq!(
        Interpolation::Custom("nope".into()).interpolate(&registry, 0.5, 0.0, 1.0),
        Err(CurveError::CurveNotFound("nope".into()))
    );
}
