//! Startup load failures must degrade independently, never crash.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

use subnota::classify::RegionCategory;
use subnota::config::AppConfig;
use subnota::dataset::DatasetSource;
use subnota::egui_app::controller::AppController;
use subnota::egui_app::state::{PanelBodyView, PanelState};
use subnota::geo;

const GEOMETRY: &str = r#"{
    "features": [
        { "properties": { "name": "São Paulo" },
          "geometry": { "type": "Polygon",
                        "coordinates": [[[ -53.0, -25.0 ], [ -44.0, -25.0 ], [ -47.0, -20.0 ]]] } },
        { "properties": { "name": "Bahia" },
          "geometry": { "type": "Polygon",
                        "coordinates": [[[ -46.0, -18.0 ], [ -37.0, -18.0 ], [ -41.0, -9.0 ]]] } }
    ]
}"#;

fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{}", addr)
}

fn http_ok(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    )
}

#[test]
fn missing_dataset_file_renders_every_state_as_no_data() {
    let mut controller = AppController::new();
    controller.load_dataset(&DatasetSource::File(PathBuf::from("missing/dados.json")));
    controller.install_geometry(geo::parse(GEOMETRY.as_bytes()).unwrap());

    assert!(controller.store().is_empty());
    assert_eq!(controller.features().len(), 2);
    for feature in controller.features() {
        assert_eq!(feature.category, RegionCategory::NoData);
    }

    // Clicking still opens a panel with a non-empty reason.
    controller.click_feature(0);
    let PanelState::Open(view) = &controller.ui.panel else {
        panic!("expected open panel");
    };
    let PanelBodyView::NoData { reason } = &view.body else {
        panic!("expected no-data body");
    };
    assert!(!reason.is_empty());
}

#[test]
fn dataset_http_failure_degrades_to_empty_store() {
    let url = serve_once("HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\n\r\n".into());
    let mut controller = AppController::new();
    controller.load_dataset(&DatasetSource::Url(url));
    assert!(controller.store().is_empty());
}

#[test]
fn geometry_failure_leaves_the_dataset_usable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dados.json");
    std::fs::write(
        &path,
        r#"[{ "code": "SP", "name": "São Paulo",
             "metrics": { "reported_count": 1, "underreporting_rate": 51.0 } }]"#,
    )
    .unwrap();

    let mut controller = AppController::new();
    controller.load_dataset(&DatasetSource::File(path));
    controller.mark_geometry_unavailable();

    assert!(controller.ui.map.unavailable);
    assert!(controller.features().is_empty());
    assert_eq!(controller.store().len(), 1);

    controller.open_region(0);
    assert!(controller.ui.panel.is_open());
}

#[test]
fn startup_loads_both_resources_over_http() {
    let dataset_body = r#"[{ "code": "BA", "name": "Bahia",
        "metrics": { "reported_count": 42, "underreporting_rate": 87.5 } }]"#;
    let dataset_url = serve_once(http_ok(dataset_body));
    let geometry_url = serve_once(http_ok(GEOMETRY));

    let config = AppConfig {
        dataset_url: Some(dataset_url),
        geometry_url,
        ..AppConfig::default()
    };

    let mut controller = AppController::new();
    controller.load_startup(&config);

    assert!(!controller.ui.map.unavailable);
    assert_eq!(controller.store().len(), 1);
    assert_eq!(controller.features().len(), 2);
    // São Paulo has no record now; Bahia is rated.
    assert_eq!(controller.features()[0].category, RegionCategory::NoData);
    assert!(matches!(
        controller.features()[1].category,
        RegionCategory::Rated(_)
    ));
}

#[test]
fn startup_survives_both_loads_failing() {
    let config = AppConfig {
        dataset_url: Some("http://127.0.0.1:1/dados.json".into()),
        geometry_url: "http://127.0.0.1:1/geo.json".into(),
        ..AppConfig::default()
    };
    let mut controller = AppController::new();
    controller.load_startup(&config);
    assert!(controller.store().is_empty());
    assert!(controller.ui.map.unavailable);
    assert!(!controller.ui.panel.is_open());
}
