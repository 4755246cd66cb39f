//! Controller-level flows: open, drill down, and close the detail panel.

use subnota::dataset::{DatasetSource, DatasetStore};
use subnota::egui_app::controller::AppController;
use subnota::egui_app::state::{MunicipalityDetailView, PanelBodyView, PanelState};
use subnota::geo;

const DATA: &str = r#"[
    {
        "code": "SC",
        "name": "Santa Catarina",
        "status": "benchmark",
        "metrics": { "reported_count": 120000 },
        "municipalities": [
            { "name": "Joinville", "ibge_code": 4209102,
              "yearly": { "2022": { "reported_count": 5000 } } },
            { "name": "Blumenau", "ibge_code": 4202404, "yearly": {} }
        ]
    },
    {
        "code": "SP",
        "name": "São Paulo",
        "metrics": {
            "reported_count": 250000,
            "predicted_count": 700000.0,
            "underreporting_rate": 64.3
        },
        "municipalities": [
            { "name": "Campinas", "ibge_code": 3509502,
              "yearly": {
                  "2023": { "reported_count": 900, "predicted_count": 2500.0, "rate": 63.9 },
                  "2021": { "reported_count": 1000 },
                  "2022": { "reported_count": 950 }
              } }
        ]
    }
]"#;

const GEOMETRY: &str = r#"{
    "features": [
        { "properties": { "name": "Santa Catarina" },
          "geometry": { "type": "Polygon",
                        "coordinates": [[[ -53.0, -29.0 ], [ -48.0, -29.0 ], [ -50.0, -26.0 ]]] } },
        { "properties": { "name": "São Paulo" },
          "geometry": { "type": "Polygon",
                        "coordinates": [[[ -53.0, -25.0 ], [ -44.0, -25.0 ], [ -47.0, -20.0 ]]] } },
        { "properties": { "name": "Rio de Janeiro" },
          "geometry": { "type": "Polygon",
                        "coordinates": [[[ -44.8, -23.3 ], [ -41.0, -23.3 ], [ -42.0, -20.7 ]]] } }
    ]
}"#;

fn controller_with_fixture() -> AppController {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("dados.json");
    std::fs::write(&path, DATA).expect("write dataset fixture");

    let mut controller = AppController::new();
    controller.load_dataset(&DatasetSource::File(path));
    controller.install_geometry(geo::parse(GEOMETRY.as_bytes()).expect("parse geometry"));
    assert_eq!(controller.store().len(), 2);
    controller
}

fn open_region_body(controller: &AppController) -> &PanelBodyView {
    match &controller.ui.panel {
        PanelState::Open(view) => &view.body,
        PanelState::Closed => panic!("expected open panel"),
    }
}

#[test]
fn clicking_a_normal_region_opens_the_metrics_panel() {
    let mut controller = controller_with_fixture();
    controller.click_feature(1);
    let PanelBodyView::Region(region) = open_region_body(&controller) else {
        panic!("expected region body");
    };
    assert!(!region.benchmark);
    assert_eq!(region.metrics.len(), 3);
    assert!(region.selector.is_some());
    assert!(region.detail.is_none());
}

#[test]
fn clicking_the_benchmark_region_shows_only_reported_counts() {
    let mut controller = controller_with_fixture();
    controller.click_feature(0);
    let PanelBodyView::Region(region) = open_region_body(&controller) else {
        panic!("expected region body");
    };
    assert!(region.benchmark);
    assert_eq!(region.metrics.len(), 1);
    assert_eq!(region.metrics[0].value, "120.000");
    assert!(region.note.is_some());
}

#[test]
fn clicking_an_excluded_region_opens_the_reason_panel() {
    let mut controller = controller_with_fixture();
    controller.click_feature(2);
    let PanelBodyView::NoData { reason } = open_region_body(&controller) else {
        panic!("expected no-data body");
    };
    assert!(reason.contains("insuficientes"));
}

#[test]
fn drill_down_renders_sorted_years_and_clears_on_invalid_choice() {
    let mut controller = controller_with_fixture();
    controller.click_feature(1);

    controller.select_municipality(Some(0));
    let PanelBodyView::Region(region) = open_region_body(&controller) else {
        panic!("expected region body");
    };
    let Some(MunicipalityDetailView::Table(table)) = &region.detail else {
        panic!("expected municipality table");
    };
    assert_eq!(table.name, "Campinas");
    let years: Vec<&str> = table.rows.iter().map(|r| r.cells[0].as_str()).collect();
    assert_eq!(years, vec!["2021", "2022", "2023"]);

    controller.select_municipality(None);
    let PanelBodyView::Region(region) = open_region_body(&controller) else {
        panic!("panel must stay open after clearing the selector");
    };
    assert!(region.detail.is_none());
}

#[test]
fn municipality_without_annual_data_gets_the_message() {
    let mut controller = controller_with_fixture();
    controller.click_feature(0);
    controller.select_municipality(Some(1));
    let PanelBodyView::Region(region) = open_region_body(&controller) else {
        panic!("expected region body");
    };
    assert_eq!(
        region.detail,
        Some(MunicipalityDetailView::NoAnnualData {
            name: "Blumenau".into(),
        })
    );
}

#[test]
fn all_close_paths_are_equivalent_and_idempotent() {
    let mut controller = controller_with_fixture();

    // Close control, overlay click, and the cancel key all route to
    // close_panel; exercise repeated closes from each open state.
    for _ in 0..3 {
        controller.click_feature(1);
        assert!(controller.ui.panel.is_open());
        controller.close_panel();
        assert!(!controller.ui.panel.is_open());
        controller.close_panel();
        assert!(!controller.ui.panel.is_open());
    }
}

#[test]
fn selecting_with_no_open_panel_is_a_no_op() {
    let mut controller = controller_with_fixture();
    controller.select_municipality(Some(0));
    assert!(!controller.ui.panel.is_open());
}
