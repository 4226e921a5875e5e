mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{TestResult, assert_contains_once, body_section, position};
use htmlgen::prelude::*;
use htmlgen::{ChartError, DependencyRegistry};

#[test]
fn chart_without_data_fails_when_rendered() {
    let chart = BarChart::new();
    match chart.node() {
        Err(ChartError::NoData { chart }) => assert_eq!(chart, "bar_chart"),
        other => panic!("expected NoData, got {other:?}"),
    }
}

#[test]
fn chart_on_page_pulls_in_library_once() -> TestResult {
    let mut first = LineChart::new().id("first");
    first.add(1.0);
    first.add(2.0);
    let mut second = LineChart::new().id("second").color("#e74c3c");
    second.add(3.0);

    let mut page = Page::new();
    page.add(first.node()?)?;
    page.add(second.node()?)?;

    let html = page.html();
    assert_contains_once(&html, "cdn.jsdelivr.net/npm/apexcharts");
    let body = body_section(&page);
    assert!(position(&body, "<div id=\"first\">") < position(&body, "<div id=\"second\">"));
    assert!(position(&body, "chart_second.render();") < position(&body, "npm/apexcharts"));
    assert!(body.contains("\"#e74c3c\""));
    Ok(())
}

#[test]
fn render_with_registry_registers_dependency() -> TestResult {
    let mut chart = TimeseriesLineChart::new().id("cpu").name("load");
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    for i in 0..5 {
        chart.add(start + Duration::minutes(i), i as f64 * 1.5);
    }

    let mut registry = DependencyRegistry::new();
    let html = chart.render(Some(&mut registry))?;
    assert!(registry.has_dependency(Dependency::ApexChartsJs));
    assert!(html.contains("\"datetime\""));
    assert!(html.contains("\"name\": \"load\""));
    Ok(())
}

#[test]
fn render_without_registry_produces_same_markup() -> TestResult {
    let mut chart = BarChart::new().id("sales").height("400");
    chart.add("North", 4.0);
    chart.add("South", 6.0);

    let mut registry = DependencyRegistry::new();
    let attached = chart.render(Some(&mut registry))?;
    let detached = chart.render(None)?;
    assert_eq!(attached, detached);
    assert!(detached.contains("\"categories\": [\n      \"North\",\n      \"South\"\n    ]"));
    assert!(detached.contains("\"height\": 400"));
    Ok(())
}

#[test]
fn chart_error_converts_into_crate_error() {
    fn build() -> Result<String, HtmlGenError> {
        Ok(LineChart::new().render(None)?)
    }
    let err = build().unwrap_err();
    assert_eq!(err.to_string(), "Chart error: line_chart: no data added");
}
