mod common;

use common::{TestResult, assert_contains_once, body_section, position};
use htmlgen::prelude::*;

fn sample() -> Table {
    Table::new()
        .id("people")
        .with_caption("People")
        .header_row(header_row(["Name", "Age"]))
        .body_row(row(["Ada", "36"]))
        .body_row(row(["Alan", "41"]))
        .footer_row(Tr::new().child(Td::new().colspan(2).text("2 people")))
}

#[test]
fn empty_table() {
    assert_eq!(Table::new().html(), "<table>\n</table>\n");
}

#[test]
fn rows_without_sections_are_written_directly() {
    let table = Table::new().child(row(["Cell 1"]));
    assert_eq!(
        table.html(),
        "<table>\n<tr>\n<td>Cell 1</td>\n</tr>\n</table>\n"
    );
}

#[test]
fn sections_are_written_in_fixed_order() {
    let html = sample().html();
    let caption = position(&html, "<caption>");
    let thead = position(&html, "<thead>");
    let tbody = position(&html, "<tbody>");
    let tfoot = position(&html, "<tfoot>");
    assert!(caption < thead);
    assert!(thead < tbody);
    assert!(tbody < tfoot);
    assert!(html.starts_with("<table id=\"people\">\n<caption>\nPeople</caption>\n"));
    assert!(html.ends_with("</tfoot>\n</table>\n"));
}

#[test]
fn empty_sections_are_skipped() {
    let html = Table::new().body_row(row(["x"])).html();
    assert!(!html.contains("<thead>"));
    assert!(!html.contains("<caption>"));
    assert!(!html.contains("<tfoot>"));
    assert_eq!(html, "<table>\n<tbody>\n<tr>\n<td>x</td>\n</tr>\n</tbody>\n</table>\n");
}

#[test]
fn copied_table_keeps_sections() -> TestResult {
    let table = sample();
    let mut page = Page::new();
    page.add(table.clone())?;
    page.add(table.clone())?;

    let html = page.html();
    assert_eq!(html.matches("<thead>").count(), 2);
    assert_eq!(html.matches("<td colspan=\"2\">2 people</td>").count(), 2);
    Ok(())
}

#[test]
fn table_in_group_keeps_its_type() -> TestResult {
    let mut div = Div::new();
    div.add(Group::new().with(sample()))?;
    assert!(div.element().at(0)?.is::<Table>());
    assert!(div.html().contains("<tbody>"));
    Ok(())
}

#[test]
fn sections_can_be_edited_in_place() -> TestResult {
    let mut table = sample();
    table.tbody_mut().add(row(["Grace", "45"]))?;
    assert_eq!(table.tbody().len(), 3);
    assert!(table.html().contains("<td>Grace</td>"));
    Ok(())
}

#[test]
fn chart_in_section_cell_registers_with_page() -> TestResult {
    let mut chart = LineChart::new().id("trend");
    chart.add(3.0);
    chart.add(5.0);
    let table = Table::new()
        .header_row(header_row(["Trend"]))
        .body_row(Tr::new().child(Td::new().child(chart.node()?)));

    let mut page = Page::new();
    page.add(table)?;
    assert!(!page.has_dependency(Dependency::ApexChartsJs));

    let html = page.html();
    assert_contains_once(&html, "cdn.jsdelivr.net/npm/apexcharts");
    let body = body_section(&page);
    assert!(position(&body, "<tbody>") < position(&body, "<div id=\"trend\">"));
    assert!(position(&body, "chart_trend.render();") < position(&body, "npm/apexcharts"));
    Ok(())
}
