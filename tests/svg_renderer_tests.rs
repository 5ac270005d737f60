use spider_chart::core::{Series, Viewport};
use spider_chart::render::{Color, SvgRenderer};
use spider_chart::{ChartError, SpiderChart};

fn rendered_document() -> String {
    let mut chart =
        SpiderChart::new(SvgRenderer::new(), Viewport::new(400, 300)).expect("chart init");
    chart.set_labels(["Speed", "R&D", "Range"]);
    chart.set_data(vec![Series::new(
        vec![3.0, 5.0, 4.0],
        Color::argb(125, 193, 230, 219),
    )]);
    chart.refresh().expect("refresh");
    chart.into_renderer().into_document()
}

#[test]
fn document_declares_viewport() {
    let document = rendered_document();
    assert!(document.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300" viewBox="0 0 400 300">"#
    ));
    assert!(document.trim_end().ends_with("</svg>"));
}

#[test]
fn elements_follow_paint_order() {
    let document = rendered_document();
    assert_eq!(document.matches("<polygon").count(), 5);
    assert_eq!(document.matches("<line").count(), 3);
    assert_eq!(document.matches("<text").count(), 3);

    let first_line = document.find("<line").expect("spoke");
    let last_polygon = document.rfind("<polygon").expect("series");
    let first_text = document.find("<text").expect("label");
    assert!(first_line < last_polygon);
    assert!(last_polygon < first_text);
}

#[test]
fn translucent_series_keeps_its_opacity() {
    let document = rendered_document();
    assert!(document.contains(r#"fill="rgb(193,230,219)" fill-opacity="0.49""#));
}

#[test]
fn label_text_is_escaped() {
    let document = rendered_document();
    assert!(document.contains(">R&amp;D</text>"));
    assert!(document.contains(r#"text-anchor="middle" dominant-baseline="text-after-edge">Speed<"#));
}

#[test]
fn invalid_chart_leaves_document_empty() {
    let mut chart =
        SpiderChart::new(SvgRenderer::new(), Viewport::new(400, 300)).expect("chart init");
    chart.set_labels(["A", "B", "C"]);
    assert_eq!(chart.refresh(), Err(ChartError::MissingData { label_count: 3 }));
    assert!(chart.renderer().document().is_empty());
}
