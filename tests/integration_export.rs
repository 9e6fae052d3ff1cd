use offthehook::export::html::HtmlEncoder;
use offthehook::{build_table, Color, DocumentEncoder, Exporter, GridState};
use scraper::{Html, Selector};

fn sample_grid() -> GridState {
    let mut grid = GridState::new(2, 3, 10).unwrap();
    grid.paint(0, Color::Rgb(0xff, 0, 0));
    grid.paint(5, Color::Rgb(0, 0, 0xff));
    grid
}

#[test]
fn html_export_parses_as_table() {
    let table = build_table(&sample_grid(), "Off <the> Hook");
    let bytes = HtmlEncoder::new().encode(&table).unwrap();
    let doc = Html::parse_document(&String::from_utf8(bytes).unwrap());

    let h1 = Selector::parse("h1").unwrap();
    let heading: String = doc.select(&h1).next().unwrap().text().collect();
    assert_eq!(heading, "Off <the> Hook");

    let tr = Selector::parse("tr").unwrap();
    let td = Selector::parse("td").unwrap();
    assert_eq!(doc.select(&tr).count(), 2);
    let fills: Vec<&str> = doc
        .select(&td)
        .filter_map(|cell| cell.value().attr("bgcolor"))
        .collect();
    assert_eq!(
        fills,
        ["#FF0000", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#0000FF"]
    );
}

#[tokio::test]
async fn async_export_matches_sync_export() {
    let table = build_table(&sample_grid(), "Off the Hook");
    let direct = HtmlEncoder::new().encode(&table).unwrap();

    let exporter = Exporter::with_encoder(Box::new(HtmlEncoder::new()));
    let via_worker = exporter.export(table).await.unwrap();
    assert_eq!(direct, via_worker);
    exporter.close().await.unwrap();
}

#[cfg(feature = "docx")]
#[tokio::test]
async fn default_exporter_produces_docx() {
    let exporter = Exporter::new();
    assert_eq!(exporter.extension(), "docx");
    let bytes = exporter
        .export(build_table(&sample_grid(), "Off the Hook"))
        .await
        .unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
