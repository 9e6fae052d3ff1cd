//! End-to-end tests for the editor command surface

use offthehook::export::html::HtmlEncoder;
use offthehook::{
    build_table, design, Color, Command, Editor, EditorConfig, Error, LoadMode, Outcome, Tool,
};

fn html_editor() -> Editor {
    Editor::with_encoder(EditorConfig::default(), Box::new(HtmlEncoder::new()))
}

#[test]
fn paint_session_exports_expected_fills() {
    let mut editor = html_editor();
    editor
        .apply(Command::CreateGrid { rows: 2, cols: 2, cell_size: 20 })
        .unwrap();
    editor.apply(Command::SelectColor("#FF0000".parse().unwrap())).unwrap();
    editor.apply(Command::PointerDown(0)).unwrap();
    editor.apply(Command::PointerUp).unwrap();
    editor.apply(Command::SelectColor("#00FF00".parse().unwrap())).unwrap();
    editor.apply(Command::PaintCell(2)).unwrap();

    let table = editor.document_table().unwrap();
    assert_eq!(table.title, "Off the Hook");
    assert_eq!(table.rows.len(), 2);
    assert!(table.rows.iter().all(|r| r.len() == 2));
    let fills: Vec<&str> = table.fills().collect();
    assert_eq!(fills, ["FF0000", "FFFFFF", "00FF00", "FFFFFF"]);
}

#[test]
fn design_file_round_trips_through_disk() {
    let mut editor = html_editor();
    editor
        .apply(Command::CreateGrid { rows: 4, cols: 3, cell_size: 12 })
        .unwrap();
    editor.apply(Command::SelectColor(Color::Rgb(0x11, 0x22, 0x33))).unwrap();
    editor.apply(Command::PointerDown(1)).unwrap();
    for i in [4, 7, 10] {
        editor.apply(Command::PointerEnter(i)).unwrap();
    }
    editor.apply(Command::PointerUp).unwrap();

    let saved = match editor.apply(Command::SaveDesign).unwrap() {
        Outcome::Saved(a) => a,
        other => panic!("unexpected outcome {other:?}"),
    };
    let path = std::env::temp_dir().join(format!("offthehook-{}.json", std::process::id()));
    std::fs::write(&path, &saved.bytes).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut reloaded = html_editor();
    reloaded.apply(Command::LoadDesign(bytes)).unwrap();
    assert_eq!(reloaded.grid(), editor.grid());
    assert_eq!(reloaded.grid().unwrap().painted_count(), 4);
}

#[test]
fn mismatched_design_never_corrupts_grid() {
    let mut editor = html_editor();
    editor
        .apply(Command::CreateGrid { rows: 1, cols: 2, cell_size: 5 })
        .unwrap();
    editor.apply(Command::PaintCell(0)).unwrap();
    let before = editor.grid().cloned();

    let mismatched = br##"{"rows": 3, "cols": 3, "cellSize": 5, "colors": ["#000000", "white"]}"##;
    let err = editor.apply(Command::LoadDesign(mismatched.to_vec())).unwrap_err();
    assert!(matches!(err, Error::SchemaError(_)));
    assert_eq!(editor.grid().cloned(), before);
}

#[test]
fn lenient_editor_repairs_short_designs() {
    let config = EditorConfig {
        load_mode: LoadMode::Lenient,
        ..Default::default()
    };
    let mut editor = Editor::with_encoder(config, Box::new(HtmlEncoder::new()));
    let short = br##"{"rows": 2, "cols": 2, "cellSize": 5, "colors": ["#000000", "white"]}"##;
    editor.apply(Command::LoadDesign(short.to_vec())).unwrap();
    let grid = editor.grid().unwrap();
    assert_eq!(grid.len(), 4);
    assert_eq!(grid.painted_count(), 1);
}

#[test]
fn eraser_toggle_round_trip() {
    let mut editor = html_editor();
    let start = editor.tool();
    editor.apply(Command::ToggleEraser).unwrap();
    assert_eq!(editor.tool(), Tool::Erase);
    editor.apply(Command::ToggleEraser).unwrap();
    assert_eq!(editor.tool(), start);
}

#[test]
fn custom_title_reaches_table() {
    let config = EditorConfig {
        document_title: "Scarf pattern".to_string(),
        ..Default::default()
    };
    let mut editor = Editor::with_encoder(config, Box::new(HtmlEncoder::new()));
    editor
        .apply(Command::CreateGrid { rows: 1, cols: 1, cell_size: 5 })
        .unwrap();
    assert_eq!(editor.document_table().unwrap().title, "Scarf pattern");
}

#[test]
fn loaded_grid_exports_like_painted_grid() {
    let src = r##"{"rows": 2, "cols": 2, "cellSize": 20, "colors": ["#FF0000", "white", "#00FF00", "white"]}"##;
    let grid = design::load(src, LoadMode::Strict).unwrap();
    let table = build_table(&grid, "Off the Hook");
    let fills: Vec<&str> = table.fills().collect();
    assert_eq!(fills, ["FF0000", "FFFFFF", "00FF00", "FFFFFF"]);
}

#[cfg(feature = "docx")]
#[test]
fn default_editor_exports_docx() {
    let mut editor = Editor::new(EditorConfig::default());
    editor
        .apply(Command::CreateGrid { rows: 2, cols: 2, cell_size: 20 })
        .unwrap();
    let artifact = match editor.apply(Command::ExportDocument).unwrap() {
        Outcome::Exported(a) => a,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(artifact.file_name, "off-the-hook.docx");
    assert_eq!(&artifact.bytes[..2], b"PK");
}
