#![allow(clippy::float_cmp)]

use super::*;

fn run(script: &str) -> (EngineCore, Result<usize, CliError>) {
    let mut engine = EngineCore::new();
    let result = replay(&mut engine, script.as_bytes());
    (engine, result)
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn blank_and_comment_lines_are_skipped() {
    let script = "\n# a comment\n   \n{\"event\":\"drop\",\"template\":{\"type\":\"circle\"},\"x\":10,\"y\":20}\n";
    let (engine, result) = run(script);
    assert_eq!(result.unwrap(), 1);
    assert_eq!(engine.shapes().len(), 1);
}

#[test]
fn unknown_event_reports_line_number() {
    let script = "{\"event\":\"undo\"}\n\n{\"event\":\"explode\"}\n";
    let (_, result) = run(script);
    assert!(matches!(result, Err(CliError::Script { line: 3, .. })));
}

#[test]
fn index_past_end_is_an_error() {
    let script = "{\"event\":\"select\",\"index\":0}\n";
    let (_, result) = run(script);
    assert!(matches!(result, Err(CliError::NoShape { line: 1, index: 0, len: 0 })));
}

#[test]
fn malformed_template_is_applied_as_noop() {
    let script = "{\"event\":\"drop\",\"template\":{\"type\":\"hexagon\"},\"x\":1,\"y\":1}\n";
    let (engine, result) = run(script);
    assert_eq!(result.unwrap(), 1);
    assert!(engine.shapes().is_empty());
    assert!(!engine.can_undo());
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn relative_bottom_stacks_waste_bins() {
    let script = r#"
{"event":"drop","template":{"type":"wasteBin","name":"Paper"},"x":100,"y":200}
{"event":"placement","mode":"relativeBottom"}
{"event":"drop","template":{"type":"wasteBin","name":"Glass"},"x":0,"y":0}
"#;
    let (engine, result) = run(script);
    assert_eq!(result.unwrap(), 3);
    let second = &engine.shapes()[1];
    assert_eq!(second.position(), scene::geometry::Point::new(100.0, 253.0));
}

#[test]
fn move_gesture_then_undo() {
    let script = r#"
{"event":"drop","template":{"type":"rectangle"},"x":10,"y":10}
{"event":"gestureStart","index":0,"gesture":"move","x":10,"y":10}
{"event":"gestureMove","x":40,"y":50}
{"event":"gestureMove","x":60,"y":70}
{"event":"gestureEnd"}
"#;
    let (mut engine, result) = run(script);
    result.unwrap();
    assert_eq!(engine.shapes()[0].position(), scene::geometry::Point::new(60.0, 70.0));

    engine.undo();
    assert_eq!(engine.shapes()[0].position(), scene::geometry::Point::new(10.0, 10.0));
}

#[test]
fn keyboard_duplicate_and_delete() {
    let script = r#"
{"event":"drop","template":{"type":"circle"},"x":100,"y":100}
{"event":"select","index":0}
{"event":"keyDown","key":"d","modifiers":{"ctrl":true}}
{"event":"keyDown","key":"Delete"}
"#;
    let (engine, result) = run(script);
    assert_eq!(result.unwrap(), 4);
    assert_eq!(engine.shapes().len(), 1);
    assert_eq!(engine.shapes()[0].position(), scene::geometry::Point::new(150.0, 180.0));
}

#[test]
fn committed_edit_is_one_undo_step() {
    let script = r#"
{"event":"drop","template":{"type":"circle"},"x":0,"y":0}
{"event":"edit","index":0,"edit":{"field":"width","value":90},"commit":true}
{"event":"undo"}
"#;
    let (engine, result) = run(script);
    result.unwrap();
    assert_eq!(engine.shapes()[0].width, None);
    assert!(engine.can_redo());
}

// =============================================================
// Report
// =============================================================

#[test]
fn report_indexes_selection() {
    let script = r#"
{"event":"drop","template":{"type":"circle"},"x":0,"y":0}
{"event":"drop","template":{"type":"circle"},"x":50,"y":0}
{"event":"select","index":1}
"#;
    let (engine, result) = run(script);
    let events = result.unwrap();
    let report = Report::new(&engine, events, false);
    assert_eq!(report.selection, Some(1));
    assert!(report.frame.is_none());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["events"], 3);
    assert_eq!(json["canUndo"], true);
    assert!(json.get("frame").is_none());
}

#[test]
fn report_includes_frame_on_request() {
    let (engine, result) = run("{\"event\":\"addText\",\"text\":\"Gate\"}\n");
    let report = Report::new(&engine, result.unwrap(), true);
    let frame = report.frame.as_ref().unwrap();
    assert_eq!(frame.items.len(), 1);
}
