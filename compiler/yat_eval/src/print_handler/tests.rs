use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_captures_lines() {
    let handler = buffer_handler();
    handler.println("42");
    handler.println("-3");
    assert_eq!(handler.get_output(), "42\n-3\n");
}

#[test]
fn buffer_clear_empties_output() {
    let handler = BufferPrintHandler::new();
    handler.println("1");
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn silent_discards() {
    let handler = silent_handler();
    handler.println("lost");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn stdout_does_not_capture() {
    let handler = stdout_handler();
    assert_eq!(handler.get_output(), "");
    handler.clear();
}
