use super::*;

#[test]
fn buffer_handler_appends_line_terminator() {
    let handler = BufferPrintHandler::new();
    handler.println("7");
    handler.println("[1;0]");
    assert_eq!(handler.get_output(), "7\n[1;0]\n");
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn shared_handle_sees_same_buffer() {
    let handler = buffer_handler();
    let alias = Arc::clone(&handler);
    alias.println("(1,2)");
    assert_eq!(handler.get_output(), "(1,2)\n");
}
