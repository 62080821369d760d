use super::*;
use pretty_assertions::assert_eq;

#[test]
fn parses_signed_integers() {
    assert_eq!(parse_int_line("42"), Ok(42));
    assert_eq!(parse_int_line("-39\n"), Ok(-39));
    assert_eq!(parse_int_line("7\r\n"), Ok(7));
}

#[test]
fn rejects_extraneous_characters() {
    assert_eq!(
        parse_int_line(" 42"),
        Err(InputError::NotAnInteger {
            line: " 42".to_string()
        })
    );
    assert_eq!(
        parse_int_line("4 2\n"),
        Err(InputError::NotAnInteger {
            line: "4 2".to_string()
        })
    );
    assert_eq!(
        parse_int_line(""),
        Err(InputError::NotAnInteger {
            line: String::new()
        })
    );
}

#[test]
fn rejects_out_of_range() {
    assert!(parse_int_line("99999999999999999999").is_err());
}

#[test]
fn buffer_serves_lines_in_order_then_exhausts() {
    let handler = buffer_input(["1", "x"]);
    assert_eq!(handler.remaining(), Some(2));
    assert_eq!(handler.read_int(), Ok(1));
    assert_eq!(
        handler.read_int(),
        Err(InputError::NotAnInteger {
            line: "x".to_string()
        })
    );
    assert_eq!(handler.read_int(), Err(InputError::Exhausted));
}

#[test]
fn buffer_accepts_more_lines() {
    let handler = BufferInputHandler::new(Vec::<String>::new());
    handler.push_line("5");
    assert_eq!(handler.remaining(), 1);
    assert_eq!(handler.read_line(), Ok("5".to_string()));
}
