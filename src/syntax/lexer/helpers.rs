//! Character classes for lexing

pub(super) fn is_id_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '$' || ch == '_'
}

pub(super) fn is_id_part(ch: char) -> bool {
    is_id_start(ch) || ch.is_numeric() || ch == '\u{200c}' || ch == '\u{200d}'
}

pub(super) fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

pub(super) fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{b}' | '\u{c}' | '\u{a0}' | '\u{feff}')
        || (ch.is_whitespace() && !is_line_terminator(ch))
}
