use extract_errors::syntax::lexer::Lexer;
use extract_errors::syntax::token_type::TokenType;

fn token_types(input: &str) -> Vec<TokenType> {
    Lexer::new(input)
        .tokenize()
        .into_iter()
        .map(|tok| tok.token_type)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_call_tokens() {
        let input = "invariant(cond, 'Expected ' + name);";
        let expected = vec![
            TokenType::Ident,
            TokenType::LParen,
            TokenType::Ident,
            TokenType::Comma,
            TokenType::String,
            TokenType::Plus,
            TokenType::Ident,
            TokenType::RParen,
            TokenType::Semicolon,
            TokenType::Eof,
        ];
        assert_eq!(token_types(input), expected);
    }

    #[test]
    fn string_literals_are_cooked() {
        let mut lexer = Lexer::new(r#"'it\'s' "tab\there" 'a\x41B\u{43}'"#);
        assert_eq!(lexer.next_token().literal, "it's");
        assert_eq!(lexer.next_token().literal, "tab\there");
        assert_eq!(lexer.next_token().literal, "aABC");
    }

    #[test]
    fn line_continuation_contributes_nothing() {
        let mut lexer = Lexer::new("'one \\\ntwo'");
        let tok = lexer.next_token();
        assert_eq!(tok.token_type, TokenType::String);
        assert_eq!(tok.literal, "one two");
    }

    #[test]
    fn template_with_substitutions() {
        let mut lexer = Lexer::new("`a ${b} c ${d} e`");
        let head = lexer.next_token();
        assert_eq!(head.token_type, TokenType::TemplateHead);
        assert_eq!(head.literal, "a ");
        assert_eq!(lexer.next_token().token_type, TokenType::Ident);
        let middle = lexer.next_token();
        assert_eq!(middle.token_type, TokenType::TemplateMiddle);
        assert_eq!(middle.literal, " c ");
        assert_eq!(lexer.next_token().token_type, TokenType::Ident);
        let tail = lexer.next_token();
        assert_eq!(tail.token_type, TokenType::TemplateTail);
        assert_eq!(tail.literal, " e");
        assert_eq!(lexer.next_token().token_type, TokenType::Eof);
    }

    #[test]
    fn nested_braces_inside_substitution() {
        let types = token_types("`x${ {a: 1}.a }y`");
        assert_eq!(
            types,
            vec![
                TokenType::TemplateHead,
                TokenType::LBrace,
                TokenType::Ident,
                TokenType::Colon,
                TokenType::Number,
                TokenType::RBrace,
                TokenType::Dot,
                TokenType::Ident,
                TokenType::TemplateTail,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn slash_is_regex_or_division_by_context() {
        assert_eq!(
            token_types("x = /a+/g.test(y)"),
            vec![
                TokenType::Ident,
                TokenType::Assign,
                TokenType::Regex,
                TokenType::Dot,
                TokenType::Ident,
                TokenType::LParen,
                TokenType::Ident,
                TokenType::RParen,
                TokenType::Eof,
            ]
        );
        assert_eq!(
            token_types("a / b / c"),
            vec![
                TokenType::Ident,
                TokenType::Slash,
                TokenType::Ident,
                TokenType::Slash,
                TokenType::Ident,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn comments_are_skipped_and_set_newline_flag() {
        let mut lexer = Lexer::new("a // trailing\n/* block */ b");
        let a = lexer.next_token();
        assert!(!a.newline_before);
        let b = lexer.next_token();
        assert_eq!(b.literal, "b");
        assert!(b.newline_before);
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            token_types("function typeof invariantX"),
            vec![
                TokenType::Function,
                TokenType::Typeof,
                TokenType::Ident,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn positions_are_line_and_column() {
        let tokens = Lexer::new("a\n  bc").tokenize();
        assert_eq!((tokens[0].position.line, tokens[0].position.column), (1, 0));
        assert_eq!((tokens[1].position.line, tokens[1].position.column), (2, 2));
    }

    #[test]
    fn assertion_with_template_snapshot() {
        let dump: Vec<String> = Lexer::new("invariant(ok, `a ${b}`);")
            .tokenize()
            .iter()
            .map(ToString::to_string)
            .collect();
        insta::assert_snapshot!("assertion_with_template", dump.join("\n"));
    }

    #[test]
    fn unterminated_string_token() {
        assert_eq!(
            token_types("'open"),
            vec![TokenType::UnterminatedString, TokenType::Eof]
        );
    }
}
