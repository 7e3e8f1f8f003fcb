use std::fmt;

macro_rules! define_tokens {
    (
        symbols { $($sym_name:ident => $sym_str:literal),* $(,)? }
        keywords { $($kw_name:ident => $kw_str:literal),* $(,)? }
    ) => {
        #[repr(u16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TokenType {
            // Special
            Illegal,
            Eof,

            // Identifiers & Literals
            Ident,
            PrivateName,
            Number,
            String,
            Regex,
            NoSubstitutionTemplate,
            TemplateHead,
            TemplateMiddle,
            TemplateTail,
            JsxText,
            UnterminatedString,
            UnterminatedTemplate,
            UnterminatedRegex,
            UnterminatedBlockComment,

            // Symbols (operators & delimiters)
            $($sym_name,)*

            // Keywords (auto-generated from macro)
            $($kw_name,)*

            // Keep this as the final variant so it always reflects the enum size.
            __Count,
        }

        impl TokenType {
            pub const COUNT: usize = TokenType::__Count as usize;

            pub const fn as_usize(self) -> usize {
                self as usize
            }

            /// True for reserved words, which are still valid property names.
            pub fn is_keyword(self) -> bool {
                matches!(self, $(TokenType::$kw_name)|*)
            }
        }

        impl fmt::Display for TokenType {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let s = match self {
                    TokenType::Illegal => "ILLEGAL",
                    TokenType::Eof => "EOF",
                    TokenType::Ident => "IDENT",
                    TokenType::PrivateName => "PRIVATE_NAME",
                    TokenType::Number => "NUMBER",
                    TokenType::String => "STRING",
                    TokenType::Regex => "REGEX",
                    TokenType::NoSubstitutionTemplate => "TEMPLATE",
                    TokenType::TemplateHead => "TEMPLATE_HEAD",
                    TokenType::TemplateMiddle => "TEMPLATE_MIDDLE",
                    TokenType::TemplateTail => "TEMPLATE_TAIL",
                    TokenType::JsxText => "JSX_TEXT",
                    TokenType::UnterminatedString => "UNTERMINATED_STRING",
                    TokenType::UnterminatedTemplate => "UNTERMINATED_TEMPLATE",
                    TokenType::UnterminatedRegex => "UNTERMINATED_REGEX",
                    TokenType::UnterminatedBlockComment => "UNTERMINATED_BLOCK_COMMENT",
                    $(TokenType::$sym_name => $sym_str,)*
                    $(TokenType::$kw_name => $kw_str,)*
                    TokenType::__Count => "__COUNT",
                };
                write!(f, "{}", s)
            }
        }

        /// Called by the lexer to check if an identifier is a keyword
        pub fn lookup_ident(ident: &str) -> TokenType {
            match ident {
                $($kw_str => TokenType::$kw_name,)*
                _ => TokenType::Ident,
            }
        }
    };
}

// ════════════════════════════════════════════════════════════════════════════
//  TOKEN DEFINITIONS
// ════════════════════════════════════════════════════════════════════════════

define_tokens! {
    symbols {
        // Arithmetic
        Plus       => "+",
        Minus      => "-",
        Asterisk   => "*",
        StarStar   => "**",
        Slash      => "/",
        Percent    => "%",
        PlusPlus   => "++",
        MinusMinus => "--",

        // Comparison
        Lt         => "<",
        Gt         => ">",
        Lte        => "<=",
        Gte        => ">=",
        Eq         => "==",
        NotEq      => "!=",
        StrictEq   => "===",
        StrictNotEq => "!==",

        // Bitwise
        Amp        => "&",
        Bar        => "|",
        Caret      => "^",
        Tilde      => "~",
        ShiftLeft  => "<<",
        ShiftRight => ">>",
        ShiftRightUnsigned => ">>>",

        // Logical
        Bang       => "!",
        And        => "&&",
        Or         => "||",
        Coalesce   => "??",

        // Assignment
        Assign           => "=",
        PlusAssign       => "+=",
        MinusAssign      => "-=",
        AsteriskAssign   => "*=",
        StarStarAssign   => "**=",
        SlashAssign      => "/=",
        PercentAssign    => "%=",
        ShiftLeftAssign  => "<<=",
        ShiftRightAssign => ">>=",
        ShiftRightUnsignedAssign => ">>>=",
        AmpAssign        => "&=",
        BarAssign        => "|=",
        CaretAssign      => "^=",
        AndAssign        => "&&=",
        OrAssign         => "||=",
        CoalesceAssign   => "??=",

        // Delimiters
        LParen       => "(",
        RParen       => ")",
        LBrace       => "{",
        RBrace       => "}",
        LBracket     => "[",
        RBracket     => "]",
        Comma        => ",",
        Semicolon    => ";",
        Colon        => ":",
        Dot          => ".",
        Ellipsis     => "...",
        Question     => "?",
        OptionalChain => "?.",
        Arrow        => "=>",
        At           => "@",
    }

    keywords {
        Var        => "var",
        Let        => "let",
        Const      => "const",
        Function   => "function",
        Class      => "class",
        Extends    => "extends",
        Return     => "return",
        If         => "if",
        Else       => "else",
        For        => "for",
        While      => "while",
        Do         => "do",
        Switch     => "switch",
        Case       => "case",
        Default    => "default",
        Break      => "break",
        Continue   => "continue",
        Throw      => "throw",
        Try        => "try",
        Catch      => "catch",
        Finally    => "finally",
        New        => "new",
        Delete     => "delete",
        Typeof     => "typeof",
        Void       => "void",
        Instanceof => "instanceof",
        In         => "in",
        This       => "this",
        Super      => "super",
        Null       => "null",
        True       => "true",
        False      => "false",
        Import     => "import",
        Export     => "export",
        Yield      => "yield",
        Debugger   => "debugger",
        With       => "with",
    }
}

impl TokenType {
    /// Whether a `/` following a token of this type starts a regular
    /// expression literal rather than a division.
    pub fn allows_regex_after(self) -> bool {
        match self {
            TokenType::Ident
            | TokenType::PrivateName
            | TokenType::Number
            | TokenType::String
            | TokenType::Regex
            | TokenType::NoSubstitutionTemplate
            | TokenType::TemplateTail
            | TokenType::RParen
            | TokenType::RBracket
            | TokenType::RBrace
            | TokenType::PlusPlus
            | TokenType::MinusMinus
            | TokenType::This
            | TokenType::Super
            | TokenType::Null
            | TokenType::True
            | TokenType::False => false,
            // `</` closes a JSX element.
            TokenType::Lt => false,
            _ => true,
        }
    }

    pub fn is_assignment(self) -> bool {
        matches!(
            self,
            TokenType::Assign
                | TokenType::PlusAssign
                | TokenType::MinusAssign
                | TokenType::AsteriskAssign
                | TokenType::StarStarAssign
                | TokenType::SlashAssign
                | TokenType::PercentAssign
                | TokenType::ShiftLeftAssign
                | TokenType::ShiftRightAssign
                | TokenType::ShiftRightUnsignedAssign
                | TokenType::AmpAssign
                | TokenType::BarAssign
                | TokenType::CaretAssign
                | TokenType::AndAssign
                | TokenType::OrAssign
                | TokenType::CoalesceAssign
        )
    }
}
