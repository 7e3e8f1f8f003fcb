use std::sync::LazyLock;

use crate::syntax::token_type::TokenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Sequence,    // a, b
    Assign,      // = += ... (right)
    Conditional, // a ? b : c (right)
    LogicalOr,   // || ??
    LogicalAnd,  // &&
    BitOr,       // |
    BitXor,      // ^
    BitAnd,      // &
    Equals,      // == != === !==
    LessGreater, // < > <= >= instanceof in
    Shift,       // << >> >>>
    Sum,         // + -
    Product,     // * / %
    Exponent,    // ** (right)
    Prefix,      // !x -x typeof x ++x
    Postfix,     // x++ x--
    Call,        // f(x) f`x` a?.b
    Index,       // a[b] a.b
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    pub token: TokenType,
    pub precedence: Precedence,
    pub associativity: Assoc,
    pub fixity: Fixity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfixInfo {
    pub precedence: Precedence,
    pub associativity: Assoc,
    pub fixity: Fixity,
}

const fn op(token: TokenType, precedence: Precedence, associativity: Assoc, fixity: Fixity) -> OpInfo {
    OpInfo {
        token,
        precedence,
        associativity,
        fixity,
    }
}

const fn infix(token: TokenType, precedence: Precedence) -> OpInfo {
    op(token, precedence, Assoc::Left, Fixity::Infix)
}

const fn assign(token: TokenType) -> OpInfo {
    op(token, Precedence::Assign, Assoc::Right, Fixity::Infix)
}

const fn postfix(token: TokenType, precedence: Precedence) -> OpInfo {
    op(token, precedence, Assoc::Left, Fixity::Postfix)
}

const fn prefix(token: TokenType) -> OpInfo {
    op(token, Precedence::Prefix, Assoc::Right, Fixity::Prefix)
}

// Single source of truth for operator precedence + associativity.
pub const OPERATOR_TABLE: &[OpInfo] = &[
    infix(TokenType::Comma, Precedence::Sequence),
    // Assignment
    assign(TokenType::Assign),
    assign(TokenType::PlusAssign),
    assign(TokenType::MinusAssign),
    assign(TokenType::AsteriskAssign),
    assign(TokenType::StarStarAssign),
    assign(TokenType::SlashAssign),
    assign(TokenType::PercentAssign),
    assign(TokenType::ShiftLeftAssign),
    assign(TokenType::ShiftRightAssign),
    assign(TokenType::ShiftRightUnsignedAssign),
    assign(TokenType::AmpAssign),
    assign(TokenType::BarAssign),
    assign(TokenType::CaretAssign),
    assign(TokenType::AndAssign),
    assign(TokenType::OrAssign),
    assign(TokenType::CoalesceAssign),
    op(
        TokenType::Question,
        Precedence::Conditional,
        Assoc::Right,
        Fixity::Infix,
    ),
    // Logical
    infix(TokenType::Or, Precedence::LogicalOr),
    infix(TokenType::Coalesce, Precedence::LogicalOr),
    infix(TokenType::And, Precedence::LogicalAnd),
    // Bitwise
    infix(TokenType::Bar, Precedence::BitOr),
    infix(TokenType::Caret, Precedence::BitXor),
    infix(TokenType::Amp, Precedence::BitAnd),
    // Comparison
    infix(TokenType::Eq, Precedence::Equals),
    infix(TokenType::NotEq, Precedence::Equals),
    infix(TokenType::StrictEq, Precedence::Equals),
    infix(TokenType::StrictNotEq, Precedence::Equals),
    infix(TokenType::Lt, Precedence::LessGreater),
    infix(TokenType::Gt, Precedence::LessGreater),
    infix(TokenType::Lte, Precedence::LessGreater),
    infix(TokenType::Gte, Precedence::LessGreater),
    infix(TokenType::Instanceof, Precedence::LessGreater),
    infix(TokenType::In, Precedence::LessGreater),
    // Arithmetic
    infix(TokenType::ShiftLeft, Precedence::Shift),
    infix(TokenType::ShiftRight, Precedence::Shift),
    infix(TokenType::ShiftRightUnsigned, Precedence::Shift),
    infix(TokenType::Plus, Precedence::Sum),
    infix(TokenType::Minus, Precedence::Sum),
    infix(TokenType::Asterisk, Precedence::Product),
    infix(TokenType::Slash, Precedence::Product),
    infix(TokenType::Percent, Precedence::Product),
    op(
        TokenType::StarStar,
        Precedence::Exponent,
        Assoc::Right,
        Fixity::Infix,
    ),
    // Postfix operators handled by Pratt infix dispatch
    postfix(TokenType::PlusPlus, Precedence::Postfix),
    postfix(TokenType::MinusMinus, Precedence::Postfix),
    postfix(TokenType::LParen, Precedence::Call),
    postfix(TokenType::OptionalChain, Precedence::Call),
    postfix(TokenType::NoSubstitutionTemplate, Precedence::Call),
    postfix(TokenType::TemplateHead, Precedence::Call),
    postfix(TokenType::LBracket, Precedence::Index),
    postfix(TokenType::Dot, Precedence::Index),
    // Prefix operators
    prefix(TokenType::Bang),
    prefix(TokenType::Minus),
    prefix(TokenType::Plus),
    prefix(TokenType::Tilde),
    prefix(TokenType::Typeof),
    prefix(TokenType::Void),
    prefix(TokenType::Delete),
    prefix(TokenType::PlusPlus),
    prefix(TokenType::MinusMinus),
];

pub static INFIX_TABLE: LazyLock<[Option<InfixInfo>; TokenType::COUNT]> = LazyLock::new(|| {
    let mut table = [None; TokenType::COUNT];
    for info in OPERATOR_TABLE {
        match info.fixity {
            Fixity::Infix | Fixity::Postfix => {
                let index = info.token.as_usize();
                debug_assert!(
                    table[index].is_none(),
                    "duplicate infix/postfix operator table entry for token {:?}",
                    info.token
                );
                table[index] = Some(InfixInfo {
                    precedence: info.precedence,
                    associativity: info.associativity,
                    fixity: info.fixity,
                });
            }
            Fixity::Prefix => {}
        }
    }
    table
});

pub static PREFIX_TABLE: LazyLock<[bool; TokenType::COUNT]> = LazyLock::new(|| {
    let mut table = [false; TokenType::COUNT];
    for info in OPERATOR_TABLE {
        if info.fixity == Fixity::Prefix {
            table[info.token.as_usize()] = true;
        }
    }
    table
});

pub fn infix_op(token_type: &TokenType) -> Option<InfixInfo> {
    INFIX_TABLE[token_type.as_usize()]
}

pub fn is_prefix_op(token_type: &TokenType) -> bool {
    PREFIX_TABLE[token_type.as_usize()]
}

pub fn precedence_of(token_type: &TokenType) -> Option<Precedence> {
    infix_op(token_type).map(|op| op.precedence)
}

fn precedence_below(precedence: &Precedence) -> Precedence {
    match precedence {
        Precedence::Lowest => Precedence::Lowest,
        Precedence::Sequence => Precedence::Lowest,
        Precedence::Assign => Precedence::Sequence,
        Precedence::Conditional => Precedence::Assign,
        Precedence::LogicalOr => Precedence::Conditional,
        Precedence::LogicalAnd => Precedence::LogicalOr,
        Precedence::BitOr => Precedence::LogicalAnd,
        Precedence::BitXor => Precedence::BitOr,
        Precedence::BitAnd => Precedence::BitXor,
        Precedence::Equals => Precedence::BitAnd,
        Precedence::LessGreater => Precedence::Equals,
        Precedence::Shift => Precedence::LessGreater,
        Precedence::Sum => Precedence::Shift,
        Precedence::Product => Precedence::Sum,
        Precedence::Exponent => Precedence::Product,
        Precedence::Prefix => Precedence::Exponent,
        Precedence::Postfix => Precedence::Prefix,
        Precedence::Call => Precedence::Postfix,
        Precedence::Index => Precedence::Call,
    }
}

/// Binding power used for the right-hand operand of an infix operator.
pub fn rhs_precedence_for_infix(token_type: &TokenType) -> Option<Precedence> {
    let op = infix_op(token_type)?;
    Some(match op.associativity {
        Assoc::Left => op.precedence,
        Assoc::Right => precedence_below(&op.precedence),
    })
}

pub fn token_precedence(token_type: &TokenType) -> Precedence {
    precedence_of(token_type).unwrap_or(Precedence::Lowest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert!(token_precedence(&TokenType::Asterisk) > token_precedence(&TokenType::Plus));
    }

    #[test]
    fn right_associative_operators_lower_rhs_precedence() {
        assert_eq!(
            rhs_precedence_for_infix(&TokenType::Assign),
            Some(Precedence::Sequence)
        );
        assert_eq!(
            rhs_precedence_for_infix(&TokenType::StarStar),
            Some(Precedence::Product)
        );
        assert_eq!(
            rhs_precedence_for_infix(&TokenType::Plus),
            Some(Precedence::Sum)
        );
    }

    #[test]
    fn increment_is_both_prefix_and_postfix() {
        assert!(is_prefix_op(&TokenType::PlusPlus));
        assert_eq!(
            infix_op(&TokenType::PlusPlus).map(|op| op.fixity),
            Some(Fixity::Postfix)
        );
    }

    #[test]
    fn non_operators_have_lowest_precedence() {
        assert_eq!(token_precedence(&TokenType::Semicolon), Precedence::Lowest);
        assert_eq!(token_precedence(&TokenType::RParen), Precedence::Lowest);
    }
}
