use std::fmt;

use logos::Logos;

/// MyLang tokens. Whitespace, newlines and `//` comments never become tokens.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    // Keywords
    #[token("print")]
    Print,
    #[token("var")]
    Var,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("fst")]
    Fst,
    #[token("snd")]
    Snd,
    #[token("foreach")]
    Foreach,
    #[token("in")]
    In,
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),

    // Symbols
    #[token("=")]
    Assign,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("!")]
    Bang,
    #[token("&&")]
    AndAnd,
    #[token("==")]
    EqEq,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Literals
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i32>().ok())]
    Int(i32),

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Print => write!(f, "`print`"),
            Token::Var => write!(f, "`var`"),
            Token::If => write!(f, "`if`"),
            Token::Else => write!(f, "`else`"),
            Token::Fst => write!(f, "`fst`"),
            Token::Snd => write!(f, "`snd`"),
            Token::Foreach => write!(f, "`foreach`"),
            Token::In => write!(f, "`in`"),
            Token::Bool(b) => write!(f, "`{b}`"),
            Token::Assign => write!(f, "`=`"),
            Token::Minus => write!(f, "`-`"),
            Token::Plus => write!(f, "`+`"),
            Token::Star => write!(f, "`*`"),
            Token::Bang => write!(f, "`!`"),
            Token::AndAnd => write!(f, "`&&`"),
            Token::EqEq => write!(f, "`==`"),
            Token::Semicolon => write!(f, "`;`"),
            Token::Comma => write!(f, "`,`"),
            Token::LParen => write!(f, "`(`"),
            Token::RParen => write!(f, "`)`"),
            Token::LBrace => write!(f, "`{{`"),
            Token::RBrace => write!(f, "`}}`"),
            Token::LBracket => write!(f, "`[`"),
            Token::RBracket => write!(f, "`]`"),
            Token::Int(n) => write!(f, "integer `{n}`"),
            Token::Ident(name) => write!(f, "identifier `{name}`"),
        }
    }
}
