//! Recursive-descent parser over a token slice.

use mylang_ir::{
    ensure_sufficient_stack, BinaryOp, Block, Expr, Name, Program, Stmt, StmtSeq, UnaryOp,
};
use mylang_lexer::{SpannedToken, Token};

use crate::ParseError;

/// Cursor over a lexed token list with one token of look-ahead.
pub struct Parser<'a> {
    tokens: &'a [SpannedToken],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [SpannedToken]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// `Prog ::= StmtSeq EOF`
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let stmts = self.parse_stmt_seq()?;
        if let Some(token) = self.peek() {
            return Err(self.expected("end of input", token));
        }
        Ok(Program::new(stmts))
    }

    // Cursor helpers

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn at(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Line of the current token, or of the last token at end of input.
    fn line(&self) -> u32 {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    fn found(token: Option<&Token>) -> String {
        token.map_or_else(|| "end of input".to_string(), ToString::to_string)
    }

    fn expected(&self, expected: impl Into<String>, found: &Token) -> ParseError {
        ParseError::Expected {
            expected: expected.into(),
            found: Self::found(Some(found)),
            line: self.line(),
        }
    }

    fn unexpected(&self) -> ParseError {
        ParseError::Unexpected {
            found: Self::found(self.peek()),
            line: self.line(),
        }
    }

    /// Consume `token` or fail naming it.
    fn consume(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.at(token) {
            self.pos += 1;
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected: token.to_string(),
                found: Self::found(self.peek()),
                line: self.line(),
            })
        }
    }

    fn parse_name(&mut self) -> Result<Name, ParseError> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                self.pos += 1;
                Ok(Name::from(name.as_str()))
            }
            found => Err(ParseError::Expected {
                expected: "an identifier".to_string(),
                found: Self::found(found),
                line: self.line(),
            }),
        }
    }

    // Statements

    /// `StmtSeq ::= Stmt (';' StmtSeq)?`
    ///
    /// A `;` followed by `}` or end of input closes the sequence.
    fn parse_stmt_seq(&mut self) -> Result<StmtSeq, ParseError> {
        let mut stmts = vec![self.parse_stmt()?];
        while self.at(&Token::Semicolon) {
            self.advance();
            if matches!(self.peek(), None | Some(Token::RBrace)) {
                break;
            }
            stmts.push(self.parse_stmt()?);
        }
        Ok(stmts.into_iter().collect())
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.peek() {
            Some(Token::Print) => {
                self.advance();
                Ok(Stmt::Print(self.parse_expr()?))
            }
            Some(Token::Var) => {
                self.advance();
                let name = self.parse_name()?;
                self.consume(&Token::Assign)?;
                let init = self.parse_expr()?;
                Ok(Stmt::VarDecl { name, init })
            }
            Some(Token::Ident(_)) => {
                let name = self.parse_name()?;
                self.consume(&Token::Assign)?;
                let value = self.parse_expr()?;
                Ok(Stmt::Assign { name, value })
            }
            Some(Token::If) => self.parse_if(),
            Some(Token::Foreach) => self.parse_foreach(),
            _ => Err(self.unexpected()),
        }
    }

    /// `'if' '(' Exp ')' Block ('else' Block)?`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.consume(&Token::If)?;
        let cond = self.parse_paren()?;
        let then_block = self.parse_block()?;
        let else_block = if self.at(&Token::Else) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Stmt::If {
            cond,
            then_block,
            else_block,
        })
    }

    /// `'foreach' IDENT 'in' Exp Block`
    fn parse_foreach(&mut self) -> Result<Stmt, ParseError> {
        self.consume(&Token::Foreach)?;
        let name = self.parse_name()?;
        self.consume(&Token::In)?;
        let iter = self.parse_expr()?;
        let body = self.parse_block()?;
        Ok(Stmt::Foreach { name, iter, body })
    }

    /// `Block ::= '{' StmtSeq '}'`
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        ensure_sufficient_stack(|| {
            self.consume(&Token::LBrace)?;
            let stmts = self.parse_stmt_seq()?;
            self.consume(&Token::RBrace)?;
            Ok(Block::new(stmts))
        })
    }

    // Expressions, lowest precedence first

    /// `Exp ::= And (',' And)*`
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            self.parse_left_assoc(&Token::Comma, BinaryOp::Pair, Self::parse_and)
        })
    }

    /// `And ::= Eq ('&&' Eq)*`
    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&Token::AndAnd, BinaryOp::And, Self::parse_eq)
    }

    /// `Eq ::= Add ('==' Add)*`
    fn parse_eq(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&Token::EqEq, BinaryOp::Eq, Self::parse_add)
    }

    /// `Add ::= Mul ('+' Mul)*`
    fn parse_add(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&Token::Plus, BinaryOp::Add, Self::parse_mul)
    }

    /// `Mul ::= Atom ('*' Atom)*`
    fn parse_mul(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&Token::Star, BinaryOp::Mul, Self::parse_atom)
    }

    fn parse_left_assoc(
        &mut self,
        operator: &Token,
        op: BinaryOp,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut expr = operand(self)?;
        while self.at(operator) {
            self.advance();
            expr = Expr::binary(op, expr, operand(self)?);
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| match self.peek() {
            Some(Token::Int(n)) => {
                self.advance();
                Ok(Expr::Int(*n))
            }
            Some(Token::Bool(b)) => {
                self.advance();
                Ok(Expr::Bool(*b))
            }
            Some(Token::Ident(_)) => Ok(Expr::Variable(self.parse_name()?)),
            Some(Token::Minus) => self.parse_unary(UnaryOp::Neg),
            Some(Token::Bang) => self.parse_unary(UnaryOp::Not),
            Some(Token::Fst) => self.parse_unary(UnaryOp::Fst),
            Some(Token::Snd) => self.parse_unary(UnaryOp::Snd),
            Some(Token::LParen) => self.parse_paren(),
            Some(Token::LBracket) => self.parse_vector(),
            _ => Err(self.unexpected()),
        })
    }

    fn parse_unary(&mut self, op: UnaryOp) -> Result<Expr, ParseError> {
        self.advance();
        Ok(Expr::unary(op, self.parse_atom()?))
    }

    /// `'(' Exp ')'`
    fn parse_paren(&mut self) -> Result<Expr, ParseError> {
        self.consume(&Token::LParen)?;
        let expr = self.parse_expr()?;
        self.consume(&Token::RParen)?;
        Ok(expr)
    }

    /// `'[' Exp ';' Exp ']'`: length first, then index.
    fn parse_vector(&mut self) -> Result<Expr, ParseError> {
        self.consume(&Token::LBracket)?;
        let length = self.parse_expr()?;
        self.consume(&Token::Semicolon)?;
        let index = self.parse_expr()?;
        self.consume(&Token::RBracket)?;
        Ok(Expr::vector(length, index))
    }
}
