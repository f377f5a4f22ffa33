use num_bigint::BigUint;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(BigUint),
    Binary(BinOp, Box<Node>, Box<Node>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        };
        write!(f, "{}", glyph)
    }
}
