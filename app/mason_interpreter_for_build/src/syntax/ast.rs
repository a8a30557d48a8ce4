/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! The AST shape the external parser hands us. Only what syntax restriction
//! and rule recording need; expression evaluation happens upstream.

use std::fmt;
use std::fmt::Display;

use crate::values::RawValue;

/// A 1-based source position within the file being evaluated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FileSpan {
    pub line: u32,
    pub column: u32,
}

impl FileSpan {
    pub fn new(line: u32, column: u32) -> FileSpan {
        FileSpan { line, column }
    }

    /// For synthesized nodes with no source position.
    pub fn unknown() -> FileSpan {
        FileSpan::default()
    }
}

impl Display for FileSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: FileSpan,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: FileSpan) -> Spanned<T> {
        Spanned { node, span }
    }
}

/// One parsed declaration or macro file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AstModule {
    pub path: String,
    pub stmts: Vec<AstStmt>,
}

pub type AstStmt = Spanned<Stmt>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Stmt {
    Expression(AstExpr),
    Assign {
        lhs: String,
        rhs: AstExpr,
    },
    Def {
        name: String,
        body: Vec<AstStmt>,
    },
    For {
        var: String,
        over: AstExpr,
        body: Vec<AstStmt>,
    },
    If {
        condition: AstExpr,
        then_block: Vec<AstStmt>,
        else_block: Vec<AstStmt>,
    },
    Load {
        module: String,
        symbols: Vec<String>,
    },
    Return(Option<AstExpr>),
}

pub type AstExpr = Spanned<Expr>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    Identifier(String),
    Literal(AstLiteral),
    Call {
        function: Box<AstExpr>,
        args: Vec<AstArgument>,
    },
    Dot {
        object: Box<AstExpr>,
        field: String,
    },
    List(Vec<AstExpr>),
    Dict(Vec<(AstExpr, AstExpr)>),
    Tuple(Vec<AstExpr>),
}

pub type AstArgument = Spanned<Argument>;

/// One argument at a call site.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Argument {
    Positional(AstExpr),
    Named(String, AstExpr),
    /// `*args` spread.
    Args(AstExpr),
    /// `**kwargs` spread.
    KwArgs(AstExpr),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AstLiteral {
    None,
    Bool(bool),
    Int(i64),
    String(String),
}

impl AstLiteral {
    pub fn to_raw_value(&self) -> RawValue {
        match self {
            AstLiteral::None => RawValue::None,
            AstLiteral::Bool(v) => RawValue::Bool(*v),
            AstLiteral::Int(v) => RawValue::Int(*v),
            AstLiteral::String(v) => RawValue::String(v.clone()),
        }
    }
}

impl Expr {
    /// The raw value of a literal-shaped expression, where every leaf is a
    /// literal. `None` for anything needing evaluation.
    pub fn as_raw_value(&self) -> Option<RawValue> {
        match self {
            Expr::Literal(lit) => Some(lit.to_raw_value()),
            Expr::List(items) | Expr::Tuple(items) => Some(RawValue::List(
                items
                    .iter()
                    .map(|e| e.node.as_raw_value())
                    .collect::<Option<Vec<_>>>()?,
            )),
            Expr::Dict(entries) => Some(RawValue::Dict(
                entries
                    .iter()
                    .map(|(k, v)| Some((k.node.as_raw_value()?, v.node.as_raw_value()?)))
                    .collect::<Option<Vec<_>>>()?,
            )),
            Expr::Identifier(_) | Expr::Call { .. } | Expr::Dot { .. } => None,
        }
    }
}
