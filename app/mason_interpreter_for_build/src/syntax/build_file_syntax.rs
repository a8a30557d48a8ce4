/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Build-file syntax is more restrictive than macro-file syntax: build files
//! are purely declarative. Macro files keep the full language and are never
//! passed through this check.

use crate::events::Event;
use crate::events::EventSink;
use crate::syntax::ast::Argument;
use crate::syntax::ast::AstExpr;
use crate::syntax::ast::AstModule;
use crate::syntax::ast::AstStmt;
use crate::syntax::ast::Expr;
use crate::syntax::ast::FileSpan;
use crate::syntax::ast::Stmt;

/// Report every imperative construct in a build file through the sink.
/// Returns true iff no errors were reported.
pub fn check_build_syntax(module: &AstModule, events: &dyn EventSink) -> bool {
    let mut checker = SyntaxChecker {
        events,
        success: true,
    };
    for stmt in &module.stmts {
        checker.visit_stmt(stmt);
    }
    checker.success
}

struct SyntaxChecker<'a> {
    events: &'a dyn EventSink,
    success: bool,
}

impl<'a> SyntaxChecker<'a> {
    fn error(&mut self, span: FileSpan, message: &str) {
        self.events.handle(Event::error(span, message));
        self.success = false;
    }

    // We prune the traversal if we encounter def/if/for, as we have already
    // reported the root error and there's no point reporting more.

    fn visit_stmt(&mut self, stmt: &AstStmt) {
        match &stmt.node {
            Stmt::Def { .. } => self.error(
                stmt.span,
                "function definitions are not allowed in BUILD files. \
                 You may move the function to a .bzl file and load it.",
            ),
            Stmt::For { .. } => self.error(
                stmt.span,
                "for statements are not allowed in BUILD files. \
                 You may inline the loop, move it to a function definition \
                 (in a .bzl file), or as a last resort use a list comprehension.",
            ),
            Stmt::If { .. } => self.error(
                stmt.span,
                "if statements are not allowed in BUILD files. \
                 You may move conditional logic to a function definition \
                 (in a .bzl file), or for simple cases use an if expression.",
            ),
            Stmt::Expression(expr) => self.visit_expr(expr),
            Stmt::Assign { rhs, .. } => self.visit_expr(rhs),
            Stmt::Return(expr) => {
                if let Some(expr) = expr {
                    self.visit_expr(expr);
                }
            }
            Stmt::Load { .. } => {}
        }
    }

    fn visit_expr(&mut self, expr: &AstExpr) {
        match &expr.node {
            Expr::Call { function, args } => {
                for arg in args {
                    match &arg.node {
                        Argument::KwArgs(_) => self.error(
                            expr.span,
                            "**kwargs arguments are not allowed in BUILD files. \
                             Pass the arguments in explicitly.",
                        ),
                        Argument::Args(_) => self.error(
                            expr.span,
                            "*args arguments are not allowed in BUILD files. \
                             Pass the arguments in explicitly.",
                        ),
                        Argument::Positional(_) | Argument::Named(..) => {}
                    }
                }

                // Continue traversal so as not to miss nested calls
                // like cc_binary(..., f(**kwargs), ...).
                self.visit_expr(function);
                for arg in args {
                    match &arg.node {
                        Argument::Positional(value)
                        | Argument::Named(_, value)
                        | Argument::Args(value)
                        | Argument::KwArgs(value) => self.visit_expr(value),
                    }
                }
            }
            Expr::Dot { object, .. } => self.visit_expr(object),
            Expr::List(items) | Expr::Tuple(items) => {
                for item in items {
                    self.visit_expr(item);
                }
            }
            Expr::Dict(entries) => {
                for (k, v) in entries {
                    self.visit_expr(k);
                    self.visit_expr(v);
                }
            }
            Expr::Identifier(_) | Expr::Literal(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::check_build_syntax;
    use crate::events::CollectingEventSink;
    use crate::syntax::ast::Argument;
    use crate::syntax::ast::AstExpr;
    use crate::syntax::ast::AstLiteral;
    use crate::syntax::ast::AstModule;
    use crate::syntax::ast::AstStmt;
    use crate::syntax::ast::Expr;
    use crate::syntax::ast::FileSpan;
    use crate::syntax::ast::Spanned;
    use crate::syntax::ast::Stmt;

    fn span(line: u32) -> FileSpan {
        FileSpan::new(line, 1)
    }

    fn ident(name: &str, line: u32) -> AstExpr {
        Spanned::new(Expr::Identifier(name.to_owned()), span(line))
    }

    fn call(function: &str, args: Vec<Argument>, line: u32) -> AstExpr {
        Spanned::new(
            Expr::Call {
                function: Box::new(ident(function, line)),
                args: args.into_iter().map(|a| Spanned::new(a, span(line))).collect(),
            },
            span(line),
        )
    }

    fn module(stmts: Vec<AstStmt>) -> AstModule {
        AstModule {
            path: "pkg/BUILD".to_owned(),
            stmts,
        }
    }

    fn str_lit(value: &str, line: u32) -> AstExpr {
        Spanned::new(Expr::Literal(AstLiteral::String(value.to_owned())), span(line))
    }

    #[test]
    fn test_plain_declarations_pass() {
        let module = module(vec![Spanned::new(
            Stmt::Expression(call(
                "cxx_library",
                vec![Argument::Named("name".to_owned(), str_lit("foo", 1))],
                1,
            )),
            span(1),
        )]);
        let sink = CollectingEventSink::new();
        assert!(check_build_syntax(&module, &sink));
        assert!(sink.take_events().is_empty());
    }

    #[test]
    fn test_def_for_if_rejected_once_each() {
        // The def body contains a for loop; pruning means only the def is
        // reported.
        let module = module(vec![
            Spanned::new(
                Stmt::Def {
                    name: "helper".to_owned(),
                    body: vec![Spanned::new(
                        Stmt::For {
                            var: "x".to_owned(),
                            over: ident("xs", 2),
                            body: vec![],
                        },
                        span(2),
                    )],
                },
                span(1),
            ),
            Spanned::new(
                Stmt::If {
                    condition: ident("cond", 4),
                    then_block: vec![],
                    else_block: vec![],
                },
                span(4),
            ),
        ]);
        let sink = CollectingEventSink::new();
        assert!(!check_build_syntax(&module, &sink));
        let messages = sink.error_messages();
        assert_eq!(2, messages.len());
        assert!(messages[0].starts_with("function definitions are not allowed"));
        assert!(messages[1].starts_with("if statements are not allowed"));
    }

    #[test]
    fn test_spread_in_nested_call_detected() {
        // cc_binary(..., f(**kwargs), ...) must be caught even though the
        // outer call itself is fine.
        let inner = call("f", vec![Argument::KwArgs(ident("kwargs", 1))], 1);
        let module = module(vec![Spanned::new(
            Stmt::Expression(call(
                "cc_binary",
                vec![
                    Argument::Named("name".to_owned(), str_lit("bin", 1)),
                    Argument::Named("srcs".to_owned(), inner),
                ],
                1,
            )),
            span(1),
        )]);
        let sink = CollectingEventSink::new();
        assert!(!check_build_syntax(&module, &sink));
        let messages = sink.error_messages();
        assert_eq!(1, messages.len());
        assert!(messages[0].starts_with("**kwargs arguments are not allowed"));
    }

    #[test]
    fn test_star_args_rejected() {
        let module = module(vec![Spanned::new(
            Stmt::Expression(call("glob", vec![Argument::Args(ident("patterns", 1))], 1)),
            span(1),
        )]);
        let sink = CollectingEventSink::new();
        assert!(!check_build_syntax(&module, &sink));
        assert!(
            sink.error_messages()[0].starts_with("*args arguments are not allowed")
        );
    }

    #[test]
    fn test_rerun_reports_same_errors() {
        let module = module(vec![Spanned::new(
            Stmt::For {
                var: "x".to_owned(),
                over: ident("xs", 1),
                body: vec![],
            },
            span(1),
        )]);
        let first = CollectingEventSink::new();
        let second = CollectingEventSink::new();
        assert!(!check_build_syntax(&module, &first));
        assert!(!check_build_syntax(&module, &second));
        assert_eq!(first.take_events(), second.take_events());
    }
}
