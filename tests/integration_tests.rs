//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: construction with and without a
//! logger, parsing into the typed tree and its uniform view, and diagnostics.

use std::{cell::RefCell, error::Error as StdError, rc::Rc, thread};

use expr_parser::{
    ast::{
        ast::{Expr, Stmt},
        expressions::BinaryOperator,
        node::NodeKind,
    },
    errors::errors::ErrorKind,
    format_error,
    logger::logger::{LogLogger, Logger},
    parser::parser::{parse, Parser},
};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_typed_tree() {
    let program = parse("let area = width * height;", None).unwrap();

    assert_eq!(program.body.len(), 1);
    let Stmt::VarDecl(declaration) = &program.body[0] else {
        panic!("expected a variable declaration");
    };
    assert_eq!(declaration.identifier.value, "area");

    let Expr::Binary(binary) = &declaration.assigned_value else {
        panic!("expected a binary expression");
    };
    assert_eq!(binary.operator, BinaryOperator::Multiply);
    assert!(matches!(binary.left.as_ref(), Expr::Symbol(symbol) if symbol.value == "width"));
    assert!(matches!(binary.right.as_ref(), Expr::Symbol(symbol) if symbol.value == "height"));
}

#[test]
fn test_pretty_print_program() {
    let program = parse("let x = 5;\n(x + 1) / 2;", None).unwrap();

    assert_eq!(
        program.to_node().to_string(),
        "Program\n\
         \x20 VariableDeclaration\n\
         \x20   Identifier(x)\n\
         \x20   NumberLiteral(5)\n\
         \x20 ExpressionStatement\n\
         \x20   Division\n\
         \x20     GroupingExpression\n\
         \x20       Addition\n\
         \x20         Identifier(x)\n\
         \x20         NumberLiteral(1)\n\
         \x20     NumberLiteral(2)"
    );
}

#[test]
fn test_closure_logger() {
    let messages = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&messages);
    let logger: Rc<dyn Logger> = Rc::new(move |message: &str| sink.borrow_mut().push(message.to_string()));

    let mut parser = Parser::new("1;", Some(logger)).unwrap();
    parser.parse().unwrap();
    parser.parse().unwrap();

    // Only construction logs; parsing adds nothing
    assert_eq!(
        *messages.borrow(),
        vec!["Initializing parser", "Tokenizing input string", "Parser initialized"]
    );
}

#[test]
fn test_facade_logger() {
    let logger: Rc<dyn Logger> = Rc::new(LogLogger::new("integration"));
    let mut parser = Parser::new("a - b - c;", Some(logger)).unwrap();

    let node = parser.parse().unwrap().to_node();
    let statement = &node.children[0];
    assert_eq!(statement.kind, NodeKind::ExpressionStatement);
    assert_eq!(statement.children[0].kind, NodeKind::Subtraction);
    assert_eq!(statement.children[0].children[0].kind, NodeKind::Subtraction);
}

#[test]
fn test_lexer_error_is_a_syntax_error() {
    let error = Parser::new("2 + @ * 4;", None).err().unwrap();

    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert_eq!(error.to_string(), "Lexer error: Unexpected character: @");
    assert_eq!(error.source().map(|source| source.to_string()), Some("Unexpected character: @".to_string()));
}

#[test]
fn test_format_parse_error() {
    let source = "let x = 1;\nlet y = x +;\n";
    let error = parse(source, Some("input.expr".to_string())).unwrap_err();

    assert_eq!(
        format_error(&error, source),
        "Error: ExpectedExpression (expected a number, an identifier or `(`)\n\
         -> input.expr\n\
         \x20 |\n\
         2 | let y = x +;\n\
         \x20 | -----------^"
    );
}

#[test]
fn test_independent_parsers_in_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let source = format!("let v{} = {} * (1 + {});", i, i, i);
                // Errors hold source names behind `Rc`, so only the message crosses threads
                parse(&source, None)
                    .map(|program| program.to_node())
                    .map_err(|error| error.to_string())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let node = handle.join().unwrap().unwrap();
        let declaration = &node.children[0];
        assert_eq!(declaration.children[0].value, Some(format!("v{}", i)));
        assert_eq!(declaration.children[1].kind, NodeKind::Multiplication);
    }
}
