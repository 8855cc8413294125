/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root and the statement/expression enums
/// - expressions: Definitions for the expression kinds
/// - statements: Definitions for the statement kinds
/// - node: Uniform kind/children/value view for tree-generic traversal
pub mod ast;
pub mod expressions;
pub mod node;
pub mod statements;

#[cfg(test)]
mod tests;
