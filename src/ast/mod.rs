/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node kind discriminants and shared helpers
/// - expressions: The expression tree
/// - statements: The statement tree
/// - printer: S-expression rendering of a tree
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
