/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` sum type and the `Statement` wrapper
/// - statements: CREATE TABLE, INSERT and SELECT nodes
/// - values: Literal value nodes built from INSERT values
pub mod ast;
pub mod statements;
pub mod values;
