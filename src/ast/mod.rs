/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Top-level items handed to the consumer
/// - expressions: The expression node variants
/// - functions: Prototypes and function definitions
pub mod ast;
pub mod expressions;
pub mod functions;
