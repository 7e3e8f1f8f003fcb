pub mod template;
pub mod visit;

pub use template::{MessageShape, MessageTemplate, PLACEHOLDER, fold_message};
pub use visit::{
    Visitor, walk_block, walk_class, walk_expr, walk_function, walk_jsx_element, walk_program,
    walk_stmt,
};
