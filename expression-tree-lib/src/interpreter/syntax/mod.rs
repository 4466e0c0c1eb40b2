pub mod expression_tree;
pub mod serializer;
pub(crate) mod syntax_visitor;
