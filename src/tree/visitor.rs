use paste::paste;

use super::*;
use crate::for_all_nodes;

macro_rules! def_visitor {
    ($($node_name:ident),*) => {
        /// Visitor over tree nodes. `R` is the result type and `C` the context threaded through
        /// the traversal. Every node has exactly one method here and no defaults are provided.
        pub trait AstVisitor<R, C> {
            paste! {
                $(
                    fn [<visit_ $node_name:snake>](&mut self, node: &$node_name, context: C) -> R;
                )*
            }
        }
    };
}

for_all_nodes! { def_visitor }
