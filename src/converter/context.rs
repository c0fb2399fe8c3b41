//! Rendering context threaded through the recursive tree walk.

use url::Url;

/// Immutable state carried through the recursive renderer.
///
/// A context is created once at depth zero and a derived copy is built each
/// time the walk descends into a list item, so sequentially rendered sibling
/// subtrees never alias each other's counters. The caller's context is never
/// mutated.
#[derive(Debug, Clone, Default)]
pub(crate) struct RenderContext {
    /// Count of list ancestors strictly enclosing the current node.
    pub(crate) list_depth: usize,
    /// One entry per enclosing list: `true` for ordered lists.
    pub(crate) ordered_stack: Vec<bool>,
    /// Running item counter per enclosing list depth.
    pub(crate) ordered_index: Vec<usize>,
    /// Base URL for resolving relative links and image sources.
    pub(crate) base_url: Option<Url>,
}

impl RenderContext {
    pub(crate) fn new(base_url: Option<Url>) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Derive the context for the children of a list item: one level deeper,
    /// with the item's running counter recorded at the new depth.
    pub(crate) fn descend_into_item(&self, ordered: bool, index: usize) -> Self {
        let mut ordered_stack = self.ordered_stack.clone();
        let mut ordered_index = self.ordered_index.clone();
        ordered_stack.push(ordered);
        ordered_index.push(index);
        Self {
            list_depth: self.list_depth + 1,
            ordered_stack,
            ordered_index,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descent_derives_without_mutating_the_caller() {
        let root = RenderContext::new(None);
        let item = root.descend_into_item(true, 3);

        assert_eq!(root.list_depth, 0);
        assert!(root.ordered_stack.is_empty());

        assert_eq!(item.list_depth, 1);
        assert_eq!(item.ordered_stack, vec![true]);
        assert_eq!(item.ordered_index, vec![3]);
    }

    #[test]
    fn nested_descent_stacks_per_depth() {
        let root = RenderContext::new(None);
        let inner = root.descend_into_item(true, 2).descend_into_item(false, 1);

        assert_eq!(inner.list_depth, 2);
        assert_eq!(inner.ordered_stack, vec![true, false]);
        assert_eq!(inner.ordered_index, vec![2, 1]);
    }
}
