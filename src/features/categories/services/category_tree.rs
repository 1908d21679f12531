//! Pure category hierarchy operations over a flat snapshot of rows.
//!
//! The `categories` table is an adjacency list (`parent_id` points at the
//! parent row). Every operation here first groups the rows by `parent_id`
//! once, so building, resolving and walking stay linear in the number of rows.

use std::collections::{HashMap, HashSet};

use crate::features::categories::dtos::CategoryNode;
use crate::features::categories::models::Category;

/// Rows grouped by parent, preserving the input order within each group
pub struct CategoryIndex<'a> {
    by_parent: HashMap<Option<i64>, Vec<&'a Category>>,
}

impl<'a> CategoryIndex<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        let mut by_parent: HashMap<Option<i64>, Vec<&'a Category>> = HashMap::new();
        for category in categories {
            by_parent.entry(category.parent_id).or_default().push(category);
        }
        Self { by_parent }
    }

    /// Direct children of `parent_id` (`None` = roots)
    pub fn children(&self, parent_id: Option<i64>) -> &[&'a Category] {
        self.by_parent
            .get(&parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Nested nodes for everything below `parent_id`
    pub fn tree(&self, parent_id: Option<i64>) -> Vec<CategoryNode> {
        let mut visited = HashSet::new();
        self.build_level(parent_id, &mut visited)
    }

    fn build_level(&self, parent_id: Option<i64>, visited: &mut HashSet<i64>) -> Vec<CategoryNode> {
        let mut nodes = Vec::new();
        for category in self.children(parent_id) {
            // malformed parent cycles must not recurse forever
            if !visited.insert(category.id) {
                continue;
            }
            let sub_categories = self.build_level(Some(category.id), visited);
            nodes.push(CategoryNode::with_children(category, sub_categories));
        }
        nodes
    }

    /// Walk a slash-separated slug path from the roots down.
    ///
    /// Segments are compared case-insensitively; empty segments are ignored.
    /// Sibling slug collisions resolve to the first row in input order.
    pub fn resolve(&self, path: &str) -> Option<&'a Category> {
        let mut current: Option<&'a Category> = None;

        for segment in path.split('/').map(str::trim).filter(|s| !s.is_empty()) {
            let parent_id = current.map(|c| c.id);
            let next = self
                .children(parent_id)
                .iter()
                .copied()
                .find(|c| c.slug_matches(segment))?;
            current = Some(next);
        }

        current
    }

    /// `root_id` plus every descendant id, each exactly once (pre-order)
    pub fn subtree_ids(&self, root_id: i64) -> Vec<i64> {
        let mut ids = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![root_id];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            ids.push(id);
            // reversed so siblings pop in their natural order
            stack.extend(self.children(Some(id)).iter().rev().map(|c| c.id));
        }

        ids
    }
}

/// Build the nested tree below `parent_id` (`None` = the whole forest)
pub fn build_category_tree(categories: &[Category], parent_id: Option<i64>) -> Vec<CategoryNode> {
    CategoryIndex::new(categories).tree(parent_id)
}

/// Resolve `path` (e.g. `men/clothing`) to its node with the full subtree attached
pub fn resolve_category_path(categories: &[Category], path: &str) -> Option<CategoryNode> {
    let index = CategoryIndex::new(categories);
    index
        .resolve(path)
        .map(|category| CategoryNode::with_children(category, index.tree(Some(category.id))))
}

/// Ids of `root_id` and all of its descendants
pub fn collect_subtree_ids(categories: &[Category], root_id: i64) -> Vec<i64> {
    CategoryIndex::new(categories).subtree_ids(root_id)
}
