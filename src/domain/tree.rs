//! Arena-backed ordered course tree

use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use super::course::Course;

/// Tree node holding one course and the indices of its subtrees.
#[derive(Debug)]
struct CourseNode {
    course: Course,
    left: Option<Index>,
    right: Option<Index>,
}

impl CourseNode {
    fn new(course: Course) -> Self {
        Self {
            course,
            left: None,
            right: None,
        }
    }
}

/// Incoming edge of a node: where its parent (or the tree handle for
/// the root) points at it. Carried during descent so excision can
/// repoint the edge without walking back up.
#[derive(Debug, Clone, Copy)]
enum Link {
    Root,
    Left(Index),
    Right(Index),
}

/// Binary search tree over courses, keyed by course number.
///
/// Nodes live in a generational arena and reference each other by
/// index, so removals recycle slots through the arena's free list and
/// dropping the tree is flat (no recursive teardown). The tree is
/// unbalanced: shape and depth follow insertion order, degrading to a
/// linked list under monotonic input.
///
/// Duplicate course numbers are accepted: an equal number descends to
/// the right on insert, and search/remove stop at the first match on
/// the descent path. With duplicates present a lookup is therefore only
/// guaranteed to reach one of the matching courses.
#[derive(Debug)]
pub struct CourseTree {
    arena: Arena<CourseNode>,
    root: Option<Index>,
}

impl Default for CourseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Number of stored courses, duplicates included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Insert a course, keeping the ordering invariant.
    ///
    /// Descends from the root: strictly smaller numbers go left,
    /// everything else (duplicates included) goes right, and the course
    /// is attached at the first empty slot. No rebalancing. Always
    /// succeeds.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, course: Course) {
        let Some(root) = self.root else {
            let idx = self.arena.insert(CourseNode::new(course));
            self.root = Some(idx);
            return;
        };

        let mut cur = root;
        let (parent, went_left) = loop {
            let node = &self.arena[cur];
            if course.number < node.course.number {
                match node.left {
                    Some(left) => cur = left,
                    None => break (cur, true),
                }
            } else {
                match node.right {
                    Some(right) => cur = right,
                    None => break (cur, false),
                }
            }
        };

        let idx = self.arena.insert(CourseNode::new(course));
        let slot = &mut self.arena[parent];
        if went_left {
            slot.left = Some(idx);
        } else {
            slot.right = Some(idx);
        }
    }

    /// Look up a course by number.
    ///
    /// Cost is O(depth), which is O(n) on a degenerate tree. Returns
    /// the first match on the descent path, or `None` when the path
    /// ends at an empty slot.
    #[instrument(level = "trace", skip(self))]
    pub fn search(&self, number: &str) -> Option<&Course> {
        let mut cur = self.root;
        while let Some(idx) = cur {
            let node = &self.arena[idx];
            match number.cmp(node.course.number.as_str()) {
                Ordering::Equal => return Some(&node.course),
                Ordering::Less => cur = node.left,
                Ordering::Greater => cur = node.right,
            }
        }
        None
    }

    /// Remove the course stored under `number`.
    ///
    /// An absent number is a silent no-op. With duplicates present,
    /// each call removes exactly one matching node (the first on the
    /// descent path).
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, number: &str) {
        let mut link = Link::Root;
        let mut cur = self.root;
        while let Some(idx) = cur {
            let node = &self.arena[idx];
            match number.cmp(node.course.number.as_str()) {
                Ordering::Less => {
                    link = Link::Left(idx);
                    cur = node.left;
                }
                Ordering::Greater => {
                    link = Link::Right(idx);
                    cur = node.right;
                }
                Ordering::Equal => {
                    self.remove_node(idx, link);
                    return;
                }
            }
        }
    }

    fn remove_node(&mut self, idx: Index, link: Link) {
        let (left, right) = {
            let node = &self.arena[idx];
            (node.left, node.right)
        };

        match (left, right) {
            // Leaf: detach.
            (None, None) => {
                self.relink(link, None);
                self.arena.remove(idx);
            }
            // One child: the child takes the node's place.
            (Some(child), None) | (None, Some(child)) => {
                self.relink(link, Some(child));
                self.arena.remove(idx);
            }
            // Two children: splice the in-order successor, the leftmost
            // node of the right subtree. It has no left child, so its
            // own excision is the leaf or single-child case.
            (Some(_), Some(right)) => {
                let mut succ_link = Link::Right(idx);
                let mut succ = right;
                while let Some(next) = self.arena[succ].left {
                    succ_link = Link::Left(succ);
                    succ = next;
                }
                let succ_right = self.arena[succ].right;
                self.relink(succ_link, succ_right);
                if let Some(node) = self.arena.remove(succ) {
                    self.arena[idx].course = node.course;
                }
            }
        }
    }

    fn relink(&mut self, link: Link, to: Option<Index>) {
        match link {
            Link::Root => self.root = to,
            Link::Left(parent) => self.arena[parent].left = to,
            Link::Right(parent) => self.arena[parent].right = to,
        }
    }

    /// Iterate courses in ascending course-number order.
    ///
    /// Every call starts a fresh walk; no iterator state survives
    /// between calls.
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self)
    }

    /// Longest root-to-leaf path, 0 for an empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((idx, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.arena[idx];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max
    }

    /// Render the tree shape, one course number per node.
    ///
    /// `None` for an empty tree. The shape mirrors insertion order, so
    /// this is also how a degenerate (list-like) catalog shows up.
    pub fn to_display_tree(&self) -> Option<Tree<String>> {
        self.root.map(|root| self.display_subtree(root))
    }

    fn display_subtree(&self, idx: Index) -> Tree<String> {
        let node = &self.arena[idx];
        let leaves: Vec<_> = [node.left, node.right]
            .into_iter()
            .flatten()
            .map(|child| self.display_subtree(child))
            .collect();
        Tree::new(node.course.number.clone()).with_leaves(leaves)
    }
}

/// Explicit-stack in-order walk: the stack holds the path of nodes
/// whose own course is still to be emitted.
pub struct InOrderIter<'a> {
    arena: &'a Arena<CourseNode>,
    stack: Vec<Index>,
}

impl<'a> InOrderIter<'a> {
    fn new(tree: &'a CourseTree) -> Self {
        let mut iter = Self {
            arena: &tree.arena,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut cur: Option<Index>) {
        while let Some(idx) = cur {
            self.stack.push(idx);
            cur = self.arena[idx].left;
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let arena = self.arena;
        let node = &arena[idx];
        self.push_left_spine(node.right);
        Some(&node.course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(number: &str) -> Course {
        Course {
            number: number.to_string(),
            name: format!("{number} title"),
            prerequisites: Vec::new(),
        }
    }

    #[test]
    fn given_empty_tree_then_no_results() {
        let tree = CourseTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.search("CSCI100"), None);
        assert_eq!(tree.iter().count(), 0);
        assert!(tree.to_display_tree().is_none());
    }

    #[test]
    fn given_inserts_when_searching_then_finds_stored_course() {
        let mut tree = CourseTree::new();
        tree.insert(course("CSCI200"));
        tree.insert(course("CSCI100"));
        tree.insert(course("MATH201"));

        let found = tree.search("CSCI100").expect("course should be found");
        assert_eq!(found.number, "CSCI100");
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn given_branching_inserts_then_display_tree_shows_root() {
        let mut tree = CourseTree::new();
        tree.insert(course("CSCI200"));
        tree.insert(course("CSCI100"));
        tree.insert(course("MATH201"));

        let rendered = tree.to_display_tree().expect("non-empty tree");
        assert!(rendered.to_string().starts_with("CSCI200"));
        assert_eq!(tree.depth(), 2);
    }
}
