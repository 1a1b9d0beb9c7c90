// src/crawl/tree.rs
// =============================================================================
// The in-memory site-map tree.
//
// Pages live in one Vec (an "arena") and refer to each other by index:
// - a parent owns the list of its children's ids, in discovery order
// - a child keeps its parent's id, used only to walk up to the root
//
// Indices instead of Rc/Weak pointers mean no reference cycles and a tree
// that is trivially Send, so it can sit behind one Mutex shared by every
// crawl task.
//
// Pages are never removed once created. The mutations are attaching a new
// child and, before the root has any children, moving the root to where its
// request was redirected. Both are crate-private: callers of crawl() get a
// read-only tree.
//
// A HashSet of every location in the tree makes the tree-wide lookup O(1),
// which matters because the crawler runs it for every link while holding
// the tree lock.
// =============================================================================

use std::collections::HashSet;
use url::Url;

/// Identifies a page inside its [`SiteTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(usize);

/// A node in the site-map: one unique, fragment-free URL.
#[derive(Debug, Clone)]
pub struct Page {
    location: Url,
    parent: Option<PageId>,
    children: Vec<PageId>,
}

impl Page {
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// None for the root
    pub fn parent(&self) -> Option<PageId> {
        self.parent
    }

    /// Children in the order their links appeared on this page
    pub fn children(&self) -> &[PageId] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct SiteTree {
    pages: Vec<Page>,
    locations: HashSet<Url>,
}

impl SiteTree {
    /// Creates a single-node tree.
    pub fn new(root: Url) -> Self {
        Self {
            locations: HashSet::from([root.clone()]),
            pages: vec![Page {
                location: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> PageId {
        PageId(0)
    }

    /// # Panics
    ///
    /// If `id` was handed out by another tree and is out of range.
    pub fn page(&self, id: PageId) -> &Page {
        &self.pages[id.0]
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    // A tree always holds at least its root
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Walks parent links up to the page with no parent.
    pub fn root_of(&self, mut id: PageId) -> PageId {
        while let Some(parent) = self.page(id).parent {
            id = parent;
        }
        id
    }

    /// Depth of a page, the root being 1.
    pub fn depth(&self, mut id: PageId) -> usize {
        let mut depth = 1;
        while let Some(parent) = self.page(id).parent {
            depth += 1;
            id = parent;
        }
        depth
    }

    /// Scans the subtree rooted at `subtree` for a page at `url`.
    ///
    /// To dedupe across the whole crawl, pass the global root
    /// (see [`SiteTree::root_of`]), not the page being scanned: sibling
    /// branches may already hold the URL.
    pub fn exists(&self, url: &Url, subtree: PageId) -> bool {
        if subtree == self.root() {
            return self.locations.contains(url);
        }

        let mut stack = vec![subtree];
        while let Some(id) = stack.pop() {
            let page = self.page(id);
            if page.location == *url {
                return true;
            }
            stack.extend(page.children.iter().copied());
        }
        false
    }

    /// Tree-wide existence check.
    pub fn contains(&self, url: &Url) -> bool {
        self.exists(url, self.root())
    }

    /// Appends a new page at the end of `parent`'s children.
    ///
    /// The caller is responsible for the uniqueness check; the crawler does
    /// both under the same lock.
    pub(crate) fn attach_child(&mut self, parent: PageId, location: Url) -> PageId {
        let id = PageId(self.pages.len());
        self.locations.insert(location.clone());
        self.pages.push(Page {
            location,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.pages[parent.0].children.push(id);
        id
    }

    /// Moves the root to the URL its request was redirected to.
    ///
    /// Only allowed while the root has no children, so nothing discovered
    /// so far can clash with the new location. Returns whether it moved.
    pub(crate) fn relocate_root(&mut self, page: PageId, location: Url) -> bool {
        let root = self.root();
        if page != root || !self.pages[root.0].children.is_empty() {
            return false;
        }

        let old = std::mem::replace(&mut self.pages[root.0].location, location.clone());
        self.locations.remove(&old);
        self.locations.insert(location);
        true
    }

    /// Depth-first, pre-order traversal: each page comes before its
    /// children, children before the parent's next sibling.
    ///
    /// Yields `(depth, page)` with the root at depth 1.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(self.root(), 1)],
        }
    }
}

/// Iterator returned by [`SiteTree::walk`].
pub struct Walk<'a> {
    tree: &'a SiteTree,
    stack: Vec<(PageId, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Page);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let page = self.tree.page(id);
        // Reversed so the first child is popped first
        self.stack
            .extend(page.children.iter().rev().map(|&child| (child, depth + 1)));
        Some((depth, page))
    }
}
