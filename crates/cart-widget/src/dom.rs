//! Minimal page tree.
//!
//! Nodes live in an arena and are addressed by generational [`NodeId`]s.
//! Removing a subtree frees its slots; ids that pointed into it go stale and
//! every accessor treats a stale id like a node that is no longer on the page.

use cart_core::ItemId;

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// Click handler attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listener {
    /// "Add to cart" trigger.
    AddToCart,
    /// Remove control of a rendered line item.
    RemoveItem(ItemId),
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
    raw_html: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listener: Option<Listener>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
            raw_html: None,
            parent: None,
            children: Vec::new(),
            listener: None,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Elements without a closing tag.
const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

/// An arena-backed element tree rooted at a `<body>` node.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only its `<body>` root.
    pub fn new() -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        };
        doc.root = doc.create_element("body");
        doc
    }

    /// The `<body>` node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Whether `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let node = Some(Node::new(tag));
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = node;
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node,
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return;
        }
        if self.ancestors(parent).any(|a| a == child) {
            return;
        }
        self.detach(child);
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Create an element with classes and append it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let id = self.create_element(tag);
        for class in classes {
            self.add_class(id, class);
        }
        self.append_child(parent, id);
        id
    }

    fn detach(&mut self, id: NodeId) {
        let parent = self.get(id).and_then(|n| n.parent);
        if let Some(parent) = parent {
            if let Some(node) = self.get_mut(parent) {
                node.children.retain(|c| *c != id);
            }
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
        }
    }

    /// Remove a node and free its whole subtree.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root || !self.contains(id) {
            return;
        }
        self.detach(id);
        self.free_subtree(id);
    }

    /// Remove and free every child of `id`.
    pub fn clear_children(&mut self, id: NodeId) {
        let children = match self.get_mut(id) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            self.free_subtree(child);
        }
        if let Some(node) = self.get_mut(id) {
            node.raw_html = None;
            node.text.clear();
        }
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(slot) = self.slots.get_mut(current.index) else {
                continue;
            };
            if slot.generation != current.generation {
                continue;
            }
            if let Some(node) = slot.node.take() {
                stack.extend(node.children);
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(current.index);
            }
        }
    }

    /// Tag name, lower-cased.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.tag.as_str())
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.get_mut(id) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    /// Whether the node carries `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id)
            .map(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    /// The node's classes in order.
    pub fn classes(&self, id: NodeId) -> &[String] {
        self.get(id).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    /// Set an attribute, keeping its original position if it already exists.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(node) = self.get_mut(id) {
            match node.attributes.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = value.to_string(),
                None => node
                    .attributes
                    .push((name.to_string(), value.to_string())),
            }
        }
    }

    /// Read an attribute.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Read a `data-*` attribute by its short key (`data("price")` reads `data-price`).
    pub fn data(&self, id: NodeId, key: &str) -> Option<&str> {
        self.attribute(id, &format!("data-{}", key))
    }

    /// Set a `data-*` attribute by its short key.
    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) {
        self.set_attribute(id, &format!("data-{}", key), value);
    }

    /// Replace the node's content with plain text.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        if let Some(node) = self.get_mut(id) {
            node.text = text.to_string();
        }
    }

    /// Replace the node's content with markup, kept verbatim.
    pub fn set_inner_html(&mut self, id: NodeId, html: &str) {
        self.clear_children(id);
        if let Some(node) = self.get_mut(id) {
            node.raw_html = Some(html.to_string());
        }
    }

    /// Concatenated text of the node and its descendants. Verbatim markup is opaque.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(node) = self.get(id) {
            out.push_str(&node.text);
            for child in &node.children {
                self.collect_text(*child, out);
            }
        }
    }

    /// Parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// Children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// `id` followed by its ancestors up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.contains(id).then_some(id), move |current| {
            self.parent(*current)
        })
    }

    /// Nearest node, starting at `id` itself, with the given tag.
    pub fn closest(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.ancestors(id).find(|a| self.tag(*a) == Some(tag))
    }

    /// Descendants of `id` in document order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// First descendant carrying `class`.
    pub fn find_by_class(&self, id: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(id)
            .into_iter()
            .find(|d| self.has_class(*d, class))
    }

    /// First descendant with `tag`.
    pub fn find_by_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(id)
            .into_iter()
            .find(|d| self.tag(*d) == Some(tag))
    }

    /// Every node on the page carrying any of `classes`, in document order.
    pub fn query_all<S: AsRef<str>>(&self, classes: &[S]) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|d| classes.iter().any(|c| self.has_class(*d, c.as_ref())))
            .collect()
    }

    /// Attach a click handler, replacing any previous one.
    pub fn set_listener(&mut self, id: NodeId, listener: Listener) {
        if let Some(node) = self.get_mut(id) {
            node.listener = Some(listener);
        }
    }

    /// The node's click handler.
    pub fn listener(&self, id: NodeId) -> Option<&Listener> {
        self.get(id)?.listener.as_ref()
    }

    /// Where a click on `id` is handled: the nearest node, starting at `id`,
    /// that has a listener.
    pub fn dispatch_target(&self, id: NodeId) -> Option<(NodeId, Listener)> {
        self.ancestors(id)
            .find_map(|a| self.listener(a).map(|l| (a, l.clone())))
    }

    /// Serialized content of a node.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(node) = self.get(id) {
            self.write_content(node, &mut out);
        }
        out
    }

    /// Serialized node including its own tag.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    fn write_content(&self, node: &Node, out: &mut String) {
        if let Some(raw) = &node.raw_html {
            out.push_str(raw);
            return;
        }
        out.push_str(&escape_text(&node.text));
        for child in &node.children {
            self.write_node(*child, out);
        }
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        out.push('<');
        out.push_str(&node.tag);
        if !node.classes.is_empty() {
            out.push_str(&format!(
                " class=\"{}\"",
                escape_attribute(&node.classes.join(" "))
            ));
        }
        for (name, value) in &node.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
        }
        out.push('>');
        if VOID_TAGS.contains(&node.tag.as_str()) {
            return;
        }
        self.write_content(node, out);
        out.push_str(&format!("</{}>", node.tag));
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
