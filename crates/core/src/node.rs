//! The element tree.
//!
//! Every node owns its children exclusively through `Box<dyn Node>`. Copying
//! a node copies the whole subtree, and every child is copied as its own
//! concrete type so that composites such as tables keep their write order.

use crate::attributes::{Attr, AttrSlot, Attributes};
use crate::error::ElementError;
use crate::render::RenderContext;
use htmlgen_types::TagKind;
use std::any::Any;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Helper for cloning and downcasting `Node` trait objects.
pub trait NodeClone {
    fn clone_box(&self) -> Box<dyn Node>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> NodeClone for T
where
    T: 'static + Node + Clone,
{
    fn clone_box(&self) -> Box<dyn Node> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Clone for Box<dyn Node> {
    fn clone(&self) -> Box<dyn Node> {
        self.clone_box()
    }
}

/// The central trait for everything that can live in an element tree.
///
/// Implementors wrap an [`Element`] and may override
/// [`Node::write_html`] to change how they are written.
pub trait Node: NodeClone + fmt::Debug + Send + Sync {
    fn element(&self) -> &Element;

    fn element_mut(&mut self) -> &mut Element;

    /// Appends this node's markup to `out`.
    fn write_html(&self, out: &mut String, ctx: &mut RenderContext<'_>) {
        self.element().write_tree(out, ctx);
    }

    /// Renders this node outside of any page.
    fn html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, &mut RenderContext::detached());
        out
    }

    /// Renders the children only, without this node's own tags.
    fn inner_html(&self) -> String {
        let mut out = String::new();
        self.element()
            .write_children(&mut out, &mut RenderContext::detached());
        out
    }

    fn kind(&self) -> TagKind {
        self.element().kind()
    }

    /// Depth-first search of the descendants for an id. The node itself is
    /// not considered.
    fn find(&self, id: &str) -> Option<&dyn Node> {
        self.element().find(id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut dyn Node> {
        self.element_mut().find_mut(id)
    }

    fn get(&self, id: &str) -> Result<&dyn Node, ElementError> {
        self.element().get(id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut dyn Node, ElementError> {
        self.element_mut().get_mut(id)
    }

    fn exists(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Like [`Node::find`] but only looks at direct children.
    fn find_child(&self, id: &str) -> Option<&dyn Node> {
        self.element().find_child(id)
    }

    fn get_child(&self, id: &str) -> Result<&dyn Node, ElementError> {
        self.element().get_child(id)
    }

    fn len(&self) -> usize {
        self.element().children.len()
    }

    fn is_empty(&self) -> bool {
        self.element().children.is_empty()
    }

    /// Adds a child, text, or attribute. See [`Element::add`].
    fn add(&mut self, content: impl Into<Content>) -> Result<&mut Self, ElementError>
    where
        Self: Sized,
    {
        self.element_mut().add(content)?;
        Ok(self)
    }
}

impl<'a> dyn Node + 'a {
    pub fn downcast_ref<T: Node + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Node + 'static>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    pub fn is<T: Node + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl fmt::Display for dyn Node + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html())
    }
}

/// Anything that can be handed to [`Element::add`].
#[derive(Debug, Clone)]
pub enum Content {
    Node(Box<dyn Node>),
    /// Wrapped in a [`Text`] node.
    Text(String),
    /// Routed into the receiver's attributes.
    Attr(Attr),
}

impl<T: Node + 'static> From<T> for Content {
    fn from(node: T) -> Self {
        Content::Node(Box::new(node))
    }
}

impl From<Box<dyn Node>> for Content {
    fn from(node: Box<dyn Node>) -> Self {
        Content::Node(node)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&String> for Content {
    fn from(text: &String) -> Self {
        Content::Text(text.clone())
    }
}

impl From<Attr> for Content {
    fn from(attr: Attr) -> Self {
        Content::Attr(attr)
    }
}

/// The tree primitive: a tag, its formatting flags, attributes and children.
///
/// A fresh element is a container with a closing tag and no newlines.
#[derive(Debug, Clone)]
pub struct Element {
    kind: TagKind,
    container: bool,
    closing_tag: bool,
    newline_after_tag: bool,
    newline_after_element: bool,
    attrs: Attributes,
    children: Vec<Box<dyn Node>>,
}

impl Default for Element {
    fn default() -> Self {
        Self::new(TagKind::Undefined)
    }
}

impl Element {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            container: true,
            closing_tag: true,
            newline_after_tag: false,
            newline_after_element: false,
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    // --- Formatting presets, used when configuring a tag type ---

    /// Newline after the open tag and after the element.
    pub fn block(mut self) -> Self {
        self.newline_after_tag = true;
        self.newline_after_element = true;
        self
    }

    /// Newline after the element only.
    pub fn line(mut self) -> Self {
        self.newline_after_element = true;
        self
    }

    /// Newline after the open tag only.
    pub fn open_line(mut self) -> Self {
        self.newline_after_tag = true;
        self
    }

    /// No closing tag. Children are never written.
    pub fn void(mut self) -> Self {
        self.closing_tag = false;
        self
    }

    /// Not a container: every attempt to add a child fails.
    pub fn leaf(mut self) -> Self {
        self.container = false;
        self
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn tag(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_container(&self) -> bool {
        self.container
    }

    pub fn has_closing_tag(&self) -> bool {
        self.closing_tag
    }

    pub fn newline_after_tag(&self) -> bool {
        self.newline_after_tag
    }

    pub fn newline_after_element(&self) -> bool {
        self.newline_after_element
    }

    pub fn set_newline_after_tag(&mut self, value: bool) -> &mut Self {
        self.newline_after_tag = value;
        self
    }

    pub fn set_newline_after_element(&mut self, value: bool) -> &mut Self {
        self.newline_after_element = value;
        self
    }

    // --- Attributes ---

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    pub fn id(&self) -> &str {
        self.attrs.get(AttrSlot::Id)
    }

    pub fn class(&self) -> &str {
        self.attrs.get(AttrSlot::Class)
    }

    pub fn style(&self) -> &str {
        self.attrs.get(AttrSlot::Style)
    }

    pub fn attr(&self, slot: AttrSlot) -> &str {
        self.attrs.get(slot)
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.attrs.set(AttrSlot::Id, id);
        self
    }

    /// Replaces the class list.
    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.attrs.set(AttrSlot::Class, class);
        self
    }

    /// Appends to the class list.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.attrs.add_class(class);
        self
    }

    pub fn set_style(&mut self, style: impl Into<String>) -> &mut Self {
        self.attrs.set(AttrSlot::Style, style);
        self
    }

    /// Sets an attribute by name, routing well-known names into their slot.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.attrs.insert(name, value);
        self
    }

    /// Sets `data-<name>`.
    pub fn set_data(&mut self, name: &str, value: &str) -> &mut Self {
        self.attrs.push_other(&format!("data-{name}"), value);
        self
    }

    // --- Children ---

    pub fn children(&self) -> &[Box<dyn Node>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn Node>] {
        &mut self.children
    }

    /// Adds `content` to this element.
    ///
    /// Nodes and text are appended as children; a [`Group`] has its children
    /// spliced in instead of being nested. Attributes are routed into this
    /// element's attribute store and are accepted by every element.
    ///
    /// # Errors
    ///
    /// [`ElementError::NotAContainer`] if this element cannot hold children,
    /// [`ElementError::EmptyGroup`] if `content` is a group without children.
    /// The element is unchanged on error.
    pub fn add(&mut self, content: impl Into<Content>) -> Result<&mut Self, ElementError> {
        let content = content.into();
        self.check_accepts(&content)?;
        self.insert(content);
        Ok(self)
    }

    /// Adds a deep copy of `node`.
    pub fn add_copy(&mut self, node: &dyn Node) -> Result<&mut Self, ElementError> {
        self.add(node.clone_box())
    }

    /// Replaces all children with `content`.
    pub fn set_content(&mut self, content: impl Into<Content>) -> Result<&mut Self, ElementError> {
        let content = content.into();
        self.check_accepts(&content)?;
        self.children.clear();
        self.insert(content);
        Ok(self)
    }

    fn check_accepts(&self, content: &Content) -> Result<(), ElementError> {
        let node = match content {
            Content::Attr(_) => return Ok(()),
            Content::Text(_) => None,
            Content::Node(node) => Some(node),
        };
        if !self.container {
            return Err(ElementError::NotAContainer { tag: self.kind });
        }
        if let Some(node) = node
            && node.kind() == TagKind::Group
            && node.is_empty()
        {
            return Err(ElementError::EmptyGroup);
        }
        Ok(())
    }

    fn insert(&mut self, content: Content) {
        match content {
            Content::Attr(attr) => {
                self.attrs.insert(attr.name(), attr.value());
            }
            Content::Text(text) => self.children.push(Box::new(Text::new(text))),
            Content::Node(mut node) if node.kind() == TagKind::Group => {
                self.children.append(&mut node.element_mut().children);
            }
            Content::Node(node) => self.children.push(node),
        }
    }

    /// The child at `index`.
    pub fn at(&self, index: usize) -> Result<&dyn Node, ElementError> {
        match self.children.get(index) {
            Some(child) => Ok(&**child),
            None => Err(self.out_of_bounds(index)),
        }
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut dyn Node, ElementError> {
        let err = self.out_of_bounds(index);
        match self.children.get_mut(index) {
            Some(child) => Ok(&mut **child),
            None => Err(err),
        }
    }

    fn out_of_bounds(&self, index: usize) -> ElementError {
        ElementError::IndexOutOfBounds {
            index,
            len: self.children.len(),
        }
    }

    /// Removes all children. Attributes are kept.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Removes all children and attributes. The tag and flags are kept.
    pub fn clear_all(&mut self) {
        self.children.clear();
        self.attrs.clear();
    }

    /// Moves the whole element out, leaving an empty element of kind
    /// [`TagKind::Undefined`] behind.
    pub fn take(&mut self) -> Element {
        std::mem::take(self)
    }

    // --- Search ---

    pub fn find(&self, id: &str) -> Option<&dyn Node> {
        self.find_boxed(id).map(|node| &**node)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut dyn Node> {
        match self.find_boxed_mut(id) {
            Some(node) => Some(&mut **node),
            None => None,
        }
    }

    fn find_boxed(&self, id: &str) -> Option<&Box<dyn Node>> {
        for child in &self.children {
            if child.element().id() == id {
                return Some(child);
            }
            if let Some(found) = child.element().find_boxed(id) {
                return Some(found);
            }
        }
        None
    }

    fn find_boxed_mut(&mut self, id: &str) -> Option<&mut Box<dyn Node>> {
        let index = self
            .children
            .iter()
            .position(|c| c.element().id() == id || c.element().find_boxed(id).is_some())?;
        let child = &mut self.children[index];
        if child.element().id() == id {
            return Some(child);
        }
        child.element_mut().find_boxed_mut(id)
    }

    /// # Errors
    ///
    /// [`ElementError::IdNotFound`] if no descendant has the id.
    pub fn get(&self, id: &str) -> Result<&dyn Node, ElementError> {
        self.find(id)
            .ok_or_else(|| ElementError::IdNotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut dyn Node, ElementError> {
        match self.find_mut(id) {
            Some(node) => Ok(node),
            None => Err(ElementError::IdNotFound(id.to_string())),
        }
    }

    pub fn find_child(&self, id: &str) -> Option<&dyn Node> {
        self.children
            .iter()
            .find(|c| c.element().id() == id)
            .map(|c| &**c)
    }

    pub fn get_child(&self, id: &str) -> Result<&dyn Node, ElementError> {
        self.find_child(id)
            .ok_or_else(|| ElementError::IdNotFound(id.to_string()))
    }

    pub fn exists(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    // --- Writing ---

    /// The generic write algorithm: open tag, children, close tag.
    ///
    /// Kinds without a tag name write their children only.
    pub fn write_tree(&self, out: &mut String, ctx: &mut RenderContext<'_>) {
        if self.kind.is_transparent() {
            self.write_children(out, ctx);
            return;
        }
        self.write_open_tag(out);
        if self.container && self.closing_tag {
            self.write_children(out, ctx);
        }
        self.write_close_tag(out);
    }

    pub fn write_open_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag());
        self.attrs.write(out);
        out.push('>');
        if self.newline_after_tag {
            out.push('\n');
        }
    }

    pub fn write_children(&self, out: &mut String, ctx: &mut RenderContext<'_>) {
        for child in &self.children {
            child.write_html(out, ctx);
        }
    }

    pub fn write_close_tag(&self, out: &mut String) {
        if self.closing_tag {
            out.push_str("</");
            out.push_str(self.tag());
            out.push('>');
        }
        if self.newline_after_element {
            out.push('\n');
        }
    }
}

impl Node for Element {
    fn element(&self) -> &Element {
        self
    }

    fn element_mut(&mut self) -> &mut Element {
        self
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html())
    }
}

/// # Panics
///
/// Panics if `index` is out of bounds. Use [`Element::at`] to handle that case.
impl Index<usize> for Element {
    type Output = dyn Node;

    fn index(&self, index: usize) -> &Self::Output {
        match self.children.get(index) {
            Some(child) => &**child,
            None => panic!("{}", self.out_of_bounds(index)),
        }
    }
}

impl IndexMut<usize> for Element {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let err = self.out_of_bounds(index);
        match self.children.get_mut(index) {
            Some(child) => &mut **child,
            None => panic!("{}", err),
        }
    }
}

/// # Panics
///
/// Panics if no descendant has the id. Use [`Element::get`] to handle that case.
impl Index<&str> for Element {
    type Output = dyn Node;

    fn index(&self, id: &str) -> &Self::Output {
        match self.find_boxed(id) {
            Some(node) => &**node,
            None => panic!("{}", ElementError::IdNotFound(id.to_string())),
        }
    }
}

impl IndexMut<&str> for Element {
    fn index_mut(&mut self, id: &str) -> &mut Self::Output {
        match self.find_boxed_mut(id) {
            Some(node) => &mut **node,
            None => panic!("{}", ElementError::IdNotFound(id.to_string())),
        }
    }
}

/// Raw text. Written verbatim; use [`Text::escaped`] for untrusted input.
#[derive(Debug, Clone)]
pub struct Text {
    element: Element,
    text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            element: Element::new(TagKind::Text).leaf(),
            text: text.into(),
        }
    }

    pub fn escaped(text: &str) -> Self {
        Self::new(crate::escape::escape(text))
    }

    /// Ends the text with a newline when written.
    pub fn with_newline(mut self) -> Self {
        self.element.newline_after_element = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Node for Text {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn write_html(&self, out: &mut String, _ctx: &mut RenderContext<'_>) {
        out.push_str(&self.text);
        if self.element.newline_after_element {
            out.push('\n');
        }
    }

    fn inner_html(&self) -> String {
        self.html()
    }
}

/// A transparent batch of nodes.
///
/// Adding a group to an element moves the group's children into the element;
/// the group itself never appears in a tree.
///
/// ```ignore
/// let items = Group::new().with(li("one")).with(li("two"));
/// list.add(items)?;
/// ```
#[derive(Debug, Clone)]
pub struct Group {
    element: Element,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    pub fn new() -> Self {
        Self {
            element: Element::new(TagKind::Group),
        }
    }

    /// Adds `content` and returns the group. Empty nested groups are skipped.
    pub fn with(mut self, content: impl Into<Content>) -> Self {
        if let Err(e) = self.element.add(content) {
            log::warn!("Skipping group member: {}", e);
        }
        self
    }
}

impl Node for Group {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}

impl<T: Into<Content>> std::ops::Add<T> for Group {
    type Output = Group;

    fn add(self, rhs: T) -> Group {
        self.with(rhs)
    }
}
