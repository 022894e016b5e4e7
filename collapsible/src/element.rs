use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Content of a rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    None,
    Text(String),
    Children(Vec<Element>),
}

/// Rendered output of a component: a lightweight description of the node a
/// host tree would create. Carries exactly the attributes the collapsible
/// drives; everything visual beyond these is the stylesheet's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    /// Class tokens applied to the node.
    pub classes: Vec<&'static str>,

    /// Max-height constraint in pixels. `None` leaves the node unconstrained
    /// so it can resize with its content.
    pub max_height: Option<u16>,

    /// Accessibility hidden attribute.
    pub hidden: bool,

    // Transition styling, forwarded verbatim when set.
    pub transition_duration: Option<String>,
    pub transition_timing_function: Option<String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            classes: Vec::new(),
            max_height: None,
            hidden: false,
            transition_duration: None,
            transition_timing_function: None,
        }
    }
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn classes(mut self, classes: impl IntoIterator<Item = &'static str>) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn max_height(mut self, px: u16) -> Self {
        self.max_height = Some(px);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn transition(
        mut self,
        duration: impl Into<String>,
        timing_function: impl Into<String>,
    ) -> Self {
        self.transition_duration = Some(duration.into());
        self.transition_timing_function = Some(timing_function.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// True when the element renders no content at all.
    pub fn is_empty(&self) -> bool {
        matches!(&self.content, Content::None)
            || matches!(&self.content, Content::Children(children) if children.is_empty())
    }
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}
