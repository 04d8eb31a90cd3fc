use serde::Serialize;

use super::palette::HexColor;

/// Role of a display node. Presentation layers style nodes by kind.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Region,
    Placeholder,
    FilterBar,
    FilterButton,
    Card,
    Header,
    Name,
    Company,
    Overall,
    Label,
    Description,
    AttributeBars,
    AttributeBar,
    Score,
    Tags,
    Tag,
    Actions,
    Button,
    Modal,
    Title,
    Section,
    Slider,
    CharCount,
}

/// What activating a node does.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Filter { category: String },
    Rate { model_id: u32 },
    Details { model_id: u32 },
    SetScore { code: &'static str },
    Submit,
    Cancel,
}

/// A labelled, styled node of a rendered view.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DisplayNode {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
    /// Fill on the 0-100 scale, for bars and sliders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: None,
            color: None,
            width: None,
            action: None,
            active: false,
            children: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn color(mut self, color: HexColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn width(mut self, width: u8) -> Self {
        self.width = Some(width);
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn child(mut self, child: DisplayNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = DisplayNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// First direct child of `kind`.
    pub fn first(&self, kind: NodeKind) -> Option<&DisplayNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Every node of `kind` in this subtree, depth first.
    pub fn find_all(&self, kind: NodeKind) -> Vec<&DisplayNode> {
        let mut found = Vec::new();
        self.collect(kind, &mut found);
        found
    }

    fn collect<'a>(&'a self, kind: NodeKind, found: &mut Vec<&'a DisplayNode>) {
        if self.kind == kind {
            found.push(self);
        }
        for child in &self.children {
            child.collect(kind, found);
        }
    }
}
