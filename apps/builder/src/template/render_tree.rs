//! Technology-neutral render tree produced by the layouts.
//!
//! Nodes describe structure plus a few styling hints (font family, emphasis,
//! accent color). A host renderer maps them onto HTML, print, or anything else.

use serde::Serialize;

use crate::models::TemplateId;
use crate::template::flags::SectionFlags;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTree {
    pub template: TemplateId,
    pub accent_color: String,
    pub flags: SectionFlags,
    pub root: RenderNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    SingleColumn,
    TwoColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    Serif,
    Sans,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Regular,
    Strong,
    Italic,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    Center,
}

/// How a section heading is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleStyle {
    /// Accent-colored caps followed by a hairline rule.
    Ruled,
    /// Accent-colored caps with a tinted underline.
    Underlined,
    /// White caps on a black block.
    Inverted,
    /// Small caps label inside the sidebar.
    SidebarLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Projects,
    Education,
    Skills,
    Contact,
    Links,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Github,
    Linkedin,
    Live,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub font: Font,
    pub emphasis: Emphasis,
    pub color: Option<String>,
}

impl TextStyle {
    pub fn new(font: Font, emphasis: Emphasis) -> Self {
        Self {
            font,
            emphasis,
            color: None,
        }
    }

    pub fn colored(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    Page {
        layout: PageLayout,
        font: Font,
        children: Vec<RenderNode>,
    },
    Sidebar {
        width_percent: u8,
        background: String,
        children: Vec<RenderNode>,
    },
    Main {
        children: Vec<RenderNode>,
    },
    Header {
        align: Align,
        children: Vec<RenderNode>,
    },
    Section {
        section: SectionKind,
        title: Option<String>,
        title_style: TitleStyle,
        children: Vec<RenderNode>,
    },
    /// One item of a list section, stacked vertically.
    Entry {
        children: Vec<RenderNode>,
    },
    /// Horizontal run of nodes.
    Row {
        children: Vec<RenderNode>,
    },
    /// Two-column grid row: narrow label column, wide content column.
    GridRow {
        label: Vec<RenderNode>,
        content: Vec<RenderNode>,
    },
    Heading {
        level: u8,
        text: String,
        style: TextStyle,
    },
    Text {
        text: String,
        style: TextStyle,
    },
    /// `label: value` on a single line.
    LabeledLine {
        label: String,
        value: String,
    },
    Chips {
        label: Option<String>,
        items: Vec<String>,
    },
    /// Items on one line separated by `separator`.
    InlineList {
        label: Option<String>,
        items: Vec<String>,
        separator: String,
    },
    Link {
        link: LinkKind,
        url: String,
    },
}

impl RenderNode {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        RenderNode::Text {
            text: text.into(),
            style,
        }
    }

    pub fn heading(level: u8, text: impl Into<String>, style: TextStyle) -> Self {
        RenderNode::Heading {
            level,
            text: text.into(),
            style,
        }
    }
}

#[cfg(test)]
impl RenderNode {
    /// Depth-first, pre-order visit of this node and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a RenderNode)) {
        visit(self);
        match self {
            RenderNode::Page { children, .. }
            | RenderNode::Sidebar { children, .. }
            | RenderNode::Main { children }
            | RenderNode::Header { children, .. }
            | RenderNode::Section { children, .. }
            | RenderNode::Entry { children }
            | RenderNode::Row { children } => {
                children.iter().for_each(|c| c.walk(visit));
            }
            RenderNode::GridRow { label, content } => {
                label.iter().chain(content).for_each(|c| c.walk(visit));
            }
            RenderNode::Heading { .. }
            | RenderNode::Text { .. }
            | RenderNode::LabeledLine { .. }
            | RenderNode::Chips { .. }
            | RenderNode::InlineList { .. }
            | RenderNode::Link { .. } => {}
        }
    }

    /// Plain text carried by this node itself (not its children).
    pub fn own_text(&self) -> Option<String> {
        match self {
            RenderNode::Heading { text, .. } | RenderNode::Text { text, .. } => Some(text.clone()),
            RenderNode::LabeledLine { label, value } => Some(format!("{label}: {value}")),
            RenderNode::Chips { items, .. } => Some(items.join(" ")),
            RenderNode::InlineList {
                items, separator, ..
            } => Some(items.join(&format!(" {separator} "))),
            RenderNode::Link { url, .. } => Some(url.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
impl RenderTree {
    /// Section kinds in document order.
    pub fn sections(&self) -> Vec<SectionKind> {
        let mut found = Vec::new();
        self.root.walk(&mut |node| {
            if let RenderNode::Section { section, .. } = node {
                found.push(*section);
            }
        });
        found
    }

    pub fn section(&self, kind: SectionKind) -> Option<&RenderNode> {
        let mut found = None;
        self.root.walk(&mut |node| {
            if found.is_none() {
                if let RenderNode::Section { section, .. } = node {
                    if *section == kind {
                        found = Some(node);
                    }
                }
            }
        });
        found
    }

    /// Every piece of visible text, in document order.
    pub fn texts(&self) -> Vec<String> {
        let mut texts = Vec::new();
        self.root.walk(&mut |node| {
            if let Some(text) = node.own_text() {
                texts.push(text);
            }
        });
        texts
    }
}
