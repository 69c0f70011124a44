//! The style library: an arena of [`TextStyle`] nodes addressed by [`StyleId`].
//!
//! The library owns every node. Parents always precede their children in the
//! arena because a child can only be created once its parent exists, so
//! walking the parent chain strictly decreases the index and always ends at
//! the root.

use crate::error::StyleError;
use crate::stylesheet::StyleDefinition;
use crate::text_style::{ResolvedStyle, TextStyle};
use simple_report_types::Color;
use std::collections::HashMap;

/// Handle to a style inside a [`TextStyleLib`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(usize);

impl StyleId {
    pub const ROOT: StyleId = StyleId(0);

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_root(self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone)]
struct StyleNode {
    name: Option<String>,
    style: TextStyle,
}

#[derive(Debug, Clone)]
pub struct TextStyleLib {
    nodes: Vec<StyleNode>,
    by_name: HashMap<String, StyleId>,
}

impl Default for TextStyleLib {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStyleLib {
    /// Creates a library holding only the root style.
    pub fn new() -> Self {
        Self {
            nodes: vec![StyleNode {
                name: None,
                style: TextStyle::root(),
            }],
            by_name: HashMap::new(),
        }
    }

    pub fn root(&self) -> StyleId {
        StyleId::ROOT
    }

    /// Looks a style up by name. The empty name denotes the root.
    pub fn get_style(&self, name: &str) -> Option<StyleId> {
        if name.is_empty() {
            return Some(StyleId::ROOT);
        }
        self.by_name.get(name).copied()
    }

    /// Creates a new named style below `parent_name` (or below the root if
    /// `parent_name` is empty). All attributes of the new style inherit.
    pub fn create_child_style(&mut self, name: &str, parent_name: &str) -> Result<StyleId, StyleError> {
        if name.is_empty() {
            return Err(StyleError::EmptyName);
        }
        if self.by_name.contains_key(name) {
            return Err(StyleError::DuplicateName(name.to_string()));
        }
        let parent = self
            .get_style(parent_name)
            .ok_or_else(|| StyleError::UnknownParent(parent_name.to_string()))?;

        let id = StyleId(self.nodes.len());
        self.nodes.push(StyleNode {
            name: Some(name.to_string()),
            style: TextStyle::child_of(parent),
        });
        self.by_name.insert(name.to_string(), id);
        log::debug!("Created text style '{}' ({:?}) with parent {:?}", name, id, parent);
        Ok(id)
    }

    /// Creates (or, for an existing name, updates) styles from definitions.
    /// Definitions are applied in order, so a parent must come before its children.
    pub fn apply_definitions(&mut self, definitions: &[StyleDefinition]) -> Result<(), StyleError> {
        for def in definitions {
            let id = match self.get_style(&def.name) {
                Some(existing) => existing,
                None => self.create_child_style(&def.name, def.parent.as_deref().unwrap_or(""))?,
            };
            if let Some(style) = self.style_mut(id) {
                def.apply_to(style);
            }
        }
        Ok(())
    }

    pub fn contains(&self, id: StyleId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn style(&self, id: StyleId) -> Option<&TextStyle> {
        self.nodes.get(id.0).map(|n| &n.style)
    }

    pub fn style_mut(&mut self, id: StyleId) -> Option<&mut TextStyle> {
        self.nodes.get_mut(id.0).map(|n| &mut n.style)
    }

    pub fn name_of(&self, id: StyleId) -> Option<&str> {
        self.nodes.get(id.0).and_then(|n| n.name.as_deref())
    }

    /// Names of all non-root styles in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| n.name.as_deref())
    }

    /// Number of styles including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Walks from `id` up to the root and returns the first value `pick`
    /// finds. Ids from another library resolve like the root.
    fn lookup<T>(&self, id: StyleId, pick: impl Fn(&TextStyle) -> Option<T>) -> Option<T> {
        let mut current = if self.contains(id) { Some(id) } else { Some(StyleId::ROOT) };
        while let Some(cur) = current {
            let style = &self.nodes[cur.0].style;
            if let Some(value) = pick(style) {
                return Some(value);
            }
            current = style.parent;
        }
        None
    }

    pub fn font_name(&self, id: StyleId) -> String {
        self.lookup(id, |s| s.font_name().map(str::to_string))
            .unwrap_or_else(|| ResolvedStyle::default().font_name)
    }

    pub fn font_size_mm(&self, id: StyleId) -> f64 {
        self.lookup(id, TextStyle::font_size_mm)
            .unwrap_or(ResolvedStyle::default().font_size_mm)
    }

    pub fn is_bold(&self, id: StyleId) -> bool {
        self.lookup(id, TextStyle::bold).unwrap_or(false)
    }

    pub fn is_italic(&self, id: StyleId) -> bool {
        self.lookup(id, TextStyle::italic).unwrap_or(false)
    }

    pub fn color(&self, id: StyleId) -> Color {
        self.lookup(id, TextStyle::color).unwrap_or(Color::BLACK)
    }

    pub fn resolve(&self, id: StyleId) -> ResolvedStyle {
        ResolvedStyle {
            font_name: self.font_name(id),
            font_size_mm: self.font_size_mm(id),
            bold: self.is_bold(id),
            italic: self.is_italic(id),
            color: self.color(id),
        }
    }
}
