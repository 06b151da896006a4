//! UI component library
//!
//! Components are Rust structs with serializable properties. A screen
//! renders into an [`Element`] tree that the host turns into native views.
//! Interactive components carry an [`EventHandler`] identifier; the host
//! sends that identifier back when the user interacts.
//!
//! # Available Components
//!
//! - [`Container`] - Layout container with children, optionally pressable
//! - [`Text`] - Text with size, weight and line limit
//! - [`Icon`] - Named icon from the Material set
//! - [`Button`] - Labeled action with optional icon
//! - [`Spinner`] - Activity indicator
//! - [`List`] - Keyed, refreshable list with an empty placeholder

use crate::theme::Color;
use crate::tokens::{font_size, sizing, FontWeight, Shadow};
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Event handler identifier sent back by the host
pub type EventHandler = String;

/// Style properties that can be applied to any component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProps {
    /// Margin around the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    /// Padding inside the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Bottom border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    /// Top border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_width: Option<f32>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Drop shadow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

fn is_default_style(style: &StyleProps) -> bool {
    style == &StyleProps::default()
}

/// Spacing values (margin, padding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
    /// Individual spacing per side
    Individual {
        /// Top spacing
        top: f32,
        /// Right spacing
        right: f32,
        /// Bottom spacing
        bottom: f32,
        /// Left spacing
        left: f32,
    },
}

impl Spacing {
    /// Create uniform spacing
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Create symmetric spacing
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Spacing::Symmetric {
            vertical,
            horizontal,
        }
    }

    /// Create individual spacing
    pub fn individual(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Spacing::Individual {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Justify content options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// End
    End,
    /// Space between
    SpaceBetween,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Row (horizontal)
    Row,
    /// Column (vertical)
    #[default]
    Column,
}

// =============================================================================
// Element Tree
// =============================================================================

/// A node in a rendered view tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Layout container
    Container(Container),
    /// Text run
    Text(Text),
    /// Icon
    Icon(Icon),
    /// Button
    Button(Button),
    /// Activity indicator
    Spinner(Spinner),
    /// Scrollable list
    List(List),
}

impl Element {
    /// Visit this element and all descendants, depth first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        match self {
            Element::Container(container) => {
                for child in &container.children {
                    child.walk(visit);
                }
            }
            Element::List(list) => {
                for item in &list.items {
                    item.element.walk(visit);
                }
                if let Some(empty) = &list.empty {
                    empty.walk(visit);
                }
            }
            _ => {}
        }
    }

    /// All text content in this subtree, in document order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |element| match element {
            Element::Text(text) => out.push(text.content.as_str()),
            Element::Button(button) => out.push(button.label.as_str()),
            _ => {}
        });
        out
    }

    /// Find the first element with the given id
    pub fn find(&self, id: &str) -> Option<&Element> {
        let mut found = None;
        self.walk(&mut |element| {
            if found.is_none() && element.id() == Some(id) {
                found = Some(element);
            }
        });
        found
    }

    /// Event handlers reachable in this subtree
    pub fn handlers(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |element| match element {
            Element::Container(Container {
                on_press: Some(handler),
                ..
            })
            | Element::Button(Button {
                on_press: Some(handler),
                ..
            }) => out.push(handler.as_str()),
            Element::List(List {
                on_refresh: Some(handler),
                ..
            }) => out.push(handler.as_str()),
            _ => {}
        });
        out
    }

    /// Component id, if set
    pub fn id(&self) -> Option<&str> {
        match self {
            Element::Container(c) => c.id.as_deref(),
            Element::Text(t) => t.id.as_deref(),
            Element::Button(b) => b.id.as_deref(),
            Element::List(l) => l.id.as_deref(),
            Element::Icon(_) | Element::Spinner(_) => None,
        }
    }
}

impl From<Container> for Element {
    fn from(value: Container) -> Self {
        Element::Container(value)
    }
}

impl From<Text> for Element {
    fn from(value: Text) -> Self {
        Element::Text(value)
    }
}

impl From<Icon> for Element {
    fn from(value: Icon) -> Self {
        Element::Icon(value)
    }
}

impl From<Button> for Element {
    fn from(value: Button) -> Self {
        Element::Button(value)
    }
}

impl From<Spinner> for Element {
    fn from(value: Spinner) -> Self {
        Element::Spinner(value)
    }
}

impl From<List> for Element {
    fn from(value: List) -> Self {
        Element::List(value)
    }
}

// =============================================================================
// Container Component
// =============================================================================

/// Container/View component for layout
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Container {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Flex direction
    pub direction: FlexDirection,
    /// Justify content (main axis alignment)
    pub justify: JustifyContent,
    /// Align items (cross axis alignment)
    pub align: Alignment,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Press handler; makes the whole container touchable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Style props
    #[serde(skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
    /// Child elements
    pub children: Vec<Element>,
}

impl Container {
    /// Create a row container
    pub fn row() -> Self {
        Self {
            direction: FlexDirection::Row,
            ..Default::default()
        }
    }

    /// Create a column container
    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set justify content
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    /// Set align items
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set gap
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.style.padding = Some(padding);
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }

    /// Set press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child when present
    pub fn child_opt(mut self, child: Option<impl Into<Element>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Text content
    pub content: String,
    /// Font size
    pub size: f32,
    /// Font weight
    #[serde(default)]
    pub weight: FontWeight,
    /// Text color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Number of lines (0 = unlimited)
    #[serde(default)]
    pub lines: u32,
}

impl Text {
    /// Create new text component
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            size: font_size::BASE,
            weight: FontWeight::Regular,
            color: None,
            lines: 0,
        }
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set font size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set font weight
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set maximum lines
    pub fn with_lines(mut self, lines: u32) -> Self {
        self.lines = lines;
        self
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name (from icon set)
    pub name: String,
    /// Icon size in pixels
    pub size: f32,
    /// Icon color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Icon {
    /// Create a new icon
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: sizing::icon::SM,
            color: None,
        }
    }

    /// Set icon size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set icon color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

// =============================================================================
// Button Component
// =============================================================================

/// Icon position in button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    /// Icon on the left
    #[default]
    Left,
    /// Icon on the right
    Right,
    /// Icon only (label used for accessibility)
    Only,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Visible (or accessible, for icon-only buttons) label
    pub label: String,
    /// Whether the button is in its selected state
    #[serde(default)]
    pub active: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Icon position
    #[serde(default)]
    pub icon_position: IconPosition,
    /// Label color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Additional style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            active: false,
            on_press: None,
            icon: None,
            icon_position: IconPosition::default(),
            text_color: None,
            style: StyleProps::default(),
        }
    }

    /// Set the button ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set selected state
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Set icon
    pub fn with_icon(mut self, icon: Icon, position: IconPosition) -> Self {
        self.icon = Some(icon);
        self.icon_position = position;
        self
    }

    /// Set label color
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }
}

// =============================================================================
// Spinner Component
// =============================================================================

/// Activity indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spinner {
    /// Whether to use the large variant
    pub large: bool,
    /// Indicator color
    pub color: Color,
}

// =============================================================================
// List Component
// =============================================================================

/// Keyed list row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    /// Stable key
    pub key: String,
    /// Row content
    pub element: Element,
}

/// Scrollable list with pull-to-refresh
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct List {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Rows
    pub items: Vec<ListItem>,
    /// Whether the refresh indicator is showing
    pub refreshing: bool,
    /// Pull-to-refresh handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_refresh: Option<EventHandler>,
    /// Shown instead of rows when the list is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<Box<Element>>,
    /// Content padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_padding: Option<f32>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_children() {
        let container = Container::row()
            .with_gap(8.0)
            .child(Text::new("a"))
            .child_opt(None::<Text>)
            .child_opt(Some(Text::new("b")));

        assert_eq!(container.direction, FlexDirection::Row);
        assert_eq!(container.gap, Some(8.0));
        assert_eq!(container.children.len(), 2);
    }

    #[test]
    fn test_element_texts_and_handlers() {
        let tree: Element = Container::column()
            .child(Text::new("Title").with_id("title"))
            .child(Button::new("Go").on_press("go"))
            .child(
                Container::row()
                    .on_press("open")
                    .child(Icon::new("info"))
                    .child(Text::new("Nested")),
            )
            .into();

        assert_eq!(tree.texts(), vec!["Title", "Go", "Nested"]);
        assert_eq!(tree.handlers(), vec!["go", "open"]);
        assert!(matches!(tree.find("title"), Some(Element::Text(_))));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_list_walks_empty_placeholder() {
        let list: Element = List {
            on_refresh: Some("refresh".to_string()),
            empty: Some(Box::new(Text::new("Nothing here").into())),
            ..Default::default()
        }
        .into();

        assert_eq!(list.texts(), vec!["Nothing here"]);
        assert_eq!(list.handlers(), vec!["refresh"]);
    }

    #[test]
    fn test_text_builder() {
        let text = Text::new("Notes")
            .with_size(font_size::XS)
            .with_weight(FontWeight::Semibold)
            .with_lines(2);

        assert_eq!(text.size, 11.0);
        assert_eq!(text.weight, FontWeight::Semibold);
        assert_eq!(text.lines, 2);
    }

    #[test]
    fn test_element_serialization() {
        let element: Element = Button::new("View Details")
            .on_press("open_courier:1")
            .with_icon(Icon::new("arrow-forward"), IconPosition::Right)
            .into();

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "button");
        assert_eq!(json["label"], "View Details");
        assert_eq!(json["on_press"], "open_courier:1");
        assert_eq!(json["icon_position"], "right");
        assert!(json.get("style").is_none());
    }
}
