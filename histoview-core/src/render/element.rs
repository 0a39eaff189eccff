use crate::histogram::format_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

/// Inline style. Lengths are percentages of the parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub left: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub visibility: Option<Visibility>,
}

impl Style {
    pub fn left_css(&self) -> Option<String> {
        self.left.map(percent)
    }

    pub fn width_css(&self) -> Option<String> {
        self.width.map(percent)
    }

    pub fn height_css(&self) -> Option<String> {
        self.height.map(percent)
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// `left: 50%; height: 100%` in declaration order.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(v) = self.left_css() {
            decls.push(format!("left: {v}"));
        }
        if let Some(v) = self.width_css() {
            decls.push(format!("width: {v}"));
        }
        if let Some(v) = self.height_css() {
            decls.push(format!("height: {v}"));
        }
        if let Some(v) = self.visibility {
            decls.push(format!("visibility: {}", v.as_str()));
        }
        decls.join("; ")
    }
}

fn percent(value: f64) -> String {
    format!("{}%", format_value(value))
}

/// A headless visual node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub class: &'static str,
    pub style: Style,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class,
            style: Style::default(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn div(class: &'static str) -> Self {
        Self::new("div", class)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Every descendant (and self) carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_by_class(class, &mut out);
        out
    }

    fn collect_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.class == class {
            out.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, out);
        }
    }

    /// Own text followed by all descendant text.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn is_visible(&self) -> bool {
        self.style.visibility != Some(Visibility::Hidden)
    }
}
