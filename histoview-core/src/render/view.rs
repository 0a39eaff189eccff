use crate::histogram::{HistogramLayout, Tick};
use crate::render::{
    Element, HISTOGRAM, HISTOGRAM_ANNOTATIONS, HISTOGRAM_BUCKET, HISTOGRAM_GRAPH,
    HISTOGRAM_INTERVAL, HISTOGRAM_LABEL, HISTOGRAM_LABELS, HISTOGRAM_NAME, HISTOGRAM_PERCENTILE,
    HISTOGRAM_POPUP, HISTOGRAM_POPUP_ENTRY, Renderer, Style, Visibility,
};
use crate::tooltip::PopupSurface;

/// The rendered tree of one histogram plus a handle on its popup.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramView {
    root: Element,
    popup_index: usize,
}

impl HistogramView {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn popup(&self) -> &Element {
        &self.root.children[self.popup_index]
    }

    fn popup_mut(&mut self) -> &mut Element {
        &mut self.root.children[self.popup_index]
    }

    pub fn buckets(&self) -> Vec<&Element> {
        self.root.find_by_class(HISTOGRAM_BUCKET)
    }
}

impl PopupSurface for HistogramView {
    fn show_popup(&mut self, entries: &[String]) {
        let popup = self.popup_mut();
        popup.children = entries
            .iter()
            .map(|e| Element::div(HISTOGRAM_POPUP_ENTRY).with_text(e.clone()))
            .collect();
        popup.style.visibility = Some(Visibility::Visible);
    }

    fn hide_popup(&mut self) {
        self.popup_mut().style.visibility = Some(Visibility::Hidden);
    }
}

/// Builds the element tree for a layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer;

impl Renderer for TreeRenderer {
    type Output = HistogramView;

    fn render(&self, layout: &HistogramLayout) -> HistogramView {
        let buckets = layout.buckets.iter().map(|g| {
            Element::div(HISTOGRAM_BUCKET).with_style(Style {
                left: Some(g.left * 100.0),
                width: Some(g.width * 100.0),
                height: Some(g.height * 100.0),
                visibility: None,
            })
        });

        let ticks = layout
            .percentile_ticks
            .iter()
            .map(|t| tick(HISTOGRAM_PERCENTILE, t))
            .chain(
                layout
                    .interval_ticks
                    .iter()
                    .map(|t| tick(HISTOGRAM_INTERVAL, t)),
            );

        let labels = layout
            .buckets
            .iter()
            .zip(layout.labels())
            .map(|(g, text)| {
                Element::new("span", HISTOGRAM_LABEL)
                    .with_text(text)
                    .with_style(Style {
                        left: Some(g.left * 100.0),
                        ..Style::default()
                    })
            });

        let popup = Element::div(HISTOGRAM_POPUP).with_style(Style {
            visibility: Some(Visibility::Hidden),
            ..Style::default()
        });

        let root = Element::div(HISTOGRAM).with_children([
            Element::div(HISTOGRAM_NAME).with_text(layout.name.clone()),
            Element::div(HISTOGRAM_GRAPH).with_children(buckets),
            Element::div(HISTOGRAM_ANNOTATIONS).with_children(ticks),
            Element::div(HISTOGRAM_LABELS).with_children(labels),
            popup,
        ]);

        HistogramView {
            popup_index: root.children.len() - 1,
            root,
        }
    }
}

fn tick(class: &'static str, t: &Tick) -> Element {
    Element::div(class).with_style(Style {
        left: Some(t.left * 100.0),
        ..Style::default()
    })
}
