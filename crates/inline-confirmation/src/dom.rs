//! DOM Adapter
//!
//! Builds the shadow subtree with web-sys and drives it through the headless view model.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use crate::conditional::SwapParent;
use crate::error::{ConfirmError, ConfirmResult};
use crate::options::ConfirmOptions;
use crate::state::ConfirmEvent;
use crate::template::{stylesheet, CONTENT_SLOT, DATA_EVENT_ATTR, PROMPT_TEMPLATE};
use crate::view::{InlineConfirmView, UpdateOptions};

const ROOT_CLASS: &str = "inline-confirm";
const ROOT_ACTIVE_CLASS: &str = "inline-confirm active";

impl SwapParent for Node {
    type Node = Node;

    fn insert_before(&self, node: &Node, reference: &Node) {
        if let Err(e) = Node::insert_before(self, node, Some(reference)) {
            log::warn!("[InlineConfirm] insert_before failed: {:?}", e);
        }
    }

    fn append_child(&self, node: &Node) {
        if let Err(e) = Node::append_child(self, node) {
            log::warn!("[InlineConfirm] append_child failed: {:?}", e);
        }
    }

    fn remove_child(&self, node: &Node) {
        if let Err(e) = Node::remove_child(self, node) {
            log::warn!("[InlineConfirm] remove_child failed: {:?}", e);
        }
    }

    fn has_child(&self, node: &Node) -> bool {
        node.parent_node().as_ref() == Some(self)
    }
}

/// One element's shadow content plus its view model
pub(crate) struct DomView {
    view: InlineConfirmView<Node>,
    root: Element,
    controls: Vec<Element>,
}

impl DomView {
    pub fn build(document: &Document, options: &ConfirmOptions) -> ConfirmResult<Self> {
        let root = document.create_element("div")?;
        root.set_class_name(root_class(false));

        // Own copy per instance
        let style = document.create_element("style")?;
        style.set_text_content(Some(&stylesheet(options)));
        root.append_child(&style)?;

        let content = document.create_element("slot")?;
        content.set_attribute("name", CONTENT_SLOT)?;
        root.append_child(&content)?;

        let prompt = render_prompt(document, options)?;
        let controls = query_controls(&prompt)?;

        Ok(Self {
            view: InlineConfirmView::new(root.clone().into(), prompt.into(), content.into()),
            root,
            controls,
        })
    }

    pub fn is_active(&self) -> bool {
        self.view.is_active()
    }

    /// Apply options and return the root to attach
    pub fn update(&mut self, options: UpdateOptions) -> Node {
        let root = self.view.update(options).clone();
        let class = root_class(self.view.is_active());
        if self.root.class_name() != class {
            self.root.set_class_name(class);
        }
        root
    }

    pub fn connect(&mut self, listener: &js_sys::Function) {
        if !self.view.connect() {
            return;
        }
        for control in &self.controls {
            if let Err(e) = control.add_event_listener_with_callback("click", listener) {
                log::warn!("[InlineConfirm] add listener failed: {:?}", e);
            }
        }
    }

    pub fn disconnect(&mut self, listener: &js_sys::Function) {
        if !self.view.disconnect() {
            return;
        }
        for control in &self.controls {
            if let Err(e) = control.remove_event_listener_with_callback("click", listener) {
                log::warn!("[InlineConfirm] remove listener failed: {:?}", e);
            }
        }
    }

    /// Choice for a click on one of the tagged controls
    pub fn handle_click(&self, ev: &web_sys::Event) -> Option<ConfirmEvent> {
        let control = ev.current_target()?.dyn_into::<Element>().ok()?;
        let tag = control.get_attribute(DATA_EVENT_ATTR)?;
        self.view.handle_click(&tag)
    }
}

fn root_class(active: bool) -> &'static str {
    if active {
        ROOT_ACTIVE_CLASS
    } else {
        ROOT_CLASS
    }
}

/// Fresh, detached prompt subtree with the configured labels
fn render_prompt(document: &Document, options: &ConfirmOptions) -> ConfirmResult<Element> {
    let holder = document.create_element("div")?;
    holder.set_inner_html(PROMPT_TEMPLATE);
    let prompt = holder
        .first_element_child()
        .ok_or_else(|| ConfirmError::Dom("prompt template is empty".to_string()))?;
    holder.remove_child(&prompt)?;

    set_label(&prompt, ".yes button", &options.yes_label)?;
    set_label(&prompt, ".no button", &options.no_label)?;
    Ok(prompt)
}

fn set_label(prompt: &Element, selector: &str, label: &str) -> ConfirmResult<()> {
    let button = prompt
        .query_selector(selector)?
        .ok_or_else(|| ConfirmError::Dom(format!("no control matches {}", selector)))?;
    button.set_text_content(Some(label));
    Ok(())
}

fn query_controls(prompt: &Element) -> ConfirmResult<Vec<Element>> {
    let list = prompt.query_selector_all(&format!("[{}]", DATA_EVENT_ATTR))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_class_follows_active() {
        assert_eq!(root_class(false), "inline-confirm");
        assert_eq!(root_class(true), "inline-confirm active");
    }
}
