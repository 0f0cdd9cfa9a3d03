//! Custom Element
//!
//! Registers `<inline-confirmation>`. A small JS class extends `HTMLElement` and forwards
//! its lifecycle callbacks and the `active` property to an [`ElementHandle`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ShadowRootInit, ShadowRootMode};

use crate::dom::DomView;
use crate::error::{ConfirmError, ConfirmResult};
use crate::options::ConfirmOptions;
use crate::state::{active_from_attribute, ConfirmEvent};
use crate::view::UpdateOptions;

pub const TAG_NAME: &str = "inline-confirmation";

const ACTIVE_ATTR: &str = "active";

#[wasm_bindgen(inline_js = r#"
export function define_element(tag, create) {
    if (customElements.get(tag)) {
        return false;
    }
    class InlineConfirmationElement extends HTMLElement {
        static get observedAttributes() {
            return ['active'];
        }

        #handle;

        constructor() {
            super();
            this.#handle = create(this);
        }

        attributeChangedCallback(name, _old, value) {
            this.#handle.attribute_changed(name, value);
        }

        connectedCallback() {
            this.#handle.connected();
        }

        disconnectedCallback() {
            this.#handle.disconnected();
        }

        get active() {
            return this.#handle.active();
        }

        set active(value) {
            this.#handle.set_active(!!value);
        }
    }
    customElements.define(tag, InlineConfirmationElement);
    return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_element(
        tag: &str,
        create: &Closure<dyn Fn(HtmlElement) -> JsValue>,
    ) -> Result<bool, JsValue>;
}

/// Register `<inline-confirmation>` with default options.
///
/// Returns `Ok(false)` when the tag was already defined.
pub fn define() -> ConfirmResult<bool> {
    define_with(TAG_NAME, ConfirmOptions::default())
}

/// Register the element under `tag` with the given options
pub fn define_with(tag: &str, options: ConfirmOptions) -> ConfirmResult<bool> {
    let create = Closure::<dyn Fn(HtmlElement) -> JsValue>::new(move |host: HtmlElement| {
        JsValue::from(ElementHandle::new(host, &options))
    });

    let defined = define_element(tag, &create)?;
    if defined {
        // Lives as long as the element class
        create.forget();
        log::info!("[InlineConfirm] registered <{}>", tag);
    } else {
        log::debug!("[InlineConfirm] <{}> already registered", tag);
    }
    Ok(defined)
}

/// `defineInlineConfirmation(options?)` for plain JS hosts
#[wasm_bindgen(js_name = defineInlineConfirmation)]
pub fn define_from_js(options: JsValue) -> Result<bool, JsValue> {
    let options = ConfirmOptions::from_js(options)?;
    Ok(define_with(TAG_NAME, options)?)
}

/// Per-element state behind the JS class
///
/// If building the shadow content fails the handle stays inert: every callback is a no-op.
#[wasm_bindgen]
pub struct ElementHandle {
    host: HtmlElement,
    view: Option<Rc<RefCell<DomView>>>,
    on_click: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl ElementHandle {
    fn new(host: HtmlElement, options: &ConfirmOptions) -> Self {
        match build(&host, options) {
            Ok((view, on_click)) => Self {
                host,
                view: Some(view),
                on_click: Some(on_click),
            },
            Err(err) => {
                log::error!("[InlineConfirm] failed to build element: {}", err);
                Self {
                    host,
                    view: None,
                    on_click: None,
                }
            }
        }
    }
}

#[wasm_bindgen]
impl ElementHandle {
    pub fn attribute_changed(&self, name: &str, value: Option<String>) {
        if name != ACTIVE_ATTR {
            return;
        }
        if let Some(view) = &self.view {
            let active = active_from_attribute(value.as_deref());
            view.borrow_mut().update(UpdateOptions::active(active));
        }
    }

    pub fn connected(&self) {
        let (Some(view), Some(on_click)) = (&self.view, &self.on_click) else {
            return;
        };

        if let Some(shadow) = self.host.shadow_root() {
            if shadow.first_child().is_none() {
                let root = view.borrow_mut().update(UpdateOptions::default());
                if let Err(e) = shadow.append_child(&root) {
                    log::warn!("[InlineConfirm] attach failed: {:?}", e);
                }
            }
        }
        view.borrow_mut().connect(on_click.as_ref().unchecked_ref());
    }

    pub fn disconnected(&self) {
        if let (Some(view), Some(on_click)) = (&self.view, &self.on_click) {
            view.borrow_mut().disconnect(on_click.as_ref().unchecked_ref());
        }
    }

    pub fn active(&self) -> bool {
        self.view.as_ref().is_some_and(|view| view.borrow().is_active())
    }

    pub fn set_active(&self, active: bool) {
        if let Some(view) = &self.view {
            reflect_active(&self.host, view, active);
        }
    }
}

type Built = (Rc<RefCell<DomView>>, Closure<dyn FnMut(web_sys::Event)>);

fn build(host: &HtmlElement, options: &ConfirmOptions) -> ConfirmResult<Built> {
    host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?;
    let document = host
        .owner_document()
        .ok_or_else(|| ConfirmError::Dom("element has no owner document".to_string()))?;
    let view = Rc::new(RefCell::new(DomView::build(&document, options)?));

    // Weak: the handle owns both the view and this closure
    let weak = Rc::downgrade(&view);
    let target = host.clone();
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(view) = weak.upgrade() else {
            return;
        };
        let choice = view.borrow().handle_click(&ev);
        if let Some(choice) = choice {
            dispatch(&target, choice);
            reflect_active(&target, &view, false);
        }
    });

    Ok((view, on_click))
}

fn dispatch(host: &HtmlElement, event: ConfirmEvent) {
    match web_sys::CustomEvent::new(event.name()) {
        Ok(ev) => {
            if let Err(e) = host.dispatch_event(&ev) {
                log::warn!("[InlineConfirm] dispatch {} failed: {:?}", event, e);
            }
        }
        Err(e) => log::warn!("[InlineConfirm] create {} failed: {:?}", event, e),
    }
}

/// Property setter: reconcile the attribute, then push the value into the view.
///
/// The attribute change re-enters `attribute_changed` synchronously, so no borrow may
/// be held across it. The second update is then a guarded no-op.
fn reflect_active(host: &HtmlElement, view: &RefCell<DomView>, active: bool) {
    let has_attr = host.has_attribute(ACTIVE_ATTR);
    let result = if active && !has_attr {
        host.set_attribute(ACTIVE_ATTR, "")
    } else if !active && has_attr {
        host.remove_attribute(ACTIVE_ATTR)
    } else {
        Ok(())
    };
    if let Err(e) = result {
        log::warn!("[InlineConfirm] reflect active failed: {:?}", e);
    }

    view.borrow_mut().update(UpdateOptions::active(active));
}
