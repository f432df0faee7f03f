use crate::constants::PRODUCT_CANVAS_CLASS;
use crate::core::{FrameHandle, ProductRender, Rect, Stage};
use crate::events::pointer::{with_render, RenderListeners};
use crate::render::GpuState;
use crate::{dom, input, overlay};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Mounted = ProductRender<WebStage, GpuState>;

/// Shared home of the mounted render. Browser callbacks hold it weakly.
pub type RenderSlot = Rc<RefCell<Option<Mounted>>>;

/// Browser side of a mounted product render: container, canvas, clock,
/// animation-frame callback and listeners.
pub struct WebStage {
    document: web::Document,
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    clock: Instant,
    tick: Closure<dyn FnMut(f64)>,
    listeners: RenderListeners,
    listening: bool,
    attached: bool,
}

impl WebStage {
    fn new(
        document: web::Document,
        container: web::HtmlElement,
        canvas: web::HtmlCanvasElement,
        slot: Weak<RefCell<Option<Mounted>>>,
    ) -> Self {
        let slot_tick = slot.clone();
        let tick = Closure::wrap(Box::new(move |_ts: f64| {
            with_render(&slot_tick, |r| r.on_frame());
        }) as Box<dyn FnMut(f64)>);
        let listeners = RenderListeners::new(container.clone(), slot);
        Self {
            document,
            container,
            canvas,
            clock: Instant::now(),
            tick,
            listeners,
            listening: false,
            attached: false,
        }
    }
}

impl Stage for WebStage {
    fn container_size(&self) -> (u32, u32) {
        input::element_size(&self.container)
    }

    fn container_rect(&self) -> Rect {
        input::client_rect(&self.container)
    }

    fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    fn set_loading(&mut self, visible: bool) {
        if overlay::is_visible(&self.document) != visible {
            overlay::set_visible(&self.document, visible);
        }
    }

    fn attach_surface(&mut self, width: u32, height: u32) {
        dom::size_canvas(&self.canvas, width, height);
        if !self.attached {
            _ = self.container.append_child(&self.canvas);
            self.attached = true;
        }
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        dom::size_canvas(&self.canvas, width, height);
    }

    fn detach_surface(&mut self) {
        if self.attached {
            self.canvas.remove();
            self.attached = false;
        }
    }

    fn listen(&mut self) {
        if !self.listening {
            self.listeners.attach();
            self.listening = true;
        }
    }

    fn unlisten(&mut self) {
        if self.listening {
            self.listeners.detach();
            self.listening = false;
        }
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        let w = web::window()?;
        w.request_animation_frame(self.tick.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}

/// Create the canvas and GPU backend, then mount the render into `container`.
///
/// Backend failure is not an error here: the render stays in its loading
/// phase with the indicator visible.
pub async fn mount(container: web::HtmlElement) -> anyhow::Result<RenderSlot> {
    let document = container
        .owner_document()
        .ok_or_else(|| anyhow::anyhow!("container is not in a document"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_class_name(PRODUCT_CANVAS_CLASS);

    let slot: RenderSlot = Rc::new(RefCell::new(None));
    let mut stage = WebStage::new(document, container, canvas.clone(), Rc::downgrade(&slot));
    stage.set_loading(true);

    let (width, height) = stage.container_size();
    dom::size_canvas(&canvas, width.max(1), height.max(1));
    let backend = GpuState::new(&canvas).await;

    let seed: u64 = rand::random();
    let render = ProductRender::mount(stage, backend, seed);
    *slot.borrow_mut() = Some(render);
    Ok(slot)
}

/// Tear the render down. Safe to call on an already emptied slot.
pub fn unmount(slot: &RenderSlot) {
    let render = slot.borrow_mut().take();
    if let Some(render) = render {
        // Dropping the stage releases the tick and listener closures; both
        // are already cancelled or removed by now.
        drop(render.unmount());
    }
}
