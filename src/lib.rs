#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod page;
mod render;
mod reveal;

thread_local! {
    // The one product render on the page, if mounted.
    static PRODUCT: RefCell<Option<frame::RenderSlot>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("[page] init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    page::populate(&document)?;
    events::wire_shell(&document);
    reveal::wire_all(&document)?;

    mount_into(&document).await
}

async fn mount_into(document: &web::Document) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(constants::PRODUCT_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::PRODUCT_CONTAINER_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let slot = frame::mount(container).await?;
    PRODUCT.with(|p| {
        if let Some(old) = p.borrow_mut().replace(slot) {
            frame::unmount(&old);
        }
    });
    Ok(())
}

/// Tear down the product render, releasing its GPU resources.
#[wasm_bindgen]
pub fn unmount_product() {
    let slot = PRODUCT.with(|p| p.borrow_mut().take());
    if let Some(slot) = slot {
        frame::unmount(&slot);
    }
}

/// Unmount (if mounted) and mount a fresh product render.
#[wasm_bindgen]
pub async fn remount_product() -> Result<(), JsValue> {
    unmount_product();
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    mount_into(&document)
        .await
        .map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}
