//! Image loading for the canvas renderer

use facematch_core::assets;
use std::collections::HashMap;
use wasm_bindgen::JsValue;
use web_sys::HtmlImageElement;

/// Directory the SVG resources are served from
pub const RESOURCE_DIR: &str = "resource";

pub fn resource_url(name: &str) -> String {
    format!("{}/{}.svg", RESOURCE_DIR, name)
}

/// Every game image, requested up front
pub struct ImageStore {
    images: HashMap<&'static str, HtmlImageElement>,
}

impl ImageStore {
    /// Start loading all resources; the browser fetches them in the background
    pub fn load() -> Result<Self, JsValue> {
        let mut images = HashMap::with_capacity(assets::ALL.len());
        for name in assets::ALL {
            let image = HtmlImageElement::new()?;
            image.set_src(&resource_url(name));
            images.insert(name, image);
        }
        Ok(Self { images })
    }

    pub fn get(&self, name: &str) -> Option<&HtmlImageElement> {
        self.images.get(name).filter(|image| image.complete())
    }

    pub fn total(&self) -> usize {
        self.images.len()
    }

    pub fn loaded(&self) -> usize {
        self.images
            .values()
            .filter(|image| image.complete() && image.natural_width() > 0)
            .count()
    }

    pub fn is_ready(&self) -> bool {
        self.loaded() == self.total()
    }
}
