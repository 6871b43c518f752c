use crate::catalog::models::Image;
use crate::cli::Args;
use std::sync::Arc;

pub mod handlers;
pub mod loader;
pub mod models;
pub mod responses;
#[cfg(test)]
pub mod tests;

pub use loader::CatalogSource;

/// The images a game can draw from. Loaded once at startup and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Catalog {
    images: Arc<[Image]>,
}

impl Catalog {
    pub fn new(images: Vec<Image>) -> Self {
        Self {
            images: images.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn shared(&self) -> Arc<[Image]> {
        Arc::clone(&self.images)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

pub async fn init(args: &Args) -> Catalog {
    let catalog = loader::load(&args.catalog).await;
    if catalog.is_empty() {
        tracing::warn!(
            source = %args.catalog,
            "The image catalog is empty, every session will be exhausted right away."
        );
    } else {
        let panoramas_count = catalog
            .images()
            .iter()
            .filter(|image| image.is_panorama)
            .count();
        tracing::info!(
            source = %args.catalog,
            images_count = catalog.len(),
            panoramas_count,
            "Loaded the image catalog."
        );
    }
    catalog
}
