// File: crates/chart-core/src/figure.rs
// Summary: Explicit drawing context owning one CPU raster surface; released on drop.

use log::debug;
use skia_safe as skia;

use crate::error::{ChartError, Result};

/// One drawing surface per logical render. Callers that render concurrently
/// hold one `Figure` each; nothing is shared between figures.
pub struct Figure {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl Figure {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::render(format!("invalid canvas size {}x{}", width, height)));
        }
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| ChartError::render(format!("failed to create {}x{} raster surface", width, height)))?;
        debug!("figure {}x{} acquired", width, height);
        Ok(Self { surface, width, height })
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Snapshot the current pixels and encode them as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::render("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

impl Drop for Figure {
    fn drop(&mut self) {
        debug!("figure {}x{} released", self.width, self.height);
    }
}
