//! Render target for fixed-resolution rendering.
//!
//! The scene is drawn at its logical resolution into a texture, which is then
//! scaled into the window with [`WindowSize::calculate_letterbox`](crate::resources::windowsize::WindowSize::calculate_letterbox).

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Texture filtering mode for scaling the render target.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum RenderFilter {
    /// Nearest-neighbour filtering, sharp pixels.
    Nearest,
    /// Bilinear filtering, smooth scaling for the vector-style scene.
    #[default]
    Bilinear,
}

/// Off-screen texture at the scene's logical resolution.
///
/// Not a `Resource`: `RenderTexture2D` holds GPU handles that stay on the main
/// thread next to the raylib handle.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
    pub filter: RenderFilter,
}

impl RenderTarget {
    /// Create a new render target at the specified scene resolution.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        let mut target = Self {
            texture,
            game_width: width,
            game_height: height,
            filter: RenderFilter::default(),
        };
        target.apply_filter();

        Ok(target)
    }

    pub fn set_filter(&mut self, filter: RenderFilter) {
        self.filter = filter;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let filter_value = match self.filter {
            RenderFilter::Nearest => TextureFilter::TEXTURE_FILTER_POINT as i32,
            RenderFilter::Bilinear => TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
        };
        unsafe {
            ffi::SetTextureFilter(self.texture.texture, filter_value);
        }
    }

    /// Source rectangle for drawing this texture.
    ///
    /// Negative height flips the Y axis to undo OpenGL's texture orientation.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}
