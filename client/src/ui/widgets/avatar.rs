//! Round avatar with a fixed bounding box.

use eframe::egui;
use image::imageops::FilterType;

use crate::errors::HeaderResult;
use crate::ui::theme;

pub const AVATAR_SIZE: egui::Vec2 = egui::vec2(40.0, 40.0);

/// Pixels shown through a circular mask. The texture is uploaded lazily on
/// the first frame after the pixels change.
pub struct Avatar {
    size: egui::Vec2,
    pixels: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
}

impl Avatar {
    pub fn new(size: egui::Vec2) -> Self {
        Self {
            size,
            pixels: None,
            texture: None,
        }
    }

    pub fn size(&self) -> egui::Vec2 {
        self.size
    }

    pub fn has_image(&self) -> bool {
        self.pixels.is_some() || self.texture.is_some()
    }

    pub fn set_image(&mut self, image: egui::ColorImage) {
        self.pixels = Some(image);
        self.texture = None;
    }

    /// Decodes png/jpeg/gif/webp bytes and crops them to fill the box.
    pub fn set_image_bytes(&mut self, bytes: &[u8]) -> HeaderResult<()> {
        let image = decode_to_fill(bytes, self.size)?;
        self.set_image(image);
        Ok(())
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        if let Some(pixels) = self.pixels.take() {
            self.texture = Some(ui.ctx().load_texture(
                "chat_header_avatar",
                pixels,
                egui::TextureOptions::LINEAR,
            ));
        }

        match &self.texture {
            Some(texture) => ui.add(
                egui::Image::new((texture.id(), self.size))
                    .corner_radius(self.size.x / 2.0),
            ),
            None => {
                let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), self.size.x / 2.0, theme::COLOR_BG_LIGHT);
                response
            }
        }
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new(AVATAR_SIZE)
    }
}

fn decode_to_fill(bytes: &[u8], size: egui::Vec2) -> HeaderResult<egui::ColorImage> {
    let (w, h) = (size.x as u32, size.y as u32);
    let rgba = image::load_from_memory(bytes)?
        .resize_to_fill(w, h, FilterType::Triangle)
        .to_rgba8();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [rgba.width() as usize, rgba.height() as usize],
        rgba.as_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HeaderError;
    use std::io::Cursor;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([200, 10, 10, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_default_size() {
        let avatar = Avatar::default();
        assert_eq!(avatar.size(), egui::vec2(40.0, 40.0));
        assert!(!avatar.has_image());
    }

    #[test]
    fn test_decode_crops_to_box() {
        let image = decode_to_fill(&png_bytes(120, 64), AVATAR_SIZE).unwrap();
        assert_eq!(image.size, [40, 40]);
    }

    #[test]
    fn test_set_image_bytes_rejects_garbage() {
        let mut avatar = Avatar::default();
        let result = avatar.set_image_bytes(b"definitely not an image");
        assert!(matches!(result, Err(HeaderError::AvatarDecode(_))));
        assert!(!avatar.has_image());
    }

    #[test]
    fn test_show_uploads_texture() {
        let mut avatar = Avatar::default();
        avatar.set_image_bytes(&png_bytes(40, 40)).unwrap();

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                avatar.show(ui);
            });
        });

        assert!(avatar.texture.is_some());
        assert!(avatar.pixels.is_none());
    }
}
