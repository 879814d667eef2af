use crate::common::*;

#[doc = "Pixel rectangle inside a canvas"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[doc = r#"
    Smallest rectangle containing every pixel that differs from `background`.

    Returns `None` for a canvas holding only background pixels.
    `rgb` is a tightly packed RGB buffer of `width * height` pixels.
"#]
pub fn tight_bounding_box(
    rgb: &[u8],
    width: u32,
    height: u32,
    background: [u8; 3],
) -> Option<PixelBox> {
    let mut min_x: u32 = u32::MAX;
    let mut min_y: u32 = u32::MAX;
    let mut max_x: u32 = 0;
    let mut max_y: u32 = 0;

    for (idx, pixel) in rgb.chunks_exact(3).enumerate() {
        if pixel == background {
            continue;
        }

        let x: u32 = (idx as u32) % width;
        let y: u32 = (idx as u32) / width;

        if y >= height {
            break;
        }

        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    if min_x == u32::MAX {
        return None;
    }

    Some(PixelBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

#[doc = "Grows `pixel_box` by `pad` pixels on each side, clamped to the canvas"]
pub fn pad_box(pixel_box: PixelBox, pad: u32, width: u32, height: u32) -> PixelBox {
    let x: u32 = pixel_box.x.saturating_sub(pad);
    let y: u32 = pixel_box.y.saturating_sub(pad);
    let right: u32 = (pixel_box.x + pixel_box.width + pad).min(width);
    let bottom: u32 = (pixel_box.y + pixel_box.height + pad).min(height);

    PixelBox {
        x,
        y,
        width: right - x,
        height: bottom - y,
    }
}

#[doc = r#"
    Crops the rendered canvas to its content plus `pad` pixels and writes it as PNG.

    An existing file at `path` is overwritten. Returns the final `(width, height)`.
"#]
pub fn save_tight_png(
    rgb: Vec<u8>,
    width: u32,
    height: u32,
    background: [u8; 3],
    pad: u32,
    path: &Path,
) -> anyhow::Result<(u32, u32)> {
    let crop: PixelBox = match tight_bounding_box(&rgb, width, height, background) {
        Some(content) => pad_box(content, pad, width, height),
        None => PixelBox {
            x: 0,
            y: 0,
            width,
            height,
        },
    };

    let canvas: RgbImage = RgbImage::from_raw(width, height, rgb).ok_or_else(|| {
        anyhow!(
            "[image_utils->save_tight_png] buffer does not match a {}x{} canvas",
            width,
            height
        )
    })?;

    let cropped: RgbImage =
        image::imageops::crop_imm(&canvas, crop.x, crop.y, crop.width, crop.height).to_image();

    cropped
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("[image_utils->save_tight_png] failed to write {:?}", path))?;

    Ok((crop.width, crop.height))
}
