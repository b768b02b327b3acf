/// Tour photo loading
///
/// The gallery descriptors are compile-time constants, but the photo bytes
/// live on disk and are read in the background so the window appears
/// immediately. A photo that is missing or fails to decode is replaced by a
/// generated placeholder gradient; asset trouble never reaches the carousel
/// state machine.
use iced::widget::image::Handle;
use tokio::task;

/// Placeholder dimensions, matching the display aspect of the tour viewport.
const PLACEHOLDER_WIDTH: u32 = 1280;
const PLACEHOLDER_HEIGHT: u32 = 720;

/// A photo that is ready to display, delivered back to the update loop.
#[derive(Debug, Clone)]
pub struct LoadedPhoto {
    /// Position of this photo in the tour gallery.
    pub index: usize,
    /// Decoded handle for the image widget.
    pub handle: Handle,
    /// True when the real asset could not be used and a generated
    /// placeholder stands in for it.
    pub fallback: bool,
}

/// Load one tour photo from disk.
///
/// Reads the file, then verifies the bytes actually decode before handing
/// them to the image widget. Any failure falls back to a placeholder so the
/// tour always has something to show.
pub async fn load_photo(index: usize, source: String) -> LoadedPhoto {
    let bytes = match tokio::fs::read(&source).await {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("⚠️  Missing tour photo {}: {}", source, e);
            return placeholder_photo(index);
        }
    };

    // Decode on the blocking pool; image decoding is CPU-bound.
    let checked = task::spawn_blocking(move || match image::load_from_memory(&bytes) {
        Ok(_) => {
            println!("📷 Loaded tour photo {}", source);
            Ok(bytes)
        }
        Err(e) => Err(format!("Failed to decode {}: {}", source, e)),
    })
    .await;

    match checked {
        Ok(Ok(bytes)) => LoadedPhoto {
            index,
            handle: Handle::from_bytes(bytes),
            fallback: false,
        },
        Ok(Err(e)) => {
            eprintln!("⚠️  {}", e);
            placeholder_photo(index)
        }
        Err(e) => {
            eprintln!("⚠️  Photo decode task failed: {}", e);
            placeholder_photo(index)
        }
    }
}

/// Build the stand-in photo for a gallery slot.
fn placeholder_photo(index: usize) -> LoadedPhoto {
    let pixels = placeholder_rgba(index, PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);

    LoadedPhoto {
        index,
        handle: Handle::from_rgba(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, pixels),
        fallback: true,
    }
}

/// Generate placeholder pixels: a dark vertical gradient warmed with the
/// brand red, shifted per gallery slot so neighbouring placeholders are
/// distinguishable. Deterministic for a given (index, size).
pub fn placeholder_rgba(index: usize, width: u32, height: u32) -> Vec<u8> {
    let shade = (index % 8) as f32 / 8.0;

    let canvas = image::RgbaImage::from_fn(width, height, |_x, y| {
        let t = y as f32 / height.max(1) as f32;
        let r = 18.0 + 80.0 * t + 40.0 * shade;
        let g = 8.0 + 14.0 * t;
        let b = 10.0 + 16.0 * t;
        image::Rgba([r as u8, g as u8, b as u8, 255])
    });

    canvas.into_raw()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_expected_size() {
        let pixels = placeholder_rgba(0, 64, 36);
        assert_eq!(pixels.len(), 64 * 36 * 4);
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(placeholder_rgba(3, 32, 18), placeholder_rgba(3, 32, 18));
    }

    #[test]
    fn test_placeholders_differ_per_slot() {
        assert_ne!(placeholder_rgba(0, 32, 18), placeholder_rgba(1, 32, 18));
    }

    #[test]
    fn test_placeholder_is_opaque() {
        let pixels = placeholder_rgba(2, 16, 9);
        for alpha in pixels.chunks_exact(4).map(|px| px[3]) {
            assert_eq!(alpha, 255);
        }
    }

    #[tokio::test]
    async fn test_missing_photo_falls_back() {
        let photo = load_photo(4, "/nonexistent/rcfit.jpg".to_string()).await;
        assert_eq!(photo.index, 4);
        assert!(photo.fallback);
    }
}
