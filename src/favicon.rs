// Favicon generation - resizes a master logo into the standard icon set
//
// One-shot subcommand, not part of the TUI: reads a raster master image,
// scales it to each target size with Lanczos3, and centers it on a
// transparent square canvas so non-square logos keep their aspect ratio.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{imageops, DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};

/// One icon in the generated set
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub size: u32,
    pub filename: &'static str,
}

/// The standard set browsers and mobile home screens ask for
pub const ICON_SET: [IconSpec; 3] = [
    IconSpec {
        size: 16,
        filename: "favicon-16x16.png",
    },
    IconSpec {
        size: 32,
        filename: "favicon-32x32.png",
    },
    IconSpec {
        size: 180,
        filename: "apple-touch-icon.png",
    },
];

/// A written icon file, reported back for CLI output
#[derive(Debug)]
pub struct GeneratedIcon {
    pub filename: &'static str,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Generate the full icon set from a master image into `out_dir`,
/// creating the directory if needed. Existing files are overwritten.
pub fn generate(input: &Path, out_dir: &Path) -> Result<Vec<GeneratedIcon>> {
    let master = image::open(input)
        .with_context(|| format!("failed to read master image {}", input.display()))?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut generated = Vec::with_capacity(ICON_SET.len());
    for spec in ICON_SET {
        let icon = contain(&master, spec.size);
        let path = out_dir.join(spec.filename);
        icon.save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        let bytes = std::fs::metadata(&path)
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len();
        tracing::debug!(file = spec.filename, bytes, "wrote icon");
        generated.push(GeneratedIcon {
            filename: spec.filename,
            path,
            bytes,
        });
    }
    Ok(generated)
}

/// Scale the master to fit inside a size x size square, preserving
/// aspect ratio, and center the result on a transparent canvas.
fn contain(master: &DynamicImage, size: u32) -> RgbaImage {
    let resized = master.resize(size, size, FilterType::Lanczos3).to_rgba8();
    let mut canvas = RgbaImage::new(size, size);
    let x = i64::from((size - resized.width()) / 2);
    let y = i64::from((size - resized.height()) / 2);
    imageops::overlay(&mut canvas, &resized, x, y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn master(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([200, 30, 30, 255]),
        ))
    }

    #[test]
    fn contain_letterboxes_wide_masters() {
        let icon = contain(&master(100, 50), 32);
        assert_eq!((icon.width(), icon.height()), (32, 32));
        // 100x50 scales to 32x16 centered vertically: the top and bottom
        // bands stay transparent, the middle is opaque.
        assert_eq!(icon.get_pixel(16, 0)[3], 0);
        assert_eq!(icon.get_pixel(16, 31)[3], 0);
        assert_eq!(icon.get_pixel(16, 16)[3], 255);
    }

    #[test]
    fn contain_pillarboxes_tall_masters() {
        let icon = contain(&master(50, 100), 32);
        assert_eq!((icon.width(), icon.height()), (32, 32));
        assert_eq!(icon.get_pixel(0, 16)[3], 0);
        assert_eq!(icon.get_pixel(31, 16)[3], 0);
        assert_eq!(icon.get_pixel(16, 16)[3], 255);
    }

    #[test]
    fn contain_fills_square_masters() {
        let icon = contain(&master(256, 256), 16);
        assert_eq!((icon.width(), icon.height()), (16, 16));
        assert_eq!(icon.get_pixel(0, 0)[3], 255);
        assert_eq!(icon.get_pixel(15, 15)[3], 255);
    }

    #[test]
    fn generate_writes_the_standard_set() {
        let dir = std::env::temp_dir().join(format!("marquee-favicons-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("master.png");
        master(64, 64).save(&input).unwrap();

        let out_dir = dir.join("icons");
        let generated = generate(&input, &out_dir).unwrap();

        assert_eq!(generated.len(), ICON_SET.len());
        for (icon, spec) in generated.iter().zip(ICON_SET) {
            assert_eq!(icon.filename, spec.filename);
            assert!(icon.bytes > 0);
            let written = image::open(&icon.path).unwrap();
            assert_eq!((written.width(), written.height()), (spec.size, spec.size));
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn generate_fails_on_missing_input() {
        let dir =
            std::env::temp_dir().join(format!("marquee-favicons-missing-{}", std::process::id()));
        let err = generate(&dir.join("nope.png"), &dir.join("icons")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read master image"));
        assert!(!dir.join("icons").exists(), "no output on failure");
    }
}
