//! Convert command implementation.
//!
//! Decodes images and writes their ASCII art renditions as text files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use walkdir::WalkDir;

use crate::error::{GlyphifyError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{downsample, pixels_to_ascii, render_text, write_meta_json, ArtMeta};
use crate::types::PixelBuffer;

/// File extensions accepted as image inputs.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Convert images to ASCII art text files
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Image files or directories to convert
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Downsampling block size in pixels
    #[arg(long, short, default_value = "1")]
    pub block: usize,

    /// Convert at full resolution, one glyph per pixel
    #[arg(long, conflicts_with = "block")]
    pub full: bool,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Write a JSON metadata sidecar next to each text file
    #[arg(long)]
    pub meta: bool,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let printer = Printer::new();

    // Create output directory if needed
    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| GlyphifyError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let files = collect_inputs(&args.inputs);
    if files.is_empty() {
        printer.warning("Skipped", "no image files found in the given inputs");
        return Ok(());
    }

    let mut converted = 0;
    for file in &files {
        convert_file(file, &args, &printer)?;
        converted += 1;
    }

    printer.success(
        "Finished",
        &format!(
            "{} into {}",
            plural(converted, "image", "images"),
            display_path(&args.output)
        ),
    );

    Ok(())
}

/// Expand directory arguments into image files, keeping files as given.
fn collect_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.is_file() && is_image(path) {
                    files.push(path.to_path_buf());
                }
            }
        } else {
            files.push(input.clone());
        }
    }

    files
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn convert_file(file: &Path, args: &ConvertArgs, printer: &Printer) -> Result<()> {
    let display = display_path(file);

    let img = image::open(file)
        .map_err(|e| GlyphifyError::Decode {
            path: file.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgb8();

    let width = img.width() as usize;
    let height = img.height() as usize;
    let buf = PixelBuffer::from_rgb(img.as_raw(), width, height)?;

    printer.status("Converting", &format!("{} ({}x{})", display, width, height));

    let (art, meta) = if args.full {
        let art = pixels_to_ascii(&buf)?;
        (art, ArtMeta::new(&display, width, height, None))
    } else {
        let grid = downsample(&buf, args.block)?;
        let art = render_text(grid.brightness(), grid.width())?;
        let meta = ArtMeta::new(&display, grid.width(), grid.height(), Some(args.block));
        (art, meta)
    };

    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    let text_path = args.output.join(format!("{}.txt", stem));
    fs::write(&text_path, &art).map_err(|e| GlyphifyError::Io {
        path: text_path.clone(),
        message: format!("Failed to write ASCII art: {}", e),
    })?;

    if args.meta {
        let meta_path = args.output.join(format!("{}.json", stem));
        write_meta_json(&meta, &meta_path)?;
    }

    printer.info(
        "Wrote",
        &format!("{} ({}x{})", display_path(&text_path), meta.width, meta.height),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_test_png(dir: &Path, name: &str) -> PathBuf {
        // 2x2: red, green / blue, white.
        let mut img = image::RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([0, 255, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        img.put_pixel(1, 1, image::Rgb([255, 255, 255]));

        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_convert_writes_text_file() {
        let dir = tempdir().unwrap();
        let input = write_test_png(dir.path(), "tiny.png");
        let out = dir.path().join("dist");

        let args = ConvertArgs {
            inputs: vec![input],
            block: 1,
            full: false,
            output: out.clone(),
            meta: false,
        };
        run(args).unwrap();

        let art = fs::read_to_string(out.join("tiny.txt")).unwrap();
        assert_eq!(art, "..\n..");
    }

    #[test]
    fn test_convert_full_resolution_matches_block_one() {
        let dir = tempdir().unwrap();
        let input = write_test_png(dir.path(), "tiny.png");

        let out_a = dir.path().join("a");
        run(ConvertArgs {
            inputs: vec![input.clone()],
            block: 1,
            full: false,
            output: out_a.clone(),
            meta: false,
        })
        .unwrap();

        let out_b = dir.path().join("b");
        run(ConvertArgs {
            inputs: vec![input],
            block: 1,
            full: true,
            output: out_b.clone(),
            meta: false,
        })
        .unwrap();

        let a = fs::read_to_string(out_a.join("tiny.txt")).unwrap();
        let b = fs::read_to_string(out_b.join("tiny.txt")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_convert_writes_meta_sidecar() {
        let dir = tempdir().unwrap();
        let input = write_test_png(dir.path(), "tiny.png");
        let out = dir.path().join("dist");

        run(ConvertArgs {
            inputs: vec![input],
            block: 2,
            full: false,
            output: out.clone(),
            meta: true,
        })
        .unwrap();

        let meta = fs::read_to_string(out.join("tiny.json")).unwrap();
        assert!(meta.contains("\"block_size\": 2"));
        assert!(meta.contains("\"width\": 1"));
    }

    #[test]
    fn test_directory_input_is_scanned() {
        let dir = tempdir().unwrap();
        let images = dir.path().join("images");
        fs::create_dir(&images).unwrap();
        write_test_png(&images, "one.png");
        write_test_png(&images, "two.png");
        fs::write(images.join("notes.txt"), "not an image").unwrap();

        let found = collect_inputs(&[images]);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_zero_block_size_is_an_error() {
        let dir = tempdir().unwrap();
        let input = write_test_png(dir.path(), "tiny.png");

        let err = run(ConvertArgs {
            inputs: vec![input],
            block: 0,
            full: false,
            output: dir.path().join("dist"),
            meta: false,
        })
        .unwrap_err();

        assert!(matches!(err, GlyphifyError::InvalidBlockSize { .. }));
    }

    #[test]
    fn test_is_image_extension_filter() {
        assert!(is_image(Path::new("a.png")));
        assert!(is_image(Path::new("b.JPG")));
        assert!(!is_image(Path::new("c.txt")));
        assert!(!is_image(Path::new("noext")));
    }
}
