//! Batch driver: resolves an input path into generator invocations

use std::path::{Path, PathBuf};

use crate::generator::AssetGenerator;
use crate::sink::MessageSink;

/// Extensions (lowercase, without dot) accepted when scanning a directory
const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Processes a single image file or a directory of images.
///
/// When `output` is `None` it defaults to an `android` directory next to
/// the input. Every outcome, including resolution failures, is reported
/// through `sink`; nothing is returned to the caller.
pub fn process(input: &Path, output: Option<PathBuf>, sink: &dyn MessageSink) {
    if input.as_os_str().is_empty() {
        sink.line("No input selected.");
        return;
    }

    let output = output.unwrap_or_else(|| default_output_dir(input));
    sink.line(&format!("Starting output to: {}", output.display()));

    if input.is_file() {
        AssetGenerator::new(output).generate(input, sink);
    } else if input.is_dir() {
        let files = match list_images(input) {
            Ok(files) => files,
            Err(err) => {
                sink.line(&format!(
                    "Error reading directory {}: {}",
                    input.display(),
                    err
                ));
                return;
            }
        };

        if files.is_empty() {
            sink.line("No compatible images found in directory.");
            return;
        }

        sink.line(&format!("Found {} images in directory.", files.len()));
        let generator = AssetGenerator::new(output);
        for file in &files {
            generator.generate(file, sink);
        }
    } else {
        sink.line("Invalid input path.");
    }

    sink.line("Done!");
}

/// Default output location: an `android` directory beside the input
fn default_output_dir(input: &Path) -> PathBuf {
    input.parent().unwrap_or_else(|| Path::new("")).join("android")
}

/// Immediate children of `dir` whose names end in a supported image
/// extension, sorted by name so batch order is deterministic
fn list_images(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_supported_image)
        })
        .collect();

    files.sort();
    Ok(files)
}

fn is_supported_image(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower
        .rsplit_once('.')
        .is_some_and(|(_, ext)| SUPPORTED_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::sync::Mutex;
    use tempfile::tempdir;

    fn collect(run: impl FnOnce(&dyn MessageSink)) -> Vec<String> {
        let lines = Mutex::new(Vec::new());
        let sink = |message: &str| lines.lock().unwrap().push(message.to_string());
        run(&sink);
        lines.into_inner().unwrap()
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([20, 120, 220, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let lines = collect(|sink| process(Path::new(""), None, sink));
        assert_eq!(lines, vec!["No input selected."]);
    }

    #[test]
    fn test_invalid_path_still_finishes() {
        let lines = collect(|sink| process(Path::new("/definitely/not/here"), None, sink));
        assert!(lines.iter().any(|l| l == "Invalid input path."));
        assert_eq!(lines.last().unwrap(), "Done!");
    }

    #[test]
    fn test_directory_without_images_creates_nothing() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        let out = dir.path().join("out");

        let lines = collect(|sink| process(dir.path(), Some(out.clone()), sink));

        assert!(lines
            .iter()
            .any(|l| l == "No compatible images found in directory."));
        assert!(!lines.iter().any(|l| l == "Done!"));
        assert!(!out.exists());
    }

    #[test]
    fn test_single_file_mode() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("icon.png");
        write_png(&src, 48, 48);
        let out = dir.path().join("res");

        let lines = collect(|sink| process(&src, Some(out.clone()), sink));

        assert!(lines.iter().any(|l| l.starts_with("Starting output to:")));
        assert!(lines.iter().any(|l| l == "Processing: icon.png"));
        assert_eq!(lines.last().unwrap(), "Done!");
        for tag in ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"] {
            assert!(out.join(format!("drawable-{tag}/icon.png")).is_file());
        }
    }

    #[test]
    fn test_default_output_is_android_beside_input() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("icon.png");
        write_png(&src, 48, 48);

        let lines = collect(|sink| process(&src, None, sink));

        assert_eq!(lines.last().unwrap(), "Done!");
        assert!(dir
            .path()
            .join("android/drawable-mdpi/icon.png")
            .is_file());
    }

    #[test]
    fn test_directory_mode_processes_sorted_batch() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("b.png"), 48, 48);
        write_png(&dir.path().join("a.PNG"), 48, 48);
        std::fs::write(dir.path().join("skip.txt"), "x").unwrap();
        let out = dir.path().join("out");

        let lines = collect(|sink| process(dir.path(), Some(out.clone()), sink));

        assert!(lines.iter().any(|l| l == "Found 2 images in directory."));
        let processed: Vec<&String> = lines
            .iter()
            .filter(|l| l.starts_with("Processing:"))
            .collect();
        assert_eq!(processed, ["Processing: a.PNG", "Processing: b.png"]);
        assert_eq!(lines.last().unwrap(), "Done!");
        assert!(out.join("drawable-xxxhdpi/a.png").is_file());
        assert!(out.join("drawable-xxxhdpi/b.png").is_file());
    }

    #[test]
    fn test_batch_continues_past_bad_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("bad.png"), b"garbage").unwrap();
        write_png(&dir.path().join("good.png"), 48, 48);
        let out = dir.path().join("out");

        let lines = collect(|sink| process(dir.path(), Some(out.clone()), sink));

        assert!(lines
            .iter()
            .any(|l| l.starts_with("Error processing bad.png:")));
        assert!(out.join("drawable-mdpi/good.png").is_file());
        assert_eq!(lines.last().unwrap(), "Done!");
    }
}
