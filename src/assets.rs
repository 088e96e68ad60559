use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::config::BinType;
use crate::constants::IMAGE_EXTENSIONS;
use crate::error::{KioskError, Result};

/// Where a bin type's assets live on disk.
///
/// ```text
/// images/<bin type>/
/// ├── background.png
/// ├── image_ani/      # idle images, shown in file-name order
/// └── dialog_ani/     # dialogs, one picked at random per detection
/// ```
#[derive(Debug, Clone)]
pub struct AssetLayout {
    base: PathBuf,
}

impl AssetLayout {
    pub fn new(root: &Path, bin_type: &BinType) -> Self {
        Self {
            base: root.join(bin_type.as_str()),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn background(&self) -> PathBuf {
        self.base.join("background.png")
    }

    pub fn idle_dir(&self) -> PathBuf {
        self.base.join("image_ani")
    }

    pub fn dialog_dir(&self) -> PathBuf {
        self.base.join("dialog_ani")
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lists the image files directly inside `dir`, sorted by file name.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let asset_dir_error = |source| KioskError::AssetDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(asset_dir_error)? {
        let path = entry.map_err(asset_dir_error)?.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(KioskError::NoImages {
            dir: dir.to_path_buf(),
        });
    }
    debug!(dir = %dir.display(), count = paths.len(), "assets:listed images");
    Ok(paths)
}

fn texture_error(path: &Path, message: impl ToString) -> KioskError {
    KioskError::Texture {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Reads the EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY) {
            Some(field) => match &field.value {
                Value::Short(values) if !values.is_empty() => values[0],
                _ => 1,
            },
            None => 1,
        },
        Err(e) => {
            warn!(path = %image_path.display(), error = %e, "assets:could not read EXIF data");
            1
        }
    }
}

/// Loads an image file into a texture, baking in any JPEG EXIF rotation.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).map_err(|e| texture_error(image_path, e))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| texture_error(image_path, e))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Mirrored orientations are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(path = %image_path.display(), orientation, "assets:applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| texture_error(image_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_layout_paths_for_bin_type() {
        let bin_type = BinType::new("compost").unwrap();
        let layout = AssetLayout::new(Path::new("images"), &bin_type);

        assert_eq!(layout.background(), PathBuf::from("images/compost/background.png"));
        assert_eq!(layout.idle_dir(), PathBuf::from("images/compost/image_ani"));
        assert_eq!(layout.dialog_dir(), PathBuf::from("images/compost/dialog_ani"));
    }

    #[test]
    fn test_compost_reads_only_compost_directory() {
        let root = TempDir::new().unwrap();
        for bin in ["compost", "recycle", "landfill"] {
            touch(&root.path().join(bin).join("image_ani/a.png"));
            touch(&root.path().join(bin).join("dialog_ani/d.png"));
        }

        let layout = AssetLayout::new(root.path(), &BinType::new("compost").unwrap());
        let idle = list_images(&layout.idle_dir()).unwrap();
        let dialogs = list_images(&layout.dialog_dir()).unwrap();

        let compost = root.path().join("compost");
        for path in idle.iter().chain(dialogs.iter()) {
            assert!(path.starts_with(&compost), "{} escaped compost", path.display());
        }
        assert_eq!(idle.len(), 1);
        assert_eq!(dialogs.len(), 1);
    }

    #[test]
    fn test_list_images_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("c.png"));
        touch(&dir.path().join("a.PNG"));
        touch(&dir.path().join("b.jpg"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("png"));
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<String> = list_images(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.jpg", "c.png"]);
    }

    #[test]
    fn test_list_images_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("image_ani");

        let err = list_images(&missing).unwrap_err();
        assert!(matches!(err, KioskError::AssetDir { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_list_images_empty_directory() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("readme.txt"));

        let err = list_images(dir.path()).unwrap_err();
        assert!(matches!(err, KioskError::NoImages { .. }));
    }
}
