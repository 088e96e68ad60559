use std::path::{Path, PathBuf};

use raylib::prelude::*;
use tracing::warn;

use crate::assets::{AssetLayout, list_images, load_texture_with_exif_rotation};
use crate::element::{ElementRef, VisualElement, fit_within};
use crate::engine::Canvas;
use crate::error::{KioskError, Result};

/// GPU side of the display: the frame overlay and one texture per idle/dialog element,
/// stored in the same order as the controller's lists.
pub struct Stage {
    frame: Texture2D,
    idle: Vec<Texture2D>,
    dialogs: Vec<Texture2D>,
    idle_paths: Vec<PathBuf>,
    dialog_paths: Vec<PathBuf>,
}

fn load_group(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
) -> Result<(Vec<PathBuf>, Vec<Texture2D>)> {
    let mut paths = Vec::new();
    let mut textures = Vec::new();

    for path in list_images(dir)? {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => {
                paths.push(path);
                textures.push(texture);
            }
            Err(e) => warn!(error = %e, "stage:skipping image"),
        }
    }

    if textures.is_empty() {
        return Err(KioskError::NoImages {
            dir: dir.to_path_buf(),
        });
    }
    Ok((paths, textures))
}

impl Stage {
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets: &AssetLayout,
    ) -> Result<Self> {
        let frame = load_texture_with_exif_rotation(rl, thread, &assets.background())?;
        let (idle_paths, idle) = load_group(rl, thread, &assets.idle_dir())?;
        let (dialog_paths, dialogs) = load_group(rl, thread, &assets.dialog_dir())?;

        Ok(Self {
            frame,
            idle,
            dialogs,
            idle_paths,
            dialog_paths,
        })
    }

    /// Paths of the idle and dialog images that loaded successfully.
    pub fn paths(&self) -> (Vec<PathBuf>, Vec<PathBuf>) {
        (self.idle_paths.clone(), self.dialog_paths.clone())
    }

    pub fn texture(&self, key: ElementRef) -> Option<&Texture2D> {
        match key {
            ElementRef::Idle(i) => self.idle.get(i),
            ElementRef::Dialog(i) => self.dialogs.get(i),
        }
    }

    pub fn canvas<'a, D: RaylibDraw>(
        &'a self,
        d: &'a mut D,
        screen: Vector2,
    ) -> RaylibCanvas<'a, D> {
        RaylibCanvas {
            d,
            stage: self,
            screen,
        }
    }
}

pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
    stage: &'a Stage,
    screen: Vector2,
}

fn full_source(texture: &Texture2D) -> Rectangle {
    Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32)
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn draw_frame(&mut self) {
        // Stretched to the screen, aspect ratio ignored
        let frame = &self.stage.frame;
        self.d.draw_texture_pro(
            frame,
            full_source(frame),
            Rectangle::new(0.0, 0.0, self.screen.x, self.screen.y),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }

    fn draw_element(&mut self, key: ElementRef, element: &VisualElement) {
        let Some(texture) = self.stage.texture(key) else {
            return;
        };
        let size = fit_within(texture.width() as f32, texture.height() as f32, element.size);

        // Element position is the top-left corner
        self.d.draw_texture_pro(
            texture,
            full_source(texture),
            Rectangle::new(element.position.x, element.position.y, size.x, size.y),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
}
