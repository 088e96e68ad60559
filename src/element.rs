use std::path::{Path, PathBuf};

use raylib::prelude::*;

/// Addresses an element in one of the controller's two lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRef {
    Idle(usize),
    Dialog(usize),
}

/// Position at `elapsed` seconds into a linear move from `from` to `to`.
/// Clamped to the endpoints outside `[0, duration]`.
pub fn interpolate(from: Vector2, to: Vector2, duration: f32, elapsed: f32) -> Vector2 {
    if duration <= 0.0 {
        return to;
    }
    let t = (elapsed / duration).clamp(0.0, 1.0);
    from.lerp(to, t)
}

/// Largest size with the texture's aspect ratio that fits inside `bounds`.
pub fn fit_within(texture_width: f32, texture_height: f32, bounds: Vector2) -> Vector2 {
    if texture_width <= 0.0 || texture_height <= 0.0 {
        return Vector2::zero();
    }
    let scale = (bounds.x / texture_width).min(bounds.y / texture_height);
    Vector2::new(texture_width * scale, texture_height * scale)
}

/// A two-point position animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    pub from: Vector2,
    pub to: Vector2,
    pub duration: f32,
    elapsed: f32,
}

impl SlideAnimation {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn position(&self) -> Vector2 {
        interpolate(self.from, self.to, self.duration, self.elapsed)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }
}

pub struct VisualElement {
    path: PathBuf,

    pub visible: bool,
    pub position: Vector2,
    pub size: Vector2,

    animation: SlideAnimation,
    is_animating: bool,
}

impl VisualElement {
    pub fn new(path: PathBuf, animation: SlideAnimation) -> Self {
        Self {
            path,
            visible: false,
            position: animation.from,
            size: Vector2::zero(),
            animation,
            is_animating: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Swaps in new slide endpoints, keeping how far through the slide the element is.
    pub fn set_animation(&mut self, animation: SlideAnimation) {
        self.animation = SlideAnimation {
            elapsed: self.animation.elapsed,
            ..animation
        };
        if self.visible || self.is_animating {
            self.position = self.animation.position();
        }
    }

    /// Restarts the slide from its start point.
    pub fn start_animation(&mut self) {
        self.animation.elapsed = 0.0;
        self.position = self.animation.from;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation.advance(dt);
        self.position = self.animation.position();

        if self.animation.is_finished() {
            self.is_animating = false;
            self.position = self.animation.to;
        }
    }
}
