use raylib::prelude::*;

use crate::constants::*;
use crate::element::SlideAnimation;

/// Screen-relative geometry for the idle and dialog elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageLayout {
    pub screen: Vector2,
    pub element_size: Vector2,
    pub dialog_rest: Vector2,
    pub idle_slide: SlideAnimation,
    pub dialog_slide: SlideAnimation,
}

impl StageLayout {
    pub fn for_screen(width: f32, height: f32) -> Self {
        // Idle images slide in from the left edge; dialogs rise from the bottom
        let idle_slide = SlideAnimation::new(
            Vector2::new(10.0, height / 4.0),
            Vector2::new(width / 3.5, height / 4.0),
            SLIDE_IN_DURATION,
        );
        let dialog_slide = SlideAnimation::new(
            Vector2::new(width / 5.5, height),
            Vector2::new(width / 5.5, height / 3.0),
            SLIDE_UP_DURATION,
        );

        Self {
            screen: Vector2::new(width, height),
            element_size: Vector2::new(width / 1.5, height / 1.5),
            dialog_rest: Vector2::new(width / 5.5, 10.0),
            idle_slide,
            dialog_slide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_full_hd() {
        let layout = StageLayout::for_screen(1925.0, 1080.0);

        assert_eq!(layout.element_size, Vector2::new(1925.0 / 1.5, 720.0));
        assert_eq!(layout.dialog_rest, Vector2::new(350.0, 10.0));

        assert_eq!(layout.idle_slide.from, Vector2::new(10.0, 270.0));
        assert_eq!(layout.idle_slide.to, Vector2::new(550.0, 270.0));
        assert_eq!(layout.idle_slide.duration, SLIDE_IN_DURATION);

        assert_eq!(layout.dialog_slide.from, Vector2::new(350.0, 1080.0));
        assert_eq!(layout.dialog_slide.to, Vector2::new(350.0, 360.0));
        assert_eq!(layout.dialog_slide.duration, SLIDE_UP_DURATION);
    }
}
