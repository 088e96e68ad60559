use crate::element::{ElementRef, VisualElement};

/// Rendering backend the display controller draws through.
///
/// The frame (`background.png`) sits on top of the elements: its transparent
/// window shows the sliding image, its opaque border hides the slide's entry.
pub trait Canvas {
    fn draw_frame(&mut self);
    fn draw_element(&mut self, key: ElementRef, element: &VisualElement);
}
