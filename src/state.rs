#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DisplayState {
    IdleCycling,   // Rotating through the idle images on the short timer
    DialogShowing, // A dialog popped up after a detection, long timer armed
}
