use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::constants::*;
use crate::element::{ElementRef, VisualElement};
use crate::engine::Canvas;
use crate::error::{KioskError, Result};
use crate::layout::StageLayout;
use crate::state::DisplayState;
use crate::timer::RepeatingTimer;

/// Owns the idle sequence and the dialog set and decides which one element is on screen.
///
/// Idle images rotate on a short timer. A detection hides whatever is up, shows a random
/// dialog and re-arms the same timer with a longer period; when that fires, idle
/// cycling resumes from the next idle image.
pub struct DisplayController<R: Rng = StdRng> {
    idle: Vec<VisualElement>,
    dialogs: Vec<VisualElement>,
    idle_index: usize,
    state: DisplayState,
    timer: RepeatingTimer,
    rng: R,
}

impl DisplayController<StdRng> {
    pub fn new(idle: Vec<PathBuf>, dialogs: Vec<PathBuf>, layout: &StageLayout) -> Result<Self> {
        Self::with_rng(idle, dialogs, layout, StdRng::from_os_rng())
    }
}

impl<R: Rng> DisplayController<R> {
    pub fn with_rng(
        idle: Vec<PathBuf>,
        dialogs: Vec<PathBuf>,
        layout: &StageLayout,
        rng: R,
    ) -> Result<Self> {
        if idle.is_empty() {
            return Err(KioskError::EmptyList { list: "idle" });
        }
        if dialogs.is_empty() {
            return Err(KioskError::EmptyList { list: "dialog" });
        }

        let idle = idle
            .into_iter()
            .map(|path| {
                let mut element = VisualElement::new(path, layout.idle_slide);
                element.size = layout.element_size;
                element
            })
            .collect();
        let dialogs = dialogs
            .into_iter()
            .map(|path| {
                let mut element = VisualElement::new(path, layout.dialog_slide);
                element.position = layout.dialog_rest;
                element.size = layout.element_size;
                element
            })
            .collect();

        let mut timer = RepeatingTimer::new(IDLE_PERIOD);
        timer.start(IDLE_PERIOD);

        let mut controller = Self {
            idle,
            dialogs,
            idle_index: 0,
            state: DisplayState::IdleCycling,
            timer,
            rng,
        };
        controller.hide_all();
        Ok(controller)
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn idle_index(&self) -> usize {
        self.idle_index
    }

    pub fn timer(&self) -> &RepeatingTimer {
        &self.timer
    }

    pub fn element(&self, key: ElementRef) -> Option<&VisualElement> {
        match key {
            ElementRef::Idle(i) => self.idle.get(i),
            ElementRef::Dialog(i) => self.dialogs.get(i),
        }
    }

    fn element_mut(&mut self, key: ElementRef) -> Option<&mut VisualElement> {
        match key {
            ElementRef::Idle(i) => self.idle.get_mut(i),
            ElementRef::Dialog(i) => self.dialogs.get_mut(i),
        }
    }

    fn elements(&self) -> impl Iterator<Item = (ElementRef, &VisualElement)> {
        let idle = self.idle.iter().enumerate().map(|(i, e)| (ElementRef::Idle(i), e));
        let dialogs = self.dialogs.iter().enumerate().map(|(i, e)| (ElementRef::Dialog(i), e));
        idle.chain(dialogs)
    }

    /// The element currently on screen, if any.
    pub fn visible(&self) -> Option<ElementRef> {
        self.elements().find(|(_, e)| e.visible).map(|(key, _)| key)
    }

    pub fn hide_all(&mut self) {
        for element in self.idle.iter_mut().chain(self.dialogs.iter_mut()) {
            element.visible = false;
        }
    }

    /// Hides everything else, then shows `key` and restarts its slide.
    pub fn show(&mut self, key: ElementRef) {
        self.hide_all();
        if let Some(element) = self.element_mut(key) {
            element.visible = true;
            element.start_animation();
        }
    }

    /// Timer handler: moves to the next idle image, wrapping at the end of the list.
    pub fn advance(&mut self) {
        self.idle_index = (self.idle_index + 1) % self.idle.len();
        self.show(ElementRef::Idle(self.idle_index));

        if self.state == DisplayState::DialogShowing {
            self.state = DisplayState::IdleCycling;
            self.timer.start(IDLE_PERIOD);
            debug!(idle_index = self.idle_index, "display:dialog dismissed");
        }
    }

    /// Pops up a random dialog. A detection during a dialog picks again and restarts the
    /// dialog timer. Returns the index picked.
    pub fn on_detection(&mut self) -> usize {
        let pick = self.rng.random_range(0..self.dialogs.len());

        self.timer.stop();
        self.show(ElementRef::Dialog(pick));
        self.timer.start(DIALOG_PERIOD);

        if let Some(element) = self.element(ElementRef::Dialog(pick)) {
            let restarted = self.state == DisplayState::DialogShowing;
            debug!(
                dialog = pick,
                path = %element.path().display(),
                restarted,
                "display:dialog shown"
            );
        }
        self.state = DisplayState::DialogShowing;
        pick
    }

    /// Moves every element onto a new layout after the screen size changed.
    /// A slide in progress continues toward its new end point.
    pub fn relayout(&mut self, layout: &StageLayout) {
        for element in self.idle.iter_mut() {
            element.set_animation(layout.idle_slide);
            element.size = layout.element_size;
            if !element.visible {
                element.position = layout.idle_slide.from;
            }
        }
        for element in self.dialogs.iter_mut() {
            element.set_animation(layout.dialog_slide);
            element.size = layout.element_size;
            if !element.visible {
                element.position = layout.dialog_rest;
            }
        }
    }

    /// Steps animations and the timer by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for element in self.idle.iter_mut().chain(self.dialogs.iter_mut()) {
            element.update(dt);
        }

        if self.timer.tick(dt) {
            self.advance();
        }
    }

    /// Paints the visible element, then the frame over it.
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        for (key, element) in self.elements() {
            if element.visible {
                canvas.draw_element(key, element);
            }
        }
        canvas.draw_frame();
    }
}
