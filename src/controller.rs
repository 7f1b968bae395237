//! Navigation state machine over a [`Gallery`].
//!
//! Owns the current position, the raw jump-input text, and the validation
//! error shown after a rejected jump. All mutation goes through the four
//! operations below; each returns whether any observable field changed so
//! the front-end knows when to redraw.

use crate::events::ViewerCommand;
use crate::gallery::{Gallery, GalleryItem};

/// Message stored when a jump attempt is rejected.
const INVALID_JUMP_MESSAGE: &str = "Invalid number";

/// The slideshow controller.
///
/// `current_index` stays within `0..gallery.len()` across every operation;
/// the gallery is never empty, so there is no unpositioned state.
#[derive(Debug)]
pub struct Slideshow {
    gallery: Gallery,
    current_index: usize,
    jump_input: String,
    validation_error: Option<String>,
}

impl Slideshow {
    /// Start a slideshow at the first image with empty input and no error.
    #[must_use]
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            current_index: 0,
            jump_input: String::new(),
            validation_error: None,
        }
    }

    /// Step to the next image, wrapping from the last back to the first.
    ///
    /// Leaves the jump input and validation error untouched.
    pub fn advance(&mut self) -> bool {
        let prev = self.current_index;
        self.current_index = (self.current_index + 1) % self.gallery.len();
        prev != self.current_index
    }

    /// Step to the previous image, wrapping from the first to the last.
    ///
    /// Leaves the jump input and validation error untouched.
    pub fn retreat(&mut self) -> bool {
        let prev = self.current_index;
        self.current_index = (self.current_index + self.gallery.len() - 1) % self.gallery.len();
        prev != self.current_index
    }

    /// Replace the jump-input text.
    ///
    /// Clears any validation error unconditionally, even when the new text
    /// is itself invalid: validity is only judged on an explicit jump
    /// attempt, never per edit.
    pub fn edit_jump_input(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        let changed = text != self.jump_input || self.validation_error.is_some();
        self.jump_input = text;
        self.validation_error = None;
        changed
    }

    /// Try to jump to the 1-based image number in the jump input.
    ///
    /// Unparseable text or a number outside `1..=len` sets the validation
    /// error and leaves the position alone. Failure is reported through
    /// [`Self::validation_error`], never to the caller.
    pub fn attempt_jump(&mut self) -> bool {
        let target = self
            .jump_input
            .parse::<usize>()
            .ok()
            .filter(|k| (1..=self.gallery.len()).contains(k));
        match target {
            Some(k) => {
                let changed = self.current_index != k - 1 || self.validation_error.is_some();
                self.current_index = k - 1;
                self.validation_error = None;
                changed
            }
            None => {
                let changed = self.validation_error.is_none();
                self.validation_error = Some(INVALID_JUMP_MESSAGE.to_string());
                changed
            }
        }
    }

    /// Dispatch a routed command to the matching operation.
    pub fn apply(&mut self, command: ViewerCommand) -> bool {
        match command {
            ViewerCommand::Advance => self.advance(),
            ViewerCommand::Retreat => self.retreat(),
            ViewerCommand::EditJumpInput(text) => self.edit_jump_input(text),
            ViewerCommand::AttemptJump => self.attempt_jump(),
        }
    }

    /// Zero-based position of the displayed image.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The displayed gallery item.
    #[must_use]
    pub fn current_item(&self) -> &GalleryItem {
        self.gallery
            .get(self.current_index)
            .expect("current index stays within the gallery")
    }

    /// Raw jump-input text as last edited.
    #[must_use]
    pub fn jump_input(&self) -> &str {
        &self.jump_input
    }

    /// Message from the most recent rejected jump, if still standing.
    #[must_use]
    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// The gallery being shown (read-only).
    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }
}
