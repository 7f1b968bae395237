/// Commands the presentation layer routes into the slideshow controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerCommand {
    /// Step forward, wrapping from the last image to the first.
    Advance,
    /// Step backward, wrapping from the first image to the last.
    Retreat,
    /// Replace the jump-target input text.
    EditJumpInput(String),
    /// Try to jump to the image named by the current input text.
    AttemptJump,
}
