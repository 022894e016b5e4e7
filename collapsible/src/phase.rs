/// Phase of the collapse/expand animation.
///
/// The machine rests in `Idle`. A change of the desired open state enters
/// `Measuring` synchronously, before the next frame paints. Each later phase
/// is entered one frame after the previous one, and the two animating phases
/// (`Closing`, `Opening`) wait on the transition-completion event to return
/// to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Measuring,
    ClosingStart,
    Closing,
    OpeningStart,
    Opening,
}

impl AnimationPhase {
    pub fn is_idle(self) -> bool {
        self == AnimationPhase::Idle
    }

    /// True while any transition work is in flight.
    pub fn is_animating(self) -> bool {
        !self.is_idle()
    }

    /// True for phases that advance on the next frame rather than waiting
    /// on the transition-completion event.
    pub fn has_frame_work(self) -> bool {
        matches!(
            self,
            AnimationPhase::Measuring | AnimationPhase::ClosingStart | AnimationPhase::OpeningStart
        )
    }

    /// Advance one display frame.
    ///
    /// `was_open` is the open state from before the toggle that started the
    /// current cycle. `content_height` is the natural (unclipped) height of
    /// the content node at this instant. Returns the next phase together with
    /// the height recorded at this step, or `None` when the current phase has
    /// no frame work.
    ///
    /// - `Measuring` reads the starting point: the current content height
    ///   when closing, zero when opening.
    /// - `ClosingStart` sets the target to zero, triggering the shrink.
    /// - `OpeningStart` sets the target to the content height, re-measured at
    ///   this step, triggering the growth.
    pub fn on_frame(self, was_open: bool, content_height: u16) -> Option<(AnimationPhase, u16)> {
        match self {
            AnimationPhase::Measuring if was_open => {
                Some((AnimationPhase::ClosingStart, content_height))
            }
            AnimationPhase::Measuring => Some((AnimationPhase::OpeningStart, 0)),
            AnimationPhase::ClosingStart => Some((AnimationPhase::Closing, 0)),
            AnimationPhase::OpeningStart => Some((AnimationPhase::Opening, content_height)),
            AnimationPhase::Idle | AnimationPhase::Closing | AnimationPhase::Opening => None,
        }
    }

    /// Finish on the transition-completion event. Only the two animating
    /// phases complete; every other phase ignores the event.
    pub fn on_transition_end(self) -> Option<AnimationPhase> {
        match self {
            AnimationPhase::Closing | AnimationPhase::Opening => Some(AnimationPhase::Idle),
            _ => None,
        }
    }
}
