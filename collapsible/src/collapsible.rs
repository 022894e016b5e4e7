//! Animated expand/collapse of a content region.
//!
//! The component owns a small finite-state machine ([`AnimationPhase`]) and
//! is driven by three discrete triggers: an update of the desired open state
//! ([`set_open`](Collapsible::set_open)), a display frame elapsing
//! ([`frame`](Collapsible::frame)), and the completion event of the
//! underlying max-height transition
//! ([`transition_end`](Collapsible::transition_end)). The host tree calls
//! [`render`](Collapsible::render) after each trigger to get the current
//! node description.
//!
//! Opening walks `Measuring → OpeningStart → Opening → Idle`, growing the
//! max-height from zero to the content's natural height and then removing
//! the constraint so the content can keep resizing. Closing walks
//! `Measuring → ClosingStart → Closing → Idle`, pinning the current height
//! first so the shrink to zero has a starting point.

use crate::classes;
use crate::context::ExpandContext;
use crate::element::Element;
use crate::phase::AnimationPhase;
use crate::scheduler::FrameScheduler;
use crate::transition::Transition;

#[derive(Debug)]
pub struct Collapsible {
    // Configuration, static per mounted instance
    id: String,
    expand_on_print: bool,
    transition: Option<Transition>,

    /// Desired open state, authoritative and externally controlled.
    open: bool,
    /// Open state from before the toggle that started the current cycle.
    was_open: bool,

    phase: AnimationPhase,
    /// Height recorded for the current cycle, in pixels. `None` outside the
    /// measuring/animating phases.
    height: Option<u16>,

    /// Pending next-frame work, tagged with the phase it was scheduled under.
    frames: FrameScheduler<AnimationPhase>,
    /// Cleared on unmount; late callbacks check it before touching state.
    mounted: bool,
}

impl Collapsible {
    /// Create a collapsible in its resting state. `id` is the stable identity
    /// forwarded to the root element; a controlling trigger references it via
    /// its accessibility linkage.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            expand_on_print: false,
            transition: None,
            open: false,
            was_open: false,
            phase: AnimationPhase::Idle,
            height: None,
            frames: FrameScheduler::new(),
            mounted: true,
        }
    }

    /// Set the initial open state, without animating.
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self.was_open = open;
        self
    }

    /// Keep the content rendered for print media regardless of the open
    /// state or animation phase.
    pub fn expand_on_print(mut self, expand_on_print: bool) -> Self {
        self.expand_on_print = expand_on_print;
        self
    }

    /// Transition duration/timing-function forwarded to the rendered node.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    // -------------------------------------------------------------------------
    // Triggers
    // -------------------------------------------------------------------------

    /// Update pass: adopt the desired open state.
    ///
    /// A changed value enters `Measuring` synchronously, abandoning any
    /// in-flight cycle (last-write-wins, no queueing). If the nearest
    /// ancestor collapsible is itself expanding (`cx`), the animation is
    /// skipped outright and the node renders instantly in its final state.
    /// An unchanged value on an idle machine does nothing and schedules
    /// nothing.
    pub fn set_open(&mut self, open: bool, cx: ExpandContext) {
        if !self.mounted {
            return;
        }

        if open != self.open {
            log::debug!(
                "[collapsible {}] open {} -> {}, measuring",
                self.id,
                self.open,
                open
            );
            self.was_open = self.open;
            self.open = open;
            self.phase = AnimationPhase::Measuring;
        }

        if cx.ancestor_expanding && self.phase.is_animating() {
            // The expanding ancestor already animates this subtree.
            log::debug!("[collapsible {}] ancestor expanding, snapping to idle", self.id);
            self.phase = AnimationPhase::Idle;
            self.height = None;
            self.frames.cancel();
            return;
        }

        if self.phase.is_animating() {
            self.frames.schedule(self.phase);
        }
    }

    /// Body of the deferred frame callback.
    ///
    /// `content_height` is the natural (unclipped) height of the content
    /// node, or `None` when the node is gone mid-cycle, in which case the
    /// machine advances with a height of zero. Re-schedules itself while the
    /// next phase still has frame work; the animating phases then wait on
    /// [`transition_end`](Self::transition_end).
    pub fn frame(&mut self, content_height: Option<u16>) {
        if !self.mounted {
            return;
        }
        let Some(scheduled) = self.frames.take_due() else {
            return;
        };
        // A toggle that arrived after this task was queued abandoned the
        // cycle it belongs to; only the current cycle's task may act.
        if scheduled != self.phase {
            log::trace!(
                "[collapsible {}] stale frame for {:?}, now {:?}",
                self.id,
                scheduled,
                self.phase
            );
            return;
        }

        let measured = content_height.unwrap_or(0);
        if let Some((next, height)) = self.phase.on_frame(self.was_open, measured) {
            log::debug!(
                "[collapsible {}] {:?} -> {:?} (height {})",
                self.id,
                self.phase,
                next,
                height
            );
            self.phase = next;
            self.height = Some(height);
            if next.has_frame_work() {
                self.frames.schedule(next);
            }
        }
    }

    /// Completion handler for the max-height transition.
    ///
    /// Only an event targeting this instance's root element finalizes the
    /// cycle; completions bubbling up from nested content are ignored.
    pub fn transition_end(&mut self, target: &str) {
        if !self.mounted || target != self.id {
            return;
        }
        if let Some(next) = self.phase.on_transition_end() {
            log::debug!("[collapsible {}] {:?} complete", self.id, self.phase);
            self.phase = next;
            self.height = None;
        }
    }

    /// Tear down the instance: cancels pending frame work and makes every
    /// later trigger a no-op, so a late callback never acts on a destroyed
    /// instance.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.frames.cancel();
    }

    // -------------------------------------------------------------------------
    // State queries
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Height recorded for the current cycle, if any.
    pub fn height(&self) -> Option<u16> {
        self.height
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Open and at rest: the max-height constraint is lifted entirely.
    pub fn is_fully_open(&self) -> bool {
        self.phase.is_idle() && self.open
    }

    /// True while a frame task is queued; the host's frame loop should call
    /// [`frame`](Self::frame) on the next tick.
    pub fn needs_frame(&self) -> bool {
        self.frames.is_scheduled()
    }

    /// Max-height constraint the rendered root carries right now.
    ///
    /// `None` is unconstrained: an open, resting collapsible tracks implicit
    /// content growth without re-measuring, and the measurement frame leaves
    /// the node unconstrained so a close can read the full rendered height
    /// before pinning it.
    pub fn max_height(&self) -> Option<u16> {
        match self.phase {
            AnimationPhase::Idle if self.open => None,
            AnimationPhase::Measuring => None,
            _ => Some(self.height.unwrap_or(0)),
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render the current node description. Pure function of state.
    ///
    /// Children are included only while they can be seen: mid-animation,
    /// open, or retained for print. A fully collapsed node omits them
    /// entirely rather than hiding them. The hidden attribute always equals
    /// the negation of the open state, animation or not.
    pub fn render(&self, children: impl IntoIterator<Item = Element>) -> Element {
        let animating = self.phase.is_animating();
        let class_list = classes::class_names(&[
            (classes::COLLAPSIBLE, true),
            (classes::OPEN, self.open),
            (classes::ANIMATING, animating),
            (classes::FULLY_OPEN, self.is_fully_open()),
            (classes::EXPAND_ON_PRINT, self.expand_on_print),
        ]);

        let mut root = Element::new(&self.id)
            .classes(class_list)
            .hidden(!self.open);
        if let Some(px) = self.max_height() {
            root = root.max_height(px);
        }
        if let Some(transition) = &self.transition {
            root = root.transition(&transition.duration, &transition.timing_function);
        }

        if animating || self.open || self.expand_on_print {
            root.children(children)
        } else {
            root
        }
    }
}
