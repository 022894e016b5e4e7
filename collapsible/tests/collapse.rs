use collapsible::{AnimationPhase, Collapsible, ExpandContext, FrameScheduler};

// ============================================================================
// Opening
// ============================================================================

#[test]
fn test_starts_at_rest() {
    let panel = Collapsible::new("panel");
    assert_eq!(panel.phase(), AnimationPhase::Idle);
    assert!(!panel.is_open());
    assert_eq!(panel.height(), None);
    assert_eq!(panel.max_height(), Some(0));
    assert!(!panel.needs_frame());
}

#[test]
fn test_opening_walks_measuring_opening_start_opening_idle() {
    let mut panel = Collapsible::new("panel");

    panel.set_open(true, ExpandContext::root());
    assert_eq!(panel.phase(), AnimationPhase::Measuring);
    assert_eq!(panel.max_height(), None);
    assert!(panel.needs_frame());

    panel.frame(Some(120));
    assert_eq!(panel.phase(), AnimationPhase::OpeningStart);
    assert_eq!(panel.height(), Some(0));
    assert_eq!(panel.max_height(), Some(0));
    assert!(panel.needs_frame());

    panel.frame(Some(120));
    assert_eq!(panel.phase(), AnimationPhase::Opening);
    assert_eq!(panel.height(), Some(120));
    assert_eq!(panel.max_height(), Some(120));
    // The growing phase waits on the completion event, not on frames.
    assert!(!panel.needs_frame());

    panel.transition_end("panel");
    assert_eq!(panel.phase(), AnimationPhase::Idle);
    assert_eq!(panel.height(), None);
    assert_eq!(panel.max_height(), None);
    assert!(panel.is_fully_open());
}

// ============================================================================
// Closing
// ============================================================================

#[test]
fn test_closing_pins_current_height_then_shrinks_to_zero() {
    let mut panel = Collapsible::new("panel").open(true);
    assert_eq!(panel.max_height(), None);

    panel.set_open(false, ExpandContext::root());
    assert_eq!(panel.phase(), AnimationPhase::Measuring);
    // Measurement frame stays unconstrained so the rendered height can be read.
    assert_eq!(panel.max_height(), None);

    panel.frame(Some(88));
    assert_eq!(panel.phase(), AnimationPhase::ClosingStart);
    assert_eq!(panel.max_height(), Some(88));

    panel.frame(Some(88));
    assert_eq!(panel.phase(), AnimationPhase::Closing);
    assert_eq!(panel.max_height(), Some(0));
    assert!(!panel.needs_frame());

    panel.transition_end("panel");
    assert_eq!(panel.phase(), AnimationPhase::Idle);
    assert_eq!(panel.height(), None);
    assert_eq!(panel.max_height(), Some(0));
    assert!(!panel.is_fully_open());
}

// ============================================================================
// Idempotence and preemption
// ============================================================================

#[test]
fn test_unchanged_open_never_enters_measuring() {
    let mut panel = Collapsible::new("panel").open(true);

    panel.set_open(true, ExpandContext::root());
    assert_eq!(panel.phase(), AnimationPhase::Idle);
    assert!(!panel.needs_frame());

    let mut closed = Collapsible::new("closed");
    closed.set_open(false, ExpandContext::root());
    assert_eq!(closed.phase(), AnimationPhase::Idle);
    assert!(!closed.needs_frame());
}

#[test]
fn test_any_toggle_enters_measuring_first() {
    // Never skips straight to closing/opening, whatever the prior state.
    let mut panel = Collapsible::new("panel");

    panel.set_open(true, ExpandContext::root());
    assert_eq!(panel.phase(), AnimationPhase::Measuring);

    panel.frame(Some(60));
    panel.frame(Some(60));
    panel.transition_end("panel");

    panel.set_open(false, ExpandContext::root());
    assert_eq!(panel.phase(), AnimationPhase::Measuring);
}

#[test]
fn test_toggle_mid_cycle_abandons_in_flight_animation() {
    let mut panel = Collapsible::new("panel");

    panel.set_open(true, ExpandContext::root());
    panel.frame(Some(120));
    panel.frame(Some(120));
    assert_eq!(panel.phase(), AnimationPhase::Opening);

    // Last write wins: the expand is dropped and a close starts over.
    panel.set_open(false, ExpandContext::root());
    assert_eq!(panel.phase(), AnimationPhase::Measuring);
    assert!(panel.needs_frame());

    panel.frame(Some(120));
    assert_eq!(panel.phase(), AnimationPhase::ClosingStart);
    assert_eq!(panel.max_height(), Some(120));
}

#[test]
fn test_frame_without_pending_task_is_a_no_op() {
    let mut panel = Collapsible::new("panel");

    panel.frame(Some(40));
    assert_eq!(panel.phase(), AnimationPhase::Idle);

    panel.set_open(true, ExpandContext::root());
    panel.frame(Some(40));
    let phase = panel.phase();
    // Second tick in the same cycle step: nothing is due.
    panel.frame(Some(40));
    assert_eq!(panel.phase(), phase);
}

// ============================================================================
// Missing measurement node
// ============================================================================

#[test]
fn test_missing_content_node_measures_as_zero() {
    let mut panel = Collapsible::new("panel").open(true);

    panel.set_open(false, ExpandContext::root());
    panel.frame(None);
    assert_eq!(panel.phase(), AnimationPhase::ClosingStart);
    assert_eq!(panel.height(), Some(0));

    panel.frame(None);
    assert_eq!(panel.phase(), AnimationPhase::Closing);
}

// ============================================================================
// Completion event filtering
// ============================================================================

#[test]
fn test_completion_from_other_nodes_is_ignored() {
    let mut panel = Collapsible::new("panel");
    panel.set_open(true, ExpandContext::root());
    panel.frame(Some(120));
    panel.frame(Some(120));
    assert_eq!(panel.phase(), AnimationPhase::Opening);

    // Bubbled from nested content, or some other instance entirely.
    panel.transition_end("panel-child");
    panel.transition_end("other-panel");
    assert_eq!(panel.phase(), AnimationPhase::Opening);

    panel.transition_end("panel");
    assert_eq!(panel.phase(), AnimationPhase::Idle);
}

#[test]
fn test_completion_outside_animating_phases_is_ignored() {
    let mut panel = Collapsible::new("panel");
    panel.transition_end("panel");
    assert_eq!(panel.phase(), AnimationPhase::Idle);

    panel.set_open(true, ExpandContext::root());
    panel.transition_end("panel");
    assert_eq!(panel.phase(), AnimationPhase::Measuring);
}

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn test_unmount_cancels_pending_frame_work() {
    let mut panel = Collapsible::new("panel");
    panel.set_open(true, ExpandContext::root());
    assert!(panel.needs_frame());

    panel.unmount();
    assert!(!panel.needs_frame());

    // Late callbacks and updates no longer touch state.
    panel.frame(Some(120));
    assert_eq!(panel.phase(), AnimationPhase::Measuring);
    panel.transition_end("panel");
    assert_eq!(panel.phase(), AnimationPhase::Measuring);
    panel.set_open(false, ExpandContext::root());
    assert!(panel.is_open());
}

// ============================================================================
// Frame scheduler
// ============================================================================

#[test]
fn test_scheduler_holds_one_task() {
    let mut frames: FrameScheduler<u32> = FrameScheduler::new();
    assert!(!frames.is_scheduled());

    frames.schedule(1);
    frames.schedule(2);
    assert!(frames.is_scheduled());

    // The newer task replaced the older one.
    assert_eq!(frames.take_due(), Some(2));
    assert_eq!(frames.take_due(), None);
}

#[test]
fn test_scheduler_cancel_drops_pending_task() {
    let mut frames: FrameScheduler<u32> = FrameScheduler::new();
    frames.schedule(7);
    frames.cancel();
    assert!(!frames.is_scheduled());
    assert_eq!(frames.take_due(), None);
}
