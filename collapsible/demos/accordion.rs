use std::fs::File;

use collapsible::{Collapsible, Element, ExpandContext, Transition};
use simplelog::{Config, LevelFilter, WriteLogger};

const OUTER_CONTENT_HEIGHT: u16 = 240;
const INNER_CONTENT_HEIGHT: u16 = 96;

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("accordion.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut outer =
        Collapsible::new("faq-outer").transition(Transition::new("250ms", "ease-in-out"));
    let mut inner = Collapsible::new("faq-inner");

    // The user expands the outer section; the nested section is revealed in
    // the same pass and must not run its own height animation on top of it.
    let cx = ExpandContext::root();
    outer.set_open(true, cx);
    inner.set_open(true, cx.descend(&outer));
    report("after toggle", &outer, &inner);

    // Host frame loop: one tick per pending frame task.
    while outer.needs_frame() || inner.needs_frame() {
        outer.frame(Some(OUTER_CONTENT_HEIGHT));
        inner.frame(Some(INNER_CONTENT_HEIGHT));
        report("frame", &outer, &inner);
    }

    // The host reports the end of the outer max-height transition.
    outer.transition_end("faq-outer");
    report("transition end", &outer, &inner);

    let tree = outer.render([
        Element::text("How do refunds work?"),
        inner.render([Element::text("Refunds are issued to the original payment method.")]),
    ]);
    println!(
        "rendered root: id={} classes={:?} max-height={:?} hidden={}",
        tree.id, tree.classes, tree.max_height, tree.hidden
    );
    Ok(())
}

fn report(step: &str, outer: &Collapsible, inner: &Collapsible) {
    println!(
        "{step:>16}: outer {:?} (max-height {:?}), inner {:?} (max-height {:?})",
        outer.phase(),
        outer.max_height(),
        inner.phase(),
        inner.max_height(),
    );
}
