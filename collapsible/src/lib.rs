pub mod classes;
pub mod collapsible;
pub mod context;
pub mod element;
pub mod phase;
pub mod scheduler;
pub mod transition;

pub use collapsible::Collapsible;
pub use context::ExpandContext;
pub use element::{find_element, Content, Element};
pub use phase::AnimationPhase;
pub use scheduler::FrameScheduler;
pub use transition::Transition;
