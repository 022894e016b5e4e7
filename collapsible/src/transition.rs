/// CSS transition settings forwarded verbatim to the rendered element.
///
/// Both values are opaque strings (`"250ms"`, `"ease-in-out"`, ...); they are
/// not validated here and are treated as static for the lifetime of a mounted
/// instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub duration: String,
    pub timing_function: String,
}

impl Transition {
    pub fn new(duration: impl Into<String>, timing_function: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            timing_function: timing_function.into(),
        }
    }
}
