/// One rendered status chip: CSS class plus visible label.
///
/// Every enum that appears as a badge maps to these through an
/// exhaustive match, so adding a variant forces the lookup to be
/// extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub class: &'static str,
    pub label: &'static str,
}

impl Badge {
    /// Yes/No chip for a boolean flag (late arrival, early leave).
    pub fn flag(set: bool) -> Badge {
        if set {
            Badge { class: "bg-warning text-dark", label: "Yes" }
        } else {
            Badge { class: "bg-secondary", label: "No" }
        }
    }
}
