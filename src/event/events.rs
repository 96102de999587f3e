use uuid::Uuid;

/// Identifies one mounted view instance; two stacked player views for the
/// same song still get different ids.
pub type ViewId = Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ProgressTick(ViewId),
}
