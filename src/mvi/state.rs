/// Snapshot a render collaborator reads.
///
/// `Default` is the pristine screen; `PartialEq` lets callers skip redraws
/// when a transition changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
