//! Discriminated load status.

use crate::mvi::UiState;

use super::error::ErrorInfo;

/// Exactly one of idle, loading, loaded or failed.
///
/// Loading, error and data flags are derived from the variant, so they can
/// never disagree with each other.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResourceStatus<T> {
    /// Nothing requested yet, or cleared.
    #[default]
    Idle,
    Loading,
    Success(T),
    Failure(ErrorInfo),
}

impl<T: Clone + PartialEq + Send + 'static> UiState for ResourceStatus<T> {}

impl<T> ResourceStatus<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn has_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn has_data(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// Get the current error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error().map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        assert_eq!(ResourceStatus::<u8>::default(), ResourceStatus::Idle);
    }

    #[test]
    fn derived_flags_follow_variant() {
        let loading = ResourceStatus::<u8>::Loading;
        assert!(loading.is_loading() && !loading.has_error() && !loading.has_data());

        let success = ResourceStatus::Success(7u8);
        assert!(!success.is_loading() && !success.has_error() && success.has_data());
        assert_eq!(success.data(), Some(&7));

        let failure = ResourceStatus::<u8>::Failure(ErrorInfo::new("nope"));
        assert!(!failure.is_loading() && failure.has_error() && !failure.has_data());
        assert_eq!(failure.error_message(), Some("nope"));
    }
}
