//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (selecting a card, starting a new game)
/// - System events (mismatch timer expiry, character load results)
pub trait Intent: Send + 'static {}
