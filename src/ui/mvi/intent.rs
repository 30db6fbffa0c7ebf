//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (control activations, key presses)
/// - System events (messages from the transport)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
