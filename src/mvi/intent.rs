/// Something that happened to a screen: an edit, a blur, a button press or
/// a settled fetch. Intents carry data only and never act on their own.
pub trait Intent: Send + 'static {}
