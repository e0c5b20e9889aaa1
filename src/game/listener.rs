//! Side-effect hooks the engine fires for the presentation layer.

/// Callback invoked once per individual card reveal, on both the player's
/// and the computer's flips. The presentation layer implements this to
/// trigger the flip sound; the engine itself stays silent.
pub trait FlipListener {
    fn on_card_flipped(&mut self, position: usize);
}

/// Listener that ignores every flip. The default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullListener;

impl FlipListener for NullListener {
    fn on_card_flipped(&mut self, _position: usize) {}
}
