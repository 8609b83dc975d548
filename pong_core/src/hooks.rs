/// One-shot notifications for an audio layer.
///
/// Every method defaults to a no-op; implementors override what they
/// can play and swallow their own playback failures.
pub trait SoundHooks {
    fn paddle_hit(&mut self) {}

    fn point_scored(&mut self) {}

    /// The AI side reached the winning score
    fn match_lost(&mut self) {}
}
