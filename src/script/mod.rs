//! Scripted terminal transcripts and their expansion into per-frame states.

/// Accumulating frame states built from a transcript.
pub mod sequence;
/// The built-in demo transcript.
pub mod transcript;
