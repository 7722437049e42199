//! Terminal-session recordings (asciicast) to GIF.
//!
//! Only the header line of a recording is read. The produced GIF is a placeholder title card
//! sized for the recorded terminal; event replay is not supported.

/// Placeholder conversion with external-tool and in-process strategies.
pub mod convert;
/// Asciicast header line.
pub mod header;
