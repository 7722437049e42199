/// Frames emitted for every transcript line except the last.
pub const HOLD_FRAMES: usize = 3;
/// Frames emitted for the last transcript line, so the final state lingers.
pub const FINAL_HOLD_FRAMES: usize = 5;

/// Transcript state shown by one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameState {
    /// All lines emitted so far joined by `\n`, trimmed at both ends.
    pub text: String,
    /// 1-based index of the transcript line that produced this state.
    pub step: usize,
    /// Number of transcript lines.
    pub total_steps: usize,
}

impl FrameState {
    /// Counter label drawn in the corner of the frame, e.g. `[3/30]`.
    pub fn counter_label(&self) -> String {
        format!("[{}/{}]", self.step, self.total_steps)
    }
}

/// Number of frames line `index` of an `len`-line transcript is held for.
pub fn hold_frames(index: usize, len: usize) -> usize {
    if index + 1 < len {
        HOLD_FRAMES
    } else {
        FINAL_HOLD_FRAMES
    }
}

/// Frame count [`build_sequence`] produces for a transcript of `len` lines.
pub fn expected_frame_count(len: usize) -> usize {
    match len {
        0 => 0,
        n => HOLD_FRAMES * (n - 1) + FINAL_HOLD_FRAMES,
    }
}

/// Expand a transcript into the ordered list of frame states.
///
/// Line `i` is appended to the running text and the resulting state is repeated
/// [`hold_frames`] times. The result is fully materialized.
pub fn build_sequence<S: AsRef<str>>(lines: &[S]) -> Vec<FrameState> {
    let total_steps = lines.len();
    let mut out = Vec::with_capacity(expected_frame_count(total_steps));
    let mut accumulated = String::new();

    for (i, line) in lines.iter().enumerate() {
        accumulated.push_str(line.as_ref());
        accumulated.push('\n');

        let state = FrameState {
            text: accumulated.trim().to_owned(),
            step: i + 1,
            total_steps,
        };
        out.extend(std::iter::repeat_n(state, hold_frames(i, total_steps)));
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/script/sequence.rs"]
mod tests;
