//! Edge resistance and release classification

use super::drag::DragSample;

/// Base time window for a flick (ms); grows with the distance-based skip
pub const FLICK_THRESHOLD_MS: f64 = 200.0;

/// Fraction of a page past a whole number of pages that counts as one more
pub const SKIP_REMAINDER_THRESHOLD: f32 = 0.25;

/// Distance a fast drag must exceed to flick to the neighbouring page when
/// it covered less than a page (px)
pub const SHORT_FLICK_DISTANCE: f32 = 20.0;

/// Direction of a settled drag in page order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher page indices (leftward drag, negative delta)
    Forward,
    /// Towards lower page indices (rightward drag, positive delta)
    Backward,
}

/// Classification of a released drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No horizontal intent: no net displacement or mostly vertical
    Cancelled,
    /// Settle on a page relative to the active one
    Settle {
        /// Pages covered by distance alone
        skip: usize,
        /// Whether the drag was fast enough to add one more page
        flick: bool,
        direction: Direction,
    },
}

impl GestureOutcome {
    /// Total pages to move, flick included (0 for a cancelled drag)
    pub fn pages(&self) -> usize {
        match self {
            GestureOutcome::Cancelled => 0,
            GestureOutcome::Settle { skip, flick, .. } => skip + usize::from(*flick),
        }
    }
}

/// Apply edge resistance to a raw horizontal delta.
///
/// Pulling right on the first page or left on the last page is divided by
/// `|delta| / page_width * 2 + 1`; everything else passes through.
pub fn resist(delta: f32, page_width: f32, at_first: bool, at_last: bool) -> f32 {
    let pushing_past = (at_first && delta > 0.0) || (at_last && delta < 0.0);
    if !pushing_past || page_width <= 0.0 {
        return delta;
    }
    delta / (delta.abs() / page_width * 2.0 + 1.0)
}

/// Classify a released drag
pub fn classify(sample: &DragSample, page_width: f32) -> GestureOutcome {
    let dx = sample.delta.x;
    if dx == 0.0 || sample.delta.is_mostly_vertical() || page_width <= 0.0 {
        return GestureOutcome::Cancelled;
    }

    let distance = dx.abs();
    let ratio = distance / page_width;
    let whole = ratio.floor();
    let skip = whole as usize + usize::from(ratio - whole > SKIP_REMAINDER_THRESHOLD);

    let window_ms = FLICK_THRESHOLD_MS + FLICK_THRESHOLD_MS * skip as f64 / 1.8;
    let min_distance = if skip > 0 {
        skip as f32 * page_width - page_width / 9.0
    } else {
        SHORT_FLICK_DISTANCE
    };
    let flick = sample.elapsed_ms < window_ms && distance > min_distance;

    let direction = if dx < 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    };

    log::trace!("classify: dx={dx} elapsed={}ms skip={skip} flick={flick}", sample.elapsed_ms);
    GestureOutcome::Settle { skip, flick, direction }
}
