//! Helpers for rebuilding time axes and splining channels onto new grids.

use aeolus_interp::CubicSpline;
use aeolus_timebase::{TimeSeries, TimebaseError};
use tracing::warn;

use crate::error::SignalError;

/// Evaluates the natural cubic spline through `(old_offsets, values)` at
/// `new_offsets`. Offsets must be strictly increasing, so callers are
/// expected to drop duplicate sample times first.
pub(crate) fn spline_onto(
    old_offsets: &[f64],
    values: &[f64],
    new_offsets: &[f64],
) -> Result<Vec<f64>, SignalError> {
    let spline = CubicSpline::fit(old_offsets, values)?;
    Ok(spline.evaluate_many(new_offsets))
}

/// Rebuilds a time axis around new offsets, keeping the unit and origin.
pub(crate) fn rebuild_axis(
    axis: &TimeSeries,
    offsets: Vec<f64>,
) -> Result<TimeSeries, TimebaseError> {
    match axis.origin() {
        Some(origin) => TimeSeries::from_offsets_with_origin(offsets, axis.unit(), origin),
        None => TimeSeries::from_offsets(offsets, axis.unit()),
    }
}

/// Keep-first mask over non-decreasing offsets: `true` for the first sample
/// of each run of equal offsets.
pub(crate) fn keep_first_mask(offsets: &[f64]) -> Vec<bool> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &off)| i == 0 || off != offsets[i - 1])
        .collect()
}

/// Re-expresses `axis` in the unit and origin frame of `reference` so that
/// offsets from both sides are directly comparable.
///
/// When the reference carries no origin, only the unit is matched and
/// offsets are compared as-is, origin alignment being impossible.
pub(crate) fn align_axis_to_reference(
    axis: &mut TimeSeries,
    reference: &TimeSeries,
) -> Result<(), SignalError> {
    axis.change_unit(reference.unit());
    if let Some(ref_origin) = reference.origin() {
        axis.rebase_origin(ref_origin)?;
    }
    Ok(())
}

/// Warns when the reference grid extends beyond the sampled range. The
/// boundary polynomials extrapolate there, which is only trustworthy very
/// slightly outside the data.
pub(crate) fn warn_on_extrapolation(axis: &TimeSeries, reference: &TimeSeries) {
    let (Some(&own_first), Some(&own_last)) = (axis.offsets().first(), axis.offsets().last())
    else {
        return;
    };
    let (Some(&ref_first), Some(&ref_last)) =
        (reference.offsets().first(), reference.offsets().last())
    else {
        return;
    };
    if ref_first < own_first || ref_last > own_last {
        warn!(
            below = (own_first - ref_first).max(0.0),
            above = (ref_last - own_last).max(0.0),
            "reference grid extends beyond the sampled range; edge values are extrapolated"
        );
    }
}
