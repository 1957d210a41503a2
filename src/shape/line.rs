//! Definition of the infinite line used as projection target and separating axis.

use crate::math::{Point, Real, VERTICAL_SLOPE_THRESHOLD};

/// An infinite line of the plane.
///
/// Vertical lines have no finite slope so they get their own variant instead of
/// carrying a `NaN` slope around.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Line {
    /// The line `y = slope * x + intercept`.
    Sloped {
        /// The slope of the line.
        slope: Real,
        /// The `y` coordinate where the line crosses the `y` axis.
        intercept: Real,
    },
    /// The vertical line of equation `x = x`.
    Vertical {
        /// The `x` coordinate where the line crosses the `x` axis.
        x: Real,
    },
}

impl Line {
    /// The line `y = slope * x + intercept`, without any slope normalization.
    #[inline]
    pub fn sloped(slope: Real, intercept: Real) -> Self {
        Line::Sloped { slope, intercept }
    }

    /// The vertical line `x = x`.
    #[inline]
    pub fn vertical(x: Real) -> Self {
        Line::Vertical { x }
    }

    /// The `x` axis.
    #[inline]
    pub fn x_axis() -> Self {
        Line::sloped(0.0, 0.0)
    }

    /// The `y` axis.
    #[inline]
    pub fn y_axis() -> Self {
        Line::vertical(0.0)
    }

    /// The line passing through `p1` and `p2`.
    ///
    /// See [`Line::through_points_with_threshold`].
    #[inline]
    pub fn through_points(p1: &Point<Real>, p2: &Point<Real>) -> Self {
        Self::through_points_with_threshold(p1, p2, VERTICAL_SLOPE_THRESHOLD)
    }

    /// The line passing through `p1` and `p2`.
    ///
    /// If the slope between both points is not finite, or if its magnitude exceeds
    /// `vertical_slope_threshold`, the vertical line `x = p1.x` is returned. This
    /// includes the case where `p1 == p2`.
    pub fn through_points_with_threshold(
        p1: &Point<Real>,
        p2: &Point<Real>,
        vertical_slope_threshold: Real,
    ) -> Self {
        let slope = (p2.y - p1.y) / (p2.x - p1.x);
        Self::with_slope_through(slope, p1, vertical_slope_threshold)
    }

    /// The line with the given `slope` passing through `point`.
    ///
    /// Non-finite slopes and slopes with a magnitude above `vertical_slope_threshold`
    /// result in the vertical line `x = point.x`.
    pub fn with_slope_through(
        slope: Real,
        point: &Point<Real>,
        vertical_slope_threshold: Real,
    ) -> Self {
        if !slope.is_finite() || slope.abs() > vertical_slope_threshold {
            Line::vertical(point.x)
        } else {
            Line::sloped(slope, point.y - point.x * slope)
        }
    }

    /// The slope of this line, or `None` if it is vertical.
    #[inline]
    pub fn slope(&self) -> Option<Real> {
        match *self {
            Line::Sloped { slope, .. } => Some(slope),
            Line::Vertical { .. } => None,
        }
    }

    /// The `y` coordinate where this line crosses the `y` axis, or `None` if it is vertical.
    #[inline]
    pub fn intercept(&self) -> Option<Real> {
        match *self {
            Line::Sloped { intercept, .. } => Some(intercept),
            Line::Vertical { .. } => None,
        }
    }

    /// Is this line vertical?
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    /// The line perpendicular to `self` and passing through the origin.
    ///
    /// This is the axis SAT projects on when `self` supports a polygon edge.
    /// A perpendicular slope above `vertical_slope_threshold` yields the `y` axis.
    pub fn normal_axis(&self, vertical_slope_threshold: Real) -> Self {
        match *self {
            Line::Vertical { .. } => Line::x_axis(),
            Line::Sloped { slope, .. } if slope == 0.0 => Line::y_axis(),
            Line::Sloped { slope, .. } => {
                Self::with_slope_through(-1.0 / slope, &Point::origin(), vertical_slope_threshold)
            }
        }
    }

    /// The signed vertical gap between `pt` and this line (horizontal gap if vertical).
    ///
    /// Zero when `pt` lies on the line.
    pub fn offset_of(&self, pt: &Point<Real>) -> Real {
        match *self {
            Line::Sloped { slope, intercept } => pt.y - (slope * pt.x + intercept),
            Line::Vertical { x } => pt.x - x,
        }
    }
}

/// Computes the line passing through `p1` and `p2`.
///
/// Nearly vertical lines (slope magnitude above [`VERTICAL_SLOPE_THRESHOLD`]) are
/// returned as [`Line::Vertical`] through `p1`.
#[inline]
pub fn linify(p1: &Point<Real>, p2: &Point<Real>) -> Line {
    Line::through_points(p1, p2)
}

/// The `y` intercept of the line with the given `slope` passing through `point`.
///
/// Returns `None` if there is no slope, or if it is not a finite number.
#[inline]
pub fn intercept_calc(slope: Option<Real>, point: &Point<Real>) -> Option<Real> {
    slope
        .filter(|slope| slope.is_finite())
        .map(|slope| point.y - slope * point.x)
}
