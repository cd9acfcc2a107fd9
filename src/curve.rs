use crate::{exerr, ExErrorKind, ExResult, PostfixEx};

/// Default number of points that are computed when `t` sweeps once from one bound
/// to the other, give or take a few due to floating point imprecision.
pub const DEFAULT_N_POINTS: u32 = 1000;

/// Everything needed to create a [`ParametricCurve`](ParametricCurve).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSettings {
    pub x: String,
    pub y: String,
    pub t_lower: f64,
    pub t_upper: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_n_points"))]
    pub n_points: u32,
}

#[cfg(feature = "serde")]
fn default_n_points() -> u32 {
    DEFAULT_N_POINTS
}

impl Default for CurveSettings {
    fn default() -> Self {
        CurveSettings {
            x: "cos(t)".to_string(),
            y: "sin(t)".to_string(),
            t_lower: 0.0,
            t_upper: 2.0 * std::f64::consts::PI,
            n_points: DEFAULT_N_POINTS,
        }
    }
}

/// A curve `(x(t), y(t))` that is traced back and forth. Each call of
/// [`update`](ParametricCurve::update) moves `t` by one increment towards the current
/// bound, and the direction is reversed once a bound has been reached. The
/// expressions are parsed once and their postfix sequences are evaluated on each update.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use paramex::ParametricCurve;
/// let mut curve = ParametricCurve::new("cos(t)", "sin(t)", 0.0, 1.0)?;
/// curve.update()?;
/// let (x, y) = curve.point();
/// assert!((x * x + y * y - 1.0).abs() < 1e-12);
/// assert!((curve.t() - 0.001).abs() < 1e-12);
/// #
/// #     Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ParametricCurve {
    x_expr: PostfixEx,
    y_expr: PostfixEx,
    x: f64,
    y: f64,
    t: f64,
    t_lower: f64,
    t_upper: f64,
    t_increment: f64,
    // used to compare t with the bounds
    epsilon: f64,
    is_t_increasing: bool,
    will_change_direction: bool,
    // t is at a bound and the curve has been traced completely in one direction
    is_changing_direction: bool,
}

impl ParametricCurve {
    /// Creates a curve with [`DEFAULT_N_POINTS`](DEFAULT_N_POINTS) points per sweep
    /// that starts at `t_lower` with increasing `t`.
    ///
    /// # Errors
    ///
    /// * one of the expressions cannot be parsed or evaluated at `t_lower`,
    /// * a bound is not finite or `t_lower > t_upper`.
    ///
    pub fn new(x: &str, y: &str, t_lower: f64, t_upper: f64) -> ExResult<Self> {
        Self::with_n_points(x, y, t_lower, t_upper, DEFAULT_N_POINTS)
    }

    pub fn from_settings(settings: &CurveSettings) -> ExResult<Self> {
        Self::with_n_points(
            &settings.x,
            &settings.y,
            settings.t_lower,
            settings.t_upper,
            settings.n_points,
        )
    }

    pub fn with_n_points(
        x: &str,
        y: &str,
        t_lower: f64,
        t_upper: f64,
        n_points: u32,
    ) -> ExResult<Self> {
        if !t_lower.is_finite() || !t_upper.is_finite() || t_lower > t_upper || n_points == 0 {
            return Err(exerr!(
                ExErrorKind::InvalidBounds,
                "invalid range [{}, {}] with {} points",
                t_lower,
                t_upper,
                n_points
            ));
        }
        let x_expr = PostfixEx::parse(x)?;
        let y_expr = PostfixEx::parse(y)?;
        let t_increment = (t_upper - t_lower) / n_points as f64;
        log::debug!(
            "curve ({}, {}) for t in [{}, {}], increment {}",
            x_expr,
            y_expr,
            t_lower,
            t_upper,
            t_increment
        );
        Ok(ParametricCurve {
            x: x_expr.eval(t_lower)?,
            y: y_expr.eval(t_lower)?,
            x_expr,
            y_expr,
            t: t_lower,
            t_lower,
            t_upper,
            t_increment,
            epsilon: t_increment / 2.0,
            is_t_increasing: true,
            will_change_direction: false,
            is_changing_direction: false,
        })
    }

    /// Advances `t` by one tick and recomputes the coordinates. `t` never leaves
    /// `[t_lower, t_upper]`; if it would reach a bound on this tick it is set to the
    /// bound exactly.
    ///
    /// # Errors
    ///
    /// See [`eval_postfix`](crate::eval_postfix).
    ///
    pub fn update(&mut self) -> ExResult<()> {
        if self.will_change_direction {
            self.t = if self.is_t_increasing {
                self.t_upper
            } else {
                self.t_lower
            };
            self.is_t_increasing = !self.is_t_increasing;
            self.is_changing_direction = true;
        } else {
            if self.is_t_increasing {
                self.t += self.t_increment;
            } else {
                self.t -= self.t_increment;
            }
            self.is_changing_direction = false;
        }
        self.update_will_change_direction();

        self.x = self.x_expr.eval(self.t)?;
        self.y = self.y_expr.eval(self.t)?;
        Ok(())
    }

    fn update_will_change_direction(&mut self) {
        if self.is_changing_direction {
            self.will_change_direction = false;
        } else if self.is_t_increasing {
            if self.t + self.t_increment >= self.t_upper - self.epsilon {
                self.will_change_direction = true;
            }
        } else if self.t - self.t_increment <= self.t_lower + self.epsilon {
            self.will_change_direction = true;
        }
    }

    pub fn t(&self) -> f64 {
        self.t
    }
    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }
    pub fn point(&self) -> (f64, f64) {
        (self.x, self.y)
    }
    pub fn t_lower(&self) -> f64 {
        self.t_lower
    }
    pub fn t_upper(&self) -> f64 {
        self.t_upper
    }
    pub fn x_expr(&self) -> &PostfixEx {
        &self.x_expr
    }
    pub fn y_expr(&self) -> &PostfixEx {
        &self.y_expr
    }
    pub fn is_t_increasing(&self) -> bool {
        self.is_t_increasing
    }
    /// Whether `t` will be at a bound after the next tick.
    pub fn will_change_direction(&self) -> bool {
        self.will_change_direction
    }
    /// Whether `t` is at a bound and the direction has just been reversed.
    pub fn is_changing_direction(&self) -> bool {
        self.is_changing_direction
    }
}
