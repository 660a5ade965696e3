//! Derivative-free scalar minimization
//!
//! One-dimensional Nelder-Mead: a two-point simplex updated by reflection,
//! expansion and contraction. No derivatives, no bracketing requirement,
//! which suits the squared-residual objectives produced by inverting
//! nonlinear isotherm models.
//!
//! The iteration count is capped; exhausting the cap is a recoverable
//! [`SorbError::Calculation`], never a panic or a hang.

use crate::error::SorbError;

/// Options controlling the minimizer loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimizeOptions {
    /// Hard cap on iterations before declaring non-convergence
    pub max_iters: usize,
    /// Convergence tolerance on both simplex width and objective spread
    pub tolerance: f64,
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            max_iters: 500,
            tolerance: 1e-10,
        }
    }
}

/// Minimize `f` near `guess` with a derivative-free simplex search
///
/// Returns the abscissa of the located minimum. Fails with
/// [`SorbError::Calculation`] carrying the loop diagnostic when the
/// iteration cap is reached before the simplex collapses, or when the
/// objective returns a non-finite value.
pub fn minimize_scalar<F>(
    f: F,
    guess: f64,
    options: &MinimizeOptions,
) -> Result<f64, SorbError>
where
    F: Fn(f64) -> f64,
{
    // Nelder-Mead coefficients (standard values)
    const REFLECTION: f64 = 1.0;
    const EXPANSION: f64 = 2.0;
    const CONTRACTION: f64 = 0.5;

    // Initial simplex: the guess and a small displacement from it
    let step = if guess.abs() > 1e-8 {
        0.05 * guess.abs()
    } else {
        0.00025
    };

    let mut best = guess;
    let mut worst = guess + step;
    let mut f_best = f(best);
    let mut f_worst = f(worst);
    if !f_best.is_finite() || !f_worst.is_finite() {
        return Err(SorbError::Calculation(format!(
            "objective is not finite near initial guess {}",
            guess
        )));
    }
    if f_best > f_worst {
        std::mem::swap(&mut best, &mut worst);
        std::mem::swap(&mut f_best, &mut f_worst);
    }

    for iteration in 0..options.max_iters {
        let width = (worst - best).abs();
        let spread = (f_worst - f_best).abs();
        if width < options.tolerance && spread < options.tolerance {
            return Ok(best);
        }

        // Reflect the worst point through the best
        let reflected = best + REFLECTION * (best - worst);
        let f_reflected = f(reflected);

        if f_reflected < f_best {
            // Reflection improved on the best point: try expanding further
            let expanded = best + EXPANSION * (best - worst);
            let f_expanded = f(expanded);
            if f_expanded < f_reflected {
                worst = best;
                f_worst = f_best;
                best = expanded;
                f_best = f_expanded;
            } else {
                worst = best;
                f_worst = f_best;
                best = reflected;
                f_best = f_reflected;
            }
        } else if f_reflected < f_worst {
            // Reflection beats only the worst point: accept it
            worst = reflected;
            f_worst = f_reflected;
        } else {
            // Reflection failed: contract toward the best point
            let contracted = best + CONTRACTION * (worst - best);
            let f_contracted = f(contracted);
            if f_contracted < f_worst {
                worst = contracted;
                f_worst = f_contracted;
            } else {
                // Shrink onto the best point
                worst = best + CONTRACTION * (worst - best);
                f_worst = f(worst);
            }
        }

        if !f_worst.is_finite() {
            return Err(SorbError::Calculation(format!(
                "objective became non-finite at iteration {} (x = {})",
                iteration, worst
            )));
        }
    }

    Err(SorbError::Calculation(format!(
        "minimizer did not converge within {} iterations (best x = {}, f = {:e}, simplex width = {:e})",
        options.max_iters,
        best,
        f_best,
        (worst - best).abs()
    )))
}
