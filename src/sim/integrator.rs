use nalgebra::SVector;

use crate::dynamics::Dynamics;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta, fixed step
// ---------------------------------------------------------------------------

/// Advance `state` from `t` to `t + h`. The caller guarantees `h > 0`.
pub fn rk4_step<D, const N: usize>(
    dynamics: &D,
    t: f64,
    state: &SVector<f64, N>,
    h: f64,
) -> SVector<f64, N>
where
    D: Dynamics<N> + ?Sized,
{
    let half = h * 0.5;
    let k1 = dynamics.derivatives(t, state);
    let k2 = dynamics.derivatives(t + half, &(state + k1 * half));
    let k3 = dynamics.derivatives(t + half, &(state + k2 * half));
    let k4 = dynamics.derivatives(t + h, &(state + k3 * h));

    state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Vector1, Vector2};

    use super::*;

    /// dz/dt = -a z, z(t) = z0 exp(-a t)
    struct Decay {
        a: f64,
    }

    impl Dynamics<1> for Decay {
        fn derivatives(&self, _t: f64, state: &Vector1<f64>) -> Vector1<f64> {
            state * -self.a
        }
    }

    /// dy/dt = t, exact for any polynomial of degree <= 4 in t
    struct Ramp;

    impl Dynamics<1> for Ramp {
        fn derivatives(&self, t: f64, _state: &Vector1<f64>) -> Vector1<f64> {
            Vector1::new(t)
        }
    }

    /// Harmonic oscillator [x, v]
    struct Spring;

    impl Dynamics<2> for Spring {
        fn derivatives(&self, _t: f64, s: &Vector2<f64>) -> Vector2<f64> {
            Vector2::new(s[1], -s[0])
        }
    }

    fn integrate<D: Dynamics<N>, const N: usize>(
        d: &D,
        mut s: SVector<f64, N>,
        h: f64,
        steps: usize,
    ) -> SVector<f64, N> {
        let mut t = 0.0;
        for _ in 0..steps {
            s = rk4_step(d, t, &s, h);
            t += h;
        }
        s
    }

    fn decay_error(h: f64) -> f64 {
        let a = 1.5;
        let steps = (2.0 / h).round() as usize;
        let z = integrate(&Decay { a }, Vector1::new(1.0), h, steps);
        (z[0] - (-a * 2.0f64).exp()).abs()
    }

    #[test]
    fn decay_matches_analytic_solution() {
        assert!(decay_error(0.01) < 1e-9);
    }

    #[test]
    fn global_error_is_fourth_order() {
        let coarse = decay_error(0.1);
        let fine = decay_error(0.05);
        let order = (coarse / fine).log2();
        assert!(order > 3.8 && order < 4.2, "observed order {:.3}", order);
    }

    #[test]
    fn single_step_matches_rk4_weights() {
        // One step of dz/dt = -z equals the 4th-order Taylor polynomial of exp(-h).
        let h = 0.2;
        let z = rk4_step(&Decay { a: 1.0 }, 0.0, &Vector1::new(1.0), h);
        let taylor = 1.0 - h + h * h / 2.0 - h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert_relative_eq!(z[0], taylor, max_relative = 1e-14);
    }

    #[test]
    fn time_argument_reaches_stages() {
        let y = integrate(&Ramp, Vector1::new(0.0), 0.25, 8);
        assert_relative_eq!(y[0], 2.0, max_relative = 1e-12);
    }

    #[test]
    fn oscillator_energy_nearly_conserved() {
        let s = integrate(&Spring, Vector2::new(1.0, 0.0), 0.01, 628);
        let energy = s.norm_squared();
        assert!((energy - 1.0).abs() < 1e-8, "energy drift {}", energy - 1.0);
    }

    #[test]
    fn dimension_is_preserved() {
        let s = rk4_step(&Spring, 0.0, &Vector2::new(0.5, 0.5), 0.1);
        assert_eq!(s.len(), 2);
    }
}
