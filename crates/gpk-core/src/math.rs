//! Mathematical utilities for covariance kernels
//!
//! Special functions needed by the closed-form kernels that `statrs` does not
//! provide. Gamma and log-Gamma are re-exported from `statrs`.

/// Special functions
pub mod special {
    use std::f64::consts::PI;

    pub use statrs::function::gamma::{gamma, ln_gamma};

    const MAX_ITERATIONS: usize = 10_000;

    /// Below this argument K is summed with Temme's series, above it with
    /// Steed's continued fraction.
    const SERIES_CUTOFF: f64 = 2.0;

    /// Recurrence values above this are folded into the log scale
    const RESCALE_THRESHOLD: f64 = 1e100;

    /// Coefficients `c_k` of `1/Gamma(z) = sum_k c_k z^k`, k = 1..=26
    /// (Abramowitz & Stegun 6.1.34).
    const RECIPROCAL_GAMMA: [f64; 26] = [
        1.0000000000000000,
        0.5772156649015329,
        -0.6558780715202538,
        -0.0420026350340952,
        0.1665386113822915,
        -0.0421977345555443,
        -0.0096219715278770,
        0.0072189432466630,
        -0.0011651675918591,
        -0.0002152416741149,
        0.0001280502823882,
        -0.0000201348547807,
        -0.0000012504934821,
        0.0000011330272320,
        -0.0000002056338417,
        0.0000000061160950,
        0.0000000050020075,
        -0.0000000011812746,
        0.0000000001043427,
        0.0000000000077823,
        -0.0000000000036968,
        0.0000000000005100,
        -0.0000000000000206,
        -0.0000000000000054,
        0.0000000000000014,
        0.0000000000000001,
    ];

    /// Temme's auxiliary Gamma terms for `|mu| <= 1/2`.
    ///
    /// Returns `(gam1, gam2, 1/Gamma(1+mu), 1/Gamma(1-mu))` where
    /// `gam1 = (1/Gamma(1-mu) - 1/Gamma(1+mu)) / (2 mu)` and
    /// `gam2 = (1/Gamma(1-mu) + 1/Gamma(1+mu)) / 2`, both evaluated by series so
    /// `gam1` stays accurate as `mu -> 0`.
    fn temme_gammas(mu: f64) -> (f64, f64, f64, f64) {
        let mu2 = mu * mu;
        let mut odd = 0.0;
        let mut even = 0.0;
        for (k, &c) in RECIPROCAL_GAMMA.iter().enumerate().rev() {
            // index k holds c_{k+1}: odd indices are the even-order coefficients
            if k % 2 == 1 {
                odd = odd * mu2 + c;
            } else {
                even = even * mu2 + c;
            }
        }
        let gam1 = -odd;
        let gam2 = even;
        (gam1, gam2, gam2 - mu * gam1, gam2 + mu * gam1)
    }

    /// `(K_mu(x), K_{mu+1}(x))` for `|mu| <= 1/2`, `0 < x < 2`
    fn temme_series(mu: f64, x: f64) -> (f64, f64) {
        let mu2 = mu * mu;
        let half_x = 0.5 * x;
        let pimu = PI * mu;
        let fact = if pimu.abs() < f64::EPSILON {
            1.0
        } else {
            pimu / pimu.sin()
        };
        let d = -half_x.ln();
        let e = mu * d;
        let fact2 = if e.abs() < f64::EPSILON { 1.0 } else { e.sinh() / e };
        let (gam1, gam2, gampl, gammi) = temme_gammas(mu);

        let mut ff = fact * (gam1 * e.cosh() + gam2 * fact2 * d);
        let mut sum = ff;
        let e = e.exp();
        let mut p = 0.5 * e / gampl;
        let mut q = 0.5 / (e * gammi);
        let mut c = 1.0;
        let quarter_x2 = half_x * half_x;
        let mut sum1 = p;

        for i in 1..=MAX_ITERATIONS {
            let fi = i as f64;
            ff = (fi * ff + p + q) / (fi * fi - mu2);
            c *= quarter_x2 / fi;
            p /= fi - mu;
            q /= fi + mu;
            let del = c * ff;
            sum += del;
            sum1 += c * (p - fi * ff);
            if del.abs() < sum.abs() * f64::EPSILON {
                break;
            }
        }

        (sum, sum1 * 2.0 / x)
    }

    /// `(e^x K_mu(x), e^x K_{mu+1}(x))` for `|mu| <= 1/2`, `x >= 2`
    fn steed_continued_fraction(mu: f64, x: f64) -> (f64, f64) {
        let a1 = 0.25 - mu * mu;
        let mut b = 2.0 * (1.0 + x);
        let mut d = 1.0 / b;
        let mut delh = d;
        let mut h = d;
        let mut q1 = 0.0;
        let mut q2 = 1.0;
        let mut q = a1;
        let mut c = a1;
        let mut a = -a1;
        let mut s = 1.0 + q * delh;

        for i in 2..=MAX_ITERATIONS {
            let fi = i as f64;
            a -= 2.0 * (fi - 1.0);
            c = -a * c / fi;
            let q_next = (q1 - b * q2) / a;
            q1 = q2;
            q2 = q_next;
            q += c * q_next;
            b += 2.0;
            d = 1.0 / (b + a * d);
            delh = (b * d - 1.0) * delh;
            h += delh;
            let dels = q * delh;
            s += dels;
            if (dels / s).abs() < f64::EPSILON {
                break;
            }
        }

        let k_mu = (PI / (2.0 * x)).sqrt() / s;
        let k_mu1 = k_mu * (mu + x + 0.5 - a1 * h) / x;
        (k_mu, k_mu1)
    }

    /// `K_nu(x) = k * exp(ln_scale)` as `(k, ln_scale)`, for `nu >= 0`, `x > 0`.
    ///
    /// Keeps the mantissa in range for orders and arguments where `K_nu`
    /// itself over- or underflows.
    fn scaled_bessel_k(nu: f64, x: f64) -> (f64, f64) {
        let steps = (nu + 0.5).floor() as usize;
        let mu = nu - steps as f64;

        let (mut k_mu, mut k_mu1, mut ln_scale) = if x < SERIES_CUTOFF {
            let (k, k1) = temme_series(mu, x);
            (k, k1, 0.0)
        } else {
            let (k, k1) = steed_continued_fraction(mu, x);
            (k, k1, -x)
        };

        // K_{mu+1} = K_{mu-1} + (2 mu / x) K_mu, stepped upward to nu
        for i in 1..=steps {
            let next = (mu + i as f64) * (2.0 / x) * k_mu1 + k_mu;
            k_mu = k_mu1;
            k_mu1 = next;
            if k_mu1 > RESCALE_THRESHOLD && k_mu1.is_finite() {
                ln_scale += k_mu1.ln();
                k_mu /= k_mu1;
                k_mu1 = 1.0;
            }
        }

        (k_mu, ln_scale)
    }

    /// Modified Bessel function of the second kind `K_nu(x)`.
    ///
    /// Defined for real order `nu` (`K_{-nu} = K_nu`) and `x > 0`. Returns
    /// `+inf` at `x == 0` and NaN for negative or NaN arguments. The result
    /// underflows to zero for large `x` and overflows to `+inf` for small `x`
    /// combined with large `nu`; [`ln_bessel_k`] covers both ranges.
    pub fn bessel_k(nu: f64, x: f64) -> f64 {
        if x.is_nan() || nu.is_nan() || x < 0.0 {
            return f64::NAN;
        }
        if x == 0.0 {
            return f64::INFINITY;
        }

        let (k, ln_scale) = scaled_bessel_k(nu.abs(), x);
        let scale = ln_scale.exp();
        if scale.is_normal() {
            k * scale
        } else {
            (k.ln() + ln_scale).exp()
        }
    }

    /// Natural logarithm of `K_nu(x)`, finite wherever `K_nu(x)` is
    /// representable on a log scale.
    ///
    /// Same domain conventions as [`bessel_k`]: `+inf` at `x == 0`, NaN for
    /// negative or NaN arguments. Only an argument so small that the starting
    /// terms of the recurrence overflow (`x` below about `1e-200` with
    /// `nu >= 1/2`) gives `+inf` for `x > 0`.
    pub fn ln_bessel_k(nu: f64, x: f64) -> f64 {
        if x.is_nan() || nu.is_nan() || x < 0.0 {
            return f64::NAN;
        }
        if x == 0.0 {
            return f64::INFINITY;
        }

        let (k, ln_scale) = scaled_bessel_k(nu.abs(), x);
        k.ln() + ln_scale
    }

}
