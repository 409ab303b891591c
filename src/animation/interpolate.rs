use crate::animation::ease::Ease;
use crate::foundation::error::{BumperError, BumperResult};

/// Behaviour of [`Interpolate::sample`] outside the input domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the linear mapping past the boundary.
    #[default]
    Extend,
    /// Hold the boundary output value.
    Clamp,
}

/// Two-point mapping from an input domain to an output range.
///
/// Construction is infallible so frame evaluation stays total; callers that build one from
/// untrusted numbers should run [`Interpolate::validate`] first.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interpolate {
    /// Input domain `[a, b]`, `a < b`.
    pub input: [f64; 2],
    /// Output range mapped from the domain endpoints.
    pub output: [f64; 2],
    /// Easing applied to the normalized progress.
    #[serde(default)]
    pub ease: Ease,
    /// Extrapolation below `input[0]`.
    #[serde(default)]
    pub left: Extrapolate,
    /// Extrapolation above `input[1]`.
    #[serde(default)]
    pub right: Extrapolate,
}

impl Interpolate {
    /// Linear, unclamped mapping from `input` to `output`.
    pub fn new(input: [f64; 2], output: [f64; 2]) -> Self {
        Self {
            input,
            output,
            ease: Ease::Linear,
            left: Extrapolate::Extend,
            right: Extrapolate::Extend,
        }
    }

    /// Replace the easing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Hold `output[0]` below the domain.
    pub fn clamp_left(mut self) -> Self {
        self.left = Extrapolate::Clamp;
        self
    }

    /// Hold `output[1]` above the domain.
    pub fn clamp_right(mut self) -> Self {
        self.right = Extrapolate::Clamp;
        self
    }

    /// Clamp on both sides.
    pub fn clamp(self) -> Self {
        self.clamp_left().clamp_right()
    }

    /// Check that the domain is finite and strictly increasing and the range is finite.
    pub fn validate(&self) -> BumperResult<()> {
        if !self.input.iter().chain(self.output.iter()).all(|v| v.is_finite()) {
            return Err(BumperError::validation(
                "interpolation input and output must be finite",
            ));
        }
        if self.input[0] >= self.input[1] {
            return Err(BumperError::validation(format!(
                "interpolation input range must be strictly increasing, got [{}, {}]",
                self.input[0], self.input[1]
            )));
        }
        Ok(())
    }

    /// Evaluate the mapping at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        let [a, b] = self.input;
        let [out0, out1] = self.output;

        if x < a {
            match self.left {
                Extrapolate::Clamp => return out0,
                Extrapolate::Extend => {}
            }
        }
        if x > b {
            match self.right {
                Extrapolate::Clamp => return out1,
                Extrapolate::Extend => {}
            }
        }

        let span = b - a;
        if span <= 0.0 {
            return if x < a { out0 } else { out1 };
        }

        let t = (x - a) / span;
        // Extension stays on the straight line; easing is only defined inside the domain.
        let te = if (0.0..=1.0).contains(&t) {
            self.ease.apply(t)
        } else {
            t
        };
        out0 + (out1 - out0) * te
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
