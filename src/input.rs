use noisy_float::types::R64;

/// `vertical` drives the motor, `horizontal` steers. Both in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axes {
    vertical: f64,
    horizontal: f64,
}

impl Axes {
    /// Non-finite readings become 0 and everything else is clamped into
    /// `[-1, 1]`.
    pub fn new(vertical: f64, horizontal: f64) -> Self {
        Self {
            vertical: sanitize_axis(vertical),
            horizontal: sanitize_axis(horizontal),
        }
    }

    /// Unsanitized readings, as a faulty input source could produce.
    pub fn raw(vertical: f64, horizontal: f64) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub fn vertical(&self) -> f64 {
        self.vertical
    }

    pub fn horizontal(&self) -> f64 {
        self.horizontal
    }
}

fn sanitize_axis(value: f64) -> f64 {
    match R64::try_new(value) {
        Some(value) => value.raw().clamp(-1.0, 1.0),
        None => {
            log::debug!("discarding non-finite axis reading {value}");
            0.0
        }
    }
}
