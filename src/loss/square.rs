pub struct SquareLoss;

impl SquareLoss {
    /// Scalar squared error for a single output: ½(predicted - expected)²
    pub fn loss(predicted: f64, expected: f64) -> f64 {
        0.5 * (predicted - expected).powi(2)
    }

    /// Gradient w.r.t. the output: predicted - expected
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        predicted - expected
    }
}
