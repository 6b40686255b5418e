use thiserror::Error;

/// Result alias used across the crate.
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// The integrator produced a NaN or infinite state component.
    #[error("integration produced a non-finite state at step {step} (t = {time:.4} s)")]
    NonFiniteState { step: usize, time: f64 },

    /// A scalar parameter outside the range the model is meant for.
    #[error("parameter `{name}` = {value} is out of range (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: String,
    },

    #[error("failed to parse scenario: {0}")]
    ScenarioParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_the_field() {
        let err = SimError::InvalidParameter {
            name: "rho0",
            value: 500.0,
            expected: "800..=1200".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("`rho0`"));
        assert!(msg.contains("800..=1200"));
    }

    #[test]
    fn non_finite_message_reports_time() {
        let err = SimError::NonFiniteState { step: 3, time: 0.3 };
        assert_eq!(
            err.to_string(),
            "integration produced a non-finite state at step 3 (t = 0.3000 s)"
        );
    }
}
