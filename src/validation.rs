//! Input validation for process lists.
//!
//! Checks structural integrity of process definitions before any
//! simulation step runs. Detects:
//! - Empty or duplicate IDs
//! - Negative arrival ticks
//! - Non-positive bursts
//! - An empty process list
//! - Horizons (`max(arrival) + sum(burst)`) that overflow the tick type
//!
//! The scheduler assumes its input passed these checks.

use crate::models::{Process, Tick};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// A process ID is empty or whitespace.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative processor time.
    NonPositiveBurst,
    /// `max(arrival) + sum(burst)` does not fit in a [`Tick`].
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list for simulation.
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is non-empty
/// 3. No duplicate IDs
/// 4. Every arrival is `>= 0`
/// 5. Every burst is `> 0`
/// 6. The tick horizon is representable
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        ));
    }

    let mut ids = HashSet::new();
    for (row, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process #{} has an empty ID", row + 1),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.id, p.burst),
            ));
        }
    }

    if errors.is_empty() && horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst exceeds the representable tick range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on simulated ticks: `max(arrival) + sum(burst)`.
///
/// Returns `None` on overflow. An empty list has horizon 0.
pub fn horizon(processes: &[Process]) -> Option<Tick> {
    let max_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(max_arrival, |acc, p| acc.checked_add(p.burst))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::from(("P1", 0, 5)),
            Process::from(("P2", 1, 3)),
            Process::from(("P3", 4, 1)),
        ]
    }

    fn kinds(processes: &[Process]) -> Vec<ValidationErrorKind> {
        validate_processes(processes)
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kinds(&[]), vec![ValidationErrorKind::EmptyInput]);
    }

    #[test]
    fn test_empty_id() {
        let processes = vec![Process::from(("  ", 0, 1))];
        assert_eq!(kinds(&processes), vec![ValidationErrorKind::EmptyId]);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::from(("P1", 0, 1)), Process::from(("P1", 2, 2))];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::from(("P1", -1, 3))];
        assert_eq!(kinds(&processes), vec![ValidationErrorKind::NegativeArrival]);
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::from(("P1", 0, 0)), Process::from(("P2", 0, -4))];
        assert_eq!(
            kinds(&processes),
            vec![
                ValidationErrorKind::NonPositiveBurst,
                ValidationErrorKind::NonPositiveBurst
            ]
        );
    }

    #[test]
    fn test_horizon_overflow() {
        let processes = vec![
            Process::from(("P1", Tick::MAX - 1, 1)),
            Process::from(("P2", 0, 1)),
        ];
        assert_eq!(kinds(&processes), vec![ValidationErrorKind::HorizonOverflow]);
    }

    #[test]
    fn test_horizon() {
        assert_eq!(horizon(&sample_processes()), Some(4 + 5 + 3 + 1));
        assert_eq!(horizon(&[]), Some(0));
    }

    #[test]
    fn test_multiple_errors() {
        // Empty ID + negative arrival + zero burst
        let processes = vec![Process::from(("", -2, 0))];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_error_display() {
        let errors = validate_processes(&[Process::from(("P7", 0, 0))]).unwrap_err();
        assert_eq!(errors[0].to_string(), "Process 'P7' has non-positive burst 0");
    }
}
