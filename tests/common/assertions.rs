//! Custom test assertions

use convocost::CalculationResult;

/// Assert two floats are approximately equal
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        assert_approx_eq!($left, $right, 1e-6_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let left_val: f64 = $left as f64;
        let right_val: f64 = $right as f64;
        let diff = (left_val - right_val).abs();
        assert!(
            diff < $epsilon,
            "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` (epsilon: `{:?}`)",
            left_val,
            right_val,
            diff,
            $epsilon
        );
    };
}

/// Assert the present cost lines sum to the total, within relative error
pub fn assert_components_sum_to_total(result: &CalculationResult) {
    let total = result.costs.total_cost;
    let sum = result.costs.component_sum();
    if total == 0.0 {
        assert_eq!(sum, 0.0, "zero total with non-zero components");
        return;
    }
    let rel = (total - sum).abs() / total;
    assert!(
        rel < 1e-9,
        "component sum {} does not match total {} (relative error {})",
        sum,
        total,
        rel
    );
}

/// Assert every present value in the result is finite and non-negative
pub fn assert_result_is_sane(result: &CalculationResult) {
    let costs = [
        Some(result.costs.total_cost),
        result.costs.cached_input_cost,
        result.costs.non_cached_input_cost,
        result.costs.output_cost,
        result.costs.stt_cost,
        result.costs.tts_cost,
        result.costs.audio_input_cost,
        result.costs.audio_output_cost,
        result.costs.text_output_cost,
    ];
    for value in costs.iter().flatten() {
        assert!(value.is_finite(), "non-finite cost line: {}", value);
        assert!(*value >= 0.0, "negative cost line: {}", value);
    }

    let usage = [
        result.usage.input_tokens,
        result.usage.cached_input_tokens,
        result.usage.output_tokens,
        result.usage.audio_input_tokens,
        result.usage.audio_output_tokens,
    ];
    for value in usage.iter().flatten() {
        assert!(value.is_finite(), "non-finite usage line: {}", value);
        assert!(*value >= 0.0, "negative usage line: {}", value);
    }
}
