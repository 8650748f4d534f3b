use serde::{Deserialize, Serialize};
use vigil_common::error::{VigilError, VigilResult};

use crate::config::DetectionConfig;
use crate::risk::{classify, RiskLevel};
use crate::trace::{CompositeTrace, VoteContribution};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVote {
    pub model_name: String,
    pub score: f64,
    pub weight: f64,
}

impl ModelVote {
    pub fn new(model_name: impl Into<String>, score: f64, weight: f64) -> Self {
        Self {
            model_name: model_name.into(),
            score,
            weight,
        }
    }

    pub fn weighted_score(&self) -> f64 {
        self.score * self.weight
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResult {
    pub composite_score: f64,
    pub level: RiskLevel,
    /// Whether the composite reaches the configured alert confidence.
    pub alert: bool,
    pub trace: CompositeTrace,
}

fn validate_vote(vote: &ModelVote) -> VigilResult<()> {
    if !vote.score.is_finite() || !(0.0..=1.0).contains(&vote.score) {
        return Err(VigilError::InvalidInput(format!(
            "score for {} must be within [0, 1], got {}",
            vote.model_name, vote.score
        )));
    }
    if !vote.weight.is_finite() || vote.weight < 0.0 {
        return Err(VigilError::InvalidInput(format!(
            "weight for {} must be a non-negative number, got {}",
            vote.model_name, vote.weight
        )));
    }
    Ok(())
}

/// Sums over a validated, non-empty vote set.
///
/// Weights are divided by the largest weight first, so every term lies in
/// [0, 1] and the sums can neither overflow nor lose precision to subnormal
/// weights.
struct WeightedSums {
    weighted_sum: f64,
    weight_sum: f64,
    scale: f64,
}

fn weighted_sums(votes: &[ModelVote]) -> VigilResult<WeightedSums> {
    let scale = votes.iter().map(|v| v.weight).fold(0.0, f64::max);
    if scale <= 0.0 {
        return Err(VigilError::InvalidInput("zero total weight".to_string()));
    }

    // Canonical summation order keeps the result bit-identical under any
    // permutation of the input.
    let mut pairs: Vec<(f64, f64)> = votes
        .iter()
        .map(|v| (v.score, v.weight / scale))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let (weighted_sum, weight_sum) = pairs
        .iter()
        .fold((0.0, 0.0), |(ws, w), (score, weight)| {
            (ws + score * weight, w + weight)
        });
    if !weighted_sum.is_finite() || !weight_sum.is_finite() {
        return Err(VigilError::InvalidInput("weights overflow".to_string()));
    }

    Ok(WeightedSums {
        weighted_sum,
        weight_sum,
        scale,
    })
}

fn checked_sums(votes: &[ModelVote]) -> VigilResult<WeightedSums> {
    if votes.is_empty() {
        return Err(VigilError::InvalidInput("empty vote set".to_string()));
    }
    for vote in votes {
        validate_vote(vote)?;
    }
    weighted_sums(votes)
}

/// Weighted mean of the vote scores: `sum(score * weight) / sum(weight)`.
///
/// Fails with `InvalidInput` for an empty vote set, a zero total weight, or a
/// vote with an out-of-range score or negative weight.
pub fn composite_score(votes: &[ModelVote]) -> VigilResult<f64> {
    let sums = checked_sums(votes)?;
    Ok((sums.weighted_sum / sums.weight_sum).clamp(0.0, 1.0))
}

/// [`evaluate_with`] under the default detection config.
pub fn evaluate(votes: &[ModelVote]) -> VigilResult<CompositeResult> {
    evaluate_with(votes, &DetectionConfig::default())
}

/// Composite score plus its risk level, alert flag and a per-model breakdown
/// in input order.
pub fn evaluate_with(
    votes: &[ModelVote],
    config: &DetectionConfig,
) -> VigilResult<CompositeResult> {
    let sums = checked_sums(votes)?;
    let composite = (sums.weighted_sum / sums.weight_sum).clamp(0.0, 1.0);

    let contributions = votes
        .iter()
        .map(|v| VoteContribution {
            model_name: v.model_name.clone(),
            score: v.score,
            weight: v.weight,
            weighted_score: v.weighted_score(),
            level: classify(v.score),
            specialized: config.is_specialized(v.weight),
        })
        .collect();

    Ok(CompositeResult {
        composite_score: composite,
        level: classify(composite),
        alert: config.is_alert(composite),
        trace: CompositeTrace {
            votes: contributions,
            weighted_sum: sums.weighted_sum,
            weight_sum: sums.weight_sum,
            weight_scale: sums.scale,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn demo_votes() -> Vec<ModelVote> {
        vec![
            ModelVote::new("OpenAI GPT-4 Classifier", 0.78, 1.0),
            ModelVote::new("Anthropic Claude Detector", 0.82, 1.0),
            ModelVote::new("Specialized Fraud Detector", 0.93, 1.5),
        ]
    }

    #[test]
    fn single_vote_is_its_own_score() {
        let score = composite_score(&[ModelVote::new("a", 1.0, 1.0)]).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn equal_weights_give_plain_mean() {
        let votes = [ModelVote::new("a", 0.5, 1.0), ModelVote::new("b", 1.0, 1.0)];
        let score = composite_score(&votes).unwrap();
        assert_eq!(score, 0.75);
    }

    #[test]
    fn heavier_weight_pulls_the_mean() {
        let score = composite_score(&demo_votes()).unwrap();
        // (0.78 + 0.82 + 0.93 * 1.5) / 3.5
        assert!((score - 2.995 / 3.5).abs() < 1e-12, "score={score}");
        assert_eq!(classify(score), RiskLevel::Critical);
    }

    #[test]
    fn empty_vote_set_is_rejected() {
        let err = composite_score(&[]).unwrap_err();
        assert!(matches!(err, VigilError::InvalidInput(ref m) if m == "empty vote set"));
    }

    #[test]
    fn zero_total_weight_is_rejected() {
        let votes = [ModelVote::new("a", 0.4, 0.0), ModelVote::new("b", 0.9, 0.0)];
        let err = composite_score(&votes).unwrap_err();
        assert!(matches!(err, VigilError::InvalidInput(ref m) if m == "zero total weight"));
    }

    #[test]
    fn zero_weight_vote_is_ignored_when_others_carry_weight() {
        let votes = [ModelVote::new("a", 0.1, 0.0), ModelVote::new("b", 0.9, 2.0)];
        let score = composite_score(&votes).unwrap();
        assert!((score - 0.9).abs() < 1e-12);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let votes = [ModelVote::new("a", 0.4, -1.0), ModelVote::new("b", 0.9, 2.0)];
        assert!(matches!(
            composite_score(&votes),
            Err(VigilError::InvalidInput(_))
        ));
    }

    #[test]
    fn out_of_range_or_nan_score_is_rejected() {
        for bad in [1.5, -0.1, f64::NAN, f64::INFINITY] {
            let votes = [ModelVote::new("a", bad, 1.0)];
            assert!(
                matches!(composite_score(&votes), Err(VigilError::InvalidInput(_))),
                "score {bad} should be rejected"
            );
        }
    }

    #[test]
    fn result_is_invariant_under_permutation() {
        let votes = vec![
            ModelVote::new("a", 0.1, 0.3),
            ModelVote::new("b", 0.7, 1.7),
            ModelVote::new("c", 0.33, 0.9),
            ModelVote::new("d", 0.91, 2.2),
        ];
        let expected = composite_score(&votes).unwrap();

        let mut rotated = votes.clone();
        for _ in 0..votes.len() {
            rotated.rotate_left(1);
            assert_eq!(composite_score(&rotated).unwrap(), expected);
        }
        let mut reversed = votes;
        reversed.reverse();
        assert_eq!(composite_score(&reversed).unwrap(), expected);
    }

    #[test]
    fn evaluate_traces_every_vote_in_input_order() {
        let result = evaluate(&demo_votes()).unwrap();
        let names: Vec<&str> = result
            .trace
            .votes
            .iter()
            .map(|v| v.model_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "OpenAI GPT-4 Classifier",
                "Anthropic Claude Detector",
                "Specialized Fraud Detector"
            ]
        );
        let trace = &result.trace;
        assert_eq!(trace.weight_scale, 1.5);
        assert!((trace.weight_sum * trace.weight_scale - 3.5).abs() < 1e-12);
        assert!((trace.weighted_sum * trace.weight_scale - 2.995).abs() < 1e-12);
        assert_eq!(result.level, RiskLevel::Critical);
        assert!(result.alert);

        let specialized = &result.trace.votes[2];
        assert!(specialized.specialized);
        assert!((specialized.weighted_score - 1.395).abs() < 1e-12);
        assert_eq!(specialized.level, RiskLevel::Critical);
        assert!(!result.trace.votes[0].specialized);
        assert_eq!(result.trace.votes[0].level, RiskLevel::High);
    }

    #[test]
    fn huge_weights_keep_an_exact_mean() {
        let votes = [ModelVote::new("a", 1.0, 1e308), ModelVote::new("b", 1.0, 1e308)];
        assert_eq!(composite_score(&votes).unwrap(), 1.0);

        let votes = [ModelVote::new("a", 0.5, 1e308), ModelVote::new("b", 0.5, 1e308)];
        assert_eq!(composite_score(&votes).unwrap(), 0.5);

        let votes = [
            ModelVote::new("a", 0.2, f64::MAX),
            ModelVote::new("b", 0.8, f64::MAX),
        ];
        let score = composite_score(&votes).unwrap();
        assert!((score - 0.5).abs() < 1e-12, "score={score}");
    }

    #[test]
    fn subnormal_weights_keep_an_exact_mean() {
        let votes = [
            ModelVote::new("a", 0.9, 1e-320),
            ModelVote::new("b", 0.9, 1e-320),
        ];
        assert_eq!(composite_score(&votes).unwrap(), 0.9);
    }

    #[test]
    fn evaluate_never_yields_nan_for_valid_votes() {
        let votes = [ModelVote::new("a", 0.3, 1e308), ModelVote::new("b", 0.7, 5e307)];
        let result = evaluate(&votes).unwrap();
        assert!(result.composite_score.is_finite());
        assert!(result.trace.weighted_sum.is_finite());
        assert!(result.trace.weight_sum.is_finite());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["compositeScore"].is_f64());
    }

    #[test]
    fn config_drives_specialization_and_alert() {
        let config = DetectionConfig {
            specialized_weight: 2.0,
            min_alert_confidence: 0.9,
        };
        let result = evaluate_with(&demo_votes(), &config).unwrap();
        assert!(result.trace.votes.iter().all(|v| !v.specialized));
        assert!(!result.alert);
    }

    #[test]
    fn evaluate_propagates_errors() {
        assert!(evaluate(&[]).is_err());
    }

    #[test]
    fn model_vote_uses_camel_case_json() {
        let vote: ModelVote =
            serde_json::from_str(r#"{"modelName":"m","score":0.5,"weight":2.0}"#).unwrap();
        assert_eq!(vote, ModelVote::new("m", 0.5, 2.0));
    }

    fn vote_strategy() -> impl Strategy<Value = ModelVote> {
        (0.0..=1.0f64, prop_oneof![0.0..=10.0f64, 1e300..=f64::MAX])
            .prop_map(|(score, weight)| ModelVote::new("m", score, weight))
    }

    proptest! {
        #[test]
        fn composite_is_bit_identical_under_shuffle(
            (votes, shuffled) in prop::collection::vec(vote_strategy(), 1..12)
                .prop_flat_map(|votes| {
                    let shuffled = Just(votes.clone()).prop_shuffle();
                    (Just(votes), shuffled)
                }),
        ) {
            let expected = composite_score(&votes);
            let actual = composite_score(&shuffled);
            match (expected, actual) {
                (Ok(a), Ok(b)) => {
                    prop_assert_eq!(a.to_bits(), b.to_bits());
                    prop_assert!((0.0..=1.0).contains(&a));
                }
                (Err(_), Err(_)) => {}
                (a, b) => prop_assert!(false, "diverged: {:?} vs {:?}", a, b),
            }
        }

        #[test]
        fn composite_lies_between_min_and_max_score(
            votes in prop::collection::vec(vote_strategy(), 1..12),
        ) {
            prop_assume!(votes.iter().any(|v| v.weight > 0.0));
            let score = composite_score(&votes).unwrap();
            let min = votes.iter().map(|v| v.score).fold(f64::INFINITY, f64::min);
            let max = votes.iter().map(|v| v.score).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(
                score >= min - 1e-12 && score <= max + 1e-12,
                "{} not in [{}, {}]",
                score,
                min,
                max
            );
        }
    }
}
