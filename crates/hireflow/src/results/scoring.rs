use super::aggregate::CandidateGroup;
use super::domain::FocusAreaScore;

/// Score one aggregated group against its job's canonical focus-area set.
///
/// Strict-subset scoring: every canonical title produces exactly one area
/// score, in canonical order; a title with no responses scores zero and keeps
/// its place in the denominator. Responses under titles outside the canonical
/// set contribute nothing. Ratings are clamped into [0, 100] before use, and
/// zero ratings count as the value 0.
pub(crate) fn score_group(group: &CandidateGroup, canonical: &[String]) -> (Vec<FocusAreaScore>, u8) {
    let mut area_scores = Vec::with_capacity(canonical.len());

    for title in canonical {
        let responses = group
            .responses_by_focus_area
            .get(title)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let score = if responses.is_empty() {
            0.0
        } else {
            let sum: f64 = responses
                .iter()
                .map(|response| f64::from(response.clamped_rating()))
                .sum();
            sum / responses.len() as f64
        };

        area_scores.push(FocusAreaScore {
            focus_area: title.clone(),
            score: score as f32,
            response_count: responses.len(),
        });
    }

    let overall = overall_rating(&area_scores);
    (area_scores, overall)
}

/// Mean of the per-area scores, rounded half-up into [0, 100]. An empty
/// canonical set yields 0.
fn overall_rating(area_scores: &[FocusAreaScore]) -> u8 {
    if area_scores.is_empty() {
        return 0;
    }

    let sum: f64 = area_scores.iter().map(|area| f64::from(area.score)).sum();
    let mean = sum / area_scores.len() as f64;

    // Scores are non-negative, so round() (half away from zero) is half-up.
    mean.round().clamp(0.0, 100.0) as u8
}
