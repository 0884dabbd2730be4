//! Heuristic match scoring.
//!
//! Placeholder for a trained model: a base score, a bonus per skill that
//! overlaps the user profile, and random jitter. Only the clamped range and
//! the bias toward skill overlap are stable; exact values are not.

use rand::Rng;

use crate::models::{MatchScore, ScoringConfig};

/// Scores raw provider skill lists against a user skill profile.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    base_score: i64,
    skill_bonus: i64,
    jitter: u32,
    user_skills: Vec<String>,
}

impl MatchScorer {
    /// Create a scorer from configuration.
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            base_score: config.base_score,
            skill_bonus: config.skill_bonus,
            jitter: config.jitter,
            user_skills: config
                .user_skills
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Number of listing skills that overlap the user profile.
    ///
    /// A skill overlaps when either side contains the other, ignoring case.
    pub fn skill_matches(&self, skills: &[String]) -> usize {
        skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|skill| {
                !skill.is_empty()
                    && self
                        .user_skills
                        .iter()
                        .any(|user| user.contains(skill.as_str()) || skill.contains(user.as_str()))
            })
            .count()
    }

    /// Score using the thread-local random source.
    pub fn score(&self, skills: &[String]) -> MatchScore {
        self.score_with(skills, &mut rand::thread_rng())
    }

    /// Score using the given random source.
    pub fn score_with<R: Rng>(&self, skills: &[String], rng: &mut R) -> MatchScore {
        let overlap = self.skill_matches(skills) as i64;
        let raw = self
            .base_score
            .saturating_add(overlap.saturating_mul(self.skill_bonus));
        let mut score = raw as f64;
        if self.jitter > 0 {
            let spread = self.jitter as f64;
            score += rng.gen_range(-spread..=spread);
        }
        MatchScore::clamped(score.round() as i64)
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::{MAX_MATCH_SCORE, MIN_MATCH_SCORE};

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn deterministic() -> MatchScorer {
        MatchScorer::new(&ScoringConfig {
            jitter: 0,
            ..ScoringConfig::default()
        })
    }

    #[test]
    fn test_substring_match_either_direction() {
        let scorer = deterministic();
        // "react" inside "React Native", "Node" inside "Node.js"
        assert_eq!(scorer.skill_matches(&skills(&["React Native", "node"])), 2);
        assert_eq!(scorer.skill_matches(&skills(&["Python", "SQL"])), 0);
    }

    #[test]
    fn test_base_plus_bonus_without_jitter() {
        let scorer = deterministic();
        assert_eq!(scorer.score(&[]).value(), 70);
        assert_eq!(scorer.score(&skills(&["React", "Node.js"])).value(), 80);
    }

    #[test]
    fn test_clamped_at_ceiling() {
        let scorer = deterministic();
        let many = skills(&["React", "JavaScript", "TypeScript", "Node.js", "react", "node"]);
        assert_eq!(scorer.score(&many).value(), MAX_MATCH_SCORE);
    }

    #[test]
    fn test_blank_skills_never_match() {
        let scorer = MatchScorer::new(&ScoringConfig {
            jitter: 0,
            user_skills: vec!["".to_string(), " ".to_string(), "React".to_string()],
            ..ScoringConfig::default()
        });
        assert_eq!(scorer.skill_matches(&skills(&["Python", "SQL"])), 0);
        assert_eq!(scorer.skill_matches(&skills(&["", "react"])), 1);
    }

    #[test]
    fn test_extreme_bonus_saturates_to_ceiling() {
        let scorer = MatchScorer::new(&ScoringConfig {
            jitter: 0,
            skill_bonus: i64::MAX,
            ..ScoringConfig::default()
        });
        let score = scorer.score(&skills(&["React", "TypeScript", "Node.js"]));
        assert_eq!(score.value(), MAX_MATCH_SCORE);
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let scorer = MatchScorer::new(&ScoringConfig {
            base_score: 60,
            jitter: 50,
            ..ScoringConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let score = scorer.score_with(&skills(&["Rust"]), &mut rng).value();
            assert!((MIN_MATCH_SCORE..=MAX_MATCH_SCORE).contains(&score));
        }
    }

    #[test]
    fn test_jitter_bounded_around_heuristic() {
        let scorer = MatchScorer::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let score = scorer
                .score_with(&skills(&["React", "Node.js"]), &mut rng)
                .value();
            assert!((70..=90).contains(&score), "score {score} outside 80±10");
        }
    }

    #[test]
    fn test_more_overlap_scores_higher_on_average() {
        let scorer = MatchScorer::default();
        let mut rng = StdRng::seed_from_u64(1);
        let none: u32 = (0..200)
            .map(|_| scorer.score_with(&skills(&["COBOL"]), &mut rng).value() as u32)
            .sum();
        let some: u32 = (0..200)
            .map(|_| {
                scorer
                    .score_with(&skills(&["React", "TypeScript", "Node.js"]), &mut rng)
                    .value() as u32
            })
            .sum();
        assert!(some > none);
    }
}
