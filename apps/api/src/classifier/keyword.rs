//! Keyword classifier: the local backend. Pure substring matching, no network.
//!
//! Algorithm, in strict order:
//! 1. Empty or whitespace-only query → not relevant (1.0)
//! 2. Any non-topic escape phrase → not relevant (0.90)
//! 3. First topic in `MATCH_RULES` with a keyword hit → relevant (0.85)
//! 4. Otherwise → not relevant (0.80)
//!
//! Rule order is the tie-break between topics whose keywords overlap; there is no scoring.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::TopicCatalog;
use crate::classifier::pipeline::PipelineDetails;
use crate::classifier::{
    empty_query_verdict, Classification, ClassificationVerdict, IntentClassifier,
};
use crate::errors::AppError;

const ESCAPE_CONFIDENCE: f64 = 0.90;
const MATCH_CONFIDENCE: f64 = 0.85;
const NO_MATCH_CONFIDENCE: f64 = 0.80;

pub const NOT_TM_SUMMARY: &str = "This doesn't seem to be a Talent Management question. \
    I can help with topics like performance reviews, time off, learning, and more.";

/// IT-support phrases. Checked before topic keywords so that e.g. a password reset that
/// mentions a review is not routed to performance management.
const ESCAPE_PHRASES: &[&str] = &[
    "password",
    "laptop",
    "computer",
    "printer",
    "wifi",
    "weather",
    "email setup",
    "vpn",
    "software install",
];

/// (topic key, keywords), highest priority first.
const MATCH_RULES: &[(&str, &[&str])] = &[
    (
        "employee_onboarding",
        &[
            "onboarding",
            "new hire",
            "new employee",
            "orientation",
            "first day",
            "preboarding",
        ],
    ),
    (
        "succession_planning",
        &[
            "succession",
            "career path",
            "talent pool",
            "successor",
            "next in line",
            "leadership pipeline",
            "high potential",
        ],
    ),
    (
        "time_attendance",
        &[
            "time off",
            "leave request",
            "vacation",
            "attendance",
            "absence",
            "pto",
            "sick leave",
            "timesheet",
        ],
    ),
    (
        "performance_management",
        &[
            "performance",
            "review",
            "goal",
            "feedback",
            "appraisal",
            "evaluation",
        ],
    ),
    (
        "learning_development",
        &[
            "training",
            "course",
            "learn",
            "certification",
            "skill development",
            "curriculum",
        ],
    ),
    (
        "recruitment",
        &[
            "job posting",
            "job opening",
            "candidate",
            "interview",
            "recruiting",
            "requisition",
            "applicant",
        ],
    ),
    (
        "compensation_benefits",
        &[
            "salary",
            "bonus",
            "pay",
            "compensation",
            "benefit",
            "merit increase",
        ],
    ),
    (
        "employee_central",
        &[
            "employee data",
            "org chart",
            "profile",
            "organization",
            "personal information",
            "reporting structure",
        ],
    ),
];

pub struct KeywordClassifier {
    catalog: Arc<TopicCatalog>,
}

impl KeywordClassifier {
    pub fn new(catalog: Arc<TopicCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl IntentClassifier for KeywordClassifier {
    async fn classify(
        &self,
        query: &str,
        include_pipeline: bool,
    ) -> Result<Classification, AppError> {
        let verdict = classify_keywords(query, &self.catalog);
        debug!(
            "Keyword classification: topic={:?} confidence={} ({})",
            verdict.topic_key, verdict.confidence, verdict.reasoning
        );

        // Empty queries never carry diagnostics, regardless of backend
        let pipeline = (include_pipeline && !query.trim().is_empty())
            .then(|| PipelineDetails::local(query));

        Ok(Classification { verdict, pipeline })
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// Runs the matcher against the catalog's display names.
pub fn classify_keywords(query: &str, catalog: &TopicCatalog) -> ClassificationVerdict {
    if let Some(verdict) = empty_query_verdict(query) {
        return verdict;
    }

    let query_lower = query.to_lowercase();

    if let Some(phrase) = ESCAPE_PHRASES.iter().find(|p| query_lower.contains(*p)) {
        return ClassificationVerdict::not_relevant(
            ESCAPE_CONFIDENCE,
            format!("Matched non-topic phrase '{phrase}'"),
            NOT_TM_SUMMARY,
        );
    }

    for (topic, keywords) in MATCH_RULES {
        if let Some(keyword) = keywords.iter().find(|kw| query_lower.contains(*kw)) {
            let display_name = catalog
                .lookup(topic)
                .map(|entry| entry.display_name)
                .unwrap_or(*topic);
            return ClassificationVerdict::relevant(
                *topic,
                MATCH_CONFIDENCE,
                format!("Matched keyword '{keyword}'"),
                format!(
                    "I can help you with {display_name}. \
                     Here are some resources that should answer your question."
                ),
            );
        }
    }

    ClassificationVerdict::not_relevant(
        NO_MATCH_CONFIDENCE,
        "No topic keywords matched",
        NOT_TM_SUMMARY,
    )
}
