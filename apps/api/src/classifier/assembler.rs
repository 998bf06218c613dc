//! Response assembly: enriches a verdict with catalog data.

use crate::catalog::TopicCatalog;
use crate::classifier::ClassificationVerdict;
use crate::models::classify::ClassifyResponse;

/// Builds the response for a verdict.
///
/// A relevant verdict whose topic is not in the catalog is answered as not relevant.
/// Confidence and summary are copied as-is in both cases.
pub fn assemble(verdict: &ClassificationVerdict, catalog: &TopicCatalog) -> ClassifyResponse {
    let entry = verdict
        .topic_key
        .as_deref()
        .filter(|_| verdict.is_relevant)
        .and_then(|key| catalog.lookup(key));

    match entry {
        Some(entry) => ClassifyResponse {
            is_talent_management: true,
            confidence: verdict.confidence,
            topic: Some(entry.key),
            topic_display_name: Some(entry.display_name),
            links: entry.links.to_vec(),
            summary: verdict.summary.clone(),
            pipeline: None,
        },
        None => ClassifyResponse {
            is_talent_management: false,
            confidence: verdict.confidence,
            topic: None,
            topic_display_name: None,
            links: Vec::new(),
            summary: verdict.summary.clone(),
            pipeline: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::keyword::classify_keywords;

    fn catalog() -> TopicCatalog {
        TopicCatalog::builtin().unwrap()
    }

    fn assert_consistent(response: &ClassifyResponse) {
        let is_tm = response.is_talent_management;
        assert_eq!(is_tm, response.topic.is_some());
        assert_eq!(is_tm, !response.links.is_empty());
        assert_eq!(is_tm, response.topic_display_name.is_some());
    }

    #[test]
    fn test_known_topic_gets_catalog_data() {
        let verdict = ClassificationVerdict::relevant(
            "compensation_benefits",
            0.93,
            "Bonus timing",
            "You're asking about bonuses.",
        );
        let response = assemble(&verdict, &catalog());

        assert!(response.is_talent_management);
        assert_eq!(response.topic, Some("compensation_benefits"));
        assert_eq!(response.topic_display_name, Some("Compensation & Benefits"));
        assert_eq!(response.links.len(), 2);
        assert_eq!(response.confidence, 0.93);
        assert_eq!(response.summary, "You're asking about bonuses.");
        assert_consistent(&response);
    }

    #[test]
    fn test_unknown_topic_is_not_relevant() {
        let verdict =
            ClassificationVerdict::relevant("payroll_outsourcing", 0.7, "Payroll", "Payroll.");
        let response = assemble(&verdict, &catalog());

        assert!(!response.is_talent_management);
        assert!(response.topic.is_none());
        assert!(response.topic_display_name.is_none());
        assert!(response.links.is_empty());
        assert_eq!(response.confidence, 0.7);
        assert_eq!(response.summary, "Payroll.");
    }

    #[test]
    fn test_not_relevant_verdict() {
        let verdict = ClassificationVerdict::fallback();
        let response = assemble(&verdict, &catalog());
        assert!(!response.is_talent_management);
        assert_eq!(response.confidence, 0.0);
        assert_consistent(&response);
    }

    #[test]
    fn test_response_fields_are_consistent_for_keyword_verdicts() {
        let catalog = catalog();
        let queries = [
            "",
            "   ",
            "How do I submit my annual performance review?",
            "What is the weather today?",
            "reset my password for performance review",
            "new hire profile setup",
            "Where is the org chart?",
            "merit increase schedule",
            "candidate interview feedback",
            "what's for lunch",
        ];

        for query in queries {
            let response = assemble(&classify_keywords(query, &catalog), &catalog);
            assert_consistent(&response);
        }
    }

    #[test]
    fn test_performance_query_end_to_end() {
        let catalog = catalog();
        let response = assemble(
            &classify_keywords("How do I submit my annual performance review?", &catalog),
            &catalog,
        );
        assert_eq!(response.topic, Some("performance_management"));
        assert!(response
            .links
            .iter()
            .any(|l| l.url.contains("PERFORMANCE_GOALS")));
    }

    #[test]
    fn test_weather_query_end_to_end() {
        let catalog = catalog();
        let response = assemble(&classify_keywords("What is the weather today?", &catalog), &catalog);
        assert!(!response.is_talent_management);
        assert!(response.topic.is_none());
        assert!(response.links.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let catalog = catalog();
        let response = assemble(&classify_keywords("What is the weather today?", &catalog), &catalog);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["topic"], serde_json::Value::Null);
        assert_eq!(value["topic_display_name"], serde_json::Value::Null);
        assert_eq!(value["links"], serde_json::json!([]));
        assert!(value.get("pipeline").is_none());
    }
}
