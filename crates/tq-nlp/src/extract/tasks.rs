use crate::lexicon::{TASKS, VERB_PATTERNS, task_price};

/// A priced unit of work found in the request.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedTask {
    pub name: &'static str,
    pub price: f64,
}

/// Literal task phrases first; alternate phrasings only when none matched.
pub fn detect_tasks(text: &str) -> Vec<DetectedTask> {
    let lowered = text.to_lowercase();

    let direct: Vec<&'static str> = TASKS
        .iter()
        .filter(|t| lowered.contains(t.name))
        .map(|t| t.name)
        .collect();

    let names = if direct.is_empty() {
        VERB_PATTERNS
            .iter()
            .filter(|p| p.phrases.iter().any(|phrase| lowered.contains(phrase)))
            .map(|p| p.task)
            .collect()
    } else {
        direct
    };

    names
        .into_iter()
        .map(|name| DetectedTask {
            name,
            price: task_price(name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<&'static str> {
        detect_tasks(text).into_iter().map(|t| t.name).collect()
    }

    #[test]
    fn direct_phrases_in_table_order() {
        assert_eq!(
            names("implement model then debug code"),
            vec!["debug code", "implement model"]
        );
    }

    #[test]
    fn verb_patterns_when_no_direct_match() {
        assert_eq!(names("please debug my script"), vec!["debug code"]);
        assert_eq!(names("deploy the service"), vec!["deploy to cloud"]);
    }

    #[test]
    fn verb_patterns_skipped_after_direct_match() {
        // "training" alone would map to train model, but a direct phrase exists.
        assert_eq!(
            names("code review of my training loop"),
            vec!["code review"]
        );
    }

    #[test]
    fn prices_come_from_table() {
        let tasks = detect_tasks("debug code");
        let expected = DetectedTask {
            name: "debug code",
            price: 4000.0,
        };
        assert_eq!(tasks, vec![expected]);
    }

    #[test]
    fn nothing_detected() {
        assert!(detect_tasks("hello there").is_empty());
    }
}
