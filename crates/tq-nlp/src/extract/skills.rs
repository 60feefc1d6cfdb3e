use crate::lexicon::SKILLS;

/// Skills whose keywords occur in the text, in declaration order, each once.
pub fn extract_skills(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    SKILLS
        .iter()
        .filter(|skill| skill.keywords.iter().any(|k| lowered.contains(k)))
        .map(|skill| skill.name)
        .collect()
}
