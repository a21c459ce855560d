//! Skill extraction: finds which canonical skill labels a job description mentions.

/// Canonical skill labels eligible for detection, in display order.
/// Mirrors the suggested skills offered during onboarding.
pub const DEFAULT_VOCABULARY: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "TypeScript",
    "SQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "Data Analysis",
    "Project Management",
    "Agile",
    "Scrum",
    "Communication",
    "Leadership",
    "Problem Solving",
    "Excel",
    "Figma",
    "Photoshop",
    "Marketing",
    "SEO",
    "Sales",
];

/// Maximum number of skills attached to a single job card.
pub const DEFAULT_SKILL_CAP: usize = 6;

/// Shown instead of an empty skill list.
pub const PLACEHOLDER_SKILL: &str = "see job details";

/// Returns the vocabulary entries whose lower-cased form occurs in the lower-cased
/// `text`, in vocabulary order, stopping once `cap` entries are collected.
///
/// Entries keep their canonical casing. Vocabulary entries are assumed unique.
pub fn extract_skills<S: AsRef<str>>(text: &str, vocabulary: &[S], cap: usize) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found = Vec::new();

    for skill in vocabulary {
        if found.len() >= cap {
            break;
        }
        let skill: &str = skill.as_ref();
        if text_lower.contains(&skill.to_lowercase()) {
            found.push(skill.to_string());
        }
    }

    found
}

/// Like [`extract_skills`], but substitutes [`PLACEHOLDER_SKILL`] when nothing matches.
pub fn display_skills<S: AsRef<str>>(text: &str, vocabulary: &[S], cap: usize) -> Vec<String> {
    let skills = extract_skills(text, vocabulary, cap);
    if skills.is_empty() {
        vec![PLACEHOLDER_SKILL.to_string()]
    } else {
        skills
    }
}
