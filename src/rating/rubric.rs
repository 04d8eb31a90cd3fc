use serde::Serialize;

/// One attribute of the rating form.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RubricAttribute {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The eight attributes every rating session asks for, in form order.
///
/// This list is fixed and independent of the attributes stored on the
/// record being rated.
pub const RUBRIC: [RubricAttribute; 8] = [
    RubricAttribute {
        code: "RL",
        name: "Reasoning & Logic",
        description: "Problem solving and logical thinking",
    },
    RubricAttribute {
        code: "CG",
        name: "Creativity & Generation",
        description: "Novel and imaginative outputs",
    },
    RubricAttribute {
        code: "KI",
        name: "Knowledge & Information",
        description: "Information access and synthesis",
    },
    RubricAttribute {
        code: "AL",
        name: "Adaptability & Learning",
        description: "Adjusting to new information",
    },
    RubricAttribute {
        code: "ES",
        name: "Efficiency & Speed",
        description: "Processing speed and resource efficiency",
    },
    RubricAttribute {
        code: "SA",
        name: "Safety & Alignment",
        description: "Ethical guidelines and human values",
    },
    RubricAttribute {
        code: "TU",
        name: "Tool Use & Integration",
        description: "External tools and API usage",
    },
    RubricAttribute {
        code: "CE",
        name: "Communication & Empathy",
        description: "Clear and contextual communication",
    },
];

/// Looks up a rubric attribute by code (any case) or by full name.
pub fn find_attribute(key: &str) -> Option<&'static RubricAttribute> {
    let key = key.trim();
    RUBRIC
        .iter()
        .find(|attr| attr.code.eq_ignore_ascii_case(key) || attr.name.eq_ignore_ascii_case(key))
}
