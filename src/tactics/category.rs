//! Compiled-in tactic dictionaries.

/// One named group of trigger phrases.
///
/// Terms are lowercase, deduplicated, and pinned to lexicographic order at
/// construction so matched-term sequences reproduce across runs and
/// platforms.
#[derive(Debug, Clone)]
pub struct TacticCategory {
    pub name: &'static str,
    /// Short label used for derived column names (`<label>_detected`).
    pub label: &'static str,
    terms: Vec<&'static str>,
}

impl TacticCategory {
    fn new(name: &'static str, label: &'static str, mut terms: Vec<&'static str>) -> Self {
        terms.sort_unstable();
        terms.dedup();
        Self { name, label, terms }
    }

    pub fn terms(&self) -> &[&'static str] {
        &self.terms
    }
}

/// Category table in declaration order: urgency first, then exclusivity.
pub(crate) fn builtin_categories() -> Vec<TacticCategory> {
    vec![
        TacticCategory::new(
            super::URGENCY_MARKETING,
            "urgency",
            vec![
                "limited",
                "limited time",
                "limited run",
                "limited edition",
                "order now",
                "last chance",
                "hurry",
                "while supplies last",
                "before they're gone",
                "selling out",
                "selling fast",
                "act now",
                "don't wait",
                "today only",
                "expires soon",
                "final hours",
                "almost gone",
            ],
        ),
        TacticCategory::new(
            super::EXCLUSIVE_MARKETING,
            "exclusive",
            vec![
                "exclusive",
                "exclusively",
                "exclusive offer",
                "exclusive deal",
                "members only",
                "vip",
                "special access",
                "invitation only",
                "premium",
                "privileged",
                "limited access",
                "select customers",
                "insider",
                "private sale",
                "early access",
            ],
        ),
    ]
}
