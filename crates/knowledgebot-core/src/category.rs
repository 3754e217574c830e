//! Document categories and the filename rule table.
//!
//! A task's category is a pure function of its display name: the
//! lowercase name is matched against an ordered list of substring
//! rules, first match wins, and anything unmatched falls back to
//! [`Category::General`]. The order below is load-bearing — a name
//! like `Expense_Policy.pdf` matches both an HR rule and a Finance
//! rule, and the HR rules are evaluated first.

use std::fmt;

use serde::Serialize;

use crate::models::DocumentTask;

/// Knowledge-base category assigned to every task at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "HR & Policies")]
    HrPolicies,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Legal & Compliance")]
    LegalCompliance,
    #[serde(rename = "Operations")]
    Operations,
    #[serde(rename = "IT & Tech")]
    ItTech,
    #[serde(rename = "General")]
    General,
}

/// All categories, in display order.
pub const ALL_CATEGORIES: [Category; 6] = [
    Category::HrPolicies,
    Category::Finance,
    Category::LegalCompliance,
    Category::Operations,
    Category::ItTech,
    Category::General,
];

impl Category {
    /// Human-readable label, as shown in the knowledge-base sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Category::HrPolicies => "HR & Policies",
            Category::Finance => "Finance",
            Category::LegalCompliance => "Legal & Compliance",
            Category::Operations => "Operations",
            Category::ItTech => "IT & Tech",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prioritized substring rules, evaluated top to bottom against the
/// lowercase display name.
const RULES: &[(&str, Category)] = &[
    ("handbook", Category::HrPolicies),
    ("policy", Category::HrPolicies),
    ("hr", Category::HrPolicies),
    ("finance", Category::Finance),
    ("expense", Category::Finance),
    ("budget", Category::Finance),
    ("legal", Category::LegalCompliance),
    ("contract", Category::LegalCompliance),
    ("compliance", Category::LegalCompliance),
    ("manual", Category::Operations),
    ("procedure", Category::Operations),
    ("process", Category::Operations),
    ("tech", Category::ItTech),
    ("it", Category::ItTech),
    ("software", Category::ItTech),
];

/// Assign a category from a display name.
///
/// Case-insensitive substring match over [`RULES`]; the first matching
/// rule wins, and names matching nothing are `General`.
pub fn categorize(name: &str) -> Category {
    let lower = name.to_lowercase();
    RULES
        .iter()
        .find(|(pattern, _)| lower.contains(pattern))
        .map(|&(_, category)| category)
        .unwrap_or(Category::General)
}

/// Count tasks per category, in display order.
///
/// Used for the knowledge-base statistics the shell shows next to each
/// category.
pub fn category_counts(tasks: &[DocumentTask]) -> Vec<(Category, usize)> {
    ALL_CATEGORIES
        .iter()
        .map(|&category| {
            let count = tasks.iter().filter(|t| t.category == category).count();
            (category, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileMeta;

    #[test]
    fn hr_fixtures() {
        assert_eq!(categorize("HR_Handbook.pdf"), Category::HrPolicies);
        assert_eq!(categorize("policy.pdf"), Category::HrPolicies);
        assert_eq!(categorize("Employee_Handbook_2024.pdf"), Category::HrPolicies);
    }

    #[test]
    fn finance_fixtures() {
        assert_eq!(categorize("Q3_Finance_Report.xlsx"), Category::Finance);
        assert_eq!(categorize("budget-2026.csv"), Category::Finance);
    }

    #[test]
    fn remaining_categories() {
        assert_eq!(categorize("vendor_contract.docx"), Category::LegalCompliance);
        assert_eq!(categorize("ops_manual.pdf"), Category::Operations);
        assert_eq!(categorize("software_inventory.xlsx"), Category::ItTech);
    }

    #[test]
    fn unmatched_names_default_to_general() {
        assert_eq!(categorize("randomfile.txt"), Category::General);
        assert_eq!(categorize(""), Category::General);
    }

    #[test]
    fn earlier_rules_win() {
        // Matches both "policy" (HR) and "expense" (Finance); HR rules
        // come first.
        assert_eq!(categorize("Expense_Policy_2024.pdf"), Category::HrPolicies);
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(categorize("LEGAL-NOTES.TXT"), Category::LegalCompliance);
    }

    #[test]
    fn counts_follow_display_order() {
        let tasks: Vec<_> = ["a_policy.pdf", "b_policy.pdf", "expenses.csv", "notes.txt"]
            .iter()
            .map(|name| {
                crate::models::DocumentTask::new(FileMeta {
                    name: name.to_string(),
                    size: 1,
                    media_type: "text/plain".to_string(),
                })
            })
            .collect();

        let counts = category_counts(&tasks);
        assert_eq!(counts.len(), ALL_CATEGORIES.len());
        assert_eq!(counts[0], (Category::HrPolicies, 2));
        assert_eq!(counts[1], (Category::Finance, 1));
        assert_eq!(counts[5], (Category::General, 1));
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Category::HrPolicies).unwrap();
        assert_eq!(json, "\"HR & Policies\"");
    }
}
