//! Static skill data behind the radar chart and the tree diagram.
//! Unlike projects and posts, these are not fetched.

mod radar;
mod tree;

pub use radar::{value_polygon, vertex, Radar};
pub use tree::TreeDiagram;

pub const MAX_SCORE: f32 = 100.0;

/// One radar axis.
#[derive(Debug, Clone, Copy)]
pub struct SkillRating {
    pub label: &'static str,
    pub score: f32,
}

pub const RATINGS: [SkillRating; 5] = [
    SkillRating {
        label: "Python",
        score: 85.0,
    },
    SkillRating {
        label: "SQL",
        score: 75.0,
    },
    SkillRating {
        label: "Power BI",
        score: 80.0,
    },
    SkillRating {
        label: "Excel",
        score: 90.0,
    },
    SkillRating {
        label: "ML",
        score: 70.0,
    },
];

/// A node in the static skill hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct SkillBranch {
    pub name: &'static str,
    pub children: &'static [SkillBranch],
}

const fn leaf(name: &'static str) -> SkillBranch {
    SkillBranch { name, children: &[] }
}

pub const SKILL_TREE: SkillBranch = SkillBranch {
    name: "Skills",
    children: &[
        SkillBranch {
            name: "Horticulture",
            children: &[
                leaf("Crop Analytics"),
                leaf("Soil Health"),
                leaf("Plant Pathology"),
            ],
        },
        SkillBranch {
            name: "Data & AI",
            children: &[
                SkillBranch {
                    name: "Python",
                    children: &[leaf("Pandas"), leaf("scikit-learn")],
                },
                SkillBranch {
                    name: "BI",
                    children: &[leaf("Power BI"), leaf("DAX")],
                },
                leaf("SQL"),
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn count(branch: &SkillBranch) -> usize {
        1 + branch.children.iter().map(count).sum::<usize>()
    }

    #[test]
    fn ratings_are_within_range() {
        for r in RATINGS {
            assert!((0.0..=MAX_SCORE).contains(&r.score), "{}", r.label);
        }
    }

    #[test]
    fn skill_tree_has_expected_shape() {
        assert_eq!(SKILL_TREE.name, "Skills");
        assert_eq!(SKILL_TREE.children.len(), 2);
        assert_eq!(count(&SKILL_TREE), 13);
    }
}
