//! Bundled fallback content, used whenever the live resources cannot be
//! retrieved. Mirrors the shapes served from `data/projects.json` and
//! `data/blog.json`.

use super::{Links, Post, Project, PLACEHOLDER_VISUAL};

fn placeholder() -> Vec<String> {
    vec![PLACEHOLDER_VISUAL.to_owned()]
}

fn tools(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "roadmap".into(),
            title: "AI Career Roadmap Generator".into(),
            category: "General".into(),
            featured: true,
            description: "Personalized AI-driven career path with visual skill map.".into(),
            problem: "Freshers struggle to create a career roadmap.".into(),
            solution: "AI-based generator using user profile to suggest skills and steps.".into(),
            outcome: "Delivers step-by-step plan and visual dependencies.".into(),
            tools: tools(&["Python", "Pandas", "scikit-learn", "Power BI"]),
            visuals: placeholder(),
            links: Some(Links {
                github: Some("#".into()),
                demo: Some("#".into()),
            }),
        },
        Project {
            id: "plant-ml".into(),
            title: "Plant Health Prediction using ML".into(),
            category: "Horticulture".into(),
            featured: true,
            description: "Detect diseases from leaf images, enable early intervention.".into(),
            problem: "Early disease detection in crops is complex.".into(),
            solution: "Image-based classification model with explainability.".into(),
            outcome: ">85% accuracy; supports proactive treatment.".into(),
            tools: tools(&["Python", "scikit-learn"]),
            visuals: placeholder(),
            links: Some(Links {
                github: Some("#".into()),
                demo: None,
            }),
        },
        Project {
            id: "yield-forecast".into(),
            title: "Crop Yield Forecasting".into(),
            category: "Horticulture".into(),
            description: "Time-series forecasting for yield.".into(),
            problem: "Planning requires yield forecasts.".into(),
            solution: "Prophet/ARIMA ensemble.".into(),
            outcome: "Improved forecast MAPE.".into(),
            tools: tools(&["Python", "Prophet", "ARIMA"]),
            visuals: placeholder(),
            ..Default::default()
        },
        Project {
            id: "powerbi-sales".into(),
            title: "Sales Analytics Dashboard".into(),
            category: "General".into(),
            description: "Interactive Power BI dashboard.".into(),
            problem: "Leaders lack visibility.".into(),
            solution: "KPI-focused BI dashboard.".into(),
            outcome: "Faster decisions.".into(),
            tools: tools(&["Power BI", "DAX"]),
            visuals: placeholder(),
            ..Default::default()
        },
        Project {
            id: "soil-analytics".into(),
            title: "Soil Health Analytics".into(),
            category: "Horticulture".into(),
            description: "Soil metrics scoring & mapping.".into(),
            problem: "Hard to compare soils.".into(),
            solution: "Composite soil index.".into(),
            outcome: "Prioritized interventions.".into(),
            tools: tools(&["Python", "GIS"]),
            visuals: placeholder(),
            ..Default::default()
        },
        Project {
            id: "market-basket".into(),
            title: "Market Basket Analysis".into(),
            category: "General".into(),
            description: "Association rules for cross-sell.".into(),
            problem: "Low cross-sell.".into(),
            solution: "Apriori-based bundles.".into(),
            outcome: "Higher basket size.".into(),
            tools: tools(&["Python", "mlxtend"]),
            visuals: placeholder(),
            ..Default::default()
        },
        Project {
            id: "irrigation-opt".into(),
            title: "Smart Irrigation Optimization".into(),
            category: "Horticulture".into(),
            description: "Sensor-driven irrigation.".into(),
            problem: "Water wastage.".into(),
            solution: "ML-based scheduling.".into(),
            outcome: "Saved water.".into(),
            tools: tools(&["Python", "IoT"]),
            visuals: placeholder(),
            ..Default::default()
        },
        Project {
            id: "excel-ops".into(),
            title: "Excel Automation Toolkit".into(),
            category: "General".into(),
            description: "Excel → Python automations.".into(),
            problem: "Manual reports.".into(),
            solution: "OpenPyXL scripts.".into(),
            outcome: "Hours saved weekly.".into(),
            tools: tools(&["Python", "Excel"]),
            visuals: placeholder(),
            ..Default::default()
        },
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            title: "How AI is transforming horticulture".into(),
            date: "2025-06-01".into(),
            url: "#".into(),
            excerpt: "From disease detection to smart irrigation, AI reshapes the field.".into(),
        },
        Post {
            title: "Top 5 Analytics Techniques for Crop Prediction".into(),
            date: "2025-07-18".into(),
            url: "#".into(),
            excerpt: "ARIMA, Prophet, Random Forests, and beyond for reliable forecasts.".into(),
        },
        Post {
            title: "Designing Actionable Dashboards in Power BI".into(),
            date: "2025-08-02".into(),
            url: "#".into(),
            excerpt: "Clarity, context, and consistency for decision-ready visuals.".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn eight_projects_with_unique_ids() {
        let ps = projects();
        assert_eq!(ps.len(), 8);
        let ids: HashSet<&str> = ps.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn two_featured_projects() {
        assert_eq!(projects().iter().filter(|p| p.featured).count(), 2);
    }

    #[test]
    fn three_posts_in_source_order() {
        let ps = posts();
        assert_eq!(ps.len(), 3);
        assert_eq!(ps[0].date, "2025-06-01");
        assert_eq!(ps[2].date, "2025-08-02");
    }
}
