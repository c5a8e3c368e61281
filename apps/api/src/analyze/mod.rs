//! Mock resume analysis. Returns canned data keyed on the requested role so
//! the frontend can be built against a stable shape before the real model
//! call lands.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub ats_score: u32,
    pub readiness: String,
    pub top_fixes: Vec<String>,
    pub skills_present: Vec<String>,
    pub skills_missing: Vec<String>,
    pub roadmap: Vec<WeekPlan>,
    pub hiring_calendar: Vec<SeasonWindow>,
    pub meta: AnalysisMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekPlan {
    pub week: u32,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeasonWindow {
    pub month: String,
    pub focus: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMeta {
    pub input: EchoedInput,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoedInput {
    pub role: String,
    pub year: String,
    pub time: String,
    pub resume_text_provided: bool,
}

/// Builds the canned report. The only branch is `role == "SDE"`; every other
/// role gets the analyst variant.
pub fn build_report(request: &AnalyzeRequest, generated_at: DateTime<Utc>) -> AnalysisReport {
    let sde = request.role == "SDE";

    let week_tasks: [(Vec<&str>, Vec<&str>); 4] = [
        (
            vec!["Revise arrays/strings", "Solve 10 easy + 5 medium DSA"],
            vec!["Revise SQL basics", "Practice joins & subqueries"],
        ),
        (
            vec!["Learn hashing/two pointers", "Build 1 mini project"],
            vec!["Build Excel dashboard project", "Learn Pivot Tables"],
        ),
        (
            vec!["Trees/recursion basics", "2 mock interviews (DSA)"],
            vec!["Power BI basics", "Mini analytics project"],
        ),
        (
            vec!["Revise patterns", "Resume refinement + GitHub cleanup"],
            vec!["Mock interviews", "Resume improvement"],
        ),
    ];

    let roadmap = week_tasks
        .iter()
        .enumerate()
        .map(|(i, (sde_tasks, other_tasks))| WeekPlan {
            week: i as u32 + 1,
            tasks: to_strings(if sde { sde_tasks } else { other_tasks }),
        })
        .collect();

    AnalysisReport {
        ats_score: if sde { 62 } else { 68 },
        readiness: (if sde { "Needs DSA Focus" } else { "Moderately Ready" }).to_string(),
        top_fixes: to_strings(&[
            "Add measurable outcomes to projects (numbers, impact, scale)",
            "Improve ATS formatting (consistent headings + bullet structure)",
            "Add role-relevant keywords and tools in Skills/Projects",
        ]),
        skills_present: if sde {
            to_strings(&["Java", "OOP", "Arrays", "Git"])
        } else {
            to_strings(&["Python", "Statistics", "Pandas"])
        },
        skills_missing: if sde {
            to_strings(&[
                "DSA Patterns",
                "System Design Basics",
                "Projects with deployment",
            ])
        } else {
            to_strings(&["Advanced SQL", "Excel Dashboards", "Case Study Thinking"])
        },
        roadmap,
        hiring_calendar: vec![
            SeasonWindow {
                month: "Feb–Mar".to_string(),
                focus: "Internship hiring (IT/Analytics)".to_string(),
            },
            SeasonWindow {
                month: "Jul–Sep".to_string(),
                focus: "Campus placements (major season)".to_string(),
            },
            SeasonWindow {
                month: "Oct–Nov".to_string(),
                focus: "Big 4 / Consulting / late drives".to_string(),
            },
        ],
        meta: AnalysisMeta {
            input: EchoedInput {
                role: request.role.clone(),
                year: request.year.clone(),
                time: request.time.clone(),
                resume_text_provided: request.resume_text.is_some(),
            },
            generated_at,
        },
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
