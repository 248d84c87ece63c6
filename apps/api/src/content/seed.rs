//! The fixed seed payload for the three reference collections. Pure data —
//! the upsert itself lives in `content::run_seed`.

use crate::models::content::{ModuleRow, ResourceRow, ScenarioRow};

#[allow(clippy::too_many_arguments)]
fn module(
    id: &str,
    title: &str,
    description: &str,
    difficulty: &str,
    category: &str,
    track: &str,
    duration: &str,
    locked: bool,
) -> ModuleRow {
    ModuleRow {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        difficulty: difficulty.to_string(),
        category: category.to_string(),
        track: track.to_string(),
        duration: duration.to_string(),
        locked,
    }
}

pub fn modules() -> Vec<ModuleRow> {
    vec![
        module(
            "m1",
            "What is a Product?",
            "Physical vs Digital, B2B vs B2C basics.",
            "BEGINNER",
            "Foundation",
            "GENERAL",
            "10m",
            false,
        ),
        module(
            "m2",
            "The Product Specialist Role",
            "Day in the life and core responsibilities.",
            "BEGINNER",
            "Foundation",
            "GENERAL",
            "15m",
            false,
        ),
        module(
            "m3",
            "Business Model Basics",
            "How products actually make money.",
            "BEGINNER",
            "Foundation",
            "STRATEGY",
            "20m",
            false,
        ),
        module(
            "m4",
            "Tech for Non-Techies",
            "APIs, Databases, and Frontends explained.",
            "BEGINNER",
            "Foundation",
            "DELIVERY",
            "25m",
            false,
        ),
        module(
            "m5",
            "User Research 101",
            "Running interviews without bias.",
            "INTERMEDIATE",
            "Core",
            "DISCOVERY",
            "30m",
            true,
        ),
        module(
            "m6",
            "Writing User Stories",
            "The \"As a... I want to... So that...\" format.",
            "INTERMEDIATE",
            "Core",
            "DELIVERY",
            "20m",
            true,
        ),
        module(
            "m7",
            "Prioritization Frameworks",
            "RICE, MoSCoW, and saying No.",
            "INTERMEDIATE",
            "Core",
            "DELIVERY",
            "35m",
            true,
        ),
        module(
            "m8",
            "Product Strategy",
            "Vision vs. Strategy vs. Roadmap.",
            "ADVANCED",
            "Advanced",
            "STRATEGY",
            "45m",
            true,
        ),
        module(
            "m9",
            "Growth Mechanics",
            "Loops, funnels, and viral coefficients.",
            "ADVANCED",
            "Advanced",
            "STRATEGY",
            "40m",
            true,
        ),
    ]
}

fn scenario(
    id: &str,
    title: &str,
    description: &str,
    difficulty: &str,
    context: &str,
    task: &str,
) -> ScenarioRow {
    ScenarioRow {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        difficulty: difficulty.to_string(),
        context: context.to_string(),
        task: task.to_string(),
    }
}

pub fn scenarios() -> Vec<ScenarioRow> {
    vec![
        scenario(
            "s1",
            "The Angry Stakeholder",
            "Sales VP demands a feature needed \"yesterday\".",
            "BEGINNER",
            "You are a junior PS at a B2B SaaS co. The VP of Sales interrupts your lunch.",
            "Draft a response that acknowledges their urgency but protects the roadmap.",
        ),
        scenario(
            "s2",
            "Metric Mystery",
            "Retention dropped 15% overnight.",
            "INTERMEDIATE",
            "Monday morning. The dashboard shows a sharp decline in Daily Active Users (DAU) after the Friday release.",
            "Outline your investigation plan. Who do you talk to? What data do you check?",
        ),
        scenario(
            "s3",
            "Technical Debt Trade-off",
            "Engineering wants to refactor. Product wants features.",
            "ADVANCED",
            "The Lead Engineer says the login system is \"held together by duct tape\". Marketing wants a new social login feature.",
            "Write a proposal for how to balance these conflicting needs for the Q3 roadmap.",
        ),
    ]
}

pub fn resources() -> Vec<ResourceRow> {
    vec![
        ResourceRow {
            id: "r1".to_string(),
            title: "Product Management 101".to_string(),
            description: "Start here. What is this job and why does it exist?".to_string(),
            resource_type: "GUIDE".to_string(),
            difficulty: "BEGINNER".to_string(),
            category: "Foundation".to_string(),
            duration: "15 min".to_string(),
            tags: vec!["Basics".to_string()],
            content: Some(
                "# Product Management 101\n\n## What is a Product Manager?\nResponsible for the success of a product."
                    .to_string(),
            ),
        },
        ResourceRow {
            id: "r3".to_string(),
            title: "The Art of the User Interview".to_string(),
            description: "How to talk to users without biasing them.".to_string(),
            resource_type: "GUIDE".to_string(),
            difficulty: "INTERMEDIATE".to_string(),
            category: "Core".to_string(),
            duration: "20 min".to_string(),
            tags: vec!["Research".to_string()],
            content: Some("# User Interviews\n\nDon't ask leading questions.".to_string()),
        },
        ResourceRow {
            id: "r_prd_1".to_string(),
            title: "The Perfect PRD Structure".to_string(),
            description: "How to write specs that engineers actually read.".to_string(),
            resource_type: "GUIDE".to_string(),
            difficulty: "INTERMEDIATE".to_string(),
            category: "Core".to_string(),
            duration: "30 min".to_string(),
            tags: vec!["PRD".to_string()],
            content: Some("# The PRD\n\nProblem, Solution, Scope.".to_string()),
        },
    ]
}
