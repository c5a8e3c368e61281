//! Seeds the dashboard data: roles, the SDE checklist, the SDE guide, and a
//! pair of sample hiring events for the current month. Applies the schema
//! first, so it is safe to run against an empty database. Re-runnable.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SCHEMA: &str = include_str!("../../db/schema.sql");

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await?;
    info!("Connected for seeding");

    pool.execute(SCHEMA).await?;
    info!("Schema applied");

    seed_roles(&pool).await?;
    seed_sde_checklist(&pool).await?;
    seed_sde_guide(&pool).await?;
    seed_sample_events(&pool).await?;

    info!("Seed complete");
    Ok(())
}

async fn seed_roles(pool: &PgPool) -> Result<()> {
    let roles = [
        ("sde", "Software Developer (SDE)", "DSA + projects + CS fundamentals"),
        ("data-analyst", "Data Analyst", "SQL + dashboards + business thinking"),
        ("ml-engineer", "ML Engineer", "ML fundamentals + projects + deployment basics"),
    ];

    for (role_id, title, short_desc) in roles {
        sqlx::query(
            r#"
            INSERT INTO roles (role_id, title, short_desc)
            VALUES ($1, $2, $3)
            ON CONFLICT (role_id) DO UPDATE SET
                title = EXCLUDED.title,
                short_desc = EXCLUDED.short_desc
            "#,
        )
        .bind(role_id)
        .bind(title)
        .bind(short_desc)
        .execute(pool)
        .await?;
    }

    info!("Seeded {} roles", roles.len());
    Ok(())
}

async fn seed_sde_checklist(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM checklist_items WHERE role_id = $1")
        .bind("sde")
        .execute(pool)
        .await?;

    let items: [(&str, &str, &str, f64, i32); 5] = [
        ("DSA", "Finish Arrays + Strings basics", "P0", 8.0, 1),
        (
            "DSA",
            "Solve 40 problems (2-pointer, hashing, sliding window)",
            "P0",
            20.0,
            2,
        ),
        (
            "CS Fundamentals",
            "OS basics: process/thread, scheduling, deadlock",
            "P1",
            6.0,
            1,
        ),
        (
            "Projects",
            "1 full-stack project with auth + CRUD + deployment",
            "P0",
            25.0,
            1,
        ),
        ("Resume", "Quantify impact in 3 bullets per project", "P0", 2.0, 1),
    ];

    for (category, title, priority, est_hours, sort_order) in items {
        sqlx::query(
            r#"
            INSERT INTO checklist_items (role_id, category, title, priority, est_hours, sort_order)
            VALUES ($1, $2, $3, $4::checklist_priority, $5, $6)
            "#,
        )
        .bind("sde")
        .bind(category)
        .bind(title)
        .bind(priority)
        .bind(est_hours)
        .bind(sort_order)
        .execute(pool)
        .await?;
    }

    info!("Seeded {} SDE checklist items", items.len());
    Ok(())
}

async fn seed_sde_guide(pool: &PgPool) -> Result<()> {
    let roadmap = json!([
        {
            "week": "Week 1–2",
            "focus": "Core DSA + Resume clean-up",
            "tasks": [
                "Arrays/Strings/Hashing",
                "Rewrite resume bullets with metrics",
                "Deploy one project"
            ]
        },
        {
            "week": "Week 3–4",
            "focus": "Intermediate DSA + CS basics",
            "tasks": [
                "Sliding window, stacks, binary search",
                "OS + DBMS basics notes",
                "Mock interviews (2)"
            ]
        }
    ]);

    let resources = json!([
        { "label": "Striver DSA Sheet", "url": "https://takeuforward.org/" },
        {
            "label": "System Design (basics)",
            "url": "https://github.com/donnemartin/system-design-primer"
        }
    ]);

    sqlx::query(
        r#"
        INSERT INTO role_guides
            (role_id, overview, interview_format, roadmap,
             standout_projects, mistakes_to_avoid, resources)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (role_id) DO UPDATE SET
            overview = EXCLUDED.overview,
            interview_format = EXCLUDED.interview_format,
            roadmap = EXCLUDED.roadmap,
            standout_projects = EXCLUDED.standout_projects,
            mistakes_to_avoid = EXCLUDED.mistakes_to_avoid,
            resources = EXCLUDED.resources
        "#,
    )
    .bind("sde")
    .bind(
        "SDE hiring in India typically evaluates DSA problem solving, communication, \
         and at least one solid deployed project.",
    )
    .bind(vec![
        "Online assessment (DSA)",
        "1–2 coding rounds (medium DSA)",
        "CS fundamentals (OS/DBMS/Networks) for many companies",
        "Project deep-dive + behavioral",
    ])
    .bind(roadmap)
    .bind(vec![
        "Real users + auth + payments/notifications (even small scale)",
        "Good engineering: clean API, validations, pagination, logs",
        "Deployed on Vercel/Render + database + monitoring basics",
    ])
    .bind(vec![
        "Only LeetCode with no projects",
        "Projects with no measurable outcome and no deployment",
        "Not being able to explain trade-offs / edge cases",
    ])
    .bind(resources)
    .execute(pool)
    .await?;

    info!("Seeded SDE guide");
    Ok(())
}

async fn seed_sample_events(pool: &PgPool) -> Result<()> {
    // Replace earlier sample rows rather than stacking duplicates.
    sqlx::query("DELETE FROM hiring_events WHERE title LIKE 'TechReady Sample:%'")
        .execute(pool)
        .await?;

    let now = Utc::now();
    let month_start: DateTime<Utc> = Utc
        .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .context("month start")?;

    let events = [
        (
            "TechReady Sample: Product company internship shortlisting window",
            "Product",
            vec!["SDE", "Data Analyst", "ML Engineer"],
            month_start,
            month_start + Duration::days(19),
            "Track career pages + referrals + LinkedIn openings.",
            vec!["internship", "shortlisting"],
        ),
        (
            "TechReady Sample: Hackathon season (good for projects + referrals)",
            "Hackathon",
            vec!["SDE", "ML Engineer"],
            month_start + Duration::days(9),
            month_start + Duration::days(29),
            "Aim for 1 submission + write-up.",
            vec!["hackathon"],
        ),
    ];

    for (title, org_type, roles, start_date, end_date, notes, tags) in events {
        sqlx::query(
            r#"
            INSERT INTO hiring_events (title, org_type, roles, start_date, end_date, notes, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(title)
        .bind(org_type)
        .bind(roles)
        .bind(start_date)
        .bind(end_date)
        .bind(notes)
        .bind(tags)
        .execute(pool)
        .await?;
    }

    info!("Seeded sample hiring events");
    Ok(())
}
