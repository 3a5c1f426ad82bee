//! Shared fixtures and proptest strategies for unit tests.

use std::path::PathBuf;
use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::repository::ResumeRepository;
use crate::state::AppState;
use crate::store::{KeyValueStore, StoreBackend};

use crate::models::{
    EducationEntry, ExperienceEntry, Links, PersonalInfo, ProjectEntry, ResumeDocument, Skills,
    TagList,
};
use crate::scoring::signals::word_count;

const SUMMARY_OPENING: &str =
    "Led a platform team of engineers shipping reliable payment infrastructure";

/// A document meeting every rubric criterion: 120-word summary containing
/// "Led", one experience entry with a percentage, two projects, one complete
/// education entry, nine skills and both profile links.
pub fn full_sample_document() -> ResumeDocument {
    let filler = vec!["reliability"; 120 - word_count(SUMMARY_OPENING)].join(" ");
    ResumeDocument {
        personal_info: PersonalInfo {
            name: "Ada Park".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            location: "Berlin".to_string(),
        },
        summary: format!("{SUMMARY_OPENING} {filler}"),
        education: vec![EducationEntry {
            school: "TU Berlin".to_string(),
            degree: "M.Sc. Computer Science".to_string(),
            date: "2014 — 2016".to_string(),
        }],
        experience: vec![ExperienceEntry {
            company: "Northwind".to_string(),
            role: "Staff Engineer".to_string(),
            date: "2018 — Present".to_string(),
            description: "Cut checkout latency by 30% across every region".to_string(),
        }],
        projects: vec![
            ProjectEntry {
                name: "Ledgerline".to_string(),
                description: "Double-entry bookkeeping engine".to_string(),
                tech_stack: ["Rust", "Postgres"].into_iter().collect(),
                live_url: String::new(),
                github_url: "github.com/ada/ledgerline".to_string(),
            },
            ProjectEntry {
                name: "Tidewatch".to_string(),
                description: "Tide chart notifier for sailors".to_string(),
                tech_stack: TagList::new(),
                live_url: "tidewatch.dev".to_string(),
                github_url: String::new(),
            },
        ],
        skills: Skills {
            technical: ["Rust", "Go", "SQL", "Kafka"].into_iter().collect(),
            soft: ["Mentoring", "Writing"].into_iter().collect(),
            tools: ["Git", "Terraform", "Grafana"].into_iter().collect(),
        },
        links: Links {
            github: "github.com/ada".to_string(),
            linkedin: "linkedin.com/in/ada".to_string(),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Typed documents
// ────────────────────────────────────────────────────────────────────────────

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-zA-Z0-9%kx ]{1,24}",
        Just("Improved throughput by 40%".to_string()),
    ]
}

fn arb_summary() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![Just("built"), Just("word"), Just("systems"), Just("12k")],
        0..140,
    )
    .prop_map(|words| words.join(" "))
}

fn arb_tags() -> impl Strategy<Value = TagList> {
    prop::collection::vec("[A-Za-z ]{0,8}", 0..6).prop_map(|tags| tags.into_iter().collect())
}

prop_compose! {
    pub fn arb_document()(
        personal in (arb_text(), arb_text(), arb_text(), arb_text()),
        summary in arb_summary(),
        education in prop::collection::vec((arb_text(), arb_text(), arb_text()), 0..3),
        experience in prop::collection::vec((arb_text(), arb_text(), arb_text(), arb_text()), 0..3),
        projects in prop::collection::vec(
            (arb_text(), arb_text(), arb_tags(), arb_text(), arb_text()),
            0..4,
        ),
        skills in (arb_tags(), arb_tags(), arb_tags()),
        links in (arb_text(), arb_text()),
    ) -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                name: personal.0,
                email: personal.1,
                phone: personal.2,
                location: personal.3,
            },
            summary,
            education: education
                .into_iter()
                .map(|(school, degree, date)| EducationEntry { school, degree, date })
                .collect(),
            experience: experience
                .into_iter()
                .map(|(company, role, date, description)| ExperienceEntry {
                    company,
                    role,
                    date,
                    description,
                })
                .collect(),
            projects: projects
                .into_iter()
                .map(|(name, description, tech_stack, live_url, github_url)| ProjectEntry {
                    name,
                    description,
                    tech_stack,
                    live_url,
                    github_url,
                })
                .collect(),
            skills: Skills {
                technical: skills.0,
                soft: skills.1,
                tools: skills.2,
            },
            links: Links {
                github: links.0,
                linkedin: links.1,
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw (untyped) documents
// ────────────────────────────────────────────────────────────────────────────

fn arb_json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ,%]{0,16}".prop_map(Value::String),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_json_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[a-zA-Z]{1,10}", inner, 0..4)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

fn arb_record(keys: &'static [&'static str]) -> impl Strategy<Value = Value> {
    prop::collection::vec(arb_json_leaf(), keys.len()).prop_map(move |values| {
        Value::Object(
            keys.iter()
                .map(|k| k.to_string())
                .zip(values)
                .collect::<Map<String, Value>>(),
        )
    })
}

fn arb_project_record() -> impl Strategy<Value = Value> {
    (
        arb_record(&["name", "description", "liveUrl", "githubUrl"]),
        prop::option::of(prop::collection::vec(arb_json_leaf(), 0..4)),
    )
        .prop_map(|(mut record, tech)| {
            if let (Some(tech), Value::Object(fields)) = (tech, &mut record) {
                fields.insert("techStack".to_string(), Value::Array(tech));
            }
            record
        })
}

fn arb_skills_record() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z ,]{0,30}".prop_map(Value::String),
        (
            prop::collection::vec(arb_json_leaf(), 0..5),
            prop::collection::vec(arb_json_leaf(), 0..5),
            prop::collection::vec(arb_json_leaf(), 0..5),
        )
            .prop_map(|(technical, soft, tools)| {
                json!({ "technical": technical, "soft": soft, "tools": tools })
            }),
        arb_json(),
    ]
}

prop_compose! {
    fn arb_shaped_raw()(
        personal in arb_record(&["name", "email", "phone", "location"]),
        summary in arb_json_leaf(),
        education in prop::collection::vec(arb_record(&["school", "degree", "date"]), 0..3),
        experience in prop::collection::vec(
            arb_record(&["company", "role", "date", "description"]),
            0..3,
        ),
        projects in prop::collection::vec(arb_project_record(), 0..3),
        skills in arb_skills_record(),
        links in arb_record(&["github", "linkedin"]),
    ) -> Value {
        json!({
            "personalInfo": personal,
            "summary": summary,
            "education": education,
            "experience": experience,
            "projects": projects,
            "skills": skills,
            "links": links,
        })
    }
}

/// Anything from a well-formed legacy document to arbitrary JSON.
pub fn arb_raw_document() -> impl Strategy<Value = Value> {
    prop_oneof![3 => arb_shaped_raw(), 1 => arb_json()]
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP state
// ────────────────────────────────────────────────────────────────────────────

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        store_backend: StoreBackend::Memory,
        store_dir: PathBuf::new(),
        redis_url: None,
    }
}

/// App state over `store`, configured like a memory-backed local run.
pub fn test_state(store: Arc<dyn KeyValueStore>) -> AppState {
    AppState {
        repository: Arc::new(ResumeRepository::new(store)),
        config: test_config(),
    }
}
