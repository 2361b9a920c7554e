use clap::Parser;
use resume_render::{available_template_ids, render_resume, ResumeRecord};
use serde_json::json;
use std::env;
use std::fs;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Template to render with
    #[arg(long, default_value = "modern")]
    template: String,

    /// Output file
    #[arg(long, default_value = "preview.html")]
    out: String,
}

fn sample_record() -> ResumeRecord {
    serde_json::from_value(json!({
        "id": "demo",
        "title": "Demo resume",
        "templateId": "modern",
        "fullName": "Jane Doe",
        "targetTitle": "Senior Backend Engineer",
        "email": "jane@x.com",
        "phone": "+1 555 0100",
        "location": "Lisbon, Portugal",
        "github": "github.com/janedoe",
        "summary": "Engineer with a decade of distributed-systems work.",
        "experiences": [{
            "id": "e1",
            "company": "Acme",
            "position": "Staff Engineer",
            "startDate": "2020-06",
            "isCurrent": true,
            "achievements": ["Shipped the billing rewrite", "Cut p99 latency by 40%"]
        }],
        "education": [{
            "id": "ed1",
            "institution": "MIT",
            "degree": "BSc Computer Science",
            "field": "Computer Science",
            "startDate": "2012-09",
            "endDate": "2016-06"
        }],
        "skills": {
            "technical": ["Rust", "Go", "Kubernetes"],
            "soft": ["Mentoring"]
        },
        "projects": [],
        "certifications": []
    }))
    .expect("sample record is valid")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "resume_render=debug");
        }
    }
    env_logger::init();

    let args = Args::parse();

    println!("Available templates: {:?}", available_template_ids());

    let record = sample_record();
    let html = render_resume(&record, &args.template)?;
    fs::write(&args.out, &html)?;

    println!("Rendered '{}' with template '{}' -> {}", record.full_name, args.template, args.out);
    Ok(())
}
