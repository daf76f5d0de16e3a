//! Upload generated learning-path records
//!
//! Usage: cargo run --example generated_learning_paths -- [UPLOAD_URL]

use csv_uploader::{Record, Uploader};
use serde_json::Value;

const DEFAULT_APP_URL: &str = "https://your-app.vercel.app";

fn record(fields: &[(&str, &str)]) -> Record {
    fields
        .iter()
        .map(|(column, value)| (column.to_string(), Value::String(value.to_string())))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Rows as a text generator would produce them
    let generated_data = vec![
        record(&[
            ("Anon Student Id", "student_001"),
            ("Time", "2024-01-15 10:30:00"),
            ("Step Name", "Introduction"),
            ("Outcome", "CORRECT"),
            ("CF (Workspace Progress Status)", "GRADUATED"),
            ("Problem Name", "ER_Problem_1"),
        ]),
        record(&[
            ("Anon Student Id", "student_001"),
            ("Time", "2024-01-15 10:31:00"),
            ("Step Name", "Setup"),
            ("Outcome", "INCORRECT"),
            ("CF (Workspace Progress Status)", "GRADUATED"),
            ("Problem Name", "ER_Problem_1"),
        ]),
    ];

    let upload_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| format!("{}/api/upload-csv", DEFAULT_APP_URL));
    let uploader = Uploader::new(upload_url);

    let success = uploader.upload(&generated_data, Some("generated_learning_paths"))?;

    if success {
        println!("🎉 Data is now available in Path Analysis Tool!");
        println!("📊 View at: {}", DEFAULT_APP_URL);
    } else {
        std::process::exit(1);
    }

    Ok(())
}
