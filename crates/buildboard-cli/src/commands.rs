//! CLI command implementations.

use anyhow::Result;
use serde_json::Value;

pub async fn status(api_url: &str, project: &str, build: Option<&str>) -> Result<()> {
    let url = match build {
        Some(label) => format!("{api_url}/builds/{project}/{label}"),
        None => format!("{api_url}/builds/{project}"),
    };

    let response = reqwest::get(&url).await?;
    if response.status() == reqwest::StatusCode::NOT_FOUND {
        eprintln!("{}", response.text().await?);
        std::process::exit(1);
    }

    let page: Value = response.error_for_status()?.json().await?;
    let Some(current) = page.get("build").filter(|b| !b.is_null()) else {
        println!("{} has no builds yet", project);
        return Ok(());
    };

    println!(
        "{} build {}: {}",
        project,
        current["label"].as_str().unwrap_or("?"),
        current["state"].as_str().unwrap_or("?"),
    );
    if page["auto_refresh"].as_bool().unwrap_or(false) {
        println!("(still running)");
    }

    if let Some(recent) = page["recent"].as_array() {
        println!("recent builds:");
        for link in recent {
            println!(
                "  {}  {}",
                link["label"].as_str().unwrap_or("?"),
                link["state"].as_str().unwrap_or("?"),
            );
        }
    }

    Ok(())
}

pub async fn projects(api_url: &str) -> Result<()> {
    let url = format!("{api_url}/projects");
    let list: Vec<Value> = reqwest::get(&url)
        .await?
        .error_for_status()?
        .json()
        .await?;

    if list.is_empty() {
        println!("No projects");
        return Ok(());
    }

    for project in list {
        let name = project["name"].as_str().unwrap_or("?");
        match project["last_label"].as_str() {
            Some(label) => println!(
                "{}: build {} - {}",
                name,
                label,
                project["last_state"].as_str().unwrap_or("?"),
            ),
            None => println!("{}: no builds yet", name),
        }
    }

    Ok(())
}

pub fn validate(path: &str) -> Result<()> {
    match buildboard_config::load_server_config(std::path::Path::new(path)) {
        Ok(config) => {
            println!("Configuration is valid");
            println!("  bind: {}", config.bind);
            println!("  projects-dir: {}", config.projects_dir.display());
            println!("  build-history-limit: {}", config.build_history_limit);
            Ok(())
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}
