use crate::context::{AppContext, VerbosityLevel};
use crate::format::{self, OutputFormat};
use libhubtag::format::{format_age, format_size};
use libhubtag::{Digest, Hub, StaticUserAgent, TagRecord};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tabled::{Table, Tabled, settings::Style};

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;

/// One row of the tag listing table
#[derive(Debug, Serialize, Tabled)]
pub struct TagRow {
    #[tabled(rename = "TAG")]
    pub tag: String,
    #[tabled(rename = "DIGEST")]
    pub digest: String,
    #[tabled(rename = "SIZE")]
    pub size: String,
    #[tabled(rename = "LAST PUSHED")]
    pub pushed: String,
}

impl TagRow {
    /// Builds a display row, shortening the digest and humanizing metadata.
    pub fn from_record(record: &TagRecord) -> Self {
        Self {
            tag: record.name.clone(),
            digest: record
                .digest
                .as_deref()
                .map(short_digest)
                .unwrap_or_else(|| "<none>".to_string()),
            size: record
                .full_size
                .map(format_size)
                .unwrap_or_else(|| "-".to_string()),
            pushed: record
                .last_updated
                .as_ref()
                .map(format_age)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// First 12 hex characters after the algorithm prefix.
fn short_digest(digest: &str) -> String {
    match digest.split_once(':') {
        Some((algorithm, hex)) if hex.len() > 12 => format!("{}:{}", algorithm, &hex[..12]),
        _ => digest.to_string(),
    }
}

fn build_hub(ctx: &AppContext, page_size: Option<u32>) -> Result<Hub, String> {
    let mut builder = Hub::builder()
        .base_url(ctx.config.hub.base_url.clone())
        .page_size(page_size.unwrap_or(ctx.config.hub.page_size));

    if let Some(ref user_agent) = ctx.config.hub.user_agent {
        builder = builder.agent(Arc::new(StaticUserAgent::new(user_agent.clone())));
    }

    builder
        .build()
        .map_err(|e| format!("Failed to set up hub client: {}", e))
}

/// Handle the tags command (list tag records for a repository)
pub async fn handle_tags(
    ctx: &AppContext,
    repository: &str,
    page_size: Option<u32>,
    format: OutputFormat,
    quiet: bool,
    digest: Option<&str>,
) {
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("Listing tags for: {}", repository),
    );

    // Reject a malformed digest filter before going to the network
    let digest_filter = match digest {
        Some(raw) => match Digest::from_str(raw) {
            Ok(parsed) => Some(parsed.to_string()),
            Err(e) => {
                format::error(ctx, &e.to_string());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let hub = match build_hub(ctx, page_size) {
        Ok(hub) => hub,
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    };

    let pb = format::spinner(ctx, &format!("Querying {}...", ctx.config.hub.base_url));
    let result = hub.list_tags(repository).await;
    pb.finish_and_clear();

    let records = match result {
        Ok(records) => records,
        Err(e) => {
            format::error(ctx, &format!("Failed to list tags for '{}': {}", repository, e));
            std::process::exit(1);
        }
    };

    let records: Vec<TagRecord> = match digest_filter {
        Some(ref digest) => records
            .into_iter()
            .filter(|record| record.digest.as_deref() == Some(digest.as_str()))
            .collect(),
        None => records,
    };

    // Handle quiet mode
    if quiet {
        for record in &records {
            println!("{}", record.name);
        }
        return;
    }

    // Handle empty results
    if records.is_empty() {
        println!("No tags found for '{}'.", repository);
        return;
    }

    // Format output
    match format {
        OutputFormat::Pretty => {
            let rows: Vec<TagRow> = records.iter().map(TagRow::from_record).collect();
            let table = Table::new(&rows).with(Style::empty()).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                format::error(ctx, &format!("Error formatting JSON: {}", e));
                std::process::exit(1);
            }
        },
        OutputFormat::Yaml => match serde_yaml::to_string(&records) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                format::error(ctx, &format!("Error formatting YAML: {}", e));
                std::process::exit(1);
            }
        },
    }
}
