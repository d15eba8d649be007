use crate::context::{AppContext, VerbosityLevel};
use crate::format::{self, Formattable, OutputFormat};
use libhubtag::{
    BrowserAgentPool, Hub, NoUserAgent, ResolvedImage, StaticUserAgent, UserAgentProvider,
};
use std::sync::Arc;

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;

impl Formattable for ResolvedImage {
    fn format_pretty(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Image: {}\n", self.image));
        output.push_str(&format!("Digest: {}\n", self.digest));
        output.push_str(&format!("Tags: {}\n", self.tags.join(", ")));
        output
    }
}

/// Picks the user-agent source from flags, falling back to the config file.
fn agent_from_options(
    ctx: &AppContext,
    user_agent: Option<&str>,
    spoof: bool,
) -> Arc<dyn UserAgentProvider> {
    if spoof {
        Arc::new(BrowserAgentPool::default())
    } else if let Some(value) = user_agent {
        Arc::new(StaticUserAgent::new(value))
    } else if let Some(ref value) = ctx.config.hub.user_agent {
        Arc::new(StaticUserAgent::new(value.clone()))
    } else {
        Arc::new(NoUserAgent)
    }
}

fn build_hub(
    ctx: &AppContext,
    page_size: Option<u32>,
    user_agent: Option<&str>,
    spoof: bool,
) -> Result<Hub, String> {
    Hub::builder()
        .base_url(ctx.config.hub.base_url.clone())
        .page_size(page_size.unwrap_or(ctx.config.hub.page_size))
        .agent(agent_from_options(ctx, user_agent, spoof))
        .build()
        .map_err(|e| format!("Failed to set up hub client: {}", e))
}

/// Handle the resolve command: fetch tags, find the `latest` digest, and
/// print every tag sharing it.
pub async fn handle_resolve(
    ctx: &AppContext,
    repository: &str,
    page_size: Option<u32>,
    format: OutputFormat,
    user_agent: Option<&str>,
    spoof: bool,
) {
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("Resolving latest digest for: {}", repository),
    );

    let hub = match build_hub(ctx, page_size, user_agent, spoof) {
        Ok(hub) => hub,
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    };

    let pb = format::spinner(ctx, &format!("Querying {}...", ctx.config.hub.base_url));
    let result = hub.resolve_latest(repository).await;
    pb.finish_and_clear();

    let resolved = match result {
        Ok(resolved) => resolved,
        Err(e) => {
            format::error(ctx, &format!("Failed to resolve '{}': {}", repository, e));
            std::process::exit(1);
        }
    };

    match format::format_output(&resolved, format) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}
