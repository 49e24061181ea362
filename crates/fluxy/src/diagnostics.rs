//! Configuration diagnostics for the `check` subcommand.

use fluxy_core::{FluxyConfig, TopicStrategy};

/// Render a resolved configuration as a human-readable summary.
///
/// Secrets are reported by presence only, never echoed.
pub fn describe(config: &FluxyConfig) -> String {
    let mut out = String::new();

    out.push_str("site:\n");
    out.push_str(&format!(
        "  endpoint: {}\n",
        present_or(&config.site.endpoint, "(not set)")
    ));
    out.push_str(&format!("  user: {}\n", present_or(&config.site.user, "(not set)")));
    out.push_str(&format!(
        "  app password: {}\n",
        if config.site.app_password.is_empty() {
            "missing"
        } else {
            "present"
        }
    ));
    out.push_str(&format!("  category: {}\n", config.site.category));

    out.push_str("gateway:\n");
    out.push_str(&format!(
        "  api key: {}\n",
        if config.gateway.api_key.is_empty() {
            "missing"
        } else {
            "present"
        }
    ));
    for (index, model) in config.gateway.models.iter().enumerate() {
        out.push_str(&format!("  model[{index}]: {model}\n"));
    }

    out.push_str("topics:\n");
    let strategy = match config.topics.strategy {
        TopicStrategy::Static => "static",
        TopicStrategy::Model => "model",
    };
    out.push_str(&format!("  strategy: {strategy}\n"));
    out.push_str(&format!("  fallback: {}\n", config.topics.fallback));

    out.push_str("image:\n");
    for service in &config.image.services {
        out.push_str(&format!(
            "  service: {} ({})\n",
            service.name, service.endpoint
        ));
    }
    out.push_str(&format!(
        "  {}x{}, {} attempts/service, min {} bytes\n",
        config.image.width,
        config.image.height,
        config.image.attempts_per_service,
        config.image.min_bytes
    ));

    out
}

fn present_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
