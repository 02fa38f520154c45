use crate::core::models::{BuildConfig, BuildMode};
use crate::core::rules::TransformRule;
use colored::*;

/// Human-readable rendering of an assembled configuration
pub struct PackUI;

impl PackUI {
    pub fn banner() {
        println!("\n  {} {}", "FABLE-PACK".bright_cyan().bold(), env!("CARGO_PKG_VERSION").bright_white());
        println!();
    }

    pub fn show_summary(config: &BuildConfig) {
        let mode = match config.mode {
            BuildMode::Production => config.mode.as_str().bright_green().bold(),
            BuildMode::Development => config.mode.as_str().bright_yellow().bold(),
        };
        println!("  {} {}", "mode".bright_black(), mode);
        println!("  {} {}", "devtool".bright_black(), config.devtool);
        println!();

        println!("  {}", "entries".bright_white().bold());
        for (name, path) in &config.entry {
            println!("    {} {}", name.bright_cyan(), path.display().to_string().bright_black());
        }
        println!();

        println!("  {}", "output".bright_white().bold());
        println!(
            "    {} served at {}",
            config.output.path.join(&config.output.filename).display(),
            config.output.public_path.bright_cyan()
        );
        println!();

        let server = &config.dev_server;
        let scheme = if server.https { "https" } else { "http" };
        println!(
            "  {} {}://{}:{}{}",
            "dev server".bright_white().bold(),
            scheme,
            server.host,
            server.port,
            if server.hot { " (hot)".bright_black().to_string() } else { String::new() }
        );
        for rule in &server.proxy {
            println!("    {} → {}", rule.context.bright_cyan(), rule.target);
        }
        println!();

        println!("  {}", "rules".bright_white().bold());
        for (index, rule) in config.module.rules.rules().iter().enumerate() {
            println!("    {} {} {}", index, rule.test.as_str().bright_cyan(), Self::chain(rule));
        }
        println!();

        if config.plugins.is_empty() {
            println!("  {} {}", "plugins".bright_white().bold(), "none".bright_black());
        } else {
            let names: Vec<&str> = config.plugins.iter().map(|p| p.name()).collect();
            println!("  {} {}", "plugins".bright_white().bold(), names.join(", "));
        }
        println!();
    }

    pub fn show_route(resource: &str, routed: Option<(usize, &TransformRule)>) {
        match routed {
            Some((index, rule)) => {
                println!("  {} rule {} {}", resource.bright_cyan(), index, Self::chain(rule));
            }
            None => println!("  {} {}", resource.bright_cyan(), "no rule".bright_black()),
        }
    }

    pub fn show_proxy(request_path: &str, forward: Option<String>) {
        match forward {
            Some(url) => println!("  {} → {}", request_path.bright_cyan(), url),
            None => println!("  {} {}", request_path.bright_cyan(), "not proxied".bright_black()),
        }
    }

    /// Loader chain in application order
    fn chain(rule: &TransformRule) -> String {
        rule.application_order()
            .map(|u| u.loader.as_str())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}
