//! Interactive mode for domain-expiry

use crate::config::Settings;
use crate::models::ResultSet;
use crate::output::{print_error, print_results_table};
use crate::runner::ExpiryRunner;
use crate::utils::domain::{is_valid_domain, normalize_domain};
use crate::utils::progress::{expiry_line, probe_spinner};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

/// Interactive session state
pub struct InteractiveSession {
    theme: ColorfulTheme,
    runner: ExpiryRunner,
    results: ResultSet,
}

impl InteractiveSession {
    pub fn new(settings: &Settings) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            runner: ExpiryRunner::from_settings(settings),
            results: ResultSet::new(),
        }
    }

    /// Run the interactive session until a blank domain is entered
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.print_welcome();

        loop {
            let input: String = Input::with_theme(&self.theme)
                .with_prompt("Domain to check (blank to exit)")
                .allow_empty(true)
                .interact_text()?;

            let domain = normalize_domain(&input);
            if domain.is_empty() {
                println!("\n{}", style("Goodbye!").cyan());
                break;
            }

            if !is_valid_domain(&domain) {
                print_error("Invalid domain format");
                continue;
            }

            self.check_domain(&domain).await;
            println!();
        }

        Ok(())
    }

    async fn check_domain(&mut self, domain: &str) {
        let spinner = probe_spinner(domain);
        let outcome = self.runner.check(domain).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(result) => {
                println!("{}", expiry_line("SSL", result.ssl_expiry));
                println!("{}", expiry_line("WHOIS", result.whois_expiry));
                self.results.upsert(result);
                println!();
                print_results_table(self.results.as_slice());
            }
            Err(e) => print_error(&e.to_string()),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", style("╔═══════════════════════════════════════╗").cyan());
        println!("{}", style("║           Domain Expiry Check         ║").cyan());
        println!("{}", style("║   TLS certificate & WHOIS expiry      ║").cyan());
        println!("{}", style("╚═══════════════════════════════════════╝").cyan());
        println!();
    }
}
