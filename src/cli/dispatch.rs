// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;
use std::path::{Path, PathBuf};

use console::style;

use crate::commit::CommitMessage;
use crate::config::{example_config, LintConfig};
use crate::error::{ConfigError, LintError, Result, ResultExt, ValidationError};
use crate::rules::{RuleEngine, ValidationResult};

use super::args::{CheckArgs, Cli, Commands, InitArgs, LintArgs, OutputFormat};

/// Line git writes above the diff in `commit --verbose`.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command.clone() {
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
        command => {
            let config = load_config(&cli)?;
            console::set_colors_enabled(config.ui.color && console::colors_enabled());

            match command {
                Commands::Lint(args) => run_lint(&cli, config, args),
                Commands::Check(args) => run_check(&cli, config, args),
                Commands::Rules => run_rules(&cli, config),
                Commands::Init(_) | Commands::Version => Ok(()),
            }
        }
    }
}

fn load_config(cli: &Cli) -> Result<LintConfig> {
    match cli.config {
        Some(ref config_path) => LintConfig::load_from(config_path),
        None => LintConfig::load(),
    }
}

/// Run the lint command.
fn run_lint(cli: &Cli, config: LintConfig, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let input = match (&args.message, &args.file) {
        (Some(message), _) => message.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let message = if args.json {
        let value: serde_json::Value =
            serde_json::from_str(&input).context("Failed to parse JSON input")?;
        CommitMessage::from_value(&value)?
    } else {
        CommitMessage::parse(strip_git_comments(&input))?
    };

    let engine = RuleEngine::new(config);
    let result = engine.validate(&message);
    result.print(cli.format);

    finish(std::slice::from_ref(&result), cli)
}

/// Drop git's comment lines and anything below the scissors line.
fn strip_git_comments(text: &str) -> String {
    text.lines()
        .take_while(|line| *line != SCISSORS)
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the check command.
fn run_check(cli: &Cli, config: LintConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::new(config);
    let results = if args.is_range() {
        engine.check_range(&args.target)?
    } else {
        vec![engine.check_commit(&args.target)?]
    };

    match cli.format {
        Some(OutputFormat::Json) => {
            let json: Vec<_> = results.iter().map(ValidationResult::to_json).collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            for result in &results {
                result.print(cli.format);
            }
            if results.len() > 1 {
                let failing = results
                    .iter()
                    .filter(|result| !result.is_valid())
                    .count();
                println!(
                    "\n{} commits checked, {} failing",
                    results.len(),
                    failing
                );
            }
        }
    }

    finish(&results, cli)
}

/// Turn results into the exit status.
fn finish(results: &[ValidationResult], cli: &Cli) -> Result<()> {
    let errors: usize = results.iter().map(|r| r.errors.len()).sum();
    let warnings: usize = results.iter().map(|r| r.warnings.len()).sum();

    if errors > 0 || (cli.strict && warnings > 0) {
        Err(LintError::Validation(ValidationError::Failed { errors, warnings }))
    } else {
        Ok(())
    }
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: LintConfig) -> Result<()> {
    let engine = RuleEngine::new(config);

    if cli.format == Some(OutputFormat::Json) {
        let rules: Vec<_> = engine
            .rules()
            .into_iter()
            .map(|(rule, severity)| {
                serde_json::json!({
                    "name": rule,
                    "severity": severity,
                    "description": rule.description(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rules).unwrap_or_default()
        );
        return Ok(());
    }

    for (rule, severity) in engine.rules() {
        let level = format!("{:<8}", severity.as_str());
        let level = match severity {
            crate::config::Severity::Error => style(level).red(),
            crate::config::Severity::Warning => style(level).yellow(),
            crate::config::Severity::Disabled => style(level).dim(),
        };
        println!(
            "{} {:<36} {}",
            level,
            rule.as_str(),
            style(rule.description()).dim()
        );
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cmlint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = PathBuf::from("cmlint.toml");
    write_example_config(&config_path, args.force)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    Ok(())
}

fn write_example_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(LintError::Config(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        }));
    }

    std::fs::write(path, example_config()).map_err(|e| LintError::WithContext {
        context: "init".to_string(),
        message: format!("Failed to write configuration: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_strip_git_comments() {
        let text = "core: add parser\n# Please enter the commit message\n\nBody.\n";
        assert_eq!(strip_git_comments(text), "core: add parser\n\nBody.");
    }

    #[test]
    fn test_strip_git_comments_scissors() {
        let text = format!("core: add parser\n\nBody.\n{}\ndiff --git a/x b/x", SCISSORS);
        assert_eq!(strip_git_comments(&text), "core: add parser\n\nBody.");
    }

    #[test]
    fn test_finish_exit_status() {
        let cli = Cli::parse_from(["cmlint", "rules"]);
        let strict = Cli::parse_from(["cmlint", "--strict", "rules"]);

        let mut result = ValidationResult::new("Add parser");
        assert!(finish(std::slice::from_ref(&result), &cli).is_ok());

        result.warnings.push(crate::rules::ValidationIssue {
            rule: crate::rules::RuleName::TypeEmpty,
            message: "warn".to_string(),
            severity: crate::config::Severity::Warning,
        });
        assert!(finish(std::slice::from_ref(&result), &cli).is_ok());
        assert!(matches!(
            finish(std::slice::from_ref(&result), &strict),
            Err(LintError::Validation(ValidationError::Failed { errors: 0, warnings: 1 }))
        ));
    }

    #[test]
    fn test_write_example_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmlint.toml");

        write_example_config(&path, false).unwrap();
        assert!(path.exists());

        let err = write_example_config(&path, false).unwrap_err();
        assert!(matches!(
            err,
            LintError::Config(ConfigError::AlreadyExists { .. })
        ));
        assert!(write_example_config(&path, true).is_ok());
    }
}
