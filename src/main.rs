//! theme-refactor: Detect and fix deprecated AppColors usage in Flutter
//! widget sources.
//!
//! Scans widget sources for the deprecated `AppColors.*` palette, rewrites
//! usages to theme-aware `context.*Color` accessors, converts
//! `.withOpacity(x)` calls to `.withValues(alpha: x)`, and inserts the theme
//! import where it is missing. Files are processed one at a time; a failure
//! in one file never aborts the batch.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};
use theme_refactor::cli::{Args, Commands};
use theme_refactor::rewriter::{self, DetectionResult, Outcome};
use theme_refactor::{imports, rules, scanner};

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Fix {
            root,
            pattern,
            interactive,
        } => cmd_fix(&root, &pattern, interactive),
        Commands::Detect {
            root,
            pattern,
            json,
            verbose,
        } => cmd_detect(&root, &pattern, json, verbose),
        Commands::Scan { root, pattern } => cmd_scan(&root, &pattern),
        Commands::Rules => cmd_rules(),
    }
}

fn cmd_fix(root: &Path, pattern: &str, interactive: bool) -> Result<()> {
    let files = scanner::collect_widget_files(root, pattern)?;

    if interactive {
        return cmd_fix_interactive(&files);
    }

    let (reports, diagnostics) = rewriter::process_batch(&files, true);
    for report in &reports {
        match &report.outcome {
            Outcome::Updated { .. } => {
                println!("{} {}", "Updated:".green().bold(), report.file.display());
            }
            Outcome::Failed { error } => {
                println!(
                    "{} {}: {}",
                    "Error processing".red().bold(),
                    report.file.display(),
                    error
                );
            }
            Outcome::Unchanged => {}
        }
    }

    print_fix_summary(diagnostics.files_changed);
    Ok(())
}

fn cmd_fix_interactive(files: &[PathBuf]) -> Result<()> {
    let mut updated = 0;

    for file in files {
        match rewriter::plan_file(file) {
            Ok(Some(change)) => {
                println!("\n{} {}", "Would update:".yellow().bold(), file.display());
                if change.import_inserted {
                    println!("  adds {}", imports::THEME_IMPORT.green());
                }

                let confirmed = Confirm::new()
                    .with_prompt("Apply these changes?")
                    .default(true)
                    .interact()?;
                if !confirmed {
                    continue;
                }

                match rewriter::commit_change(&change) {
                    Ok(()) => {
                        println!("{} {}", "Updated:".green().bold(), file.display());
                        updated += 1;
                    }
                    Err(e) => println!(
                        "{} {}: {:#}",
                        "Error processing".red().bold(),
                        file.display(),
                        e
                    ),
                }
            }
            Ok(None) => {}
            Err(e) => println!(
                "{} {}: {:#}",
                "Error processing".red().bold(),
                file.display(),
                e
            ),
        }
    }

    print_fix_summary(updated);
    Ok(())
}

fn print_fix_summary(updated: usize) {
    println!("\nTotal files updated: {}", updated);
    println!(
        "\n{}",
        "Note: Some files may still need manual review for context availability.".yellow()
    );
    println!(
        "{}",
        "Files without BuildContext should use AppColors directly.".yellow()
    );
}

fn cmd_detect(root: &Path, pattern: &str, json_output: bool, verbose: bool) -> Result<()> {
    let files = scanner::collect_widget_files(root, pattern)?;
    if verbose {
        eprintln!(
            "{} Found {} files to scan",
            "info:".blue().bold(),
            files.len()
        );
    }

    let (reports, diagnostics) = rewriter::process_batch(&files, false);
    let changes: Vec<_> = reports
        .into_iter()
        .filter(|r| !matches!(r.outcome, Outcome::Unchanged))
        .collect();
    let result = DetectionResult {
        changes,
        diagnostics,
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_detection_result(&result, verbose);
    }

    Ok(())
}

fn print_detection_result(result: &DetectionResult, verbose: bool) {
    let d = &result.diagnostics;

    if verbose {
        println!(
            "\n{} Files: {}, would update: {}, imports to insert: {}, errors: {}",
            "Diagnostics:".bold(),
            d.files_scanned,
            d.files_changed,
            d.imports_inserted,
            d.errors
        );
    }

    if result.changes.is_empty() {
        println!("{} Nothing to update", "ok:".green().bold());
        return;
    }

    for report in &result.changes {
        match &report.outcome {
            Outcome::Updated { import_inserted } => {
                if *import_inserted {
                    println!(
                        "{} {} {}",
                        "Would update:".yellow().bold(),
                        report.file.display(),
                        "(adds theme import)".dimmed()
                    );
                } else {
                    println!(
                        "{} {}",
                        "Would update:".yellow().bold(),
                        report.file.display()
                    );
                }
            }
            Outcome::Failed { error } => {
                println!(
                    "{} {}: {}",
                    "Error processing".red().bold(),
                    report.file.display(),
                    error
                );
            }
            Outcome::Unchanged => {}
        }
    }

    println!(
        "\n{} Run `theme-refactor fix` to apply changes",
        "hint:".cyan().bold()
    );
}

fn cmd_scan(root: &Path, pattern: &str) -> Result<()> {
    let files = scanner::collect_widget_files(root, pattern)?;

    println!("Would scan {} files:", files.len());
    for file in files {
        println!("  {}", file.display());
    }

    Ok(())
}

fn cmd_rules() -> Result<()> {
    println!("Substitution rules, in application order:");
    for rule in rules::rule_set() {
        println!(
            "  {} {} {}",
            rule.pattern.as_str().dimmed(),
            "->".green(),
            rule.replacement
        );
    }

    Ok(())
}
