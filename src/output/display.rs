//! Display functions for command results

use super::formatters::{render_grid, score_bar};
use crate::commands::{BatchStatistics, CurationCandidate, LookupReport, SolveResult, TemplateRank};
use crate::core::Roll;
use crate::solver::CacheLookup;
use crate::templates::TemplateLibrary;
use colored::Colorize;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn print_indented(text: &str) {
    for line in text.lines() {
        println!("   {line}");
    }
}

/// Print the result of solving a roll
pub fn print_solve_result(result: &SolveResult, library: &TemplateLibrary, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.roll.key().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        for search in &result.searches {
            println!(
                "  template {:4} @ threshold {}: {} attempts{}",
                search.template,
                search.threshold,
                search.stats.attempts,
                if search.stats.is_complete() { "" } else { " (capped)" }
            );
        }
    }

    println!();
    let found = result
        .template
        .zip(result.solution.as_ref())
        .zip(result.threshold);
    if let Some(((index, solution), threshold)) = found {
        if let Some(template) = library.get(index) {
            print_indented(&render_grid(template, solution));
        }
        println!(
            "\n{}",
            format!(
                "✅ Template {index} filled at threshold {threshold} in {} attempts",
                result.total_attempts()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ No grid after {} template searches ({} attempts)",
                result.searches.len(),
                result.total_attempts()
            )
            .red()
            .bold()
        );
    }
}

/// Print every grid held for a roll
pub fn print_enumeration(roll: &Roll, lookup: &CacheLookup, library: &TemplateLibrary) {
    header(&format!("GRIDS FOR {}", roll.key().to_uppercase()));

    for (i, placed) in lookup.solutions.iter().enumerate() {
        println!("\n#{} (template {})", i + 1, placed.template);
        if let Some(template) = library.get(placed.template) {
            print_indented(&render_grid(template, &placed.words));
        }
    }

    println!(
        "\n   Grids: {}  Templates tried: {}/{}  Attempts: {}",
        lookup.solutions.len().to_string().bright_yellow().bold(),
        lookup.templates_tried,
        library.len(),
        lookup.attempts
    );
    if lookup.evicted {
        println!("   {}", "Cache entry evicted".yellow());
    }
    if lookup.capped {
        println!(
            "   {}",
            format!("Template {} hit the attempt cap", lookup.templates_tried).yellow()
        );
    }
}

/// Print batch statistics
pub fn print_batch_statistics(stats: &BatchStatistics, top: usize) {
    header("BATCH RESULTS");

    let total = stats.rolls.len();
    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Rolls:            {total}");
    println!(
        "   Solved:           {} {}",
        stats.solved(),
        format!("({:.1}%)", stats.success_rate() * 100.0).green()
    );
    if stats.failed() > 0 {
        println!("   Unsolved:         {}", stats.failed().to_string().red());
    }
    let partial = stats.rolls.iter().filter(|r| r.partial).count();
    if partial > 0 {
        println!("   Capped searches:  {}", partial.to_string().yellow());
    }
    println!("   Total attempts:   {}", stats.total_attempts());
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    let ranked = stats.ranked_rolls();
    if !ranked.is_empty() {
        println!("\n✨ {}", "Easiest rolls:".bright_cyan().bold());
        for report in ranked.iter().take(top) {
            println!(
                "   {}  {} attempts, {} grids",
                report.roll.key().to_uppercase().bright_green(),
                report.attempts_to_first.unwrap_or(0),
                report.solutions
            );
        }
    }

    let words = stats.top_words(top);
    if !words.is_empty() {
        println!("\n🔤 {}", "Most used words:".bright_cyan().bold());
        for (word, uses) in words {
            println!("   {:12} {uses}", word.to_uppercase());
        }
    }
}

/// Print template rankings, best first
pub fn print_template_ranks(ranks: &[TemplateRank], limit: usize) {
    header("TEMPLATE RANKING");

    let best = ranks.first().map_or(0.0, |r| r.score);
    for rank in ranks.iter().take(limit) {
        println!(
            "   {:4}: {} {:6} wins / {:8} attempts ({:.5})",
            rank.template,
            score_bar(rank.score, best, 30).green(),
            rank.successes,
            rank.attempts,
            rank.score
        );
    }
}

/// Print the word review queue
pub fn print_curation(candidates: &[CurationCandidate]) {
    header("WORDS TO REVIEW");

    if candidates.is_empty() {
        println!("\n   {}", "Nothing to review".green());
        return;
    }
    for candidate in candidates {
        println!(
            "   {:12} used {} times",
            candidate.word.to_uppercase().bright_yellow(),
            candidate.uses
        );
    }
}

/// Print a one-line summary per cached roll
pub fn print_lookup_reports(reports: &[LookupReport], library: &TemplateLibrary) {
    header("CACHE LOOKUP");

    for report in reports {
        let lookup = &report.lookup;
        let status = if lookup.evicted {
            "evicted".red()
        } else if lookup.capped {
            "capped".yellow()
        } else if lookup.solutions.is_empty() {
            "none".red()
        } else if lookup.exhausted {
            "complete".green()
        } else {
            "partial".yellow()
        };
        println!(
            "   {}  {:4} grids  {:4}/{} templates  {:8} attempts  {status}",
            report.roll.key().to_uppercase(),
            lookup.solutions.len(),
            lookup.templates_tried,
            library.len(),
            lookup.attempts
        );
    }

    let spent: u64 = reports.iter().map(|r| r.lookup.attempts).sum();
    println!("\n   Attempts this run: {}", spent.to_string().bright_yellow());
}
