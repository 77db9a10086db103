//! Display functions for command results

use super::formatters::{clue_summary, frequency_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, QueryMatch, QueryResult, WordAnalysis};
use colored::Colorize;

const WORDS_PER_LINE: usize = 8;

fn print_matches(matches: &[QueryMatch]) {
    if matches.iter().all(|m| m.score.is_none()) {
        for chunk in matches.chunks(WORDS_PER_LINE) {
            let line: Vec<String> = chunk.iter().map(|m| m.word.to_uppercase()).collect();
            println!("   {}", line.join("  "));
        }
        return;
    }

    for (i, m) in matches.iter().enumerate() {
        let score = m.score.map_or_else(String::new, |s| s.to_string());
        println!(
            "   {:>3}. {}  {}",
            i + 1,
            m.word.to_uppercase().bright_yellow().bold(),
            score.bright_black()
        );
    }
}

/// Print the result of a clue query
pub fn print_query_result(result: &QueryResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    let summary = clue_summary(&result.clues);
    if summary.is_empty() {
        println!("No clues given");
    }
    for line in &summary {
        println!("{line}");
    }
    println!("{}", "─".repeat(60).cyan());

    if let Some(err) = &result.contradiction {
        println!("{}", format!("⚠️  {err}").yellow().bold());
    }

    if verbose {
        let d = &result.diagnostics;
        println!(
            "  Candidates: {} → {} (known) → {} (misplaced) → {} (excluded)",
            d.corpus, d.after_known, d.after_misplaced, d.after_excluded
        );
    }

    if result.total_matches == 0 {
        println!("\n{}", "❌ No words match these clues".red().bold());
        return;
    }

    println!(
        "\n🎯 {} matching word{}:",
        result.total_matches.to_string().green().bold(),
        if result.total_matches == 1 { "" } else { "s" }
    );
    print_matches(&result.matches);

    if result.truncated {
        println!(
            "{}",
            format!(
                "   … {} more not shown (too many results, add clues to narrow)",
                result.total_matches - result.matches.len()
            )
            .bright_black()
        );
    } else if result.matches.len() < result.total_matches {
        println!(
            "{}",
            format!(
                "   … {} more not shown (raise --limit to see them)",
                result.total_matches - result.matches.len()
            )
            .bright_black()
        );
    }
}

/// Print the best opening guesses
pub fn print_openers(openers: &[QueryMatch]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENING GUESSES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();
    print_matches(openers);
}

/// Print the letter frequency table
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} words",
        "LETTER FREQUENCY:".bright_cyan().bold(),
        result.word_count.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for stat in &result.letters {
        println!(
            "   {}  [{}] {:5} ({:5.1}%)",
            stat.letter.to_ascii_uppercase().to_string().bold(),
            frequency_bar(stat.share, 30).green(),
            stat.count,
            stat.share * 100.0
        );
    }
}

/// Print how one word scores
pub fn print_word_analysis(result: &WordAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Score {} (rank {} of {})",
        result.score.to_string().bright_yellow().bold(),
        result.rank,
        result.total_words
    );
    for &(letter, count) in &result.contributions {
        println!("   {}  +{count}", letter.to_ascii_uppercase());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Filtering:".bright_cyan().bold());
    println!("   Queries:            {}", result.rounds);
    println!("   Word list size:     {}", result.corpus_size);
    println!(
        "   Average survivors:  {}",
        format!("{:.1}", result.average_survivors)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average reduction:  {:.1}x",
        result.average_reduction
    );
    println!(
        "   Fewest survivors:   {}",
        format!("{}", result.fewest_survivors).green()
    );
    println!(
        "   Most survivors:     {}",
        format!("{}", result.most_survivors).yellow()
    );

    let rate = result.survival_rate() * 100.0;
    let rate_text = format!("{rate:.1}%");
    println!(
        "   Secret survived:    {}",
        if result.secrets_survived == result.rounds {
            rate_text.green().bold()
        } else {
            rate_text.red().bold()
        }
    );

    println!("\n⏱️  {}", "Timing:".bright_cyan().bold());
    println!("   Time taken:         {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:     {:.1}", result.queries_per_second);
}
