//! Console rendering of both sections.

use crate::parallel::ParallelOutcome;
use crate::sequential::SequentialOutcome;
use colored::Colorize;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

struct Labels {
    parallel_header: &'static str,
    sequential_header: &'static str,
    odd_sum: &'static str,
    even_sum: &'static str,
    total: &'static str,
    elapsed: &'static str,
    seconds: &'static str,
}

const ENGLISH: Labels = Labels {
    parallel_header: "Parallel version",
    sequential_header: "Single-threaded version",
    odd_sum: "Odd-index sum",
    even_sum: "Even-index sum",
    total: "Total sum",
    elapsed: "Elapsed time",
    seconds: "s",
};

const RUSSIAN: Labels = Labels {
    parallel_header: "Параллельная версия",
    sequential_header: "Однопоточная версия",
    odd_sum: "Сумма для нечётных чисел",
    even_sum: "Сумма для чётных чисел",
    total: "Общая сумма",
    elapsed: "Время выполнения",
    seconds: "сек",
};

impl Language {
    fn labels(self) -> &'static Labels {
        match self {
            Language::En => &ENGLISH,
            Language::Ru => &RUSSIAN,
        }
    }

    pub fn parallel_header(self) -> &'static str {
        self.labels().parallel_header
    }

    pub fn sequential_header(self) -> &'static str {
        self.labels().sequential_header
    }
}

/// Seconds with exactly three decimal places.
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64())
}

// Pads every "label:" to the widest one in the section so values line up.
fn align(rows: &[(&str, String)]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count() + 1)
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(label, value)| format!("{:<width$} {}", format!("{}:", label), value, width = width))
        .collect()
}

pub fn parallel_lines(outcome: &ParallelOutcome, language: Language) -> Vec<String> {
    let labels = language.labels();
    align(&[
        (labels.odd_sum, outcome.odd_sum.to_string()),
        (labels.even_sum, outcome.even_sum.to_string()),
        (labels.total, outcome.total().to_string()),
        (
            labels.elapsed,
            format!("{} {}", format_seconds(outcome.elapsed), labels.seconds),
        ),
    ])
}

pub fn sequential_lines(outcome: &SequentialOutcome, language: Language) -> Vec<String> {
    let labels = language.labels();
    align(&[
        (labels.total, outcome.total.to_string()),
        (
            labels.elapsed,
            format!("{} {}", format_seconds(outcome.elapsed), labels.seconds),
        ),
    ])
}

pub fn print_parallel(outcome: &ParallelOutcome, language: Language) {
    println!("{}", language.parallel_header().bold());
    for line in parallel_lines(outcome, language) {
        println!("{}", line);
    }
}

pub fn print_sequential(outcome: &SequentialOutcome, language: Language) {
    println!("{}", language.sequential_header().bold());
    for line in sequential_lines(outcome, language) {
        println!("{}", line);
    }
}
