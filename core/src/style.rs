use std::collections::BTreeMap;

use colored::{Color, ColoredString, Colorize};
use crossterm::terminal;

use crate::testing::{JudgeCode, TestOutcome, Verdict};

const BOLD_LINE: &str = "━";
const THIN_LINE: &str = "─";

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false
    };
    matches!(v.as_str(), "truecolor" | "24bit")
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for JudgeCode {
    fn color(&self) -> Color {
        use JudgeCode::*;
        if !self::is_truecolor_supported() {
            return match self {
                AC => Color::Green,
                WA => Color::Yellow,
                RE => Color::Magenta,
                TLE => Color::Red,
            };
        }
        let (r, g, b) = match self {
            AC => (30, 180, 40),
            WA => (210, 138, 4),
            RE => (171, 40, 200),
            TLE => (220, 42, 42),
        };
        Color::TrueColor { r, g, b }
    }
}

pub fn judge_icon(judge: JudgeCode) -> ColoredString {
    let fg = if is_truecolor_supported() {
        Color::TrueColor {
            r: 255,
            g: 255,
            b: 255,
        }
    } else {
        Color::BrightBlack
    };
    format!(" {:<3} ", judge)
        .on_color(judge.color())
        .bold()
        .color(fg)
}

pub fn sample_name(index: usize) -> String {
    format!("Sample #{}", index)
}

pub fn outcome_line(res: &TestOutcome) -> String {
    format!(
        "{} ... {} [{}ms]",
        self::sample_name(res.index),
        self::judge_icon(res.judge),
        res.execution_time.as_millis(),
    )
}

pub fn print_verdict_summary(verdict: &Verdict) {
    let bar = "-".repeat(5);

    let num_total = verdict.outcomes.len();
    let num_passed = verdict.num_passed();

    if verdict.passed() {
        let msg = format!("All {} samples passed ✨", num_total);
        println!("{} {} {}", bar, msg.green(), bar);
        return;
    }

    let count = verdict
        .outcomes
        .iter()
        .filter(|r| r.judge != JudgeCode::AC)
        .fold(BTreeMap::<String, (JudgeCode, usize)>::new(), |mut m, r| {
            m.entry(r.judge.to_string()).or_insert((r.judge, 0)).1 += 1;
            m
        });
    let detail_msg = count
        .values()
        .map(|&(judge, cnt)| {
            format!(
                "{}{}{}",
                self::judge_icon(judge),
                "x".dimmed(),
                cnt.to_string().bold().bright_white(),
            )
        })
        .collect::<Vec<String>>()
        .join(", ");

    let summary_msg = if num_passed > 0 {
        format!("{}/{} samples failed 💣", num_total - num_passed, num_total)
    } else {
        format!("All {} samples failed 💀", num_total)
    };
    println!("{} {} ({}) {}", bar, summary_msg.bright_red(), detail_msg, bar);
}

fn print_sub_title(s: &str, cols: usize) {
    println!(
        "{}{}",
        s.cyan().bold(),
        THIN_LINE
            .repeat(cols.saturating_sub(s.len() + 1))
            .bright_black(),
    )
}

fn print_lines(text: &str) {
    if text.is_empty() {
        println!("{}", "<EMPTY>".magenta().dimmed());
        return;
    }
    let lines: Vec<_> = text.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim_end();
        print!("{}", trimmed);

        let num_trailing_whitespace = line.len() - trimmed.len();
        if num_trailing_whitespace > 0 {
            print!(
                "{}{}",
                " ".repeat(num_trailing_whitespace).on_red(),
                "(Trailing whitespace)".bright_red().bold()
            );
        }
        if i + 1 == lines.len() && !text.ends_with('\n') {
            print!("{}", " Missing new line ".on_yellow().black().bold());
        }
        println!();
    }
}

pub fn print_outcome_detail(res: &TestOutcome) {
    let cols = terminal::size().map(|(c, _)| c as usize).unwrap_or(40);
    let bold_bar = BOLD_LINE.repeat(cols).blue().bold();

    println!(
        "\n{}: {} [{}ms]\n{}",
        self::sample_name(res.index).color(Color::BrightYellow).bold(),
        self::judge_icon(res.judge),
        res.execution_time.as_millis(),
        bold_bar,
    );

    print_sub_title("[expected]", cols);
    print_lines(&res.expected);

    match &res.output {
        None => {
            print_sub_title("[stdout]", cols);
            println!("{}", "<KILLED: time limit exceeded>".red().dimmed());
        }
        Some(output) => {
            print_sub_title("[stdout]", cols);
            print_lines(&output.stdout);

            if !output.stderr.is_empty() {
                print_sub_title("[stderr]", cols);
                print!("{}", output.stderr);
            }
            match output.status {
                Some(0) => (),
                Some(code) => println!("{}", format!("exit status: {}", code).bright_red()),
                None => println!("{}", "terminated by signal".bright_red()),
            }
        }
    }

    println!("{}", bold_bar);
}
