//! Plain-text rendering of simulation results.
//!
//! Pure presentation: nothing here feeds back into scheduling.

use crate::models::{Process, Timeline};

/// Renders a per-process metrics table followed by the averages.
///
/// ```text
/// Process | AT | BT | CT | TAT | WT
///      P1 |  0 |  5 |  5 |   5 |  0
///      P2 |  1 |  3 |  8 |   7 |  4
///
/// Average TAT = 6.00
/// Average WT = 2.00
/// ```
///
/// Unfinished processes show `-` and are left out of the averages.
pub fn results_table(processes: &[Process]) -> String {
    let mut out = String::from("Process | AT | BT | CT | TAT | WT\n");
    for p in processes {
        out.push_str(&format!(
            "{:>7} | {:>2} | {:>2} | {:>2} | {:>3} | {:>2}\n",
            p.id,
            p.arrival,
            p.burst,
            cell(p.completion),
            cell(p.turnaround),
            cell(p.waiting),
        ));
    }

    let finished: Vec<&Process> = processes.iter().filter(|p| p.is_finished()).collect();
    if !finished.is_empty() {
        let n = finished.len() as f64;
        let total = |value: fn(&Process) -> Option<i64>| {
            finished.iter().filter_map(|p| value(p)).map(i128::from).sum::<i128>() as f64
        };
        let avg_tat = total(|p| p.turnaround) / n;
        let avg_wt = total(|p| p.waiting) / n;
        out.push_str(&format!(
            "\nAverage TAT = {avg_tat:.2}\nAverage WT = {avg_wt:.2}\n"
        ));
    }
    out
}

/// Renders the timeline as a one-line bar with the time axis underneath.
///
/// ```text
/// | P1 | Idle | P2 |
/// 0    5      7    9
/// ```
pub fn gantt_text(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return String::new();
    }

    let mut bar = String::new();
    let mut axis = String::new();
    for slice in timeline {
        let label = format!(" {} ", slice.occupant);
        let width = label.len() + 1;
        bar.push('|');
        bar.push_str(&label);
        axis.push_str(&format!("{:<width$}", slice.start));
    }
    bar.push('|');
    axis.push_str(&timeline.end().to_string());

    format!("{bar}\n{axis}\n")
}

fn cell(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
