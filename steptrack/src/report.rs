//! Human-readable rendering of every pipeline report.
//!
//! All writers take `&mut impl Write` so the binary can target stdout while
//! tests capture into a `Vec<u8>`.

use std::io::Write;

use anyhow::Result;

use crate::core::layout::RowLayout;
use crate::core::script::{StepOutcome, StepReport};
use crate::core::stats::Stats;

pub fn write_banner(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Daily step tracker")?;
    writeln!(
        out,
        "Reading daily step counts from file and exercising a growable array...\n"
    )?;
    Ok(())
}

/// Heading followed by `values` in fixed-width rows.
pub fn write_listing(
    out: &mut impl Write,
    heading: &str,
    values: &[i32],
    layout: RowLayout,
) -> Result<()> {
    writeln!(out, "{heading}")?;
    write!(out, "{}", layout.render(values))?;
    Ok(())
}

pub fn write_stats(out: &mut impl Write, stats: &Stats) -> Result<()> {
    writeln!(out, "\n--- Stats ---")?;
    writeln!(
        out,
        "Days (size): {} (capacity: {})",
        stats.count, stats.capacity
    )?;
    if let (Some(front), Some(back)) = (stats.front, stats.back) {
        writeln!(out, "Front (day 1): {front}")?;
        writeln!(out, "Back  (day {}): {back}", stats.count)?;
    }
    writeln!(out, "Sum: {}", stats.sum)?;
    writeln!(out, "Avg: {}", stats.mean_display())?;
    if let Some(min) = stats.min {
        writeln!(out, "Min: {} (index {})", min.value, min.index)?;
    }
    if let Some(max) = stats.max {
        writeln!(out, "Max: {} (index {})", max.value, max.index)?;
    }
    let preview = if stats.preview.is_empty() {
        "(none)".to_string()
    } else {
        stats
            .preview
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    writeln!(out, "Preview via get(): {preview}")?;
    Ok(())
}

/// One line per script step; the baseline swap also lists the baseline preview.
pub fn write_script(out: &mut impl Write, reports: &[StepReport], layout: RowLayout) -> Result<()> {
    writeln!(out, "\n--- Mutation script ---")?;
    for report in reports {
        let detail = match &report.outcome {
            StepOutcome::Skipped => "skipped (precondition not met)".to_string(),
            StepOutcome::Reserved { additional } => format!("requested {additional} more slots"),
            StepOutcome::Appended { first, second } => format!("pushed {first}, {second}"),
            StepOutcome::Popped { value } => format!("popped {value}"),
            StepOutcome::EdgesBumped { front, back } => format!("front={front} back={back}"),
            StepOutcome::Inserted { index, value } => format!("inserted {value} at index {index}"),
            StepOutcome::Removed { index, value } => format!("removed {value} from index {index}"),
            StepOutcome::Swapped { baseline_preview } => {
                format!("baseline live, first {}:", baseline_preview.len())
            }
            StepOutcome::Shrunk => "trimmed toward size".to_string(),
        };
        writeln!(
            out,
            "[{}] {detail} | size={} capacity={}",
            report.step.label(),
            report.len,
            report.capacity
        )?;
        if let StepOutcome::Swapped { baseline_preview } = &report.outcome {
            write!(out, "{}", layout.render(baseline_preview))?;
        }
    }
    Ok(())
}

/// Top-K listing; writes nothing when `values` is empty.
pub fn write_top_k(out: &mut impl Write, values: &[i32], layout: RowLayout) -> Result<()> {
    if values.is_empty() {
        return Ok(());
    }
    write_listing(
        out,
        &format!(
            "\nTop-{} (sorted copy, original order preserved):",
            values.len()
        ),
        values,
        layout,
    )
}

pub fn write_done(out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nDone. Program completed successfully.")?;
    Ok(())
}
