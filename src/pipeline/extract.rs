//! Flattens a discovery workbook into tagged question/answer blocks.
//!
//! Every sheet is read as a table whose first non-empty row is the header.
//! Empty rows and empty columns are dropped, after which the second and third
//! remaining columns hold the question and the answer.

use std::fmt;
use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto_from_rs};

use crate::error::AppError;
use crate::telemetry::metrics::DISCOVERY_BLOCKS;

/// Sheets whose name contains this marker are administrative tabs.
pub const CONTROL_TAB_MARKER: &str = "SalesDesk";

const QUESTION_COLUMN: usize = 1;
const ANSWER_COLUMN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryBlock {
    pub sheet_name: String,
    pub question: String,
    pub answer: String,
}

impl fmt::Display for DiscoveryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Pergunta: {}\nResposta: {}",
            self.sheet_name, self.question, self.answer
        )
    }
}

/// Extracts the workbook and renders the blocks as one text, blocks separated
/// by a blank line. A workbook without qualifying rows yields an empty string.
pub fn extract(workbook: &[u8]) -> Result<String, AppError> {
    let blocks = extract_blocks(workbook)?;
    Ok(render_blocks(&blocks))
}

pub fn render_blocks(blocks: &[DiscoveryBlock]) -> String {
    blocks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[tracing::instrument(
    name = "pipeline_stage extract",
    skip(workbook),
    fields(
        pipeline.stage = "extract",
        workbook.bytes = workbook.len(),
        discovery.sheets,
        discovery.blocks,
    )
)]
pub fn extract_blocks(workbook: &[u8]) -> Result<Vec<DiscoveryBlock>, AppError> {
    let mut sheets = open_workbook_auto_from_rs(Cursor::new(workbook))
        .map_err(|e| AppError::MalformedWorkbook(e.to_string()))?;

    let sheet_names: Vec<String> = sheets
        .sheet_names()
        .into_iter()
        .filter(|name| !is_control_tab(name))
        .collect();

    let mut blocks = Vec::new();
    for name in &sheet_names {
        let range = sheets
            .worksheet_range(name)
            .map_err(|e| AppError::MalformedWorkbook(format!("sheet '{name}': {e}")))?;
        let sheet_blocks = blocks_from_rows(name, range.rows());
        tracing::debug!(sheet = %name, blocks = sheet_blocks.len(), "sheet extracted");
        blocks.extend(sheet_blocks);
    }

    let span = tracing::Span::current();
    span.record("discovery.sheets", sheet_names.len());
    span.record("discovery.blocks", blocks.len());
    DISCOVERY_BLOCKS.record(blocks.len() as f64, &[]);

    Ok(blocks)
}

pub fn is_control_tab(sheet_name: &str) -> bool {
    sheet_name.contains(CONTROL_TAB_MARKER)
}

fn blocks_from_rows<'a, I>(sheet_name: &str, rows: I) -> Vec<DiscoveryBlock>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows
        .into_iter()
        .filter(|row| !row.iter().all(is_blank_cell));

    // header row
    if rows.next().is_none() {
        return Vec::new();
    }
    let rows: Vec<&[Data]> = rows.collect();

    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let columns: Vec<usize> = (0..width)
        .filter(|&col| {
            rows.iter()
                .any(|row| row.get(col).is_some_and(|cell| !is_blank_cell(cell)))
        })
        .collect();

    let (Some(&question_col), Some(&answer_col)) =
        (columns.get(QUESTION_COLUMN), columns.get(ANSWER_COLUMN))
    else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| {
            let question = cell_text(row.get(question_col)?)?;
            let answer = cell_text(row.get(answer_col)?)?;
            Some(DiscoveryBlock {
                sheet_name: sheet_name.to_string(),
                question,
                answer,
            })
        })
        .collect()
}

fn is_blank_cell(cell: &Data) -> bool {
    match cell {
        Data::Empty | Data::Error(_) => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

fn cell_text(cell: &Data) -> Option<String> {
    if is_blank_cell(cell) {
        return None;
    }
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::DateTime(dt) => excel_datetime_text(dt),
        other => other.to_string().trim().to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Date cells as `2024-03-01 00:00:00`, time-only cells as `18:00:00` and
/// durations as `h:mm:ss`. Falls back to the serial value when out of range.
fn excel_datetime_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return match dt.as_duration() {
            Some(duration) => {
                let secs = duration.num_seconds();
                format!("{}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
            }
            None => dt.as_f64().to_string(),
        };
    }

    match dt.as_datetime() {
        // serial values below one day carry no date part
        Some(datetime) if (0.0..1.0).contains(&dt.as_f64()) => {
            datetime.format("%H:%M:%S").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.as_f64().to_string(),
    }
}
