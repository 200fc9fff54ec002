use std::io::Read;

use tracing::debug;

use crate::answers::AnswerStore;
use crate::bank::{SectionId, QUESTIONS};
use crate::Error;

/// Column layout of an answer sheet: `id`, then every question id of every
/// section in catalog order.
pub fn columns() -> Vec<(SectionId, u32)> {
    SectionId::ALL
        .iter()
        .flat_map(|&section| {
            QUESTIONS
                .question_ids(section)
                .into_iter()
                .map(move |id| (section, id))
        })
        .collect()
}

/// Reads answer sheets from CSV.
///
/// The first row is a header. Each following row holds the respondent id,
/// 15 Likert values, 15 option indexes (0-based) and 6 slider values. An
/// empty cell leaves that question unanswered. A row that cannot be
/// recorded fails on its own; the iterator moves on to the next.
pub fn read_bulk<R: Read>(
    reader: R,
) -> impl Iterator<Item = Result<(String, AnswerStore), Error>> {
    let columns = columns();
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_records()
        .enumerate()
        .map(move |(index, record)| parse_row(index + 1, &record?, &columns))
}

fn parse_row(
    row: usize,
    record: &csv::StringRecord,
    columns: &[(SectionId, u32)],
) -> Result<(String, AnswerStore), Error> {
    if record.len() != columns.len() + 1 {
        return Err(Error::IllegalRow {
            row,
            reason: format!(
                "expected {} columns, found {}",
                columns.len() + 1,
                record.len()
            ),
        });
    }
    let id = record.get(0).unwrap_or_default().to_string();
    let mut store = AnswerStore::default();
    for (cell, &(section, question)) in record.iter().skip(1).zip(columns) {
        if cell.is_empty() {
            continue;
        }
        let value = cell.parse::<f64>().map_err(|_| Error::IllegalRow {
            row,
            reason: format!("{section} question {question}: '{cell}' is not a number"),
        })?;
        store.record_answer(section, question, value)?;
    }
    debug!(row, %id, complete = store.is_complete(), "read answer sheet");
    Ok((id, store))
}
