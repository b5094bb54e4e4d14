use std::io::Write;

use notifi_history_core::clock::Clock;
use notifi_history_core::i18n::Translator;
use notifi_history_core::{DisplayFields, HistoryPresenter, NotificationRecord};
use serde::Serialize;

/// One output line: the record id alongside its display fields.
#[derive(Debug, Serialize)]
pub struct RenderedRecord<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub fields: DisplayFields,
}

/// Present every record and write one JSON object per line to `writer`.
///
/// Returns the number of records written.
pub fn write_records<W, C, T>(
    writer: &mut W,
    records: &[NotificationRecord],
    presenter: &HistoryPresenter<C, T>,
) -> std::io::Result<usize>
where
    W: Write,
    C: Clock,
    T: Translator,
{
    // Every record in a batch is measured against the same instant.
    let now = presenter.now();
    for record in records {
        let line = RenderedRecord {
            id: &record.id,
            fields: presenter.present_at(record, now),
        };
        serde_json::to_writer(&mut *writer, &line)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(records.len())
}
