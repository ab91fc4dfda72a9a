//! Two-state machine that partitions rows into items.
//!
//! While `AccumulatingItem`, continuation rows attach bitstreams to the
//! current item. A row satisfying [`starts_new_item`] drives the machine
//! through `SealingItem`: the current item is handed to the sink and a fresh
//! one is populated from that row. The first row always opens item #1, and
//! the last item is sealed when the input ends.

use tracing::{debug, info};

use saf_ingest::Row;
use saf_model::{Bitstream, BitstreamField, FieldSchema, Item, Result, TITLE_FIELD};

use crate::sink::ItemSink;

/// What consuming one row does to the grouper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// First row: open item #1.
    OpenFirst,
    /// Continuation row: attach its bitstream to the current item.
    AccumulatingItem,
    /// Title row: seal the current item, then open the next one.
    SealingItem,
}

/// Whether `row` closes the current item and opens the next one.
pub fn starts_new_item(row: &Row) -> bool {
    !row.is_blank(TITLE_FIELD)
}

/// Classify a row given whether an item is already open.
pub fn next_step(has_current: bool, row: &Row) -> Step {
    if !has_current {
        Step::OpenFirst
    } else if starts_new_item(row) {
        Step::SealingItem
    } else {
        Step::AccumulatingItem
    }
}

pub struct RowGrouper<'a> {
    schema: &'a FieldSchema,
    current: Option<Item>,
    sealed: u32,
}

impl<'a> RowGrouper<'a> {
    pub fn new(schema: &'a FieldSchema) -> Self {
        Self {
            schema,
            current: None,
            sealed: 0,
        }
    }

    /// Consume one row.
    pub fn push<S: ItemSink>(&mut self, row: &Row, sink: &mut S) -> std::result::Result<Step, S::Error> {
        let step = next_step(self.current.is_some(), row);
        match step {
            Step::OpenFirst => {
                self.current = Some(self.open_item(row)?);
            }
            Step::SealingItem => {
                self.seal(sink)?;
                self.current = Some(self.open_item(row)?);
            }
            Step::AccumulatingItem => {
                if let Some(item) = self.current.as_mut() {
                    attach_bitstream(row, item)?;
                }
            }
        }
        Ok(step)
    }

    /// Seal the last item, if any, and return the number of items produced.
    pub fn finish<S: ItemSink>(mut self, sink: &mut S) -> std::result::Result<u32, S::Error> {
        self.seal(sink)?;
        Ok(self.sealed)
    }

    fn open_item(&self, row: &Row) -> Result<Item> {
        let mut item = Item::new(self.schema);
        for (column, value) in row.cells() {
            if FieldSchema::is_bitstream_field(column) || value.trim().is_empty() {
                continue;
            }
            item.set_field(column, value)?;
        }
        attach_bitstream(row, &mut item)?;
        Ok(item)
    }

    fn seal<S: ItemSink>(&mut self, sink: &mut S) -> std::result::Result<(), S::Error> {
        let Some(item) = self.current.take() else {
            return Ok(());
        };
        self.sealed += 1;
        debug!(
            sequence = self.sealed,
            title = item.title().unwrap_or_default(),
            bitstreams = item.bitstreams().len(),
            "item sealed"
        );
        sink.accept(self.sealed, item)
    }
}

/// Build a bitstream from the row's bitstream columns and attach it when it names a file.
fn attach_bitstream(row: &Row, item: &mut Item) -> Result<()> {
    let mut bitstream = Bitstream::new();
    for field in BitstreamField::ALL {
        if let Some(value) = row.non_blank(field.column()) {
            bitstream.set_field(field.column(), value)?;
        }
    }
    if !item.add_bitstream(bitstream) {
        debug!(row = row.index(), "row has no filename; nothing attached");
    }
    Ok(())
}

/// Feed every row through a grouper, handing each sealed item to `sink`.
///
/// Returns the number of items sealed.
pub fn group_into<'r, I, S>(
    rows: I,
    schema: &FieldSchema,
    sink: &mut S,
) -> std::result::Result<u32, S::Error>
where
    I: IntoIterator<Item = &'r Row>,
    S: ItemSink,
{
    let mut grouper = RowGrouper::new(schema);
    let mut row_count = 0usize;
    for row in rows {
        grouper.push(row, sink)?;
        row_count += 1;
    }
    let items = grouper.finish(sink)?;
    info!(rows = row_count, items, "rows grouped");
    Ok(items)
}

/// Group rows into items, in order.
pub fn group(rows: &[Row], schema: &FieldSchema) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    group_into(rows, schema, &mut items)?;
    Ok(items)
}
