use saf_model::{Item, SafError};

/// Receives items as they are sealed by the grouper.
pub trait ItemSink {
    type Error: From<SafError>;

    /// Take ownership of a sealed item. `sequence` is 1-based.
    fn accept(&mut self, sequence: u32, item: Item) -> Result<(), Self::Error>;
}

impl ItemSink for Vec<Item> {
    type Error = SafError;

    fn accept(&mut self, _sequence: u32, item: Item) -> Result<(), Self::Error> {
        self.push(item);
        Ok(())
    }
}
