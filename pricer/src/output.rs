use std::fmt;
use std::io::{self, Write};

use book_engine::QuoteUpdate;
use rust_decimal::RoundingStrategy;

/// Text form of an update: `<timestamp> <S|B> <value>`, where value has
/// exactly two decimals or is `NA`.
pub struct QuoteLine<'a>(pub &'a QuoteUpdate);

impl fmt::Display for QuoteLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let update = self.0;
        write!(f, "{} {} ", update.timestamp, update.side.label())?;

        match update.quote {
            Some(value) => {
                // Padded as text, rescaling near Decimal::MAX would drop digits
                let cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                match cents.scale() {
                    0 => write!(f, "{}.00", cents),
                    1 => write!(f, "{}0", cents),
                    _ => write!(f, "{}", cents),
                }
            }
            None => f.write_str("NA"),
        }
    }
}

/// Writes quote updates one per line.
pub struct QuoteWriter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn write(&mut self, update: &QuoteUpdate) -> io::Result<()> {
        writeln!(self.out, "{}", QuoteLine(update))?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
