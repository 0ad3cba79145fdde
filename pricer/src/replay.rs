use std::io::{BufRead, Write};

use book_engine::{BookManager, Quantity};
use tracing::{debug, info, warn};

use crate::error::{PricerError, Result};
use crate::feed::parse_event;
use crate::output::QuoteWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayConfig {
    pub target_size: Quantity,
    /// Abort on the first malformed line or rejected event instead of
    /// skipping it.
    pub strict: bool,
}

impl ReplayConfig {
    pub fn new(target_size: Quantity) -> Self {
        Self {
            target_size,
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub lines: usize,
    pub applied: usize,
    pub skipped: usize,
    pub emitted: usize,
}

/// Replays a market data log in order and writes every quote change.
pub fn replay<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: &ReplayConfig,
) -> Result<ReplayStats> {
    let mut manager = BookManager::new(config.target_size);
    let mut writer = QuoteWriter::new(output);
    let mut stats = ReplayStats::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        stats.lines += 1;

        if line.trim().is_empty() {
            continue;
        }

        let event = match parse_event(&line) {
            Ok(event) => event,
            Err(source) if config.strict => {
                return Err(PricerError::Feed {
                    line: line_no,
                    source,
                })
            }
            Err(e) => {
                warn!(line = line_no, "Skipping unparseable line: {}", e);
                stats.skipped += 1;
                continue;
            }
        };
        debug!(line = line_no, ?event, "Applying event");

        let handled = manager.handle(&event);
        match handled.applied {
            Ok(()) => stats.applied += 1,
            Err(source) if config.strict => {
                return Err(PricerError::Book {
                    line: line_no,
                    source,
                })
            }
            Err(_) => stats.skipped += 1,
        }

        for update in &handled.updates {
            writer.write(update)?;
        }
    }

    writer.flush()?;
    stats.emitted = writer.written();

    info!(
        lines = stats.lines,
        applied = stats.applied,
        skipped = stats.skipped,
        emitted = stats.emitted,
        "Replay finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use book_engine::BookError;

    fn run(input: &str, config: &ReplayConfig) -> (Result<ReplayStats>, String) {
        let mut out = Vec::new();
        let result = replay(input.as_bytes(), &mut out, config);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_add_and_reduce() {
        let (result, out) = run("1 A A B 9 100\n2 R A 60\n", &ReplayConfig::new(50));

        assert_eq!(out, "1 S 450.00\n2 S NA\n");
        assert_eq!(
            result.unwrap(),
            ReplayStats {
                lines: 2,
                applied: 2,
                skipped: 0,
                emitted: 2,
            }
        );
    }

    #[test]
    fn test_bad_lines_skipped() {
        let input = "1 A a S 10 5\n\ngarbage\n2 R zz 1\n3 A b S 11 10\n";
        let (result, out) = run(input, &ReplayConfig::new(8));

        assert_eq!(out, "3 B 83.00\n");
        let stats = result.unwrap();
        assert_eq!(stats.lines, 5);
        assert_eq!(stats.applied, 2);
        assert_eq!(stats.skipped, 2);
    }

    #[test]
    fn test_strict_rejects_unparseable_line() {
        let config = ReplayConfig {
            target_size: 1,
            strict: true,
        };
        let (result, out) = run("1 A a S 10 5\n2 Q a\n", &config);

        assert!(matches!(result, Err(PricerError::Feed { line: 2, .. })));
        assert_eq!(out, "1 B 10.00\n");
    }

    #[test]
    fn test_strict_rejects_unknown_order() {
        let config = ReplayConfig {
            target_size: 1,
            strict: true,
        };
        let (result, _) = run("1 R a 5\n", &config);

        match result {
            Err(PricerError::Book { line, source }) => {
                assert_eq!(line, 1);
                assert_eq!(source, BookError::UnknownOrder { id: "a".into() });
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_oversized_values_skipped() {
        let input = "1 A a S 1 18000000000000000000\n\
                     2 A b S 10000000000000000000 5\n\
                     3 A c S 79228162514264337593543950335 2\n\
                     4 A d S 2.5 1\n";
        let (result, out) = run(input, &ReplayConfig::new(1));

        assert_eq!(out, "4 B 2.50\n");
        let stats = result.unwrap();
        assert_eq!(stats.applied, 1);
        assert_eq!(stats.skipped, 3);
    }

    #[test]
    fn test_strict_rejects_oversized_size() {
        let config = ReplayConfig {
            target_size: 1,
            strict: true,
        };
        let (result, out) = run("1 A a S 1 18000000000000000000\n", &config);

        assert!(matches!(result, Err(PricerError::Feed { line: 1, .. })));
        assert!(out.is_empty());
    }
}
