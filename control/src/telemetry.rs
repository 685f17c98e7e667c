//! Rate-limited diagnostic reporting of pedal state.

use core::fmt;

use crate::pedal::Pedal;
use crate::store::{PEDALS, SUSTAIN_CONTROLLER};

const REPORT_PERIOD_MS: u32 = 1000;

/// Rate limiter of the diagnostic line.
///
/// A report is due once per wall-clock second. Delivery is best-effort:
/// the caller asks whether one is due and may still fail to write it, in
/// which case the next one is simply due a second later.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reporter {
    next_due: u32,
}

impl Reporter {
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if now_ms < self.next_due {
            return false;
        }
        self.next_due = now_ms.wrapping_add(REPORT_PERIOD_MS);
        true
    }
}

/// One pedal's worth of diagnostic data.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PedalReport {
    pub label: &'static str,
    pub value: u8,
    pub raw: u16,
    pub limit_low: u16,
    pub limit_high: u16,
}

/// Snapshot of both pedals, formatted as a single diagnostic line.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pedals: [PedalReport; PEDALS],
}

impl Report {
    pub(crate) fn new(pedals: &[Pedal; PEDALS]) -> Self {
        let mut reports = [PedalReport {
            label: "",
            value: 0,
            raw: 0,
            limit_low: 0,
            limit_high: 0,
        }; PEDALS];
        for (report, pedal) in reports.iter_mut().zip(pedals) {
            *report = PedalReport {
                label: label(pedal.controller),
                value: pedal.last_value,
                raw: pedal.raw,
                limit_low: pedal.bounds.low,
                limit_high: pedal.bounds.high,
            };
        }
        Self { pedals: reports }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pedal) in self.pedals.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(
                f,
                "{}: {:03} ({:04}:{:04}-{:04})",
                pedal.label, pedal.value, pedal.raw, pedal.limit_low, pedal.limit_high
            )?;
        }
        Ok(())
    }
}

fn label(controller: u8) -> &'static str {
    if controller == SUSTAIN_CONTROLLER {
        "SUSTAIN"
    } else {
        "SOFT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::{Snapshot, Store};

    #[test]
    fn when_polled_repeatedly_it_fires_once_per_second() {
        let mut reporter = Reporter::default();
        assert!(reporter.poll(0));
        assert!(!reporter.poll(1));
        assert!(!reporter.poll(999));
        assert!(reporter.poll(1000));
        assert!(!reporter.poll(1500));
        assert!(reporter.poll(2345));
    }

    #[test]
    fn when_a_write_fails_the_next_report_is_due_a_second_later() {
        let mut reporter = Reporter::default();
        assert!(reporter.poll(0));
        // The caller could not deliver this one. No retry happens before
        // the next period.
        assert!(!reporter.poll(900));
        assert!(reporter.poll(1100));
    }

    #[test]
    fn when_formatted_it_lists_value_raw_and_limits_for_both_pedals() {
        let mut store = Store::new(
            Snapshot {
                sensors: [1900, 1234],
            },
            Config::default(),
        );
        store.update(Snapshot {
            sensors: [1900, 1234],
        });

        let line = format!("{}", store.report());
        assert_eq!(
            line,
            "SOFT: 000 (1900:1700-1800) SUSTAIN: 000 (1234:1034-1134)"
        );
    }
}
