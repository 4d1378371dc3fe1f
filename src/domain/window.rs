//! Per-company trailing window of trade events.
//!
//! Events are kept in arrival order in a `VecDeque`. Each insertion evicts
//! every retained event older than `span_secs` before the inserted event's
//! timestamp; the lower bound is inclusive. Cancelled and purchased volume
//! are tallied incrementally so the ratio never rescans the window.

use std::collections::VecDeque;

use rust_decimal::Decimal;

use super::trade::{TradeEvent, TradeKind};

/// Cancelled and purchased volume over a set of events.
///
/// Sums saturate at [`Decimal::MAX`] instead of overflowing. A saturated
/// tally can no longer be corrected by subtraction and must be recounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeTally {
    pub cancelled: Decimal,
    pub purchased: Decimal,
    saturated: bool,
}

impl VolumeTally {
    pub fn add(&mut self, event: &TradeEvent) {
        let side = match event.kind {
            TradeKind::Cancel => &mut self.cancelled,
            TradeKind::Purchase => &mut self.purchased,
            TradeKind::Other => return,
        };
        match side.checked_add(event.amount) {
            Some(sum) => *side = sum,
            None => {
                *side = Decimal::MAX;
                self.saturated = true;
            }
        }
    }

    pub fn remove(&mut self, event: &TradeEvent) {
        let side = match event.kind {
            TradeKind::Cancel => &mut self.cancelled,
            TradeKind::Purchase => &mut self.purchased,
            TradeKind::Other => return,
        };
        *side = side
            .checked_sub(event.amount)
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO);
    }

    /// Whether either side hit [`Decimal::MAX`] while adding.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cancelled
            .checked_add(self.purchased)
            .unwrap_or(Decimal::MAX)
    }

    /// `cancelled / (cancelled + purchased)`, or `None` when there is no volume.
    #[must_use]
    pub fn ratio(&self) -> Option<Decimal> {
        let total = self.total();
        if total.is_zero() {
            return None;
        }
        self.cancelled.checked_div(total).map(|ratio| ratio.min(Decimal::ONE))
    }
}

impl<'a> FromIterator<&'a TradeEvent> for VolumeTally {
    fn from_iter<I: IntoIterator<Item = &'a TradeEvent>>(iter: I) -> Self {
        let mut tally = Self::default();
        for event in iter {
            tally.add(event);
        }
        tally
    }
}

/// Cancellation ratio over an arbitrary set of events.
///
/// Order does not matter; a window with zero total volume has no ratio.
pub fn ratio_for_window<'a>(
    events: impl IntoIterator<Item = &'a TradeEvent>,
) -> Option<Decimal> {
    events.into_iter().collect::<VolumeTally>().ratio()
}

/// Trailing window for a single company.
#[derive(Debug, Clone)]
pub struct CompanyWindow {
    events: VecDeque<TradeEvent>,
    tally: VolumeTally,
    // False once an event arrives with an earlier timestamp than its
    // predecessor; front-popping alone no longer finds every stale event.
    monotonic: bool,
}

impl CompanyWindow {
    /// Open a window holding only `first`.
    pub fn new(first: TradeEvent) -> Self {
        let mut tally = VolumeTally::default();
        tally.add(&first);

        let mut events = VecDeque::new();
        events.push_back(first);

        Self {
            events,
            tally,
            monotonic: true,
        }
    }

    /// Append `event`, then evict everything older than `span_secs` before it.
    pub fn insert(&mut self, event: TradeEvent, span_secs: i64) {
        let cutoff = event.timestamp.saturating_sub(span_secs);

        if let Some(last) = self.events.back() {
            if event.timestamp < last.timestamp {
                self.monotonic = false;
            }
        }

        self.tally.add(&event);
        self.events.push_back(event);
        self.evict_before(cutoff);
    }

    /// Drop every event with `timestamp < cutoff`.
    pub fn evict_before(&mut self, cutoff: i64) {
        if self.monotonic {
            while let Some(front) = self.events.front() {
                if front.timestamp >= cutoff {
                    break;
                }
                if let Some(stale) = self.events.pop_front() {
                    self.tally.remove(&stale);
                }
            }
            if self.tally.is_saturated() {
                self.tally = self.events.iter().collect();
            }
            return;
        }

        self.events.retain(|event| event.timestamp >= cutoff);
        self.tally = self.events.iter().collect();
        self.monotonic = self
            .events
            .iter()
            .zip(self.events.iter().skip(1))
            .all(|(a, b)| a.timestamp <= b.timestamp);
    }

    #[must_use]
    pub fn cancellation_ratio(&self) -> Option<Decimal> {
        self.tally.ratio()
    }

    #[must_use]
    pub fn tally(&self) -> VolumeTally {
        self.tally
    }

    pub fn iter(&self) -> impl Iterator<Item = &TradeEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Timestamp of the most recently inserted event.
    #[must_use]
    pub fn latest_timestamp(&self) -> Option<i64> {
        self.events.back().map(|event| event.timestamp)
    }
}
