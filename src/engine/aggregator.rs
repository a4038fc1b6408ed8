use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::engine::EngineError;
use crate::models::series::day_label;
use crate::models::{
    DateRange, FillPolicy, KindPolicy, MetricKind, MetricRecord, MetricSnapshot, Reduction,
    SeriesPoint, WeeklySeries,
};

/// Per-kind reduction and fill rules. Kinds without an override use their default policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Policies {
    overrides: HashMap<MetricKind, KindPolicy>,
}

impl Policies {
    pub fn with(mut self, kind: MetricKind, policy: KindPolicy) -> Self {
        self.overrides.insert(kind, policy);
        self
    }

    pub fn for_kind(&self, kind: MetricKind) -> KindPolicy {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_policy())
    }
}

/// Reduce raw records to one fixed-length series per metric kind.
pub fn aggregate(
    records: &[MetricRecord],
    window: DateRange,
    policies: &Policies,
) -> Result<MetricSnapshot, EngineError> {
    // Stable sort keeps input order among same-day records, which `Latest` relies on
    let mut sorted: Vec<&MetricRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let len = window.len();
    let mut slots: BTreeMap<MetricKind, Vec<Option<f64>>> = MetricKind::all()
        .into_iter()
        .map(|kind| (kind, vec![None; len]))
        .collect();

    let mut discarded = 0usize;
    for record in sorted {
        let Some(idx) = window.offset_of(record.date) else {
            discarded += 1;
            continue;
        };
        let policy = policies.for_kind(record.kind);
        let slot = &mut slots.entry(record.kind).or_insert_with(|| vec![None; len])[idx];
        *slot = match (policy.reduction, *slot) {
            (_, None) => Some(record.value),
            (Reduction::Sum, Some(prev)) => Some(prev + record.value),
            (Reduction::Latest, Some(_)) => Some(record.value),
            (Reduction::Single, Some(_)) => {
                return Err(EngineError::AmbiguousRecord {
                    kind: record.kind,
                    date: record.date,
                });
            }
        };
    }
    if discarded > 0 {
        debug!(
            "Discarded {} records outside {}..={}",
            discarded,
            window.start(),
            window.end()
        );
    }

    let series = slots
        .into_iter()
        .map(|(kind, values)| {
            let fill = policies.for_kind(kind).fill;
            let points = window
                .days()
                .zip(values)
                .map(|(date, value)| SeriesPoint {
                    date,
                    label: day_label(date, len),
                    value: match (value, fill) {
                        (Some(v), _) => Some(v),
                        (None, FillPolicy::Zero) => Some(0.0),
                        (None, FillPolicy::Gap) => None,
                    },
                })
                .collect();
            (kind, WeeklySeries { kind, points })
        })
        .collect();

    Ok(MetricSnapshot { window, series })
}
