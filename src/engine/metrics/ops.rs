use crate::engine::metrics::plan::Statistic;

/// Values of one measure collected for one group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    values: Vec<f64>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `None` when the statistic is undefined for the collected values.
    pub fn finalize(&self, stat: &Statistic) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        match stat {
            Statistic::Mean => Some(mean(&self.values)),
            Statistic::Median => Some(median(&self.values)),
            Statistic::Std => sample_std(&self.values),
            Statistic::Count => Some(self.values.len() as f64),
            Statistic::CountAbove(t) => Some(count_above(&self.values, *t) as f64),
            Statistic::Sum => Some(self.values.iter().sum()),
            Statistic::Min => self.values.iter().copied().reduce(f64::min),
            Statistic::Max => self.values.iter().copied().reduce(f64::max),
        }
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value; the mean of the two middle values for an even count.
pub(crate) fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Undefined below two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

pub fn count_above(values: &[f64], threshold: f64) -> usize {
    values.iter().filter(|v| **v > threshold).count()
}

pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
