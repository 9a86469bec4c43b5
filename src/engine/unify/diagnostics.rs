use serde::Serialize;

/// Row accounting for one join, so dropped records are never silent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JoinDiagnostics {
    pub office_rows: usize,
    pub hr_rows: usize,
    pub matched: usize,
    pub dropped_hr_only: usize,
    pub dropped_office_only: usize,
}

impl JoinDiagnostics {
    /// Every input row is either matched or counted as dropped on its side.
    pub fn reconciles(&self) -> bool {
        self.matched + self.dropped_office_only == self.office_rows
            && self.matched + self.dropped_hr_only == self.hr_rows
    }

    pub fn total_dropped(&self) -> usize {
        self.dropped_hr_only + self.dropped_office_only
    }
}
