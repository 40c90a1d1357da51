//! Report aggregation: one fold shared by every summary view.
//!
//! The dashboard, project, user, and company reports all reduce a set of
//! work logs to the same [`ReportSummary`]. The fold is linear, holds no
//! hidden state, and is order-independent (sums and status counts only),
//! so callers may feed it rows in whatever order the store returns them.

use serde::Serialize;

use crate::status::WorkLogStatus;

/// Anything shaped like a work log, as far as reporting is concerned.
pub trait LoggedEffort {
    fn hours(&self) -> Option<f64>;
    fn qty_done(&self) -> Option<f64>;
    fn status(&self) -> &str;
}

/// Derived aggregate over a set of work logs. Never persisted.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_hours: f64,
    pub total_qty: f64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

/// Fold work logs into a [`ReportSummary`].
///
/// Missing hours/quantity count as zero. A log whose status is outside
/// the known set contributes to the totals but to none of the three
/// status counters: unknown statuses are forward-compatible data, not an
/// error. The function makes no assumption about which subset of logs it
/// receives.
pub fn summarize<'a, T, I>(logs: I) -> ReportSummary
where
    T: LoggedEffort + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut summary = ReportSummary::default();
    for log in logs {
        summary.total_hours += log.hours().unwrap_or(0.0);
        summary.total_qty += log.qty_done().unwrap_or(0.0);
        match WorkLogStatus::parse(log.status()) {
            Some(WorkLogStatus::Pending) => summary.pending += 1,
            Some(WorkLogStatus::Approved) => summary.approved += 1,
            Some(WorkLogStatus::Rejected) => summary.rejected += 1,
            None => {}
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        hours: Option<f64>,
        qty_done: Option<f64>,
        status: &'static str,
    }

    impl LoggedEffort for Row {
        fn hours(&self) -> Option<f64> {
            self.hours
        }
        fn qty_done(&self) -> Option<f64> {
            self.qty_done
        }
        fn status(&self) -> &str {
            self.status
        }
    }

    fn row(hours: Option<f64>, qty_done: Option<f64>, status: &'static str) -> Row {
        Row {
            hours,
            qty_done,
            status,
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let summary = summarize::<Row, _>(&[]);
        assert_eq!(summary, ReportSummary::default());
    }

    #[test]
    fn test_totals_and_counts() {
        let logs = vec![
            row(Some(8.0), Some(12.5), "pending"),
            row(Some(4.0), None, "approved"),
            row(None, Some(3.0), "rejected"),
            row(None, None, "approved"),
        ];
        let summary = summarize(&logs);
        assert_eq!(summary.total_hours, 12.0);
        assert_eq!(summary.total_qty, 15.5);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.approved, 2);
        assert_eq!(summary.rejected, 1);
    }

    #[test]
    fn test_unknown_status_counts_in_no_bucket() {
        let logs = vec![row(Some(2.0), Some(1.0), "archived")];
        let summary = summarize(&logs);
        assert_eq!(summary.total_hours, 2.0);
        assert_eq!(summary.total_qty, 1.0);
        assert_eq!(summary.pending + summary.approved + summary.rejected, 0);
    }

    #[test]
    fn test_order_independent() {
        let mut logs = vec![
            row(Some(1.0), Some(2.0), "pending"),
            row(Some(3.0), Some(4.0), "approved"),
            row(Some(5.0), Some(6.0), "rejected"),
        ];
        let forward = summarize(&logs);
        logs.reverse();
        assert_eq!(summarize(&logs), forward);
    }

    #[test]
    fn test_bucket_sum_bounded_by_input_len() {
        let logs = vec![
            row(None, None, "pending"),
            row(None, None, "bogus"),
            row(None, None, "approved"),
        ];
        let summary = summarize(&logs);
        assert!(summary.pending + summary.approved + summary.rejected <= logs.len() as u64);
    }
}
