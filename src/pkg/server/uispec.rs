use askama::Template;

use crate::pkg::internal::adaptors::applications::spec::{ApplicationEntry, Status};

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home {
    pub applications: Vec<ApplicationEntry>,
    pub metrics: DashboardMetrics,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total: usize,
    pub pending: usize,
    pub interviewing: usize,
    pub offers: usize,
    pub rejected: usize,
    pub success_rate: u32,
}

impl DashboardMetrics {
    // One linear scan over the fetched set.
    pub fn from_entries(entries: &[ApplicationEntry]) -> Self {
        let mut pending = 0;
        let mut interviewing = 0;
        let mut offers = 0;
        let mut rejected = 0;
        for entry in entries {
            match entry.status {
                Status::Pending => pending += 1,
                Status::Interviewing => interviewing += 1,
                Status::Offer => offers += 1,
                Status::Rejected => rejected += 1,
            }
        }
        let total = entries.len();
        let success_rate = if total == 0 {
            0
        } else {
            (((interviewing + offers) as f64 / total as f64) * 100.0).round() as u32
        };
        DashboardMetrics {
            total,
            pending,
            interviewing,
            offers,
            rejected,
            success_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn entry(id: i32, status: Status) -> ApplicationEntry {
        ApplicationEntry {
            id,
            company: "Acme".into(),
            position: "Engineer".into(),
            status,
            date_applied: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_counts_partition_total() {
        let entries = vec![
            entry(1, Status::Pending),
            entry(2, Status::Interviewing),
            entry(3, Status::Interviewing),
            entry(4, Status::Offer),
            entry(5, Status::Rejected),
        ];
        let metrics = DashboardMetrics::from_entries(&entries);
        assert_eq!(
            metrics.total,
            metrics.pending + metrics.interviewing + metrics.offers + metrics.rejected
        );
        assert_eq!(metrics.interviewing, 2);
        assert_eq!(metrics.offers, 1);
        assert_eq!(metrics.success_rate, 60);
    }

    #[test]
    fn test_empty_set_has_zero_rate() {
        let metrics = DashboardMetrics::from_entries(&[]);
        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.success_rate, 0);
    }

    #[test]
    fn test_success_rate_rounds() {
        let entries = vec![
            entry(1, Status::Interviewing),
            entry(2, Status::Pending),
            entry(3, Status::Pending),
        ];
        assert_eq!(DashboardMetrics::from_entries(&entries).success_rate, 33);
    }
}
