//! # Daily Summary
//!
//! Derives a per-child, per-day view of the activity log. Nothing is stored:
//! the summary is rebuilt from the activities collection on every request, so
//! it always reflects the latest inserts, edits and deletes.
//!
//! Activities are matched on the calendar day of their timestamp, so anything
//! logged at any time during that day counts. Each matching activity lands in
//! the bucket for its type; types outside meal/nap/activity/update appear in no
//! bucket but still count towards `total`.

use std::sync::Arc;

use shared::ActivityType;
use tracing::info;

use super::activity_service::select_activities;
use super::commands::activities::{ActivityListQuery, DailySummaryResult, SummaryQuery};
use super::error::DomainResult;
use super::models::Activity;
use crate::storage::JsonConnection;

#[derive(Clone)]
pub struct SummaryService {
    connection: Arc<JsonConnection>,
}

impl SummaryService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    /// Summarize one child's activities for one calendar day
    pub async fn summarize(&self, query: SummaryQuery) -> DomainResult<DailySummaryResult> {
        info!("Summarizing activities for child {} on {}", query.child_id, query.date);

        let summary = self
            .connection
            .activities()
            .read(|records| summarize_activities(records, &query));

        info!(
            "Summary for child {} on {}: {} activities, {} with photos",
            query.child_id, query.date, summary.total, summary.photos_count
        );
        Ok(summary)
    }
}

pub fn summarize_activities(records: &[Activity], query: &SummaryQuery) -> DailySummaryResult {
    let mut list_query = ActivityListQuery::for_child(query.child_id.clone());
    list_query.date = Some(query.date);
    let day = select_activities(records, &list_query);

    let mut summary = DailySummaryResult {
        date: query.date,
        meals: Vec::new(),
        naps: Vec::new(),
        activities: Vec::new(),
        updates: Vec::new(),
        total: day.len(),
        photos_count: day.iter().filter(|a| a.has_photos()).count(),
    };

    for activity in day {
        match activity.activity_type {
            ActivityType::Meal => summary.meals.push(activity),
            ActivityType::Nap => summary.naps.push(activity),
            ActivityType::Activity => summary.activities.push(activity),
            ActivityType::Update => summary.updates.push(activity),
            ActivityType::Other(_) => {}
        }
    }

    summary
}
