// src/web/handlers/directory.rs

//! Schedule, student directory and document pages.

use axum::{
    extract::{Query, State},
    response::Response,
};

use crate::listing::{FilterState, Paginator, SelectOption};
use crate::models::{Document, ScheduleEntry, Student, WEEKDAYS};
use crate::services::{Resource, Store};
use crate::web::response::render;
use crate::web::views::{
    DocumentRow, DocumentsTemplate, PaginationView, ScheduleGroup, ScheduleRow, ScheduleTemplate,
    StudentCard, StudentsTemplate,
};
use crate::web::AppState;

/// `/jadwal`: class schedule grouped by weekday, filterable by day.
pub async fn schedule(
    State(state): State<AppState>,
    Query(filter): Query<FilterState>,
) -> Response {
    let resource = Store::<ScheduleEntry>::new(&state.api).list().await;
    let error = resource.error_message();
    let entries = resource.data.unwrap_or_default();

    let mut matched = filter.apply(&entries);
    matched.sort_by(|a, b| {
        a.day_index()
            .cmp(&b.day_index())
            .then_with(|| a.start_time.cmp(&b.start_time))
    });

    render(&ScheduleTemplate {
        site_name: state.site_name(),
        title: ScheduleEntry::LABEL.to_string(),
        active: ScheduleEntry::PATH,
        total: matched.len(),
        groups: group_by_day(&matched),
        error,
        query: filter.q.clone().unwrap_or_default(),
        days: WEEKDAYS
            .iter()
            .map(|day| SelectOption {
                value: day.to_string(),
                selected: filter
                    .category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(day)),
            })
            .collect(),
    })
}

/// Consecutive entries sharing a weekday become one group.
fn group_by_day(entries: &[&ScheduleEntry]) -> Vec<ScheduleGroup> {
    let mut groups: Vec<ScheduleGroup> = Vec::new();
    for entry in entries {
        let day = entry.day.trim();
        match groups.last_mut() {
            Some(group) if group.day.eq_ignore_ascii_case(day) => {
                group.rows.push(ScheduleRow::from(*entry));
            }
            _ => groups.push(ScheduleGroup {
                day: day.to_string(),
                rows: vec![ScheduleRow::from(*entry)],
            }),
        }
    }
    groups
}

/// `/mahasiswa`: student directory, filterable by program and cohort.
pub async fn students(
    State(state): State<AppState>,
    Query(filter): Query<FilterState>,
) -> Response {
    let resource = Store::<Student>::new(&state.api).list().await;
    let error = resource.error_message();
    let students = resource.data.unwrap_or_default();

    let matched = filter.apply(&students);
    let paginator = Paginator::new(matched.len(), state.config.site.per_page, filter.page());
    let path = format!("/{}", Student::PATH);

    render(&StudentsTemplate {
        site_name: state.site_name(),
        title: Student::LABEL.to_string(),
        active: Student::PATH,
        cards: paginator
            .slice(&matched)
            .iter()
            .map(|s| StudentCard::from(*s))
            .collect(),
        total: matched.len(),
        error,
        query: filter.q.clone().unwrap_or_default(),
        programs: filter.category_options(&students),
        cohorts: filter.year_options(&students),
        pagination: PaginationView::build(&path, &paginator, &filter),
    })
}

/// `/dokumen`: downloadable documents, filterable by category.
pub async fn documents(
    State(state): State<AppState>,
    Query(filter): Query<FilterState>,
) -> Response {
    let resource = Store::<Document>::new(&state.api).list().await;
    let error = resource.error_message();
    let documents = resource.data.unwrap_or_default();

    let matched = filter.apply(&documents);
    let paginator = Paginator::new(matched.len(), state.config.site.per_page, filter.page());
    let path = format!("/{}", Document::PATH);

    render(&DocumentsTemplate {
        site_name: state.site_name(),
        title: Document::LABEL.to_string(),
        active: Document::PATH,
        rows: paginator
            .slice(&matched)
            .iter()
            .map(|d| DocumentRow::from(*d))
            .collect(),
        total: matched.len(),
        error,
        query: filter.q.clone().unwrap_or_default(),
        categories: filter.category_options(&documents),
        pagination: PaginationView::build(&path, &paginator, &filter),
    })
}
