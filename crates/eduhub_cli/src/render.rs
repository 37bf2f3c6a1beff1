//! Plain-text rendering of controller view models.

use eduhub_core::{DashboardSummary, NoteList, ProfileSummary, SubjectFilter, TaskTable};

pub fn task_table(table: &TaskTable) -> String {
    let rows = match table {
        TaskTable::Empty { placeholder } => return format!("{placeholder}\n"),
        TaskTable::Rows(rows) => rows,
    };

    let mut out = format!(
        "{:>3}  {:<16} {:<24} {:<12} {}\n",
        "#", "Subject", "Topic", "Date", "Status"
    );
    for row in rows {
        out.push_str(&format!(
            "{:>3}  {:<16} {:<24} {:<12} [{}]\n",
            row.position + 1,
            row.subject,
            row.topic,
            row.date,
            row.status.label()
        ));
    }
    out
}

pub fn note_list(list: &NoteList) -> String {
    let cards = match list {
        NoteList::Empty { placeholder } => return format!("{placeholder}\n"),
        NoteList::Cards(cards) => cards,
    };

    cards
        .iter()
        .map(|card| {
            format!(
                "{:>3}. [{}] {}\n     {}\n     {}\n",
                card.position + 1,
                card.subject_tag,
                card.title,
                card.preview,
                card.created_label
            )
        })
        .collect()
}

pub fn filter_options(options: &[SubjectFilter]) -> String {
    options
        .iter()
        .map(|option| format!("{option}\t{}\n", option.label()))
        .collect()
}

pub fn dashboard(summary: &DashboardSummary) -> String {
    format!(
        "Tip of the day: {}\n\nTotal tasks:    {}\nUpcoming tasks: {}\nTotal notes:    {}\n",
        summary.tip, summary.total_tasks, summary.pending_tasks, summary.total_notes
    )
}

pub fn profile(summary: &ProfileSummary) -> String {
    format!(
        "Subjects:        {}\nNotes:           {}\nCompleted tasks: {}\n",
        summary.distinct_subjects, summary.total_notes, summary.completed_tasks
    )
}
