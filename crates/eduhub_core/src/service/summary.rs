//! Read-only dashboard and profile aggregations.
//!
//! Both summaries are recomputed from the stored collections each time a
//! page opens. Nothing is cached.

use crate::model::note::Note;
use crate::model::task::{Task, TaskStatus};
use crate::repo::note_repo::NoteRepository;
use crate::repo::task_repo::TaskRepository;
use crate::storage::StoreResult;
use chrono::Datelike;
use std::collections::HashSet;

/// Fixed rotation for the dashboard tip.
pub const STUDY_TIPS: [&str; 5] = [
    "Block 25-minute focus sessions and reward yourself with 5-minute breaks.",
    "Start with the hardest topic first while your mind is fresh.",
    "Teach a concept to a friend or imaginary class to test understanding.",
    "Turn big chapters into tiny daily goals to avoid last-minute panic.",
    "Summarize what you learned today in 3 bullet points.",
];

/// Tip for `date`: day-of-month modulo the tip count.
pub fn tip_of_the_day(date: &impl Datelike) -> &'static str {
    STUDY_TIPS[date.day() as usize % STUDY_TIPS.len()]
}

/// Dashboard counters and tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_tasks: usize,
    pub pending_tasks: usize,
    pub total_notes: usize,
    pub tip: &'static str,
}

impl DashboardSummary {
    pub fn compute(tasks: &[Task], notes: &[Note], today: &impl Datelike) -> Self {
        Self {
            total_tasks: tasks.len(),
            pending_tasks: count_status(tasks, TaskStatus::Pending),
            total_notes: notes.len(),
            tip: tip_of_the_day(today),
        }
    }

    /// Loads both collections and aggregates them.
    pub fn load<T, N>(tasks: &T, notes: &N, today: &impl Datelike) -> StoreResult<Self>
    where
        T: TaskRepository,
        N: NoteRepository,
    {
        Ok(Self::compute(&tasks.load_tasks()?, &notes.load_notes()?, today))
    }
}

/// Profile counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSummary {
    /// Distinct task subjects by exact stored value.
    pub distinct_subjects: usize,
    pub total_notes: usize,
    pub completed_tasks: usize,
}

impl ProfileSummary {
    pub fn compute(tasks: &[Task], notes: &[Note]) -> Self {
        let subjects: HashSet<&str> = tasks.iter().map(|task| task.subject.as_str()).collect();
        Self {
            distinct_subjects: subjects.len(),
            total_notes: notes.len(),
            completed_tasks: count_status(tasks, TaskStatus::Done),
        }
    }

    /// Loads both collections and aggregates them.
    pub fn load<T, N>(tasks: &T, notes: &N) -> StoreResult<Self>
    where
        T: TaskRepository,
        N: NoteRepository,
    {
        Ok(Self::compute(&tasks.load_tasks()?, &notes.load_notes()?))
    }
}

fn count_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|task| task.status() == status).count()
}

#[cfg(test)]
mod tests {
    use super::{tip_of_the_day, STUDY_TIPS};
    use chrono::NaiveDate;

    #[test]
    fn tip_uses_day_of_month_modulo_list_length() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let sixth = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        assert_eq!(tip_of_the_day(&first), STUDY_TIPS[1]);
        assert_eq!(tip_of_the_day(&sixth), STUDY_TIPS[1]);
    }

    #[test]
    fn same_day_of_month_selects_same_tip_across_months() {
        let march = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let october = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        assert_eq!(tip_of_the_day(&march), tip_of_the_day(&october));
        assert_eq!(tip_of_the_day(&march), STUDY_TIPS[0]);
    }
}
