//! Explicit page routing.
//!
//! # Responsibility
//! - Declare which controllers each page activates.
//! - Open a session that initializes only those controllers.
//!
//! # Invariants
//! - Controllers not declared by the page are never loaded, so opening one
//!   page never reads or writes another page's collection.

use crate::repo::note_repo::SlotNoteRepository;
use crate::repo::task_repo::SlotTaskRepository;
use crate::service::note_board::NoteBoard;
use crate::service::summary::{DashboardSummary, ProfileSummary};
use crate::service::task_planner::TaskPlanner;
use crate::storage::{SlotStore, StoreResult};
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Front-end page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Planner,
    Notes,
    Profile,
}

/// Controller a page can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerKind {
    DashboardSummary,
    TaskPlanner,
    NoteBoard,
    ProfileSummary,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Planner, Page::Notes, Page::Profile];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Planner => "planner",
            Self::Notes => "notes",
            Self::Profile => "profile",
        }
    }

    /// Controllers active on this page.
    pub fn controllers(self) -> &'static [ControllerKind] {
        match self {
            Self::Dashboard => &[ControllerKind::DashboardSummary],
            Self::Planner => &[ControllerKind::TaskPlanner],
            Self::Notes => &[ControllerKind::NoteBoard],
            Self::Profile => &[ControllerKind::ProfileSummary],
        }
    }

    pub fn activates(self, controller: ControllerKind) -> bool {
        self.controllers().contains(&controller)
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown page name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPage(pub String);

impl Display for UnknownPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown page `{}`; expected dashboard|planner|notes|profile",
            self.0
        )
    }
}

impl Error for UnknownPage {}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == normalized)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Controllers opened for one page lifetime.
pub struct PageSession<S: SlotStore + Clone> {
    page: Page,
    planner: Option<TaskPlanner<SlotTaskRepository<S>>>,
    notes: Option<NoteBoard<SlotNoteRepository<S>>>,
    dashboard: Option<DashboardSummary>,
    profile: Option<ProfileSummary>,
}

impl<S: SlotStore + Clone> PageSession<S> {
    /// Opens the controllers declared by `page` over `store`.
    ///
    /// `today` feeds the dashboard tip.
    pub fn open(page: Page, store: S, today: NaiveDate) -> StoreResult<Self> {
        let tasks = SlotTaskRepository::new(store.clone());
        let notes = SlotNoteRepository::new(store);
        let mut session = Self {
            page,
            planner: None,
            notes: None,
            dashboard: None,
            profile: None,
        };

        for controller in page.controllers() {
            match controller {
                ControllerKind::DashboardSummary => {
                    session.dashboard = Some(DashboardSummary::load(&tasks, &notes, &today)?);
                }
                ControllerKind::TaskPlanner => {
                    session.planner = Some(TaskPlanner::open(tasks.clone())?);
                }
                ControllerKind::NoteBoard => {
                    session.notes = Some(NoteBoard::open(notes.clone())?);
                }
                ControllerKind::ProfileSummary => {
                    session.profile = Some(ProfileSummary::load(&tasks, &notes)?);
                }
            }
        }

        debug!(
            "event=page_open module=page status=ok page={page} controllers={}",
            page.controllers().len()
        );
        Ok(session)
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn planner(&self) -> Option<&TaskPlanner<SlotTaskRepository<S>>> {
        self.planner.as_ref()
    }

    pub fn planner_mut(&mut self) -> Option<&mut TaskPlanner<SlotTaskRepository<S>>> {
        self.planner.as_mut()
    }

    pub fn notes(&self) -> Option<&NoteBoard<SlotNoteRepository<S>>> {
        self.notes.as_ref()
    }

    pub fn notes_mut(&mut self) -> Option<&mut NoteBoard<SlotNoteRepository<S>>> {
        self.notes.as_mut()
    }

    pub fn dashboard(&self) -> Option<&DashboardSummary> {
        self.dashboard.as_ref()
    }

    pub fn profile(&self) -> Option<&ProfileSummary> {
        self.profile.as_ref()
    }
}
