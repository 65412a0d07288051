//! Session gating for the task store.
//!
//! Authentication itself happens in an external collaborator (the OAuth
//! flow); the engine only receives the resulting [`UserProfile`]. A
//! [`Session`] owns the [`TaskStore`] for as long as the user stays logged
//! in — logging out discards the tasks and view parameters with it.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::store::TaskStore;
use crate::model::task::{Priority, Status, Task};
use crate::ops::stats::Stats;

/// Error type for session access
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("not logged in")]
    NotLoggedIn,
}

/// Profile handed over by the identity provider after a successful login.
/// The engine stores it as-is and does not validate or interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name (`given_name` in the provider's userinfo payload)
    #[serde(rename = "given_name")]
    pub name: String,
    pub email: String,
    /// Avatar image URL (`picture` in the userinfo payload)
    #[serde(rename = "picture")]
    pub avatar: String,
}

impl UserProfile {
    /// The built-in demo profile, used when no identity provider is wired up
    pub fn demo() -> UserProfile {
        UserProfile {
            name: "Demo User".to_string(),
            email: "demo@todoapp.com".to_string(),
            avatar: "https://via.placeholder.com/150".to_string(),
        }
    }
}

/// A logged-in session: the user profile plus the task store it owns
#[derive(Debug)]
pub struct Session {
    pub user: UserProfile,
    pub store: TaskStore,
}

impl Session {
    /// Start a session with an empty store
    pub fn new(user: UserProfile) -> Session {
        Session {
            user,
            store: TaskStore::new(),
        }
    }

    /// Start a demo session seeded with the sample tasks
    pub fn demo() -> Session {
        let mut session = Session::new(UserProfile::demo());
        seed_sample_tasks(&mut session.store);
        session
    }

    /// Stats snapshot over the session's full collection, as of now
    pub fn stats(&self) -> Stats {
        Stats::compute(self.store.tasks(), Utc::now())
    }
}

/// The engine's top-level state: at most one logged-in session.
///
/// Task operations are only reachable through [`App::session`] /
/// [`App::session_mut`]; without a session they fail with
/// [`SessionError::NotLoggedIn`].
#[derive(Debug, Default)]
pub struct App {
    session: Option<Session>,
}

impl App {
    pub fn new() -> App {
        App::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Establish a session from an identity provider profile.
    /// Replaces any existing session.
    pub fn login(&mut self, user: UserProfile) -> &mut Session {
        self.session.insert(Session::new(user))
    }

    /// Establish a demo session with the sample tasks
    pub fn login_demo(&mut self) -> &mut Session {
        self.session.insert(Session::demo())
    }

    /// End the session, discarding its tasks and view parameters
    pub fn logout(&mut self) {
        self.session = None;
    }

    pub fn session(&self) -> Result<&Session, SessionError> {
        self.session.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    pub fn session_mut(&mut self) -> Result<&mut Session, SessionError> {
        self.session.as_mut().ok_or(SessionError::NotLoggedIn)
    }
}

/// Seed the four sample tasks a demo session starts with: one per default
/// category, the workout already completed.
fn seed_sample_tasks(store: &mut TaskStore) {
    let now = Utc::now();
    let samples = [
        (
            "Complete hackathon project",
            "Build an amazing todo app with all required features",
            now,
            Status::Pending,
            Priority::High,
            "Work",
        ),
        (
            "Practice UI animations",
            "Smoother transitions for a better user experience",
            now + Duration::days(1),
            Status::Pending,
            Priority::Medium,
            "Learning",
        ),
        (
            "Morning workout",
            "30 minutes cardio and strength training",
            now,
            Status::Completed,
            Priority::Medium,
            "Health",
        ),
        (
            "Buy groceries",
            "Milk, eggs, bread, and vegetables",
            now + Duration::days(2),
            Status::Pending,
            Priority::Low,
            "Personal",
        ),
    ];

    // Prepend in reverse so the first sample ends up first in the store
    for (title, description, due_date, status, priority, category) in samples.into_iter().rev() {
        let id = store.fresh_id();
        store.prepend(Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            status,
            priority,
            category: category.to_string(),
            created_at: now,
        });
    }
}
