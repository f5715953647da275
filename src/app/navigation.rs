//! Navigation - Routes and Page Transitions
//!
//! Defines the pages of the tutoring app and the router seam the create
//! controller navigates through.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::GroupHandoff;

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Route {
    Home,
    BecomeTutor,
    FindTutor,
    /// Create study group form
    #[default]
    CreateStudyGroup,
    StudyGroups,
    ViewYourGroups,
    GroupDetails,
    /// Landing page after a study group is created
    StudyGroupDetails,
}

impl Route {
    /// Path of the page
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/home",
            Route::BecomeTutor => "/become-tutor",
            Route::FindTutor => "/find-tutor",
            Route::CreateStudyGroup => "/create-study-group",
            Route::StudyGroups => "/study-groups",
            Route::ViewYourGroups => "/view-your-groups",
            Route::GroupDetails => "/group-details",
            Route::StudyGroupDetails => "/study-group-details",
        }
    }

    /// Get the translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Home => "nav-home",
            Route::BecomeTutor => "nav-become-tutor",
            Route::FindTutor => "nav-find-tutor",
            Route::CreateStudyGroup => "nav-create-study-group",
            Route::StudyGroups => "nav-study-groups",
            Route::ViewYourGroups => "nav-view-your-groups",
            Route::GroupDetails => "nav-group-details",
            Route::StudyGroupDetails => "nav-study-group-details",
        }
    }

    /// Look up a route by its path
    pub fn from_path(path: &str) -> Option<Self> {
        Self::all()
            .iter()
            .chain(std::iter::once(&Route::StudyGroupDetails))
            .copied()
            .find(|route| route.path() == path)
    }

    /// Pages listed in the sidebar
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::BecomeTutor,
            Route::FindTutor,
            Route::CreateStudyGroup,
            Route::StudyGroups,
            Route::ViewYourGroups,
            Route::GroupDetails,
        ]
    }
}

/// Changes the visible page, optionally carrying state to it
pub trait Router {
    fn navigate(&mut self, route: Route, handoff: Option<GroupHandoff>);
}

/// Router that records where it has been
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    current: Route,
    handoff: Option<GroupHandoff>,
    history: Vec<Route>,
}

impl HistoryRouter {
    /// Create a router starting at a page
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            handoff: None,
            history: vec![start],
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// State carried by the last navigation
    pub fn handoff(&self) -> Option<&GroupHandoff> {
        self.handoff.as_ref()
    }

    /// Visited routes, oldest first
    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl Router for HistoryRouter {
    fn navigate(&mut self, route: Route, handoff: Option<GroupHandoff>) {
        info!(from = self.current.path(), to = route.path(), "Navigating");
        self.current = route;
        self.handoff = handoff;
        self.history.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_lookup() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), Some(*route));
        }
        assert_eq!(
            Route::from_path("/study-group-details"),
            Some(Route::StudyGroupDetails)
        );
        assert_eq!(Route::from_path("/nowhere"), None);
    }

    #[test]
    fn history_router_records_navigation() {
        let mut router = HistoryRouter::default();
        assert_eq!(router.current(), Route::CreateStudyGroup);
        assert!(router.handoff().is_none());

        let handoff = GroupHandoff {
            name: "Study A".to_string(),
            subject: "Math".to_string(),
            topic: "Algebra".to_string(),
        };
        router.navigate(Route::StudyGroupDetails, Some(handoff.clone()));

        assert_eq!(router.current(), Route::StudyGroupDetails);
        assert_eq!(router.handoff(), Some(&handoff));
        assert_eq!(
            router.history(),
            &[Route::CreateStudyGroup, Route::StudyGroupDetails]
        );

        // Handoff is transient: a plain navigation drops it
        router.navigate(Route::Home, None);
        assert!(router.handoff().is_none());
    }
}
