// SPDX-License-Identifier: MPL-2.0
//! View identifiers for application navigation.

use std::fmt;
use std::str::FromStr;

/// Views the user can navigate between.
///
/// `Detail` and `Edit` are overlays that require a focused photo; every
/// other view is a root reachable directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Library,
    ForYou,
    Albums,
    Search,
    Duplicates,
    Settings,
    Hidden,
    RecentlyDeleted,
    Detail,
    Edit,
}

impl View {
    /// Every view, in tab-bar order followed by utilities and overlays.
    pub const ALL: [View; 10] = [
        View::Library,
        View::ForYou,
        View::Albums,
        View::Search,
        View::Settings,
        View::Duplicates,
        View::Hidden,
        View::RecentlyDeleted,
        View::Detail,
        View::Edit,
    ];

    /// Views shown in the tab bar.
    pub const TABS: [View; 5] = [
        View::Library,
        View::ForYou,
        View::Albums,
        View::Search,
        View::Settings,
    ];

    /// Returns `true` for views that render on top of a focused photo.
    #[must_use]
    pub fn is_overlay(self) -> bool {
        matches!(self, View::Detail | View::Edit)
    }

    #[must_use]
    pub fn is_root(self) -> bool {
        !self.is_overlay()
    }

    /// Stable kebab-case identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            View::Library => "library",
            View::ForYou => "for-you",
            View::Albums => "albums",
            View::Search => "search",
            View::Duplicates => "duplicates",
            View::Settings => "settings",
            View::Hidden => "hidden",
            View::RecentlyDeleted => "recently-deleted",
            View::Detail => "detail",
            View::Edit => "edit",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown view identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view: {}", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_detail_and_edit_are_overlays() {
        let overlays: Vec<View> = View::ALL.into_iter().filter(|v| v.is_overlay()).collect();
        assert_eq!(overlays, vec![View::Detail, View::Edit]);
    }

    #[test]
    fn tabs_are_all_roots() {
        assert!(View::TABS.iter().all(|v| v.is_root()));
    }

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
        }
        assert!("gallery".parse::<View>().is_err());
    }
}
