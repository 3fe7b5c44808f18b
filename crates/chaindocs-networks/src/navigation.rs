//! Sidebar grouping for chain documentation pages.
//!
//! Navigation is a view over [`Registry`] sections, serialized to JSON for the
//! site generator's sidebar configuration.

use serde::Serialize;

use crate::Registry;

/// A sidebar link to one network's documentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub text: String,
    /// Link target path.
    pub link: String,
}

/// A collapsible sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Group heading.
    pub text: String,
    /// Links in display order.
    pub items: Vec<NavItem>,
}

impl Registry {
    /// Build sidebar sections with links under `base_path`.
    ///
    /// Section items that do not resolve to a registered network are skipped;
    /// [`Registry::validate`] reports them.
    #[must_use]
    pub fn navigation(&self, base_path: &str) -> Vec<NavSection> {
        let base = base_path.trim_end_matches('/');

        self.sections()
            .iter()
            .map(|section| NavSection {
                text: section.heading.clone(),
                items: section
                    .networks
                    .iter()
                    .filter_map(|id| self.get(id))
                    .map(|network| NavItem {
                        text: network.name.clone(),
                        link: format!("{base}/{}", network.id),
                    })
                    .collect(),
            })
            .collect()
    }
}
