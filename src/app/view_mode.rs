//! Screens the dashboard can show.

use std::fmt;

/// Which screen is active.
///
/// `Main`, `Images` and `Networks` are main screens: list views that
/// back-navigation returns to. Every other value is a detail or overlay
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Container list
    #[default]
    Main,
    Images,
    Networks,
    InspectImage,
    InspectNetwork,
    ImageHistory,
    DiskUsage,
    Events,
    Help,
    Info,
    Monitor,
    Nodes,
    Services,
    /// Tasks of one service
    ServiceTasks,
    /// Tasks of one node
    Tasks,
}

impl ViewMode {
    /// Every view mode, main screens first.
    pub const ALL: [ViewMode; 15] = [
        ViewMode::Main,
        ViewMode::Images,
        ViewMode::Networks,
        ViewMode::InspectImage,
        ViewMode::InspectNetwork,
        ViewMode::ImageHistory,
        ViewMode::DiskUsage,
        ViewMode::Events,
        ViewMode::Help,
        ViewMode::Info,
        ViewMode::Monitor,
        ViewMode::Nodes,
        ViewMode::Services,
        ViewMode::ServiceTasks,
        ViewMode::Tasks,
    ];

    /// Whether back-navigation may return to this screen.
    pub fn is_main_screen(&self) -> bool {
        matches!(self, ViewMode::Main | ViewMode::Images | ViewMode::Networks)
    }

    /// Screen title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Main => "Containers",
            ViewMode::Images => "Images",
            ViewMode::Networks => "Networks",
            ViewMode::InspectImage => "Image",
            ViewMode::InspectNetwork => "Network",
            ViewMode::ImageHistory => "Image history",
            ViewMode::DiskUsage => "Disk usage",
            ViewMode::Events => "Events",
            ViewMode::Help => "Help",
            ViewMode::Info => "Info",
            ViewMode::Monitor => "Monitor",
            ViewMode::Nodes => "Nodes",
            ViewMode::Services => "Services",
            ViewMode::ServiceTasks => "Service tasks",
            ViewMode::Tasks => "Node tasks",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
