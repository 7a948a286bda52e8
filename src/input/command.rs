//! Commands that keyboard input can trigger.
//!
//! The [`Command`] enum decouples key bindings from their effects; the
//! effect of each command lives in [`dispatch`](super::dispatch).

/// Every user action the dashboard understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // =========================================================================
    // Global Commands (always active)
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Return to the last main screen (Esc)
    Back,

    // =========================================================================
    // Screen Navigation
    // =========================================================================
    ShowContainers,
    ShowImages,
    /// Fetch and show the network list
    ShowNetworks,
    ShowNodes,
    ShowServices,
    ShowMonitor,
    ShowEvents,
    /// Fetch and show host information
    ShowInfo,
    ShowDiskUsage,
    ShowHelp,

    // =========================================================================
    // Selection
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Open the selected row (Enter): inspect an image or network, list the
    /// tasks of a service or node
    OpenSelected,
    /// Show the history of the selected image
    History,

    // =========================================================================
    // Mutations
    // =========================================================================
    /// Kill the selected container
    Kill,
    /// Remove the selected container, image or network
    Remove,
    /// Remove the selected image even if it is in use
    ForceRemove,
    RemoveAllStopped,
    RemoveDangling,
    Prune,
    /// Rotate the network sort order
    SortNetworks,
}

impl Command {
    /// Whether the command switches to another screen, which resets the
    /// selection.
    pub fn changes_screen(&self) -> bool {
        matches!(
            self,
            Command::Back
                | Command::ShowContainers
                | Command::ShowImages
                | Command::ShowNetworks
                | Command::ShowNodes
                | Command::ShowServices
                | Command::ShowMonitor
                | Command::ShowEvents
                | Command::ShowInfo
                | Command::ShowDiskUsage
                | Command::ShowHelp
        )
    }
}
