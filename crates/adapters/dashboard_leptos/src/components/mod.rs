mod controls;
mod event_log;
mod port_info;
mod stat_card;
mod status_panel;

pub use controls::{CommandForm, LogControls};
pub use event_log::EventLogPanel;
pub use port_info::PortInfo;
pub use stat_card::StatCard;
pub use status_panel::StatusPanel;
