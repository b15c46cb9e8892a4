//! Station link events
//!
//! The platform forwards its Wi-Fi station events here. The policy is fixed:
//! connect when the station starts, reconnect on every disconnect, and bring
//! up the accessory server once an address is assigned.

#[cfg(feature = "log")]
use esp_println::println;

/// Station events the light cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEvent {
    /// Station interface started
    StationStarted,
    /// Address acquired, network usable
    GotIp,
    /// Link lost
    Disconnected,
    /// Any other platform event
    Other,
}

/// What the dispatcher did for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    Connect,
    NetworkReady,
    Ignore,
}

/// Platform side of the link
pub trait NetworkHooks {
    /// Start (or restart) the station connection
    fn connect(&mut self);

    /// Network is usable; start the accessory server
    fn on_network_ready(&mut self);
}

/// Action taken for an event
pub const fn action_for(event: LinkEvent) -> LinkAction {
    match event {
        LinkEvent::StationStarted | LinkEvent::Disconnected => LinkAction::Connect,
        LinkEvent::GotIp => LinkAction::NetworkReady,
        LinkEvent::Other => LinkAction::Ignore,
    }
}

/// Handle a station event
pub fn dispatch<H: NetworkHooks>(event: LinkEvent, hooks: &mut H) -> LinkAction {
    let action = action_for(event);
    #[cfg(feature = "log")]
    println!("[network.dispatch] {:?} -> {:?}", event, action);
    match action {
        LinkAction::Connect => hooks.connect(),
        LinkAction::NetworkReady => hooks.on_network_ready(),
        LinkAction::Ignore => {}
    }
    action
}
