//! AlertState - Pending In-Window Alerts

use std::collections::VecDeque;

use crate::domain::alert::AlertRequest;

/// Queue of alerts waiting to be shown by the overlay presenter.
/// The front entry is the one on screen.
#[derive(Debug)]
pub struct AlertState {
    pending: VecDeque<AlertRequest>,
    next_id: u64,
}

impl Default for AlertState {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            next_id: 1,
        }
    }
}

impl AlertState {
    /// Queue an alert and return its assigned id
    pub fn push(&mut self, mut alert: AlertRequest) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        alert.id = id;
        self.pending.push_back(alert);
        id
    }

    /// The alert currently on screen
    pub fn current(&self) -> Option<&AlertRequest> {
        self.pending.front()
    }

    /// Dismiss the alert on screen, revealing the next one
    pub fn dismiss(&mut self) -> Option<AlertRequest> {
        self.pending.pop_front()
    }

    /// Whether an overlay alert is on screen; input to the page is ignored meanwhile
    pub fn blocks_input(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut state = AlertState::default();
        assert_eq!(state.push(AlertRequest::info("a")), 1);
        assert_eq!(state.push(AlertRequest::info("b")), 2);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn dismiss_reveals_alerts_in_order() {
        let mut state = AlertState::default();
        state.push(AlertRequest::info("first"));
        state.push(AlertRequest::info("second"));

        assert_eq!(state.current().map(|a| a.message.as_str()), Some("first"));
        assert_eq!(state.dismiss().map(|a| a.id), Some(1));
        assert_eq!(state.current().map(|a| a.message.as_str()), Some("second"));
        assert_eq!(state.dismiss().map(|a| a.id), Some(2));
        assert!(state.is_empty());
        assert!(state.current().is_none());
    }

    #[test]
    fn pending_alert_blocks_input_until_dismissed() {
        let mut state = AlertState::default();
        assert!(!state.blocks_input());

        state.push(AlertRequest::info("You clicked me!"));
        assert!(state.blocks_input());

        state.dismiss();
        assert!(!state.blocks_input());
    }

    #[test]
    fn dismiss_on_empty_is_noop() {
        let mut state = AlertState::default();
        assert!(state.dismiss().is_none());
    }

    #[test]
    fn ids_keep_increasing_after_dismiss() {
        let mut state = AlertState::default();
        state.push(AlertRequest::info("a"));
        state.dismiss();
        assert_eq!(state.push(AlertRequest::info("b")), 2);
    }
}
