//! Behavioral tests for the gradient model and the coordinator.
//!
//! These drive the public API the way a host toolkit would and check the
//! notification stream subscribers observe.


use std::cell::RefCell;
use std::rc::Rc;

use crate::{Color, GradientStop, PickerCoordinator};

/// One notification as seen by a subscriber.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Seen {
    Color(Color, String),
    Gradient(Vec<GradientStop>),
}

/// Subscribe to both channels and collect everything into one ordered log.
pub(crate) fn record(picker: &mut PickerCoordinator) -> Rc<RefCell<Vec<Seen>>> {
    let log = Rc::new(RefCell::new(Vec::new()));

    let colors = Rc::clone(&log);
    picker.on_color_changed(move |color, hex| {
        colors.borrow_mut().push(Seen::Color(color, hex.to_string()));
    });

    let gradients = Rc::clone(&log);
    picker.on_gradient_changed(move |stops| {
        gradients.borrow_mut().push(Seen::Gradient(stops.to_vec()));
    });

    log
}
