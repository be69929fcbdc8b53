// SPDX-License-Identifier: MPL-2.0
//! Viewport width tracking with size-class change notifications.
//!
//! The watcher remembers the last class it reported and stays silent while
//! resizes remain inside one band. It keeps at most one subscriber; a new
//! subscription replaces the previous one.

use crate::domain::gallery::{classify, SizeClass};
use std::fmt;

type SizeClassCallback = Box<dyn FnMut(SizeClass)>;

/// Tracks the viewport width and reports size-class transitions.
pub struct ViewportWatcher {
    width: f32,
    last_notified: SizeClass,
    subscriber: Option<SizeClassCallback>,
}

impl ViewportWatcher {
    /// Creates a watcher for a viewport of the given width.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            width,
            last_notified: classify(width),
            subscriber: None,
        }
    }

    /// Registers the size-class subscriber, replacing any previous one.
    ///
    /// The callback runs once immediately with the class of the current
    /// width, regardless of earlier resizes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(SizeClass) + 'static,
    {
        let mut callback: SizeClassCallback = Box::new(callback);
        let class = classify(self.width);
        self.last_notified = class;
        callback(class);
        self.subscriber = Some(callback);
    }

    /// Handles a resize event.
    ///
    /// Returns the new class and notifies the subscriber only when the class
    /// differs from the last one reported.
    pub fn resize(&mut self, width: f32) -> Option<SizeClass> {
        self.width = width;
        let class = classify(width);
        if class == self.last_notified {
            return None;
        }

        log::debug!("size class {} -> {} at width {width}", self.last_notified, class);
        self.last_notified = class;
        if let Some(callback) = self.subscriber.as_mut() {
            callback(class);
        }
        Some(class)
    }

    /// Last observed viewport width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Class last reported to the subscriber (or derived at construction).
    #[must_use]
    pub fn size_class(&self) -> SizeClass {
        self.last_notified
    }

    #[must_use]
    pub fn has_subscriber(&self) -> bool {
        self.subscriber.is_some()
    }
}

impl fmt::Debug for ViewportWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportWatcher")
            .field("width", &self.width)
            .field("size_class", &self.last_notified)
            .field("has_subscriber", &self.subscriber.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_watcher(width: f32) -> (ViewportWatcher, Rc<RefCell<Vec<SizeClass>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut watcher = ViewportWatcher::new(width);
        watcher.subscribe(move |class| sink.borrow_mut().push(class));
        (watcher, seen)
    }

    #[test]
    fn subscribe_notifies_immediately_with_current_class() {
        let (_watcher, seen) = recording_watcher(700.0);
        assert_eq!(*seen.borrow(), vec![SizeClass::Medium]);
    }

    #[test]
    fn subscribe_notifies_even_after_resize_history() {
        let mut watcher = ViewportWatcher::new(500.0);
        watcher.resize(900.0);
        watcher.resize(650.0);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        watcher.subscribe(move |class| sink.borrow_mut().push(class));

        assert_eq!(*seen.borrow(), vec![SizeClass::Medium]);
    }

    #[test]
    fn resizes_within_a_band_are_suppressed() {
        let (mut watcher, seen) = recording_watcher(500.0);
        seen.borrow_mut().clear();

        let notified: Vec<Option<SizeClass>> = [500.0, 550.0, 700.0, 750.0, 900.0]
            .into_iter()
            .map(|w| watcher.resize(w))
            .collect();

        assert_eq!(
            notified,
            vec![
                None,
                None,
                Some(SizeClass::Medium),
                None,
                Some(SizeClass::Large)
            ]
        );
        assert_eq!(*seen.borrow(), vec![SizeClass::Medium, SizeClass::Large]);
    }

    #[test]
    fn boundary_widths_follow_inclusive_bands() {
        let (mut watcher, seen) = recording_watcher(600.0);
        assert_eq!(watcher.resize(600.5), Some(SizeClass::Medium));
        assert_eq!(watcher.resize(800.0), None);
        assert_eq!(watcher.resize(800.5), Some(SizeClass::Large));
        assert_eq!(
            *seen.borrow(),
            vec![SizeClass::Small, SizeClass::Medium, SizeClass::Large]
        );
    }

    #[test]
    fn second_subscription_replaces_first() {
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        let mut watcher = ViewportWatcher::new(500.0);

        let sink = Rc::clone(&first);
        watcher.subscribe(move |_| *sink.borrow_mut() += 1);
        let sink = Rc::clone(&second);
        watcher.subscribe(move |_| *sink.borrow_mut() += 1);

        watcher.resize(1000.0);

        assert_eq!(*first.borrow(), 1, "only the initial notification");
        assert_eq!(*second.borrow(), 2, "initial plus the resize");
    }

    #[test]
    fn resize_without_subscriber_still_tracks_class() {
        let mut watcher = ViewportWatcher::new(500.0);
        assert!(!watcher.has_subscriber());
        assert_eq!(watcher.resize(1200.0), Some(SizeClass::Large));
        assert_eq!(watcher.size_class(), SizeClass::Large);
        assert_eq!(watcher.width(), 1200.0);
    }
}
