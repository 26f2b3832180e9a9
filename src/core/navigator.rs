//! # Learning Navigator
//!
//! Tracks which subject (if any) is open and derives what should be on screen.
//!
//! ```text
//!              select_subject(s)
//!   Dashboard ───────────────────► Detail(s)
//!       ▲                           │   ▲
//!       │  clear_selected_subject() │   │ select_subject(t)
//!       └───────────────────────────┘   └──── (replaces s)
//! ```
//!
//! Renderers either call `current_view()` each frame or `subscribe()` to be
//! told synchronously after every change.

use log::{debug, warn};
use std::fmt;
use std::rc::Rc;

use crate::core::catalog::{Catalog, LearningContent, Subject};
use crate::core::routes::{NavigationSink, RouteTable};

/// What the screen shows.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Dashboard(&'a [Rc<Subject>]),
    Detail(&'a Rc<Subject>),
}

impl View<'_> {
    pub fn is_dashboard(&self) -> bool {
        matches!(self, View::Dashboard(_))
    }

    /// The open subject, if this is a detail view.
    pub fn subject(&self) -> Option<&Rc<Subject>> {
        match self {
            View::Dashboard(_) => None,
            View::Detail(subject) => Some(subject),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&View<'_>)>;

pub struct Navigator {
    catalog: Rc<Catalog>,
    selected: Option<Rc<Subject>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Navigator {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            selected: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn catalog(&self) -> &Rc<Catalog> {
        &self.catalog
    }

    pub fn selected_subject(&self) -> Option<&Rc<Subject>> {
        self.selected.as_ref()
    }

    pub fn current_view(&self) -> View<'_> {
        view_of(&self.catalog, &self.selected)
    }

    /// Open `subject`. It must be one of this navigator's catalog subjects
    /// (the same `Rc`); anything else is ignored so the selection never dangles.
    pub fn select_subject(&mut self, subject: &Rc<Subject>) {
        if !self.catalog.contains(subject) {
            warn!("Ignoring selection of subject outside the catalog: {}", subject.name);
            return;
        }
        debug!("Selected subject: {}", subject.name);
        self.selected = Some(Rc::clone(subject));
        self.notify();
    }

    /// Open the subject at `index` in catalog order. Returns false when out of range.
    pub fn select_subject_at(&mut self, index: usize) -> bool {
        match self.catalog.get(index).cloned() {
            Some(subject) => {
                self.select_subject(&subject);
                true
            }
            None => false,
        }
    }

    /// Back to the dashboard. Already there: nothing happens, nobody is notified.
    pub fn clear_selected_subject(&mut self) {
        if let Some(previous) = self.selected.take() {
            debug!("Cleared subject selection (was {})", previous.name);
            self.notify();
        }
    }

    /// Ask `sink` to open the destination routed for `content`, if any.
    /// At most one request is made per call.
    pub fn activate_content<'r>(
        &self,
        content: &LearningContent,
        routes: &'r RouteTable,
        sink: &mut dyn NavigationSink,
    ) -> Option<&'r str> {
        let destination = routes.destination_for(content)?;
        debug!("Content {} routes to {}", content.id, destination);
        sink.navigate(destination);
        Some(destination)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&View<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        let view = view_of(&self.catalog, &self.selected);
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&view);
        }
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("subjects", &self.catalog.len())
            .field("selected", &self.selected.as_ref().map(|s| s.name.as_str()))
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn view_of<'a>(catalog: &'a Catalog, selected: &'a Option<Rc<Subject>>) -> View<'a> {
    match selected {
        Some(subject) => View::Detail(subject),
        None => View::Dashboard(catalog.subjects()),
    }
}
