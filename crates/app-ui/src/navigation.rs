//! Navigation framework
//!
//! Routes for the courier screens, a simple stack, and the [`Navigator`]
//! capability screens use to move between routes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Route parameters, keyed by the host's parameter names
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Routes
// =============================================================================

/// Routes reachable from the courier screens
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Dashboard
    Home,
    /// Courier list
    AllCouriers,
    /// Single courier detail
    CourierView {
        /// Courier record id
        #[serde(rename = "courierId")]
        courier_id: String,
    },
}

impl Route {
    /// Courier detail route for `courier_id`
    pub fn courier_view(courier_id: impl Into<String>) -> Self {
        Route::CourierView {
            courier_id: courier_id.into(),
        }
    }

    /// Route name as registered with the host navigator
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AllCouriers => "AllCouriers",
            Route::CourierView { .. } => "CourierView",
        }
    }

    /// Parameters passed along with the route
    pub fn params(&self) -> RouteParams {
        let mut params = RouteParams::new();
        if let Route::CourierView { courier_id } = self {
            params.insert("courierId".to_string(), courier_id.clone());
        }
        params
    }

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AllCouriers => "All Couriers",
            Route::CourierView { .. } => "Courier Details",
        }
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    root: StackEntry,
    /// Entries above the root (bottom to top)
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            root: StackEntry::new(root),
            entries: Vec::new(),
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        self.entries.pop().is_some()
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.entries.last().unwrap_or(&self.root).route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len() + 1
    }

    /// Routes from bottom to top
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        std::iter::once(&self.root)
            .chain(self.entries.iter())
            .map(|entry| &entry.route)
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Navigation capability handed to screens
pub trait Navigator {
    /// Open `route` on top of the current screen
    fn navigate(&mut self, route: Route);

    /// Return to the previous screen; false when already at the root
    fn go_back(&mut self) -> bool;
}

impl Navigator for NavigationStack {
    fn navigate(&mut self, route: Route) {
        self.push(route);
    }

    fn go_back(&mut self) -> bool {
        self.pop()
    }
}
