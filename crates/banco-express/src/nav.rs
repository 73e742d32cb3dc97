//! Navigation plumbing between the controller's ports and the egui views.

use std::sync::{Arc, Mutex};

use banco_transfer_core::{NavigatorPort, PortError, Route};

/// Navigator that parks the requested route in shared state and wakes the
/// UI. The app drains it every frame and switches views. Cloneable so the
/// redirect scheduler can hold one on its runtime threads.
#[derive(Clone)]
pub struct SharedNavigator {
    requested: Arc<Mutex<Option<Route>>>,
    ctx: egui::Context,
}

impl SharedNavigator {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            requested: Arc::new(Mutex::new(None)),
            ctx,
        }
    }

    pub fn take_requested(&self) -> Option<Route> {
        self.requested.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl NavigatorPort for SharedNavigator {
    fn navigate_to(&self, route: &Route) -> Result<(), PortError> {
        let mut guard = self
            .requested
            .lock()
            .map_err(|_| PortError::Transport("navigator lock poisoned".to_owned()))?;
        *guard = Some(route.clone());
        self.ctx.request_repaint();
        Ok(())
    }
}
