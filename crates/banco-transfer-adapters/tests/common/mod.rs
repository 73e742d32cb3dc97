#![allow(dead_code)]

use std::sync::Mutex;

use banco_transfer_core::{NavigatorPort, PortError, Route};

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn visited_routes(&self) -> Vec<Route> {
        self.visited.lock().expect("navigator lock").clone()
    }
}

impl NavigatorPort for RecordingNavigator {
    fn navigate_to(&self, route: &Route) -> Result<(), PortError> {
        self.visited
            .lock()
            .expect("navigator lock")
            .push(route.clone());
        Ok(())
    }
}
