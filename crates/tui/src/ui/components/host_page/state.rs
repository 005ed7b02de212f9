use std::collections::VecDeque;

use sidedrawer_types::DrawerAttribute;

use crate::ui::components::side_drawer::DrawerAttributes;

const MAX_REFLECTIONS: usize = 8;

/// What the host page knows about the drawer.
///
/// `observed` is only ever updated from reflected attributes, never read from
/// the drawer directly, so it shows exactly what an outside observer sees.
#[derive(Debug, Clone)]
pub struct HostPageState {
    observed: DrawerAttributes,
    reflections: VecDeque<String>,
    status: Option<String>,
}

impl HostPageState {
    /// Starts observing from the attribute values the host assigned at startup.
    pub fn new(initial: DrawerAttributes) -> Self {
        Self {
            observed: initial,
            reflections: VecDeque::with_capacity(MAX_REFLECTIONS),
            status: None,
        }
    }

    /// Records a reflected attribute change.
    pub fn observe(&mut self, attribute: &DrawerAttribute) {
        match attribute {
            DrawerAttribute::Title(title) => self.observed.title = title.clone(),
            DrawerAttribute::IsOpen(open) => self.observed.isopen = *open,
        }
        if self.reflections.len() == MAX_REFLECTIONS {
            self.reflections.pop_front();
        }
        self.reflections.push_back(attribute.to_string());
    }

    pub fn observed(&self) -> &DrawerAttributes {
        &self.observed
    }

    /// Most recent reflections, oldest first.
    pub fn reflections(&self) -> impl Iterator<Item = &str> {
        self.reflections.iter().map(String::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}
