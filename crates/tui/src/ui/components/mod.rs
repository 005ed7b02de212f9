//! UI components: the side drawer and the host page it is mounted on.

pub mod component;
pub mod host_page;
pub mod side_drawer;

pub(crate) use component::{Component, find_target_index_by_mouse_position};
pub use host_page::{HostPageComponent, HostPageState};
pub use side_drawer::{DrawerAttributes, SideDrawerComponent, SideDrawerState};
