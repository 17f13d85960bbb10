use marsdash_types::{Apod, Photo, RoverData};

use crate::route::{total_pages, RouteParams};

/// Project info shown in the footer.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub author: String,
    pub year: String,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: "Mars Rover Dashboard".into(),
            author: "marsdash".into(),
            year: "2024".into(),
        }
    }
}

/// Rover metadata lifecycle for the selected rover.
///
/// `Loading` covers both "nothing fetched yet" and "fetch in flight".
#[derive(Debug, Clone)]
pub enum RoverSlot {
    Loading,
    Failed,
    Loaded(RoverData),
}

impl RoverSlot {
    pub fn data(&self) -> Option<&RoverData> {
        match self {
            Self::Loaded(rover) => Some(rover),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Router state: the canonical link plus its decomposed params.
#[derive(Debug, Clone)]
pub struct RouterState {
    pub current_link: String,
    pub params: RouteParams,
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            current_link: "/".into(),
            params: RouteParams::default(),
        }
    }
}

/// The single state object behind the whole dashboard.
///
/// An empty `selected_rover` means the home page is shown.
#[derive(Debug, Clone)]
pub struct Store {
    pub project: Project,
    pub user: String,
    pub apod: Option<Apod>,
    pub rovers: Vec<String>,
    pub photos: Vec<Photo>,
    pub rover_data: RoverSlot,
    pub selected_rover: String,
    pub router: RouterState,
}

impl Store {
    pub fn new() -> Self {
        Self {
            project: Project::default(),
            user: "Explorer".into(),
            apod: None,
            rovers: vec!["Curiosity".into(), "Opportunity".into(), "Spirit".into()],
            photos: Vec::new(),
            rover_data: RoverSlot::Loading,
            selected_rover: String::new(),
            router: RouterState::default(),
        }
    }

    pub fn is_home(&self) -> bool {
        self.selected_rover.is_empty()
    }

    /// Page count for the loaded rover, `None` while no rover data is held.
    pub fn total_pages(&self) -> Option<u64> {
        self.rover_data.data().map(|r| total_pages(r.total_photos))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
