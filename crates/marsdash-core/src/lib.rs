//! marsdash-core — Store, reducer and routing logic for the dashboard
//!
//! The whole UI is a function of one [`Store`]. Typed [`Action`]s are applied
//! through [`reduce`], which mutates the store and names the upstream fetch
//! the caller must run as an [`Effect`]. No I/O happens in this crate.

mod parse;
mod route;
mod state;

pub use parse::parse_action;
pub use route::{canonical_link, page_window, parse_link, total_pages, RouteParams, PAGE_SIZE};
pub use state::{Project, RouterState, RoverSlot, Store};

use marsdash_types::{Apod, Photo, RoverData};

/// Pagination moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Start,
    End,
    Prev,
    Next,
    Page(u64),
}

/// Supported actions.
#[derive(Debug, Clone)]
pub enum Action {
    /// Brand / "home" nav click.
    SelectHome,
    /// Rover nav click.
    SelectRover(String),
    /// Camera filter change; `None` clears the filter.
    SelectCamera(Option<String>),
    /// Earth-date filter change; `None` clears the filter.
    SelectEarthDate(Option<String>),
    /// Pagination control click.
    Paginate(PageTarget),
    /// Deep link or history pop: apply a canonical link.
    RouteTo(String),
    /// Rover fetch resolved.
    RoverLoaded { rover: RoverData, photos: Vec<Photo> },
    /// Rover fetch failed upstream.
    RoverFailed,
    /// APOD fetch resolved.
    ApodLoaded(Apod),
}

/// Upstream work a reduced action asks the caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchApod,
    FetchRover { rover: String, params: RouteParams },
}

fn fetch_rover(store: &Store) -> Option<Effect> {
    Some(Effect::FetchRover {
        rover: store.selected_rover.clone(),
        params: store.router.params.clone(),
    })
}

fn sync_link(store: &mut Store) {
    store.router.current_link = canonical_link(&store.selected_rover, &store.router.params);
}

/// Pure reducer: mutate the store based on an action, returning the fetch it
/// requires, if any.
pub fn reduce(store: &mut Store, action: Action) -> Option<Effect> {
    match action {
        Action::SelectHome => {
            store.selected_rover.clear();
            store.router = RouterState::default();
            if store.apod.is_none() {
                Some(Effect::FetchApod)
            } else {
                None
            }
        }

        Action::SelectRover(name) => {
            if name.is_empty() || name == store.selected_rover {
                return None;
            }
            store.selected_rover = name;
            store.photos.clear();
            store.rover_data = RoverSlot::Loading;
            store.router.params = RouteParams::default();
            sync_link(store);
            fetch_rover(store)
        }

        Action::SelectCamera(camera) => {
            if store.is_home() {
                return None;
            }
            store.router.params.camera = camera;
            sync_link(store);
            fetch_rover(store)
        }

        Action::SelectEarthDate(date) => {
            if store.is_home() {
                return None;
            }
            // A cleared date updates the params but does not refetch.
            let fetch = date.is_some();
            store.router.params.earth_date = date;
            sync_link(store);
            if fetch {
                fetch_rover(store)
            } else {
                None
            }
        }

        Action::Paginate(target) => {
            if store.is_home() {
                return None;
            }
            let current = store.router.params.page_number;
            let next = match target {
                PageTarget::Start => {
                    if current == 1 {
                        return None;
                    }
                    1
                }
                PageTarget::Prev => {
                    if current == 1 {
                        return None;
                    }
                    current - 1
                }
                PageTarget::End => {
                    let last = store.total_pages().filter(|&n| n > 0)?;
                    if current == last {
                        return None;
                    }
                    last
                }
                PageTarget::Next => {
                    let last = store.total_pages().filter(|&n| n > 0)?;
                    if current >= last {
                        return None;
                    }
                    current + 1
                }
                PageTarget::Page(n) => {
                    if n < 1 {
                        return None;
                    }
                    n
                }
            };
            store.photos.clear();
            store.router.params.page_number = next;
            sync_link(store);
            fetch_rover(store)
        }

        Action::RouteTo(path) => match parse_link(&path) {
            None => reduce(store, Action::SelectHome),
            Some((rover, params)) => {
                store.selected_rover = rover;
                store.photos.clear();
                store.rover_data = RoverSlot::Loading;
                store.router.params = params;
                sync_link(store);
                fetch_rover(store)
            }
        },

        Action::RoverLoaded { rover, photos } => {
            // Last response wins: the payload re-asserts the rover it is for.
            store.selected_rover = rover.name.clone();
            store.rover_data = RoverSlot::Loaded(rover);
            store.photos = photos;
            sync_link(store);
            None
        }

        Action::RoverFailed => {
            store.rover_data = RoverSlot::Failed;
            store.photos.clear();
            None
        }

        Action::ApodLoaded(apod) => {
            store.apod = Some(apod);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curiosity() -> RoverData {
        RoverData {
            name: "Curiosity".into(),
            launch_date: "2011-11-26".into(),
            landing_date: "2012-08-06".into(),
            status: "active".into(),
            total_photos: 250,
            cameras: Vec::new(),
        }
    }

    fn loaded_store() -> Store {
        let mut store = Store::new();
        reduce(&mut store, Action::SelectRover("Curiosity".into()));
        reduce(
            &mut store,
            Action::RoverLoaded {
                rover: curiosity(),
                photos: Vec::new(),
            },
        );
        store
    }

    #[test]
    fn test_select_home_resets_router() {
        let mut store = loaded_store();
        reduce(&mut store, Action::SelectHome);
        assert!(store.is_home());
        assert_eq!(store.router.current_link, "/");
        assert_eq!(store.router.params.page_number, 1);
    }

    #[test]
    fn test_select_home_fetches_apod_once() {
        let mut store = Store::new();
        assert_eq!(reduce(&mut store, Action::SelectHome), Some(Effect::FetchApod));

        reduce(
            &mut store,
            Action::ApodLoaded(Apod {
                date: "2024-01-15".into(),
                title: "t".into(),
                explanation: "e".into(),
                media_type: "image".into(),
                url: "u".into(),
                hdurl: None,
            }),
        );
        assert_eq!(reduce(&mut store, Action::SelectHome), None);
    }

    #[test]
    fn test_select_rover() {
        let mut store = Store::new();
        let effect = reduce(&mut store, Action::SelectRover("Spirit".into()));
        assert_eq!(store.selected_rover, "Spirit");
        assert_eq!(store.router.current_link, "/Spirit&page=1");
        assert!(matches!(effect, Some(Effect::FetchRover { ref rover, .. }) if rover == "Spirit"));
    }

    #[test]
    fn test_select_same_rover_is_noop() {
        let mut store = loaded_store();
        let link = store.router.current_link.clone();
        assert_eq!(reduce(&mut store, Action::SelectRover("Curiosity".into())), None);
        assert_eq!(store.router.current_link, link);
    }

    #[test]
    fn test_select_rover_resets_filters() {
        let mut store = loaded_store();
        reduce(&mut store, Action::SelectCamera(Some("FHAZ".into())));
        reduce(&mut store, Action::SelectRover("Spirit".into()));
        assert!(store.router.params.camera.is_none());
        assert_eq!(store.router.params.page_number, 1);
    }

    #[test]
    fn test_camera_change_keeps_page_and_refetches() {
        let mut store = loaded_store();
        reduce(&mut store, Action::Paginate(PageTarget::Page(4)));
        let effect = reduce(&mut store, Action::SelectCamera(Some("FHAZ".into())));
        assert_eq!(store.router.params.page_number, 4);
        assert_eq!(store.router.current_link, "/Curiosity&page=4&camera=FHAZ");
        match effect {
            Some(Effect::FetchRover { params, .. }) => {
                assert_eq!(params.camera.as_deref(), Some("FHAZ"));
                assert_eq!(params.page_number, 4);
            }
            other => panic!("expected rover fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_cleared_date_skips_fetch() {
        let mut store = loaded_store();
        assert!(reduce(&mut store, Action::SelectEarthDate(Some("2015-05-30".into()))).is_some());
        assert_eq!(reduce(&mut store, Action::SelectEarthDate(None)), None);
        assert_eq!(store.router.current_link, "/Curiosity&page=1");
    }

    #[test]
    fn test_paginate_boundaries_are_noops() {
        // 250 photos → 10 pages.
        let mut store = loaded_store();
        assert_eq!(reduce(&mut store, Action::Paginate(PageTarget::Start)), None);
        assert_eq!(reduce(&mut store, Action::Paginate(PageTarget::Prev)), None);

        reduce(&mut store, Action::Paginate(PageTarget::End));
        assert_eq!(store.router.params.page_number, 10);
        assert_eq!(reduce(&mut store, Action::Paginate(PageTarget::End)), None);
        assert_eq!(reduce(&mut store, Action::Paginate(PageTarget::Next)), None);
    }

    #[test]
    fn test_paginate_steps() {
        let mut store = loaded_store();
        reduce(&mut store, Action::Paginate(PageTarget::Next));
        assert_eq!(store.router.params.page_number, 2);
        assert!(store.photos.is_empty());
        reduce(&mut store, Action::Paginate(PageTarget::Prev));
        assert_eq!(store.router.params.page_number, 1);
    }

    #[test]
    fn test_paginate_without_data_cannot_jump_to_end() {
        let mut store = Store::new();
        reduce(&mut store, Action::SelectRover("Spirit".into()));
        // Page count is unknown until the first response lands.
        assert_eq!(reduce(&mut store, Action::Paginate(PageTarget::End)), None);
        assert_eq!(reduce(&mut store, Action::Paginate(PageTarget::Next)), None);
        assert_eq!(store.router.params.page_number, 1);
    }

    #[test]
    fn test_route_to_deep_link() {
        let mut store = Store::new();
        let effect = reduce(
            &mut store,
            Action::RouteTo("/Curiosity&page=2&camera=FHAZ".into()),
        );
        assert_eq!(store.selected_rover, "Curiosity");
        assert_eq!(store.router.params.page_number, 2);
        match effect {
            Some(Effect::FetchRover { params, .. }) => {
                assert_eq!(params.camera.as_deref(), Some("FHAZ"))
            }
            other => panic!("expected rover fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_route_to_root_goes_home() {
        let mut store = loaded_store();
        reduce(&mut store, Action::RouteTo("/".into()));
        assert!(store.is_home());
    }

    #[test]
    fn test_rover_loaded_wins_over_navigation() {
        let mut store = Store::new();
        reduce(&mut store, Action::SelectRover("Curiosity".into()));
        reduce(&mut store, Action::SelectHome);
        // The in-flight response re-selects its rover when it lands.
        reduce(
            &mut store,
            Action::RoverLoaded {
                rover: curiosity(),
                photos: Vec::new(),
            },
        );
        assert_eq!(store.selected_rover, "Curiosity");
        assert!(store.rover_data.data().is_some());
    }

    #[test]
    fn test_rover_failed_clears_photos() {
        let mut store = loaded_store();
        reduce(&mut store, Action::RoverFailed);
        assert!(store.rover_data.is_failed());
        assert!(store.photos.is_empty());
    }
}
