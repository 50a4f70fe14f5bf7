//! Ordered, append-only list of saved maps for display.

use std::ops::Range;

use tracing::{error, info};

use crate::model::UserMap;
use crate::store::{CollectionStore, StorageError};

/// Receives list change notifications, like a list view's adapter.
pub trait ListObserver {
    /// A map was inserted at `index`.
    fn item_inserted(&mut self, index: usize);
}

/// Owns the working list of saved maps and keeps the store in sync with it.
pub struct MapListPresenter<S> {
    store: S,
    maps: Vec<UserMap>,
    observer: Option<Box<dyn ListObserver>>,
}

impl<S: CollectionStore> MapListPresenter<S> {
    /// Creates an empty presenter over `store`. Call [`Self::initialize`]
    /// to load saved maps.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store, maps: Vec::new(), observer: None }
    }

    /// Registers the view to notify on insertions, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn ListObserver>) {
        self.observer = Some(observer);
    }

    /// Loads the saved collection and makes it the working list.
    ///
    /// # Errors
    ///
    /// Propagates the [`StorageError`]; the working list is left unchanged.
    pub fn initialize(&mut self) -> Result<&[UserMap], StorageError> {
        self.maps = self.store.load_all()?;
        Ok(&self.maps)
    }

    /// Appends a map, persists the full list, and notifies the observer.
    ///
    /// Returns the index the map was inserted at. If saving fails the map is
    /// taken back out, nothing is notified, and the list is as before.
    ///
    /// # Errors
    ///
    /// Propagates the [`StorageError`] from saving.
    pub fn append(&mut self, map: UserMap) -> Result<usize, StorageError> {
        let index = self.maps.len();
        let title = map.title().to_string();
        self.maps.push(map);
        if let Err(err) = self.store.save_all(&self.maps) {
            error!(%title, %err, "map not saved");
            self.maps.pop();
            return Err(err);
        }
        info!(%title, index, "map added");
        if let Some(observer) = self.observer.as_mut() {
            observer.item_inserted(index);
        }
        Ok(index)
    }

    /// Appends several maps with a single save of the full list.
    ///
    /// Either every map is kept or none is: on a failed save the list is
    /// truncated back and nothing is notified. Returns the inserted index
    /// range; the observer hears about each index in order.
    ///
    /// # Errors
    ///
    /// Propagates the [`StorageError`] from saving.
    pub fn append_all(
        &mut self,
        maps: impl IntoIterator<Item = UserMap>,
    ) -> Result<Range<usize>, StorageError> {
        let start = self.maps.len();
        self.maps.extend(maps);
        if let Err(err) = self.store.save_all(&self.maps) {
            error!(count = self.maps.len() - start, %err, "maps not saved");
            self.maps.truncate(start);
            return Err(err);
        }
        let inserted = start..self.maps.len();
        info!(count = inserted.len(), "maps added");
        if let Some(observer) = self.observer.as_mut() {
            for index in inserted.clone() {
                observer.item_inserted(index);
            }
        }
        Ok(inserted)
    }

    /// The working list.
    #[must_use]
    pub fn maps(&self) -> &[UserMap] {
        &self.maps
    }

    /// The map at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&UserMap> {
        self.maps.get(index)
    }

    /// Number of maps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Returns `true` if there are no maps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use super::*;
    use crate::context::ServiceContext;
    use crate::model::{LatLng, Place};
    use crate::store::MapCollectionStore;

    /// Store fake that records every save.
    #[derive(Default)]
    struct RecordingStore {
        initial: Vec<UserMap>,
        saves: RefCell<Vec<Vec<UserMap>>>,
        fail: bool,
    }

    impl CollectionStore for &RecordingStore {
        fn load_all(&self) -> Result<Vec<UserMap>, StorageError> {
            Ok(self.initial.clone())
        }

        fn save_all(&self, maps: &[UserMap]) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Write {
                    path: PathBuf::from("/fake"),
                    source: "disk full".into(),
                });
            }
            self.saves.borrow_mut().push(maps.to_vec());
            Ok(())
        }
    }

    struct Inserted(Rc<RefCell<Vec<usize>>>);

    impl ListObserver for Inserted {
        fn item_inserted(&mut self, index: usize) {
            self.0.borrow_mut().push(index);
        }
    }

    fn map(title: &str) -> UserMap {
        UserMap::new(title, vec![Place::new("P", "d", LatLng::new(0.0, 0.0)).unwrap()]).unwrap()
    }

    #[test]
    fn initialize_loads_saved_maps() {
        let store = RecordingStore { initial: vec![map("A"), map("B")], ..Default::default() };
        let mut presenter = MapListPresenter::new(&store);

        let loaded = presenter.initialize().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(presenter.get(1).map(UserMap::title), Some("B"));
        assert!(presenter.get(2).is_none());
    }

    #[test]
    fn append_inserts_at_end_and_saves_once() {
        let store = RecordingStore { initial: vec![map("A")], ..Default::default() };
        let inserted = Rc::new(RefCell::new(Vec::new()));
        let mut presenter = MapListPresenter::new(&store);
        presenter.set_observer(Box::new(Inserted(inserted.clone())));
        presenter.initialize().unwrap();

        let index = presenter.append(map("B")).unwrap();

        assert_eq!(index, 1);
        assert_eq!(*inserted.borrow(), vec![1]);
        let saves = store.saves.borrow();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0], vec![map("A"), map("B")]);
    }

    #[test]
    fn failed_save_rolls_back_the_append() {
        let store = RecordingStore { initial: vec![map("A")], fail: true, ..Default::default() };
        let inserted = Rc::new(RefCell::new(Vec::new()));
        let mut presenter = MapListPresenter::new(&store);
        presenter.set_observer(Box::new(Inserted(inserted.clone())));
        presenter.initialize().unwrap();

        assert!(presenter.append(map("B")).is_err());

        assert_eq!(presenter.len(), 1);
        assert!(inserted.borrow().is_empty());
    }

    #[test]
    fn append_all_saves_once_and_notifies_each_index() {
        let store = RecordingStore { initial: vec![map("A")], ..Default::default() };
        let inserted = Rc::new(RefCell::new(Vec::new()));
        let mut presenter = MapListPresenter::new(&store);
        presenter.set_observer(Box::new(Inserted(inserted.clone())));
        presenter.initialize().unwrap();

        let range = presenter.append_all([map("B"), map("C")]).unwrap();

        assert_eq!(range, 1..3);
        assert_eq!(*inserted.borrow(), vec![1, 2]);
        assert_eq!(*store.saves.borrow(), vec![vec![map("A"), map("B"), map("C")]]);
    }

    #[test]
    fn failed_save_rolls_back_every_map_of_append_all() {
        let store = RecordingStore { initial: vec![map("A")], fail: true, ..Default::default() };
        let inserted = Rc::new(RefCell::new(Vec::new()));
        let mut presenter = MapListPresenter::new(&store);
        presenter.set_observer(Box::new(Inserted(inserted.clone())));
        presenter.initialize().unwrap();

        assert!(presenter.append_all([map("B"), map("C")]).is_err());

        assert_eq!(presenter.maps().to_vec(), vec![map("A")]);
        assert!(inserted.borrow().is_empty());
    }

    #[test]
    fn appends_survive_a_reload() {
        let ctx = ServiceContext::in_memory();
        let path = Path::new("/maps/UserMaps.json");
        let mut presenter = MapListPresenter::new(MapCollectionStore::new(&ctx, path));
        assert!(presenter.initialize().unwrap().is_empty());
        assert!(presenter.is_empty());

        presenter.append(map("A")).unwrap();
        presenter.append(map("B")).unwrap();

        let mut reloaded = MapListPresenter::new(MapCollectionStore::new(&ctx, path));
        reloaded.initialize().unwrap();
        assert_eq!(reloaded.maps(), presenter.maps());
    }
}
