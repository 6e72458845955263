//! Single-entry weight cache keyed by file path.

use std::path::{Path, PathBuf};

/// Holds at most one loaded value, keyed by the path it was loaded from.
///
/// Asking for the held path reuses the value. Asking for any other path drops
/// the held value first, then loads the new one, so two weight sets are never
/// resident at once.
#[derive(Debug)]
pub struct WeightSlot<V> {
    entry: Option<(PathBuf, V)>,
}

impl<V> Default for WeightSlot<V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<V> WeightSlot<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the held value, if any.
    pub fn key(&self) -> Option<&Path> {
        self.entry.as_ref().map(|(path, _)| path.as_path())
    }

    /// The held value if it was loaded from `path`.
    pub fn get(&self, path: &Path) -> Option<&V> {
        match &self.entry {
            Some((held, value)) if held == path => Some(value),
            _ => None,
        }
    }

    /// Return the value for `path`, loading it on a miss.
    ///
    /// On a miss the previous value is dropped before `load` runs. If `load`
    /// fails the slot stays empty.
    pub fn get_or_try_load<E>(
        &mut self,
        path: &Path,
        load: impl FnOnce(&Path) -> Result<V, E>,
    ) -> Result<&V, E> {
        match self.entry.take() {
            Some((held, value)) if held == path => {
                let (_, value) = self.entry.insert((held, value));
                Ok(&*value)
            }
            previous => {
                if let Some((evicted, value)) = previous {
                    tracing::debug!("Evicting weights for {:?}", evicted);
                    drop(value);
                }
                let value = load(path)?;
                tracing::debug!("Loaded weights for {:?}", path);
                let (_, value) = self.entry.insert((path.to_path_buf(), value));
                Ok(&*value)
            }
        }
    }

    /// Remove and return the held entry.
    pub fn take(&mut self) -> Option<(PathBuf, V)> {
        self.entry.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_same_path_reuses_value() {
        let mut slot = WeightSlot::new();
        let mut loads = 0;

        for _ in 0..3 {
            let value = slot
                .get_or_try_load(Path::new("a.safetensors"), |_| {
                    loads += 1;
                    Ok::<_, ()>(42)
                })
                .unwrap();
            assert_eq!(*value, 42);
        }
        assert_eq!(loads, 1);
    }

    #[test]
    fn test_different_path_evicts_previous() {
        let first = Rc::new("first");
        let mut slot = WeightSlot::new();

        slot.get_or_try_load(Path::new("a"), |_| Ok::<_, ()>(first.clone()))
            .unwrap();
        assert_eq!(Rc::strong_count(&first), 2);

        slot.get_or_try_load(Path::new("b"), |_| {
            // The old entry is gone before the new load starts.
            assert_eq!(Rc::strong_count(&first), 1);
            Ok::<_, ()>(Rc::new("second"))
        })
        .unwrap();

        assert_eq!(slot.key(), Some(Path::new("b")));
        assert!(slot.get(Path::new("a")).is_none());
        assert_eq!(**slot.get(Path::new("b")).unwrap(), "second");
    }

    #[test]
    fn test_failed_load_leaves_slot_empty() {
        let mut slot = WeightSlot::new();
        slot.get_or_try_load(Path::new("a"), |_| Ok::<_, &str>(1))
            .unwrap();

        let err = slot
            .get_or_try_load(Path::new("b"), |_| Err("corrupt"))
            .unwrap_err();

        assert_eq!(err, "corrupt");
        assert!(slot.key().is_none());
    }

    #[test]
    fn test_take_empties_slot() {
        let mut slot = WeightSlot::new();
        slot.get_or_try_load(Path::new("a"), |_| Ok::<_, ()>(7))
            .unwrap();

        assert_eq!(slot.take(), Some((PathBuf::from("a"), 7)));
        assert!(slot.key().is_none());
    }
}
