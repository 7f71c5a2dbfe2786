use std::hash::{Hash, Hasher};

use crate::{error::GraphError, graph::Identifiable};

#[derive(Clone, Debug)]
struct Slot<T> {
    element: T,
    hidden: bool,
}

/// An id-indexed arena whose occupants can be hidden without being removed.
///
/// Element `e` always lives in slot `e.id()`. Hiding only flips a flag, so a hidden
/// element keeps its slot and can be shown again in O(1).
///
/// # Invariants
/// - `slots.len()` is the capacity; it only changes through [`HidingSet::set_capacity`].
/// - `visible` and `occupied` count the visible and all occupied slots respectively.
///
/// # Examples
///
/// ```
/// use veilgraph::{graph::NodeId, sets::hiding::HidingSet};
///
/// let mut set = HidingSet::new(4);
/// set.add(NodeId::new(2)).unwrap();
/// set.set_hidden(2, true);
///
/// assert!(set.get(2).is_none());
/// assert_eq!(set.get_even_if_hidden(2), Some(&NodeId::new(2)));
/// assert_eq!(set.len(), 0);
/// assert_eq!(set.len_all(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct HidingSet<T> {
    slots: Vec<Option<Slot<T>>>,
    visible: usize,
    occupied: usize,
}

impl<T> HidingSet<T>
where
    T: Identifiable + PartialEq,
{
    /// Creates an empty set with room for ids `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        HidingSet {
            slots,
            visible: 0,
            occupied: 0,
        }
    }

    /// A set with every id `0..capacity` occupied by `make(id)`, all visible.
    ///
    /// `make` must return an element whose id is the id it was given.
    pub fn filled(capacity: usize, make: impl Fn(usize) -> T) -> Self {
        let slots: Vec<_> = (0..capacity)
            .map(|id| {
                let element = make(id);
                debug_assert_eq!(element.id(), id);
                Some(Slot {
                    element,
                    hidden: false,
                })
            })
            .collect();
        HidingSet {
            slots,
            visible: capacity,
            occupied: capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of visible elements. O(1).
    pub fn len(&self) -> usize {
        self.visible
    }

    /// Number of elements, hidden ones included. O(1).
    pub fn len_all(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.visible == 0
    }

    /// Places `element` at slot `element.id()` as a visible element.
    ///
    /// Adding an element equal to the current occupant is a no-op and keeps its hidden
    /// state. Returns `true` if the slot was empty before.
    ///
    /// # Errors
    /// - [`GraphError::CapacityExceeded`] if the id does not fit the capacity.
    /// - [`GraphError::SlotOccupied`] if a different element holds the slot.
    pub fn add(&mut self, element: T) -> Result<bool, GraphError> {
        let id = element.id();
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(id)
            .ok_or(GraphError::CapacityExceeded {
                capacity,
                required: id + 1,
            })?;

        match slot {
            Some(existing) if existing.element == element => Ok(false),
            Some(_) => Err(GraphError::SlotOccupied { id }),
            None => {
                *slot = Some(Slot {
                    element,
                    hidden: false,
                });
                self.visible += 1;
                self.occupied += 1;
                Ok(true)
            }
        }
    }

    /// The visible element with this id.
    pub fn get(&self, id: usize) -> Option<&T> {
        match self.slots.get(id) {
            Some(Some(slot)) if !slot.hidden => Some(&slot.element),
            _ => None,
        }
    }

    /// The element with this id, whether hidden or not.
    pub fn get_even_if_hidden(&self, id: usize) -> Option<&T> {
        self.slots
            .get(id)
            .and_then(|slot| slot.as_ref().map(|s| &s.element))
    }

    /// `true` if `element` is stored and visible.
    pub fn contains(&self, element: &T) -> bool {
        self.get(element.id()) == Some(element)
    }

    /// `true` if `element` is stored, hidden or not.
    pub fn contains_even_if_hidden(&self, element: &T) -> bool {
        self.get_even_if_hidden(element.id()) == Some(element)
    }

    /// `true` only for an occupied, hidden slot.
    pub fn is_hidden(&self, id: usize) -> bool {
        matches!(self.slots.get(id), Some(Some(slot)) if slot.hidden)
    }

    /// Sets the hidden flag of the element at `id`. Empty slots are ignored.
    ///
    /// Returns `true` if the flag actually changed.
    pub fn set_hidden(&mut self, id: usize, hidden: bool) -> bool {
        let Some(Some(slot)) = self.slots.get_mut(id) else {
            return false;
        };
        if slot.hidden == hidden {
            return false;
        }
        slot.hidden = hidden;
        if hidden {
            self.visible -= 1;
        } else {
            self.visible += 1;
        }
        true
    }

    /// Highest occupied id, if any.
    pub fn highest_id(&self) -> Option<usize> {
        self.slots.iter().rposition(Option::is_some)
    }

    /// Grows or shrinks the backing storage.
    ///
    /// # Errors
    /// [`GraphError::CapacityExceeded`] if an occupied id would not fit.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), GraphError> {
        match self.highest_id() {
            Some(highest) if highest >= capacity => {
                return Err(GraphError::CapacityExceeded {
                    capacity,
                    required: highest + 1,
                });
            }
            _ => {}
        }
        self.slots.resize_with(capacity, || None);
        Ok(())
    }

    /// Visible elements in id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.occupied_slots()
            .filter(|slot| !slot.hidden)
            .map(|slot| &slot.element)
    }

    /// All elements in id order, hidden ones included.
    pub fn iter_all(&self) -> impl Iterator<Item = &T> {
        self.occupied_slots().map(|slot| &slot.element)
    }

    /// Only the hidden elements, in id order.
    pub fn iter_hidden(&self) -> impl Iterator<Item = &T> {
        self.occupied_slots()
            .filter(|slot| slot.hidden)
            .map(|slot| &slot.element)
    }

    fn occupied_slots(&self) -> impl Iterator<Item = &Slot<T>> {
        self.slots.iter().flatten()
    }
}

impl<T> PartialEq for HidingSet<T>
where
    T: Identifiable + PartialEq,
{
    /// Two sets are equal when they hold equal elements with equal hidden flags.
    /// Unused capacity does not matter.
    fn eq(&self, other: &Self) -> bool {
        self.occupied == other.occupied
            && self.visible == other.visible
            && self
                .occupied_slots()
                .zip(other.occupied_slots())
                .all(|(a, b)| a.element == b.element && a.hidden == b.hidden)
    }
}

impl<T> Eq for HidingSet<T> where T: Identifiable + Eq {}

impl<T> Hash for HidingSet<T>
where
    T: Identifiable + PartialEq + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.occupied.hash(state);
        for slot in self.occupied_slots() {
            slot.element.hash(state);
            slot.hidden.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, NodeId};
    use std::collections::hash_map::DefaultHasher;

    fn node(i: usize) -> NodeId {
        NodeId::new(i)
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_set_is_empty() {
        let set: HidingSet<NodeId> = HidingSet::new(8);
        assert_eq!(set.capacity(), 8);
        assert_eq!(set.len(), 0);
        assert_eq!(set.len_all(), 0);
        assert!(set.is_empty());
        assert!(set.highest_id().is_none());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_filled_occupies_every_slot() {
        let set = HidingSet::filled(4, NodeId::new);
        assert_eq!(set.len(), 4);
        assert_eq!(set.len_all(), 4);
        assert_eq!(set.highest_id(), Some(3));
        assert_eq!(set.get(2), Some(&node(2)));
    }

    #[test]
    fn test_add_places_element_at_its_id() {
        let mut set = HidingSet::new(5);
        assert_eq!(set.add(node(3)), Ok(true));
        assert_eq!(set.get(3), Some(&node(3)));
        assert!(set.get(2).is_none());
        assert_eq!(set.len(), 1);
        assert_eq!(set.highest_id(), Some(3));
    }

    #[test]
    fn test_readding_identical_element_is_noop() {
        let mut set = HidingSet::new(5);
        set.add(node(1)).unwrap();
        set.set_hidden(1, true);

        assert_eq!(set.add(node(1)), Ok(false));
        assert!(set.is_hidden(1));
        assert_eq!(set.len_all(), 1);
    }

    #[test]
    fn test_adding_different_element_fails() {
        let mut set = HidingSet::new(3);
        set.add(Edge::new(0, node(0), node(1))).unwrap();

        let result = set.add(Edge::new(0, node(1), node(2)));
        assert_eq!(result, Err(GraphError::SlotOccupied { id: 0 }));
        assert_eq!(set.get(0), Some(&Edge::new(0, node(0), node(1))));
    }

    #[test]
    fn test_adding_beyond_capacity_fails() {
        let mut set = HidingSet::new(2);
        assert_eq!(
            set.add(node(2)),
            Err(GraphError::CapacityExceeded {
                capacity: 2,
                required: 3
            })
        );
    }

    #[test]
    fn test_hidden_elements_only_visible_through_even_if_hidden() {
        let mut set = HidingSet::new(4);
        set.add(node(0)).unwrap();
        set.add(node(2)).unwrap();

        assert!(set.set_hidden(2, true));
        assert!(set.get(2).is_none());
        assert_eq!(set.get_even_if_hidden(2), Some(&node(2)));
        assert!(!set.contains(&node(2)));
        assert!(set.contains_even_if_hidden(&node(2)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.len_all(), 2);
    }

    #[test]
    fn test_set_hidden_is_idempotent() {
        let mut set = HidingSet::new(4);
        set.add(node(1)).unwrap();

        assert!(set.set_hidden(1, true));
        assert!(!set.set_hidden(1, true));
        assert_eq!(set.len(), 0);

        assert!(set.set_hidden(1, false));
        assert!(!set.set_hidden(1, false));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_set_hidden_on_empty_slot_is_ignored() {
        let mut set: HidingSet<NodeId> = HidingSet::new(4);
        assert!(!set.set_hidden(2, true));
        assert!(!set.set_hidden(10, true));
        assert!(!set.is_hidden(2));
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_iteration_modes() {
        let mut set = HidingSet::new(6);
        for i in [4, 0, 2, 5] {
            set.add(node(i)).unwrap();
        }
        set.set_hidden(2, true);
        set.set_hidden(5, true);

        let visible: Vec<_> = set.iter().copied().collect();
        let all: Vec<_> = set.iter_all().copied().collect();
        let hidden: Vec<_> = set.iter_hidden().copied().collect();

        assert_eq!(visible, vec![node(0), node(4)]);
        assert_eq!(all, vec![node(0), node(2), node(4), node(5)]);
        assert_eq!(hidden, vec![node(2), node(5)]);
    }

    #[test]
    fn test_capacity_growth_keeps_elements() {
        let mut set = HidingSet::new(2);
        set.add(node(1)).unwrap();
        set.set_capacity(10).unwrap();

        assert_eq!(set.capacity(), 10);
        assert_eq!(set.get(1), Some(&node(1)));
        set.add(node(9)).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_capacity_shrink_above_high_water_mark() {
        let mut set = HidingSet::new(10);
        set.add(node(3)).unwrap();
        set.set_capacity(4).unwrap();
        assert_eq!(set.capacity(), 4);
    }

    #[test]
    fn test_capacity_shrink_truncating_occupied_fails() {
        let mut set = HidingSet::new(10);
        set.add(node(6)).unwrap();
        set.set_hidden(6, true);

        assert_eq!(
            set.set_capacity(5),
            Err(GraphError::CapacityExceeded {
                capacity: 5,
                required: 7
            })
        );
        assert_eq!(set.capacity(), 10);
    }

    #[test]
    fn test_equality_includes_hidden_state_but_not_capacity() {
        let mut a = HidingSet::new(4);
        let mut b = HidingSet::new(8);
        for i in 0..3 {
            a.add(node(i)).unwrap();
            b.add(node(i)).unwrap();
        }
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        a.set_hidden(1, true);
        assert_ne!(a, b);

        b.set_hidden(1, true);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_equality_compares_ids() {
        let mut a = HidingSet::new(4);
        let mut b = HidingSet::new(4);
        a.add(node(0)).unwrap();
        b.add(node(1)).unwrap();
        assert_ne!(a, b);
    }
}
