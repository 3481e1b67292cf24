//! Circular doubly-linked list with stable element handles
//!
//! Values live in an arena of slots linked by index. An [`Element`] names a
//! slot together with the list it belongs to and the slot's generation, so a
//! handle from another list or one whose element was removed is rejected
//! instead of silently touching the wrong value.

pub mod mixing;

use crate::error::{PathkitError, Result};
use std::fmt;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one [`CircularList`] instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl ListId {
    fn fresh() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to one position in a [`CircularList`].
///
/// Handles are plain copyable values. They stay valid across insertions,
/// moves and swaps, and become stale once their element is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    list: ListId,
    slot: usize,
    generation: u32,
}

impl Element {
    /// The list this handle was issued by
    pub fn list(&self) -> ListId {
        self.list
    }
}

#[derive(Debug)]
struct Slot<T> {
    /// `None` while the slot sits on the free list
    value: Option<T>,
    generation: u32,
    next: usize,
    prev: usize,
}

/// A ring of values with a movable `first` reference.
///
/// Walking `next` `len()` times from any element returns to it, and
/// `next`/`prev` are inverses. Every method taking an [`Element`] fails
/// with [`PathkitError::ForeignElement`] or [`PathkitError::StaleElement`]
/// for handles this list does not currently own.
pub struct CircularList<T> {
    id: ListId,
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    first: Option<usize>,
    len: usize,
}

impl<T> CircularList<T> {
    pub fn new() -> Self {
        Self {
            id: ListId::fresh(),
            slots: Vec::new(),
            free: Vec::new(),
            first: None,
            len: 0,
        }
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current `first` element, `None` when the ring is empty
    pub fn first(&self) -> Option<Element> {
        self.first.map(|index| self.handle(index))
    }

    /// Whether `element` is a live element of this ring
    pub fn contains(&self, element: Element) -> bool {
        self.slot_of(element).is_ok()
    }

    pub fn value(&self, element: Element) -> Result<&T> {
        let index = self.slot_of(element)?;
        self.slots[index]
            .value
            .as_ref()
            .ok_or(PathkitError::StaleElement)
    }

    pub fn value_mut(&mut self, element: Element) -> Result<&mut T> {
        let index = self.slot_of(element)?;
        self.slots[index]
            .value
            .as_mut()
            .ok_or(PathkitError::StaleElement)
    }

    pub fn next(&self, element: Element) -> Result<Element> {
        let index = self.slot_of(element)?;
        Ok(self.handle(self.slots[index].next))
    }

    pub fn prev(&self, element: Element) -> Result<Element> {
        let index = self.slot_of(element)?;
        Ok(self.handle(self.slots[index].prev))
    }

    /// Add `value` just before `first`, i.e. at the end of the ring when
    /// read from `first`. The first value inserted into an empty ring
    /// becomes `first`.
    pub fn insert(&mut self, value: T) -> Element {
        let index = self.allocate(value);
        match self.first {
            Some(first) => {
                let last = self.slots[first].prev;
                self.link_after(last, index);
            }
            None => self.first = Some(index),
        }
        self.len += 1;
        self.handle(index)
    }

    /// Unlink `element` and return its value. Removing `first` advances
    /// `first` to its former next; removing the last element empties the ring.
    pub fn remove(&mut self, element: Element) -> Result<T> {
        let index = self.slot_of(element)?;
        if self.len == 1 {
            self.first = None;
        } else if self.first == Some(index) {
            self.first = Some(self.slots[index].next);
        }
        self.unlink(index);
        self.len -= 1;

        let slot = &mut self.slots[index];
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        slot.value.take().ok_or(PathkitError::StaleElement)
    }

    /// Insert a new value immediately after `target`
    pub fn insert_after(&mut self, target: Element, value: T) -> Result<Element> {
        let anchor = self.slot_of(target)?;
        let index = self.allocate(value);
        self.link_after(anchor, index);
        self.len += 1;
        Ok(self.handle(index))
    }

    /// Insert a new value immediately before `target`
    pub fn insert_before(&mut self, target: Element, value: T) -> Result<Element> {
        let anchor = self.slot_of(target)?;
        let before = self.slots[anchor].prev;
        let index = self.allocate(value);
        self.link_after(before, index);
        self.len += 1;
        Ok(self.handle(index))
    }

    /// Move an existing `element` to sit immediately after `target`.
    ///
    /// No-op when it is already there. The handle stays valid; if it was
    /// `first`, `first` advances to its former next.
    pub fn move_after(&mut self, target: Element, element: Element) -> Result<()> {
        let anchor = self.slot_of(target)?;
        let index = self.slot_of(element)?;
        if anchor == index {
            return Err(PathkitError::SelfInsertion);
        }
        if self.slots[anchor].next == index {
            return Ok(());
        }

        self.detach(index);
        self.link_after(anchor, index);
        Ok(())
    }

    /// Move an existing `element` to sit immediately before `target`.
    /// Same rules as [`move_after`](Self::move_after).
    pub fn move_before(&mut self, target: Element, element: Element) -> Result<()> {
        let anchor = self.slot_of(target)?;
        let index = self.slot_of(element)?;
        if anchor == index {
            return Err(PathkitError::SelfInsertion);
        }
        if self.slots[anchor].prev == index {
            return Ok(());
        }

        self.detach(index);
        let before = self.slots[anchor].prev;
        self.link_after(before, index);
        Ok(())
    }

    /// Exchange the ring positions of `a` and `b`. Both handles stay valid
    /// and follow their values; `first` follows the position.
    pub fn swap(&mut self, a: Element, b: Element) -> Result<()> {
        let ia = self.slot_of(a)?;
        let ib = self.slot_of(b)?;
        if ia == ib {
            return Ok(());
        }

        if self.slots[ia].next == ib {
            self.unlink(ia);
            self.link_after(ib, ia);
        } else if self.slots[ib].next == ia {
            self.unlink(ib);
            self.link_after(ia, ib);
        } else {
            let pa = self.slots[ia].prev;
            let pb = self.slots[ib].prev;
            self.unlink(ia);
            self.link_after(pb, ia);
            self.unlink(ib);
            self.link_after(pa, ib);
        }

        if self.first == Some(ia) {
            self.first = Some(ib);
        } else if self.first == Some(ib) {
            self.first = Some(ia);
        }
        Ok(())
    }

    /// Element `n` steps from `element`: forward for positive `n`, backward
    /// for negative. `n` is reduced modulo `len()` and the shorter way
    /// around the ring is walked.
    pub fn forward(&self, element: Element, n: i64) -> Result<Element> {
        let mut index = self.slot_of(element)?;
        let steps = n.rem_euclid(self.len as i64) as usize;
        if steps <= self.len / 2 {
            for _ in 0..steps {
                index = self.slots[index].next;
            }
        } else {
            for _ in steps..self.len {
                index = self.slots[index].prev;
            }
        }
        Ok(self.handle(index))
    }

    /// First element, scanning one lap from `first`, whose value matches
    pub fn first_where(&self, mut predicate: impl FnMut(&T) -> bool) -> Result<Element> {
        let mut index = self.first.ok_or(PathkitError::EmptyRing)?;
        for _ in 0..self.len {
            let slot = &self.slots[index];
            if slot.value.as_ref().is_some_and(&mut predicate) {
                return Ok(self.handle(index));
            }
            index = slot.next;
        }
        Err(PathkitError::NoMatch)
    }

    /// Values in ring order starting at `first`
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            cursor: self.first.unwrap_or_default(),
            remaining: self.len,
        }
    }

    /// Handles in ring order starting at `first`
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        let mut cursor = self.first.unwrap_or_default();
        (0..self.len).map(move |_| {
            let index = cursor;
            cursor = self.slots[index].next;
            self.handle(index)
        })
    }

    fn handle(&self, index: usize) -> Element {
        Element {
            list: self.id,
            slot: index,
            generation: self.slots[index].generation,
        }
    }

    fn slot_of(&self, element: Element) -> Result<usize> {
        if element.list != self.id {
            return Err(PathkitError::ForeignElement {
                expected: self.id,
                found: element.list,
            });
        }
        match self.slots.get(element.slot) {
            Some(slot) if slot.generation == element.generation && slot.value.is_some() => {
                Ok(element.slot)
            }
            _ => Err(PathkitError::StaleElement),
        }
    }

    /// Take a slot for `value`, self-linked and not yet in the ring
    fn allocate(&mut self, value: T) -> usize {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.value = Some(value);
                slot.next = index;
                slot.prev = index;
                index
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    value: Some(value),
                    generation: 0,
                    next: index,
                    prev: index,
                });
                index
            }
        }
    }

    fn link_after(&mut self, anchor: usize, index: usize) {
        let after = self.slots[anchor].next;
        self.slots[index].prev = anchor;
        self.slots[index].next = after;
        self.slots[anchor].next = index;
        self.slots[after].prev = index;
    }

    /// Stitch the neighbors of `index` together. `first` and `len` are untouched.
    fn unlink(&mut self, index: usize) {
        let prev = self.slots[index].prev;
        let next = self.slots[index].next;
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
        self.slots[index].prev = index;
        self.slots[index].next = index;
    }

    /// Unlink an element that is about to be re-linked elsewhere
    fn detach(&mut self, index: usize) {
        if self.first == Some(index) {
            self.first = Some(self.slots[index].next);
        }
        self.unlink(index);
    }
}

impl<T: Clone> CircularList<T> {
    /// Values in ring order starting at `first`
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert(value);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over the values of a [`CircularList`], one lap from `first`.
///
/// Created by [`CircularList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    cursor: usize,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slots = self.slots;
        let slot = &slots[self.cursor];
        self.cursor = slot.next;
        self.remaining -= 1;
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
