use crate::error::{HuffmanError, Result};

/// Something with a priority, lowest comes out first.
pub trait Weighted {
    fn weight(&self) -> u64;
}

/// Binary min-heap over a fixed array.
///
/// `len` is the logical size; slots past it hold stale values and are
/// overwritten by later inserts. Ties keep whatever order the sifts leave
/// them in, so the order of the seeding array matters.
#[derive(Debug, Clone)]
pub struct MinQueue<T> {
    slots: Vec<T>,
    len: usize,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

impl<T: Weighted + Copy> MinQueue<T> {
    /// Turns `items` into a heap in place. The capacity is fixed to the
    /// number of items.
    pub fn heapify(items: Vec<T>) -> Self {
        let len = items.len();
        let mut queue = MinQueue { slots: items, len };
        for i in (0..len / 2).rev() {
            queue.sift_down(i);
        }
        queue
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn peek(&self) -> Option<&T> {
        self.slots[..self.len].first()
    }

    pub fn extract_min(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(HuffmanError::QueueEmpty);
        }
        let min = self.slots[0];
        self.len -= 1;
        self.slots[0] = self.slots[self.len];
        self.sift_down(0);
        Ok(min)
    }

    pub fn insert(&mut self, item: T) -> Result<()> {
        if self.len == self.slots.len() {
            return Err(HuffmanError::QueueOverflow {
                capacity: self.slots.len(),
            });
        }
        let mut j = self.len;
        self.slots[j] = item;
        self.len += 1;

        while j > 0 && self.weight_at(j) < self.weight_at(parent(j)) {
            self.slots.swap(j, parent(j));
            j = parent(j);
        }
        Ok(())
    }

    /// Checks parent <= children over the logical size.
    pub fn is_heap(&self) -> bool {
        (1..self.len).all(|i| self.weight_at(parent(i)) <= self.weight_at(i))
    }

    fn weight_at(&self, i: usize) -> u64 {
        self.slots[i].weight()
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let (l, r) = (left(i), right(i));
            let mut smallest = i;
            if l < self.len && self.weight_at(l) < self.weight_at(smallest) {
                smallest = l;
            }
            if r < self.len && self.weight_at(r) < self.weight_at(smallest) {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.slots.swap(i, smallest);
            i = smallest;
        }
    }
}
