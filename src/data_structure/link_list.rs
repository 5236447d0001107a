use std::alloc::{alloc, Layout};
use std::fmt;

use log::{debug, trace};

use crate::error::{ListError, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a detached node, reporting exhaustion instead of aborting.
    fn alloc(data: T) -> Result<Box<Node<T>>> {
        let layout = Layout::new::<Node<T>>();
        // SAFETY: Node<T> always carries a link, so `layout` is never zero sized.
        let ptr = unsafe { alloc(layout) } as *mut Node<T>;
        if ptr.is_null() {
            debug!("node allocation of {} bytes failed", layout.size());
            return Err(ListError::AllocationError);
        }
        // SAFETY: `ptr` is non-null and came from the global allocator with
        // `Layout::new::<Node<T>>()`, the layout `Box::from_raw` frees with.
        unsafe {
            ptr.write(Node { data, next: None });
            Ok(Box::from_raw(ptr))
        }
    }
}

/// Order in which bulk construction links the incoming values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOrder {
    /// Every value becomes the new first element; the list ends up reversed.
    Head,
    /// Every value is appended; the list keeps the input order.
    Tail,
}

/// Singly linked list addressed by 1-based positions.
///
/// The list value itself is the header: `head` is the header's link and
/// the predecessor of position 1. The length is never cached; it is
/// recounted from the links whenever it is asked for.
pub struct LinkList<T> {
    head: Link<T>,
}

pub struct IntoIter<T>(LinkList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.data
        })
    }
}

fn out_of_range(position: usize, len: usize) -> ListError {
    debug!("position {} rejected, list length is {}", position, len);
    ListError::PositionOutOfRange { position, len }
}

impl<T> LinkList<T> {
    /// Creates an empty list: a header with no successor.
    pub fn new() -> Self {
        LinkList { head: None }
    }

    /// Builds a list from `values`, linking each one at the head or the tail.
    ///
    /// If a node cannot be allocated midway, the nodes built so far are
    /// released and `AllocationError` is returned.
    pub fn from_values<I>(values: I, order: InsertOrder) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = LinkList::new();
        match order {
            InsertOrder::Head => {
                for data in values {
                    list.push_front(data)?;
                }
            }
            InsertOrder::Tail => {
                let mut tail = &mut list.head;
                for data in values {
                    let node = Node::alloc(data)?;
                    tail = &mut tail.insert(node).next;
                }
            }
        }
        trace!("built list of {} nodes by {:?} insertion", list.len(), order);
        Ok(list)
    }

    /// Number of elements, counted by walking the whole chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the element at `position` (1-based).
    pub fn get(&self, position: usize) -> Result<&T> {
        let mut link = self.head.as_deref();
        let mut reached = 0;
        while let Some(node) = link {
            reached += 1;
            if reached == position {
                return Ok(&node.data);
            }
            link = node.next.as_deref();
        }
        Err(out_of_range(position, reached))
    }

    pub fn get_mut(&mut self, position: usize) -> Result<&mut T> {
        let mut link = self.head.as_deref_mut();
        let mut reached = 0;
        while let Some(node) = link {
            reached += 1;
            if reached == position {
                return Ok(&mut node.data);
            }
            link = node.next.as_deref_mut();
        }
        Err(out_of_range(position, reached))
    }

    /// Inserts `data` so that it becomes the element at `position`.
    ///
    /// Valid positions are `1..=len + 1`; `len + 1` appends. Elements from
    /// `position` onwards shift back by one.
    pub fn insert(&mut self, position: usize, data: T) -> Result<()> {
        if position == 0 {
            return Err(out_of_range(position, self.len()));
        }
        let slot = match self.link_mut(position - 1) {
            Ok(slot) => slot,
            Err(len) => return Err(out_of_range(position, len)),
        };
        let mut node = Node::alloc(data)?;
        node.next = slot.take();
        *slot = Some(node);
        trace!("inserted node at position {}", position);
        Ok(())
    }

    /// Unlinks the element at `position` (1-based) and returns it.
    pub fn delete(&mut self, position: usize) -> Result<T> {
        if position == 0 {
            return Err(out_of_range(position, self.len()));
        }
        let slot = match self.link_mut(position - 1) {
            Ok(slot) => slot,
            Err(len) => return Err(out_of_range(position, len)),
        };
        match slot.take() {
            Some(node) => {
                let node = *node;
                *slot = node.next;
                trace!("deleted node at position {}", position);
                Ok(node.data)
            }
            None => Err(out_of_range(position, position - 1)),
        }
    }

    /// Position of the first element equal to `data`, if any.
    pub fn locate(&self, data: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .position(|x| x == data)
            .map(|idx| idx + 1)
    }

    /// Releases every node; the header stays and the list is empty again.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        let mut released = 0usize;
        while let Some(mut node) = link {
            link = node.next.take();
            released += 1;
        }
        if released > 0 {
            trace!("cleared {} nodes", released);
        }
    }

    pub fn push_front(&mut self, data: T) -> Result<()> {
        let mut node = Node::alloc(data)?;
        node.next = self.head.take();
        self.head = Some(node);
        Ok(())
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|x| &x.data)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|x| {
            let x = *x;
            self.head = x.next;
            x.data
        })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { next: self.head.as_deref_mut() }
    }

    /// Link slot owned by the node at `position`, the header being position 0.
    ///
    /// When the chain ends first, the number of nodes walked (the length)
    /// is returned instead.
    fn link_mut(&mut self, position: usize) -> std::result::Result<&mut Link<T>, usize> {
        let mut link = &mut self.head;
        for reached in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => return Err(reached),
            }
        }
        Ok(link)
    }
}

impl<T> Default for LinkList<T> {
    fn default() -> Self {
        LinkList::new()
    }
}

impl<T> Drop for LinkList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> IntoIterator for LinkList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for LinkList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Elements separated by single spaces.
impl<T: fmt::Display> fmt::Display for LinkList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for data in iter {
                write!(f, " {}", data)?;
            }
        }
        Ok(())
    }
}
