#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use alloc::rc::Rc;
use core::fmt;
use static_assertions::assert_eq_size;
use static_assertions::assert_not_impl_any;

/// The error returned by `try_push_back` on failure to allocate memory.

#[cfg(feature = "allocator_api")]
#[derive(Clone, Copy)]
pub struct AllocError;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly linked list of values of type `T`.
///
/// A list owns its nodes exclusively until [`splice`](List::splice) makes a
/// suffix shared with another list or a handle from
/// [`node_at`](List::node_at) keeps a node alive. Reading shared nodes is
/// always fine; mutating through one panics.

pub struct List<T> {
  head: Link<T>,
}

/// A single node of a [`List`].
///
/// Handles to nodes come from [`node_at`](List::node_at) and
/// [`intersection`]. A handle keeps its node, and everything after it, alive
/// independently of any list.

pub struct Node<T> {
  value: T,
  next: Link<T>,
}

/// A borrowing iterator over the values of a [`List`], front to back.

pub struct Iter<'a, T> {
  link: Option<&'a Node<T>>,
}

/// Displays a [`List`] back to front. See
/// [`display_rev`](List::display_rev).

pub struct DisplayRev<'a, T> {
  link: Option<&'a Node<T>>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

struct Link<T>(Option<Rc<Node<T>>>);

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// CONSTANTS                                                                  //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

assert_eq_size!(Link<u8>, *const u8);

assert_not_impl_any!(List<u8>: Send, Sync);

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(never)]
#[cold]
fn shared_node_panic() -> ! {
  panic!("wye: attempted to mutate a shared node!")
}

#[inline(always)]
fn unique<T>(rc: &mut Rc<Node<T>>) -> &mut Node<T> {
  match Rc::get_mut(rc) {
    Some(node) => node,
    None => shared_node_panic(),
  }
}

#[inline(always)]
fn into_unique<T>(rc: Rc<Node<T>>) -> Node<T> {
  match Rc::try_unwrap(rc) {
    Ok(node) => node,
    Err(_) => shared_node_panic(),
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Link                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> Drop for Link<T> {
  fn drop(&mut self) {
    // NB: This runs for the head of a `List` and for the `next` edge inside
    // any node a handle releases. A shared suffix is skipped until its last
    // owner reaches it, so it is freed exactly once, without recursion.
    let mut link = self.0.take();
    while let Some(rc) = link {
      match Rc::try_unwrap(rc) {
        Ok(mut node) => link = node.next.0.take(),
        Err(_) => break,
      }
    }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T> {
  /// An empty list.

  #[inline(always)]
  pub const fn new() -> Self {
    List { head: Link(None) }
  }

  /// Whether the list has no nodes.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.0.is_none()
  }

  /// Appends a value at the tail of the list.
  ///
  /// Walks the whole list, so appending is `O(len)`.
  ///
  /// # Panics
  ///
  /// Panics if a node is shared, either with another list or through an
  /// outstanding handle, and on failure to allocate memory.

  pub fn push_back(&mut self, value: T) {
    let node = Rc::new(Node { value, next: Link(None) });
    let mut cur = &mut self.head.0;
    while let Some(next) = cur {
      cur = &mut unique(next).next.0;
    }
    *cur = Some(node);
  }

  /// Appends a value at the tail of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.
  ///
  /// # Panics
  ///
  /// Panics if a node is shared, either with another list or through an
  /// outstanding handle.

  #[cfg(feature = "allocator_api")]
  pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
    let node = Rc::try_new(Node { value, next: Link(None) })
      .map_err(|_| AllocError)?;
    let mut cur = &mut self.head.0;
    while let Some(next) = cur {
      cur = &mut unique(next).next.0;
    }
    *cur = Some(node);
    Ok(())
  }

  /// Unlinks the first node whose value equals `value` and returns its
  /// value, or `None` if no node matches.
  ///
  /// # Panics
  ///
  /// Panics if a node up to and including the match is shared, either with
  /// another list or through an outstanding handle.

  pub fn remove(&mut self, value: &T) -> Option<T>
  where
    T: PartialEq
  {
    let mut cur = &mut self.head.0;
    while cur.as_ref().is_some_and(|node| node.value != *value) {
      let Some(next) = cur else { break };
      cur = &mut unique(next).next.0;
    }
    let mut node = into_unique(cur.take()?);
    *cur = node.next.0.take();
    Some(node.value)
  }

  /// Reverses the list in place.
  ///
  /// Links are turned around one node at a time. No values move and nothing
  /// is allocated.
  ///
  /// # Panics
  ///
  /// Panics if a node is shared, either with another list or through an
  /// outstanding handle.

  pub fn reverse(&mut self) {
    let mut prev = None;
    let mut cur = self.head.0.take();
    while let Some(mut rc) = cur {
      let node = unique(&mut rc);
      cur = node.next.0.take();
      node.next.0 = prev;
      prev = Some(rc);
    }
    self.head.0 = prev;
  }

  /// An iterator over the values of the list, front to back.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter { link: self.head.0.as_deref() }
  }

  /// A handle to the node at `index`, counting from zero at the head, or
  /// `None` if the list is shorter than that.

  pub fn node_at(&self, index: usize) -> Option<Rc<Node<T>>> {
    let mut index = index;
    let mut link = self.head.0.as_ref();
    while index > 0 {
      link = link?.next.0.as_ref();
      index -= 1;
    }
    link.cloned()
  }

  /// Links `node`, and everything after it, at the tail of the list.
  ///
  /// If another list still reaches `node`, the two lists share a suffix
  /// from `node` on, and [`intersection`] reports `node` as the junction.
  ///
  /// # Panics
  ///
  /// Panics if a node already in the list is shared, either with another
  /// list or through an outstanding handle. In particular, splicing a list
  /// into itself panics rather than closing a cycle, since the handle
  /// itself keeps its node shared.

  pub fn splice(&mut self, node: Rc<Node<T>>) {
    let mut cur = &mut self.head.0;
    while let Some(next) = cur {
      cur = &mut unique(next).next.0;
    }
    *cur = Some(node);
  }

  /// Displays the list back to front.
  ///
  /// Rendering recurses once per node, so a very long list can overflow the
  /// stack.

  #[inline(always)]
  pub fn display_rev(&self) -> DisplayRev<'_, T> {
    DisplayRev { link: self.head.0.as_deref() }
  }
}

impl<T> Default for List<T> {
  #[inline(always)]
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Display> fmt::Display for List<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for value in self {
      write!(f, "{} -> ", value)?;
    }
    f.write_str("NULL")
  }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self).finish()
  }
}

impl<'a, T> IntoIterator for &'a List<T> {
  type Item = &'a T;

  type IntoIter = Iter<'a, T>;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> Node<T> {
  /// The value stored in this node.

  #[inline(always)]
  pub fn value(&self) -> &T {
    &self.value
  }

  /// The node after this one, if any.

  #[inline(always)]
  pub fn next(&self) -> Option<&Rc<Node<T>>> {
    self.next.0.as_ref()
  }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Node").field(&self.value).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iter                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a T> {
    let node = self.link?;
    self.link = node.next.0.as_deref();
    Some(&node.value)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// DisplayRev                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn fmt_rev<T: fmt::Display>(link: Option<&Node<T>>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
  let Some(node) = link else { return Ok(()) };
  fmt_rev(node.next.0.as_deref(), f)?;
  write!(f, "{} -> ", node.value)
}

impl<'a, T: fmt::Display> fmt::Display for DisplayRev<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_rev(self.link, f)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// intersection                                                               //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// The junction of two lists, if they share a suffix.
///
/// Returns a handle to the first node reachable from both lists, or `None`
/// when either list is empty or the lists are disjoint. Nodes are compared
/// by identity, never by value. Runs in `O(len(a) + len(b))` time and
/// constant space.

pub fn intersection<T>(a: &List<T>, b: &List<T>) -> Option<Rc<Node<T>>> {
  if a.is_empty() || b.is_empty() {
    return None;
  }

  // Each cursor walks its own list, then once across the other. Both cover
  // the same distance, so they land on the junction in step, or on the two
  // ends in step.
  let mut x = a.head.0.as_ref();
  let mut y = b.head.0.as_ref();

  loop {
    match (x, y) {
      (Some(p), Some(q)) if Rc::ptr_eq(p, q) => return Some(Rc::clone(p)),
      (None, None) => return None,
      _ => {
        x = match x { Some(p) => p.next.0.as_ref(), None => b.head.0.as_ref() };
        y = match y { Some(q) => q.next.0.as_ref(), None => a.head.0.as_ref() };
      }
    }
  }
}
