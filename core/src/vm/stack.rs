use core::fmt;

use smallvec::SmallVec;

/// Returned by [`Stack::push`] when the stack is already at its maximum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    pub max_size: usize,
}

/// A value stack with an enforced maximum size.
///
/// Shallow stacks, which is what almost every expression needs, live inline
/// without touching the heap.
///
/// # Examples
///
/// ```ignore
/// use scalc_core::vm::Stack;
///
/// let mut stack = Stack::new(100);
/// stack.push(42).unwrap();
/// stack.push(17).unwrap();
/// assert_eq!(stack.pop(), Some(17));
/// assert_eq!(stack.peek(), Some(&42));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T> {
    items: SmallVec<[T; 8]>,
    max_size: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack that refuses to grow past `max_size` elements.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: SmallVec::new(),
            max_size,
        }
    }

    /// Pushes a value onto the stack.
    ///
    /// Fails without modifying the stack if it is already full.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Overflow> {
        if self.items.len() >= self.max_size {
            return Err(Overflow {
                max_size: self.max_size,
            });
        }
        self.items.push(value);
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes the top `N` elements, returned bottom to top.
    ///
    /// Returns `None` and leaves the stack untouched if there are fewer than
    /// `N` elements.
    ///
    /// ```ignore
    /// let mut stack = Stack::new(10);
    /// for i in 1..=4 { stack.push(i).unwrap(); }
    /// assert_eq!(stack.pop_n::<3>(), Some([2, 3, 4]));
    /// assert_eq!(stack.len(), 1);
    /// ```
    pub fn pop_n<const N: usize>(&mut self) -> Option<[T; N]> {
        let len = self.items.len();
        if len < N {
            return None;
        }
        let popped: SmallVec<[T; N]> = self.items.drain(len - N..).collect();
        popped.into_inner().ok()
    }

    /// Returns a reference to the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a reference to the element `offset` positions below the top.
    ///
    /// `offset = 0` is the top element.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<&T> {
        let len = self.items.len();
        if offset >= len {
            None
        } else {
            self.items.get(len - 1 - offset)
        }
    }

    /// Exchanges the top two elements. Returns `false` if there are fewer
    /// than two.
    pub fn swap_top(&mut self) -> bool {
        let len = self.items.len();
        if len < 2 {
            return false;
        }
        self.items.swap(len - 1, len - 2);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of elements the stack accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Consumes the stack, returning its contents bottom to top.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

impl<T: Clone> Stack<T> {
    /// Pushes a copy of the element `offset` positions below the top.
    ///
    /// Returns `Ok(false)` if there is no such element.
    pub fn copy_from(&mut self, offset: usize) -> Result<bool, Overflow> {
        match self.peek_at(offset).cloned() {
            Some(value) => self.push(value).map(|()| true),
            None => Ok(false),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .field("capacity", &self.max_size)
            .finish()
    }
}
