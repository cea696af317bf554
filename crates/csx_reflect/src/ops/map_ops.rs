use alloc::boxed::Box;

use crate::Reflect;

/// A key-value container, visited in its own iteration order.
pub trait Map: Reflect {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}
