use alloc::boxed::Box;

use crate::Reflect;

/// A sequence or set, visited in its own iteration order.
pub trait List: Reflect {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;
}
